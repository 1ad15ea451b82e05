//! Field deserializers for model-produced JSON, which often carries `null` where a value is
//! expected or quotes numbers as strings.

use serde::{de, Deserialize, Deserializer};

/// `null` reads as the field's default; any other value deserializes normally.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts `85`, `"85"`, `"85%"` or `null` (read as 0).
pub fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim().trim_end_matches('%').trim();
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| de::Error::custom(format!("expected a number, got {text:?}")))
        }
    }
}
