//! Task templates: the fixed (instruction, prompt builder, expected shape) triple for one use case.

use std::fmt;

use serde_json::Value;

/// The kind of JSON value a template expects the model to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    /// Opening and closing delimiter of this shape.
    pub fn delimiters(self) -> (char, char) {
        match self {
            Shape::Object => ('{', '}'),
            Shape::Array => ('[', ']'),
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Object => value.is_object(),
            Shape::Array => value.is_array(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Object => f.write_str("object"),
            Shape::Array => f.write_str("array"),
        }
    }
}

/// One use case's request definition. Pure data plus one pure rendering function;
/// the client never inspects the prompt text.
pub struct TaskTemplate<P> {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// System instruction. Must tell the model to reply with JSON only.
    pub system: &'static str,
    /// Renders the profile into the user message, schema example included.
    pub render: fn(&P) -> String,
    pub shape: Shape,
    /// Output budget used unless the client options override it.
    pub max_tokens: u32,
}

impl<P> TaskTemplate<P> {
    pub fn user_prompt(&self, profile: &P) -> String {
        (self.render)(profile)
    }
}

/// Replaces every `{key}` placeholder in `template` with its value, in a single pass.
///
/// Substituted text is never rescanned. Braces that do not wrap a known key are kept.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let key_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let key = &after[..key_len];

        let value = if key_len > 0 && after[key_len..].starts_with('}') {
            values.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        } else {
            None
        };

        match value {
            Some(value) => {
                out.push_str(value);
                rest = &after[key_len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
