// All LLM prompt constants for the guidance features.
// Each *_PROMPT_TEMPLATE carries `{field}` placeholders filled from the matching profile,
// followed by an inline example of the exact JSON shape expected back.

pub const CAREER_PATH_SYSTEM: &str = "You are a career guidance expert. \
    Analyze the user's profile and recommend suitable career paths that align with their \
    skills, experience, and preferences, explaining each recommendation. \
    Your response must be a valid JSON array. \
    Do not include any explanatory text before or after the JSON array.";

pub const CAREER_PATH_PROMPT_TEMPLATE: &str = r#"Based on the following profile, recommend 3 suitable career paths and return ONLY a JSON array (no other text):
Desired Role: {desired_role}
Technical Skills: {technical_skills}
Soft Skills: {soft_skills}
Years of Experience: {experience_years}
Education Level: {education_level}
Preferred Industry: {preferred_industry}
Preferred Location: {preferred_location}
Work Preferences: {work_preferences}

Use this structure for each career path:
{
  "title": "Career Path Title",
  "description": "Detailed description of the career path",
  "required_skills": ["skill1", "skill2"],
  "salary_range": "Expected salary range in USD",
  "growth_potential": "Career growth and advancement opportunities",
  "why_recommended": "Explanation of why this career path matches the user's profile"
}"#;

pub const JOB_MATCH_SYSTEM: &str = "You are a job matching expert. \
    Analyze the user's profile and recommend suitable jobs that match their skills, \
    experience, and preferences, explaining each match. \
    Your response must be a valid JSON array. \
    Do not include any explanatory text before or after the JSON array.";

pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Based on the following profile, recommend 3 suitable jobs and return ONLY a JSON array (no other text):
Skills: {skills}
Experience: {experience}
Education: {education}
Preferred Industry: {preferred_industry}
Preferred Location: {preferred_location}
Work Preferences: {work_preferences}
Salary Expectations: {salary_expectations}

Use this structure for each job:
{
  "title": "Job Title",
  "company": "Company Name",
  "match_score": 85,
  "description": "Job description",
  "required_skills": ["skill1", "skill2"],
  "salary_range": "Range in USD",
  "location": "Job location",
  "why_match": "Explanation of why this job matches the user's profile"
}
match_score is a number from 0 to 100."#;

pub const SKILL_GAP_SYSTEM: &str = "You are a career development expert. \
    Your response must be a valid JSON array containing skill gaps. \
    Do not include any explanatory text before or after the JSON array.";

pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Analyze the skill gaps for this career transition and return ONLY a JSON array (no other text):
Current Role: {current_role}
Target Role: {target_role}
Current Skills: {current_skills}
Years of Experience: {experience_years}
Education Level: {education_level}
Preferred Learning Style: {preferred_learning_style}
Time Commitment: {time_commitment}

Use this structure for each skill gap:
{
  "skill": "Name of the skill",
  "current_level": "Current proficiency level",
  "required_level": "Required proficiency level",
  "importance": "Importance of this skill for the target role",
  "learning_path": ["Step 1", "Step 2"],
  "resources": ["Resource 1", "Resource 2"],
  "estimated_time": "Estimated time to acquire this skill"
}"#;

pub const INTERVIEW_PREP_SYSTEM: &str = "You are an expert interview coach. \
    Your response must be a valid JSON object containing interview preparation content. \
    Do not include any explanatory text before or after the JSON object.";

pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = r#"Create a comprehensive interview preparation guide for this role and return ONLY a JSON object (no other text):
Role: {role}
Company: {company}
Years of Experience: {experience_years}
Education Level: {education_level}
Technical Skills: {technical_skills}
Previous Interview Experience: {previous_interviews}

Return a JSON object with this structure:
{
  "common_questions": [
    {
      "question": "Common interview question",
      "tips": ["Tip 1", "Tip 2"],
      "sample_answer": "Sample answer"
    }
  ],
  "technical_questions": [
    {
      "question": "Technical question",
      "difficulty": "Easy/Medium/Hard",
      "explanation": "Explanation of the concept",
      "sample_answer": "Sample answer"
    }
  ],
  "behavioral_questions": [
    {
      "question": "Behavioral question",
      "what_they_look_for": ["Point 1", "Point 2"],
      "sample_answer": "Sample answer"
    }
  ],
  "interview_tips": ["Tip 1", "Tip 2"],
  "preparation_checklist": ["Item 1", "Item 2"]
}"#;

pub const SALARY_INSIGHTS_SYSTEM: &str = "You are a compensation and market analysis expert. \
    Your response must be a valid JSON object containing salary insights and trends. \
    Do not include any explanatory text before or after the JSON object.";

pub const SALARY_INSIGHTS_PROMPT_TEMPLATE: &str = r#"Analyze salary insights and trends for this role and return ONLY a JSON object (no other text):
Role: {role}
Location: {location}
Years of Experience: {experience_years}
Education Level: {education_level}
Industry: {industry}
Company Size: {company_size}

Return a JSON object with this structure:
{
  "salary_range": {
    "entry_level": "Salary range for entry level",
    "mid_level": "Salary range for mid level",
    "senior_level": "Salary range for senior level",
    "expert_level": "Salary range for expert level"
  },
  "market_trends": [
    {
      "trend": "Current market trend",
      "explanation": "Explanation of the trend",
      "impact": "Impact on salary"
    }
  ],
  "location_factors": [
    {
      "factor": "Location factor affecting salary",
      "impact": "How it affects salary",
      "tips": ["Tip 1", "Tip 2"]
    }
  ],
  "benefits_and_perks": {
    "common_benefits": ["Benefit 1", "Benefit 2"],
    "industry_specific": ["Industry benefit 1", "Industry benefit 2"],
    "negotiation_tips": ["Tip 1", "Tip 2"]
  },
  "growth_potential": {
    "career_path": ["Path 1", "Path 2"],
    "salary_progression": ["Progression 1", "Progression 2"],
    "skills_for_growth": ["Skill 1", "Skill 2"]
  }
}"#;

pub const CAREER_ROADMAP_SYSTEM: &str = "You are a career development expert specializing in \
    career and student planning. \
    Your response must be a valid JSON object containing a detailed career roadmap. \
    Do not include any explanatory text before or after the JSON object.";

pub const CAREER_ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed career roadmap for moving from the current role to the target role and return ONLY a JSON object (no other text):
Current Role: {current_role}
Target Role: {target_role}
Years of Experience: {experience_years}
Education Level: {education_level}
Current Skills: {current_skills}
Timeline (Years): {timeline_years}
Preferred Learning Style: {preferred_learning_style}
Is Student: {is_student}
Current Major: {current_major}
Current Year: {current_year}
GPA: {gpa}
Extracurricular Activities: {extracurricular_activities}
Internship Experience: {internship_experience}
Target Industry: {target_industry}

Return a JSON object with this structure:
{
  "current_state": {
    "skills": ["Current skill 1"],
    "experience": ["Experience 1"],
    "education": ["Education 1"],
    "certifications": ["Certification 1"],
    "academic_performance": ["Academic achievement 1"],
    "extracurricular_activities": ["Activity 1"]
  },
  "target_state": {
    "required_skills": ["Required skill 1"],
    "required_experience": ["Required experience 1"],
    "required_education": ["Required education 1"],
    "required_certifications": ["Required certification 1"],
    "industry_requirements": ["Industry requirement 1"]
  },
  "timeline": [
    {
      "phase": "Phase name",
      "duration": "Duration of phase",
      "milestones": [
        {
          "title": "Milestone title",
          "description": "Milestone description",
          "resources": ["Resource 1"],
          "estimated_time": "Estimated time to complete",
          "academic_requirements": ["Academic requirement 1"],
          "internship_opportunities": ["Opportunity 1"]
        }
      ]
    }
  ],
  "skill_gaps": [
    {
      "skill": "Skill name",
      "current_level": "Current proficiency level",
      "target_level": "Required proficiency level",
      "learning_path": ["Step 1"],
      "resources": ["Resource 1"],
      "academic_courses": ["Course 1"],
      "online_courses": ["Course 1"]
    }
  ],
  "networking_strategy": {
    "platforms": ["Platform 1"],
    "communities": ["Community 1"],
    "events": ["Event 1"],
    "mentorship_opportunities": ["Opportunity 1"],
    "student_organizations": ["Organization 1"],
    "academic_networks": ["Network 1"]
  },
  "success_metrics": {
    "short_term": ["Metric 1"],
    "medium_term": ["Metric 1"],
    "long_term": ["Metric 1"],
    "academic_goals": ["Goal 1"],
    "career_goals": ["Goal 1"]
  }
}"#;

pub const CAREER_DEMAND_SYSTEM: &str = "You are a career market analyst. \
    Provide data about the most in-demand careers across all industries in the current job \
    market, mixing technology, healthcare, business, education, and other sectors. \
    Your response must be a valid JSON array. \
    Do not include any explanatory text before or after the JSON array.";

pub const CAREER_DEMAND_PROMPT: &str = r#"List the top 5 most in-demand careers across all industries in the current job market, with their demand scores (0-100). For each career, give a brief explanation of why it is in demand. Include a diverse mix of sectors. Return ONLY a JSON array:
[{"title": "Career Name", "demand": 90, "explanation": "Brief explanation"}]"#;

pub const SKILL_DEMAND_SYSTEM: &str = "You are a career development expert. \
    Your response must be a valid JSON array containing skill demand data. \
    Do not include any explanatory text before or after the JSON array.";

pub const SKILL_DEMAND_PROMPT: &str = r#"Analyze the current demand for skills in the job market and return ONLY a JSON array (no other text) with this structure:
[
  {
    "skill": "Name of the skill",
    "demand": "High/Medium/Low",
    "explanation": "Brief explanation of why this skill is in demand"
  }
]

Focus on a mix of technical and non-technical skills across various industries."#;

pub const TOP_JOBS_SYSTEM: &str = "You are a career expert specializing in salary information \
    and job market trends. Provide accurate, up-to-date information across various industries. \
    Return ONLY valid JSON without any markdown formatting or additional text. \
    Include realistic salary ranges based on current market data.";

pub const TOP_JOBS_PROMPT: &str = r#"List the top 3 highest paying jobs across different industries (not just tech).
Include a mix of industries like healthcare, finance, law, engineering, etc.
For each job, provide:
- Job title
- Industry sector
- Average salary range (in USD)
- Brief description of the role
- Projected growth rate over the next 5 years
- Key required skills (3-4 most important)

Format the response as a JSON array:
[
  {
    "title": "Job title",
    "industry": "Industry sector",
    "salary": "Salary range",
    "description": "Role description",
    "growth_rate": "Projected growth rate",
    "required_skills": ["Skill 1", "Skill 2", "Skill 3"]
  }
]"#;
