// Prompt templates for the enhancement pipeline.
// `{resume}` is substituted with the extracted resume text before sending.

pub const ENHANCEMENT_PROMPT_TEMPLATE: &str = r#"
You are a highly experienced resume coach and expert resume writer.

Your goal is to enhance the following resume content and generate:
1. A list of clear, impactful, ATS-optimized suggestions.
2. A rewritten resume that is:
   - Professionally structured (Summary, Skills, Experience, Education, Projects, Achievements).
   - Keyword-rich and ATS-friendly.
   - Clean, modern, and ideally one page.
   - Improved with any available public profile content (LinkedIn, GitHub) if present in the resume.

Resume Input:
{resume}

Instructions:
- If the resume includes a LinkedIn or GitHub URL, extract valuable project descriptions, contributions, or achievements from them.
- Add a 'Projects' section if relevant projects or repos are available or can be inferred.
- Include a concise 'Achievements' section if accomplishments (awards, ranks, recognitions) are found or inferred.
- Reword experiences with measurable impact and bullet formatting.

Respond in the format:

Suggestions:
1. ...
2. ...
3. ...

Enhanced Resume:
Name: ...
Email: ...
LinkedIn: ...
GitHub: ...

Summary:
...

Experience:
- Role, Company (Dates)
  • Responsibility or achievement
  • Responsibility or achievement

Projects:
- Project Title
  • Description or technology used

Achievements:
- Achievement 1
- Achievement 2

Education:
- Degree, Institution, Year

Skills:
- Skill 1, Skill 2, Skill 3
"#;

/// Fills the enhancement template with the extracted resume text.
pub fn build_enhancement_prompt(resume_text: &str) -> String {
    ENHANCEMENT_PROMPT_TEMPLATE.replace("{resume}", resume_text)
}
