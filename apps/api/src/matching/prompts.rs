// Oracle prompts for the matching module.

/// Upper bound on resume characters embedded in the keyword prompt.
pub const KEYWORD_PROMPT_MAX_CHARS: usize = 10_000;

/// Upper bound on resume characters embedded in the classification prompt.
pub const CLASSIFY_PROMPT_MAX_CHARS: usize = 2_000;

pub const KEYWORD_SYSTEM: &str = "\
You are an expert career advisor and job matching specialist with extensive experience \
in resume analysis and job recommendations. Extract relevant keywords accurately and efficiently.";

/// Replace `{document_text}` before sending.
pub const KEYWORD_PROMPT_TEMPLATE: &str = r#"Read the resume below and extract the professional keywords a recruiter would search for when looking for this candidate.

Order the keywords from most to least important. The first three are used verbatim as a job-search query, so they should be the candidate's target job title and core skills.

Return a JSON array of 5 to 15 strings, for example:
["Backend Engineer", "Rust", "PostgreSQL", "Distributed Systems", "Kubernetes"]

{json_only}
{not_a_resume}

RESUME:
"""{document_text}""""#;

/// Replace `{document_text}` before sending.
pub const CLASSIFY_PROMPT_TEMPLATE: &str = r#"Analyze this document and determine if it is a resume/CV. Look for:
- Professional experience, work history, or employment information
- Education background, degrees, or academic information
- Skills, qualifications, or professional competencies
- Contact information and personal details

Respond with ONLY a JSON object in this format:
{
  "isResume": true or false,
  "reason": "brief explanation"
}

Document text:
"""{document_text}""""#;
