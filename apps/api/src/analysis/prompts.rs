// Oracle prompts for the analysis module.

/// Upper bound on resume characters embedded in the analysis prompt.
pub const ANALYZE_PROMPT_MAX_CHARS: usize = 10_000;

pub const ANALYZE_SYSTEM: &str = "You are an expert resume reviewer.";

/// Replace `{json_only}`, `{not_a_resume}` and `{document_text}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Review the resume below the way an experienced recruiter and an applicant tracking system (ATS) would.

Return a JSON object with this EXACT schema:
{
  "overallScore": "a score from 0 to 100, as a string",
  "strengths": ["what the resume does well"],
  "improvements": ["specific, actionable weaknesses"],
  "keywords": ["keywords the candidate should add or emphasise"],
  "summary": "two or three sentence overall assessment",
  "performanceMetrics": {
    "formatting": 0-10,
    "contentQuality": 0-10,
    "keywordUsage": 0-10,
    "atsCompatibility": 0-10,
    "quantifiableAchievements": 0-10
  },
  "actionItems": ["concrete next steps, most important first"],
  "proTips": ["short expert tips"],
  "atsChecklist": ["ATS issues found in this resume"]
}

{json_only}
{not_a_resume}

RESUME:
"""{document_text}""""#;
