// Resume analysis: oracle-written review paired with the ATS presence checklist.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
