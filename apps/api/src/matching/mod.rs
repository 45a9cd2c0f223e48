// Resume-to-job matching: tokenizer, keyword extraction, relevance ranking,
// ATS presence checklist and the resume gate.
// All oracle calls go through llm_client.

pub mod checklist;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod job_search;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod ranker;
pub mod tokenizer;
