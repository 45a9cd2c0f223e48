pub mod checklist;
pub mod job;
