// Shared prompt fragments.
// Each module that calls the oracle keeps its own prompts.rs alongside it;
// this file only holds the cross-cutting pieces.

use once_cell::sync::Lazy;
use regex::Regex;

/// Appended to every prompt that expects a machine-readable reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction telling the oracle how to refuse a document that is not a resume.
pub const NOT_A_RESUME_INSTRUCTION: &str = "\
    If the document is clearly not a resume or CV, respond with exactly \
    {\"error\": \"This document does not appear to be a resume.\"} instead.";

/// Greedy span from the first `{` to the last `}` of an oracle reply.
pub static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Returns at most `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_is_untouched() {
        assert_eq!(truncate_chars("resume", 10), "resume");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_json_object_spans_first_to_last_brace() {
        let reply = "Sure:\n{\"a\": 1} and {\"b\": 2}\nthanks";
        assert_eq!(
            JSON_OBJECT.find(reply).map(|m| m.as_str()),
            Some("{\"a\": 1} and {\"b\": 2}")
        );
        assert!(JSON_OBJECT.find("no braces here").is_none());
    }
}
