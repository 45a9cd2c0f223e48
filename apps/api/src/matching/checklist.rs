//! ATS presence checklist: a fixed rubric of content signals checked
//! against resume text with case-insensitive regex presence tests.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::checklist::PresenceChecklistItem;

/// One rubric line: the label shown to users and the pattern that proves it.
struct Criterion {
    label: &'static str,
    pattern: &'static str,
}

/// Evaluation order is the declaration order below.
const CRITERIA: &[Criterion] = &[
    Criterion {
        label: "Contains contact email",
        pattern: r"[a-z0-9._%+-]+@[a-z0-9-]+(\.[a-z0-9-]+)*\.[a-z]{2,}",
    },
    Criterion {
        label: "Contains phone number",
        pattern: r"(\+?\d{1,3}[\s.-]?)?(\(\d{2,4}\)|\d{2,4})[\s.-]?\d{3,4}[\s.-]?\d{3,4}",
    },
    Criterion {
        label: "Includes professional profile link (LinkedIn, GitHub or portfolio)",
        pattern: r"linkedin\.com|github\.com|https?://|www\.",
    },
    Criterion {
        label: "Has a summary/profile section",
        pattern: r"\b(summary|profile|objective|about me)\b",
    },
    Criterion {
        label: "Has a work experience section",
        pattern: r"\b(experience|employment|work history)\b",
    },
    Criterion {
        label: "Has an education section",
        pattern: r"\b(education|degree|university|college|bachelor|master)\b",
    },
    Criterion {
        label: "Has a skills section",
        pattern: r"\b(skills|technologies|competencies|tech stack)\b",
    },
    Criterion {
        label: "Lists quantifiable achievements",
        pattern: r"\d+(\.\d+)?\s*%|[$€£]\s?\d|\b\d+(\.\d+)?x\b|\b\d+\+?\s+(years?|months?|users|customers|clients|projects|people|engineers|members|countries)\b",
    },
    Criterion {
        label: "Uses standard section headers",
        pattern: r"(?m)^\s*(professional summary|summary|work experience|professional experience|experience|education|skills|projects|certifications)\s*:?\s*$",
    },
];

static COMPILED: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CRITERIA
        .iter()
        .map(|c| {
            let regex = Regex::new(&format!("(?i){}", c.pattern))
                .unwrap_or_else(|e| panic!("invalid checklist pattern for '{}': {e}", c.label));
            (c.label, regex)
        })
        .collect()
});

/// Evaluates every criterion against `text`. Pure; one item per criterion.
pub fn build_presence_checklist(text: &str) -> Vec<PresenceChecklistItem> {
    COMPILED
        .iter()
        .map(|(label, regex)| PresenceChecklistItem {
            label: label.to_string(),
            present: regex.is_match(text),
        })
        .collect()
}
