//! Text normalizer: turns resume or posting text into a comparable token bag.
//!
//! Pipeline: lowercase → take whole words of at least 3 `a-z` letters.
//! Word boundaries are ASCII: a letter run glued to a digit or `_` (`python3`,
//! `foo_bar`) is not a word and yields nothing. Punctuation, whitespace and
//! non-ASCII characters separate words.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest run of letters kept as a token.
pub const MIN_TOKEN_LEN: usize = 3;

static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?-u:\b)[a-z]{{{MIN_TOKEN_LEN},}}(?-u:\b)")).unwrap()
});

/// Tokenizes `text` into a bag of lowercase words.
///
/// Duplicates are kept and order follows the source text.
///
/// ```ignore
/// assert_eq!(tokenize("Rust, SQL & C++ in 2024"), vec!["rust", "sql"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_symbolic_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 -- !!! 4.5%").is_empty());
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        assert_eq!(
            tokenize("Java developer, java JAVA"),
            vec!["java", "developer", "java", "java"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let samples = [
            "Senior Software Engineer at Acme",
            "rust/Go; PostgreSQL + redis",
            "john@x.com (555) 123-4567",
        ];
        for s in samples {
            assert_eq!(tokenize(s), tokenize(&s.to_uppercase()), "sample: {s}");
        }
    }

    #[test]
    fn test_short_words_are_dropped() {
        assert!(tokenize("a an to of be BS MS go").is_empty());
    }

    #[test]
    fn test_symbols_split_tokens() {
        assert_eq!(tokenize("node.js"), vec!["node"]);
        assert_eq!(tokenize("john@x.com"), vec!["john", "com"]);
        assert_eq!(tokenize("rust/go, c++ & kafka"), vec!["rust", "kafka"]);
    }

    #[test]
    fn test_letters_glued_to_digits_or_underscore_are_dropped() {
        assert!(tokenize("abc123def").is_empty());
        assert_eq!(
            tokenize("Python3 AWS S3 EC2 utf8 foo_bar k8s"),
            vec!["aws"]
        );
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(tokenize("café résumé"), vec!["caf", "sum"]);
    }

    #[test]
    fn test_every_token_is_lowercase_alpha_min_three() {
        let tokens = tokenize("Led 12 engineers; cut AWS costs by 40% (Q3-2023) @ MegaCorp!!");
        assert!(!tokens.is_empty());
        for t in &tokens {
            assert!(t.len() >= MIN_TOKEN_LEN);
            assert!(t.chars().all(|c| c.is_ascii_lowercase()), "bad token {t}");
        }
    }

    #[test]
    fn test_end_to_end_resume_sample() {
        let tokens = tokenize(
            "John Doe. Experience: Software Engineer at Acme. Education: BS Computer Science. \
             Skills: java python sql. Email: john@x.com",
        );
        for expected in [
            "experience",
            "software",
            "engineer",
            "education",
            "skills",
            "java",
            "python",
            "sql",
        ] {
            assert!(tokens.iter().any(|t| t == expected), "missing {expected}");
        }
        assert!(!tokens.iter().any(|t| t == "bs"));
        assert!(!tokens.iter().any(|t| t == "at"));
    }
}
