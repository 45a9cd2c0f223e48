//! Relevance ranker: orders job postings by raw token overlap with a resume.
//!
//! score(posting) = number of tokens in the posting's description bag that
//! also occur anywhere in the resume bag. Repeats in the description count
//! each time; repeats in the resume do not. No length normalization, no IDF.

use std::collections::HashSet;

use crate::matching::tokenizer::tokenize;
use crate::models::job::{JobPosting, ScoredJobPosting};

/// Scores one description against a prepared resume vocabulary.
fn overlap_score(resume_vocab: &HashSet<String>, description: &str) -> usize {
    tokenize(description)
        .iter()
        .filter(|token| resume_vocab.contains(token.as_str()))
        .count()
}

/// Scores every posting and returns them by descending score.
///
/// Equal scores keep their input order (`sort_by` is stable).
pub fn rank_jobs(resume_text: &str, postings: Vec<JobPosting>) -> Vec<ScoredJobPosting> {
    let resume_vocab: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let mut scored: Vec<ScoredJobPosting> = postings
        .into_iter()
        .map(|posting| ScoredJobPosting {
            score: overlap_score(&resume_vocab, &posting.description),
            posting,
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            apply_link: "#".to_string(),
        }
    }

    fn titles(ranked: &[ScoredJobPosting]) -> Vec<&str> {
        ranked.iter().map(|s| s.posting.title.as_str()).collect()
    }

    #[test]
    fn test_empty_postings() {
        assert!(rank_jobs("", vec![]).is_empty());
        assert!(rank_jobs("anything", vec![]).is_empty());
    }

    #[test]
    fn test_empty_resume_scores_zero_and_keeps_order() {
        let ranked = rank_jobs(
            "",
            vec![posting("C", "rust"), posting("A", "java"), posting("B", "go")],
        );
        assert_eq!(titles(&ranked), vec!["C", "A", "B"]);
        assert!(ranked.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_jobs("java", vec![posting("A", "java"), posting("B", "java")]);
        assert_eq!(titles(&ranked), vec!["A", "B"]);
        assert_eq!(ranked[0].score, 1);
        assert_eq!(ranked[1].score, 1);
    }

    #[test]
    fn test_many_ties_are_stable() {
        let input: Vec<JobPosting> = (0..50)
            .map(|i| {
                let desc = if i % 3 == 0 { "rust python" } else { "rust" };
                posting(&format!("job-{i}"), desc)
            })
            .collect();
        let ranked = rank_jobs("rust python", input);

        let top: Vec<usize> = ranked
            .iter()
            .filter(|s| s.score == 2)
            .map(|s| s.posting.title["job-".len()..].parse().unwrap())
            .collect();
        let rest: Vec<usize> = ranked
            .iter()
            .filter(|s| s.score == 1)
            .map(|s| s.posting.title["job-".len()..].parse().unwrap())
            .collect();

        assert_eq!(top.len() + rest.len(), 50);
        assert!(top.windows(2).all(|w| w[0] < w[1]));
        assert!(rest.windows(2).all(|w| w[0] < w[1]));
        assert!(ranked[..top.len()].iter().all(|s| s.score == 2));
    }

    #[test]
    fn test_sorted_by_descending_overlap() {
        let ranked = rank_jobs(
            "Rust engineer with Kubernetes and PostgreSQL experience",
            vec![
                posting("Chef", "Cook pasta in a busy kitchen"),
                posting("Platform", "Rust services on Kubernetes backed by PostgreSQL"),
                posting("Backend", "Rust backend engineer"),
            ],
        );
        assert_eq!(titles(&ranked), vec!["Platform", "Backend", "Chef"]);
        assert_eq!(ranked[0].score, 3);
        assert_eq!(ranked[1].score, 2);
        assert_eq!(ranked[2].score, 0);
    }

    #[test]
    fn test_repeats_in_description_count_each_time() {
        let ranked = rank_jobs("java", vec![posting("A", "Java java JAVA spring")]);
        assert_eq!(ranked[0].score, 3);
    }

    #[test]
    fn test_repeats_in_resume_do_not_inflate() {
        let once = rank_jobs("python", vec![posting("A", "python")]);
        let many = rank_jobs("python python python", vec![posting("A", "python")]);
        assert_eq!(once[0].score, many[0].score);
    }

    #[test]
    fn test_extending_with_resume_tokens_strictly_increases() {
        let resume = "Distributed systems engineer: Rust, Kafka, Terraform";
        let base = "We hire people who ship";
        let before = rank_jobs(resume, vec![posting("P", base)])[0].score;

        let mut extended = base.to_string();
        let mut last = before;
        for extra in ["rust", "kafka terraform", "distributed"] {
            extended.push(' ');
            extended.push_str(extra);
            let score = rank_jobs(resume, vec![posting("P", &extended)])[0].score;
            assert!(score > last, "adding '{extra}' did not raise the score");
            last = score;
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        let ranked = rank_jobs("PYTHON Developer", vec![posting("A", "python developer")]);
        assert_eq!(ranked[0].score, 2);
    }
}
