use std::collections::HashSet;

use async_trait::async_trait;

use super::{MatchError, MatchPredictor};
use crate::models::{MatchPrediction, MatchRequest};

const MIN_KEYWORD_CHARS: usize = 4;
const MAX_LISTED: usize = 5;

const STOP_WORDS: &[&str] = &[
    "about", "across", "also", "been", "being", "both", "each", "from", "have", "into", "join",
    "looking", "more", "most", "other", "our", "over", "such", "than", "that", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "under", "very", "we", "were",
    "what", "when", "where", "which", "while", "will", "with", "within", "work", "would", "your",
];

/// Pure-Rust keyword overlap scorer. Fast, deterministic, no LLM call.
///
/// Algorithm:
/// 1. Keywords = distinct lowercase words of the description with at least
///    four letters, minus stop words, in order of first appearance.
/// 2. A keyword matches when it appears as a word in the resume.
/// 3. match_score = matched / total, rounded to two decimals (0.0 when the
///    description has no keywords).
pub struct KeywordMatchPredictor;

#[async_trait]
impl MatchPredictor for KeywordMatchPredictor {
    async fn predict(&self, request: &MatchRequest) -> Result<MatchPrediction, MatchError> {
        Ok(compute_keyword_match(&request.job_description, &request.resume))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn extract_keywords(description: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(description)
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|w| w.chars().any(char::is_alphabetic))
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

fn compute_keyword_match(description: &str, resume: &str) -> MatchPrediction {
    let keywords = extract_keywords(description);

    if keywords.is_empty() {
        return MatchPrediction {
            match_score: 0.0,
            reasons: "No keywords found in the job description, cannot score fit.".to_string(),
        };
    }

    let resume_words: HashSet<String> = words(resume).collect();
    let (matched, missing): (Vec<&String>, Vec<&String>) =
        keywords.iter().partition(|kw| resume_words.contains(*kw));

    let ratio = matched.len() as f64 / keywords.len() as f64;
    let match_score = (ratio * 100.0).round() / 100.0;

    MatchPrediction {
        match_score,
        reasons: build_reasons(match_score, &matched, &missing),
    }
}

fn build_reasons(score: f64, matched: &[&String], missing: &[&String]) -> String {
    let list = |items: &[&String]| {
        items
            .iter()
            .take(MAX_LISTED)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let percent = (score * 100.0).round() as u32;
    let mut reasons = if score >= 0.8 {
        format!("Strong fit ({percent}%). The resume covers most of the role's key terms")
    } else if score >= 0.5 {
        format!("Moderate fit ({percent}%)")
    } else {
        format!("Low fit ({percent}%)")
    };

    if !matched.is_empty() {
        reasons.push_str(&format!(". Matched: {}", list(matched)));
    }
    if !missing.is_empty() {
        reasons.push_str(&format!(". Missing: {}", list(missing)));
    }
    reasons.push('.');
    reasons
}
