//! Overlap scoring between keyword sets.

use std::collections::BTreeSet;

/// Outcome of comparing resume keywords against a job description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub score: u32,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// Scores resume keywords against job-description keywords.
///
/// The score is the percentage of job-description keywords found in the
/// resume, truncated to a whole number. Resume keywords outside the job
/// description neither help nor hurt. An empty job description scores 0.
pub fn score_keywords(resume: &BTreeSet<String>, jd: &BTreeSet<String>) -> MatchResult {
    let matched: BTreeSet<String> = jd.intersection(resume).cloned().collect();
    let missing: BTreeSet<String> = jd.difference(resume).cloned().collect();
    let score = if jd.is_empty() {
        0
    } else {
        (matched.len() * 100 / jd.len()) as u32
    };

    MatchResult {
        score,
        matched,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
