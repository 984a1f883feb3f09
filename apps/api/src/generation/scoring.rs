//! Match scoring — 0–100 compatibility between candidate skills and a
//! job's extracted required skills.
//!
//! Matching is containment, not equality: a candidate skill counts when its
//! lower-cased form contains any required skill. The numerator counts
//! matched *candidate* skills, so several candidate skills can match one
//! requirement; the clamp keeps the result in range.

use std::collections::BTreeSet;

/// Returned when either skill set is empty — sparse profiles and sparse
/// postings are not penalized with a zero.
pub const NEUTRAL_SCORE: u32 = 50;

const MAX_SCORE: u32 = 100;

/// Computes the match score. Always in [0, 100].
pub fn compute_match_score(candidate_skills: &[String], required_skills: &BTreeSet<String>) -> u32 {
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matched = matched_skills(candidate_skills, required_skills).len() as u32;
    (matched * 100 / required_skills.len() as u32).min(MAX_SCORE)
}

/// Candidate skills whose lower-cased form contains any required skill.
/// Order-preserving over the candidate list; also used by the fallback
/// composer to phrase the professional summary.
pub fn matched_skills<'a>(
    candidate_skills: &'a [String],
    required_skills: &BTreeSet<String>,
) -> Vec<&'a str> {
    candidate_skills
        .iter()
        .filter(|skill| {
            let lowered = skill.to_lowercase();
            required_skills
                .iter()
                .any(|required| lowered.contains(&required.to_lowercase()))
        })
        .map(String::as_str)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
