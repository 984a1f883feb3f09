//! Signal extraction — pulls required skills, ATS keywords, and an industry
//! label out of unstructured job-description text.
//!
//! Purely lexical: a fixed skill vocabulary scanned with a case-insensitive
//! Aho-Corasick automaton (substring semantics), a fixed importance
//! vocabulary for keywords, and an ordered industry list. Total over any
//! input, including the empty string — sparse text degrades to defaults,
//! never to empty skill sets.

use std::collections::{BTreeSet, HashSet};

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Signals derived from a job description. Recomputed fresh on every
/// generation request; never persisted on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSignals {
    pub required_skills: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    pub industry: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Vocabularies (static configuration)
// ────────────────────────────────────────────────────────────────────────────

/// Technical and soft skills recognized in job descriptions.
/// Substring semantics: "node" also covers "node.js" / "nodejs" spellings.
const SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "kotlin",
    "swift",
    "php",
    "ruby",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "spring",
    "rails",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "graphql",
    "rest",
    "html",
    "css",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "linux",
    "machine learning",
    "data analysis",
    "agile",
    "scrum",
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "mentoring",
];

/// Returned when no vocabulary skill appears in the text — downstream
/// scoring and fallback composition always get at least one anchor skill.
const DEFAULT_SKILLS: &[&str] = &["communication", "teamwork", "problem solving"];

/// Words that matter for ATS keyword coverage. Tokens must also be longer
/// than 3 characters to qualify.
const IMPORTANT_WORDS: &[&str] = &[
    "experience",
    "development",
    "engineering",
    "software",
    "management",
    "design",
    "analysis",
    "architecture",
    "testing",
    "security",
    "cloud",
    "data",
    "infrastructure",
    "platform",
    "product",
    "automation",
    "integration",
    "performance",
    "scalable",
    "distributed",
    "frontend",
    "backend",
    "fullstack",
    "mobile",
    "senior",
    "junior",
    "lead",
    "team",
    "delivery",
    "quality",
    "required",
    "degree",
    "years",
];

/// Ordered — the first name found as a substring wins.
const INDUSTRIES: &[&str] = &[
    "technology",
    "healthcare",
    "fintech",
    "finance",
    "banking",
    "insurance",
    "education",
    "retail",
    "ecommerce",
    "manufacturing",
    "logistics",
    "consulting",
    "media",
    "energy",
    "government",
    "nonprofit",
];

const DEFAULT_INDUSTRY: &str = "Technology";

/// Tokens shorter than this never qualify as keywords.
const MIN_KEYWORD_LEN: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Extractor
// ────────────────────────────────────────────────────────────────────────────

/// Lexical signal extractor over a fixed vocabulary set.
///
/// Built once at startup and shared via `AppState`. Tests construct their
/// own instance via [`SignalExtractor::with_vocabularies`].
pub struct SignalExtractor {
    skill_terms: Vec<String>,
    skill_matcher: AhoCorasick,
    important_words: HashSet<String>,
    industries: Vec<String>,
    default_skills: Vec<String>,
    tokenizer: Regex,
}

impl SignalExtractor {
    pub fn new() -> Self {
        Self::with_vocabularies(SKILL_VOCABULARY, IMPORTANT_WORDS, INDUSTRIES, DEFAULT_SKILLS)
    }

    /// Builds an extractor over explicit vocabularies.
    pub fn with_vocabularies(
        skills: &[&str],
        important_words: &[&str],
        industries: &[&str],
        default_skills: &[&str],
    ) -> Self {
        let skill_terms: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        // Overlapping matches are required: "javascript" in the text must
        // report both "javascript" and "java" when both are vocabulary terms.
        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&skill_terms)
            .expect("Failed to build skill vocabulary matcher");

        Self {
            skill_terms,
            skill_matcher,
            important_words: important_words.iter().map(|w| w.to_lowercase()).collect(),
            industries: industries.iter().map(|i| i.to_lowercase()).collect(),
            default_skills: default_skills.iter().map(|s| s.to_string()).collect(),
            tokenizer: Regex::new(r"\W+").expect("Failed to compile tokenizer regex"),
        }
    }

    /// Extracts all signals from a job description. Total over any input.
    pub fn extract(&self, job_description: &str) -> JobSignals {
        let text = job_description.to_lowercase();
        JobSignals {
            required_skills: self.extract_skills(&text),
            keywords: self.extract_keywords(&text),
            industry: self.extract_industry(&text),
        }
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut found: BTreeSet<String> = self
            .skill_matcher
            .find_overlapping_iter(text)
            .map(|m| self.skill_terms[m.pattern().as_usize()].clone())
            .collect();

        if found.is_empty() {
            found = self.default_skills.iter().cloned().collect();
        }
        found
    }

    fn extract_keywords(&self, text: &str) -> BTreeSet<String> {
        self.tokenizer
            .split(text)
            .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
            .filter(|token| self.important_words.contains(*token))
            .map(|token| token.to_string())
            .collect()
    }

    fn extract_industry(&self, text: &str) -> String {
        self.industries
            .iter()
            .find(|industry| text.contains(industry.as_str()))
            .map(|industry| title_case(industry))
            .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string())
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_vocabulary_skills_as_substrings() {
        let extractor = SignalExtractor::new();
        let signals =
            extractor.extract("React, Node.js, AWS required. Looking for a strong communicator.");

        assert!(signals.required_skills.contains("react"));
        assert!(signals.required_skills.contains("node"));
        assert!(signals.required_skills.contains("aws"));
        assert_eq!(signals.industry, "Technology");
    }

    #[test]
    fn test_empty_description_yields_default_skills() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("");

        assert!(!signals.required_skills.is_empty());
        assert!(signals.required_skills.contains("communication"));
        assert_eq!(signals.industry, "Technology");
        assert!(signals.keywords.is_empty());
    }

    #[test]
    fn test_no_vocabulary_match_yields_default_skills() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("We bake artisanal sourdough bread.");

        assert_eq!(
            signals.required_skills,
            DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn test_keywords_require_membership_and_length() {
        let extractor = SignalExtractor::new();
        let signals =
            extractor.extract("Senior software engineering lead with cloud experience and data.");

        assert!(signals.keywords.contains("software"));
        assert!(signals.keywords.contains("experience"));
        assert!(signals.keywords.contains("cloud"));
        // "lead" and "data" are exactly 4 chars — long enough.
        assert!(signals.keywords.contains("lead"));
        assert!(signals.keywords.contains("data"));
        // "with" is not in the importance vocabulary.
        assert!(!signals.keywords.contains("with"));
    }

    #[test]
    fn test_keywords_are_deduplicated() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("experience experience EXPERIENCE");
        assert_eq!(signals.keywords.len(), 1);
    }

    #[test]
    fn test_industry_first_match_wins() {
        let extractor = SignalExtractor::new();
        // "healthcare" precedes "finance" in the ordered list, regardless of
        // position in the text.
        let signals = extractor.extract("A finance-adjacent healthcare company.");
        assert_eq!(signals.industry, "Healthcare");
    }

    #[test]
    fn test_industry_is_title_cased() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("Join our fintech startup.");
        assert_eq!(signals.industry, "Fintech");
    }

    #[test]
    fn test_skill_matching_is_case_insensitive() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("KUBERNETES and Docker required");
        assert!(signals.required_skills.contains("kubernetes"));
        assert!(signals.required_skills.contains("docker"));
    }

    #[test]
    fn test_overlapping_vocabulary_terms_both_reported() {
        let extractor = SignalExtractor::new();
        let signals = extractor.extract("JavaScript developer wanted");
        assert!(signals.required_skills.contains("javascript"));
        assert!(signals.required_skills.contains("java"));
    }

    #[test]
    fn test_injected_vocabularies_are_honored() {
        let extractor = SignalExtractor::with_vocabularies(
            &["cobol"],
            &["mainframe"],
            &["aerospace"],
            &["adaptability"],
        );
        let signals = extractor.extract("COBOL mainframe work in the aerospace sector");

        assert!(signals.required_skills.contains("cobol"));
        assert!(signals.keywords.contains("mainframe"));
        assert_eq!(signals.industry, "Aerospace");

        let empty = extractor.extract("nothing relevant");
        assert!(empty.required_skills.contains("adaptability"));
    }
}
