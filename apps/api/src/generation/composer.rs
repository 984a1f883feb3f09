//! Fallback composition — deterministic, offline resume text used whenever
//! the upstream generative service fails or returns nothing usable.
//!
//! Section order is fixed and every section is always emitted; empty
//! content degrades to an explicit placeholder line so downstream renderers
//! can assume all sections exist as text. Must stay in sync with the
//! upstream generator's section conventions.

use crate::generation::scoring::matched_skills;
use crate::generation::signals::JobSignals;
use crate::models::candidate::CandidateProfile;

const NO_SKILLS: &str = "No skills listed.";
const NO_EXPERIENCE: &str = "No experience listed.";
const NO_EDUCATION: &str = "No education listed.";
const NO_CERTIFICATIONS: &str = "No certifications listed.";
const NO_CONTACT: &str = "No contact information listed.";

/// Composes a complete tailored resume from the normalized profile and the
/// job's extracted signals.
pub fn compose_fallback(profile: &CandidateProfile, signals: &JobSignals) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(header_block(profile));
    sections.push(summary_block(profile, signals));
    sections.push(skills_block(profile));
    sections.push(keywords_line(signals));
    sections.push(experience_block(profile));
    sections.push(education_block(profile));
    sections.push(certifications_block(profile));

    sections.join("\n\n")
}

fn header_block(profile: &CandidateProfile) -> String {
    let name = if profile.name.is_empty() {
        "Candidate"
    } else {
        profile.name.as_str()
    };

    let contact: Vec<&str> = [&profile.email, &profile.phone, &profile.location]
        .into_iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect();

    let contact_line = if contact.is_empty() {
        NO_CONTACT.to_string()
    } else {
        contact.join(" | ")
    };

    format!("{}\n{}", name.to_uppercase(), contact_line)
}

/// One summary sentence referencing the skills shared with the posting;
/// falls back to the candidate's first three raw skills when nothing
/// overlaps.
fn summary_block(profile: &CandidateProfile, signals: &JobSignals) -> String {
    let overlap = matched_skills(&profile.skills, &signals.required_skills);
    let highlighted: Vec<&str> = if overlap.is_empty() {
        profile.skills.iter().take(3).map(String::as_str).collect()
    } else {
        overlap
    };

    let role = if profile.current_position.is_empty() {
        "Professional"
    } else {
        profile.current_position.as_str()
    };

    let sentence = if highlighted.is_empty() {
        format!(
            "{role} with {}+ years of experience seeking opportunities in the {} industry.",
            profile.years_of_experience, signals.industry
        )
    } else {
        format!(
            "{role} with {}+ years of experience, skilled in {}, seeking opportunities in the {} industry.",
            profile.years_of_experience,
            highlighted.join(", "),
            signals.industry
        )
    };

    format!("PROFESSIONAL SUMMARY\n{sentence}")
}

fn skills_block(profile: &CandidateProfile) -> String {
    let list = if profile.skills.is_empty() {
        NO_SKILLS.to_string()
    } else {
        profile.skills.join(", ")
    };
    format!("SKILLS\n{list}")
}

/// A compact keyword line for applicant-tracking systems.
fn keywords_line(signals: &JobSignals) -> String {
    let keywords = if signals.keywords.is_empty() {
        "none".to_string()
    } else {
        signals
            .keywords
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("KEYWORDS FOR ATS: {keywords}")
}

fn experience_block(profile: &CandidateProfile) -> String {
    if profile.experience.is_empty() {
        return format!("EXPERIENCE\n{NO_EXPERIENCE}");
    }

    let paragraphs: Vec<String> = profile
        .experience
        .iter()
        .map(|entry| {
            let mut paragraph = format!("{} @ {} ({})", entry.title, entry.company, entry.dates);
            if let Some(description) = &entry.description {
                paragraph.push_str(&format!("\n- {description}"));
            }
            paragraph
        })
        .collect();

    format!("EXPERIENCE\n{}", paragraphs.join("\n\n"))
}

fn education_block(profile: &CandidateProfile) -> String {
    let lines: Vec<String> = profile
        .education
        .iter()
        .filter_map(|entry| {
            let credential = match (&entry.degree, &entry.field) {
                (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
                (Some(degree), None) => Some(degree.clone()),
                (None, Some(field)) => Some(field.clone()),
                (None, None) => None,
            };

            let parts: Vec<String> = [credential, entry.school.clone()]
                .into_iter()
                .flatten()
                .collect();

            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        })
        .collect();

    if lines.is_empty() {
        format!("EDUCATION\n{NO_EDUCATION}")
    } else {
        format!("EDUCATION\n{}", lines.join("\n"))
    }
}

fn certifications_block(profile: &CandidateProfile) -> String {
    if profile.certifications.is_empty() {
        format!("CERTIFICATIONS\n{NO_CERTIFICATIONS}")
    } else {
        format!("CERTIFICATIONS\n{}", profile.certifications.join("\n"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{EducationEntry, ExperienceEntry};
    use std::collections::BTreeSet;

    fn make_profile() -> CandidateProfile {
        CandidateProfile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Austin, TX".to_string(),
            current_position: "Backend Engineer".to_string(),
            years_of_experience: 6,
            skills: vec!["React".to_string(), "AWS".to_string(), "Go".to_string()],
            experience: vec![ExperienceEntry {
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                dates: "2020 - Present".to_string(),
                location: None,
                description: Some("Built the billing platform.".to_string()),
                achievements: vec![],
                technologies: vec![],
            }],
            ..Default::default()
        }
    }

    fn make_signals(required: &[&str]) -> JobSignals {
        JobSignals {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            keywords: ["experience", "cloud"].iter().map(|s| s.to_string()).collect(),
            industry: "Technology".to_string(),
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let text = compose_fallback(&make_profile(), &make_signals(&["react"]));

        let summary_pos = text.find("PROFESSIONAL SUMMARY").unwrap();
        let skills_pos = text.find("SKILLS").unwrap();
        let keywords_pos = text.find("KEYWORDS FOR ATS:").unwrap();
        let experience_pos = text.find("EXPERIENCE").unwrap();
        let education_pos = text.find("EDUCATION").unwrap();
        let certs_pos = text.find("CERTIFICATIONS").unwrap();

        assert!(summary_pos < skills_pos);
        assert!(skills_pos < keywords_pos);
        assert!(keywords_pos < experience_pos);
        assert!(experience_pos < education_pos);
        assert!(education_pos < certs_pos);
    }

    #[test]
    fn test_header_contains_name_and_contact() {
        let text = compose_fallback(&make_profile(), &make_signals(&["react"]));
        assert!(text.starts_with("JANE DOE\n"));
        assert!(text.contains("jane@example.com | 555-0100 | Austin, TX"));
    }

    #[test]
    fn test_summary_references_skill_intersection() {
        let text = compose_fallback(&make_profile(), &make_signals(&["react", "aws"]));
        assert!(text.contains("skilled in React, AWS"));
        assert!(!text.contains("skilled in React, AWS, Go"));
    }

    #[test]
    fn test_summary_falls_back_to_top_three_raw_skills() {
        let text = compose_fallback(&make_profile(), &make_signals(&["cobol"]));
        assert!(text.contains("skilled in React, AWS, Go"));
    }

    #[test]
    fn test_experience_paragraph_shape() {
        let text = compose_fallback(&make_profile(), &make_signals(&["react"]));
        assert!(text.contains("Backend Engineer @ Acme (2020 - Present)"));
        assert!(text.contains("- Built the billing platform."));
    }

    #[test]
    fn test_empty_sections_degrade_to_placeholders() {
        let profile = CandidateProfile {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let text = compose_fallback(&profile, &make_signals(&["react"]));

        assert!(text.contains("No contact information listed."));
        assert!(text.contains("No skills listed."));
        assert!(text.contains("No experience listed."));
        assert!(text.contains("No education listed."));
        assert!(text.contains("No certifications listed."));
    }

    #[test]
    fn test_keywords_line_always_present() {
        let signals = JobSignals {
            required_skills: BTreeSet::new(),
            keywords: BTreeSet::new(),
            industry: "Technology".to_string(),
        };
        let text = compose_fallback(&make_profile(), &signals);
        assert!(text.contains("KEYWORDS FOR ATS: none"));
    }

    #[test]
    fn test_education_line_omits_missing_subfields() {
        let mut profile = make_profile();
        profile.education = vec![
            EducationEntry {
                degree: Some("BSc".to_string()),
                field: Some("Computer Science".to_string()),
                school: Some("State University".to_string()),
                ..Default::default()
            },
            EducationEntry {
                degree: Some("MBA".to_string()),
                ..Default::default()
            },
        ];
        let text = compose_fallback(&profile, &make_signals(&["react"]));
        assert!(text.contains("BSc in Computer Science, State University"));
        assert!(text.contains("\nMBA"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = compose_fallback(&make_profile(), &make_signals(&["react"]));
        let b = compose_fallback(&make_profile(), &make_signals(&["react"]));
        assert_eq!(a, b);
    }
}
