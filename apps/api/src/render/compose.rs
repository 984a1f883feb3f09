//! Field composition — turns structured resume sub-entries into the flat
//! text blocks the document template binds.
//!
//! Deterministic and order-preserving. Missing sub-fields are omitted
//! together with their separators; a slot is never left empty. Every input
//! is sanitized on the way in, and callers apply one more sanitize pass to
//! each composed block before binding.

use crate::models::resume::{CertificationField, EducationField, ExperienceField};
use crate::render::sanitize::sanitize;

/// Comma-joins non-empty skill entries.
pub fn compose_skills(skills: &[String]) -> String {
    skills
        .iter()
        .map(|s| sanitize(s))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per education entry:
/// `"<degree> in <field> | <school> | <startYear> – <endYear>"`,
/// blank lines dropped, newline-joined.
pub fn compose_education(entries: &[EducationField]) -> String {
    entries
        .iter()
        .filter_map(|entry| {
            let credential = match (clean(&entry.degree), clean(&entry.field)) {
                (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
                (Some(degree), None) => Some(degree),
                (None, Some(field)) => Some(field),
                (None, None) => None,
            };

            let years = match (clean(&entry.start_year), clean(&entry.end_year)) {
                (Some(start), Some(end)) => Some(format!("{start} – {end}")),
                (Some(start), None) => Some(start),
                (None, Some(end)) => Some(end),
                (None, None) => None,
            };

            join_present(&[credential, clean(&entry.school), years])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per certification: `"<name> | <issuer> | <year>"`, with the
/// same missing-field omission rule.
pub fn compose_certifications(entries: &[CertificationField]) -> String {
    entries
        .iter()
        .filter_map(|entry| {
            join_present(&[clean(&entry.name), clean(&entry.issuer), clean(&entry.year)])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One block per experience entry: a header line
/// `"<title> – <company> | <dates> – <location>"` followed by one
/// `"• <achievement>"` line per achievement; blocks separated by a blank
/// line.
pub fn compose_experience(entries: &[ExperienceField]) -> String {
    entries
        .iter()
        .filter_map(|entry| {
            let role = dash_join(&[
                Some(sanitize(&entry.title)).filter(|s| !s.is_empty()),
                Some(sanitize(&entry.company)).filter(|s| !s.is_empty()),
            ]);
            let tenure = dash_join(&[
                Some(sanitize(&entry.dates)).filter(|s| !s.is_empty()),
                clean(&entry.location),
            ]);

            let header = join_present(&[role, tenure])?;

            let mut block = header;
            for achievement in &entry.achievements {
                let achievement = sanitize(achievement);
                if !achievement.is_empty() {
                    block.push_str(&format!("\n• {achievement}"));
                }
            }
            Some(block)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Sanitizes an optional field, mapping empty results to None.
fn clean(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(sanitize)
        .filter(|s| !s.is_empty())
}

/// Joins the present components with `" | "`; None when all are absent.
fn join_present(parts: &[Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(" | "))
    }
}

/// Joins the present components with `" – "`; None when all are absent.
fn dash_join(parts: &[Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(" – "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
