//! Profile normalization — coerces a loosely-typed candidate record into
//! the canonical schema.
//!
//! Upstream sources supply collection fields as comma-separated strings,
//! JSON-encoded strings, or already-structured arrays; every coercion here
//! is total and falls back to an empty sequence rather than erroring. The
//! zero-valid-experience check is a *generation* precondition enforced by
//! the synthesizer, not here.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::candidate::{
    CandidateProfile, EducationEntry, ExperienceEntry, ProjectEntry,
};

/// Floor for the years-of-experience backfill heuristic.
const MIN_ESTIMATED_YEARS: u32 = 3;

// ────────────────────────────────────────────────────────────────────────────
// Raw source shapes (lenient, element-level)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawExperienceEntry {
    title: Option<String>,
    company: Option<String>,
    dates: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    currently_working: bool,
    location: Option<String>,
    description: Option<String>,
    achievements: Vec<String>,
    technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEducationEntry {
    degree: Option<String>,
    field: Option<String>,
    #[serde(alias = "institution")]
    school: Option<String>,
    start_year: Option<String>,
    end_year: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawProjectEntry {
    name: Option<String>,
    description: Option<String>,
    technologies: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes a raw candidate record. Total — every collection field in the
/// result is a materialized sequence, and every experience entry is valid
/// (non-empty title, company, and date range).
pub fn normalize(raw: &Value) -> CandidateProfile {
    let skills = coerce_string_list(raw.get("skills"));
    let certifications = coerce_string_list(raw.get("certifications"));

    let experience = normalize_experience(raw);
    let education: Vec<EducationEntry> = coerce_entries::<RawEducationEntry>(raw.get("education"))
        .into_iter()
        .map(|e| EducationEntry {
            degree: nonempty(e.degree),
            field: nonempty(e.field),
            school: nonempty(e.school),
            start_year: nonempty(e.start_year),
            end_year: nonempty(e.end_year),
        })
        .collect();
    let projects: Vec<ProjectEntry> = coerce_entries::<RawProjectEntry>(raw.get("projects"))
        .into_iter()
        .map(|p| ProjectEntry {
            name: nonempty(p.name),
            description: nonempty(p.description),
            technologies: p.technologies,
        })
        .collect();

    let current_position = first_string_field(raw, &["currentPosition", "position", "title"])
        .unwrap_or_else(|| {
            experience
                .first()
                .map(|e| e.title.clone())
                .unwrap_or_default()
        });

    let years_of_experience =
        years_field(raw).unwrap_or_else(|| estimate_years_from_skills(skills.len()));

    let summary = first_string_field(raw, &["summary"])
        .unwrap_or_else(|| synthesize_summary(&current_position, &skills));

    CandidateProfile {
        name: first_string_field(raw, &["name", "fullName"]).unwrap_or_default(),
        email: first_string_field(raw, &["email"]).unwrap_or_default(),
        phone: first_string_field(raw, &["phone"]).unwrap_or_default(),
        location: first_string_field(raw, &["location"]).unwrap_or_default(),
        summary,
        current_position,
        years_of_experience,
        skills,
        experience,
        education,
        certifications,
        projects,
    }
}

/// Reconstructs validated experience entries, preferring `experience` over
/// the legacy `workHistory` alias when the former is non-empty. This is a
/// fallback chain, not a merge.
fn normalize_experience(raw: &Value) -> Vec<ExperienceEntry> {
    let mut entries = coerce_entries::<RawExperienceEntry>(raw.get("experience"));
    if entries.is_empty() {
        entries = coerce_entries::<RawExperienceEntry>(raw.get("workHistory"));
    }

    entries.into_iter().filter_map(validate_entry).collect()
}

/// Applies date-range synthesis and the validity filter: an entry survives
/// only if title, company, and dates are all non-empty after trimming.
fn validate_entry(raw: RawExperienceEntry) -> Option<ExperienceEntry> {
    let title = nonempty(raw.title.clone())?;
    let company = nonempty(raw.company.clone())?;
    let dates = build_dates(&raw)?;

    Some(ExperienceEntry {
        title,
        company,
        dates,
        location: nonempty(raw.location),
        description: nonempty(raw.description),
        achievements: raw.achievements,
        technologies: raw.technologies,
    })
}

/// Date-range synthesis. A verbatim `dates` string wins; otherwise the
/// range is built from `startDate`/`endDate`/`currentlyWorking`. Entries
/// with no start date have no synthesizable range.
fn build_dates(entry: &RawExperienceEntry) -> Option<String> {
    if let Some(dates) = nonempty(entry.dates.clone()) {
        return Some(dates);
    }

    let start = nonempty(entry.start_date.clone());
    let end = nonempty(entry.end_date.clone());

    match (start, end) {
        (Some(start), _) if entry.currently_working => Some(format!("{start} - Present")),
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(start), None) => Some(format!("{start} - Present")),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field coercion helpers
// ────────────────────────────────────────────────────────────────────────────

/// Coerces a string-list field: comma-split delimited strings, pass-through
/// arrays, empty otherwise. Entries are trimmed; empties dropped.
fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerces a structured-list field: JSON-encoded strings are parsed (parse
/// failure defaults to empty), arrays pass through element-by-element with
/// unparseable elements dropped.
fn coerce_entries<T: DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    let items: Vec<Value> = match value {
        Some(Value::String(s)) => serde_json::from_str(s).unwrap_or_default(),
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// First non-empty string among the given keys.
fn first_string_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Years of experience from the source, tolerating numeric strings.
fn years_field(raw: &Value) -> Option<u32> {
    match raw.get("yearsOfExperience") {
        Some(Value::Number(n)) => n.as_u64().map(|y| y as u32),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn nonempty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Backfill heuristics (best-effort defaults, never validation failures)
// ────────────────────────────────────────────────────────────────────────────

fn estimate_years_from_skills(skill_count: usize) -> u32 {
    ((skill_count / 2) as u32).max(MIN_ESTIMATED_YEARS)
}

fn synthesize_summary(current_position: &str, skills: &[String]) -> String {
    let role = if current_position.is_empty() {
        "Professional"
    } else {
        current_position
    };
    let top_skills: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
    if top_skills.is_empty() {
        format!("{role} with a track record of delivering results.")
    } else {
        format!("{role} with expertise in {}.", top_skills.join(", "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collections_are_always_sequences() {
        // Malformed or absent collection fields still materialize as Vecs.
        let raw = json!({
            "name": "Ada",
            "skills": 42,
            "certifications": null,
            "experience": {"not": "an array"},
            "education": false
        });
        let profile = normalize(&raw);

        assert!(profile.skills.is_empty());
        assert!(profile.certifications.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_comma_delimited_skills_are_split_and_trimmed() {
        let raw = json!({"skills": " React , AWS ,, Docker "});
        let profile = normalize(&raw);
        assert_eq!(profile.skills, vec!["React", "AWS", "Docker"]);
    }

    #[test]
    fn test_skill_array_passes_through() {
        let raw = json!({"skills": ["React", " AWS "]});
        let profile = normalize(&raw);
        assert_eq!(profile.skills, vec!["React", "AWS"]);
    }

    #[test]
    fn test_json_encoded_experience_string_is_parsed() {
        let raw = json!({
            "experience": "[{\"title\": \"Engineer\", \"company\": \"Acme\", \"dates\": \"2020 - 2022\"}]"
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Acme");
    }

    #[test]
    fn test_unparseable_json_string_defaults_to_empty() {
        let raw = json!({"experience": "not json at all"});
        let profile = normalize(&raw);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_work_history_alias_is_a_fallback_not_a_merge() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme", "dates": "2020 - 2022"}
            ],
            "workHistory": [
                {"title": "Intern", "company": "Legacy Corp", "dates": "2018 - 2019"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Acme");
    }

    #[test]
    fn test_work_history_used_when_experience_empty() {
        let raw = json!({
            "experience": [],
            "workHistory": [
                {"title": "Intern", "company": "Legacy Corp", "dates": "2018 - 2019"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Legacy Corp");
    }

    #[test]
    fn test_dates_synthesized_for_current_role() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme",
                 "startDate": "2020-01", "currentlyWorking": true}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience[0].dates, "2020-01 - Present");
    }

    #[test]
    fn test_dates_synthesized_from_both_bounds() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme",
                 "startDate": "2018", "endDate": "2020"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience[0].dates, "2018 - 2020");
    }

    #[test]
    fn test_start_only_implies_present() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme", "startDate": "2021"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience[0].dates, "2021 - Present");
    }

    #[test]
    fn test_verbatim_dates_win_over_synthesis() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme", "dates": "Summer 2020",
                 "startDate": "2020-06", "endDate": "2020-09"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience[0].dates, "Summer 2020");
    }

    #[test]
    fn test_entries_missing_title_or_company_are_dropped() {
        let raw = json!({
            "experience": [
                {"company": "Acme", "dates": "2020 - 2022"},
                {"title": "Engineer", "dates": "2020 - 2022"},
                {"title": "  ", "company": "Acme", "dates": "2020 - 2022"},
                {"title": "Kept", "company": "Acme", "dates": "2020 - 2022"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Kept");
    }

    #[test]
    fn test_entries_with_no_synthesizable_dates_are_dropped() {
        let raw = json!({
            "experience": [
                {"title": "Engineer", "company": "Acme"}
            ]
        });
        let profile = normalize(&raw);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_years_backfilled_from_skill_count_with_floor() {
        let raw = json!({"skills": "a, b, c, d, e, f, g, h, i, j"});
        let profile = normalize(&raw);
        assert_eq!(profile.years_of_experience, 5);

        let sparse = normalize(&json!({"skills": "a, b"}));
        assert_eq!(sparse.years_of_experience, 3);
    }

    #[test]
    fn test_years_from_source_wins_over_estimate() {
        let raw = json!({"yearsOfExperience": 12, "skills": "a, b"});
        assert_eq!(normalize(&raw).years_of_experience, 12);

        let stringy = json!({"yearsOfExperience": "7"});
        assert_eq!(normalize(&stringy).years_of_experience, 7);
    }

    #[test]
    fn test_summary_backfilled_from_position_and_top_skills() {
        let raw = json!({
            "currentPosition": "Backend Engineer",
            "skills": "Rust, Postgres, Kafka, Docker"
        });
        let profile = normalize(&raw);
        assert_eq!(
            profile.summary,
            "Backend Engineer with expertise in Rust, Postgres, Kafka."
        );
    }

    #[test]
    fn test_explicit_summary_is_kept() {
        let raw = json!({"summary": "Hand-written summary.", "skills": "Rust"});
        assert_eq!(normalize(&raw).summary, "Hand-written summary.");
    }

    #[test]
    fn test_current_position_falls_back_to_first_experience_title() {
        let raw = json!({
            "experience": [
                {"title": "Staff Engineer", "company": "Acme", "dates": "2020 - Present"}
            ]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.current_position, "Staff Engineer");
    }
}
