//! Canonical candidate model — the output of profile normalization.
//!
//! Every collection field is always a materialized `Vec`, never absent.
//! Experience entries are pre-validated: `title`, `company`, and `dates`
//! are guaranteed non-empty after trimming.

use serde::{Deserialize, Serialize};

/// A candidate profile after normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub current_position: String,
    /// Backfilled from skill count when the source omits it.
    pub years_of_experience: u32,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

/// A validated work-experience entry.
///
/// `dates` is a single display string — either taken verbatim from the
/// source or synthesized from start/end bounds during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub school: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}
