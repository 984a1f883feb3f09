//! Renderer input projection.
//!
//! `CanonicalResumeFields` is the document renderer's own view of a resume —
//! structured sub-entries supplied by the caller, distinct from
//! `CandidateProfile` (which feeds generation, not rendering).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanonicalResumeFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceField>,
    pub education: Vec<EducationField>,
    pub certifications: Vec<CertificationField>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceField {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub location: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationField {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub school: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationField {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
}
