// Fixed natural-language generation instructions sent with every upstream
// request, plus the payload builder that bundles them with the normalized
// candidate and job context.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::candidate::CandidateProfile;

/// Instruction list for the upstream generator. Fixed — not configurable
/// per request, so output stays uniform across recruiters.
pub const GENERATION_INSTRUCTIONS: &[&str] = &[
    "Write in a confident, professional tone using strong action verbs.",
    "Keep the resume ATS-friendly: plain section headers, no tables or graphics.",
    "Target a single page; prefer tight, quantified bullet points.",
    "Emphasize the candidate skills and experience that match the job description.",
    "Never invent employers, titles, dates, or credentials not present in the profile.",
];

/// Builds the upstream request payload from the normalized profile and job
/// context. The profile is already canonical — collections are sequences
/// and experience entries are validated.
pub fn build_generation_payload(
    profile: &CandidateProfile,
    job_id: Uuid,
    job_description: &str,
) -> Value {
    json!({
        "candidate": {
            "name": profile.name,
            "email": profile.email,
            "phone": profile.phone,
            "location": profile.location,
            "summary": profile.summary,
            "currentPosition": profile.current_position,
            "yearsOfExperience": profile.years_of_experience,
            "skills": profile.skills,
            "experience": profile.experience,
            "education": profile.education,
            "certifications": profile.certifications,
            "projects": profile.projects,
        },
        "jobId": job_id,
        "jobDescription": job_description,
        "instructions": GENERATION_INSTRUCTIONS,
    })
}
