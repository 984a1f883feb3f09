//! Document assembly — canonical fields → filled template → PDF bytes.
//!
//! Two paths: the structured template path (field composition + placeholder
//! binding) and a lightweight path that streams already-generated resume
//! text into a fixed-font, fixed-margin page. Both compile through the same
//! engine. Synchronous and CPU-bound — callers wrap in `spawn_blocking`.

use crate::models::resume::CanonicalResumeFields;
use crate::render::compose::{
    compose_certifications, compose_education, compose_experience, compose_skills,
};
use crate::render::sanitize::{escape_latex, sanitize};
use crate::render::template::{fill_template, RenderError};

/// Column budget for the fixed-font text path (US letter, 1" margins,
/// 10pt monospace).
const TEXT_COLUMNS: usize = 78;

const TEXT_TEMPLATE: &str = r#"\documentclass[10pt]{article}
\usepackage[margin=1in]{geometry}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\begin{document}
\ttfamily\raggedright
{\obeylines
{body}
}
\end{document}
"#;

/// Renders the structured template path: sanitize → compose → sanitize
/// (final pass) → escape → bind → compile.
pub fn render_document(
    fields: &CanonicalResumeFields,
    template_id: &str,
) -> Result<Vec<u8>, RenderError> {
    let source = build_document_source(fields, template_id)?;
    compile(&source)
}

/// Renders already-generated resume text verbatim into the fixed-font page
/// layout. No field decomposition.
pub fn render_text_document(resume_text: &str) -> Result<Vec<u8>, RenderError> {
    let source = build_text_source(resume_text);
    compile(&source)
}

/// Builds the filled LaTeX source for the structured path.
pub(crate) fn build_document_source(
    fields: &CanonicalResumeFields,
    template_id: &str,
) -> Result<String, RenderError> {
    // Composition sanitizes each entry; composed blocks get one more pass
    // before binding in case composition reintroduced raw whitespace.
    let skills = sanitize(&compose_skills(&fields.skills));
    let experience = sanitize(&compose_experience(&fields.experience));
    let education = sanitize(&compose_education(&fields.education));
    let certifications = sanitize(&compose_certifications(&fields.certifications));

    let bindings = [
        ("{full_name}", escape_latex(&sanitize(&fields.full_name))),
        ("{email}", escape_latex(&sanitize(&fields.email))),
        ("{phone}", escape_latex(&sanitize(&fields.phone))),
        ("{location}", escape_latex(&sanitize(&fields.location))),
        ("{summary}", escape_latex(&sanitize(&fields.summary))),
        ("{skills}", escape_latex(&skills)),
        ("{experience}", escape_latex(&experience)),
        ("{education}", escape_latex(&education)),
        ("{certifications}", escape_latex(&certifications)),
    ];

    let borrowed: Vec<(&'static str, &str)> = bindings
        .iter()
        .map(|(placeholder, value)| (*placeholder, value.as_str()))
        .collect();

    fill_template(template_id, &borrowed)
}

/// Builds the fixed-font source for the lightweight path.
pub(crate) fn build_text_source(resume_text: &str) -> String {
    let body = wrap_text(&sanitize(resume_text), TEXT_COLUMNS)
        .lines()
        .map(escape_latex)
        .collect::<Vec<_>>()
        .join("\n");

    TEXT_TEMPLATE.replace("{body}", &body)
}

/// Greedy word-wrap at a fixed column budget. Words longer than the budget
/// get their own line rather than being split.
pub(crate) fn wrap_text(text: &str, columns: usize) -> String {
    let mut wrapped: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.chars().count() <= columns {
            wrapped.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= columns {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            wrapped.push(current);
        }
    }

    wrapped.join("\n")
}

fn compile(latex: &str) -> Result<Vec<u8>, RenderError> {
    tectonic::latex_to_pdf(latex).map_err(|e| RenderError::Engine(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests (source assembly only — the engine compile is exercised end-to-end)
// ────────────────────────────────────────────────────────────────────────────
