//! Static document templates, keyed by id.
//!
//! Each template is a LaTeX document carrying the full named placeholder
//! set. `fill_template` verifies every placeholder exists before
//! substituting — a template missing one fails loudly rather than
//! producing a partially-filled document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Template '{template_id}' is malformed: missing placeholder '{placeholder}'")]
    PlaceholderMissing {
        template_id: String,
        placeholder: &'static str,
    },

    #[error("Document engine failed: {0}")]
    Engine(String),
}

/// The named placeholders every structured template must carry.
pub const TEMPLATE_PLACEHOLDERS: &[&str] = &[
    "{full_name}",
    "{email}",
    "{phone}",
    "{location}",
    "{summary}",
    "{skills}",
    "{experience}",
    "{education}",
    "{certifications}",
];

/// Bound values in the same order as [`TEMPLATE_PLACEHOLDERS`].
pub type Bindings<'a> = [(&'static str, &'a str)];

// ────────────────────────────────────────────────────────────────────────────
// Template assets
// ────────────────────────────────────────────────────────────────────────────

const CLASSIC_TEMPLATE: &str = r#"\documentclass[11pt]{article}
\usepackage[margin=1in]{geometry}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\begin{document}
{\LARGE\bfseries {full_name}}

{email} \textbar{} {phone} \textbar{} {location}

\section*{Summary}
{\obeylines {summary}}

\section*{Skills}
{\obeylines {skills}}

\section*{Experience}
{\obeylines {experience}}

\section*{Education}
{\obeylines {education}}

\section*{Certifications}
{\obeylines {certifications}}

\end{document}
"#;

const MODERN_TEMPLATE: &str = r#"\documentclass[11pt]{article}
\usepackage[margin=0.9in]{geometry}
\renewcommand{\familydefault}{\sfdefault}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\begin{document}
{\Huge {full_name}}

\textbf{{email} \textbar{} {phone} \textbar{} {location}}

\section*{Profile}
{\obeylines {summary}}

\section*{Core Skills}
{\obeylines {skills}}

\section*{Professional Experience}
{\obeylines {experience}}

\section*{Education}
{\obeylines {education}}

\section*{Certifications}
{\obeylines {certifications}}

\end{document}
"#;

const COMPACT_TEMPLATE: &str = r#"\documentclass[10pt]{article}
\usepackage[margin=0.75in]{geometry}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\begin{document}
{\Large\bfseries {full_name}} --- {email} \textbar{} {phone} \textbar{} {location}

\subsection*{Summary}
{\obeylines {summary}}

\subsection*{Skills}
{\obeylines {skills}}

\subsection*{Experience}
{\obeylines {experience}}

\subsection*{Education}
{\obeylines {education}}

\subsection*{Certifications}
{\obeylines {certifications}}

\end{document}
"#;

/// Looks up a template asset by id.
pub fn template_source(template_id: &str) -> Result<&'static str, RenderError> {
    match template_id {
        "classic" => Ok(CLASSIC_TEMPLATE),
        "modern" => Ok(MODERN_TEMPLATE),
        "compact" => Ok(COMPACT_TEMPLATE),
        other => Err(RenderError::TemplateNotFound(other.to_string())),
    }
}

/// Fills a template by id. Every placeholder in the bindings must exist in
/// the template source.
pub fn fill_template(template_id: &str, bindings: &Bindings<'_>) -> Result<String, RenderError> {
    let source = template_source(template_id)?;
    fill_source(template_id, source, bindings)
}

/// Verifies and substitutes placeholders in an explicit source. Split out
/// so malformed-template handling is testable without a registry entry.
pub(crate) fn fill_source(
    template_id: &str,
    source: &str,
    bindings: &Bindings<'_>,
) -> Result<String, RenderError> {
    for &(placeholder, _) in bindings {
        if !source.contains(placeholder) {
            return Err(RenderError::PlaceholderMissing {
                template_id: template_id.to_string(),
                placeholder,
            });
        }
    }

    let mut filled = source.to_string();
    for &(placeholder, value) in bindings {
        filled = filled.replace(placeholder, value);
    }
    Ok(filled)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
