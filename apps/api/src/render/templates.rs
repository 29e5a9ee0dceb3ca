//! Template-based rendering utilities.
//!
//! Alongside the direct typesetting path, resume content can be poured into
//! an HTML template: markdown becomes an HTML fragment, the fragment
//! replaces the template's content placeholder, and `wkhtmltopdf` converts
//! the assembled page to PDF.

use std::path::Path;
use std::process::Command;

use pulldown_cmark::{html, Parser};

use crate::render::RenderError;

/// Placeholder the HTML templates mark their content slot with.
pub const CONTENT_PLACEHOLDER: &str = "{{ content }}";

/// Converts markdown text to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Whether `name` refers to an existing template file.
pub fn is_valid_template(templates_dir: &Path, name: &str) -> bool {
    templates_dir.join(name).is_file()
}

/// Loads an HTML template and injects the content into its placeholder.
pub fn render_template(
    templates_dir: &Path,
    name: &str,
    content: &str,
) -> Result<String, RenderError> {
    let path = templates_dir.join(name);
    if !path.is_file() {
        return Err(RenderError::TemplateNotFound(name.to_string()));
    }
    let template = std::fs::read_to_string(&path)?;
    Ok(template.replace(CONTENT_PLACEHOLDER, content))
}

/// Converts an HTML page to PDF bytes by shelling out to `wkhtmltopdf`.
///
/// The page is written to a scratch directory first so relative asset paths
/// resolve; local file access must be enabled for that to work.
pub fn html_to_pdf(html: &str, wkhtmltopdf_bin: &str) -> Result<Vec<u8>, RenderError> {
    let workdir = tempfile::tempdir()?;
    let html_path = workdir.path().join("resume.html");
    let pdf_path = workdir.path().join("resume.pdf");
    std::fs::write(&html_path, html)?;

    let output = Command::new(wkhtmltopdf_bin)
        .arg("--enable-local-file-access")
        .arg(&html_path)
        .arg(&pdf_path)
        .output()?;

    if !output.status.success() {
        return Err(RenderError::Converter {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(std::fs::read(&pdf_path)?)
}
