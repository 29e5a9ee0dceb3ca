//! Classifies enhanced-resume lines into layout blocks.
//!
//! The model's rewrite is plain text with a loose structure: section
//! headers end in a colon, bullets start with a dash or bullet marker, and
//! contact lines carry a `Label: value` shape. Classification is per line,
//! in a fixed rule order, so the typesetter never has to re-inspect text.

/// Title printed at the top of every rendered resume.
pub const RESUME_TITLE: &str = "Professional Resume";

/// Section names that, followed by a colon, form a section header line.
pub const SECTION_LABELS: [&str; 6] = [
    "summary",
    "experience",
    "projects",
    "education",
    "skills",
    "achievements",
];

/// One typeset unit of the rendered resume.
///
/// `Bullet` and the line variants carry the full line text as written,
/// marker included; the typesetter draws them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutBlock {
    /// Centered document title.
    Title(String),
    /// Section header, colon stripped, drawn over a horizontal rule.
    SectionHeader(String),
    /// Indented bullet line, marker included.
    Bullet(String),
    /// `Label: value` line, drawn bold.
    LabeledLine(String),
    /// Anything else.
    PlainLine(String),
}

/// Turns enhanced-resume text into an ordered block list.
///
/// A synthetic title block always comes first; blank lines are dropped.
/// Rules apply in order: section header, bullet, labeled line, plain line.
pub fn classify_lines(text: &str) -> Vec<LayoutBlock> {
    let mut blocks = vec![LayoutBlock::Title(RESUME_TITLE.to_string())];

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(label) = section_label(line) {
            blocks.push(LayoutBlock::SectionHeader(label.to_string()));
        } else if line.starts_with("- ") || line.starts_with("\u{2022} ") {
            blocks.push(LayoutBlock::Bullet(line.to_string()));
        } else if line.contains(':') && !line.starts_with('\u{2022}') {
            blocks.push(LayoutBlock::LabeledLine(line.to_string()));
        } else {
            blocks.push(LayoutBlock::PlainLine(line.to_string()));
        }
    }

    blocks
}

/// If the line is a known section header, returns it without its colon.
/// Comparison is case-insensitive; the returned text keeps the line's case.
fn section_label(line: &str) -> Option<&str> {
    let label = line.strip_suffix(':')?;
    SECTION_LABELS
        .contains(&label.to_lowercase().as_str())
        .then_some(label)
}
