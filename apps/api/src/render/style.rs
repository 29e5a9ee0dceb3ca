//! Page geometry and visual styling for the rendered resume.

/// RGB with components in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorSpec {
    pub const BLACK: ColorSpec = ColorSpec {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    /// Indigo #4B0082, used for section headers.
    pub const INDIGO: ColorSpec = ColorSpec {
        r: 0.294,
        g: 0.0,
        b: 0.510,
    };
    pub const GREY: ColorSpec = ColorSpec {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };
}

/// Typesetting parameters for the enhanced-resume PDF.
///
/// All lengths are in points. Vertical spacing constants are the gap left
/// below a block of the given kind; `leading` is the line-height multiplier.
#[derive(Debug, Clone)]
pub struct ResumeStyle {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub title_size_pt: f32,
    pub header_size_pt: f32,
    pub body_size_pt: f32,
    pub bullet_indent_pt: f32,
    pub title_space_after_pt: f32,
    pub header_space_before_pt: f32,
    pub header_space_after_pt: f32,
    pub body_space_after_pt: f32,
    pub bullet_space_after_pt: f32,
    /// Gap between a section rule and the header text under it.
    pub rule_gap_pt: f32,
    pub leading: f32,
    pub header_color: ColorSpec,
    pub rule_color: ColorSpec,
}

impl ResumeStyle {
    /// Horizontal space available for body text.
    pub fn content_width_pt(&self) -> f32 {
        self.page_width_pt - self.margin_left_pt - self.margin_right_pt
    }
}

/// A4 page, 50pt side and bottom margins, 60pt top margin; 18pt centered
/// title, 14pt indigo section headers over a grey rule, 11pt body text with
/// bullets indented 20pt.
pub fn default_style() -> ResumeStyle {
    ResumeStyle {
        page_width_pt: 595.28,
        page_height_pt: 841.89,
        margin_left_pt: 50.0,
        margin_right_pt: 50.0,
        margin_top_pt: 60.0,
        margin_bottom_pt: 50.0,
        title_size_pt: 18.0,
        header_size_pt: 14.0,
        body_size_pt: 11.0,
        bullet_indent_pt: 20.0,
        title_space_after_pt: 22.0,
        header_space_before_pt: 12.0,
        header_space_after_pt: 6.0,
        body_space_after_pt: 5.0,
        bullet_space_after_pt: 4.0,
        rule_gap_pt: 6.0,
        leading: 1.2,
        header_color: ColorSpec::INDIGO,
        rule_color: ColorSpec::GREY,
    }
}
