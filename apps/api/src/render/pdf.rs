//! Direct PDF typesetting with printpdf.
//!
//! The typesetter walks the block list top to bottom, tracking a vertical
//! cursor in points from the page bottom. Text is drawn with the two
//! built-in Helvetica faces; widths come from `font_metrics`, so centering
//! and word wrap need no font files at runtime. When a line would cross the
//! bottom margin the cursor moves to a fresh page.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::render::blocks::LayoutBlock;
use crate::render::font_metrics::{get_metrics, Face};
use crate::render::style::{ColorSpec, ResumeStyle};
use crate::render::RenderError;

const PT_PER_MM: f32 = 72.0 / 25.4;

/// printpdf positions in millimeters; the style speaks points.
fn mm(pt: f32) -> Mm {
    Mm((pt / PT_PER_MM).into())
}

fn color(spec: ColorSpec) -> Color {
    Color::Rgb(Rgb::new(spec.r.into(), spec.g.into(), spec.b.into(), None))
}

/// Typesets classified blocks into a finished PDF.
pub fn render_resume_pdf(
    blocks: &[LayoutBlock],
    style: &ResumeStyle,
) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        "Professional Resume",
        mm(style.page_width_pt),
        mm(style.page_height_pt),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Backend(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_pt: style.page_height_pt - style.margin_top_pt,
        style,
    };

    for block in blocks {
        draw_block(&mut cursor, block, &regular, &bold);
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Backend(e.to_string()))
}

/// Vertical position on the current page, measured from the page bottom.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_pt: f32,
    style: &'a ResumeStyle,
}

fn draw_block(
    cursor: &mut Cursor,
    block: &LayoutBlock,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let style = cursor.style;
    match block {
        LayoutBlock::Title(text) => {
            let width = get_metrics(Face::Helvetica).measure_pt(text, style.title_size_pt);
            let x = ((style.page_width_pt - width) / 2.0).max(style.margin_left_pt);
            draw_text_line(cursor, text, regular, style.title_size_pt, x, ColorSpec::BLACK);
            cursor.y_pt -= style.title_space_after_pt;
        }
        LayoutBlock::SectionHeader(label) => {
            cursor.y_pt -= style.header_space_before_pt;
            // Keep the rule and its header together on one page.
            let needed = style.rule_gap_pt + style.header_size_pt;
            if cursor.y_pt - needed < style.margin_bottom_pt {
                new_page(cursor);
            }
            draw_rule(cursor);
            cursor.y_pt -= style.rule_gap_pt;
            draw_text_line(
                cursor,
                label,
                regular,
                style.header_size_pt,
                style.margin_left_pt,
                style.header_color,
            );
            cursor.y_pt -= style.header_space_after_pt;
        }
        LayoutBlock::Bullet(text) => {
            let x = style.margin_left_pt + style.bullet_indent_pt;
            let max_width = style.content_width_pt() - style.bullet_indent_pt;
            draw_wrapped(
                cursor,
                text,
                regular,
                Face::Helvetica,
                style.body_size_pt,
                x,
                max_width,
            );
            cursor.y_pt -= style.bullet_space_after_pt;
        }
        LayoutBlock::LabeledLine(text) => {
            draw_wrapped(
                cursor,
                text,
                bold,
                Face::HelveticaBold,
                style.body_size_pt,
                style.margin_left_pt,
                style.content_width_pt(),
            );
            cursor.y_pt -= style.body_space_after_pt;
        }
        LayoutBlock::PlainLine(text) => {
            draw_wrapped(
                cursor,
                text,
                regular,
                Face::Helvetica,
                style.body_size_pt,
                style.margin_left_pt,
                style.content_width_pt(),
            );
            cursor.y_pt -= style.body_space_after_pt;
        }
    }
}

fn draw_wrapped(
    cursor: &mut Cursor,
    text: &str,
    font: &IndirectFontRef,
    face: Face,
    size: f32,
    x_pt: f32,
    max_width_pt: f32,
) {
    for line in get_metrics(face).wrap_words(text, size, max_width_pt) {
        draw_text_line(cursor, &line, font, size, x_pt, ColorSpec::BLACK);
    }
}

fn draw_text_line(
    cursor: &mut Cursor,
    text: &str,
    font: &IndirectFontRef,
    size: f32,
    x_pt: f32,
    ink: ColorSpec,
) {
    if cursor.y_pt - size < cursor.style.margin_bottom_pt {
        new_page(cursor);
    }
    let baseline = cursor.y_pt - size;
    cursor.layer.set_fill_color(color(ink));
    cursor
        .layer
        .use_text(text, size.into(), mm(x_pt), mm(baseline), font);
    cursor.y_pt = baseline - size * (cursor.style.leading - 1.0);
}

fn draw_rule(cursor: &mut Cursor) {
    let style = cursor.style;
    let y = cursor.y_pt;
    let rule = Line {
        points: vec![
            (Point::new(mm(style.margin_left_pt), mm(y)), false),
            (
                Point::new(mm(style.page_width_pt - style.margin_right_pt), mm(y)),
                false,
            ),
        ],
        is_closed: false,
    };
    cursor.layer.set_outline_color(color(style.rule_color));
    cursor.layer.set_outline_thickness(1.0);
    cursor.layer.add_line(rule);
}

fn new_page(cursor: &mut Cursor) {
    let (page, layer) = cursor.doc.add_page(
        mm(cursor.style.page_width_pt),
        mm(cursor.style.page_height_pt),
        "Layer 1",
    );
    cursor.layer = cursor.doc.get_page(page).get_layer(layer);
    cursor.y_pt = cursor.style.page_height_pt - cursor.style.margin_top_pt;
}
