//! Text encoding and measurement utilities

use crate::Align;

/// Estimate rendered text width in points
///
/// Helvetica metrics are approximated with a flat 0.5 em per character,
/// which is adequate for aligning label/value rows on a receipt-width page.
pub fn estimate_text_width(text: &str, font_size: f32) -> f64 {
    text.chars().count() as f64 * font_size as f64 * 0.5
}

/// Encode text as a PDF literal string for the WinAnsi-encoded base fonts
///
/// Backslash, parentheses, and control bytes are escaped. Characters outside
/// Latin-1 cannot be expressed in WinAnsi and are replaced with `?`.
pub fn encode_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\{:03o}", c as u32)),
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out.push(')');
    out
}

/// Context for generating text operators
pub struct TextRenderContext {
    /// PDF font resource name (e.g. "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
}

/// Generate PDF operators for text insertion
///
/// Creates the text operators (BT, Tf, Td, Tj, ET) to render text at a
/// position with alignment support. Coordinates are PDF coordinates (origin
/// bottom-left).
pub fn generate_text_operators(text: &str, x: f64, y: f64, align: Align, ctx: &TextRenderContext) -> Vec<u8> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };
    let final_x = x + x_offset;

    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{final_x:.2} {y:.2} Td\n"));
    ops.push_str(&format!("{} Tj\n", encode_pdf_text(text)));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a horizontal rule
pub fn generate_rule_operators(x1: f64, x2: f64, y: f64, line_width: f64) -> Vec<u8> {
    format!("{line_width:.2} w\n{x1:.2} {y:.2} m\n{x2:.2} {y:.2} l\nS\n").into_bytes()
}
