//! Receipt document builder

use crate::text::{generate_rule_operators, generate_text_operators, TextRenderContext};
use crate::{estimate_text_width, Align, PdfError, Result};
use lopdf::{dictionary, Document, Object, Stream};

/// Font resource name for Helvetica
const FONT_REGULAR: &str = "F1";
/// Font resource name for Helvetica-Bold
const FONT_BOLD: &str = "F2";

/// A single-page receipt document
///
/// Content operators are buffered as text and rules are inserted; the PDF
/// object tree is assembled once at save time. Coordinates given to the
/// insertion methods are in points from the top-left corner of the page.
pub struct ReceiptDocument {
    width_pt: f64,
    height_pt: f64,
    content: Vec<u8>,
    current_font_size: f32,
    current_bold: bool,
}

impl ReceiptDocument {
    /// Create a new receipt page with the given dimensions in points
    pub fn new(width_pt: f64, height_pt: f64) -> Result<Self> {
        if !(width_pt.is_finite() && height_pt.is_finite()) || width_pt <= 0.0 || height_pt <= 0.0 {
            return Err(PdfError::InvalidDimensions(width_pt, height_pt));
        }

        Ok(Self {
            width_pt,
            height_pt,
            content: Vec::new(),
            current_font_size: 9.0,
            current_bold: false,
        })
    }

    /// Page width in points
    pub fn width_pt(&self) -> f64 {
        self.width_pt
    }

    /// Page height in points
    pub fn height_pt(&self) -> f64 {
        self.height_pt
    }

    /// Set the font size for subsequent text insertions
    pub fn set_font_size(&mut self, size: f32) {
        self.current_font_size = size;
    }

    /// Switch between Helvetica and Helvetica-Bold for subsequent insertions
    pub fn set_bold(&mut self, bold: bool) {
        self.current_bold = bold;
    }

    /// Insert a line of text
    ///
    /// `x` and `y` are points from the top-left corner; `y` is the text
    /// baseline. Empty text inserts nothing.
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let font_name = if self.current_bold {
            FONT_BOLD
        } else {
            FONT_REGULAR
        };
        let ctx = TextRenderContext {
            font_name: font_name.to_string(),
            font_size: self.current_font_size,
            text_width: estimate_text_width(text, self.current_font_size),
        };

        let pdf_y = self.height_pt - y;
        self.content
            .extend(generate_text_operators(text, x, pdf_y, align, &ctx));
    }

    /// Draw a horizontal rule from `x1` to `x2` at `y` points from the top
    pub fn draw_rule(&mut self, x1: f64, x2: f64, y: f64, line_width: f64) {
        let pdf_y = self.height_pt - y;
        self.content
            .extend(generate_rule_operators(x1, x2, pdf_y, line_width));
    }

    /// Assemble the PDF object tree and save to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();

        let font_regular_id = doc.add_object(Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        }));
        let font_bold_id = doc.add_object(Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        }));

        let content_id = doc.add_object(Object::Stream(Stream::new(
            dictionary! {},
            self.content.clone(),
        )));

        let page_id = doc.add_object(Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.width_pt as f32),
                Object::Real(self.height_pt as f32),
            ],
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    FONT_REGULAR => font_regular_id,
                    FONT_BOLD => font_bold_id,
                },
            },
            "Contents" => content_id,
        }));

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }));
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        log::debug!(
            "saved receipt pdf: {} bytes, {:.1}pt x {:.1}pt",
            buffer.len(),
            self.width_pt,
            self.height_pt
        );

        Ok(buffer)
    }
}
