//! Slip rendering and export

use crate::mount::MountedSlip;
use crate::Result;
use chrono::NaiveDateTime;
use slip_format::slip_filename;
use slip_pdf::{mm_to_pt, Align, ReceiptDocument};

/// Receipt paper width
const RECEIPT_WIDTH_MM: f64 = 80.0;
/// Margin on every side
const MARGIN_MM: f64 = 2.5;
/// Heading font size in points
const HEADING_SIZE: f32 = 11.0;
/// Body font size in points
const BODY_SIZE: f32 = 9.0;
/// Row height in points
const ROW_HEIGHT: f64 = 13.5;
/// Vertical space taken by the heading and its rule, in points
const HEADING_BLOCK: f64 = 24.0;
/// Space between the last row and the closing rule, in points
const FOOTER_BLOCK: f64 = 6.0;
/// Rule stroke width in points
const RULE_WIDTH: f64 = 0.5;

/// An exported slip: PDF bytes plus the download filename
#[derive(Debug, Clone)]
pub struct ExportedSlip {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Renders a mounted slip's preview onto a receipt page
///
/// The page is receipt-width (80 mm plus margins); its height follows the
/// laid-out content, one row per preview slot in template order.
pub struct SlipRenderer<'a> {
    slip: &'a MountedSlip,
}

impl<'a> SlipRenderer<'a> {
    /// Create a new renderer for a mounted slip
    pub fn new(slip: &'a MountedSlip) -> Self {
        Self { slip }
    }

    /// Lay the preview out and produce PDF bytes
    pub fn render(&self) -> Result<Vec<u8>> {
        let rows = self.slip.rows();

        let width = mm_to_pt(RECEIPT_WIDTH_MM + 2.0 * MARGIN_MM);
        let margin = mm_to_pt(MARGIN_MM);
        let height =
            2.0 * margin + HEADING_BLOCK + rows.len() as f64 * ROW_HEIGHT + FOOTER_BLOCK;

        let mut doc = ReceiptDocument::new(width, height)?;

        let template = self.slip.template();
        let heading = template
            .preview
            .heading
            .as_deref()
            .unwrap_or(&template.title);

        doc.set_bold(true);
        doc.set_font_size(HEADING_SIZE);
        doc.insert_text(heading, width / 2.0, margin + HEADING_SIZE as f64, Align::Center);
        doc.draw_rule(margin, width - margin, margin + HEADING_BLOCK - 4.0, RULE_WIDTH);

        doc.set_bold(false);
        doc.set_font_size(BODY_SIZE);
        for (i, row) in rows.iter().enumerate() {
            let baseline = margin + HEADING_BLOCK + (i as f64 + 1.0) * ROW_HEIGHT;
            doc.insert_text(&row.label, margin, baseline, Align::Left);
            doc.insert_text(&row.display, width - margin, baseline, Align::Right);
        }

        let closing_rule = margin + HEADING_BLOCK + rows.len() as f64 * ROW_HEIGHT + FOOTER_BLOCK;
        doc.draw_rule(margin, width - margin, closing_rule, RULE_WIDTH);

        Ok(doc.to_bytes()?)
    }
}

impl MountedSlip {
    /// Download filename for an export at `now`
    pub fn pdf_filename(&self, now: NaiveDateTime) -> String {
        slip_filename(self.dc_number(), now.date())
    }

    /// Synchronize, render, and name the slip
    ///
    /// Runs the synchronizer first so the export always reflects the current
    /// form values, the same guarantee the print trigger has.
    pub fn export_pdf(&mut self, now: NaiveDateTime) -> Result<ExportedSlip> {
        self.sync(now);

        let bytes = SlipRenderer::new(self).render()?;
        let filename = self.pdf_filename(now);

        log::info!(
            "exported weighment slip: {} bytes as {}",
            bytes.len(),
            filename
        );

        Ok(ExportedSlip { bytes, filename })
    }
}
