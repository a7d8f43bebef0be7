//! Slip PDF - receipt PDF construction
//!
//! This crate provides functionality for:
//! - Building a single-page receipt document sized to its content
//! - Placing text with the base-14 Helvetica fonts at specific coordinates
//! - Drawing horizontal rules
//! - Saving the document to bytes
//!
//! # Example
//!
//! ```
//! use slip_pdf::{mm_to_pt, Align, ReceiptDocument};
//!
//! let mut doc = ReceiptDocument::new(mm_to_pt(80.0), mm_to_pt(60.0)).unwrap();
//! doc.set_font_size(9.0);
//! doc.insert_text("Hello", 10.0, 20.0, Align::Left);
//! let bytes = doc.to_bytes().unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

mod document;
mod text;

pub use document::ReceiptDocument;
pub use text::{encode_pdf_text, estimate_text_width};

use thiserror::Error;

/// Errors that can occur during receipt PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Invalid page dimensions: {0}pt x {1}pt")]
    InvalidDimensions(f64, f64),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for receipt PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Convert millimeters to PDF points
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * 72.0 / 25.4
}
