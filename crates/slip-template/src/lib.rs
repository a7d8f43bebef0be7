//! Slip Template - template schema, preview synchronization, slip export
//!
//! This crate provides:
//! - Template JSON schema types (form fields and preview slots)
//! - Template parsing from JSON
//! - The mounted-slip lifecycle (form values and preview state)
//! - Preview synchronization with the derived weighment calculations
//! - Rendering a synchronized preview to receipt PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use slip_template::parse_template;
//!
//! let mut slip = parse_template(template_json)?.mount();
//! slip.set_field("load-weight", "1500");
//! slip.set_field("empty-weight", "500");
//! let exported = slip.export_pdf(chrono::Local::now().naive_local())?;
//! std::fs::write(&exported.filename, &exported.bytes)?;
//! ```

mod calc;
mod mount;
pub mod parser;
mod renderer;
mod schema;

pub use calc::{compute_totals, WeighmentTotals};
pub use mount::{MountedSlip, PreviewRow};
pub use parser::parse_template;
pub use renderer::{ExportedSlip, SlipRenderer};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] slip_pdf::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
