//! WASM bindings for weighslip
//!
//! This crate provides a JavaScript-friendly API for:
//! - Parsing and mounting slip templates
//! - Pushing form edits and synchronizing the receipt preview
//! - Printing via the browser's native dialog
//! - Exporting the slip as PDF bytes with its download filename
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { SlipTemplate } from 'weighslip-wasm';
//!
//! await init();
//!
//! const slip = SlipTemplate.fromJson(templateJson);
//! slip.mount();
//!
//! slip.setField('load-weight', '1500');
//! slip.setField('empty-weight', '500');
//!
//! const preview = slip.updatePreview();
//! // preview['preview-net-weight'] === '1000'
//!
//! const bytes = slip.saveAsPdf();
//! download(bytes, slip.pdfFilename());
//! ```

use slip_template::{parse_template, MountedSlip, Template};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Wall-clock time for synchronization and export
fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Display formatting utilities
#[wasm_bindgen]
pub struct SlipFormat;

#[wasm_bindgen]
impl SlipFormat {
    /// Coerce a raw form value to a number the way the calculator does
    ///
    /// @param raw - Raw input value
    /// @returns Number, or 0 when no number can be read
    #[wasm_bindgen(js_name = coerceFloat)]
    pub fn coerce_float(raw: &str) -> f64 {
        slip_format::coerce_float(raw).unwrap_or(0.0)
    }

    /// Render a value with a fixed number of decimal places
    ///
    /// @param value - Number to render
    /// @param decimals - Decimal places
    /// @returns Formatted string
    #[wasm_bindgen(js_name = formatFixed)]
    pub fn format_fixed(value: f64, decimals: u32) -> String {
        slip_format::format_fixed(value, decimals)
    }

    /// Replace every character outside `[A-Za-z0-9]` with `_`
    ///
    /// @param raw - Token to sanitize
    /// @returns Sanitized token
    #[wasm_bindgen(js_name = sanitizeToken)]
    pub fn sanitize_token(raw: &str) -> String {
        slip_format::sanitize_token(raw)
    }
}

/// A slip template and, once mounted, its form and preview state
#[wasm_bindgen]
pub struct SlipTemplate {
    template: Template,
    mounted: Option<MountedSlip>,
}

#[wasm_bindgen]
impl SlipTemplate {
    /// Parse a template from JSON
    ///
    /// A fetch that returned malformed or empty text fails here; the caller
    /// alerts and stays on the selection screen with nothing mounted.
    ///
    /// @param json - Template JSON string
    /// @returns SlipTemplate instance
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SlipTemplate, JsValue> {
        let template = parse_template(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SlipTemplate {
            template,
            mounted: None,
        })
    }

    /// Template display title
    pub fn title(&self) -> String {
        self.template.title.clone()
    }

    /// Whether a slip is currently mounted
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Mount the template, creating fresh form and preview state
    pub fn mount(&mut self) {
        self.mounted = Some(self.template.clone().mount());
    }

    /// Unmount, discarding all entered values
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    fn slip_mut(&mut self) -> Result<&mut MountedSlip, JsValue> {
        self.mounted
            .as_mut()
            .ok_or_else(|| JsValue::from_str("No slip mounted. Call mount() first."))
    }

    /// Set a form field's raw value
    ///
    /// @param id - Field identifier
    /// @param value - Raw input value
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, id: &str, value: &str) -> Result<(), JsValue> {
        self.slip_mut()?.set_field(id, value);
        Ok(())
    }

    /// Synchronize and return the preview as a slot-id to display-string map
    ///
    /// @returns Object keyed by slot element identifiers
    #[wasm_bindgen(js_name = updatePreview)]
    pub fn update_preview(&mut self) -> Result<JsValue, JsValue> {
        let slip = self.slip_mut()?;
        slip.sync(now());

        let preview: BTreeMap<String, String> = slip
            .rows()
            .into_iter()
            .map(|row| (row.slot_id, row.display))
            .collect();

        serde_wasm_bindgen::to_value(&preview).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Synchronize, then open the browser's native print dialog
    #[wasm_bindgen(js_name = printSlip)]
    pub fn print_slip(&mut self) -> Result<(), JsValue> {
        self.slip_mut()?.sync(now());

        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        window.print()
    }

    /// Synchronize and export the slip as PDF bytes
    ///
    /// @returns PDF bytes (Uint8Array)
    #[wasm_bindgen(js_name = saveAsPdf)]
    pub fn save_as_pdf(&mut self) -> Result<Vec<u8>, JsValue> {
        let exported = self
            .slip_mut()?
            .export_pdf(now())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(exported.bytes)
    }

    /// Download filename an export performed now would carry
    ///
    /// @returns Filename string
    #[wasm_bindgen(js_name = pdfFilename)]
    pub fn pdf_filename(&self) -> Result<String, JsValue> {
        let slip = self
            .mounted
            .as_ref()
            .ok_or_else(|| JsValue::from_str("No slip mounted. Call mount() first."))?;
        Ok(slip.pdf_filename(now()))
    }
}
