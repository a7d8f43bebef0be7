//! Mounted slip state
//!
//! A parsed `Template` is an inert definition. Mounting it creates the form
//! values and the preview slots; only a mounted slip can synchronize. All
//! entered state dies with the mount, there is no persistence.

use crate::calc::compute_totals;
use crate::schema::{
    Template, FIELD_DC_NUMBER, FIELD_EMPTY_WEIGHT, FIELD_LOAD_WEIGHT, SLOT_PREFIX, TARGET_DATE,
    TARGET_NET_WEIGHT, TARGET_QUANTITY, TARGET_TIME,
};
use chrono::NaiveDateTime;
use slip_format::{format_slip_date, format_slip_time};
use std::collections::HashMap;

/// A template in the mounted state: current form values plus preview slots
pub struct MountedSlip {
    template: Template,
    values: HashMap<String, String>,
    slots: HashMap<String, String>,
}

/// One label/value row of the preview, in template order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    /// Slot element identifier (`preview-` + target)
    pub slot_id: String,
    /// Receipt row label
    pub label: String,
    /// Last-written display string
    pub display: String,
}

impl Template {
    /// Transition into the mounted state
    ///
    /// Preview slots are created here; their initial content is each slot's
    /// static text, or empty.
    pub fn mount(self) -> MountedSlip {
        MountedSlip::new(self)
    }
}

impl MountedSlip {
    pub fn new(template: Template) -> Self {
        let slots = template
            .preview
            .slots
            .iter()
            .map(|s| (s.slot_id(), s.text.clone().unwrap_or_default()))
            .collect();

        Self {
            template,
            values: HashMap::new(),
            slots,
        }
    }

    /// The mounted template definition
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Set a form field's raw value
    pub fn set_field(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Current raw value of a form field; absent reads as empty
    pub fn field_value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    /// Document number used for the export filename, if entered
    pub fn dc_number(&self) -> Option<&str> {
        Some(self.field_value(FIELD_DC_NUMBER)).filter(|v| !v.is_empty())
    }

    /// Displayed content of a preview slot
    pub fn slot_display(&self, slot_id: &str) -> Option<&str> {
        self.slots.get(slot_id).map(String::as_str)
    }

    /// Preview rows in template order
    pub fn rows(&self) -> Vec<PreviewRow> {
        self.template
            .preview
            .slots
            .iter()
            .map(|slot| {
                let slot_id = slot.slot_id();
                let display = self.slots.get(&slot_id).cloned().unwrap_or_default();
                PreviewRow {
                    slot_id,
                    label: slot.label.clone(),
                    display,
                }
            })
            .collect()
    }

    /// Synchronize the preview with the current form values
    ///
    /// Timestamps are written first, then every field carrying a preview
    /// target mirrors its raw value, then the derived fields overwrite the
    /// `net-weight` and `quantity` targets. A target with no matching slot
    /// is skipped; slots with no matching source are left untouched.
    pub fn sync(&mut self, now: NaiveDateTime) {
        self.write_slot(TARGET_DATE, format_slip_date(now));
        self.write_slot(TARGET_TIME, format_slip_time(now));

        let mirrored: Vec<(String, String)> = self
            .template
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .preview_target
                    .as_ref()
                    .map(|target| (target.clone(), self.field_value(&field.id).to_string()))
            })
            .collect();
        for (target, value) in mirrored {
            self.write_slot(&target, value);
        }

        let totals = compute_totals(
            self.field_value(FIELD_LOAD_WEIGHT),
            self.field_value(FIELD_EMPTY_WEIGHT),
        );
        self.write_slot(TARGET_NET_WEIGHT, totals.net_weight_display());
        self.write_slot(TARGET_QUANTITY, totals.quantity_display());

        log::debug!(
            "synchronized preview '{}': {} slots",
            self.template.title,
            self.slots.len()
        );
    }

    fn write_slot(&mut self, target: &str, value: String) {
        let slot_id = format!("{SLOT_PREFIX}{target}");
        if let Some(display) = self.slots.get_mut(&slot_id) {
            *display = value;
        }
    }

    /// Leave the mounted state, discarding all entered and previewed values
    pub fn unmount(self) -> Template {
        self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn slip_template() -> Template {
        let mut template = Template::new("Weighment Slip");
        template
            .add_field(FIELD_DC_NUMBER, "DC Number", Some("dc-number"), FieldKind::Text)
            .add_field(FIELD_LOAD_WEIGHT, "Load Weight", Some("load-weight"), FieldKind::Number)
            .add_field(FIELD_EMPTY_WEIGHT, "Empty Weight", Some("empty-weight"), FieldKind::Number)
            .add_slot(TARGET_DATE, "Date")
            .add_slot(TARGET_TIME, "Time")
            .add_slot("dc-number", "DC No")
            .add_slot("load-weight", "Gross Wt (Kg)")
            .add_slot("empty-weight", "Tare Wt (Kg)")
            .add_slot(TARGET_NET_WEIGHT, "Net Wt (Kg)")
            .add_slot(TARGET_QUANTITY, "Qty (MT)");
        template
    }

    #[test]
    fn test_mount_initializes_slots_empty() {
        let slip = slip_template().mount();
        assert_eq!(slip.slot_display("preview-date"), Some(""));
        assert_eq!(slip.slot_display("preview-net-weight"), Some(""));
        assert_eq!(slip.slot_display("preview-missing"), None);
    }

    #[test]
    fn test_sync_mirrors_raw_values() {
        let mut slip = slip_template().mount();
        slip.set_field(FIELD_DC_NUMBER, "  DC/42 ");
        slip.sync(noon());

        // Raw value, no trimming
        assert_eq!(slip.slot_display("preview-dc-number"), Some("  DC/42 "));
    }

    #[test]
    fn test_sync_writes_derived_fields() {
        let mut slip = slip_template().mount();
        slip.set_field(FIELD_LOAD_WEIGHT, "1500");
        slip.set_field(FIELD_EMPTY_WEIGHT, "500");
        slip.sync(noon());

        assert_eq!(slip.slot_display("preview-net-weight"), Some("1000"));
        assert_eq!(slip.slot_display("preview-quantity"), Some("1.00"));
    }

    #[test]
    fn test_sync_writes_timestamps() {
        let mut slip = slip_template().mount();
        slip.sync(noon());

        assert_eq!(slip.slot_display("preview-date"), Some("5/1/2024"));
        assert_eq!(slip.slot_display("preview-time"), Some("12:00 PM"));
    }

    #[test]
    fn test_missing_field_reads_as_empty() {
        let mut slip = slip_template().mount();
        slip.sync(noon());

        assert_eq!(slip.slot_display("preview-dc-number"), Some(""));
        assert_eq!(slip.slot_display("preview-net-weight"), Some("0"));
        assert_eq!(slip.slot_display("preview-quantity"), Some("0.00"));
    }

    #[test]
    fn test_target_without_slot_is_skipped() {
        let mut template = Template::new("Partial");
        template
            .add_field(FIELD_LOAD_WEIGHT, "Load", Some("load-weight"), FieldKind::Number)
            .add_field(FIELD_EMPTY_WEIGHT, "Empty", Some("empty-weight"), FieldKind::Number)
            .add_slot(TARGET_NET_WEIGHT, "Net Wt (Kg)");

        let mut slip = template.mount();
        slip.set_field(FIELD_LOAD_WEIGHT, "900");
        slip.set_field(FIELD_EMPTY_WEIGHT, "100");
        slip.sync(noon());

        // load/empty/quantity/date/time slots do not exist; no error, and the
        // one present slot is written
        assert_eq!(slip.slot_display("preview-net-weight"), Some("800"));
        assert_eq!(slip.slot_display("preview-load-weight"), None);
    }

    #[test]
    fn test_sync_is_idempotent_for_fixed_inputs() {
        let mut slip = slip_template().mount();
        slip.set_field(FIELD_DC_NUMBER, "DC-1");
        slip.set_field(FIELD_LOAD_WEIGHT, "1234.5");
        slip.set_field(FIELD_EMPTY_WEIGHT, "234.5");

        slip.sync(noon());
        let first = slip.rows();
        slip.sync(noon());
        let second = slip.rows();

        assert_eq!(first, second);
    }

    #[test]
    fn test_static_slot_text_left_untouched() {
        let mut template = slip_template();
        template.preview.slots.push(crate::schema::SlotDef {
            target: "site".to_string(),
            label: "Site".to_string(),
            text: Some("Main Weighbridge".to_string()),
        });

        let mut slip = template.mount();
        slip.sync(noon());

        assert_eq!(slip.slot_display("preview-site"), Some("Main Weighbridge"));
    }

    #[test]
    fn test_dc_number_helper() {
        let mut slip = slip_template().mount();
        assert_eq!(slip.dc_number(), None);

        slip.set_field(FIELD_DC_NUMBER, "DC/2024#7");
        assert_eq!(slip.dc_number(), Some("DC/2024#7"));
    }

    #[test]
    fn test_unmount_discards_state() {
        let mut slip = slip_template().mount();
        slip.set_field(FIELD_DC_NUMBER, "DC-1");
        slip.sync(noon());

        let template = slip.unmount();
        let remounted = template.mount();

        assert_eq!(remounted.field_value(FIELD_DC_NUMBER), "");
        assert_eq!(remounted.slot_display("preview-dc-number"), Some(""));
    }
}
