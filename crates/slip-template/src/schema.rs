//! Template JSON schema types

use serde::{Deserialize, Serialize};

/// Prefix joining a preview target to its slot identifier
///
/// `slot id = "preview-" + target` is the sole binding contract between a
/// template's form markup and its preview markup.
pub const SLOT_PREFIX: &str = "preview-";

/// Field read by the calculator as the loaded-vehicle weight (kilograms)
pub const FIELD_LOAD_WEIGHT: &str = "load-weight";

/// Field read by the calculator as the empty-vehicle weight (kilograms)
pub const FIELD_EMPTY_WEIGHT: &str = "empty-weight";

/// Field whose value names the exported PDF
pub const FIELD_DC_NUMBER: &str = "dc-number";

/// Slot target written with the synchronization date
pub const TARGET_DATE: &str = "date";

/// Slot target written with the synchronization time
pub const TARGET_TIME: &str = "time";

/// Slot target written by the calculator with the clamped net weight
pub const TARGET_NET_WEIGHT: &str = "net-weight";

/// Slot target written by the calculator with the quantity in metric tons
pub const TARGET_QUANTITY: &str = "quantity";

/// Root template structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Schema version
    pub version: String,

    /// Template display title
    pub title: String,

    /// Form field definitions
    #[serde(default)]
    pub fields: Vec<FieldDef>,

    /// Preview layout
    pub preview: PreviewDef,
}

impl Template {
    /// Create an empty template with the given title
    pub fn new(title: &str) -> Self {
        Self {
            version: "1.0".to_string(),
            title: title.to_string(),
            fields: Vec::new(),
            preview: PreviewDef::default(),
        }
    }

    /// Add a form field definition
    pub fn add_field(
        &mut self,
        id: &str,
        label: &str,
        preview_target: Option<&str>,
        kind: FieldKind,
    ) -> &mut Self {
        self.fields.push(FieldDef {
            id: id.to_string(),
            label: label.to_string(),
            preview_target: preview_target.map(str::to_string),
            kind,
        });
        self
    }

    /// Add a preview slot definition
    pub fn add_slot(&mut self, target: &str, label: &str) -> &mut Self {
        self.preview.slots.push(SlotDef {
            target: target.to_string(),
            label: label.to_string(),
            text: None,
        });
        self
    }

    /// Look up a field definition by id
    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Serialize the template to pretty-printed JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Form field definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field identifier (opaque, unique within a template)
    pub id: String,

    /// Form label
    #[serde(default)]
    pub label: String,

    /// Preview target identifier; only fields carrying one are mirrored
    #[serde(rename = "previewTarget")]
    #[serde(default)]
    pub preview_target: Option<String>,

    /// Input kind (advisory; no validation beyond numeric coercion)
    #[serde(default)]
    pub kind: FieldKind,
}

/// Form input kind
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
}

/// Preview layout
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewDef {
    /// Heading printed at the top of the receipt; falls back to the title
    #[serde(default)]
    pub heading: Option<String>,

    /// Slots in display order
    #[serde(default)]
    pub slots: Vec<SlotDef>,
}

/// Preview slot definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDef {
    /// Target identifier this slot is keyed by
    pub target: String,

    /// Receipt row label
    #[serde(default)]
    pub label: String,

    /// Static caption shown until synchronization overwrites it
    #[serde(default)]
    pub text: Option<String>,
}

impl SlotDef {
    /// Slot element identifier derived by the naming convention
    pub fn slot_id(&self) -> String {
        format!("{SLOT_PREFIX}{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_def() {
        let json = r#"{
            "id": "load-weight",
            "label": "Load Weight (Kg)",
            "previewTarget": "load-weight",
            "kind": "number"
        }"#;

        let field: FieldDef = serde_json::from_str(json).unwrap();

        assert_eq!(field.id, "load-weight");
        assert_eq!(field.preview_target, Some("load-weight".to_string()));
        assert_eq!(field.kind, FieldKind::Number);
    }

    #[test]
    fn test_field_kind_defaults_to_text() {
        let json = r#"{ "id": "dc-number" }"#;

        let field: FieldDef = serde_json::from_str(json).unwrap();

        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.preview_target, None);
        assert_eq!(field.label, "");
    }

    #[test]
    fn test_slot_id_naming_convention() {
        let slot = SlotDef {
            target: "net-weight".to_string(),
            label: "Net Wt (Kg)".to_string(),
            text: None,
        };
        assert_eq!(slot.slot_id(), "preview-net-weight");
    }

    #[test]
    fn test_builder_roundtrip() {
        let mut template = Template::new("Weighment Slip");
        template
            .add_field(FIELD_LOAD_WEIGHT, "Load Weight", Some("load-weight"), FieldKind::Number)
            .add_slot("load-weight", "Gross Wt (Kg)");

        let json = template.to_json().unwrap();
        let parsed: Template = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.title, "Weighment Slip");
        assert_eq!(parsed.fields.len(), 1);
        assert_eq!(parsed.preview.slots.len(), 1);
    }
}
