//! Template JSON parsing

use crate::{Result, Template, TemplateError};
use std::collections::HashSet;

/// Parse a template from JSON and validate its identifiers
pub fn parse_template(json: &str) -> Result<Template> {
    let template: Template =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    validate(&template)?;

    log::debug!(
        "parsed template '{}': {} fields, {} slots",
        template.title,
        template.fields.len(),
        template.preview.slots.len()
    );

    Ok(template)
}

/// One value per identifier at a time requires the identifiers to be unique
fn validate(template: &Template) -> Result<()> {
    let mut field_ids = HashSet::new();
    for field in &template.fields {
        if field.id.is_empty() {
            return Err(TemplateError::InvalidTemplate(
                "field with empty id".to_string(),
            ));
        }
        if !field_ids.insert(field.id.as_str()) {
            return Err(TemplateError::InvalidTemplate(format!(
                "duplicate field id '{}'",
                field.id
            )));
        }
    }

    let mut slot_targets = HashSet::new();
    for slot in &template.preview.slots {
        if slot.target.is_empty() {
            return Err(TemplateError::InvalidTemplate(
                "preview slot with empty target".to_string(),
            ));
        }
        if !slot_targets.insert(slot.target.as_str()) {
            return Err(TemplateError::InvalidTemplate(format!(
                "duplicate preview slot target '{}'",
                slot.target
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        let json = r#"{
            "version": "1.0",
            "title": "Weighment Slip",
            "fields": [
                { "id": "dc-number", "label": "DC Number", "previewTarget": "dc-number" }
            ],
            "preview": {
                "slots": [
                    { "target": "dc-number", "label": "DC No" }
                ]
            }
        }"#;

        let template = parse_template(json).unwrap();

        assert_eq!(template.version, "1.0");
        assert_eq!(template.fields.len(), 1);
        assert_eq!(template.preview.slots.len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_template("{ not json");
        assert!(matches!(result, Err(TemplateError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_duplicate_field_ids() {
        let json = r#"{
            "version": "1.0",
            "title": "t",
            "fields": [
                { "id": "dc-number" },
                { "id": "dc-number" }
            ],
            "preview": { "slots": [] }
        }"#;

        let result = parse_template(json);
        assert!(matches!(result, Err(TemplateError::InvalidTemplate(_))));
    }

    #[test]
    fn test_parse_rejects_duplicate_slot_targets() {
        let json = r#"{
            "version": "1.0",
            "title": "t",
            "fields": [],
            "preview": {
                "slots": [
                    { "target": "date" },
                    { "target": "date" }
                ]
            }
        }"#;

        let result = parse_template(json);
        assert!(matches!(result, Err(TemplateError::InvalidTemplate(_))));
    }

    #[test]
    fn test_parse_rejects_empty_identifiers() {
        let json = r#"{
            "version": "1.0",
            "title": "t",
            "fields": [ { "id": "" } ],
            "preview": { "slots": [] }
        }"#;

        let result = parse_template(json);
        assert!(matches!(result, Err(TemplateError::InvalidTemplate(_))));
    }
}
