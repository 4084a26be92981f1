//! Field validation for the format-mapping dialog.
//!
//! All three fields are required non-blank. The natural key is immutable
//! when editing; the dialog enforces that by rendering the field read-only,
//! so no rule here needs an edit-mode flag.

use crate::domain::format_mapping::aggregate::FormatMappingForm;

/// Field-level errors of the format-mapping form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingFieldErrors {
    pub standardized_name: Option<String>,
    pub content_box: Option<String>,
    pub marke: Option<String>,
}

impl MappingFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.standardized_name.is_none() && self.content_box.is_none() && self.marke.is_none()
    }

    pub fn summary(&self) -> String {
        [&self.standardized_name, &self.content_box, &self.marke]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingValidationOutcome {
    pub is_valid: bool,
    pub errors: MappingFieldErrors,
}

pub fn validate_mapping_form(form: &FormatMappingForm) -> MappingValidationOutcome {
    let mut errors = MappingFieldErrors::default();

    if form.standardized_name.trim().is_empty() {
        errors.standardized_name = Some("Standardized Name is required".to_string());
    }
    if form.content_box.trim().is_empty() {
        errors.content_box = Some("Content Box is required".to_string());
    }
    if form.marke.trim().is_empty() {
        errors.marke = Some("Marke is required".to_string());
    }

    MappingValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_form_is_valid() {
        let form = FormatMappingForm {
            standardized_name: "some-show".to_string(),
            content_box: "Box A".to_string(),
            marke: "Brand".to_string(),
        };
        assert!(validate_mapping_form(&form).is_valid);
    }

    #[test]
    fn every_blank_field_gets_its_own_message() {
        let outcome = validate_mapping_form(&FormatMappingForm::default());
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.errors.standardized_name,
            Some("Standardized Name is required".to_string())
        );
        assert_eq!(
            outcome.errors.content_box,
            Some("Content Box is required".to_string())
        );
        assert_eq!(outcome.errors.marke, Some("Marke is required".to_string()));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let form = FormatMappingForm {
            standardized_name: "  ".to_string(),
            content_box: "Box".to_string(),
            marke: "Brand".to_string(),
        };
        let outcome = validate_mapping_form(&form);
        assert!(outcome.errors.standardized_name.is_some());
        assert!(outcome.errors.content_box.is_none());
    }
}
