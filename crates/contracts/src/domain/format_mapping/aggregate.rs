use serde::{Deserialize, Serialize};

/// Canonical content-box / brand labels for one standardized name.
///
/// `standardized_name` is the natural key, unique and immutable after
/// creation. Platforms reference it by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMapping {
    pub standardized_name: String,
    pub content_box: String,
    pub marke: String,
}

/// Form payload of the format-mapping create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMappingForm {
    pub standardized_name: String,
    pub content_box: String,
    pub marke: String,
}

impl FormatMappingForm {
    pub fn from_record(record: &FormatMapping) -> Self {
        Self {
            standardized_name: record.standardized_name.clone(),
            content_box: record.content_box.clone(),
            marke: record.marke.clone(),
        }
    }
}

impl FormatMapping {
    pub fn from_form(form: &FormatMappingForm) -> Self {
        Self {
            standardized_name: form.standardized_name.clone(),
            content_box: form.content_box.clone(),
            marke: form.marke.clone(),
        }
    }
}
