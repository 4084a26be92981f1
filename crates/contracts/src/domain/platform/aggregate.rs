use serde::{Deserialize, Serialize};

/// One external content-source identity.
///
/// `platform_id` is the natural key: unique across all platforms and
/// immutable after creation. `standardized_name` references a
/// `FormatMapping` by value; the link is soft and never enforced
/// referentially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub platform_id: String,
    pub platform: String,
    pub platform_name: String,
    pub standardized_name: String,
}

/// Form payload of the platform create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformForm {
    pub platform_id: String,
    pub platform: String,
    pub platform_name: String,
    pub standardized_name: String,
}

impl PlatformForm {
    pub fn from_record(record: &Platform) -> Self {
        Self {
            platform_id: record.platform_id.clone(),
            platform: record.platform.clone(),
            platform_name: record.platform_name.clone(),
            standardized_name: record.standardized_name.clone(),
        }
    }
}

impl Platform {
    pub fn from_form(form: &PlatformForm) -> Self {
        Self {
            platform_id: form.platform_id.clone(),
            platform: form.platform.clone(),
            platform_name: form.platform_name.clone(),
            standardized_name: form.standardized_name.clone(),
        }
    }
}
