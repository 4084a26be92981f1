use contracts::domain::platform::aggregate::{Platform, PlatformForm};
use contracts::domain::platform::validation::{validate_platform_form, PlatformFieldErrors};
use contracts::enums::platform_kind::PlatformKind;
use leptos::prelude::*;

use crate::domain::platform::api;
use crate::shared::api_utils::SaveError;

/// Which form input a change event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformField {
    Platform,
    PlatformName,
    PlatformId,
    StandardizedName,
}

/// ViewModel of the platform details dialog.
///
/// `submitting` gates the confirm button so a submit issues exactly one
/// gateway call.
#[derive(Clone)]
pub struct PlatformDetailsViewModel {
    pub form: RwSignal<PlatformForm>,
    pub errors: RwSignal<PlatformFieldErrors>,
    pub banner: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub is_edit: bool,
    existing: StoredValue<Vec<Platform>>,
}

impl PlatformDetailsViewModel {
    pub fn new(record: Option<Platform>, existing: Vec<Platform>) -> Self {
        let is_edit = record.is_some();
        let form = match &record {
            Some(r) => PlatformForm::from_record(r),
            // Blank dialogs start on the preset platform.
            None => PlatformForm {
                platform: PlatformKind::YouTube.display_name().to_string(),
                ..Default::default()
            },
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(PlatformFieldErrors::default()),
            banner: RwSignal::new(None),
            submitting: RwSignal::new(false),
            is_edit,
            existing: StoredValue::new(existing),
        }
    }

    /// Writes one field and clears its error immediately, independent of full
    /// re-validation.
    pub fn set_field(&self, field: PlatformField, value: String) {
        self.form.update(|f| match field {
            PlatformField::Platform => f.platform = value,
            PlatformField::PlatformName => f.platform_name = value,
            PlatformField::PlatformId => f.platform_id = value,
            PlatformField::StandardizedName => f.standardized_name = value,
        });
        self.errors.update(|e| match field {
            PlatformField::Platform => e.platform = None,
            PlatformField::PlatformName => e.platform_name = None,
            PlatformField::PlatformId => e.platform_id = None,
            PlatformField::StandardizedName => e.standardized_name = None,
        });
    }

    /// Validate, then issue exactly one insert or update.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }

        let form = self.form.get_untracked();
        let outcome = self
            .existing
            .with_value(|existing| validate_platform_form(&form, existing, self.is_edit));
        if !outcome.is_valid {
            self.errors.set(outcome.errors);
            return;
        }

        self.submitting.set(true);
        let errors = self.errors;
        let banner = self.banner;
        let submitting = self.submitting;
        let is_edit = self.is_edit;
        wasm_bindgen_futures::spawn_local(async move {
            let result = if is_edit {
                api::update_platform(&form.platform_id, &form).await
            } else {
                api::create_platform(&form).await
            };
            submitting.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(SaveError::Duplicate) => {
                    errors.update(|e| {
                        e.platform_id = Some("Platform ID already exists".to_string())
                    });
                }
                Err(SaveError::Other(msg)) => {
                    log::error!("Error saving platform: {msg}");
                    banner.set(Some(format!("Save failed: {msg}")));
                }
            }
        });
    }
}
