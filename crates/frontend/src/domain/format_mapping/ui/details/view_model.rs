use contracts::domain::format_mapping::aggregate::{FormatMapping, FormatMappingForm};
use contracts::domain::format_mapping::validation::{validate_mapping_form, MappingFieldErrors};
use leptos::prelude::*;

use crate::domain::format_mapping::api;
use crate::shared::api_utils::SaveError;

/// Which form input a change event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingField {
    StandardizedName,
    ContentBox,
    Marke,
}

/// ViewModel of the format-mapping details dialog.
#[derive(Clone)]
pub struct FormatMappingDetailsViewModel {
    pub form: RwSignal<FormatMappingForm>,
    pub errors: RwSignal<MappingFieldErrors>,
    pub banner: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub is_edit: bool,
}

impl FormatMappingDetailsViewModel {
    pub fn new(record: Option<FormatMapping>) -> Self {
        let is_edit = record.is_some();
        let form = record
            .as_ref()
            .map(FormatMappingForm::from_record)
            .unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(MappingFieldErrors::default()),
            banner: RwSignal::new(None),
            submitting: RwSignal::new(false),
            is_edit,
        }
    }

    /// Writes one field and clears its error immediately.
    pub fn set_field(&self, field: MappingField, value: String) {
        self.form.update(|f| match field {
            MappingField::StandardizedName => f.standardized_name = value,
            MappingField::ContentBox => f.content_box = value,
            MappingField::Marke => f.marke = value,
        });
        self.errors.update(|e| match field {
            MappingField::StandardizedName => e.standardized_name = None,
            MappingField::ContentBox => e.content_box = None,
            MappingField::Marke => e.marke = None,
        });
    }

    /// Validate, then issue exactly one insert or update.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }

        let form = self.form.get_untracked();
        let outcome = validate_mapping_form(&form);
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
                api::update_mapping(&form.standardized_name, &form).await
            } else {
                api::create_mapping(&form).await
            };
            submitting.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(SaveError::Duplicate) => {
                    errors.update(|e| {
                        e.standardized_name = Some("Standardized Name already exists".to_string())
                    });
                }
                Err(SaveError::Other(msg)) => {
                    log::error!("Error saving format mapping: {msg}");
                    banner.set(Some(format!("Save failed: {msg}")));
                }
            }
        });
    }
}
