use contracts::domain::format_mapping::aggregate::{FormatMapping, FormatMappingForm};
use contracts::domain::format_mapping::validation::validate_mapping_form;

use super::repository;
use crate::shared::error::ServiceError;

pub async fn create(form: FormatMappingForm) -> Result<(), ServiceError> {
    let outcome = validate_mapping_form(&form);
    if !outcome.is_valid {
        return Err(ServiceError::Invalid(outcome.errors.summary()));
    }

    match repository::insert(&FormatMapping::from_form(&form)).await {
        Ok(()) => Ok(()),
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Err(ServiceError::Duplicate)
        }
        Err(e) => Err(ServiceError::Other(e)),
    }
}

/// Update content_box/marke of an existing mapping; the key is immutable and
/// comes from the path.
pub async fn update(id: &str, mut form: FormatMappingForm) -> Result<(), ServiceError> {
    if repository::get_by_id(id).await?.is_none() {
        return Err(ServiceError::NotFound);
    }

    form.standardized_name = id.to_string();
    let outcome = validate_mapping_form(&form);
    if !outcome.is_valid {
        return Err(ServiceError::Invalid(outcome.errors.summary()));
    }

    repository::update(&FormatMapping::from_form(&form)).await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<bool, ServiceError> {
    Ok(repository::delete(id).await?)
}

pub async fn get_by_id(id: &str) -> Result<Option<FormatMapping>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<FormatMapping>, ServiceError> {
    Ok(repository::list_all().await?)
}
