use contracts::domain::platform::aggregate::{Platform, PlatformForm};
use contracts::domain::platform::validation::validate_platform_form;

use super::repository;
use crate::shared::error::ServiceError;

/// Insert a new platform. The dialog already validated the form; the same
/// validator runs here again so the gateway is safe in isolation.
pub async fn create(form: PlatformForm) -> Result<(), ServiceError> {
    let existing = repository::list_all().await?;
    let outcome = validate_platform_form(&form, &existing, false);
    if !outcome.is_valid {
        return Err(ServiceError::Invalid(outcome.errors.summary()));
    }

    match repository::insert(&Platform::from_form(&form)).await {
        Ok(()) => Ok(()),
        // The unique primary key is the last line of defense against a
        // concurrent insert racing the validation above.
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Err(ServiceError::Duplicate)
        }
        Err(e) => Err(ServiceError::Other(e)),
    }
}

/// Update the non-key fields of an existing platform. The path id wins over
/// whatever key the body carries: the natural key is immutable.
pub async fn update(id: &str, mut form: PlatformForm) -> Result<(), ServiceError> {
    let existing = repository::list_all().await?;
    if !existing.iter().any(|p| p.platform_id == id) {
        return Err(ServiceError::NotFound);
    }

    form.platform_id = id.to_string();
    let outcome = validate_platform_form(&form, &existing, true);
    if !outcome.is_valid {
        return Err(ServiceError::Invalid(outcome.errors.summary()));
    }

    repository::update(&Platform::from_form(&form)).await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<bool, ServiceError> {
    Ok(repository::delete(id).await?)
}

pub async fn get_by_id(id: &str) -> Result<Option<Platform>, ServiceError> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> Result<Vec<Platform>, ServiceError> {
    Ok(repository::list_all().await?)
}
