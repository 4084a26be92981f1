use axum::{extract::Path, http::StatusCode, Json};

use contracts::domain::format_mapping::aggregate::{FormatMapping, FormatMappingForm};

use crate::domain::format_mapping::service;

/// GET /api/format_mappings
pub async fn list_all() -> Result<Json<Vec<FormatMapping>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Error fetching format mappings: {e}");
            Err(e.status())
        }
    }
}

/// GET /api/format_mappings/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<FormatMapping>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Error fetching format mapping {id}: {e}");
            Err(e.status())
        }
    }
}

/// POST /api/format_mappings
pub async fn create(Json(form): Json<FormatMappingForm>) -> StatusCode {
    match service::create(form).await {
        Ok(()) => StatusCode::CREATED,
        Err(e) => {
            tracing::error!("Error creating format mapping: {e}");
            e.status()
        }
    }
}

/// PUT /api/format_mappings/:id
pub async fn update(Path(id): Path<String>, Json(form): Json<FormatMappingForm>) -> StatusCode {
    match service::update(&id, form).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Error updating format mapping {id}: {e}");
            e.status()
        }
    }
}

/// DELETE /api/format_mappings/:id
pub async fn delete(Path(id): Path<String>) -> StatusCode {
    match service::delete(&id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!("Error deleting format mapping {id}: {e}");
            e.status()
        }
    }
}
