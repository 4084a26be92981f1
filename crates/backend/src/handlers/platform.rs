use axum::{extract::Path, http::StatusCode, Json};

use contracts::domain::platform::aggregate::{Platform, PlatformForm};

use crate::domain::platform::service;

/// GET /api/platforms
pub async fn list_all() -> Result<Json<Vec<Platform>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Error fetching platforms: {e}");
            Err(e.status())
        }
    }
}

/// GET /api/platforms/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Platform>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Error fetching platform {id}: {e}");
            Err(e.status())
        }
    }
}

/// POST /api/platforms
pub async fn create(Json(form): Json<PlatformForm>) -> StatusCode {
    match service::create(form).await {
        Ok(()) => StatusCode::CREATED,
        Err(e) => {
            tracing::error!("Error creating platform: {e}");
            e.status()
        }
    }
}

/// PUT /api/platforms/:id
pub async fn update(Path(id): Path<String>, Json(form): Json<PlatformForm>) -> StatusCode {
    match service::update(&id, form).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::error!("Error updating platform {id}: {e}");
            e.status()
        }
    }
}

/// DELETE /api/platforms/:id
pub async fn delete(Path(id): Path<String>) -> StatusCode {
    match service::delete(&id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!("Error deleting platform {id}: {e}");
            e.status()
        }
    }
}
