//! REST client for the platforms gateway.

use contracts::domain::platform::aggregate::{Platform, PlatformForm};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, SaveError};

pub async fn fetch_platforms() -> Result<Vec<Platform>, String> {
    let resp = Request::get(&api_url("/api/platforms"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn create_platform(form: &PlatformForm) -> Result<(), SaveError> {
    let resp = Request::post(&api_url("/api/platforms"))
        .json(form)
        .map_err(|e| SaveError::Other(e.to_string()))?
        .send()
        .await
        .map_err(|e| SaveError::Other(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    if resp.status() == 409 {
        return Err(SaveError::Duplicate);
    }
    Err(SaveError::Other(format!("HTTP {}", resp.status())))
}

pub async fn update_platform(id: &str, form: &PlatformForm) -> Result<(), SaveError> {
    let resp = Request::put(&api_url(&format!("/api/platforms/{}", id)))
        .json(form)
        .map_err(|e| SaveError::Other(e.to_string()))?
        .send()
        .await
        .map_err(|e| SaveError::Other(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    if resp.status() == 409 {
        return Err(SaveError::Duplicate);
    }
    Err(SaveError::Other(format!("HTTP {}", resp.status())))
}

pub async fn delete_platform(id: &str) -> Result<(), String> {
    let resp = Request::delete(&api_url(&format!("/api/platforms/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
