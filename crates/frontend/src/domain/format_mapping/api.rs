//! REST client for the format-mappings gateway.

use contracts::domain::format_mapping::aggregate::{FormatMapping, FormatMappingForm};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, SaveError};

pub async fn fetch_mappings() -> Result<Vec<FormatMapping>, String> {
    let resp = Request::get(&api_url("/api/format_mappings"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn create_mapping(form: &FormatMappingForm) -> Result<(), SaveError> {
    let resp = Request::post(&api_url("/api/format_mappings"))
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

pub async fn update_mapping(id: &str, form: &FormatMappingForm) -> Result<(), SaveError> {
    let resp = Request::put(&api_url(&format!("/api/format_mappings/{}", id)))
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

pub async fn delete_mapping(id: &str) -> Result<(), String> {
    let resp = Request::delete(&api_url(&format!("/api/format_mappings/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
