use contracts::domain::a004_status::{Status, StatusDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all hiring statuses
pub async fn fetch_statuses() -> Result<Vec<Status>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/statuses", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch statuses: {}", response.status()));
    }

    response
        .json::<Vec<Status>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a status
pub async fn save_status(dto: &StatusDto) -> Result<(), String> {
    let auth = auth_header()?;

    let response = match &dto.id {
        Some(id) => Request::put(&format!("{}/api/statuses/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/statuses", api_base())),
    }
    .header("Authorization", &auth)
    .json(dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save status: {}", response.status()));
    }

    Ok(())
}

/// Delete a status
pub async fn delete_status(id: &str) -> Result<(), String> {
    let auth = auth_header()?;

    let response = Request::delete(&format!("{}/api/statuses/{}", api_base(), id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete status: {}", response.status()));
    }

    Ok(())
}
