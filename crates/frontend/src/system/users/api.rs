use contracts::system::auth::ModeratorDto;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all moderator accounts
pub async fn fetch_moderators() -> Result<Vec<ModeratorDto>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/system/users", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch moderators: {}", response.status()));
    }

    response
        .json::<Vec<ModeratorDto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a moderator account
pub async fn save_moderator(dto: &ModeratorDto) -> Result<(), String> {
    let auth = auth_header()?;

    let response = match &dto.id {
        Some(id) => Request::put(&format!("{}/api/system/users/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/system/users", api_base())),
    }
    .header("Authorization", &auth)
    .json(dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save moderator: {}", response.status()));
    }

    Ok(())
}

/// Delete a moderator account
pub async fn delete_moderator(id: &str) -> Result<(), String> {
    let auth = auth_header()?;

    let response = Request::delete(&format!("{}/api/system/users/{}", api_base(), id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete moderator: {}", response.status()));
    }

    Ok(())
}
