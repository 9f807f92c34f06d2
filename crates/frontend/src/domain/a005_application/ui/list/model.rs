use contracts::domain::a005_application::{Application, ReviewPatch};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all applications
pub async fn fetch_applications() -> Result<Vec<Application>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/applications", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch applications: {}", response.status()));
    }

    response
        .json::<Vec<Application>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit a full review patch; the server replaces the record and returns it
pub async fn update_application(id: &str, patch: &ReviewPatch) -> Result<Application, String> {
    let auth = auth_header()?;

    let response = Request::put(&format!("{}/api/applications/{}", api_base(), id))
        .header("Authorization", &auth)
        .json(patch)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update application: {}", response.status()));
    }

    response
        .json::<Application>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
