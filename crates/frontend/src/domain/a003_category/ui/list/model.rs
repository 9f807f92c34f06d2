use contracts::domain::a003_category::{Category, CategoryDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all categories
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/categories", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a category
pub async fn save_category(dto: &CategoryDto) -> Result<(), String> {
    let auth = auth_header()?;

    let response = match &dto.id {
        Some(id) => Request::put(&format!("{}/api/categories/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/categories", api_base())),
    }
    .header("Authorization", &auth)
    .json(dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save category: {}", response.status()));
    }

    Ok(())
}

/// Delete a category
pub async fn delete_category(id: &str) -> Result<(), String> {
    let auth = auth_header()?;

    let response = Request::delete(&format!("{}/api/categories/{}", api_base(), id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete category: {}", response.status()));
    }

    Ok(())
}
