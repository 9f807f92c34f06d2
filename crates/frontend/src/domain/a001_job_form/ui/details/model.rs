use contracts::domain::a001_job_form::{JobForm, JobFormDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all form templates
pub async fn fetch_forms() -> Result<Vec<JobForm>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/job-forms", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch forms: {}", response.status()));
    }

    response
        .json::<Vec<JobForm>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single form template by id
pub async fn fetch_by_id(id: String) -> Result<JobForm, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/job-forms/{}", api_base(), id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<JobForm>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a form template
pub async fn save_form(dto: &JobFormDto) -> Result<(), String> {
    let auth = auth_header()?;

    let response = match &dto.id {
        Some(id) => Request::put(&format!("{}/api/job-forms/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/job-forms", api_base())),
    }
    .header("Authorization", &auth)
    .json(dto)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save form: {}", response.status()));
    }

    Ok(())
}

/// Delete a form template. Caller is responsible for refusing deletion of
/// templates referenced by existing jobs.
pub async fn delete_form(id: &str) -> Result<(), String> {
    let auth = auth_header()?;

    let response = Request::delete(&format!("{}/api/job-forms/{}", api_base(), id))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete form: {}", response.status()));
    }

    Ok(())
}
