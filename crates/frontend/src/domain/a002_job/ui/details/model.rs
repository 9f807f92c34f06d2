use contracts::domain::a002_job::{Job, NewJobRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, auth_header};

/// Fetch all jobs
pub async fn fetch_jobs() -> Result<Vec<Job>, String> {
    let auth = auth_header()?;

    let response = Request::get(&format!("{}/api/jobs", api_base()))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch jobs: {}", response.status()));
    }

    response
        .json::<Vec<Job>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new job, optionally carrying a collected form submission
pub async fn create_job(request: &NewJobRequest) -> Result<(), String> {
    let auth = auth_header()?;

    let response = Request::post(&format!("{}/api/jobs", api_base()))
        .header("Authorization", &auth)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create job: {}", response.status()));
    }

    Ok(())
}
