pub mod prediction;

use gloo_net::http::{Request, Response};
use loan_common::FetchError;
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Decode a successful response body, rejecting non-success statuses first.
async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let status = response.status();
        log::error!("{} {} - HTTP error: {}", method, endpoint, status);
        return Err(FetchError::HttpStatus(status));
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let error = FetchError::Decode(e.to_string());
        log::error!("{} {} - {}", method, endpoint, error);
        error
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error = FetchError::Network(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    read_json("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error = FetchError::Decode(format!("failed to serialize request: {}", e));
            log::error!("POST {} - {}", endpoint, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = FetchError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })?;

    read_json("POST", endpoint, response).await
}
