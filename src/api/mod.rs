pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use error::Error;
use serde_json::Value;

pub type Query<'a> = [(&'a str, String)];

pub fn api(api_url: String, parking_rows: u32) -> Result<model::Api, Error> {
    let client = reqwest::ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .or(Err(Error::InternalError))?;

    Ok(model::Api {
        api_url,
        parking_rows,
        client,
    })
}

/// Map transport-level (or status) failure to Error
fn map_api_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(http::StatusCode::TOO_MANY_REQUESTS) => Error::RateExceeded(error.to_string()),
        _ => Error::ApiError(error.to_string()),
    }
}

/// Map non-2xx response to Error, keeping the response body for the error page.
fn map_http_status(status: http::StatusCode, body: String) -> Error {
    match status {
        http::StatusCode::TOO_MANY_REQUESTS => Error::RateExceeded(body),
        _ => Error::ApiError(format!("{}: {}", status, body)),
    }
}

/// Opendatasoft reports failures as `{"errorcode": ..., "error": "..."}`, in some cases
/// with a 2xx status. Return those as Error and carry any other `value` forward.
fn map_response_status(value: Value) -> Result<Value, Error> {
    match value.get("error").and_then(Value::as_str) {
        Some(_) => Err(Error::ApiError(value.to_string())),
        None => Ok(value),
    }
}

/// Run a records search against the open data portal.
pub async fn search(api: &model::Api, query: &Query<'_>) -> Result<Value, Error> {
    let url = format!("{}{}", api.api_url, endpoint::SEARCH);
    log::debug!("GET {} {:?}", url, query);

    let response = api
        .client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(map_api_err)?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))?;

    log::trace!("query: {:?}, status: {}, response_text: {}", query, status, text);

    if !status.is_success() {
        return Err(map_http_status(status, text));
    }

    serde_json::from_str::<Value>(&text)
        .map_err(|e| Error::InvalidResponse(text, e.to_string()))
        .and_then(map_response_status)
}
