use log::error;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug)]
pub struct ResponseErrorContext {
    pub body: String,
    pub code: StatusCode,
}

/// Wrapper for providing actual useful information about
/// why responses failed since reqwest throws that information
/// away when it encounters errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Unexpected body {0:?}")]
    UnexpectedBody(ResponseErrorContext),
    #[error("Request error")]
    Reqwest(#[from] reqwest::Error),
}

/// Reads the full response body before decoding so the underlying
/// connection is reclaimed on every exit path, success or not.
pub async fn parse_json_response<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
    let code = response.status();
    let url = response.url().clone();
    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|_error| {
        error!("Failed to parse response from {}", url);
        HttpError::UnexpectedBody(ResponseErrorContext { body, code })
    })
}
