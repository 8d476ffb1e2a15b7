//! HTTP client for the recognition service.
//!
//! In the browser (`csr`): a real `POST {base}/calculate` via `gloo-net`.
//! Native builds (tests): a stub that always fails, since there is no fetch.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into an [`ApiError`]. No retries and no timeout:
//! a hung request simply never resolves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ResponseEntry, VariableMap};
#[cfg(feature = "csr")]
use super::types::{CalculateRequest, parse_response};

/// `{base}/calculate`, tolerating a trailing slash on `base`.
pub fn calculate_endpoint(base_url: &str) -> String {
    format!("{}/calculate", base_url.trim_end_matches('/'))
}

/// Submit the canvas image and the full variable dictionary.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-OK status, or a body that
/// does not decode.
pub async fn calculate(base_url: &str, image: &str, variables: &VariableMap) -> Result<Vec<ResponseEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = calculate_endpoint(base_url);
        log::info!("sending canvas to {url} ({} variables)", variables.len());
        let body = CalculateRequest { image, dict_of_vars: variables };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        let text = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let entries = parse_response(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("calculate returned {} entries", entries.len());
        Ok(entries)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, image, variables);
        Err(ApiError::Request("not available outside the browser".to_owned()))
    }
}
