use std::time::Duration;

use http::StatusCode;
use shared::api::payloads::WarmUp;
use thiserror::Error;
use tracing::{instrument, warn};

/// How many warm-up suggestions decorate the calendar view
pub const WARM_UP_COUNT: usize = 3;

const WARM_UP_TYPE: &str = "stretching";
const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Error)]
pub enum WarmUpError {
    #[error("warm-up request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("warm-up API returned {0}")]
    Status(StatusCode),
}

/// Client for the external exercise API the warm-up suggestions come from.
/// Every request is bounded by the configured timeout so a slow upstream
/// can't stall the calendar read
#[derive(Debug, Clone)]
pub struct WarmUpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WarmUpClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url, api_key })
    }

    pub async fn fetch_warm_ups(&self) -> Result<Vec<WarmUp>, WarmUpError> {
        let mut request = self.client.get(&self.base_url).query(&[("type", WARM_UP_TYPE)]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(WarmUpError::Status(response.status()));
        }

        let warm_ups: Vec<WarmUp> = response.json().await?;
        Ok(warm_ups.into_iter().take(WARM_UP_COUNT).collect())
    }

    /// The calendar read treats warm-ups as decoration: any failure here
    /// is logged and turned into an empty list so the primary view never
    /// breaks on upstream trouble
    #[instrument(skip(self))]
    pub async fn fetch_or_empty(&self) -> Vec<WarmUp> {
        match self.fetch_warm_ups().await {
            Ok(warm_ups) => warm_ups,
            Err(e) => {
                warn!("Error fetching warm-up exercises: {e}");
                Vec::new()
            }
        }
    }
}
