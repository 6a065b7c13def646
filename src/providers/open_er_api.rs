use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::config::AppConfig;
use crate::core::rates::{RateProvider, RateResponse};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches rate tables with a GET to `<base_url><base_currency>`.
pub struct HttpRateClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRateClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_timeout(config.base_url(), REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("currency-client/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(HttpRateClient {
            base_url: base_url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl RateProvider for HttpRateClient {
    #[instrument(
        name = "RatesFetch",
        skip(self),
        fields(base = %base_currency)
    )]
    async fn get_rates(&self, base_currency: &str) -> Result<RateResponse> {
        // The code is sent as-is; the API is the one to reject unknown codes.
        let url = format!("{}{}", self.base_url, base_currency);
        debug!("Requesting rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("API Error: {e}"))?;

        debug!(status = %response.status(), "Received rates response");

        let response = response
            .error_for_status()
            .map_err(|e| anyhow!("API Error: {e}"))?;

        response
            .json::<RateResponse>()
            .await
            .map_err(|e| anyhow!("API Error: {e}"))
    }
}
