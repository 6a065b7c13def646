//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded rates payload.
///
/// The upstream shape is not guaranteed, so the body is kept as a plain JSON
/// object and only `rates[<code>]` is ever interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RateResponse(Map<String, Value>);

impl RateResponse {
    pub fn new(body: Map<String, Value>) -> Self {
        RateResponse(body)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The `rates` mapping, if the payload carries one.
    pub fn rates(&self) -> Option<&Map<String, Value>> {
        self.0.get("rates").and_then(Value::as_object)
    }

    /// Numeric multiplier for `code`. Non-numeric values count as absent.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates()
            .and_then(|rates| rates.get(code))
            .and_then(Value::as_f64)
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn get_rates(&self, base_currency: &str) -> Result<RateResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> RateResponse {
        serde_json::from_value(value).expect("Failed to build response")
    }

    #[test]
    fn test_rate_lookup() {
        let resp = response(json!({
            "result": "success",
            "base_code": "USD",
            "rates": { "INR": 83.0, "EUR": 0.9, "JPY": 150 }
        }));

        assert_eq!(resp.rate("INR"), Some(83.0));
        assert_eq!(resp.rate("JPY"), Some(150.0));
        assert_eq!(resp.rate("GBP"), None);
        assert_eq!(resp.rates().map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_rate_lookup_ignores_non_numeric_values() {
        let resp = response(json!({ "rates": { "INR": "83.0", "EUR": null } }));
        assert_eq!(resp.rate("INR"), None);
        assert_eq!(resp.rate("EUR"), None);
    }

    #[test]
    fn test_missing_or_malformed_rates_mapping() {
        assert!(response(json!({ "result": "error" })).rates().is_none());
        assert!(response(json!({ "rates": [1, 2] })).rates().is_none());
        assert_eq!(response(json!({})).rate("USD"), None);
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let parsed: Result<RateResponse, _> = serde_json::from_str("[1, 2, 3]");
        assert!(parsed.is_err());
    }
}
