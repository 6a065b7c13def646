//! Amount conversion on top of a [`RateProvider`]

use super::rates::RateProvider;
use anyhow::{Result, anyhow};
use tracing::{debug, instrument};

/// How a zero value is treated when validating inputs and rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Zero counts as missing, so a zero rate is an invalid target.
    #[default]
    Lenient,
    /// Only absence counts as missing; zero is a legitimate value.
    Strict,
}

impl LookupMode {
    /// Whether `value` should be treated as "not provided".
    pub fn is_missing(self, value: f64) -> bool {
        match self {
            LookupMode::Lenient => value == 0.0,
            LookupMode::Strict => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: &str, to: &str) -> Self {
        ConversionRequest {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Converts `request.amount` from `request.from` into `request.to`.
///
/// Rates are fetched with `request.from` as the base; the result is
/// `amount * rates[to]` with no rounding.
#[instrument(
    name = "Convert",
    skip(provider),
    fields(from = %request.from, to = %request.to)
)]
pub async fn convert(
    provider: &dyn RateProvider,
    request: &ConversionRequest,
    mode: LookupMode,
) -> Result<f64> {
    let response = provider.get_rates(&request.from).await?;

    let rate = response
        .rate(&request.to)
        .filter(|rate| !mode.is_missing(*rate))
        .ok_or_else(|| anyhow!("Invalid target currency: {}", request.to))?;
    debug!(rate, "Found rate for target currency");

    Ok(request.amount * rate)
}
