use super::ui::format_number;
use crate::core::{ConversionRequest, LookupMode, RateProvider, convert};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

pub const USAGE_HINT: &str = "Please provide --from, --to, and --amount";
pub const USAGE_EXAMPLE: &str = "Example: currency-client convert --from USD --to INR --amount 10";

/// Builds a request from raw CLI input, or `None` if any field is missing.
///
/// Empty codes always count as missing; a zero amount does too unless
/// `mode` is [`LookupMode::Strict`].
pub fn build_request(
    from: Option<&str>,
    to: Option<&str>,
    amount: Option<f64>,
    mode: LookupMode,
) -> Option<ConversionRequest> {
    let from = from.filter(|code| !code.is_empty())?;
    let to = to.filter(|code| !code.is_empty())?;
    let amount = amount.filter(|amount| !mode.is_missing(*amount))?;
    Some(ConversionRequest::new(amount, from, to))
}

pub fn format_conversion(request: &ConversionRequest, result: f64) -> String {
    format!(
        "{} {} = {} {}",
        format_number(request.amount),
        request.from,
        format_number(result),
        request.to
    )
}

/// Runs the `convert` command, writing the conversion line or a diagnostic
/// to `out`.
pub async fn run<W: Write>(
    provider: &dyn RateProvider,
    from: Option<&str>,
    to: Option<&str>,
    amount: Option<f64>,
    mode: LookupMode,
    out: &mut W,
) -> Result<()> {
    let Some(request) = build_request(from, to, amount, mode) else {
        debug!("Missing arguments for convert");
        writeln!(out, "{USAGE_HINT}")?;
        writeln!(out, "{USAGE_EXAMPLE}")?;
        return Ok(());
    };

    match convert(provider, &request, mode).await {
        Ok(result) if mode.is_missing(result) => {
            debug!("Conversion produced zero, nothing to print");
        }
        Ok(result) => writeln!(out, "{}", format_conversion(&request, result))?,
        Err(e) => {
            info!(error = %e, "Conversion failed");
            writeln!(out, "{e}")?;
        }
    }
    Ok(())
}
