use super::ui;
use crate::core::{RateProvider, RateResponse};
use anyhow::Result;
use comfy_table::Cell;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

pub const USAGE_HINT: &str = "Please provide --from currency. Example: USD";

impl RateResponse {
    /// Renders the `rates` mapping as a table, or `None` if the payload has
    /// no usable mapping.
    pub fn display_as_table(&self, base_currency: &str) -> Option<String> {
        let rates = self.rates()?;

        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
        for (code, rate) in rates {
            table.add_row(vec![Cell::new(code), ui::rate_cell(rate.as_f64())]);
        }

        let mut output = format!(
            "Rates for {}\n",
            ui::style_text(base_currency, ui::StyleType::Title)
        );
        if let Some(updated) = self
            .as_map()
            .get("time_last_update_utc")
            .and_then(Value::as_str)
        {
            output.push_str(&ui::style_text(
                &format!("Last updated: {updated}"),
                ui::StyleType::Subtle,
            ));
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&table.to_string());
        Some(output)
    }
}

/// Runs the `rates` command, writing the rate table or a diagnostic to `out`.
pub async fn run<W: Write>(
    provider: &dyn RateProvider,
    from: Option<&str>,
    as_table: bool,
    out: &mut W,
) -> Result<()> {
    let Some(from) = from.filter(|code| !code.is_empty()) else {
        debug!("Missing --from for rates");
        writeln!(out, "{USAGE_HINT}")?;
        return Ok(());
    };

    let response = match provider.get_rates(from).await {
        Ok(response) => response,
        Err(e) => {
            info!(error = %e, "Rates request failed");
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    let rendered = match as_table.then(|| response.display_as_table(from)).flatten() {
        Some(table) => table,
        None => response.to_pretty_json()?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
