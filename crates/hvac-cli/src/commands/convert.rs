//! Convert command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use hvac_core::{ConversionRequest, UnitSelection, format_value};

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct ConversionOutput {
    value: f64,
    from: UnitSelection,
    to: UnitSelection,
    result: f64,
    label: String,
}

pub fn cmd_convert(
    value: f64,
    from: UnitSelection,
    to: UnitSelection,
    format: OutputFormat,
) -> Result<()> {
    let result = ConversionRequest::new(value, from, to)
        .apply()
        .context("Conversion failed")?;
    let label = format!(
        "{} {} = {} {}",
        format_value(value),
        from.symbol(),
        format_value(result),
        to.symbol()
    );

    let content = match format {
        OutputFormat::Text => label,
        OutputFormat::Json => serde_json::to_string_pretty(&ConversionOutput {
            value,
            from,
            to,
            result,
            label,
        })
        .context("Failed to serialize conversion")?,
    };
    println!("{}", content);
    Ok(())
}
