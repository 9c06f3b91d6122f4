//! Rendering reports as JSON or CSV.

use anyhow::Result;
use std::fmt::Write;
use urlfeat_core::FeatureReport;

use crate::cli::FormatArg;

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render reports. JSON: pretty for a single report, one compact object per
/// line otherwise. CSV: header from the first report's columns, then one row each.
pub fn render(reports: &[FeatureReport], format: FormatArg, single: bool) -> Result<String> {
    let mut out = String::new();
    match format {
        FormatArg::Json => {
            for r in reports {
                let line = if single {
                    serde_json::to_string_pretty(r)?
                } else {
                    serde_json::to_string(r)?
                };
                writeln!(out, "{}", line)?;
            }
        }
        FormatArg::Csv => {
            let Some(first) = reports.first() else {
                return Ok(out);
            };
            writeln!(out, "url,{}", first.columns().join(","))?;
            for r in reports {
                let values: Vec<String> = r.numeric_values().iter().map(|v| v.to_string()).collect();
                writeln!(out, "{},{}", csv_field(&r.url), values.join(","))?;
            }
        }
    }
    Ok(out)
}
