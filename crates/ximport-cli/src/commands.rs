//! Command bodies behind the `ximport` subcommands.
//!
//! Output goes to caller-supplied writers so the binary can hand in stdout
//! and stderr while tests capture it.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ximport_map::{MappingSummary, map_records, resolve};
use ximport_model::{MappingConfiguration, Record};

use crate::logging::redact_value;
use crate::output::{Resolution, render_resolutions, summary_table};

/// Load and validate a JSON mapping configuration.
pub fn load_configuration(path: &Path) -> Result<MappingConfiguration> {
    let file = File::open(path)
        .with_context(|| format!("open mapping configuration {}", path.display()))?;
    MappingConfiguration::from_json_reader(BufReader::new(file))
        .with_context(|| format!("load mapping configuration {}", path.display()))
}

/// Process exit code for a `resolve` run.
pub fn resolve_exit_code(all_resolved: bool) -> i32 {
    if all_resolved { 0 } else { 1 }
}

/// Resolve each value and write one `value -> code` line per value to `out`.
///
/// Returns true if every value resolved.
pub fn run_resolve<W: Write>(config_path: &Path, values: &[String], out: &mut W) -> Result<bool> {
    let configuration = load_configuration(config_path)?;
    let match_config = configuration.match_config()?;
    info!(
        entries = configuration.value_map.len(),
        soft = match_config.is_some(),
        "mapping configuration loaded"
    );

    let resolutions: Vec<Resolution> = values
        .iter()
        .map(|value| {
            let code = resolve(value, match_config.as_ref(), &configuration.value_map)
                .ok()
                .map(str::to_string);
            if code.is_none() {
                info!(value = redact_value(value), "value did not resolve");
            }
            Resolution {
                value: value.clone(),
                code,
            }
        })
        .collect();

    writeln!(out, "{}", render_resolutions(&resolutions))?;
    Ok(resolutions.iter().all(Resolution::is_resolved))
}

/// Map `column` of a JSON record file.
///
/// The mapped records are written to `out` as pretty JSON and the summary
/// table to `summary_out`.
pub fn run_map<W: Write, S: Write>(
    config_path: &Path,
    column: &str,
    records_path: &Path,
    out: &mut W,
    summary_out: &mut S,
) -> Result<MappingSummary> {
    let span = info_span!("map", column);
    let _guard = span.enter();

    let configuration = load_configuration(config_path)?;
    let file = File::open(records_path)
        .with_context(|| format!("open records {}", records_path.display()))?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse records {}", records_path.display()))?;
    info!(records = records.len(), "records loaded");

    let outcome = map_records(records, column, &configuration)
        .with_context(|| format!("map column {column}"))?;
    let json = serde_json::to_string_pretty(&outcome.records).context("serialize records")?;
    writeln!(out, "{json}")?;
    writeln!(summary_out, "{}", summary_table(column, &outcome.summary))?;
    Ok(outcome.summary)
}
