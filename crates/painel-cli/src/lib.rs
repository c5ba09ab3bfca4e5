//! Painel CLI support
//!
//! File loading and rendering behind the `painel` binary. Everything returns pretty JSON so
//! the output can be piped into other tools.

#![warn(missing_docs)]

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use painel_model::{parse_records, FieldKey, ProjectRecord};
use painel_pipeline::{
    sorted_options, Clock, DashboardView, FilterCriteria, FixedClock, PipelineConfig, SystemClock,
};

/// Read a tracker snapshot (JSON array of records)
///
/// # Errors
/// Fails if the file cannot be read or is not a valid record payload
pub fn load_records(path: &Path) -> Result<Vec<ProjectRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading records from {}", path.display()))?;
    let records =
        parse_records(&text).with_context(|| format!("parsing records from {}", path.display()))?;
    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read filter criteria from JSON, or YAML for `.yaml`/`.yml` files
///
/// # Errors
/// Fails if the file cannot be read or parsed
pub fn load_criteria(path: &Path) -> Result<FilterCriteria> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading criteria from {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let criteria = if is_yaml {
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    };
    Ok(criteria)
}

/// Parse a `--today` override into a fixed clock
///
/// # Errors
/// Fails unless the value is a `YYYY-MM-DD` date
pub fn parse_today(raw: &str) -> Result<FixedClock> {
    let day = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid --today date '{raw}', expected YYYY-MM-DD"))?;
    Ok(FixedClock(day))
}

/// Inputs of the `view` command
#[derive(Debug, Clone, Default)]
pub struct ViewArgs<'a> {
    /// Records snapshot
    pub records: Option<&'a Path>,
    /// Optional criteria file
    pub criteria: Option<&'a Path>,
    /// Optional pipeline config file
    pub config: Option<&'a Path>,
    /// Optional `YYYY-MM-DD` reference day
    pub today: Option<&'a str>,
}

/// Build the dashboard view and render it as JSON
///
/// # Errors
/// Fails if any input file cannot be loaded
pub fn render_view(args: &ViewArgs<'_>) -> Result<String> {
    let Some(records_path) = args.records else {
        bail!("--records is required");
    };
    let records = load_records(records_path)?;
    let criteria = args
        .criteria
        .map(load_criteria)
        .transpose()?
        .unwrap_or_default();
    let config = match args.config {
        Some(path) => PipelineConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let fixed = args.today.map(parse_today).transpose()?;
    let clock: &dyn Clock = match &fixed {
        Some(fixed) => fixed,
        None => &SystemClock,
    };

    let view = DashboardView::build(&records, &criteria, &config, clock);
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Render the sorted option list of one field
///
/// # Errors
/// Fails if the records cannot be loaded or the field is unknown
pub fn render_options(records: &Path, field: &str) -> Result<String> {
    let key: FieldKey = field.parse()?;
    let records = load_records(records)?;
    Ok(serde_json::to_string_pretty(&sorted_options(&records, key))?)
}
