use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::record::{ConfigRecord, Mode, RawConfig};

/// Loads and validates a dashboard configuration file.
///
/// Accepts both the bare JSON shape and the deployed
/// `window.DASHBOARD_CFG = { ... };` form served to the browser, so the
/// exact artifact a bucket hosts can be checked as-is.
pub fn load(path: impl AsRef<Path>, mode: Mode) -> anyhow::Result<ConfigRecord> {
    let path = path.as_ref();

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;

    let raw: RawConfig = serde_json::from_str(strip_js_assignment(&source))
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;

    let record = raw
        .validate(mode)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;

    Ok(record)
}

// The deployment tooling writes `window.DASHBOARD_CFG = <json>;`; strip
// the assignment so the payload is plain JSON again.
fn strip_js_assignment(source: &str) -> &str {
    let trimmed = source.trim();

    if !trimmed.starts_with("window.") {
        return trimmed;
    }

    match trimmed.find('=') {
        Some(pos) => trimmed[pos + 1..].trim_start().trim_end_matches(';').trim_end(),
        None => trimmed,
    }
}

////////////////////////////////////////////////////////////////////////////////
