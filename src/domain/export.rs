// Export request value objects
use super::dashboard::{DashboardIdentity, Panel};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Multi-select template variables, keyed by variable name. Value order per
/// name is significant and round-trips into the query string unchanged.
pub type DashboardVariables = BTreeMap<String, Vec<String>>;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 500;

/// Time bounds as raw timestamp strings; an empty string marks the bound as
/// missing. Callers with structured time go through [`TimeRange::from_instants`].
#[derive(Debug, Clone, Default)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_instants(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: grafana_timestamp(from),
            to: grafana_timestamp(to),
        }
    }
}

/// Whole epoch seconds with three literal zero digits appended. Grafana
/// expects milliseconds; the wire contract is string concatenation, which
/// also fixes how negative and sub-second instants serialize.
pub fn grafana_timestamp(t: DateTime<Utc>) -> String {
    format!("{}000", t.timestamp())
}

/// Requested render dimensions in pixels. These are request hints only; the
/// server decides the dimensions of the returned image.
#[derive(Debug, Clone, Copy)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
}

impl ExportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Substitutes the documented defaults (1000x500) for zero components.
    pub fn or_default(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { DEFAULT_WIDTH } else { width },
            height: if height == 0 { DEFAULT_HEIGHT } else { height },
        }
    }
}

/// Everything one export call needs. Constructed fresh per call; nothing
/// here persists across invocations.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub org_id: i64,
    pub panel: Panel,
    pub dashboard: DashboardIdentity,
    pub range: TimeRange,
    pub size: ExportSize,
    pub variables: DashboardVariables,
    pub timezone: String,
    pub output: PathBuf,
}
