use crate::domain::dashboard::{DashboardIdentity, Panel};
use crate::domain::export::{DashboardVariables, ExportRequest, ExportSize, TimeRange};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct GrafanaConfig {
    pub grafana: GrafanaSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GrafanaSettings {
    pub host: String,
    pub token: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub dashboard_uid: String,
    pub dashboard_title: String,
    pub org_id: i64,
    pub panel_id: i64,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub variables: DashboardVariables,
    pub timezone: String,
    pub output: PathBuf,
}

impl ExportConfig {
    /// Maps the deserialized file onto a request value object. Zero or
    /// omitted dimensions fall back to the documented defaults.
    pub fn into_request(self) -> ExportRequest {
        ExportRequest {
            org_id: self.org_id,
            panel: Panel::new(self.panel_id),
            dashboard: DashboardIdentity::new(self.dashboard_uid, self.dashboard_title),
            range: TimeRange::from_instants(self.from, self.to),
            size: ExportSize::or_default(self.width, self.height),
            variables: self.variables,
            timezone: self.timezone,
            output: self.output,
        }
    }
}

pub fn load_grafana_config() -> anyhow::Result<GrafanaConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/grafana"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_export_config() -> anyhow::Result<ExportConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/export"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_defaults_size_and_converts_range() {
        let config = ExportConfig {
            dashboard_uid: "abc".to_string(),
            dashboard_title: "testTitle".to_string(),
            org_id: 1,
            panel_id: 2,
            from: "2019-09-05T00:00:00Z".parse().unwrap(),
            to: "2019-09-05T23:59:59.999Z".parse().unwrap(),
            width: 0,
            height: 0,
            variables: DashboardVariables::new(),
            timezone: "Europe/Berlin".to_string(),
            output: PathBuf::from("panel.png"),
        };

        let request = config.into_request();
        assert_eq!(request.range.from, "1567641600000");
        assert_eq!(request.range.to, "1567727999000");
        assert_eq!(request.size.width, 1000);
        assert_eq!(request.size.height, 500);
    }
}
