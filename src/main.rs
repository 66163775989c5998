// Main entry point - Dependency injection and a single export run
use std::sync::Arc;
use std::time::Duration;

use grafana_panel_export::application::export_service::ExportService;
use grafana_panel_export::infrastructure::config::{load_export_config, load_grafana_config};
use grafana_panel_export::infrastructure::grafana_client::GrafanaRenderClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load configuration
    let grafana = load_grafana_config()?;
    let export = load_export_config()?;

    // Create the transport (infrastructure layer)
    let timeout = grafana.grafana.timeout_secs.map(Duration::from_secs);
    let client = Arc::new(GrafanaRenderClient::new(
        grafana.grafana.host,
        grafana.grafana.token,
        timeout,
    )?);

    // Create the service (application layer) and run one export
    let service = ExportService::new(client);
    let request = export.into_request();
    let output = request.output.clone();

    service.export_panel(&request).await?;
    tracing::info!("exported panel image to {}", output.display());

    Ok(())
}
