// Reqwest-backed render transport for a Grafana host
use crate::application::render_client::{RenderClient, RenderResponse};
use crate::domain::error::ExportError;
use async_trait::async_trait;
use std::time::Duration;

/// Authenticated transport against one Grafana instance. Holds a pooled
/// reqwest client; the optional timeout bounds each render call, and
/// dropping an in-flight future cancels the request.
#[derive(Debug, Clone)]
pub struct GrafanaRenderClient {
    host: String,
    token: String,
    http: reqwest::Client,
}

impl GrafanaRenderClient {
    pub fn new(host: String, token: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl RenderClient for GrafanaRenderClient {
    async fn get(&self, path_and_query: &str) -> Result<RenderResponse, ExportError> {
        let url = format!("{}{}", self.host, path_and_query);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?;

        let code = response.status().as_u16();
        let status = response.status().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?
            .to_vec();

        Ok(RenderResponse { code, status, body })
    }
}
