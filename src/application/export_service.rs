// Export service - Use case for one render/decode/write round trip
use crate::application::render_client::RenderClient;
use crate::application::render_url::render_path;
use crate::domain::error::ExportError;
use crate::domain::export::ExportRequest;
use image::ImageFormat;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct ExportService {
    client: Arc<dyn RenderClient>,
}

impl ExportService {
    pub fn new(client: Arc<dyn RenderClient>) -> Self {
        Self { client }
    }

    /// Fetches one rendered panel and writes it to the request's output path.
    /// Linear pipeline with no retries: build, request, validate, decode,
    /// write. The output file is only created after a valid PNG arrived, and
    /// its handle is released on every exit path.
    pub async fn export_panel(&self, request: &ExportRequest) -> Result<(), ExportError> {
        let path = render_path(request)?;
        tracing::debug!("requesting rendered panel: {}", path);

        let response = self.client.get(&path).await?;
        if response.code != 200 {
            return Err(ExportError::HttpStatus {
                code: response.code,
                status: response.status,
            });
        }

        let image = image::load_from_memory_with_format(&response.body, ImageFormat::Png)?;

        let file = File::create(&request.output)?;
        let mut writer = BufWriter::new(file);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;

        tracing::debug!("panel written to {}", request.output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::render_client::RenderResponse;
    use crate::domain::dashboard::{DashboardIdentity, Panel};
    use crate::domain::export::{DashboardVariables, ExportSize, TimeRange};
    use async_trait::async_trait;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClient {
        code: u16,
        status: String,
        body: Vec<u8>,
        calls: AtomicUsize,
    }

    impl StubClient {
        fn new(code: u16, status: &str, body: Vec<u8>) -> Self {
            Self {
                code,
                status: status.to_string(),
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RenderClient for StubClient {
        async fn get(&self, _path_and_query: &str) -> Result<RenderResponse, ExportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RenderResponse {
                code: self.code,
                status: self.status.clone(),
                body: self.body.clone(),
            })
        }
    }

    fn png_bytes() -> Vec<u8> {
        let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn request(output: &Path) -> ExportRequest {
        ExportRequest {
            org_id: 1,
            panel: Panel::new(2),
            dashboard: DashboardIdentity::new("uid".to_string(), "title".to_string()),
            range: TimeRange::new("1567641600000", "1567727999000"),
            size: ExportSize::new(1000, 500),
            variables: DashboardVariables::new(),
            timezone: "UTC".to_string(),
            output: output.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_export_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("panel.png");
        let client = Arc::new(StubClient::new(200, "200 OK", png_bytes()));
        let service = ExportService::new(client);

        service.export_panel(&request(&output)).await.unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!(written.width(), 2);
        assert_eq!(written.height(), 2);
    }

    #[tokio::test]
    async fn test_non_ok_status_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("panel.png");
        let client = Arc::new(StubClient::new(404, "404 Not Found", Vec::new()));
        let service = ExportService::new(client);

        let err = service.export_panel(&request(&output)).await.unwrap_err();
        assert!(matches!(err, ExportError::HttpStatus { code: 404, .. }));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_invalid_body_is_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("panel.png");
        let client = Arc::new(StubClient::new(200, "200 OK", b"not a png".to_vec()));
        let service = ExportService::new(client);

        let err = service.export_panel(&request(&output)).await.unwrap_err();
        assert!(matches!(err, ExportError::Codec(_)));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_builder_failure_skips_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("panel.png");
        let client = Arc::new(StubClient::new(200, "200 OK", png_bytes()));
        let service = ExportService::new(client.clone());

        let mut req = request(&output);
        req.range = TimeRange::default();

        let err = service.export_panel(&req).await.unwrap_err();
        assert!(matches!(err, ExportError::MissingParameter("from")));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_unknown_timezone_skips_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("panel.png");
        let client = Arc::new(StubClient::new(200, "200 OK", png_bytes()));
        let service = ExportService::new(client.clone());

        let mut req = request(&output);
        req.timezone = "Atlantis/Capital".to_string();

        let err = service.export_panel(&req).await.unwrap_err();
        assert!(matches!(err, ExportError::UnknownTimezone(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-subdir").join("panel.png");
        let client = Arc::new(StubClient::new(200, "200 OK", png_bytes()));
        let service = ExportService::new(client);

        let err = service.export_panel(&request(&output)).await.unwrap_err();
        assert!(matches!(err, ExportError::Filesystem(_)));
    }
}
