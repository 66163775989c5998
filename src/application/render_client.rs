// Capability trait for the authenticated render transport
use crate::domain::error::ExportError;
use async_trait::async_trait;

/// Status and body of one render response, as returned by the transport.
#[derive(Debug, Clone)]
pub struct RenderResponse {
    pub code: u16,
    pub status: String,
    pub body: Vec<u8>,
}

/// Issues a single authenticated GET for a path-and-query string against an
/// already-configured host. Authentication and session handling live behind
/// this trait; cancellation is carried by dropping the returned future.
#[async_trait]
pub trait RenderClient: Send + Sync {
    async fn get(&self, path_and_query: &str) -> Result<RenderResponse, ExportError>;
}
