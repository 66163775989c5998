// Application layer - URL construction and the export use case
pub mod export_service;
pub mod render_client;
pub mod render_url;
