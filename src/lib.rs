// Client-side helper for Grafana's panel-image render endpoint
pub mod application;
pub mod domain;
pub mod infrastructure;
