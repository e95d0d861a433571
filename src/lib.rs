pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;

/// Service name reported by the health and info endpoints.
pub const SERVICE_NAME: &str = "skyview";
