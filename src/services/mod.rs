pub mod dashboard_service;

pub use dashboard_service::{build_dashboard, MAX_IMAGE_ROWS};
