use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::helpers::render_template;
use crate::error::DashboardError;
use crate::models::AppState;
use crate::services::build_dashboard;
use crate::templates::{
    ApiErrorTemplate, CredentialsErrorTemplate, DashboardTemplate, UnexpectedErrorTemplate,
};

/// `GET /` — assemble the inventory view model and render it, or map the
/// propagated failure onto one of three distinct error pages.
pub async fn dashboard_get(State(state): State<AppState>) -> impl IntoResponse {
    match build_dashboard(&state).await {
        Ok(model) => render_template(
            StatusCode::OK,
            DashboardTemplate {
                region: &model.region,
                instances: &model.instances,
                networks: &model.networks,
                load_balancers: &model.load_balancers,
                images: &model.images,
            },
        ),
        Err(DashboardError::NoCredentials) => {
            tracing::error!("dashboard request failed: credentials rejected");
            render_template(StatusCode::INTERNAL_SERVER_ERROR, CredentialsErrorTemplate)
        }
        Err(DashboardError::Api { code, message }) => {
            tracing::error!(%code, %message, "dashboard request failed: provider error");
            render_template(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorTemplate {
                    code: &code,
                    message: &message,
                },
            )
        }
        Err(DashboardError::Unexpected(detail)) => {
            tracing::error!(%detail, "dashboard request failed unexpectedly");
            render_template(
                StatusCode::INTERNAL_SERVER_ERROR,
                UnexpectedErrorTemplate { detail: &detail },
            )
        }
    }
}
