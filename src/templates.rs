use askama::Template;

use crate::models::{ImageView, InstanceView, LoadBalancerView, NetworkView};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub region: &'a str,
    pub instances: &'a [InstanceView],
    pub networks: &'a [NetworkView],
    pub load_balancers: &'a [LoadBalancerView],
    pub images: &'a [ImageView],
}

/// Rendered when the provider rejects the configured credentials; names
/// both required environment variables.
#[derive(Template)]
#[template(path = "error_credentials.html")]
pub struct CredentialsErrorTemplate;

#[derive(Template)]
#[template(path = "error_api.html")]
pub struct ApiErrorTemplate<'a> {
    pub code: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "error_unexpected.html")]
pub struct UnexpectedErrorTemplate<'a> {
    pub detail: &'a str,
}
