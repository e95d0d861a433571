use crate::api::{ComputeClient, LoadBalancerClient};
use crate::config::Settings;
use crate::error::StartupError;

/// Immutable per-process state: the resolved settings plus the two typed
/// provider clients, built once at startup and cloned into each handler.
/// There is no request-scoped mutation behind this struct.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub compute: ComputeClient,
    pub load_balancer: LoadBalancerClient,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<AppState, StartupError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Skyview/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let compute = ComputeClient::new(&settings, http.clone());
        let load_balancer = LoadBalancerClient::new(&settings, http);

        Ok(AppState {
            settings,
            compute,
            load_balancer,
        })
    }

    pub fn region(&self) -> &str {
        &self.settings.region
    }
}
