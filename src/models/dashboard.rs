use crate::models::{ImageView, InstanceView, LoadBalancerView, NetworkView};

/// Everything the dashboard page renders, assembled fresh per request and
/// never mutated afterwards. Every list is always present; an empty or
/// denied source shows up as an empty list or a single sentinel entry,
/// never as a missing field.
#[derive(Clone, Debug)]
pub struct DashboardViewModel {
    pub region: String,
    pub instances: Vec<InstanceView>,
    pub networks: Vec<NetworkView>,
    pub load_balancers: Vec<LoadBalancerView>,
    pub images: Vec<ImageView>,
}
