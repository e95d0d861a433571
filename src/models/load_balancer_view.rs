/// One load balancer row.
#[derive(Clone, Debug)]
pub struct LoadBalancerView {
    pub name: String,
    pub dns_name: String,
}

impl LoadBalancerView {
    /// Sentinel shown when the account may not list load balancers. The
    /// dashboard treats this as data, not as an error.
    pub fn access_denied() -> LoadBalancerView {
        LoadBalancerView {
            name: "Access Denied".to_string(),
            dns_name: "Check IAM permissions".to_string(),
        }
    }
}
