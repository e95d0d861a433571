use super::client::LoadBalancerClient;
use crate::error::ProviderError;
use crate::models::LoadBalancerView;

impl LoadBalancerClient {
    /// Fetch the account's load balancers. Callers decide what an
    /// access-denied rejection means; this module reports it untouched.
    pub async fn describe_load_balancers(&self) -> Result<Vec<LoadBalancerView>, ProviderError> {
        let payload = self.handle.get("/v1/load-balancers", &[]).await?;

        let mut out = Vec::new();
        if let Some(arr) = payload
            .get("loadBalancerDescriptions")
            .and_then(|v| v.as_array())
        {
            for item in arr {
                let Some(obj) = item.as_object() else { continue };
                out.push(LoadBalancerView {
                    name: obj
                        .get("loadBalancerName")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    dns_name: obj
                        .get("dnsName")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                });
            }
        }
        Ok(out)
    }
}
