use super::client::ComputeClient;
use crate::error::ProviderError;
use crate::models::NetworkView;

impl ComputeClient {
    /// Fetch the account's virtual network blocks. One level deep, no
    /// grouping to unwrap.
    pub async fn describe_networks(&self) -> Result<Vec<NetworkView>, ProviderError> {
        let payload = self.handle.get("/v1/vpcs", &[]).await?;

        let mut out = Vec::new();
        if let Some(arr) = payload.get("vpcs").and_then(|v| v.as_array()) {
            for item in arr {
                let Some(obj) = item.as_object() else { continue };
                out.push(NetworkView {
                    id: obj
                        .get("vpcId")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    cidr_block: obj
                        .get("cidrBlock")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                });
            }
        }
        Ok(out)
    }
}
