use super::client::ComputeClient;
use crate::error::ProviderError;
use crate::models::{InstanceState, InstanceView};

impl ComputeClient {
    /// Fetch all compute instances. The provider groups instances under
    /// reservations; flatten them into one sequence, preserving provider
    /// order across and within reservations.
    pub async fn describe_instances(&self) -> Result<Vec<InstanceView>, ProviderError> {
        let payload = self.handle.get("/v1/instances", &[]).await?;

        let mut out = Vec::new();
        if let Some(reservations) = payload.get("reservations").and_then(|v| v.as_array()) {
            for reservation in reservations {
                let Some(items) = reservation.get("instances").and_then(|v| v.as_array()) else {
                    continue;
                };
                for item in items {
                    let Some(obj) = item.as_object() else { continue };
                    let id = obj
                        .get("instanceId")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string();
                    let state_raw = obj
                        .get("state")
                        .and_then(|s| s.get("name"))
                        .and_then(|v| v.as_str())
                        .unwrap_or("unknown");
                    let instance_type = obj
                        .get("instanceType")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string();
                    let public_ip = obj
                        .get("publicIpAddress")
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string());

                    out.push(InstanceView {
                        id,
                        state: InstanceState::from_provider(state_raw),
                        instance_type,
                        public_ip,
                    });
                }
            }
        }
        Ok(out)
    }
}
