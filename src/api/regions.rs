use super::client::ComputeClient;
use crate::error::ProviderError;

impl ComputeClient {
    /// List region names, capped server-side. The health endpoint uses
    /// this with `max_results = 1` as a minimal liveness probe.
    pub async fn describe_regions(&self, max_results: usize) -> Result<Vec<String>, ProviderError> {
        let params = [("maxResults", max_results.to_string())];
        let payload = self.handle.get("/v1/regions", &params).await?;

        let mut out = Vec::new();
        if let Some(arr) = payload.get("regions").and_then(|v| v.as_array()) {
            for item in arr {
                if let Some(name) = item.get("regionName").and_then(|v| v.as_str()) {
                    out.push(name.to_string());
                }
            }
        }
        Ok(out)
    }
}
