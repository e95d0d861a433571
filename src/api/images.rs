use super::client::ComputeClient;
use crate::error::ProviderError;
use crate::models::ImageView;

impl ComputeClient {
    /// Fetch machine images owned by the calling account, in provider
    /// order. A missing image name is displayed as "N/A".
    pub async fn describe_images(&self) -> Result<Vec<ImageView>, ProviderError> {
        let params = [("owner", "self".to_string())];
        let payload = self.handle.get("/v1/images", &params).await?;

        let mut out = Vec::new();
        if let Some(arr) = payload.get("images").and_then(|v| v.as_array()) {
            for item in arr {
                let Some(obj) = item.as_object() else { continue };
                out.push(ImageView {
                    id: obj
                        .get("imageId")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    name: obj
                        .get("name")
                        .and_then(|v| v.as_str())
                        .unwrap_or("N/A")
                        .to_string(),
                });
            }
        }
        Ok(out)
    }
}
