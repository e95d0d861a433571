use serde_json::Value;

use crate::config::Settings;
use crate::error::ProviderError;

/// Shared request plumbing for both typed clients: header auth, query
/// params, JSON decoding, and error-class mapping.
#[derive(Clone)]
pub(crate) struct ApiHandle {
    http: reqwest::Client,
    endpoint: String,
    access_key_id: String,
    secret_access_key: String,
}

impl ApiHandle {
    fn new(settings: &Settings, http: reqwest::Client) -> ApiHandle {
        ApiHandle {
            http,
            endpoint: settings.endpoint.clone(),
            access_key_id: settings.access_key_id.clone(),
            secret_access_key: settings.secret_access_key.clone(),
        }
    }

    /// Issue a GET against the provider and decode the JSON payload,
    /// mapping non-2xx responses onto the `ProviderError` taxonomy.
    pub(crate) async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ProviderError> {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!(%url, "provider request");
        let mut req = self
            .http
            .get(&url)
            .header("X-Access-Key-Id", &self.access_key_id)
            .header("X-Secret-Access-Key", &self.secret_access_key);
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body: Value = match resp.json().await {
            Ok(v) => v,
            Err(_) if status.is_success() => {
                return Err(ProviderError::Unexpected(
                    "response body was not valid JSON".to_string(),
                ))
            }
            // Non-2xx with an unreadable body: classify on status alone.
            Err(_) => Value::Null,
        };

        if status.is_success() {
            return Ok(body);
        }

        let code = body
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_str())
            .unwrap_or("")
            .to_string();
        let message = body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("(no message)")
            .to_string();

        Err(classify_rejection(status.as_u16(), code, message))
    }
}

/// Fold an HTTP status plus provider error code into an error class.
/// Either signal alone is enough to classify a rejection.
fn classify_rejection(status: u16, code: String, message: String) -> ProviderError {
    const CREDENTIAL_CODES: &[&str] = &[
        "AuthFailure",
        "InvalidClientTokenId",
        "MissingAuthenticationToken",
    ];
    const ACCESS_DENIED_CODES: &[&str] = &[
        "AccessDenied",
        "AccessDeniedException",
        "UnauthorizedOperation",
    ];

    if status == 401 || CREDENTIAL_CODES.contains(&code.as_str()) {
        ProviderError::NoCredentials
    } else if status == 403 || ACCESS_DENIED_CODES.contains(&code.as_str()) {
        ProviderError::AccessDenied { message }
    } else {
        let code = if code.is_empty() {
            format!("HTTP{}", status)
        } else {
            code
        };
        ProviderError::Api { code, message }
    }
}

/// Capability handle for the compute API: instances, networks, images and
/// the region probe used by the health endpoint.
#[derive(Clone)]
pub struct ComputeClient {
    pub(crate) handle: ApiHandle,
}

impl ComputeClient {
    pub fn new(settings: &Settings, http: reqwest::Client) -> ComputeClient {
        ComputeClient {
            handle: ApiHandle::new(settings, http),
        }
    }
}

/// Capability handle for the load-balancer API.
#[derive(Clone)]
pub struct LoadBalancerClient {
    pub(crate) handle: ApiHandle,
}

impl LoadBalancerClient {
    pub fn new(settings: &Settings, http: reqwest::Client) -> LoadBalancerClient {
        LoadBalancerClient {
            handle: ApiHandle::new(settings, http),
        }
    }
}
