use gloo::net::http::Request;
use shared::InvoicePayload;

/// HTTP client for the remote invoice-generation service.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Send the assembled invoice payload to the generation endpoint.
    ///
    /// Any ok-status response counts as success; the body is returned
    /// for logging only and is never schema-validated. No retry, no
    /// timeout beyond what the transport imposes.
    pub async fn generate_invoice(&self, payload: &InvoicePayload) -> Result<String, String> {
        let url = format!("{}/generate-invoice", self.base_url);

        match Request::post(&url)
            .json(payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(response.text().await.unwrap_or_default())
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
