use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct ErrorResponseInfo {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, ErrorResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    /// Turn a non-2xx response into an error carrying the server's own
    /// message: the `message` field of a JSON error body when there is one,
    /// the raw body text otherwise.
    async fn check_success(self) -> Result<Self, ErrorResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            let text = self
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response text".to_string());
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(ErrorResponseInfo {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(self)
    }
}
