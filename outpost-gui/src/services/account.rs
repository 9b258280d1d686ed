use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::services::http::{ErrorResponseInfo, ResponseExt};

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestOtp {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyOtp {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub message: String,
    /// Session token for authenticated requests.
    pub token: Option<String>,
}

/// Outcome of a remote call, classified the same way for every operation.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server responded with an error payload.
    Api { status: u16, message: String },
    /// The request went out but nothing usable came back.
    NoResponse,
    /// The request could not be built or sent at all.
    Dispatch(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Api { message, .. } => write!(f, "{}", message),
            Self::NoResponse => write!(f, "Server is not responding"),
            Self::Dispatch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::NoResponse
        } else {
            Self::Dispatch(error.to_string())
        }
    }
}

impl From<ErrorResponseInfo> for ApiError {
    fn from(info: ErrorResponseInfo) -> Self {
        Self::Api {
            status: info.status_code,
            message: info.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, ApiError> {
        let url = format!("{}/auth/{}", self.base_url, endpoint);

        let req = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);
        tracing::debug!("Sending http request to {}", url);

        Ok(req.send().await?)
    }

    /// Ask the backend to email a one-time password to the given address.
    pub async fn request_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let response = self
            .post_json(
                "send-otp",
                &RequestOtp {
                    email: email.to_string(),
                },
            )
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }

    /// Prove control of the address by sending back the received code.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
        let response = self
            .post_json(
                "verify-otp",
                &VerifyOtp {
                    email: email.to_string(),
                    otp: otp.to_string(),
                },
            )
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }

    /// Create the account once the email has been verified.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .post_json(
                "signup",
                &SignUp {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        let response = self
            .post_json(
                "signin",
                &SignIn {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payloads() {
        assert_eq!(
            serde_json::to_value(RequestOtp {
                email: "a@b.com".to_string()
            })
            .unwrap(),
            serde_json::json!({"email": "a@b.com"})
        );
        assert_eq!(
            serde_json::to_value(VerifyOtp {
                email: "a@b.com".to_string(),
                otp: "123456".to_string()
            })
            .unwrap(),
            serde_json::json!({"email": "a@b.com", "otp": "123456"})
        );
        assert_eq!(
            serde_json::to_value(SignUp {
                name: "Ann".to_string(),
                email: "a@b.com".to_string(),
                password: "secret1".to_string()
            })
            .unwrap(),
            serde_json::json!({"name": "Ann", "email": "a@b.com", "password": "secret1"})
        );
    }

    #[test]
    fn success_payloads() {
        let res: MessageResponse =
            serde_json::from_str("{\"message\": \"OTP sent to your email\"}").unwrap();
        assert_eq!(res.message, "OTP sent to your email");

        let res: SignInResponse = serde_json::from_str("{\"message\": \"Welcome back\"}").unwrap();
        assert_eq!(res.token, None);
    }

    #[test]
    fn error_display() {
        // The server's own message is shown verbatim.
        let e = ApiError::from(ErrorResponseInfo {
            status_code: 400,
            message: "OTP is invalid or expired".to_string(),
        });
        assert_eq!(e.to_string(), "OTP is invalid or expired");

        assert_eq!(ApiError::NoResponse.to_string(), "Server is not responding");
        assert_eq!(
            ApiError::Dispatch("builder error".to_string()).to_string(),
            "builder error"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_no_response() {
        // Port 1 is never listening, the connect error must be classified
        // as the transport failing to answer, not as a dispatch error.
        let client = AccountClient::new("http://127.0.0.1:1".to_string());
        match client.request_otp("a@b.com").await {
            Err(ApiError::NoResponse) => {}
            other => panic!("expected NoResponse, got {:?}", other),
        }
    }
}
