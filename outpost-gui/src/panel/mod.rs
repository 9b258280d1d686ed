pub mod signin;
pub mod signup;

use outpost_ui::{component::notification, widget::Container};

use crate::services::account::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification, displayed as a banner on top of the panel
/// until dismissed or replaced by the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub detail: Option<String>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            detail: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            detail: None,
        }
    }

    pub fn api_error(context: &'static str, error: &ApiError) -> Self {
        Self {
            kind: ToastKind::Error,
            message: context.into(),
            detail: Some(error.to_string()),
        }
    }
}

pub fn toast_view<'a, M: 'a + Clone>(toast: &Toast, on_close: M) -> Container<'a, M> {
    match toast.kind {
        ToastKind::Success => notification::success(toast.message.clone(), on_close),
        ToastKind::Error => {
            notification::warning(toast.message.clone(), toast.detail.clone(), on_close)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_toast_carries_server_message() {
        let toast = Toast::api_error(
            "Could not send OTP",
            &ApiError::Api {
                status: 400,
                message: "Email already registered".to_string(),
            },
        );
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.detail.as_deref(), Some("Email already registered"));
    }
}
