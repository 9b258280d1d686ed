use iced::{Alignment, Length, Task};

use outpost_ui::{
    component::{button, form, text::*},
    widget::*,
};

use crate::{
    panel::{toast_view, Toast},
    services::account::{AccountClient, ApiError},
    validation,
};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    SignedIn {
        email: String,
        res: Result<String, ApiError>,
    },
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    Submit,
    GoToSignUp,
    CloseToast,
}

pub struct SignInPanel {
    client: AccountClient,

    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub processing: bool,
    pub toast: Option<Toast>,
}

impl SignInPanel {
    pub fn new(client: AccountClient) -> Self {
        Self {
            client,
            email: form::Value::default(),
            password: form::Value::default(),
            processing: false,
            toast: None,
        }
    }

    /// A sign-in panel opened with a notification already displayed, used
    /// after a successful sign-up.
    pub fn with_toast(client: AccountClient, toast: Toast) -> Self {
        Self {
            toast: Some(toast),
            ..Self::new(client)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = value.is_empty() || validation::email(&value);
                self.email.value = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.value = value;
                self.password.valid = true;
            }
            Message::View(ViewMessage::CloseToast) => {
                self.toast = None;
            }
            Message::View(ViewMessage::Submit) => {
                if self.email.value.is_empty() {
                    self.email.valid = false;
                    self.toast = Some(Toast::error("Email field is empty"));
                } else if !validation::email(&self.email.value) {
                    self.email.valid = false;
                    self.toast = Some(Toast::error("Invalid email address"));
                } else if self.password.value.is_empty() {
                    self.password.valid = false;
                    self.toast = Some(Toast::error("Password field is empty"));
                } else {
                    let client = self.client.clone();
                    let email = self.email.value.clone();
                    let password = self.password.value.clone();
                    self.processing = true;
                    self.toast = None;
                    return Task::perform(
                        async move {
                            let res = client.sign_in(&email, &password).await.map(|r| r.message);
                            (email, res)
                        },
                        |(email, res)| Message::SignedIn { email, res },
                    );
                }
            }
            Message::SignedIn { email, res } => {
                self.processing = false;
                if email != self.email.value {
                    tracing::debug!("Dropping sign-in response for previous email {}", email);
                    return Task::none();
                }
                match res {
                    Ok(message) => {
                        self.toast = Some(Toast::success(message));
                    }
                    Err(e) => {
                        tracing::warn!("Sign-in failed: {}", e);
                        self.toast = Some(Toast::api_error("Could not sign in", &e));
                    }
                }
            }
            Message::View(ViewMessage::GoToSignUp) => {
                // Handled by the upper level wrapping the panel.
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let content = Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .width(Length::Fill)
                    .push(h2("Sign in"))
                    .push(
                        Column::new()
                            .max_width(500)
                            .spacing(20)
                            .push(
                                form::Form::new_trimmed(
                                    "Email address",
                                    &self.email,
                                    ViewMessage::EmailEdited,
                                )
                                .size(P1_SIZE)
                                .padding(10)
                                .warning("Email is not valid"),
                            )
                            .push(
                                form::Form::new(
                                    "Password",
                                    &self.password,
                                    ViewMessage::PasswordEdited,
                                )
                                .secure()
                                .size(P1_SIZE)
                                .padding(10)
                                .warning("Password is missing"),
                            )
                            .push(
                                button::primary(None, "Sign In")
                                    .width(Length::Fixed(200.0))
                                    .on_press_maybe(if self.processing {
                                        None
                                    } else {
                                        Some(ViewMessage::Submit)
                                    }),
                            )
                            .push(
                                Row::new()
                                    .spacing(5)
                                    .align_y(Alignment::Center)
                                    .push(text("New to Outpost?"))
                                    .push(
                                        button::link(None, "Sign Up")
                                            .on_press(ViewMessage::GoToSignUp),
                                    ),
                            ),
                    ),
            )
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .map(Message::View);

        Column::new()
            .push_maybe(
                self.toast
                    .as_ref()
                    .map(|t| toast_view(t, Message::View(ViewMessage::CloseToast))),
            )
            .push(content)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> SignInPanel {
        SignInPanel::new(AccountClient::new("http://127.0.0.1:1".to_string()))
    }

    fn edit(panel: &mut SignInPanel, msg: ViewMessage) {
        let _ = panel.update(Message::View(msg));
    }

    #[test]
    fn submit_requires_valid_fields() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::Submit);
        assert!(!panel.processing);
        assert_eq!(panel.toast, Some(Toast::error("Email field is empty")));

        edit(&mut panel, ViewMessage::EmailEdited("nope".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(panel.toast, Some(Toast::error("Invalid email address")));

        edit(&mut panel, ViewMessage::EmailEdited("a@b.com".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(panel.toast, Some(Toast::error("Password field is empty")));
        assert!(!panel.processing);
    }

    #[test]
    fn sign_in_result_is_reported() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::EmailEdited("a@b.com".to_string()));
        edit(&mut panel, ViewMessage::PasswordEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert!(panel.processing);

        let _ = panel.update(Message::SignedIn {
            email: "a@b.com".to_string(),
            res: Ok("Welcome back".to_string()),
        });
        assert!(!panel.processing);
        assert_eq!(panel.toast, Some(Toast::success("Welcome back")));
    }
}
