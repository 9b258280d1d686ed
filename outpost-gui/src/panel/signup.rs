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
    // Results are tagged with the email the request was issued for, so a
    // response racing a "Change email" can be told apart and dropped.
    OtpRequested {
        email: String,
        res: Result<String, ApiError>,
    },
    OtpChecked {
        email: String,
        res: Result<String, ApiError>,
    },
    // The Ok case is handled by the upper level wrapping the panel, which
    // swaps it for the sign-in panel.
    AccountCreated {
        email: String,
        res: Result<String, ApiError>,
    },
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    OtpEdited(String),
    NameEdited(String),
    PasswordEdited(String),
    PasswordConfirmEdited(String),
    RequestOtp,
    ChangeEmail,
    VerifyOtp,
    Submit,
    GoToSignIn,
    CloseToast,
}

/// Where the panel stands in the email-verification flow. The ordering
/// makes "verified but not sent" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Editing,
    OtpSent,
    OtpVerified,
}

pub struct SignUpPanel {
    client: AccountClient,

    pub step: Step,
    pub email: form::Value<String>,
    pub otp: form::Value<String>,
    pub name: form::Value<String>,
    pub password: form::Value<String>,
    pub password_confirm: form::Value<String>,

    pub processing: bool,
    pub toast: Option<Toast>,
}

impl SignUpPanel {
    pub fn new(client: AccountClient) -> Self {
        Self {
            client,
            step: Step::Editing,
            email: form::Value::default(),
            otp: form::Value::default(),
            name: form::Value::default(),
            password: form::Value::default(),
            password_confirm: form::Value::default(),
            processing: false,
            toast: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::View(ViewMessage::CloseToast) = message {
            self.toast = None;
            return Task::none();
        }
        match self.step {
            Step::Editing => match message {
                Message::View(ViewMessage::EmailEdited(value)) => {
                    self.email.valid = value.is_empty() || validation::email(&value);
                    self.email.value = value;
                }
                Message::View(ViewMessage::RequestOtp) => {
                    if self.email.value.is_empty() {
                        self.email.valid = false;
                        self.toast = Some(Toast::error("Email field is empty"));
                    } else if !validation::email(&self.email.value) {
                        self.email.valid = false;
                        self.toast = Some(Toast::error("Invalid email address"));
                    } else {
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        self.processing = true;
                        self.toast = None;
                        return Task::perform(
                            async move {
                                let res = client.request_otp(&email).await.map(|r| r.message);
                                (email, res)
                            },
                            |(email, res)| Message::OtpRequested { email, res },
                        );
                    }
                }
                Message::OtpRequested { email, res } => {
                    self.processing = false;
                    if email != self.email.value {
                        tracing::debug!("Dropping OTP response for previous email {}", email);
                        return Task::none();
                    }
                    match res {
                        Ok(message) => {
                            self.otp = form::Value::default();
                            self.toast = Some(Toast::success(message));
                            self.step = Step::OtpSent;
                        }
                        Err(e) => {
                            tracing::warn!("Failed to request OTP: {}", e);
                            self.toast = Some(Toast::api_error("Could not send OTP", &e));
                        }
                    }
                }
                _ => {}
            },
            Step::OtpSent => match message {
                Message::View(ViewMessage::OtpEdited(value)) => {
                    self.otp.value = value.trim().to_string();
                    self.otp.valid = true;
                }
                Message::View(ViewMessage::ChangeEmail) => {
                    self.otp = form::Value::default();
                    self.toast = None;
                    // A response to an abandoned in-flight call will be
                    // discarded in Editing, so stop waiting for it.
                    self.processing = false;
                    self.step = Step::Editing;
                }
                Message::View(ViewMessage::VerifyOtp) => {
                    if self.otp.value.is_empty() {
                        self.otp.valid = false;
                        self.toast = Some(Toast::error("OTP field is empty"));
                    } else {
                        let client = self.client.clone();
                        let email = self.email.value.clone();
                        let otp = self.otp.value.clone();
                        self.processing = true;
                        self.toast = None;
                        return Task::perform(
                            async move {
                                let res = client.verify_otp(&email, &otp).await.map(|r| r.message);
                                (email, res)
                            },
                            |(email, res)| Message::OtpChecked { email, res },
                        );
                    }
                }
                Message::OtpChecked { email, res } => {
                    self.processing = false;
                    if email != self.email.value {
                        tracing::debug!(
                            "Dropping OTP verification response for previous email {}",
                            email
                        );
                        return Task::none();
                    }
                    match res {
                        Ok(message) => {
                            self.toast = Some(Toast::success(message));
                            self.step = Step::OtpVerified;
                        }
                        Err(e) => {
                            tracing::warn!("OTP verification failed: {}", e);
                            self.toast = Some(Toast::api_error("Could not verify OTP", &e));
                        }
                    }
                }
                _ => {}
            },
            Step::OtpVerified => match message {
                Message::View(ViewMessage::NameEdited(value)) => {
                    self.name.value = value;
                    self.name.valid = true;
                }
                Message::View(ViewMessage::PasswordEdited(value)) => {
                    self.password.value = value;
                    self.password.valid = true;
                }
                Message::View(ViewMessage::PasswordConfirmEdited(value)) => {
                    self.password_confirm.value = value;
                    self.password_confirm.valid = true;
                }
                // The wrong address may have been verified, let the user
                // restart with another one.
                Message::View(ViewMessage::ChangeEmail) => {
                    self.otp = form::Value::default();
                    self.toast = None;
                    self.processing = false;
                    self.step = Step::Editing;
                }
                Message::View(ViewMessage::Submit) => {
                    if self.check_submit() {
                        let client = self.client.clone();
                        let name = self.name.value.clone();
                        let email = self.email.value.clone();
                        let password = self.password.value.clone();
                        self.processing = true;
                        self.toast = None;
                        return Task::perform(
                            async move {
                                let res = client
                                    .sign_up(&name, &email, &password)
                                    .await
                                    .map(|r| r.message);
                                (email, res)
                            },
                            |(email, res)| Message::AccountCreated { email, res },
                        );
                    }
                }
                Message::AccountCreated { res, .. } => {
                    self.processing = false;
                    if let Err(e) = res {
                        tracing::warn!("Sign-up failed: {}", e);
                        self.toast = Some(Toast::api_error("Could not create account", &e));
                    }
                }
                _ => {}
            },
        }

        Task::none()
    }

    /// Run the local submission checks in order, stopping at the first
    /// failure: name, password, confirmation, password length, match.
    fn check_submit(&mut self) -> bool {
        if self.name.value.is_empty() {
            self.name.valid = false;
            self.toast = Some(Toast::error("Name field is empty"));
            false
        } else if self.password.value.is_empty() {
            self.password.valid = false;
            self.toast = Some(Toast::error("Password field is empty"));
            false
        } else if self.password_confirm.value.is_empty() {
            self.password_confirm.valid = false;
            self.toast = Some(Toast::error("Confirmation field is empty"));
            false
        } else if !validation::password(&self.password.value) {
            self.password.valid = false;
            self.toast = Some(Toast::error("Password must be longer than 6 characters"));
            false
        } else if !validation::matching(&self.password.value, &self.password_confirm.value) {
            self.password_confirm.valid = false;
            self.toast = Some(Toast::error("Password and confirmation do not match"));
            false
        } else {
            true
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .width(Length::Fill)
                    .push(h2("Create your account"))
                    .push(
                        Column::new()
                            .max_width(500)
                            .spacing(20)
                            .push(match self.step {
                                Step::Editing => step_enter_email(&self.email, self.processing),
                                Step::OtpSent => {
                                    step_enter_otp(&self.email, &self.otp, self.processing)
                                }
                                Step::OtpVerified => step_profile(
                                    &self.email,
                                    &self.name,
                                    &self.password,
                                    &self.password_confirm,
                                    self.processing,
                                ),
                            })
                            .push(
                                Row::new()
                                    .spacing(5)
                                    .align_y(Alignment::Center)
                                    .push(text("Already have an account?"))
                                    .push(
                                        button::link(None, "Sign In")
                                            .on_press(ViewMessage::GoToSignIn),
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

fn step_enter_email<'a>(
    email: &form::Value<String>,
    processing: bool,
) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(text("Enter the email to associate with your account:"))
        .push(
            form::Form::new_trimmed("Email address", email, ViewMessage::EmailEdited)
                .size(P1_SIZE)
                .padding(10)
                .warning("Email is not valid"),
        )
        .push(
            button::secondary(None, "Send OTP")
                .width(Length::Fixed(200.0))
                .on_press_maybe(if processing {
                    None
                } else {
                    Some(ViewMessage::RequestOtp)
                }),
        )
        .into()
}

fn step_enter_otp<'a>(
    email: &form::Value<String>,
    otp: &form::Value<String>,
    processing: bool,
) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(
            form::Form::new_disabled("Email address", email)
                .size(P1_SIZE)
                .padding(10),
        )
        .push(text("A one-time password was sent to your email"))
        .push(
            form::Form::new_trimmed("Enter OTP", otp, ViewMessage::OtpEdited)
                .size(P1_SIZE)
                .padding(10)
                .warning("OTP is not valid"),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    button::secondary(None, "Change Email")
                        .width(Length::Fixed(200.0))
                        .on_press(ViewMessage::ChangeEmail),
                )
                .push(
                    button::secondary(None, "Verify OTP")
                        .width(Length::Fixed(200.0))
                        .on_press_maybe(if processing {
                            None
                        } else {
                            Some(ViewMessage::VerifyOtp)
                        }),
                ),
        )
        .into()
}

fn step_profile<'a>(
    email: &form::Value<String>,
    name: &form::Value<String>,
    password: &form::Value<String>,
    password_confirm: &form::Value<String>,
    processing: bool,
) -> Element<'a, ViewMessage> {
    Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(
            form::Form::new_disabled("Email address", email)
                .size(P1_SIZE)
                .padding(10),
        )
        .push(
            form::Form::new("Your name", name, ViewMessage::NameEdited)
                .size(P1_SIZE)
                .padding(10)
                .warning("Name is missing"),
        )
        .push(
            form::Form::new("Enter password", password, ViewMessage::PasswordEdited)
                .secure()
                .size(P1_SIZE)
                .padding(10)
                .warning("Password must be longer than 6 characters"),
        )
        .push(
            form::Form::new(
                "Confirm password",
                password_confirm,
                ViewMessage::PasswordConfirmEdited,
            )
            .secure()
            .size(P1_SIZE)
            .padding(10)
            .warning("Passwords do not match"),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(
                    button::secondary(None, "Change Email")
                        .width(Length::Fixed(200.0))
                        .on_press(ViewMessage::ChangeEmail),
                )
                .push(
                    button::primary(None, "Sign Up")
                        .width(Length::Fixed(200.0))
                        .on_press_maybe(if processing {
                            None
                        } else {
                            Some(ViewMessage::Submit)
                        }),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> SignUpPanel {
        SignUpPanel::new(AccountClient::new("http://127.0.0.1:1".to_string()))
    }

    fn edit(panel: &mut SignUpPanel, msg: ViewMessage) {
        let _ = panel.update(Message::View(msg));
    }

    fn to_otp_sent(panel: &mut SignUpPanel, email: &str) {
        edit(panel, ViewMessage::EmailEdited(email.to_string()));
        edit(panel, ViewMessage::RequestOtp);
        assert!(panel.processing);
        let _ = panel.update(Message::OtpRequested {
            email: email.to_string(),
            res: Ok("OTP sent to your email".to_string()),
        });
        assert_eq!(panel.step, Step::OtpSent);
    }

    fn to_otp_verified(panel: &mut SignUpPanel, email: &str, otp: &str) {
        to_otp_sent(panel, email);
        edit(panel, ViewMessage::OtpEdited(otp.to_string()));
        edit(panel, ViewMessage::VerifyOtp);
        assert!(panel.processing);
        let _ = panel.update(Message::OtpChecked {
            email: email.to_string(),
            res: Ok("Email verified".to_string()),
        });
        assert_eq!(panel.step, Step::OtpVerified);
    }

    #[test]
    fn otp_request_rejected_for_empty_email() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::RequestOtp);
        // No request was dispatched.
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::Editing);
        assert!(!panel.email.valid);
        assert_eq!(panel.toast, Some(Toast::error("Email field is empty")));
    }

    #[test]
    fn otp_request_rejected_for_malformed_email() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::EmailEdited("not-an-email".to_string()));
        edit(&mut panel, ViewMessage::RequestOtp);
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::Editing);
        assert_eq!(panel.toast, Some(Toast::error("Invalid email address")));
    }

    #[test]
    fn otp_request_success_moves_to_otp_sent() {
        let mut panel = panel();
        to_otp_sent(&mut panel, "a@b.com");
        assert!(!panel.processing);
        assert_eq!(
            panel.toast,
            Some(Toast::success("OTP sent to your email"))
        );
    }

    #[test]
    fn otp_request_failure_stays_in_editing() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::EmailEdited("a@b.com".to_string()));
        edit(&mut panel, ViewMessage::RequestOtp);
        let _ = panel.update(Message::OtpRequested {
            email: "a@b.com".to_string(),
            res: Err(ApiError::NoResponse),
        });
        assert_eq!(panel.step, Step::Editing);
        assert_eq!(
            panel.toast.as_ref().unwrap().detail.as_deref(),
            Some("Server is not responding")
        );
    }

    #[test]
    fn stale_otp_response_is_dropped() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::EmailEdited("old@b.com".to_string()));
        edit(&mut panel, ViewMessage::RequestOtp);
        // The user retypes the email while the request is in flight.
        edit(&mut panel, ViewMessage::EmailEdited("new@b.com".to_string()));
        let _ = panel.update(Message::OtpRequested {
            email: "old@b.com".to_string(),
            res: Ok("OTP sent to your email".to_string()),
        });
        assert_eq!(panel.step, Step::Editing);
        assert_eq!(panel.toast, None);
    }

    #[test]
    fn change_email_resets_otp_state() {
        let mut panel = panel();
        to_otp_sent(&mut panel, "a@b.com");
        edit(&mut panel, ViewMessage::OtpEdited("123456".to_string()));
        edit(&mut panel, ViewMessage::ChangeEmail);
        assert_eq!(panel.step, Step::Editing);
        assert_eq!(panel.otp.value, "");
        assert!(panel.otp.valid);
        // The email itself is kept for editing.
        assert_eq!(panel.email.value, "a@b.com");
    }

    #[test]
    fn change_email_during_verification_unblocks_the_panel() {
        let mut panel = panel();
        to_otp_sent(&mut panel, "a@b.com");
        edit(&mut panel, ViewMessage::OtpEdited("123456".to_string()));
        edit(&mut panel, ViewMessage::VerifyOtp);
        assert!(panel.processing);
        edit(&mut panel, ViewMessage::ChangeEmail);
        assert!(!panel.processing);
        // The abandoned verification resolving later changes nothing.
        let _ = panel.update(Message::OtpChecked {
            email: "a@b.com".to_string(),
            res: Ok("Email verified".to_string()),
        });
        assert_eq!(panel.step, Step::Editing);
        assert!(!panel.processing);
    }

    #[test]
    fn change_email_is_available_after_verification() {
        let mut panel = panel();
        to_otp_verified(&mut panel, "a@b.com", "123456");
        // The wrong address was verified, the user can still restart.
        edit(&mut panel, ViewMessage::ChangeEmail);
        assert_eq!(panel.step, Step::Editing);
        assert_eq!(panel.otp.value, "");
        assert!(panel.otp.valid);
        assert_eq!(panel.email.value, "a@b.com");
    }

    #[test]
    fn verify_rejected_for_empty_otp() {
        let mut panel = panel();
        to_otp_sent(&mut panel, "a@b.com");
        edit(&mut panel, ViewMessage::VerifyOtp);
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::OtpSent);
        assert_eq!(panel.toast, Some(Toast::error("OTP field is empty")));
    }

    #[test]
    fn verify_failure_stays_in_otp_sent() {
        let mut panel = panel();
        to_otp_sent(&mut panel, "a@b.com");
        edit(&mut panel, ViewMessage::OtpEdited("000000".to_string()));
        edit(&mut panel, ViewMessage::VerifyOtp);
        let _ = panel.update(Message::OtpChecked {
            email: "a@b.com".to_string(),
            res: Err(ApiError::Api {
                status: 400,
                message: "OTP is invalid or expired".to_string(),
            }),
        });
        assert_eq!(panel.step, Step::OtpSent);
        assert_eq!(
            panel.toast.as_ref().unwrap().detail.as_deref(),
            Some("OTP is invalid or expired")
        );
    }

    #[test]
    fn submit_is_unreachable_before_verification() {
        let mut panel = panel();
        edit(&mut panel, ViewMessage::Submit);
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::Editing);

        to_otp_sent(&mut panel, "a@b.com");
        edit(&mut panel, ViewMessage::Submit);
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::OtpSent);
    }

    #[test]
    fn submit_checks_fields_in_order() {
        let mut panel = panel();
        to_otp_verified(&mut panel, "a@b.com", "123456");

        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(panel.toast, Some(Toast::error("Name field is empty")));

        edit(&mut panel, ViewMessage::NameEdited("Ann".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(panel.toast, Some(Toast::error("Password field is empty")));

        edit(&mut panel, ViewMessage::PasswordEdited("ab".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(
            panel.toast,
            Some(Toast::error("Confirmation field is empty"))
        );

        edit(&mut panel, ViewMessage::PasswordConfirmEdited("ab".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(
            panel.toast,
            Some(Toast::error("Password must be longer than 6 characters"))
        );
        assert!(!panel.password.valid);

        edit(&mut panel, ViewMessage::PasswordEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::PasswordConfirmEdited("secret2".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert_eq!(
            panel.toast,
            Some(Toast::error("Password and confirmation do not match"))
        );

        // No remote call was dispatched by any of the rejected submissions.
        assert!(!panel.processing);
        assert_eq!(panel.step, Step::OtpVerified);
    }

    #[test]
    fn valid_submission_dispatches_sign_up() {
        let mut panel = panel();
        to_otp_verified(&mut panel, "a@b.com", "123456");
        edit(&mut panel, ViewMessage::NameEdited("Ann".to_string()));
        edit(&mut panel, ViewMessage::PasswordEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::PasswordConfirmEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        assert!(panel.processing);
        assert_eq!(panel.toast, None);
    }

    #[test]
    fn sign_up_failure_stays_in_otp_verified() {
        let mut panel = panel();
        to_otp_verified(&mut panel, "a@b.com", "123456");
        edit(&mut panel, ViewMessage::NameEdited("Ann".to_string()));
        edit(&mut panel, ViewMessage::PasswordEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::PasswordConfirmEdited("secret1".to_string()));
        edit(&mut panel, ViewMessage::Submit);
        let _ = panel.update(Message::AccountCreated {
            email: "a@b.com".to_string(),
            res: Err(ApiError::NoResponse),
        });
        assert_eq!(panel.step, Step::OtpVerified);
        assert!(!panel.processing);
        assert_eq!(
            panel.toast.as_ref().unwrap().message,
            "Could not create account"
        );
    }
}
