use iced::Task;
use tracing::{error, info};

use outpost_ui::widget::Element;

use crate::{
    config::Config,
    panel::{
        signin::{self, SignInPanel},
        signup::{self, SignUpPanel},
        Toast,
    },
    services::account::AccountClient,
    VERSION,
};

/// Context shared across panels. The `logged_out` flag is owned here and
/// handed to panels explicitly instead of living in some global state:
/// entering the sign-up panel clears it, leaving the panel sets it.
pub struct Context {
    pub config: Config,
    pub logged_out: bool,
}

pub enum Panel {
    SignUp(SignUpPanel),
    SignIn(SignInPanel),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    SignUp(signup::Message),
    SignIn(signin::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct GUI {
    panel: Panel,
    context: Context,
    client: AccountClient,
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Outpost v{}", VERSION)
    }

    pub fn new(config: Config) -> (GUI, Task<Message>) {
        let client = AccountClient::new(config.api_url());
        (
            Self {
                panel: Panel::SignUp(SignUpPanel::new(client.clone())),
                context: Context {
                    config,
                    // The sign-up panel is mounted first.
                    logged_out: false,
                },
                client,
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::SignUp(signup::Message::View(signup::ViewMessage::GoToSignIn)) => {
                self.go_to_signin(None);
                Task::none()
            }
            Message::SignUp(signup::Message::AccountCreated {
                res: Ok(message), ..
            }) => {
                info!("Account created, redirecting to sign-in");
                self.go_to_signin(Some(Toast::success(message)));
                Task::none()
            }
            Message::SignUp(msg) => {
                if let Panel::SignUp(panel) = &mut self.panel {
                    panel.update(msg).map(Message::SignUp)
                } else {
                    Task::none()
                }
            }
            Message::SignIn(signin::Message::View(signin::ViewMessage::GoToSignUp)) => {
                // Entering the sign-up panel clears the logged-out flag.
                self.context.logged_out = false;
                self.panel = Panel::SignUp(SignUpPanel::new(self.client.clone()));
                Task::none()
            }
            Message::SignIn(msg) => {
                if let signin::Message::SignedIn { res: Ok(_), .. } = &msg {
                    self.context.logged_out = false;
                }
                if let Panel::SignIn(panel) = &mut self.panel {
                    panel.update(msg).map(Message::SignIn)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn go_to_signin(&mut self, toast: Option<Toast>) {
        // Leaving the sign-up panel sets the logged-out flag.
        self.context.logged_out = true;
        self.panel = Panel::SignIn(match toast {
            Some(toast) => SignInPanel::with_toast(self.client.clone(), toast),
            None => SignInPanel::new(self.client.clone()),
        });
    }

    pub fn view(&self) -> Element<Message> {
        match &self.panel {
            Panel::SignUp(panel) => panel.view().map(Message::SignUp),
            Panel::SignIn(panel) => panel.view().map(Message::SignIn),
        }
    }
}
