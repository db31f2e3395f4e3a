//! Intents raised by widgets while a frame is being laid out.

use console_core::Action;
use shared::domain::ClientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    Console(Action),
    ContactSupport,
    ForgotPassword,
    OpenNotifications,
    OpenClientHub(ClientId),
    DismissNotice,
}

impl UiIntent {
    pub fn name(&self) -> &'static str {
        match self {
            UiIntent::Console(action) => action.name(),
            UiIntent::ContactSupport => "contact_support",
            UiIntent::ForgotPassword => "forgot_password",
            UiIntent::OpenNotifications => "open_notifications",
            UiIntent::OpenClientHub(_) => "open_client_hub",
            UiIntent::DismissNotice => "dismiss_notice",
        }
    }

    /// Controls that are drawn but not built yet.
    pub fn inert_feature(&self) -> Option<String> {
        match self {
            UiIntent::ContactSupport => Some("Contact Support".to_string()),
            UiIntent::ForgotPassword => Some("Password recovery".to_string()),
            UiIntent::OpenNotifications => Some("Notifications".to_string()),
            UiIntent::OpenClientHub(id) => Some(format!("The hub for client {id}")),
            UiIntent::Console(_) | UiIntent::DismissNotice => None,
        }
    }
}

impl From<Action> for UiIntent {
    fn from(action: Action) -> Self {
        UiIntent::Console(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
}

/// Dismissable banner shown above the active panel or the login card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
        }
    }
}
