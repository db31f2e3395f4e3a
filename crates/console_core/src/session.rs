//! Demo sign-in gate.
//!
//! There is no credential check anywhere in this crate. Submitting the login
//! form always opens the console; the types are named so nobody mistakes this
//! for authentication.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    #[default]
    SignedOut,
    /// Entered through the unverified demo login. There is no way back out.
    DemoBypass,
}

impl Session {
    pub fn is_signed_in(self) -> bool {
        self == Session::DemoBypass
    }
}

pub const DEMO_NOTICE: &str = "Demo mode: credentials are not verified.";

/// Values typed into the login form. Carried for logging only; never checked.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
