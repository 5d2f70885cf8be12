//! Login view: a two-mode form that never talks to the server.
//!
//! Credentials are collected but not validated or transmitted anywhere; the
//! only real output of this view is the signup referral code and the name
//! handed to the session.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::record::referral_code_for;

/// Simulated network latency applied to every submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

const FALLBACK_NAME: &str = "Demo User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginView {
    pub mode: Mode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
}

/// The outcome of a submission, destined for the session. An empty referral
/// code signals the dashboard to use the server default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub referral_code: String,
}

impl LoginView {
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Starts a submission, suspending interaction. The controller waits out
    /// [`SUBMIT_DELAY`] and then applies the returned [`Submission`].
    pub fn submit(&mut self) -> Submission {
        self.submitting = true;

        let referral_code = if self.mode == Mode::Signup && !self.full_name.is_empty() {
            referral_code_for(&self.full_name)
        } else {
            String::new()
        };

        let full_name = if self.full_name.is_empty() {
            FALLBACK_NAME.to_string()
        } else {
            self.full_name.clone()
        };

        Submission {
            full_name,
            referral_code,
        }
    }

    pub fn render(&self) -> Vec<String> {
        if self.submitting {
            return vec!["Signing in...".into()];
        }

        let mut lines = vec![
            "Intern Portal".into(),
            "Access your internship dashboard".into(),
            match self.mode {
                Mode::Login => "[Login] | Sign Up".into(),
                Mode::Signup => "Login | [Sign Up]".into(),
            },
        ];

        if self.mode == Mode::Signup {
            lines.push(format!("Full Name: {}", self.full_name));
        }
        lines.push(format!("Email: {}", self.email));

        let password = if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        };
        lines.push(format!("Password: {password}"));

        lines.push(match self.mode {
            Mode::Login => "> Sign In".into(),
            Mode::Signup => "> Create Account".into(),
        });

        lines
    }
}
