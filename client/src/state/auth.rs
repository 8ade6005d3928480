//! Sign-up / log-in flow followed by role selection.
//!
//! DESIGN
//! ======
//! Two-step wizard. The credentials step accepts Twitch, sign-up or log-in;
//! all of them "succeed" after a fixed delay. The role step picks where to
//! send the user next.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::route::View;
use crate::util::validate::{self, SignUpErrors};
use crate::wizard::{Wizard, WizardStep};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStep {
    #[default]
    Credentials,
    Role,
}

impl WizardStep for AuthStep {
    const ORDER: &'static [Self] = &[AuthStep::Credentials, AuthStep::Role];

    fn title(self) -> &'static str {
        match self {
            AuthStep::Credentials => "Account",
            AuthStep::Role => "Role",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    SignUp,
    LogIn,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            AuthTab::SignUp => "Sign Up",
            AuthTab::LogIn => "Log In",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthTab::SignUp => "Create your account",
            AuthTab::LogIn => "Welcome back",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            AuthTab::SignUp => "Start playing with your community",
            AuthTab::LogIn => "Log in to continue",
        }
    }

    pub fn twitch_label(self) -> &'static str {
        match self {
            AuthTab::SignUp => "Sign up with Twitch",
            AuthTab::LogIn => "Log in with Twitch",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Streamer,
    Viewer,
}

impl Role {
    /// Setup flow the role continues into.
    pub fn setup_view(self) -> View {
        match self {
            Role::Streamer => View::StreamerSetup,
            Role::Viewer => View::ViewerSetup,
        }
    }
}

/// Which credential path is waiting on its simulated round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    Twitch,
    Form,
}

#[derive(Clone, Debug, Default)]
pub struct AuthFlow {
    pub wizard: Wizard<AuthStep>,
    pub tab: AuthTab,
    pub username: String,
    pub email: String,
    pub password: String,
    pub sign_up_errors: SignUpErrors,
    pub log_in_error: Option<&'static str>,
    pub pending: Option<Pending>,
    pub role: Option<Role>,
}

impl AuthFlow {
    pub fn step(&self) -> AuthStep {
        self.wizard.current()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Switching tabs clears the previous tab's errors.
    pub fn select_tab(&mut self, tab: AuthTab) {
        if self.tab != tab {
            self.tab = tab;
            self.sign_up_errors = SignUpErrors::default();
            self.log_in_error = None;
        }
    }

    /// Validate the active form and, if it passes, mark it pending.
    ///
    /// Returns `true` when the caller should start the simulated request.
    pub fn submit_form(&mut self) -> bool {
        if self.is_busy() || self.step() != AuthStep::Credentials {
            return false;
        }
        let valid = match self.tab {
            AuthTab::SignUp => match validate::validate_sign_up(&self.username, &self.email, &self.password) {
                Ok(()) => {
                    self.sign_up_errors = SignUpErrors::default();
                    true
                }
                Err(errors) => {
                    self.sign_up_errors = errors;
                    false
                }
            },
            AuthTab::LogIn => match validate::validate_log_in(&self.email, &self.password) {
                Ok(()) => {
                    self.log_in_error = None;
                    true
                }
                Err(msg) => {
                    self.log_in_error = Some(msg);
                    false
                }
            },
        };
        if valid {
            self.pending = Some(Pending::Form);
        }
        valid
    }

    /// Start the Twitch path. No validation; always proceeds.
    pub fn start_twitch(&mut self) -> bool {
        if self.is_busy() || self.step() != AuthStep::Credentials {
            return false;
        }
        self.pending = Some(Pending::Twitch);
        true
    }

    /// Simulated round trip finished: move on to role selection.
    pub fn complete_pending(&mut self) {
        if self.pending.take().is_some() && self.step() == AuthStep::Credentials {
            self.wizard.advance().ok();
        }
    }

    pub fn choose_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Destination for the Continue button; `None` until a role is chosen.
    pub fn confirm_role(&self) -> Option<View> {
        if self.step() != AuthStep::Role {
            return None;
        }
        self.role.map(Role::setup_view)
    }
}
