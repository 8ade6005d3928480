//! Streamer onboarding: Twitch → Discord server → bot → ready.
//!
//! DESIGN
//! ======
//! Each step owns a small sub-state. The simulated requests (OAuth, save,
//! bot check) report back through `finish_*` methods, which only apply if
//! the wizard is still on the step that started them. Saves and bot checks
//! also carry an attempt number: leaving a step or starting a new request
//! retires every earlier attempt, so a late completion cannot finish a
//! request issued after it.

#[cfg(test)]
#[path = "streamer_setup_test.rs"]
mod streamer_setup_test;

use crate::util::validate::{self, ServerIdError};
use crate::wizard::{Wizard, WizardError, WizardStep};

pub const BOT_INVITE_URL: &str = "https://discord.com/oauth2/authorize?client_id=YOUR_BOT_ID&permissions=8&scope=bot";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetupStep {
    #[default]
    Twitch,
    Discord,
    Bot,
    Ready,
}

impl WizardStep for SetupStep {
    const ORDER: &'static [Self] = &[SetupStep::Twitch, SetupStep::Discord, SetupStep::Bot, SetupStep::Ready];

    fn title(self) -> &'static str {
        match self {
            SetupStep::Twitch => "Connect Twitch",
            SetupStep::Discord => "Configure Discord",
            SetupStep::Bot => "Add Bot",
            SetupStep::Ready => "Ready to Go",
        }
    }
}

/// Progress of a simulated request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Progress {
    #[default]
    Idle,
    Working,
    Done,
}

impl Progress {
    pub fn is_working(self) -> bool {
        self == Progress::Working
    }

    pub fn is_done(self) -> bool {
        self == Progress::Done
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscordServerForm {
    pub server_id: String,
    pub server_name: String,
    pub error: Option<ServerIdError>,
    pub save: Progress,
}

#[derive(Clone, Debug, Default)]
pub struct StreamerSetup {
    pub wizard: Wizard<SetupStep>,
    pub twitch: Progress,
    pub discord: DiscordServerForm,
    pub bot: Progress,
    pub link_copied: bool,
    attempt: u32,
}

impl StreamerSetup {
    pub fn step(&self) -> SetupStep {
        self.wizard.current()
    }

    /// Begin the Twitch OAuth stand-in. Returns `true` if a request started.
    pub fn start_twitch(&mut self) -> bool {
        if self.step() != SetupStep::Twitch || self.twitch != Progress::Idle {
            return false;
        }
        self.twitch = Progress::Working;
        true
    }

    pub fn finish_twitch(&mut self) {
        if self.step() == SetupStep::Twitch && self.twitch.is_working() {
            self.twitch = Progress::Done;
        }
    }

    fn next_attempt(&mut self) -> u32 {
        self.attempt = self.attempt.wrapping_add(1);
        self.attempt
    }

    /// Validate the server id and, if valid, begin saving. Returns the
    /// attempt to hand back to [`Self::finish_discord`], or `None` when off
    /// the Discord step or a save is already running.
    ///
    /// # Errors
    ///
    /// Returns the validation error, which is also stored for inline display.
    pub fn save_discord(&mut self) -> Result<Option<u32>, ServerIdError> {
        if self.step() != SetupStep::Discord || self.discord.save.is_working() {
            return Ok(None);
        }
        match validate::validate_server_id(&self.discord.server_id) {
            Ok(_) => {
                self.discord.error = None;
                self.discord.save = Progress::Working;
                Ok(Some(self.next_attempt()))
            }
            Err(e) => {
                self.discord.error = Some(e);
                Err(e)
            }
        }
    }

    pub fn finish_discord(&mut self, attempt: u32) {
        if attempt == self.attempt && self.step() == SetupStep::Discord && self.discord.save.is_working() {
            self.discord.save = Progress::Done;
        }
    }

    /// Begin the "is the bot in the server" check. Returns the attempt to
    /// hand back to [`Self::finish_bot`] if a check started.
    pub fn check_bot(&mut self) -> Option<u32> {
        if self.step() != SetupStep::Bot || self.bot != Progress::Idle {
            return None;
        }
        self.bot = Progress::Working;
        Some(self.next_attempt())
    }

    pub fn finish_bot(&mut self, attempt: u32) {
        if attempt == self.attempt && self.step() == SetupStep::Bot && self.bot.is_working() {
            self.bot = Progress::Done;
        }
    }

    /// Whether the current step's own work is finished so Continue is shown.
    pub fn can_continue(&self) -> bool {
        match self.step() {
            SetupStep::Twitch => self.twitch.is_done(),
            SetupStep::Discord => self.discord.save.is_done(),
            SetupStep::Bot => self.bot.is_done(),
            SetupStep::Ready => false,
        }
    }

    /// Move to the next step once the current one is complete.
    ///
    /// # Errors
    ///
    /// [`WizardError::AtEnd`] on the ready step. An incomplete step is a
    /// no-op that returns the current step.
    pub fn advance(&mut self) -> Result<SetupStep, WizardError> {
        if !self.can_continue() {
            if self.wizard.is_terminal() {
                return Err(WizardError::AtEnd);
            }
            return Ok(self.step());
        }
        self.link_copied = false;
        self.wizard.advance()
    }

    /// Back button. Only the Discord and bot steps offer it; an in-flight
    /// request on the step being left is abandoned.
    ///
    /// # Errors
    ///
    /// [`WizardError::AtStart`] on the Twitch step.
    pub fn retreat(&mut self) -> Result<SetupStep, WizardError> {
        if self.step() == SetupStep::Ready {
            return Ok(self.step());
        }
        if self.discord.save.is_working() {
            self.discord.save = Progress::Idle;
        }
        if self.bot.is_working() {
            self.bot = Progress::Idle;
        }
        self.next_attempt();
        self.wizard.retreat()
    }

    pub fn has_back(&self) -> bool {
        matches!(self.step(), SetupStep::Discord | SetupStep::Bot)
    }
}
