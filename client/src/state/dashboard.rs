//! Streamer dashboard: queue controls, queue list, and the current voice
//! session.
//!
//! DESIGN
//! ======
//! Everything here is local and in-memory. Every action is a synchronous
//! list or flag update with no failure path. Both lists are keyed by viewer
//! id and never hold the same id twice.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::Deserialize;

const DEMO_SEED: &str = include_str!("demo_dashboard.json");

pub const PARTY_SIZES: [u8; 5] = [2, 3, 4, 5, 6];
pub const DEFAULT_PARTY_SIZE: u8 = 4;

pub type ViewerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Badge {
    #[serde(rename = "SUB")]
    Sub,
    #[serde(rename = "VIP")]
    Vip,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Sub => "SUB",
            Badge::Vip => "VIP",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: ViewerId,
    pub username: String,
    pub badges: Vec<Badge>,
    /// Milliseconds since the Unix epoch.
    pub joined_at_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionParticipant {
    pub id: ViewerId,
    pub username: String,
    pub discord_linked: bool,
    pub in_voice: bool,
    pub discord_username: Option<String>,
}

/// Voice status derived from the participant's flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantStatus {
    InVoice,
    Waiting,
    NoDiscord,
}

impl ParticipantStatus {
    pub fn label(self) -> &'static str {
        match self {
            ParticipantStatus::InVoice => "In Voice",
            ParticipantStatus::Waiting => "Waiting to Join",
            ParticipantStatus::NoDiscord => "No Discord Linked",
        }
    }
}

impl SessionParticipant {
    pub fn status(&self) -> ParticipantStatus {
        if !self.discord_linked {
            ParticipantStatus::NoDiscord
        } else if self.in_voice {
            ParticipantStatus::InVoice
        } else {
            ParticipantStatus::Waiting
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    FirstInQueue,
    #[default]
    Random,
}

impl SelectionMode {
    pub fn label(self) -> &'static str {
        match self {
            SelectionMode::FirstInQueue => "First in Queue",
            SelectionMode::Random => "Random",
        }
    }
}

/// Destructive actions that ask before running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirm {
    ClearQueue,
    EndSession,
}

/// What a "Pull N Viewers" click would ask the backend for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullRequest {
    pub count: usize,
    pub mode: SelectionMode,
}

#[derive(Deserialize)]
struct DemoSeed {
    streamer: String,
    invite_url: String,
    queue: Vec<DemoQueueEntry>,
    participants: Vec<SessionParticipant>,
}

#[derive(Deserialize)]
struct DemoQueueEntry {
    id: ViewerId,
    username: String,
    badges: Vec<Badge>,
    joined_secs_ago: u64,
}

/// Join time `secs_ago` seconds before `now_ms`, clamped at the epoch.
fn joined_at(now_ms: u64, secs_ago: u64) -> u64 {
    now_ms.saturating_sub(secs_ago.saturating_mul(1000))
}

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub streamer_name: String,
    pub invite_url: String,
    pub queue_active: bool,
    pub party_size: u8,
    pub selection_mode: SelectionMode,
    queue: Vec<QueueEntry>,
    pub session_active: bool,
    participants: Vec<SessionParticipant>,
    pub confirm: Option<Confirm>,
    pub invite_copied: bool,
    pub invites_resent: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            streamer_name: String::new(),
            invite_url: String::new(),
            queue_active: true,
            party_size: DEFAULT_PARTY_SIZE,
            selection_mode: SelectionMode::default(),
            queue: Vec::new(),
            session_active: true,
            participants: Vec::new(),
            confirm: None,
            invite_copied: false,
            invites_resent: 0,
        }
    }
}

impl DashboardState {
    /// Build from explicit lists, dropping any repeated ids (first wins).
    pub fn with_lists(queue: Vec<QueueEntry>, participants: Vec<SessionParticipant>) -> Self {
        let mut state = Self::default();
        for entry in queue {
            state.enqueue(entry);
        }
        for p in participants {
            if !state.participants.iter().any(|existing| existing.id == p.id) {
                state.participants.push(p);
            }
        }
        state
    }

    /// Seed the dashboard with the bundled demo data, timestamped relative
    /// to `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the bundled fixture is malformed.
    pub fn demo(now_ms: u64) -> Result<Self, serde_json::Error> {
        let seed: DemoSeed = serde_json::from_str(DEMO_SEED)?;
        let queue = seed
            .queue
            .into_iter()
            .map(|e| QueueEntry {
                id: e.id,
                username: e.username,
                badges: e.badges,
                joined_at_ms: joined_at(now_ms, e.joined_secs_ago),
            })
            .collect();
        let mut state = Self::with_lists(queue, seed.participants);
        state.streamer_name = seed.streamer;
        state.invite_url = seed.invite_url;
        Ok(state)
    }

    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn participants(&self) -> &[SessionParticipant] {
        &self.participants
    }

    // ---- toggles ----------------------------------------------------------

    pub fn toggle_queue(&mut self) {
        self.queue_active = !self.queue_active;
    }

    /// Sizes outside [`PARTY_SIZES`] are ignored.
    pub fn set_party_size(&mut self, size: u8) {
        if PARTY_SIZES.contains(&size) {
            self.party_size = size;
        }
    }

    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection_mode = mode;
    }

    // ---- queue -------------------------------------------------------------

    /// Add a viewer unless one with the same id is already queued.
    pub fn enqueue(&mut self, entry: QueueEntry) -> bool {
        if self.queue.iter().any(|e| e.id == entry.id) {
            return false;
        }
        self.queue.push(entry);
        true
    }

    pub fn remove_viewer(&mut self, id: ViewerId) -> Option<QueueEntry> {
        let pos = self.queue.iter().position(|e| e.id == id)?;
        Some(self.queue.remove(pos))
    }

    /// Empty the queue. The session is not affected.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        if self.confirm == Some(Confirm::ClearQueue) {
            self.confirm = None;
        }
    }

    /// `None` when the queue is empty and the pull button is disabled.
    pub fn pull_request(&self) -> Option<PullRequest> {
        if self.queue.is_empty() {
            return None;
        }
        Some(PullRequest { count: usize::from(self.party_size).min(self.queue.len()), mode: self.selection_mode })
    }

    // ---- session -----------------------------------------------------------

    /// Whether the session card is shown.
    pub fn session_visible(&self) -> bool {
        self.session_active && !self.participants.is_empty()
    }

    pub fn in_voice_count(&self) -> usize {
        self.participants.iter().filter(|p| p.in_voice).count()
    }

    /// Close the voice session and drop its participants. The queue is not
    /// affected.
    pub fn end_session(&mut self) {
        self.session_active = false;
        self.participants.clear();
        if self.confirm == Some(Confirm::EndSession) {
            self.confirm = None;
        }
    }

    pub fn kick_participant(&mut self, id: ViewerId) -> Option<SessionParticipant> {
        let pos = self.participants.iter().position(|p| p.id == id)?;
        Some(self.participants.remove(pos))
    }

    /// Re-send the voice invite. Only participants still waiting to join are
    /// eligible; returns whether an invite went out.
    pub fn resend_invite(&mut self, id: ViewerId) -> bool {
        let waiting = self
            .participants
            .iter()
            .any(|p| p.id == id && p.status() == ParticipantStatus::Waiting);
        if waiting {
            self.invites_resent += 1;
        }
        waiting
    }

    pub fn set_invite_copied(&mut self, copied: bool) {
        self.invite_copied = copied;
    }

    // ---- confirmation dialogs ----------------------------------------------

    pub fn ask(&mut self, confirm: Confirm) {
        self.confirm = Some(confirm);
    }

    pub fn dismiss(&mut self) {
        self.confirm = None;
    }

    /// Run the pending confirmed action, if any.
    pub fn accept(&mut self) {
        match self.confirm.take() {
            Some(Confirm::ClearQueue) => self.clear_queue(),
            Some(Confirm::EndSession) => self.end_session(),
            None => {}
        }
    }
}

/// `"45s ago"` under a minute, `"2m ago"` after.
pub fn format_wait(now_ms: u64, joined_at_ms: u64) -> String {
    let secs = now_ms.saturating_sub(joined_at_ms) / 1000;
    if secs < 60 { format!("{secs}s ago") } else { format!("{}m ago", secs / 60) }
}

pub fn viewer_count_label(count: usize) -> String {
    if count == 1 { "1 viewer".to_owned() } else { format!("{count} viewers") }
}
