#[cfg(test)]
#[path = "viewer_setup_test.rs"]
mod viewer_setup_test;

/// Accounts a viewer links before joining games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Twitch,
    Discord,
}

impl Platform {
    pub fn name(self) -> &'static str {
        match self {
            Platform::Twitch => "Twitch",
            Platform::Discord => "Discord",
        }
    }

    /// Account name handed back by the simulated OAuth round trip.
    pub fn mock_username(self) -> &'static str {
        match self {
            Platform::Twitch => "CoolViewer123",
            Platform::Discord => "CoolViewer#1234",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connecting,
    Connected { username: String },
}

impl LinkState {
    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            LinkState::Connected { username } => Some(username),
            _ => None,
        }
    }
}

/// Banner shown above the connection cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupBanner {
    LinkAccounts,
    AlmostThere { missing: Platform },
    Ready,
}

/// Two independent link toggles. The flow is "ready" exactly when both are
/// connected; there is no ordering between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerSetup {
    pub twitch: LinkState,
    pub discord: LinkState,
}

impl ViewerSetup {
    pub fn link(&self, platform: Platform) -> &LinkState {
        match platform {
            Platform::Twitch => &self.twitch,
            Platform::Discord => &self.discord,
        }
    }

    fn link_mut(&mut self, platform: Platform) -> &mut LinkState {
        match platform {
            Platform::Twitch => &mut self.twitch,
            Platform::Discord => &mut self.discord,
        }
    }

    /// Returns `true` if a connect request was started.
    pub fn begin_connect(&mut self, platform: Platform) -> bool {
        let link = self.link_mut(platform);
        if *link != LinkState::Disconnected {
            return false;
        }
        *link = LinkState::Connecting;
        true
    }

    /// Completion of the simulated OAuth; ignored if the user is no longer
    /// waiting on it.
    pub fn finish_connect(&mut self, platform: Platform) {
        let link = self.link_mut(platform);
        if *link == LinkState::Connecting {
            *link = LinkState::Connected { username: platform.mock_username().to_owned() };
        }
    }

    pub fn disconnect(&mut self, platform: Platform) {
        *self.link_mut(platform) = LinkState::Disconnected;
    }

    pub fn is_ready(&self) -> bool {
        self.twitch.is_connected() && self.discord.is_connected()
    }

    pub fn banner(&self) -> SetupBanner {
        match (self.twitch.is_connected(), self.discord.is_connected()) {
            (true, true) => SetupBanner::Ready,
            (false, false) => SetupBanner::LinkAccounts,
            (true, false) => SetupBanner::AlmostThere { missing: Platform::Discord },
            (false, true) => SetupBanner::AlmostThere { missing: Platform::Twitch },
        }
    }
}
