use super::*;

const PLATFORMS: [Platform; 2] = [Platform::Twitch, Platform::Discord];

fn connect(setup: &mut ViewerSetup, platform: Platform) {
    assert!(setup.begin_connect(platform));
    setup.finish_connect(platform);
}

#[test]
fn starts_disconnected() {
    let setup = ViewerSetup::default();
    assert_eq!(setup.twitch, LinkState::Disconnected);
    assert_eq!(setup.discord, LinkState::Disconnected);
    assert_eq!(setup.banner(), SetupBanner::LinkAccounts);
    assert!(!setup.is_ready());
}

#[test]
fn connect_goes_through_connecting() {
    let mut setup = ViewerSetup::default();
    assert!(setup.begin_connect(Platform::Twitch));
    assert_eq!(setup.twitch, LinkState::Connecting);
    assert!(!setup.begin_connect(Platform::Twitch));
    setup.finish_connect(Platform::Twitch);
    assert_eq!(setup.twitch.username(), Some("CoolViewer123"));
}

#[test]
fn discord_gets_discord_mock_name() {
    let mut setup = ViewerSetup::default();
    connect(&mut setup, Platform::Discord);
    assert_eq!(setup.link(Platform::Discord).username(), Some("CoolViewer#1234"));
    assert_eq!(setup.link(Platform::Twitch).username(), None);
}

#[test]
fn ready_iff_both_connected() {
    // Every combination of the two flags.
    for twitch_on in [false, true] {
        for discord_on in [false, true] {
            let mut setup = ViewerSetup::default();
            if twitch_on {
                connect(&mut setup, Platform::Twitch);
            }
            if discord_on {
                connect(&mut setup, Platform::Discord);
            }
            assert_eq!(setup.is_ready(), twitch_on && discord_on);
            assert_eq!(setup.banner() == SetupBanner::Ready, twitch_on && discord_on);
        }
    }
}

#[test]
fn connecting_does_not_count_as_connected() {
    let mut setup = ViewerSetup::default();
    connect(&mut setup, Platform::Twitch);
    setup.begin_connect(Platform::Discord);
    assert!(!setup.is_ready());
}

#[test]
fn banner_names_missing_platform() {
    let mut setup = ViewerSetup::default();
    connect(&mut setup, Platform::Twitch);
    assert_eq!(setup.banner(), SetupBanner::AlmostThere { missing: Platform::Discord });

    let mut setup = ViewerSetup::default();
    connect(&mut setup, Platform::Discord);
    assert_eq!(setup.banner(), SetupBanner::AlmostThere { missing: Platform::Twitch });
}

#[test]
fn disconnect_drops_ready() {
    let mut setup = ViewerSetup::default();
    for p in PLATFORMS {
        connect(&mut setup, p);
    }
    assert!(setup.is_ready());
    setup.disconnect(Platform::Discord);
    assert!(!setup.is_ready());
    assert_eq!(setup.discord, LinkState::Disconnected);
    assert!(setup.twitch.is_connected());
}

#[test]
fn late_completion_after_disconnect_is_ignored() {
    let mut setup = ViewerSetup::default();
    setup.begin_connect(Platform::Twitch);
    setup.disconnect(Platform::Twitch);
    setup.finish_connect(Platform::Twitch);
    assert_eq!(setup.twitch, LinkState::Disconnected);
}

#[test]
fn platform_names() {
    assert_eq!(Platform::Twitch.name(), "Twitch");
    assert_eq!(Platform::Discord.name(), "Discord");
}
