use super::*;

const GOOD_ID: &str = "123456789012345678";

fn at_step(step: SetupStep) -> StreamerSetup {
    let mut setup = StreamerSetup::default();
    while setup.step() != step {
        match setup.step() {
            SetupStep::Twitch => {
                setup.start_twitch();
                setup.finish_twitch();
            }
            SetupStep::Discord => {
                setup.discord.server_id = GOOD_ID.to_owned();
                let attempt = setup.save_discord().unwrap().unwrap();
                setup.finish_discord(attempt);
            }
            SetupStep::Bot => {
                let attempt = setup.check_bot().unwrap();
                setup.finish_bot(attempt);
            }
            SetupStep::Ready => unreachable!(),
        }
        setup.advance().unwrap();
    }
    setup
}

// =============================================================
// Step order
// =============================================================

#[test]
fn steps_are_declared_in_order() {
    assert_eq!(
        SetupStep::ORDER,
        &[SetupStep::Twitch, SetupStep::Discord, SetupStep::Bot, SetupStep::Ready]
    );
    assert_eq!(SetupStep::Bot.title(), "Add Bot");
}

#[test]
fn full_walk_visits_each_step_once() {
    let mut setup = StreamerSetup::default();
    let mut seen = vec![setup.step()];
    for target in [SetupStep::Discord, SetupStep::Bot, SetupStep::Ready] {
        setup = at_step(target);
        seen.push(setup.step());
    }
    assert_eq!(seen, SetupStep::ORDER);
}

#[test]
fn ready_is_terminal() {
    let mut setup = at_step(SetupStep::Ready);
    assert!(!setup.can_continue());
    assert_eq!(setup.advance(), Err(WizardError::AtEnd));
    assert!(!setup.has_back());
    assert_eq!(setup.retreat(), Ok(SetupStep::Ready));
}

// =============================================================
// Twitch step
// =============================================================

#[test]
fn twitch_continue_requires_connection() {
    let mut setup = StreamerSetup::default();
    assert!(!setup.can_continue());
    assert_eq!(setup.advance(), Ok(SetupStep::Twitch));

    assert!(setup.start_twitch());
    assert!(!setup.start_twitch());
    assert!(!setup.can_continue());

    setup.finish_twitch();
    assert!(setup.can_continue());
    assert_eq!(setup.advance(), Ok(SetupStep::Discord));
}

#[test]
fn twitch_step_has_no_back() {
    let mut setup = StreamerSetup::default();
    assert!(!setup.has_back());
    assert_eq!(setup.retreat(), Err(WizardError::AtStart));
}

// =============================================================
// Discord step
// =============================================================

#[test]
fn discord_blank_id_blocks_save() {
    let mut setup = at_step(SetupStep::Discord);
    assert_eq!(setup.save_discord(), Err(ServerIdError::Missing));
    assert_eq!(setup.discord.error, Some(ServerIdError::Missing));
    assert_eq!(setup.discord.save, Progress::Idle);
    assert!(!setup.can_continue());
}

#[test]
fn discord_bad_format_blocks_save() {
    let mut setup = at_step(SetupStep::Discord);
    for bad in ["1234", "12345678901234567890", "abcdefghijklmnopq"] {
        setup.discord.server_id = bad.to_owned();
        assert_eq!(setup.save_discord(), Err(ServerIdError::Format));
        assert_eq!(setup.discord.save, Progress::Idle);
    }
    assert_eq!(setup.advance(), Ok(SetupStep::Discord));
}

#[test]
fn discord_valid_id_saves_then_continues() {
    let mut setup = at_step(SetupStep::Discord);
    setup.discord.server_id = format!(" {GOOD_ID} ");
    setup.discord.server_name = "My Gaming Community".to_owned();
    let attempt = setup.save_discord().unwrap().expect("save started");
    assert_eq!(setup.discord.error, None);
    assert!(setup.discord.save.is_working());

    setup.finish_discord(attempt);
    assert!(setup.can_continue());
    assert_eq!(setup.advance(), Ok(SetupStep::Bot));
}

#[test]
fn discord_fix_clears_previous_error() {
    let mut setup = at_step(SetupStep::Discord);
    setup.discord.server_id = "1".to_owned();
    assert!(setup.save_discord().is_err());
    setup.discord.server_id = GOOD_ID.to_owned();
    assert!(setup.save_discord().is_ok());
    assert_eq!(setup.discord.error, None);
}

#[test]
fn discord_back_returns_to_twitch_and_abandons_save() {
    let mut setup = at_step(SetupStep::Discord);
    setup.discord.server_id = GOOD_ID.to_owned();
    let attempt = setup.save_discord().unwrap().unwrap();
    assert_eq!(setup.retreat(), Ok(SetupStep::Twitch));
    assert_eq!(setup.discord.save, Progress::Idle);

    // Late completion from the abandoned save is ignored.
    setup.finish_discord(attempt);
    assert_eq!(setup.discord.save, Progress::Idle);
}

#[test]
fn discord_late_completion_does_not_finish_newer_save() {
    let mut setup = at_step(SetupStep::Discord);
    setup.discord.server_id = GOOD_ID.to_owned();
    let first = setup.save_discord().unwrap().unwrap();
    setup.retreat().unwrap();
    setup.advance().unwrap();
    assert_eq!(setup.step(), SetupStep::Discord);

    let second = setup.save_discord().unwrap().unwrap();
    assert_ne!(first, second);

    setup.finish_discord(first);
    assert_eq!(setup.discord.save, Progress::Working);
    assert!(!setup.can_continue());

    setup.finish_discord(second);
    assert_eq!(setup.discord.save, Progress::Done);
}

#[test]
fn discord_save_while_saving_starts_nothing() {
    let mut setup = at_step(SetupStep::Discord);
    setup.discord.server_id = GOOD_ID.to_owned();
    let attempt = setup.save_discord().unwrap().unwrap();
    assert_eq!(setup.save_discord(), Ok(None));
    setup.finish_discord(attempt);
    assert!(setup.discord.save.is_done());
}

#[test]
fn discord_save_off_the_discord_step_is_ignored() {
    let mut setup = StreamerSetup::default();
    setup.discord.server_id = GOOD_ID.to_owned();
    assert_eq!(setup.save_discord(), Ok(None));
    assert_eq!(setup.discord.save, Progress::Idle);

    setup.discord.server_id = "1".to_owned();
    assert_eq!(setup.save_discord(), Ok(None));
    assert_eq!(setup.discord.error, None);
}

// =============================================================
// Bot step
// =============================================================

#[test]
fn bot_check_then_continue() {
    let mut setup = at_step(SetupStep::Bot);
    assert!(!setup.can_continue());
    let attempt = setup.check_bot().expect("check started");
    assert_eq!(setup.check_bot(), None);
    setup.finish_bot(attempt);
    assert!(setup.can_continue());
    assert_eq!(setup.advance(), Ok(SetupStep::Ready));
}

#[test]
fn bot_back_returns_to_discord_with_saved_form() {
    let mut setup = at_step(SetupStep::Bot);
    assert!(setup.has_back());
    assert_eq!(setup.retreat(), Ok(SetupStep::Discord));
    assert!(setup.can_continue());
    assert_eq!(setup.discord.server_id, GOOD_ID);
}

#[test]
fn bot_late_completion_does_not_finish_newer_check() {
    let mut setup = at_step(SetupStep::Bot);
    let first = setup.check_bot().unwrap();
    setup.retreat().unwrap();
    setup.advance().unwrap();
    assert_eq!(setup.step(), SetupStep::Bot);

    let second = setup.check_bot().unwrap();
    setup.finish_bot(first);
    assert_eq!(setup.bot, Progress::Working);

    setup.finish_bot(second);
    assert_eq!(setup.bot, Progress::Done);
}

#[test]
fn finish_on_wrong_step_is_ignored() {
    let mut setup = StreamerSetup::default();
    setup.finish_bot(0);
    setup.finish_discord(0);
    assert_eq!(setup.bot, Progress::Idle);
    assert_eq!(setup.discord.save, Progress::Idle);
}
