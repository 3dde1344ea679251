mod mock_presenter;

use apparat::plugin::PluginId;
use mock_presenter::{dispatcher, enabled_config, RecordingLauncher, RecordingPresenter};

#[test]
fn session_commands() {
    let launcher = RecordingLauncher::default();
    let mut d = dispatcher(&[], enabled_config(), &launcher);
    let mut p = RecordingPresenter::new();

    for (input, command, argument) in [
        ("!hibernate", "systemctl", "hibernate"),
        ("!lock", "gnome-screensaver-command", "--lock"),
        ("!logout", "gnome-session-quit", "--logout"),
        ("!reboot", "gnome-session-quit", "--reboot"),
        ("!shutdown", "gnome-session-quit", "--power-off"),
    ] {
        let outcome = d.dispatch(input, &mut p).clone();
        assert_eq!(outcome.plugin, Some(PluginId::Session), "{input}");
        let action = outcome.action.unwrap();
        assert_eq!(action.command, command);
        assert_eq!(action.argument, argument);
    }
}

#[test]
fn trailing_text_is_not_a_session_command() {
    let launcher = RecordingLauncher::default();
    let mut d = dispatcher(&[], enabled_config(), &launcher);
    let mut p = RecordingPresenter::new();

    assert_ne!(d.dispatch("!lock now", &mut p).plugin, Some(PluginId::Session));
}
