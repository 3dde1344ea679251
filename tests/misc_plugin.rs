mod mock_presenter;

use apparat::plugin::{Parsed, Plugin, PluginContext};
use apparat::plugins::misc::MiscPlugin;
use apparat::router::RouterState;
use mock_presenter::{dispatcher, enabled_config, RecordingLauncher, RecordingPresenter};
use std::path::{Path, PathBuf};

#[test]
fn open_expands_home() {
    let launcher = RecordingLauncher::default();
    let mut d = dispatcher(&[], enabled_config(), &launcher).with_home("/home/alice");
    let mut p = RecordingPresenter::new();

    let outcome = d.dispatch("!open ~/Documents", &mut p).clone();
    assert_eq!(outcome.state, RouterState::PluginMatchedUnique);
    let action = outcome.action.unwrap();
    assert_eq!(action.command, "xdg-open");
    assert_eq!(action.argument, "/home/alice/Documents");
}

#[test]
fn trigger_is_case_insensitive_argument_is_not() {
    let files: Vec<PathBuf> = Vec::new();
    let ctx = PluginContext {
        home: Some(Path::new("/home/alice")),
        files: &files,
        config_path: None,
        password_length: 16,
    };
    let plugin = MiscPlugin;
    assert!(plugin.matches("!OPEN /tmp/Foo"));
    let Parsed::Ready(action) = plugin.parse("!OPEN /tmp/Foo", &ctx) else {
        panic!("expected an action");
    };
    assert_eq!(action.argument, "/tmp/Foo");
}

#[test]
fn tilde_inside_a_path_is_kept() {
    let files: Vec<PathBuf> = Vec::new();
    let ctx = PluginContext {
        home: Some(Path::new("/home/alice")),
        files: &files,
        config_path: None,
        password_length: 16,
    };
    let Parsed::Ready(action) = MiscPlugin.parse("!open ~bob/notes", &ctx) else {
        panic!("expected an action");
    };
    assert_eq!(action.argument, "~bob/notes");
}

#[test]
fn open_without_path_fails_on_submit() {
    let launcher = RecordingLauncher::with_commands(&["xdg-open"]);
    let mut d = dispatcher(&[], enabled_config(), &launcher);
    let mut p = RecordingPresenter::new();

    d.dispatch("!open", &mut p);
    d.submit(&mut p);
    assert_eq!(p.errors(), vec!["No parameter supplied for Misc (Open)"]);
    assert!(launcher.spawned().is_empty());
}
