mod mock_presenter;

use apparat::plugin::PluginId;
use mock_presenter::{dispatcher, enabled_config, RecordingLauncher, RecordingPresenter};

#[test]
fn screenshot_modes() {
    let launcher = RecordingLauncher::with_commands(&["gnome-screenshot"]);
    let mut d = dispatcher(&[], enabled_config(), &launcher);
    let mut p = RecordingPresenter::new();

    for input in ["!screenshot", "!screenshot-area", "!screenshot-window"] {
        let outcome = d.dispatch(input, &mut p).clone();
        assert_eq!(outcome.plugin, Some(PluginId::Screenshot));
        d.submit(&mut p);
    }

    let argv: Vec<Vec<String>> = launcher.spawned().into_iter().map(|l| l.argv).collect();
    assert_eq!(
        argv,
        vec![
            vec!["gnome-screenshot".to_string()],
            vec!["gnome-screenshot".to_string(), "-a".to_string()],
            vec!["gnome-screenshot".to_string(), "-w".to_string()],
        ]
    );
}
