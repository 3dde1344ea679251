use crate::actions::ResolvedAction;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};

const TRIGGERS: &[&str] = &["!screenshot", "!screenshot-area", "!screenshot-window"];

/// Screen capture through `gnome-screenshot`.
pub struct ScreenshotPlugin;

fn mode_flag(trigger: &str) -> Option<&'static str> {
    match trigger.to_ascii_lowercase().as_str() {
        "!screenshot" => Some(""),
        "!screenshot-area" => Some("-a"),
        "!screenshot-window" => Some("-w"),
        _ => None,
    }
}

impl Plugin for ScreenshotPlugin {
    fn id(&self) -> PluginId {
        PluginId::Screenshot
    }

    fn label(&self) -> &str {
        "Screenshot"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        mode_flag(input).is_some()
    }

    fn parse(&self, input: &str, _ctx: &PluginContext<'_>) -> Parsed {
        match mode_flag(input) {
            Some(flag) => Parsed::Ready(ResolvedAction::plugin(
                PluginId::Screenshot,
                self.label(),
                "gnome-screenshot",
                flag,
            )),
            None => Parsed::Rejected("Unexpected screenshot plugin command".into()),
        }
    }
}
