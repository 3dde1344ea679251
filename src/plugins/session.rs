use crate::actions::ResolvedAction;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};

const TRIGGERS: &[&str] = &["!hibernate", "!lock", "!logout", "!reboot", "!shutdown"];

/// Session control for GNOME desktops.
pub struct SessionPlugin;

fn session_command(trigger: &str) -> Option<(&'static str, &'static str)> {
    match trigger.to_ascii_lowercase().as_str() {
        "!hibernate" => Some(("systemctl", "hibernate")),
        "!lock" => Some(("gnome-screensaver-command", "--lock")),
        "!logout" => Some(("gnome-session-quit", "--logout")),
        "!reboot" => Some(("gnome-session-quit", "--reboot")),
        "!shutdown" => Some(("gnome-session-quit", "--power-off")),
        _ => None,
    }
}

impl Plugin for SessionPlugin {
    fn id(&self) -> PluginId {
        PluginId::Session
    }

    fn label(&self) -> &str {
        "Session"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        session_command(input).is_some()
    }

    fn parse(&self, input: &str, _ctx: &PluginContext<'_>) -> Parsed {
        match session_command(input) {
            Some((command, argument)) => Parsed::Ready(ResolvedAction::plugin(
                PluginId::Session,
                self.label(),
                command,
                argument,
            )),
            None => Parsed::Rejected("Unexpected session plugin command".into()),
        }
    }
}
