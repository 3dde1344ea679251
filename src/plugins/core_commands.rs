use crate::actions::ResolvedAction;
use crate::common::{eq_any_ci, strip_prefix_ci};
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};
use crate::plugins::XDG_OPEN;

pub const APP_URL: &str = "https://github.com/yafp/apparat_launcher";

const TRIGGERS: &[&str] = &["?about", "?help", "?issues", "?license", "?prefs"];

/// Launcher self-help commands. Always enabled.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn id(&self) -> PluginId {
        PluginId::Core
    }

    fn label(&self) -> &str {
        "Core"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        TRIGGERS
            .iter()
            .any(|t| strip_prefix_ci(input, t).is_some())
    }

    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed {
        let command = input.trim_end();
        if !eq_any_ci(command, TRIGGERS) {
            return Parsed::Rejected("Unexpected core command".into());
        }
        let target = match command.to_ascii_lowercase().as_str() {
            "?about" => APP_URL.to_string(),
            "?help" => format!("{APP_URL}/wiki"),
            "?issues" => format!("{APP_URL}/issues"),
            "?license" => format!("{APP_URL}/blob/master/LICENSE"),
            "?prefs" => match ctx.config_path {
                Some(path) => path.display().to_string(),
                None => return Parsed::Rejected("No configuration file".into()),
            },
            _ => return Parsed::Rejected("Unexpected core command".into()),
        };
        Parsed::Ready(ResolvedAction::plugin(
            PluginId::Core,
            self.label(),
            XDG_OPEN,
            target,
        ))
    }
}
