use crate::actions::ResolvedAction;
use crate::common::eq_any_ci;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};

const TRIGGERS: &[&str] = &["!kill"];

/// Starts `xkill` so the user can click the window to terminate.
pub struct KillPlugin;

impl Plugin for KillPlugin {
    fn id(&self) -> PluginId {
        PluginId::Kill
    }

    fn label(&self) -> &str {
        "Kill"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        eq_any_ci(input, TRIGGERS)
    }

    fn parse(&self, _input: &str, _ctx: &PluginContext<'_>) -> Parsed {
        Parsed::Ready(ResolvedAction::plugin(
            PluginId::Kill,
            self.label(),
            "xkill",
            "",
        ))
    }
}
