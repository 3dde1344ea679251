use crate::actions::{Requirement, ResolvedAction};
use crate::common::{argument_after, eq_any_ci, strip_prefix_ci};
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};

const GOTO: &str = "!goto";
const TRIGGERS: &[&str] = &["!computer", "!goto", "!network", "!recent", "!trash"];

/// Opens Nautilus at a virtual location or, with `!goto`, at a path.
pub struct NautilusPlugin;

fn location(trigger: &str) -> Option<&'static str> {
    match trigger.to_ascii_lowercase().as_str() {
        "!computer" => Some("computer:///"),
        "!network" => Some("network:///"),
        "!recent" => Some("recent:///"),
        "!trash" => Some("trash:///"),
        _ => None,
    }
}

impl Plugin for NautilusPlugin {
    fn id(&self) -> PluginId {
        PluginId::Nautilus
    }

    fn label(&self) -> &str {
        "Nautilus"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        eq_any_ci(input, TRIGGERS) || strip_prefix_ci(input, GOTO).is_some()
    }

    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed {
        if let Some(target) = location(input) {
            return Parsed::Ready(ResolvedAction::plugin(
                PluginId::Nautilus,
                self.label(),
                "nautilus",
                target,
            ));
        }
        match argument_after(input, GOTO, ctx.home) {
            Some(path) if path.is_empty() => Parsed::Pending,
            Some(path) => Parsed::Ready(
                ResolvedAction::plugin(PluginId::Nautilus, "Nautilus (Goto)", "nautilus", path)
                    .requiring(Requirement::ExistingPath),
            ),
            None => Parsed::Rejected("Unexpected nautilus plugin command".into()),
        }
    }
}
