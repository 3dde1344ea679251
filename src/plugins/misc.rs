use crate::actions::{Requirement, ResolvedAction};
use crate::common::{argument_after, strip_prefix_ci};
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};
use crate::plugins::XDG_OPEN;

const OPEN: &str = "!open";
const TRIGGERS: &[&str] = &[OPEN];

/// `!open <path>` opens a file or folder with the desktop default handler.
///
/// The path is checked when the action is executed, not while typing.
pub struct MiscPlugin;

impl Plugin for MiscPlugin {
    fn id(&self) -> PluginId {
        PluginId::Misc
    }

    fn label(&self) -> &str {
        "Misc (Open)"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        strip_prefix_ci(input, OPEN).is_some()
    }

    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed {
        match argument_after(input, OPEN, ctx.home) {
            Some(path) => Parsed::Ready(
                ResolvedAction::plugin(PluginId::Misc, self.label(), XDG_OPEN, path)
                    .requiring(Requirement::ExistingPath),
            ),
            None => Parsed::Rejected("Unexpected misc plugin command".into()),
        }
    }
}
