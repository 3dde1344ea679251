use crate::actions::{Requirement, ResolvedAction};
use crate::common::strip_prefix_ci;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};
use crate::plugins::XDG_OPEN;

const TRIGGERS: &[&str] = &["!f "];

/// `!f <term>` searches the user's files. Matches become the candidate list
/// and the selected one is opened with `xdg-open`.
pub struct LocalSearchPlugin;

impl Plugin for LocalSearchPlugin {
    fn id(&self) -> PluginId {
        PluginId::SearchLocal
    }

    fn label(&self) -> &str {
        "Local Search"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        TRIGGERS.iter().any(|t| strip_prefix_ci(input, t).is_some())
    }

    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed {
        let term = match strip_prefix_ci(input, TRIGGERS[0]) {
            Some(rest) => rest.trim(),
            None => return Parsed::Rejected("Unexpected local search command".into()),
        };
        if term.is_empty() {
            return Parsed::Pending;
        }
        let files = match ctx.files.search(term) {
            Ok(files) => files,
            Err(e) => {
                tracing::error!(term, error = %e, "local file search failed");
                return Parsed::Rejected("Local search failed".into());
            }
        };
        match files.first() {
            None => Parsed::Rejected("No files found".into()),
            Some(first) => Parsed::Listing {
                action: ResolvedAction::plugin(
                    PluginId::SearchLocal,
                    self.label(),
                    XDG_OPEN,
                    first.clone(),
                )
                .requiring(Requirement::ExistingPath),
                candidates: files,
            },
        }
    }
}
