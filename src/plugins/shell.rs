use crate::actions::ResolvedAction;
use crate::common::strip_prefix_ci;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};

const PREFIX: &str = "!sh ";
const TRIGGERS: &[&str] = &[PREFIX];

/// `!sh <command> [arguments]` runs an arbitrary program.
pub struct ShellPlugin;

/// Split a command line into the program and the raw remainder.
fn split_command(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((program, rest)) => (program.to_string(), rest.trim().to_string()),
        None => (line.to_string(), String::new()),
    })
}

impl Plugin for ShellPlugin {
    fn id(&self) -> PluginId {
        PluginId::Shell
    }

    fn label(&self) -> &str {
        "Shell"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        strip_prefix_ci(input, PREFIX).is_some()
    }

    fn parse(&self, input: &str, _ctx: &PluginContext<'_>) -> Parsed {
        let Some(line) = strip_prefix_ci(input, PREFIX) else {
            return Parsed::Rejected("Unexpected shell plugin command".into());
        };
        match split_command(line) {
            Some((program, rest)) => Parsed::Ready(ResolvedAction::plugin(
                PluginId::Shell,
                self.label(),
                program,
                rest,
            )),
            None => Parsed::Pending,
        }
    }
}
