use crate::actions::{ActionKind, ResolvedAction};
use crate::common::eq_any_ci;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};
use rand::distributions::Alphanumeric;
use rand::Rng;

const TRIGGERS: &[&str] = &["!password"];

/// Generates a random password in-process.
pub struct PasswordGenPlugin;

/// Alphanumeric password of `length` characters drawn from `rng`.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

impl Plugin for PasswordGenPlugin {
    fn id(&self) -> PluginId {
        PluginId::PasswordGen
    }

    fn label(&self) -> &str {
        "PasswordGen"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        eq_any_ci(input, TRIGGERS)
    }

    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed {
        Parsed::Ready(
            ResolvedAction::plugin(PluginId::PasswordGen, self.label(), input.trim(), "")
                .with_kind(ActionKind::GeneratePassword {
                    length: ctx.password_length,
                }),
        )
    }
}
