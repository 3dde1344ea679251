use crate::plugin::PluginId;

pub mod exec;

/// Where a resolved action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Executable,
    Plugin(PluginId),
}

/// What the gateway does with an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Start `command` as a detached process.
    Launch,
    /// Generate a password in-process instead of starting anything.
    GeneratePassword { length: usize },
}

/// Precondition checked right before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    None,
    /// The argument must be present and name an existing file or directory.
    ExistingPath,
}

/// Final `(command, argument)` pair produced by dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub command: String,
    pub argument: String,
    pub source: Source,
    pub label: String,
    pub kind: ActionKind,
    pub requirement: Requirement,
}

impl ResolvedAction {
    pub fn executable(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            command: name,
            argument: String::new(),
            source: Source::Executable,
            kind: ActionKind::Launch,
            requirement: Requirement::None,
        }
    }

    pub fn plugin(
        id: PluginId,
        label: impl Into<String>,
        command: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            argument: argument.into(),
            source: Source::Plugin(id),
            label: label.into(),
            kind: ActionKind::Launch,
            requirement: Requirement::None,
        }
    }

    pub fn requiring(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn with_kind(mut self, kind: ActionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_plugin(&self) -> bool {
        matches!(self.source, Source::Plugin(_))
    }
}
