use crate::actions::exec::{Launch, LaunchMode, ProcessLauncher};
use crate::actions::{ActionKind, Requirement, ResolvedAction};
use crate::config::Config;
use crate::plugins::passwordgen::generate_password;
use crate::usage;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The command is not a runnable executable.
    NotExecutable(String),
    /// A plugin precondition failed; nothing was started.
    InvalidPluginParameter(String),
    /// The OS refused to start the process.
    Spawn(String),
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecError::NotExecutable(cmd) => write!(f, "Checking the executable failed: {cmd}"),
            ExecError::InvalidPluginParameter(msg) => f.write_str(msg),
            ExecError::Spawn(msg) => write!(f, "Failed to start process: {msg}"),
        }
    }
}

impl std::error::Error for ExecError {}

/// What `execute` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Started {
    /// Empty command; nothing happened.
    Noop,
    /// A detached process was started.
    Process(Launch),
    /// A value was produced in-process for the host to display.
    Generated(String),
}

/// Validates resolved actions, updates usage statistics and starts
/// processes.
#[derive(Clone)]
pub struct ExecutionGateway {
    launcher: Arc<dyn ProcessLauncher>,
    config: Config,
}

impl ExecutionGateway {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, config: Config) -> Self {
        Self { launcher, config }
    }

    pub fn launcher(&self) -> &dyn ProcessLauncher {
        self.launcher.as_ref()
    }

    pub fn execute(&self, action: &ResolvedAction) -> Result<Started, ExecError> {
        if action.command.is_empty() {
            tracing::debug!("command is empty, nothing to execute");
            return Ok(Started::Noop);
        }
        check_requirement(action)?;

        match action.kind {
            ActionKind::GeneratePassword { length } => {
                usage::record_execution(&self.config, action.is_plugin());
                let password = generate_password(&mut rand::thread_rng(), length);
                tracing::debug!(length, "generated password");
                Ok(Started::Generated(password))
            }
            ActionKind::Launch => {
                if !self.launcher.exists(&action.command) {
                    tracing::error!(command = %action.command, "command is not executable");
                    return Err(ExecError::NotExecutable(action.command.clone()));
                }
                usage::record_execution(&self.config, action.is_plugin());

                let launch = Launch::new(&action.command, &action.argument);
                if launch.mode == LaunchMode::Shell {
                    tracing::debug!(
                        argument = %action.argument,
                        "argument contains whitespace, launching through the shell; quoted spaces are not preserved"
                    );
                }
                self.launcher.spawn(&launch).map_err(|e| {
                    tracing::error!(command = %action.command, error = %e, "failed to spawn");
                    ExecError::Spawn(e.to_string())
                })?;
                tracing::info!(
                    command = %action.command,
                    argument = %action.argument,
                    source = ?action.source,
                    "launched"
                );
                Ok(Started::Process(launch))
            }
        }
    }
}

fn check_requirement(action: &ResolvedAction) -> Result<(), ExecError> {
    match action.requirement {
        Requirement::None => Ok(()),
        Requirement::ExistingPath => {
            if action.argument.is_empty() {
                return Err(ExecError::InvalidPluginParameter(format!(
                    "No parameter supplied for {}",
                    action.label
                )));
            }
            if !Path::new(&action.argument).exists() {
                tracing::debug!(path = %action.argument, "path does not exist");
                return Err(ExecError::InvalidPluginParameter("Invalid parameter".into()));
            }
            Ok(())
        }
    }
}
