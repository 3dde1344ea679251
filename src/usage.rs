use crate::config::{Config, SECTION_STATISTICS};

pub const APP_STARTED: &str = "apparat_started";
pub const COMMAND_EXECUTED: &str = "command_executed";
pub const PLUGIN_EXECUTED: &str = "plugin_executed";

pub const COUNTER_KEYS: [&str; 3] = [APP_STARTED, COMMAND_EXECUTED, PLUGIN_EXECUTED];

/// Usage statistics as stored in the `Statistics` section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UsageCounters {
    pub app_started: i64,
    pub commands_executed: i64,
    pub plugins_executed: i64,
}

impl UsageCounters {
    pub fn load(config: &Config) -> Self {
        Self {
            app_started: config.get_int(SECTION_STATISTICS, APP_STARTED),
            commands_executed: config.get_int(SECTION_STATISTICS, COMMAND_EXECUTED),
            plugins_executed: config.get_int(SECTION_STATISTICS, PLUGIN_EXECUTED),
        }
    }
}

pub fn record_app_started(config: &Config) -> anyhow::Result<()> {
    config.increment(SECTION_STATISTICS, APP_STARTED)?;
    Ok(())
}

/// Count one executed command, and one plugin execution if it came from a
/// plugin. Failures are logged and swallowed; statistics are best effort.
pub fn record_execution(config: &Config, from_plugin: bool) {
    if let Err(e) = config.increment(SECTION_STATISTICS, COMMAND_EXECUTED) {
        tracing::warn!(error = %e, "failed to update command counter");
    }
    if from_plugin {
        if let Err(e) = config.increment(SECTION_STATISTICS, PLUGIN_EXECUTED) {
            tracing::warn!(error = %e, "failed to update plugin counter");
        }
    }
}
