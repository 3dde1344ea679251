use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Location of the key/value store holding plugin flags and statistics.
    /// Defaults to `apparat/config.json` in the user's config directory.
    #[serde(default)]
    pub config_file: Option<String>,
    /// Directories listed for executable search.
    #[serde(default = "default_executable_dirs")]
    pub executable_dirs: Vec<String>,
    /// Roots searched by the local file search plugin. If `None`, the home
    /// directory is used.
    #[serde(default)]
    pub local_search_roots: Option<Vec<String>>,
    #[serde(default = "default_local_search_depth")]
    pub local_search_depth: usize,
    /// Maximum number of files returned by the local file search.
    #[serde(default = "default_local_search_limit")]
    pub local_search_limit: usize,
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    /// Log whether the top executable candidate is already running.
    #[serde(default = "default_check_running")]
    pub check_running: bool,
}

fn default_executable_dirs() -> Vec<String> {
    vec!["/usr/bin".into()]
}

fn default_local_search_depth() -> usize {
    6
}

fn default_local_search_limit() -> usize {
    50
}

fn default_password_length() -> usize {
    16
}

fn default_check_running() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            config_file: None,
            executable_dirs: default_executable_dirs(),
            local_search_roots: None,
            local_search_depth: default_local_search_depth(),
            local_search_limit: default_local_search_limit(),
            password_length: default_password_length(),
            check_running: default_check_running(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        match &self.config_file {
            Some(path) => PathBuf::from(path),
            None => dirs_next::config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("apparat")
                .join("config.json"),
        }
    }

    pub fn local_search_roots(&self) -> Vec<PathBuf> {
        match &self.local_search_roots {
            Some(roots) => roots.iter().map(PathBuf::from).collect(),
            None => dirs_next::home_dir().into_iter().collect(),
        }
    }
}
