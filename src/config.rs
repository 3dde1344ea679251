use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const SECTION_GENERAL: &str = "General";
pub const SECTION_PLUGINS: &str = "Plugins";
pub const SECTION_STATISTICS: &str = "Statistics";

pub const KEY_HIDE_AFTER_RUN: &str = "hide_ui_after_command_execution";

const TRUE: &str = "True";
const FALSE: &str = "False";

/// Section/key based string storage shared with the preferences UI.
///
/// Implementations must not cache: the dispatcher re-reads plugin flags on
/// every keystroke so changes made elsewhere take effect immediately.
pub trait ConfigStore: Send + Sync {
    fn read(&self, section: &str, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, section: &str, key: &str, value: &str) -> anyhow::Result<()>;
}

type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Store persisted as a JSON object of sections.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty store. Any other read or parse failure is
    /// an error so that a following write cannot clobber the file.
    fn load(&self) -> anyhow::Result<Sections> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Sections::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Sections::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, sections: &Sections) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(sections)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ConfigStore for JsonConfigStore {
    fn read(&self, section: &str, key: &str) -> anyhow::Result<Option<String>> {
        let sections = self.load()?;
        Ok(sections.get(section).and_then(|s| s.get(key)).cloned())
    }

    fn write(&self, section: &str, key: &str, value: &str) -> anyhow::Result<()> {
        let mut sections = self.load()?;
        sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.save(&sections)
    }
}

/// In-memory store, used by tests and by hosts without a config file.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: Mutex<BTreeMap<(String, String), String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, section: &str, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert((section.to_string(), key.to_string()), value.to_string());
        }
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read(&self, section: &str, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("config store lock poisoned"))?;
        Ok(values
            .get(&(section.to_string(), key.to_string()))
            .cloned())
    }

    fn write(&self, section: &str, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("config store lock poisoned"))?;
        values.insert((section.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

/// Typed view over a [`ConfigStore`].
///
/// Reads never fail: a missing key or a broken store yields the type's
/// default (`false`, `0`, empty string) and the problem is logged.
#[derive(Clone)]
pub struct Config {
    store: Arc<dyn ConfigStore>,
}

impl Config {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryConfigStore::new()))
    }

    pub fn get_string(&self, section: &str, key: &str) -> Option<String> {
        match self.store.read(section, key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(section, key, error = %e, "failed to read config value");
                None
            }
        }
    }

    pub fn get_bool(&self, section: &str, key: &str) -> bool {
        self.get_string(section, key).as_deref() == Some(TRUE)
    }

    pub fn get_int(&self, section: &str, key: &str) -> i64 {
        match self.get_string(section, key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(section, key, value = %raw, "config value is not a number");
                0
            }),
            None => 0,
        }
    }

    pub fn set_string(&self, section: &str, key: &str, value: &str) -> anyhow::Result<()> {
        self.store.write(section, key, value)
    }

    pub fn set_bool(&self, section: &str, key: &str, value: bool) -> anyhow::Result<()> {
        self.store
            .write(section, key, if value { TRUE } else { FALSE })
    }

    pub fn set_int(&self, section: &str, key: &str, value: i64) -> anyhow::Result<()> {
        self.store.write(section, key, &value.to_string())
    }

    /// Add one to an integer value. Not atomic across processes.
    pub fn increment(&self, section: &str, key: &str) -> anyhow::Result<i64> {
        let next = self.get_int(section, key) + 1;
        self.set_int(section, key, next)?;
        Ok(next)
    }

    /// Write default values for every key that is currently missing.
    pub fn ensure_defaults(&self) -> anyhow::Result<()> {
        for id in crate::plugin::PluginId::ALL {
            if let Some(key) = id.config_key() {
                self.seed(SECTION_PLUGINS, key, TRUE)?;
            }
        }
        self.seed(SECTION_GENERAL, KEY_HIDE_AFTER_RUN, FALSE)?;
        for key in crate::usage::COUNTER_KEYS {
            self.seed(SECTION_STATISTICS, key, "0")?;
        }
        Ok(())
    }

    fn seed(&self, section: &str, key: &str, value: &str) -> anyhow::Result<()> {
        if self.store.read(section, key)?.is_none() {
            tracing::debug!(section, key, value, "seeding default config value");
            self.store.write(section, key, value)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
