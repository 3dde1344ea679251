use crate::actions::ResolvedAction;
use crate::config::{Config, SECTION_PLUGINS};
use crate::indexer::FileSearch;
use std::path::Path;

/// Every built-in plugin, declared in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluginId {
    Core,
    Kill,
    Misc,
    Nautilus,
    PasswordGen,
    Screenshot,
    SearchInternet,
    SearchLocal,
    Session,
    Shell,
}

impl PluginId {
    pub const ALL: [PluginId; 10] = [
        PluginId::Core,
        PluginId::Kill,
        PluginId::Misc,
        PluginId::Nautilus,
        PluginId::PasswordGen,
        PluginId::Screenshot,
        PluginId::SearchInternet,
        PluginId::SearchLocal,
        PluginId::Session,
        PluginId::Shell,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PluginId::Core => "core",
            PluginId::Kill => "kill",
            PluginId::Misc => "misc",
            PluginId::Nautilus => "nautilus",
            PluginId::PasswordGen => "passwordgen",
            PluginId::Screenshot => "screenshot",
            PluginId::SearchInternet => "search_internet",
            PluginId::SearchLocal => "search_local",
            PluginId::Session => "session",
            PluginId::Shell => "shell",
        }
    }

    /// Key of the enabled flag in the `Plugins` section. The core plugin has
    /// none and cannot be disabled.
    pub fn config_key(self) -> Option<&'static str> {
        match self {
            PluginId::Core => None,
            PluginId::Kill => Some("plugin_kill"),
            PluginId::Misc => Some("plugin_misc"),
            PluginId::Nautilus => Some("plugin_nautilus"),
            PluginId::PasswordGen => Some("plugin_passwordgen"),
            PluginId::Screenshot => Some("plugin_screenshot"),
            PluginId::SearchInternet => Some("plugin_search_internet"),
            PluginId::SearchLocal => Some("plugin_search_local"),
            PluginId::Session => Some("plugin_session"),
            PluginId::Shell => Some("plugin_shell"),
        }
    }

    /// Whether the plugin's triggers appear in the trigger suggestion list.
    pub fn is_suggested(self) -> bool {
        self != PluginId::SearchLocal
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Environment a plugin may consult while parsing.
pub struct PluginContext<'a> {
    pub home: Option<&'a Path>,
    pub files: &'a dyn FileSearch,
    pub config_path: Option<&'a Path>,
    pub password_length: usize,
}

/// Result of handing a structurally matched input to its plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A complete action.
    Ready(ResolvedAction),
    /// Several possible targets; `action` uses the first one.
    Listing {
        action: ResolvedAction,
        candidates: Vec<String>,
    },
    /// The input belongs to the plugin but needs more text.
    Pending,
    /// The input belongs to the plugin but cannot be used.
    Rejected(String),
}

pub trait Plugin: Send + Sync {
    fn id(&self) -> PluginId;
    /// Human readable name shown while the plugin is active.
    fn label(&self) -> &str;
    /// Tokens offered in trigger suggestions.
    fn triggers(&self) -> &[&'static str];
    /// Structural test: does `input` belong to this plugin?
    fn matches(&self, input: &str) -> bool;
    /// Turn a matching input into an action.
    fn parse(&self, input: &str, ctx: &PluginContext<'_>) -> Parsed;
}

/// Plugins kept in routing priority order.
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Registry holding every built-in plugin.
    pub fn builtin() -> Self {
        use crate::plugins;
        let mut registry = Self::new();
        registry.register(Box::new(plugins::core_commands::CorePlugin));
        registry.register(Box::new(plugins::kill::KillPlugin));
        registry.register(Box::new(plugins::misc::MiscPlugin));
        registry.register(Box::new(plugins::nautilus::NautilusPlugin));
        registry.register(Box::new(plugins::passwordgen::PasswordGenPlugin));
        registry.register(Box::new(plugins::screenshot::ScreenshotPlugin));
        registry.register(Box::new(plugins::search_internet::InternetSearchPlugin));
        registry.register(Box::new(plugins::search_local::LocalSearchPlugin));
        registry.register(Box::new(plugins::session::SessionPlugin));
        registry.register(Box::new(plugins::shell::ShellPlugin));
        registry
    }

    /// Insert `plugin` at its priority position. Plugins sharing an id keep
    /// registration order.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        let id = plugin.id();
        let pos = self.plugins.partition_point(|p| p.id() <= id);
        self.plugins.insert(pos, plugin);
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|p| p.as_ref())
    }

    pub fn get(&self, id: PluginId) -> Option<&dyn Plugin> {
        self.plugins().find(|p| p.id() == id)
    }

    /// Read the plugin's enabled flag. Not cached.
    pub fn is_enabled(&self, id: PluginId, config: &Config) -> bool {
        match id.config_key() {
            None => true,
            Some(key) => config.get_bool(SECTION_PLUGINS, key),
        }
    }

    /// Triggers of the always-on plugins.
    pub fn core_triggers(&self) -> Vec<String> {
        self.plugins()
            .filter(|p| p.id().config_key().is_none())
            .flat_map(|p| p.triggers().iter().map(|t| t.to_string()))
            .collect()
    }

    /// Triggers of every enabled, gateable plugin in priority order, leaving
    /// out plugins that are never suggested.
    pub fn list_enabled_triggers(&self, config: &Config) -> Vec<String> {
        self.plugins()
            .filter(|p| p.id().config_key().is_some() && p.id().is_suggested())
            .filter(|p| self.is_enabled(p.id(), config))
            .flat_map(|p| p.triggers().iter().map(|t| t.to_string()))
            .collect()
    }

    /// First enabled plugin whose structural test accepts `input`.
    pub fn find_match(&self, input: &str, config: &Config) -> Option<&dyn Plugin> {
        for plugin in self.plugins() {
            if !self.is_enabled(plugin.id(), config) {
                tracing::trace!(plugin = %plugin.id(), "skipping disabled plugin");
                continue;
            }
            if plugin.matches(input) {
                tracing::debug!(plugin = %plugin.id(), input, "plugin matched");
                return Some(plugin);
            }
        }
        None
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
