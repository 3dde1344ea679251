pub mod actions;
pub mod common;
pub mod config;
pub mod indexer;
pub mod launcher;
pub mod logging;
pub mod matcher;
pub mod plugin;
pub mod plugins;
pub mod presenter;
pub mod router;
pub mod settings;
pub mod usage;
