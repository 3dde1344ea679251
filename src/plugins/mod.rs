pub mod core_commands;
pub mod kill;
pub mod misc;
pub mod nautilus;
pub mod passwordgen;
pub mod screenshot;
pub mod search_internet;
pub mod search_local;
pub mod session;
pub mod shell;

/// Command used to open files, folders and URLs.
pub const XDG_OPEN: &str = "xdg-open";
