use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

/// How a command line is handed to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// `argv[0]` is executed directly, remaining entries are its arguments.
    Direct,
    /// The single `argv` entry is a command line interpreted by `sh -c`.
    Shell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub argv: Vec<String>,
    pub mode: LaunchMode,
}

impl Launch {
    /// Build the launch for `command` and `argument`.
    ///
    /// An argument containing whitespace is treated as several arguments and
    /// goes through the shell, which re-splits it. Only the command itself is
    /// quoted.
    pub fn new(command: &str, argument: &str) -> Self {
        if argument.is_empty() {
            Self {
                argv: vec![command.to_string()],
                mode: LaunchMode::Direct,
            }
        } else if argument.chars().any(char::is_whitespace) {
            let program = shlex::try_quote(command)
                .map(|q| q.into_owned())
                .unwrap_or_else(|_| command.to_string());
            Self {
                argv: vec![format!("{program} {argument}")],
                mode: LaunchMode::Shell,
            }
        } else {
            Self {
                argv: vec![command.to_string(), argument.to_string()],
                mode: LaunchMode::Direct,
            }
        }
    }
}

/// Starts external programs.
pub trait ProcessLauncher: Send + Sync {
    /// Whether `command` resolves to a runnable executable.
    fn exists(&self, command: &str) -> bool;
    /// Start the process without waiting for it to exit.
    fn spawn(&self, launch: &Launch) -> anyhow::Result<()>;
    /// Whether a process with this exact name is already running.
    fn is_running(&self, _name: &str) -> bool {
        false
    }
}

/// Launcher backed by `std::process` and the `PATH` environment variable.
#[derive(Debug, Default, Clone)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn find_in_path(command: &str) -> Option<PathBuf> {
        if command.contains('/') {
            let path = PathBuf::from(command);
            return is_executable(&path).then_some(path);
        }
        let paths = std::env::var_os("PATH")?;
        std::env::split_paths(&paths)
            .map(|dir| dir.join(command))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl ProcessLauncher for SystemLauncher {
    fn exists(&self, command: &str) -> bool {
        Self::find_in_path(command).is_some()
    }

    fn spawn(&self, launch: &Launch) -> anyhow::Result<()> {
        let mut command = match launch.mode {
            LaunchMode::Shell => {
                let mut c = Command::new("sh");
                c.arg("-c").args(&launch.argv);
                c
            }
            LaunchMode::Direct => {
                let (program, args) = launch
                    .argv
                    .split_first()
                    .ok_or_else(|| anyhow::anyhow!("empty command line"))?;
                let mut c = Command::new(program);
                c.args(args);
                c
            }
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command.spawn().map(|_| ()).map_err(|e| e.into())
    }

    fn is_running(&self, name: &str) -> bool {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing()),
        );
        has_process(&sys, name)
    }
}

fn has_process(sys: &System, name: &str) -> bool {
    sys.processes_by_exact_name(OsStr::new(name)).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_is_direct() {
        let launch = Launch::new("firefox", "");
        assert_eq!(launch.argv, vec!["firefox"]);
        assert_eq!(launch.mode, LaunchMode::Direct);
    }

    #[test]
    fn single_token_is_direct() {
        let launch = Launch::new("xdg-open", "foo.txt");
        assert_eq!(launch.argv, vec!["xdg-open", "foo.txt"]);
        assert_eq!(launch.mode, LaunchMode::Direct);
    }

    #[test]
    fn whitespace_goes_through_shell() {
        let launch = Launch::new("find", "-name foo");
        assert_eq!(launch.argv, vec!["find -name foo"]);
        assert_eq!(launch.mode, LaunchMode::Shell);
    }

    #[test]
    fn shell_launch_quotes_the_command() {
        let launch = Launch::new("my tool", "-a -b");
        assert_eq!(launch.mode, LaunchMode::Shell);
        assert!(launch.argv[0].ends_with(" -a -b"));
        assert_ne!(launch.argv[0], "my tool -a -b");
    }

    #[cfg(unix)]
    #[test]
    fn sh_is_found_on_path() {
        assert!(SystemLauncher::new().exists("sh"));
        assert!(!SystemLauncher::new().exists("definitely-not-a-real-binary-4711"));
    }

    #[test]
    fn unknown_process_is_not_running() {
        assert!(!SystemLauncher::new().is_running("definitely-not-a-real-binary-4711"));
    }
}
