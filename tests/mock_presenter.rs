#![allow(dead_code)]

use apparat::actions::exec::{Launch, ProcessLauncher};
use apparat::config::Config;
use apparat::indexer::ExecutableSource;
use apparat::presenter::Presenter;
use apparat::router::Dispatcher;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ResultCount(usize),
    Candidates(Vec<String>),
    Command(String, String),
    Label(String),
    Error(String),
    Success,
    ClearStatus,
    Message(String),
    SearchText(String),
    ResetAll,
    Hide,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Message(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_count(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::ResultCount(n) => Some(*n),
            _ => None,
        })
    }

    pub fn saw(&self, call: &Call) -> bool {
        self.calls.contains(call)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn set_result_count(&mut self, count: usize) {
        self.calls.push(Call::ResultCount(count));
    }

    fn set_candidate_list(&mut self, candidates: &[String]) {
        self.calls.push(Call::Candidates(candidates.to_vec()));
    }

    fn set_resolved_command(&mut self, command: &str, argument: &str) {
        self.calls
            .push(Call::Command(command.to_string(), argument.to_string()));
    }

    fn set_plugin_label(&mut self, label: &str) {
        self.calls.push(Call::Label(label.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(Call::Error(message.to_string()));
    }

    fn show_success(&mut self) {
        self.calls.push(Call::Success);
    }

    fn clear_status(&mut self) {
        self.calls.push(Call::ClearStatus);
    }

    fn show_message(&mut self, message: &str) {
        self.calls.push(Call::Message(message.to_string()));
    }

    fn set_search_text(&mut self, text: &str) {
        self.calls.push(Call::SearchText(text.to_string()));
    }

    fn reset_all(&mut self) {
        self.calls.push(Call::ResetAll);
    }

    fn hide(&mut self) {
        self.calls.push(Call::Hide);
    }
}

/// Launcher that only knows the commands it was given and records spawns
/// instead of starting anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    existing: Arc<HashSet<String>>,
    spawned: Arc<Mutex<Vec<Launch>>>,
    fail_spawn: bool,
}

impl RecordingLauncher {
    pub fn with_commands(commands: &[&str]) -> Self {
        Self {
            existing: Arc::new(commands.iter().map(|c| c.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_spawn = true;
        self
    }

    pub fn spawned(&self) -> Vec<Launch> {
        self.spawned.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn exists(&self, command: &str) -> bool {
        self.existing.contains(command)
    }

    fn spawn(&self, launch: &Launch) -> anyhow::Result<()> {
        if self.fail_spawn {
            anyhow::bail!("spawn refused");
        }
        self.spawned.lock().unwrap().push(launch.clone());
        Ok(())
    }
}

/// In-memory config with every plugin enabled.
pub fn enabled_config() -> Config {
    let config = Config::in_memory();
    config.ensure_defaults().unwrap();
    config
}

pub fn names(list: &[&str]) -> Box<dyn ExecutableSource> {
    Box::new(list.iter().map(|s| s.to_string()).collect::<Vec<_>>())
}

pub fn dispatcher(executables: &[&str], config: Config, launcher: &RecordingLauncher) -> Dispatcher {
    Dispatcher::new(
        config,
        names(executables),
        Box::new(Vec::<PathBuf>::new()),
        Arc::new(launcher.clone()),
    )
}
