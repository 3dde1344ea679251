//! Input dispatch.
//!
//! [`Dispatcher`] owns everything the search box needs between keystrokes:
//! the current text, the last routing [`Outcome`], the selected candidate and
//! the reset/dropdown flags. Each event runs to completion before the next
//! one is accepted, so the dispatcher is plain `&mut self` state.

use crate::actions::exec::ProcessLauncher;
use crate::actions::ResolvedAction;
use crate::config::{Config, KEY_HIDE_AFTER_RUN, SECTION_GENERAL};
use crate::indexer::{DirectoryExecutables, ExecutableSource, FileSearch, HomeFileSearch};
use crate::launcher::{ExecError, ExecutionGateway, Started};
use crate::matcher;
use crate::plugin::{Parsed, PluginContext, PluginId, PluginRegistry};
use crate::presenter::Presenter;
use crate::settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;

/// Characters that mark input as a plugin invocation.
pub const SIGILS: [char; 2] = ['!', '?'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouterState {
    #[default]
    Empty,
    ExecutableSearch,
    /// Input starts with a sigil and has not been routed yet.
    PluginForm,
    PluginMatchedUnique,
    PluginMatchedAmbiguous,
    PluginNoMatch,
    Invalid,
}

/// What the entries of [`Outcome::candidates`] are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateKind {
    #[default]
    None,
    Executables,
    /// Plugin triggers offered by the fallback trigger search.
    Triggers,
    /// Paths listed by a plugin; selecting one replaces the argument.
    Files,
}

/// Result of routing one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub state: RouterState,
    pub count: usize,
    pub candidates: Vec<String>,
    pub candidate_kind: CandidateKind,
    /// `None` means there is nothing to execute.
    pub action: Option<ResolvedAction>,
    pub plugin: Option<PluginId>,
    pub label: String,
}

impl Outcome {
    fn present(&self, presenter: &mut dyn Presenter) {
        presenter.set_result_count(self.count);
        presenter.set_candidate_list(&self.candidates);
        match &self.action {
            Some(action) => presenter.set_resolved_command(&action.command, &action.argument),
            None => presenter.set_resolved_command("", ""),
        }
        presenter.set_plugin_label(&self.label);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// Nothing runnable is selected.
    Ignored,
    /// The dropdown was open; it was closed and the input routed again.
    Redispatched,
    Started(Started),
    Failed(ExecError),
}

pub struct Dispatcher {
    registry: PluginRegistry,
    config: Config,
    executables: Box<dyn ExecutableSource>,
    files: Box<dyn FileSearch>,
    gateway: ExecutionGateway,
    home: Option<PathBuf>,
    config_path: Option<PathBuf>,
    password_length: usize,
    check_running: bool,

    input: String,
    outcome: Outcome,
    selected: Option<usize>,
    is_reset: bool,
    dropdown_open: bool,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        executables: Box<dyn ExecutableSource>,
        files: Box<dyn FileSearch>,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            registry: PluginRegistry::builtin(),
            gateway: ExecutionGateway::new(launcher, config.clone()),
            config,
            executables,
            files,
            home: None,
            config_path: None,
            password_length: 16,
            check_running: false,
            input: String::new(),
            outcome: Outcome::default(),
            selected: None,
            is_reset: true,
            dropdown_open: false,
        }
    }

    /// Dispatcher wired to the real filesystem as described by `settings`.
    pub fn from_settings(
        settings: &Settings,
        config: Config,
        launcher: Arc<dyn ProcessLauncher>,
    ) -> Self {
        let executables = DirectoryExecutables::new(settings.executable_dirs.iter().map(PathBuf::from));
        let files = HomeFileSearch::new(
            settings.local_search_roots(),
            settings.local_search_depth,
            settings.local_search_limit,
        );
        let mut dispatcher = Self::new(config, Box::new(executables), Box::new(files), launcher)
            .with_config_path(settings.config_path())
            .with_password_length(settings.password_length)
            .with_check_running(settings.check_running);
        dispatcher.home = dirs_next::home_dir();
        dispatcher
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_password_length(mut self, length: usize) -> Self {
        self.password_length = length;
        self
    }

    pub fn with_check_running(mut self, check: bool) -> Self {
        self.check_running = check;
        self
    }

    pub fn with_registry(mut self, registry: PluginRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn state(&self) -> RouterState {
        self.outcome.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_reset(&self) -> bool {
        self.is_reset
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Route typed text. A single suggested trigger is auto-completed.
    pub fn dispatch(&mut self, text: &str, presenter: &mut dyn Presenter) -> &Outcome {
        self.dispatch_with(text, true, presenter)
    }

    /// Route text after a deletion. Never auto-completes, so the user can
    /// delete back through a trigger.
    pub fn backspace(&mut self, text: &str, presenter: &mut dyn Presenter) -> &Outcome {
        self.dispatch_with(text, false, presenter)
    }

    fn dispatch_with(
        &mut self,
        text: &str,
        autocomplete: bool,
        presenter: &mut dyn Presenter,
    ) -> &Outcome {
        self.input = text.to_string();
        self.selected = None;
        self.outcome = self.route(text, autocomplete, presenter);
        tracing::debug!(
            input = %self.input,
            state = ?self.outcome.state,
            count = self.outcome.count,
            "dispatched"
        );
        &self.outcome
    }

    fn route(&mut self, text: &str, autocomplete: bool, presenter: &mut dyn Presenter) -> Outcome {
        let query = text.to_lowercase();
        if query.trim().is_empty() {
            if !self.is_reset {
                self.reset(presenter);
            }
            return Outcome::default();
        }
        self.is_reset = false;

        if query.starts_with(SIGILS) {
            tracing::debug!(state = ?RouterState::PluginForm, input = text);
            self.route_plugin(text, autocomplete, presenter)
        } else {
            self.search_executables(&query, presenter)
        }
    }

    fn search_executables(&self, query: &str, presenter: &mut dyn Presenter) -> Outcome {
        let names = self.executables.list().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to enumerate executables");
            Vec::new()
        });
        let result = matcher::filter_and_rank(&names, query);
        let count = result.count();
        let action = result.first().map(ResolvedAction::executable);

        let outcome = match action {
            None => Outcome {
                state: RouterState::Invalid,
                ..Outcome::default()
            },
            Some(action) => {
                if self.check_running && self.gateway.launcher().is_running(&action.command) {
                    tracing::info!(command = %action.command, "already running");
                }
                Outcome {
                    state: RouterState::ExecutableSearch,
                    count,
                    candidates: result.into_vec(),
                    candidate_kind: CandidateKind::Executables,
                    action: Some(action),
                    ..Outcome::default()
                }
            }
        };
        outcome.present(presenter);
        match count {
            0 => presenter.show_error("No executables found"),
            1 => presenter.show_success(),
            _ => presenter.clear_status(),
        }
        outcome
    }

    fn route_plugin(&mut self, text: &str, autocomplete: bool, presenter: &mut dyn Presenter) -> Outcome {
        let matched = {
            let ctx = PluginContext {
                home: self.home.as_deref(),
                files: self.files.as_ref(),
                config_path: self.config_path.as_deref(),
                password_length: self.password_length,
            };
            self.registry
                .find_match(text, &self.config)
                .map(|plugin| (plugin.id(), plugin.label().to_string(), plugin.parse(text, &ctx)))
        };

        let Some((id, label, parsed)) = matched else {
            return self.search_triggers(text, autocomplete, presenter);
        };

        let unique = Outcome {
            state: RouterState::PluginMatchedUnique,
            plugin: Some(id),
            label,
            ..Outcome::default()
        };
        match parsed {
            Parsed::Ready(action) => {
                let outcome = Outcome {
                    count: 1,
                    action: Some(action),
                    ..unique
                };
                outcome.present(presenter);
                presenter.show_success();
                outcome
            }
            Parsed::Listing { action, candidates } => {
                let outcome = Outcome {
                    count: candidates.len(),
                    candidates,
                    candidate_kind: CandidateKind::Files,
                    action: Some(action),
                    ..unique
                };
                outcome.present(presenter);
                presenter.show_success();
                outcome
            }
            Parsed::Pending => {
                let outcome = Outcome { count: 1, ..unique };
                outcome.present(presenter);
                presenter.clear_status();
                outcome
            }
            Parsed::Rejected(message) => {
                tracing::debug!(plugin = %id, %message, "plugin rejected input");
                unique.present(presenter);
                presenter.show_error(&message);
                unique
            }
        }
    }

    /// Suggest plugin triggers containing the input.
    fn search_triggers(&mut self, text: &str, autocomplete: bool, presenter: &mut dyn Presenter) -> Outcome {
        let mut triggers = self.registry.core_triggers();
        triggers.extend(self.registry.list_enabled_triggers(&self.config));
        let mut suggestions = matcher::filter_substring(&triggers, text).into_vec();
        suggestions.sort();

        match suggestions.len() {
            0 => {
                let outcome = Outcome {
                    state: RouterState::PluginNoMatch,
                    ..Outcome::default()
                };
                outcome.present(presenter);
                presenter.show_error("Invalid input");
                outcome
            }
            1 if autocomplete => {
                let trigger = suggestions.remove(0);
                tracing::debug!(%trigger, "autocompleting single trigger");
                presenter.set_search_text(&trigger);
                self.input = trigger.clone();
                return self.route(&trigger, false, presenter);
            }
            1 => {
                let outcome = Outcome {
                    state: RouterState::PluginNoMatch,
                    count: 1,
                    candidates: suggestions,
                    candidate_kind: CandidateKind::Triggers,
                    ..Outcome::default()
                };
                outcome.present(presenter);
                presenter.show_success();
                outcome
            }
            count => {
                let outcome = Outcome {
                    state: RouterState::PluginMatchedAmbiguous,
                    count,
                    candidates: suggestions,
                    candidate_kind: CandidateKind::Triggers,
                    ..Outcome::default()
                };
                outcome.present(presenter);
                presenter.clear_status();
                outcome
            }
        }
    }

    /// Pick the candidate at `index` from the current result list.
    pub fn select_candidate(&mut self, index: usize, presenter: &mut dyn Presenter) -> &Outcome {
        self.dropdown_open = false;
        let Some(candidate) = self.outcome.candidates.get(index).cloned() else {
            tracing::debug!(index, "no candidate at index");
            return &self.outcome;
        };

        match self.outcome.candidate_kind {
            CandidateKind::Executables => {
                presenter.set_resolved_command(&candidate, "");
                presenter.show_success();
                self.outcome.action = Some(ResolvedAction::executable(candidate));
                self.selected = Some(index);
            }
            CandidateKind::Files => {
                if let Some(action) = self.outcome.action.as_mut() {
                    action.argument = candidate;
                    presenter.set_resolved_command(&action.command, &action.argument);
                    presenter.show_success();
                }
                self.selected = Some(index);
            }
            CandidateKind::Triggers => {
                presenter.set_search_text(&candidate);
                return self.dispatch_with(&candidate, false, presenter);
            }
            CandidateKind::None => {}
        }
        &self.outcome
    }

    /// Open the candidate dropdown if there is anything to choose from.
    pub fn open_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.outcome.candidates.is_empty();
        self.dropdown_open
    }

    fn can_submit(&self) -> bool {
        match self.outcome.state {
            RouterState::PluginMatchedUnique => self.outcome.action.is_some(),
            RouterState::ExecutableSearch => self.outcome.count == 1 || self.selected.is_some(),
            _ => false,
        }
    }

    /// Enter key. Executes the resolved action when the state allows it.
    pub fn submit(&mut self, presenter: &mut dyn Presenter) -> Submitted {
        if self.dropdown_open {
            self.dropdown_open = false;
            let input = self.input.clone();
            self.dispatch_with(&input, false, presenter);
            return Submitted::Redispatched;
        }
        if !self.can_submit() {
            tracing::debug!(state = ?self.outcome.state, "nothing to submit");
            return Submitted::Ignored;
        }
        let Some(action) = self.outcome.action.clone() else {
            return Submitted::Ignored;
        };

        match self.gateway.execute(&action) {
            Ok(Started::Noop) => Submitted::Started(Started::Noop),
            Ok(started) => {
                self.reset(presenter);
                if let Started::Generated(value) = &started {
                    presenter.show_message(value);
                }
                if self.config.get_bool(SECTION_GENERAL, KEY_HIDE_AFTER_RUN) {
                    presenter.hide();
                }
                Submitted::Started(started)
            }
            Err(e) => {
                tracing::warn!(error = %e, "execution failed");
                presenter.show_error(&e.to_string());
                Submitted::Failed(e)
            }
        }
    }

    /// Escape key: clear a dirty UI, hide an already clean one.
    pub fn escape(&mut self, presenter: &mut dyn Presenter) {
        if self.is_reset {
            presenter.hide();
        } else {
            self.reset(presenter);
        }
    }

    /// Return to the initial `Empty` state.
    pub fn reset(&mut self, presenter: &mut dyn Presenter) {
        tracing::debug!("resetting ui");
        self.input.clear();
        self.outcome = Outcome::default();
        self.selected = None;
        self.dropdown_open = false;
        self.is_reset = true;
        presenter.reset_all();
    }
}
