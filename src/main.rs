use apparat::actions::exec::SystemLauncher;
use apparat::config::{Config, JsonConfigStore};
use apparat::logging;
use apparat::presenter::Presenter;
use apparat::router::Dispatcher;
use apparat::settings::{Settings, SETTINGS_FILE};
use apparat::usage;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Prints dispatcher callbacks to stdout.
#[derive(Default)]
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn set_result_count(&mut self, count: usize) {
        println!("results: {count}");
    }

    fn set_candidate_list(&mut self, candidates: &[String]) {
        for (i, c) in candidates.iter().take(10).enumerate() {
            println!("  [{i}] {c}");
        }
    }

    fn set_resolved_command(&mut self, command: &str, argument: &str) {
        if !command.is_empty() {
            println!("command: {command} {argument}");
        }
    }

    fn set_plugin_label(&mut self, label: &str) {
        if !label.is_empty() {
            println!("plugin: {label}");
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("error: {message}");
    }

    fn show_success(&mut self) {}

    fn clear_status(&mut self) {}

    fn show_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn set_search_text(&mut self, text: &str) {
        println!("> {text}");
    }

    fn reset_all(&mut self) {}

    fn hide(&mut self) {
        println!("(hidden)");
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));

    let store = JsonConfigStore::new(settings.config_path());
    tracing::info!(path = %store.path().display(), "using config file");
    let config = Config::new(Arc::new(store));
    config.ensure_defaults()?;
    usage::record_app_started(&config)?;

    let mut dispatcher = Dispatcher::from_settings(&settings, config, Arc::new(SystemLauncher::new()));
    let mut presenter = TerminalPresenter::default();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("apparat> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        if !handle_line(&mut dispatcher, &mut presenter, &line?) {
            break;
        }
    }
    Ok(())
}

/// Feed one input line to the dispatcher. An empty line is Escape, `:N`
/// picks candidate N, anything else is typed and submitted. Returns `false`
/// when Escape is pressed on an already clean prompt.
fn handle_line(dispatcher: &mut Dispatcher, presenter: &mut dyn Presenter, line: &str) -> bool {
    if line.is_empty() {
        if dispatcher.is_reset() {
            return false;
        }
        dispatcher.escape(presenter);
    } else if let Some(index) = line.strip_prefix(':').and_then(|n| n.parse().ok()) {
        dispatcher.select_candidate(index, presenter);
        dispatcher.submit(presenter);
    } else {
        dispatcher.dispatch(line, presenter);
        dispatcher.submit(presenter);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use apparat::actions::exec::{Launch, ProcessLauncher};
    use apparat::config::{KEY_HIDE_AFTER_RUN, SECTION_GENERAL};

    struct AcceptAll;

    impl ProcessLauncher for AcceptAll {
        fn exists(&self, _command: &str) -> bool {
            true
        }

        fn spawn(&self, _launch: &Launch) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn hide_after_run_keeps_the_prompt_alive() {
        let config = Config::in_memory();
        config.set_bool(SECTION_GENERAL, KEY_HIDE_AFTER_RUN, true).unwrap();
        let mut dispatcher = Dispatcher::new(
            config,
            Box::new(vec!["gimp".to_string()]),
            Box::new(Vec::<PathBuf>::new()),
            Arc::new(AcceptAll),
        );
        let mut presenter = TerminalPresenter;

        assert!(handle_line(&mut dispatcher, &mut presenter, "gimp"));
        assert!(dispatcher.is_reset());
        assert!(handle_line(&mut dispatcher, &mut presenter, "zzz"));
        assert!(handle_line(&mut dispatcher, &mut presenter, ""));
        assert!(!handle_line(&mut dispatcher, &mut presenter, ""));
    }
}
