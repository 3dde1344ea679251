use crate::actions::ResolvedAction;
use crate::plugin::{Parsed, Plugin, PluginContext, PluginId};
use crate::plugins::XDG_OPEN;
use urlencoding::encode;

/// A search engine reachable through a three character code such as `!g `.
pub struct Engine {
    pub code: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const ENGINES: &[Engine] = &[
    Engine { code: "!a ", name: "Amazon", url: "https://www.amazon.com/s?field-keywords=" },
    Engine { code: "!b ", name: "Bandcamp", url: "https://bandcamp.com/search?q=" },
    Engine { code: "!d ", name: "DuckDuckGo", url: "https://duckduckgo.com/?q=" },
    Engine { code: "!g ", name: "Google", url: "https://www.google.com/search?q=" },
    Engine { code: "!l ", name: "Last.fm", url: "https://www.last.fm/search?q=" },
    Engine { code: "!r ", name: "Reddit", url: "https://www.reddit.com/search?q=" },
    Engine { code: "!s ", name: "SoundCloud", url: "https://soundcloud.com/search?q=" },
    Engine { code: "!t ", name: "Twitter", url: "https://twitter.com/search?q=" },
    Engine { code: "!v ", name: "Vimeo", url: "https://vimeo.com/search?q=" },
    Engine { code: "!w ", name: "Wikipedia", url: "https://en.wikipedia.org/w/index.php?search=" },
    Engine { code: "!y ", name: "YouTube", url: "https://www.youtube.com/results?search_query=" },
];

const TRIGGERS: &[&str] = &[
    "!a ", "!b ", "!d ", "!g ", "!l ", "!r ", "!s ", "!t ", "!v ", "!w ", "!y ",
];

pub struct InternetSearchPlugin;

fn engine_for(input: &str) -> Option<&'static Engine> {
    let code = input.get(..3)?;
    ENGINES.iter().find(|e| e.code.eq_ignore_ascii_case(code))
}

impl Plugin for InternetSearchPlugin {
    fn id(&self) -> PluginId {
        PluginId::SearchInternet
    }

    fn label(&self) -> &str {
        "Internet Search"
    }

    fn triggers(&self) -> &[&'static str] {
        TRIGGERS
    }

    fn matches(&self, input: &str) -> bool {
        engine_for(input).is_some()
    }

    fn parse(&self, input: &str, _ctx: &PluginContext<'_>) -> Parsed {
        let Some(engine) = engine_for(input) else {
            return Parsed::Rejected("Unknown search engine".into());
        };
        let term = input[engine.code.len()..].trim();
        if term.is_empty() {
            return Parsed::Pending;
        }
        Parsed::Ready(ResolvedAction::plugin(
            PluginId::SearchInternet,
            format!("Internet Search ({})", engine.name),
            XDG_OPEN,
            format!("{}{}", engine.url, encode(term)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_engine_code_is_a_trigger() {
        assert_eq!(ENGINES.len(), TRIGGERS.len());
        for (engine, trigger) in ENGINES.iter().zip(TRIGGERS) {
            assert_eq!(engine.code, *trigger);
            assert_eq!(engine.code.len(), 3);
        }
    }
}
