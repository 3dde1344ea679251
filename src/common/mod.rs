use std::path::Path;

/// Strip `prefix` from the start of `s`, ignoring ASCII case.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

/// Return `true` if `s` equals any of `candidates`, ignoring ASCII case.
pub fn eq_any_ci(s: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| s.eq_ignore_ascii_case(c))
}

/// Text following `trigger` in `input` with leading whitespace removed.
///
/// A leading `~` that stands alone or is followed by `/` is replaced with
/// `home` when one is known. Returns `None` if `input` does not start with
/// `trigger`.
pub fn argument_after(input: &str, trigger: &str, home: Option<&Path>) -> Option<String> {
    let rest = strip_prefix_ci(input, trigger)?.trim_start();
    Some(expand_home(rest, home))
}

/// Replace a leading `~` or `~/` with the user's home directory.
pub fn expand_home(path: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    let home = home.to_string_lossy();
    if path == "~" {
        home.into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{}", home.trim_end_matches('/'), rest)
    } else {
        path.to_string()
    }
}
