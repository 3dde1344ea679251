//! Candidate filtering and ranking.
//!
//! Both modes compare case-insensitively. The query is lower-cased once and
//! each candidate is lower-cased for comparison only; the returned names keep
//! their original spelling.

/// Ordered candidates produced by a search. The count is always the length of
/// the list, so it is derived rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    items: Vec<String>,
}

impl MatchResult {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl From<Vec<String>> for MatchResult {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// Keep every candidate that contains `query` as a contiguous substring,
/// preserving enumeration order. An empty query keeps everything.
pub fn filter_substring<S: AsRef<str>>(candidates: &[S], query: &str) -> MatchResult {
    let query = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| query.is_empty() || c.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into()
}

/// Normalised edit similarity in `0.0..=1.0`.
pub fn similarity(candidate: &str, query: &str) -> f64 {
    strsim::normalized_levenshtein(&candidate.to_lowercase(), &query.to_lowercase())
}

/// Sort by descending similarity to `query`. Ties keep their relative order.
pub fn rank_by_similarity(result: MatchResult, query: &str) -> MatchResult {
    let mut scored: Vec<(f64, String)> = result
        .into_vec()
        .into_iter()
        .map(|c| (similarity(&c, query), c))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .map(|(_, c)| c)
        .collect::<Vec<_>>()
        .into()
}

/// Substring filter followed by similarity ranking. Used for executable
/// search; an empty query returns the candidates unfiltered and unranked.
pub fn filter_and_rank<S: AsRef<str>>(candidates: &[S], query: &str) -> MatchResult {
    let filtered = filter_substring(candidates, query);
    if query.is_empty() {
        return filtered;
    }
    rank_by_similarity(filtered, query)
}
