//! Option filtering.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::FilterMode;

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Indices of the options that survive `query`, in display order.
///
/// An empty query keeps every option. Prefix and substring matching are
/// case-insensitive and keep the original order; fuzzy orders by score.
pub fn filter_options(mode: FilterMode, query: &str, options: &[String]) -> Vec<usize> {
    if query.is_empty() || mode == FilterMode::None {
        return (0..options.len()).collect();
    }
    let needle = query.to_lowercase();
    match mode {
        FilterMode::None => (0..options.len()).collect(),
        FilterMode::Prefix => matching(options, |option| option.starts_with(&needle)),
        FilterMode::Substring => matching(options, |option| option.contains(&needle)),
        FilterMode::Fuzzy => fuzzy_filter(query, options)
            .into_iter()
            .map(|m| m.index)
            .collect(),
    }
}

fn matching(options: &[String], keep: impl Fn(&str) -> bool) -> Vec<usize> {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| keep(&option.to_lowercase()))
        .map(|(index, _)| index)
        .collect()
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first). Options with equal
/// scores keep their list order, so a stable option list gives a stable
/// suggestion order while typing. Empty query returns all items with
/// score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort keeps list order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
