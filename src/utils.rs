//! Helpers for source extraction, article-count coercion and log output.

use crate::models::{SearchQuery, SearchResult};
use itertools::Itertools;
use std::num::IntErrorKind;

/// Unique source names of a result, sorted ascending.
///
/// An absent result, or one without articles, yields an empty list.
///
/// # Examples
///
/// ```ignore
/// // sources ["BBC", "CNN", "BBC"] -> ["BBC", "CNN"]
/// let sources = get_article_sources(Some(&result));
/// ```
pub fn get_article_sources(result: Option<&SearchResult>) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };
    result
        .articles
        .iter()
        .map(|a| a.source_name.clone())
        .unique()
        .sorted()
        .collect()
}

/// How the article-count answer was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleCount {
    /// Blank input or an in-range number.
    Accepted(u8),
    /// Not a number; the default is used.
    Invalid,
    /// A number outside `[1, 10]`; the default is used.
    OutOfRange,
}

impl ArticleCount {
    /// Count to actually request.
    pub fn value(self) -> u8 {
        match self {
            ArticleCount::Accepted(n) => n,
            ArticleCount::Invalid | ArticleCount::OutOfRange => SearchQuery::DEFAULT_MAX_RESULTS,
        }
    }
}

/// Interpret the user's answer to the "how many articles" prompt.
///
/// Never rejects: bad input falls back to the default, and the caller decides
/// whether to warn.
pub fn parse_article_count(input: &str) -> ArticleCount {
    let input = input.trim();
    if input.is_empty() {
        return ArticleCount::Accepted(SearchQuery::DEFAULT_MAX_RESULTS);
    }
    match input.parse::<i64>() {
        Ok(n) if (i64::from(SearchQuery::MIN_RESULTS)..=i64::from(SearchQuery::MAX_RESULTS))
            .contains(&n) =>
        {
            ArticleCount::Accepted(n as u8)
        }
        Ok(_) => ArticleCount::OutOfRange,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            ArticleCount::OutOfRange
        }
        Err(_) => ArticleCount::Invalid,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with
/// `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
