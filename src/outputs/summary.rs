//! Plain-text rendering of articles and result headers.
//!
//! # Output Shape
//!
//! ```text
//! ================================================================================
//! 📰 TITLE: Chipmakers rally
//! 📅 PUBLISHED: 2025-05-06T14:30:00Z
//! 🏢 SOURCE: Reuters
//! ✍️  AUTHOR: Unknown
//!
//! 📝 DESCRIPTION:
//!    Shares rose sharply.
//!
//! 🔗 URL: https://example.com/a
//! ================================================================================
//! ```

use crate::models::{Article, SearchResult};
use crate::utils::get_article_sources;
use std::io::{self, Write};

/// Width of the `=` border and `-` separator lines.
pub const RULE_WIDTH: usize = 80;

const UNKNOWN_AUTHOR: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available.";

/// Write one article as a bordered block followed by a blank line.
pub fn display_article_summary<W: Write>(out: &mut W, article: &Article) -> io::Result<()> {
    let border = "=".repeat(RULE_WIDTH);
    writeln!(out, "{border}")?;
    writeln!(out, "📰 TITLE: {}", article.title)?;
    writeln!(out, "📅 PUBLISHED: {}", article.published_at)?;
    writeln!(out, "🏢 SOURCE: {}", article.source_name)?;
    writeln!(
        out,
        "✍️  AUTHOR: {}",
        article.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    )?;
    writeln!(out, "\n📝 DESCRIPTION:")?;
    writeln!(
        out,
        "   {}",
        article.description.as_deref().unwrap_or(NO_DESCRIPTION)
    )?;
    writeln!(out, "\n🔗 URL: {}", article.url)?;
    writeln!(out, "{border}")?;
    writeln!(out)
}

/// Summary lines shown above the article list.
pub fn display_result_header<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    let sources = get_article_sources(Some(result));
    writeln!(out, "\n📊 RESULTS:")?;
    writeln!(out, "   Total results available: {}", result.total_results)?;
    writeln!(out, "   Articles fetched: {}", result.articles.len())?;
    writeln!(out, "   Sources: {}", sources.join(", "))?;
    writeln!(out)
}

/// Header plus every article, numbered from 1 in fetched order.
pub fn display_results<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    display_result_header(out, result)?;
    for (i, article) in result.articles.iter().enumerate() {
        writeln!(out, "📄 ARTICLE #{}", i + 1)?;
        display_article_summary(out, article)?;
    }
    Ok(())
}
