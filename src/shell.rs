//! Interactive search loop.
//!
//! Each turn asks for a topic and an article count, runs one search through a
//! [`NewsSource`] and prints the results. The loop ends on `quit`, `exit` or
//! `q` (any case) or when input reaches EOF.

use crate::api::{NewsSource, fetch_news};
use crate::error::Result;
use crate::models::{SearchQuery, SearchResult};
use crate::outputs::summary::{RULE_WIDTH, display_results};
use crate::utils::{ArticleCount, parse_article_count};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

const EXAMPLE_TOPICS: [&str; 4] = [
    "climate change",
    "artificial intelligence",
    "cricket",
    "electric vehicles",
];

/// True when the input asks to leave the shell.
pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    QUIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Prompt-driven search session over arbitrary input and output streams.
pub struct Shell<'a, S, R, W> {
    source: &'a S,
    input: R,
    out: W,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: NewsSource,
    R: BufRead,
    W: Write,
{
    pub fn new(source: &'a S, input: R, out: W) -> Self {
        Self { source, input, out }
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Only console I/O failures end the loop with an error; search failures
    /// are reported inline and the loop continues.
    #[instrument(level = "info", skip_all)]
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner()?;
        let mut turns = 0usize;

        loop {
            let Some(topic) = self.prompt("🔍 Enter topic (or 'quit'): ")? else {
                debug!("Input closed");
                break;
            };
            if is_quit_command(&topic) {
                break;
            }
            if topic.is_empty() {
                writeln!(self.out, "⚠️  Please enter a topic!\n")?;
                continue;
            }

            let answer = self
                .prompt("📊 How many articles? (1-10, default 5): ")?
                .unwrap_or_default();
            let count = parse_article_count(&answer);
            match count {
                ArticleCount::Invalid => writeln!(self.out, "⚠️  Invalid number. Using 5.")?,
                ArticleCount::OutOfRange => writeln!(
                    self.out,
                    "⚠️  Number must be between 1 and 10. Using 5."
                )?,
                ArticleCount::Accepted(_) => {}
            }

            let query = SearchQuery::new(topic, count.value());
            let result = fetch_news(self.source, &query, &mut self.out).await?;
            turns += 1;
            self.show(result.as_ref())?;

            writeln!(self.out, "\n{}\n", "-".repeat(RULE_WIDTH))?;
        }

        info!(turns, "Shell finished");
        writeln!(self.out, "\n👋 Goodbye! Happy reading!")?;
        self.out.flush()?;
        Ok(())
    }

    fn show(&mut self, result: Option<&SearchResult>) -> Result<()> {
        match result {
            Some(result) if !result.is_empty() => display_results(&mut self.out, result)?,
            _ => writeln!(self.out, "❌ No articles found or error occurred.\n")?,
        }
        Ok(())
    }

    /// Print `label`, read one line. `None` on EOF.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "🎯 INTERACTIVE NEWS SEARCHER")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "\nType a topic to search for news, or 'quit' to exit.")?;
        writeln!(self.out, "\n💡 Try these examples:")?;
        for topic in EXAMPLE_TOPICS {
            writeln!(self.out, "   - '{topic}'")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
