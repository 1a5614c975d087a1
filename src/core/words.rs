//! Word frequency and word cloud input.
//!
//! Only participant messages are tokenized: notifications and the bare media
//! placeholder are skipped. Tokens are lowercased, split on whitespace and
//! checked against an optional [`StopWords`] list.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::Message;
use crate::core::counter::{Frequency, rank_by_count};
use crate::core::filter::UserFilter;

/// Tokens excluded from word statistics.
///
/// # Example
///
/// ```
/// use chatstat::core::words::StopWords;
///
/// let stop = StopWords::from_text("the a\nan\n");
/// assert!(stop.contains("an"));
/// assert!(!stop.contains("cat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace or newline separated tokens.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Reads a stop-word file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read.
    pub fn try_load(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Reads a stop-word file, falling back to an empty list.
    ///
    /// A missing or unreadable file is logged and never fails the analysis.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(words) => {
                debug!(path = %path.display(), count = words.len(), "loaded stop words");
                words
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "stop-word list unavailable, proceeding without stop words"
                );
                Self::new()
            }
        }
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Lowercased, stop-word-free tokens of the selected participant messages.
fn tokens<'a>(
    messages: &'a [Message],
    filter: &'a UserFilter,
    stop_words: &'a StopWords,
    media_placeholder: &'a str,
) -> impl Iterator<Item = String> + 'a {
    filter
        .select(messages)
        .filter(move |msg| !msg.is_notification() && msg.body() != media_placeholder)
        .flat_map(|msg| {
            msg.body()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

/// The `top_n` most frequent tokens, most frequent first.
pub fn most_common_words(
    messages: &[Message],
    filter: &UserFilter,
    stop_words: &StopWords,
    media_placeholder: &str,
    top_n: usize,
) -> Frequency {
    let mut ranked = rank_by_count(tokens(messages, filter, stop_words, media_placeholder));
    ranked.truncate(top_n);
    ranked
}

/// All remaining tokens joined by single spaces, for word cloud rendering.
pub fn word_cloud_text(
    messages: &[Message],
    filter: &UserFilter,
    stop_words: &StopWords,
    media_placeholder: &str,
) -> String {
    let text = tokens(messages, filter, stop_words, media_placeholder)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        debug!(%filter, "no words left for the word cloud");
    }
    text
}
