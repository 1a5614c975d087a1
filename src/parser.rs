//! Parser trait for chat transcripts.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstat::parser::Parser;
//! use chatstat::parsers::TranscriptParser;
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//! let messages = parser.parse(Path::new("WhatsApp Chat with Alice.txt"))?;
//! println!("{} messages", messages.len());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::path::Path;

use crate::Message;
use crate::error::ChatstatError;

/// Trait for turning a transcript into records.
///
/// # Implementation Notes
///
/// Parsers must implement:
/// - [`name`](Parser::name) - Parser identifier
/// - [`parse_str`](Parser::parse_str) - Parse from a string
///
/// [`parse`](Parser::parse) reads the whole file as UTF-8 and delegates to
/// `parse_str`; the file handle is closed before parsing starts.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses transcript content from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::UnrecognizedFormat`] if the content does not
    /// follow the export convention.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>, ChatstatError>;

    /// Parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read, or any error
    /// of [`parse_str`](Parser::parse_str).
    fn parse(&self, path: &Path) -> Result<Vec<Message>, ChatstatError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a transcript file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Vec<Message>, ChatstatError> {
        self.parse(Path::new(path))
    }
}
