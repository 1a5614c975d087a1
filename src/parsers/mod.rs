//! Transcript parsers.
//!
//! - [`TranscriptParser`] - Parses WhatsApp TXT exports
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::Parser;
//! use chatstat::parsers::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! assert_eq!(parser.name(), "WhatsApp");
//! // let messages = parser.parse_file("chat.txt")?;
//! ```

mod transcript;

pub use transcript::{ParsedTranscript, TranscriptParser};
