//! WhatsApp TXT transcript parser.
//!
//! Exports put every entry behind a `dd/mm/yyyy, h:mm am - ` prefix. The
//! parser splits on that prefix, picks one date format variant for the whole
//! file and separates sender from body.
//!
//! Supported timestamp variants:
//! - `02/03/2025, 9:30\u{202f}am - Sender: Message`
//! - `02/03/2025, 9:30 am - Sender: Message`
//! - `02/03/2025, 21:30 - Sender: Message`

use tracing::{debug, warn};

use crate::Message;
use crate::config::TranscriptConfig;
use crate::error::{ChatstatError, FormatFailure};
use crate::parser::Parser;
use crate::parsing::{DateFormat, detect_date_format, split_entries, split_sender};

/// Parser for WhatsApp TXT transcripts.
///
/// # Example
///
/// ```rust
/// use chatstat::parser::Parser;
/// use chatstat::parsers::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let messages = parser.parse_str(
///     "01/01/2024, 10:00 am - Alice: hello world\n01/01/2024, 10:05 am - Bob: <Media omitted>\n",
/// )?;
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].sender(), "Alice");
/// assert_eq!(messages[1].body(), "<Media omitted>");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

/// Records together with the date format variant that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub messages: Vec<Message>,
    pub date_format: DateFormat,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Parses `content` and reports which date format variant was used.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::UnrecognizedFormat`] when no entry prefix is
    /// found or no variant parses every timestamp.
    pub fn parse_detailed(&self, content: &str) -> Result<ParsedTranscript, ChatstatError> {
        // Step 1: Split on timestamp prefixes
        let entries = split_entries(content);
        if entries.is_empty() {
            warn!("no timestamped entries found in transcript");
            return Err(ChatstatError::unrecognized_format(
                FormatFailure::NoTimestamps,
            ));
        }

        // Step 2: One date format for the whole batch
        let (date_format, timestamps) =
            detect_date_format(&entries.stamps, &self.config.date_formats).ok_or_else(|| {
                warn!(
                    entries = entries.len(),
                    "timestamps match none of the known date formats"
                );
                ChatstatError::unrecognized_format(FormatFailure::NoMatchingDateFormat)
            })?;
        debug!(%date_format, entries = entries.len(), "detected date format");

        // Step 3: Sender/body split; zip stops at the shorter side
        let messages: Vec<Message> = timestamps
            .into_iter()
            .zip(&entries.bodies)
            .map(|(timestamp, body)| {
                let split = split_sender(body, &self.config.security_preamble);
                Message::new(timestamp, split.sender, split.body)
            })
            .filter(|msg| !(self.config.skip_notifications && msg.is_notification()))
            .collect();

        debug!(records = messages.len(), "parsed transcript");
        Ok(ParsedTranscript {
            messages,
            date_format,
        })
    }
}

impl Parser for TranscriptParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>, ChatstatError> {
        self.parse_detailed(content).map(|parsed| parsed.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{GROUP_NOTIFICATION, SYSTEM_NOTIFICATION};
    use chrono::NaiveDate;

    const SAMPLE: &str = "01/01/2024, 10:00 am - Alice: hello world\n\
                          01/01/2024, 10:05 am - Bob: <Media omitted>\n";

    #[test]
    fn test_parser_name() {
        let parser = TranscriptParser::new();
        assert_eq!(Parser::name(&parser), "WhatsApp");
    }

    #[test]
    fn test_parse_sample() {
        let parsed = TranscriptParser::new().parse_detailed(SAMPLE).unwrap();
        assert_eq!(parsed.date_format, DateFormat::TwelveHourSpace);
        assert_eq!(parsed.messages.len(), 2);

        let first = &parsed.messages[0];
        assert_eq!(first.sender(), "Alice");
        assert_eq!(first.body(), "hello world");
        assert_eq!(
            first.timestamp(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert_eq!(first.period(), "10-11");
    }

    #[test]
    fn test_parse_narrow_space_export() {
        let text = "02/03/2025, 9:30\u{202f}am - Alice: Hi\n02/03/2025, 11:45\u{202f}pm - Bob: Night\n";
        let parsed = TranscriptParser::new().parse_detailed(text).unwrap();
        assert_eq!(parsed.date_format, DateFormat::TwelveHourNarrow);
        assert_eq!(parsed.messages[1].hour(), 23);
        assert_eq!(parsed.messages[1].period(), "23-00");
    }

    #[test]
    fn test_parse_24h_export() {
        let text = "15/01/2024, 00:10 - Alice: late\n15/01/2024, 18:00 - Bob: early\n";
        let parsed = TranscriptParser::new().parse_detailed(text).unwrap();
        assert_eq!(parsed.date_format, DateFormat::TwentyFourHour);
        assert_eq!(parsed.messages[0].period(), "00-01");
    }

    #[test]
    fn test_notifications_are_classified() {
        let text = "01/01/2024, 9:00 am - This business uses a secure service from Meta to manage this chat.\n\
                    01/01/2024, 9:01 am - Alice created group \"Trip\"\n\
                    01/01/2024, 9:02 am - Alice: hi all\n";
        let messages = TranscriptParser::new().parse_str(text).unwrap();
        assert_eq!(messages[0].sender(), SYSTEM_NOTIFICATION);
        assert_eq!(messages[1].sender(), GROUP_NOTIFICATION);
        assert_eq!(messages[1].body(), "Alice created group \"Trip\"");
        assert_eq!(messages[2].sender(), "Alice");
    }

    #[test]
    fn test_skip_notifications() {
        let text = "01/01/2024, 9:01 am - Alice added Bob\n01/01/2024, 9:02 am - Alice: hi\n";
        let parser =
            TranscriptParser::with_config(TranscriptConfig::new().with_skip_notifications(true));
        let messages = parser.parse_str(text).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "Alice");
    }

    #[test]
    fn test_no_timestamps_is_format_failure() {
        let err = TranscriptParser::new()
            .parse_str("Alice joined using this group's invite link")
            .unwrap_err();
        assert!(matches!(
            err,
            ChatstatError::UnrecognizedFormat {
                reason: FormatFailure::NoTimestamps
            }
        ));
    }

    #[test]
    fn test_unparseable_dates_is_format_failure() {
        let err = TranscriptParser::new()
            .parse_str("31/02/2024, 10:00 am - Alice: impossible date\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ChatstatError::UnrecognizedFormat {
                reason: FormatFailure::NoMatchingDateFormat
            }
        ));
    }

    #[test]
    fn test_restricted_date_formats() {
        let config = TranscriptConfig::new().with_date_formats(vec![DateFormat::TwentyFourHour]);
        let err = TranscriptParser::with_config(config)
            .parse_str(SAMPLE)
            .unwrap_err();
        assert!(err.is_format_failure());
    }

    #[test]
    fn test_out_of_order_entries_keep_transcript_order() {
        let text = "02/01/2024, 10:00 am - Alice: later\n01/01/2024, 10:00 am - Bob: earlier\n";
        let messages = TranscriptParser::new().parse_str(text).unwrap();
        assert_eq!(messages[0].body(), "later");
        assert_eq!(messages[1].body(), "earlier");
    }
}
