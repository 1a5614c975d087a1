//! Emoji frequency.
//!
//! Classification is a capability passed in by the caller: anything
//! implementing [`EmojiClassifier`], including plain closures. The default
//! [`UnicodeEmoji`] looks code points up in the `emojis` table.

use crate::Message;
use crate::core::counter::{Frequency, rank_by_count};
use crate::core::filter::UserFilter;

const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Decides whether a single code point is an emoji.
pub trait EmojiClassifier {
    fn is_emoji(&self, ch: char) -> bool;
}

impl<F> EmojiClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_emoji(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Classifier backed by the Unicode emoji list shipped with the `emojis` crate.
///
/// Skin tone modifiers (U+1F3FB..=U+1F3FF) count as emoji on their own.
///
/// ```
/// use chatstat::core::emoji::{EmojiClassifier, UnicodeEmoji};
///
/// assert!(UnicodeEmoji.is_emoji('😂'));
/// assert!(!UnicodeEmoji.is_emoji('a'));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, ch: char) -> bool {
        if SKIN_TONES.contains(&ch) {
            return true;
        }
        let mut buf = [0u8; 4];
        emojis::get(ch.encode_utf8(&mut buf)).is_some()
    }
}

/// Every emoji code point in the selected bodies, most frequent first.
///
/// Multi-code-point sequences (flags, ZWJ families, skin tone variants) are
/// counted per component code point.
pub fn emoji_helper<C>(messages: &[Message], filter: &UserFilter, classifier: &C) -> Frequency
where
    C: EmojiClassifier + ?Sized,
{
    rank_by_count(
        filter
            .select(messages)
            .flat_map(|msg| msg.body().chars())
            .filter(|&ch| classifier.is_emoji(ch)),
    )
    .into_iter()
    .map(|(ch, count)| (ch.to_string(), count))
    .collect()
}
