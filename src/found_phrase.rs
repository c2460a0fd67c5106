//! The record produced for each standalone phrase occurrence.

use crate::error::{Error, Result};
use core::fmt;

/// A phrase found standing alone within some content.
///
/// `index_on` is a zero-based offset counted in `char`s (not bytes) into the content that was
/// actually scanned. If the matcher cleaned the content first, the offset refers to the cleaned
/// text.
///
/// `FoundPhrase`s order by offset first and phrase text second.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFoundPhrase"))]
pub struct FoundPhrase {
    // Field order matters for the derived `Ord`.
    #[cfg_attr(feature = "serde", serde(rename = "indexOn"))]
    index_on: usize,
    phrase: String,
}

impl FoundPhrase {
    /// Create a new `FoundPhrase`.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] if `phrase` is empty.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::FoundPhrase;
    ///
    /// let found = FoundPhrase::new("white", 43).unwrap();
    ///
    /// assert_eq!(found.phrase(), "white");
    /// assert_eq!(found.index_on(), 43);
    /// assert!(FoundPhrase::new("", 0).is_err());
    /// ```
    pub fn new<S>(phrase: S, index_on: usize) -> Result<Self>
    where
        S: Into<String>,
    {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return Err(Error::InvariantViolation {
                reason: "found phrase text must not be empty",
            });
        }
        Ok(Self { index_on, phrase })
    }

    /// The phrase as written in the phrase list that produced the match.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Offset, in `char`s, where the match begins.
    #[inline]
    pub fn index_on(&self) -> usize {
        self.index_on
    }

    /// Consume the record, returning its parts.
    #[inline]
    pub fn into_parts(self) -> (String, usize) {
        (self.phrase, self.index_on)
    }
}

impl fmt::Display for FoundPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" at {}", self.phrase, self.index_on)
    }
}

/// Unvalidated wire form, so deserialization goes through [`FoundPhrase::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFoundPhrase {
    phrase: String,
    #[serde(rename = "indexOn")]
    index_on: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFoundPhrase> for FoundPhrase {
    type Error = Error;

    fn try_from(raw: RawFoundPhrase) -> Result<Self> {
        Self::new(raw.phrase, raw.index_on)
    }
}
