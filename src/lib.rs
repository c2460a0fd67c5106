//! A phrase filter for finding disallowed phrases within text.
//!
//! A [`PhraseMatcher`] reports every place a phrase from its phrase list stands alone in some
//! content. A phrase stands alone when the characters directly before and after it (if any) are
//! not letters or digits, so `"ass"` is found in `"kick ass!"` but not in `"passport"`.
//!
//! Matching is case-insensitive. Offsets are reported in `char`s.
//!
//! # Example
//! ```
//! use phrase_filter::PhraseMatcher;
//!
//! let matcher = PhraseMatcher::with_phrases(&["white", "ass", "fuck"]);
//!
//! let found = matcher
//!     .find("I need white to travel overseas ass crapasshat")
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].phrase(), "white");
//! assert_eq!(found[0].index_on(), 7);
//! ```

pub mod clean;

mod builder;
mod error;
mod found_phrase;
mod options;
mod walker;

pub use builder::PhraseMatcherBuilder;
pub use error::{Error, Result};
pub use found_phrase::FoundPhrase;
pub use options::Options;

use hashbrown::HashSet;
use rayon::prelude::*;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, trace};
use walker::Walker;

/// A phrase prepared for scanning.
struct Phrase<'a> {
    text: &'a str,
    chars: Vec<char>,
}

/// Collect the distinct, non-empty phrases of `phrases`, in order.
///
/// Phrases differing only by case are the same phrase. The first spelling is kept. Case is folded
/// one `char` at a time, the same way the walker compares characters.
fn distinct_phrases<'a, I>(phrases: I) -> Vec<Phrase<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    phrases
        .into_iter()
        .filter(|text| !text.is_empty())
        .filter(|text| {
            seen.insert(
                text.chars()
                    .flat_map(char::to_lowercase)
                    .collect::<String>(),
            )
        })
        .map(|text| Phrase {
            text,
            chars: text.chars().collect(),
        })
        .collect()
}

/// Finds standalone occurrences of phrases within content.
///
/// A `PhraseMatcher` optionally holds a configured phrase list, used whenever a call does not
/// supply its own. It holds no other state; every call is independent, and a `PhraseMatcher` can
/// be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct PhraseMatcher {
    phrases: Vec<String>,
    options: Options,
    cleaning_regex: Option<Regex>,
}

impl PhraseMatcher {
    /// Create a matcher with no configured phrase list and default [`Options`].
    ///
    /// Phrases must be supplied to every call of [`find_phrases()`].
    ///
    /// [`find_phrases()`]: PhraseMatcher::find_phrases
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a configured phrase list and default [`Options`].
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().to_owned())
                .collect(),
            ..Self::default()
        }
    }

    /// The configured phrase list.
    #[inline]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The options this matcher scans with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Find all standalone occurrences of phrases within `content`.
    ///
    /// If `phrase_list` is `Some` and non-empty, it is used instead of the configured phrase list
    /// for this call. The lists are never merged.
    ///
    /// Returns `None` if no phrase was found. Otherwise, returns the found phrases sorted by
    /// offset, with phrases found at the same offset sorted by their text. Each occurrence is
    /// reported once, even if its phrase appears in the list multiple times.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if `content` is empty.
    /// - [`Error::MissingConfiguration`] if neither the configured phrase list nor `phrase_list`
    ///   contain any phrases.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseMatcher;
    ///
    /// let matcher = PhraseMatcher::new();
    ///
    /// let found = matcher
    ///     .find_phrases("a lot of White people", Some(&["white"][..]))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(found[0].index_on(), 9);
    ///
    /// assert_eq!(matcher.find_phrases("glass", Some(&["ass"][..])).unwrap(), None);
    /// ```
    pub fn find_phrases<S>(
        &self,
        content: &str,
        phrase_list: Option<&[S]>,
    ) -> Result<Option<Vec<FoundPhrase>>>
    where
        S: AsRef<str>,
    {
        if content.is_empty() {
            return Err(Error::InvalidInput {
                argument: "content",
            });
        }

        let phrases = match phrase_list {
            Some(list) if !list.is_empty() => {
                distinct_phrases(list.iter().map(|phrase| phrase.as_ref()))
            }
            _ if !self.phrases.is_empty() => {
                distinct_phrases(self.phrases.iter().map(String::as_str))
            }
            _ => return Err(Error::MissingConfiguration),
        };

        let content = match &self.cleaning_regex {
            Some(regex) => Cow::Owned(clean::clean_with_regex(content, regex)?),
            None => Cow::Borrowed(content),
        };
        let content = content.chars().collect::<Vec<_>>();

        debug!(
            phrases = phrases.len(),
            content_len = content.len(),
            parallel = self.options.parallel,
            "scanning content"
        );

        let mut found = if self.options.parallel {
            phrases
                .par_iter()
                .flat_map_iter(|phrase| Self::scan(&content, phrase))
                .collect::<Result<Vec<_>>>()?
        } else {
            phrases
                .iter()
                .flat_map(|phrase| Self::scan(&content, phrase))
                .collect::<Result<Vec<_>>>()?
        };
        found.sort_unstable();
        found.dedup();

        debug!(found = found.len(), "finished scanning content");

        Ok(if found.is_empty() { None } else { Some(found) })
    }

    /// Find all standalone occurrences of the configured phrases within `content`.
    ///
    /// This is equivalent to [`find_phrases()`] without a `phrase_list`.
    ///
    /// [`find_phrases()`]: PhraseMatcher::find_phrases
    #[inline]
    pub fn find(&self, content: &str) -> Result<Option<Vec<FoundPhrase>>> {
        self.find_phrases::<&str>(content, None)
    }

    /// Check whether `content` contains any of the configured phrases.
    ///
    /// # Example
    /// ```
    /// use phrase_filter::PhraseMatcher;
    ///
    /// let matcher = PhraseMatcher::with_phrases(&["ass"]);
    ///
    /// assert!(matcher.check("what an ass").unwrap());
    /// assert!(!matcher.check("assistant").unwrap());
    /// ```
    #[inline]
    pub fn check(&self, content: &str) -> Result<bool> {
        self.find(content).map(|found| found.is_some())
    }

    fn scan<'a>(
        content: &'a [char],
        phrase: &'a Phrase<'a>,
    ) -> impl Iterator<Item = Result<FoundPhrase>> + 'a {
        Walker::new(content, &phrase.chars)
            .standalone()
            .map(move |index_on| {
                trace!(phrase = phrase.text, index_on, "found phrase");
                FoundPhrase::new(phrase.text, index_on)
            })
    }
}

/// Extension trait for searching string slices with a [`PhraseMatcher`].
///
/// # Example
/// ```
/// use phrase_filter::{FindPhrases, PhraseMatcher};
///
/// let matcher = PhraseMatcher::with_phrases(&["racist"]);
///
/// assert!("a racist suburb".find_phrases(&matcher).unwrap().is_some());
/// ```
pub trait FindPhrases {
    /// See [`PhraseMatcher::find()`].
    fn find_phrases(&self, matcher: &PhraseMatcher) -> Result<Option<Vec<FoundPhrase>>>;
}

impl FindPhrases for str {
    #[inline]
    fn find_phrases(&self, matcher: &PhraseMatcher) -> Result<Option<Vec<FoundPhrase>>> {
        matcher.find(self)
    }
}
