use crate::{clean::DEFAULT_PATTERN, error::Result};
use regex::Regex;

/// Settings controlling how a [`PhraseMatcher`] scans content.
///
/// `Options` can be embedded in a host application's configuration; every field is optional when
/// deserializing.
///
/// [`PhraseMatcher`]: crate::PhraseMatcher
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Scan each phrase on the rayon thread pool.
    ///
    /// Results are identical to sequential scanning.
    pub parallel: bool,
    /// Clean content before scanning it.
    ///
    /// Reported offsets then refer to the cleaned content.
    pub clean_content: bool,
    /// Pattern used when `clean_content` is set.
    ///
    /// `None` uses [`DEFAULT_PATTERN`].
    pub cleaning_pattern: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_clean_content(mut self, clean_content: bool) -> Self {
        self.clean_content = clean_content;
        self
    }

    /// Set a custom cleaning pattern. This does not enable cleaning on its own.
    pub fn with_cleaning_pattern<S>(mut self, pattern: S) -> Self
    where
        S: Into<String>,
    {
        self.cleaning_pattern = Some(pattern.into());
        self
    }

    /// Check that the cleaning pattern compiles.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if it does not.
    ///
    /// [`Error::InvalidPattern`]: crate::Error::InvalidPattern
    pub fn validate(&self) -> Result<()> {
        self.cleaning_regex().map(|_| ())
    }

    pub(crate) fn cleaning_regex(&self) -> Result<Option<Regex>> {
        if !self.clean_content {
            return Ok(None);
        }
        let pattern = match self.cleaning_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => pattern,
            _ => DEFAULT_PATTERN,
        };
        Ok(Some(Regex::new(pattern)?))
    }
}
