use crate::{error::Result, Options, PhraseMatcher};

/// A builder for a [`PhraseMatcher`].
///
/// # Example
/// ```
/// use phrase_filter::PhraseMatcherBuilder;
///
/// let matcher = PhraseMatcherBuilder::new()
///     .phrases(&["white", "racist"])
///     .parallel(true)
///     .build()
///     .unwrap();
///
/// assert!(matcher.check("a racist suburb").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PhraseMatcherBuilder {
    phrases: Vec<String>,
    options: Options,
}

impl PhraseMatcherBuilder {
    /// Creates a new builder with no phrases and default [`Options`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single phrase to the configured phrase list.
    #[inline]
    pub fn phrase<S>(mut self, phrase: S) -> Self
    where
        S: Into<String>,
    {
        self.phrases.push(phrase.into());
        self
    }

    /// Adds phrases to the configured phrase list.
    #[inline]
    pub fn phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.phrases
            .extend(phrases.into_iter().map(|phrase| phrase.as_ref().to_owned()));
        self
    }

    /// Replaces all options.
    #[inline]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets [`Options::parallel`].
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    /// Sets [`Options::clean_content`].
    #[inline]
    pub fn clean_content(mut self, clean_content: bool) -> Self {
        self.options.clean_content = clean_content;
        self
    }

    /// Sets [`Options::cleaning_pattern`] and enables content cleaning.
    #[inline]
    pub fn cleaning_pattern<S>(mut self, pattern: S) -> Self
    where
        S: Into<String>,
    {
        self.options.clean_content = true;
        self.options.cleaning_pattern = Some(pattern.into());
        self
    }

    /// Builds the [`PhraseMatcher`].
    ///
    /// An empty phrase list is allowed here; phrases must then be supplied on every call.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if a configured cleaning pattern does not compile.
    ///
    /// [`Error::InvalidPattern`]: crate::Error::InvalidPattern
    pub fn build(self) -> Result<PhraseMatcher> {
        let cleaning_regex = self.options.cleaning_regex()?;
        Ok(PhraseMatcher {
            phrases: self.phrases,
            options: self.options,
            cleaning_regex,
        })
    }
}
