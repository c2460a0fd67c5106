//! Error type returned by phrase matching and text cleaning.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by a [`PhraseMatcher`], by text cleaning, or by [`FoundPhrase`] construction.
///
/// A failed call never produces partial results.
///
/// [`PhraseMatcher`]: crate::PhraseMatcher
/// [`FoundPhrase`]: crate::FoundPhrase
#[derive(Debug, Error)]
pub enum Error {
    /// A required text argument was empty.
    #[error("`{argument}` must not be empty")]
    InvalidInput { argument: &'static str },

    /// Neither the matcher nor the caller provided any phrases.
    #[error(
        "Both the configured phrase list (matcher) and the phrase_list (argument) are missing or \
         empty. At least one phrase list must be supplied before phrases can be found within the \
         content."
    )]
    MissingConfiguration,

    /// A [`FoundPhrase`] was constructed from invalid parts.
    ///
    /// This indicates a bug in the matcher rather than a caller error.
    ///
    /// [`FoundPhrase`]: crate::FoundPhrase
    #[error("invariant violated: {reason}")]
    InvariantViolation { reason: &'static str },

    /// A cleaning pattern could not be compiled.
    #[error("invalid cleaning pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn missing_configuration_names_both_sources() {
        let message = Error::MissingConfiguration.to_string();

        assert!(message.contains("configured phrase list"));
        assert!(message.contains("phrase_list (argument)"));
        assert!(message.contains("At least one"));
    }

    #[test]
    fn invalid_input_names_argument() {
        assert_eq!(
            Error::InvalidInput {
                argument: "content"
            }
            .to_string(),
            "`content` must not be empty"
        );
    }
}
