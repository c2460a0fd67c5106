//! Text cleaning applied to content before it is scanned.
//!
//! Cleaning removes every character matched by a pattern. The default pattern, [`DEFAULT_PATTERN`],
//! removes everything except word characters, spaces, `.`, `@`, and `-`. The characters that remain
//! keep their relative order.
//!
//! # Examples
//! ```
//! use phrase_filter::clean::Clean;
//!
//! assert_eq!("hello, (world)!".clean().unwrap(), "hello world");
//! assert_eq!("a+b=c".clean_with("[+=]").unwrap(), "abc");
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Matches every character outside of word characters, space, `.`, `@`, and `-`.
pub const DEFAULT_PATTERN: &str = r"[^\w .@-]";

fn default_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DEFAULT_PATTERN).expect("default pattern is valid"))
}

/// Remove all characters matched by [`DEFAULT_PATTERN`].
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `text` is empty.
pub fn clean(text: &str) -> Result<String> {
    clean_with_regex(text, default_regex())
}

/// Remove all characters matched by `pattern`.
///
/// An empty `pattern` falls back to [`DEFAULT_PATTERN`].
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `text` is empty, or [`Error::InvalidPattern`] if `pattern`
/// does not compile.
pub fn clean_with(text: &str, pattern: &str) -> Result<String> {
    if pattern.is_empty() {
        return clean(text);
    }
    clean_with_regex(text, &Regex::new(pattern)?)
}

pub(crate) fn clean_with_regex(text: &str, regex: &Regex) -> Result<String> {
    if text.is_empty() {
        return Err(Error::InvalidInput { argument: "text" });
    }
    Ok(regex.replace_all(text, "").into_owned())
}

/// Extension trait for cleaning string slices in place of calling [`clean`] directly.
pub trait Clean {
    /// See [`clean`].
    fn clean(&self) -> Result<String>;

    /// See [`clean_with`].
    fn clean_with(&self, pattern: &str) -> Result<String>;
}

impl Clean for str {
    #[inline]
    fn clean(&self) -> Result<String> {
        clean(self)
    }

    #[inline]
    fn clean_with(&self, pattern: &str) -> Result<String> {
        clean_with(self, pattern)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        clean::{clean, clean_with, Clean},
        Error,
    };

    #[test]
    fn removes_punctuation() {
        assert_eq!(
            clean("This doesn't mean this is a racist suburb, though.").unwrap(),
            "This doesnt mean this is a racist suburb though."
        );
    }

    #[test]
    fn keeps_allowed_characters() {
        assert_eq!(
            clean("user@example.com is well-known_ 42").unwrap(),
            "user@example.com is well-known_ 42"
        );
    }

    #[test]
    fn removes_control_characters() {
        assert_eq!(clean("foo\tbar\nbaz\u{0}").unwrap(), "foobarbaz");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(clean("bãr!").unwrap(), "bãr");
    }

    #[test]
    fn empty_text() {
        assert!(matches!(clean(""), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn everything_removed() {
        assert_eq!(clean("&^*(").unwrap(), "");
    }

    #[test]
    fn custom_pattern() {
        assert_eq!(clean_with("a1b2c3", r"\d").unwrap(), "abc");
    }

    #[test]
    fn empty_pattern_uses_default() {
        assert_eq!(clean_with("foo!", "").unwrap(), "foo");
    }

    #[test]
    fn invalid_pattern() {
        assert!(matches!(
            clean_with("foo", "[unclosed"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn extension_trait() {
        assert_eq!("(*&(&97s".clean().unwrap(), "97s");
        assert_eq!("foo-bar".clean_with("-").unwrap(), "foobar");
    }
}
