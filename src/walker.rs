//! Walker for [`PhraseMatcher`] content scanning.
//!
//! A [`Walker`] steps through content looking for a single phrase. Each phrase gets its own
//! `Walker`, which allows every phrase to be scanned independently (and in parallel, if desired).
//!
//! Content and phrases are both handled as slices of `char`s, so every position here is a `char`
//! offset.
//!
//! [`PhraseMatcher`]: crate::PhraseMatcher

/// Case-insensitive comparison of two characters.
///
/// Characters compare equal if their lowercase mappings are identical. This is independent of
/// locale.
#[inline]
fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Whether the `len` characters starting at `start` stand alone within `content`.
///
/// A match stands alone if neither of its immediate neighbors is a letter or digit. A missing
/// neighbor (at the start or end of the content) counts as a boundary.
pub(crate) fn is_standalone(content: &[char], start: usize, len: usize) -> bool {
    let before = start.checked_sub(1).map(|i| content[i]);
    let after = content.get(start + len).copied();

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Letters and decimal digits. Other numeric characters, such as superscripts, are not part of a
/// word.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Iterates over the raw occurrences of a phrase within content.
///
/// Occurrences never overlap: after finding an occurrence, the `Walker` resumes at the character
/// immediately after its end.
#[derive(Clone, Debug)]
pub(crate) struct Walker<'a> {
    content: &'a [char],
    phrase: &'a [char],
    position: usize,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(content: &'a [char], phrase: &'a [char]) -> Self {
        Self {
            content,
            phrase,
            position: 0,
        }
    }

    /// Whether the phrase occurs at `start`.
    fn matches_at(&self, start: usize) -> bool {
        self.content[start..start + self.phrase.len()]
            .iter()
            .zip(self.phrase)
            .all(|(&a, &b)| chars_eq(a, b))
    }

    /// Restrict this walker to occurrences that stand alone.
    pub(crate) fn standalone(self) -> impl Iterator<Item = usize> + 'a {
        let content = self.content;
        let len = self.phrase.len();
        self.filter(move |&start| is_standalone(content, start, len))
    }
}

impl Iterator for Walker<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // An empty phrase would never advance.
        if self.phrase.is_empty() {
            return None;
        }

        while self.position + self.phrase.len() <= self.content.len() {
            let start = self.position;
            if self.matches_at(start) {
                self.position = start + self.phrase.len();
                return Some(start);
            }
            self.position += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::walker::{chars_eq, is_standalone, Walker};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn case_insensitive_chars() {
        assert!(chars_eq('a', 'A'));
        assert!(chars_eq('Ã', 'ã'));
        assert!(!chars_eq('a', 'b'));
    }

    #[test]
    fn occurrences() {
        let content = chars("ass glass Assistant");
        let phrase = chars("ass");

        assert_eq!(
            Walker::new(&content, &phrase).collect::<Vec<_>>(),
            vec![0, 6, 10]
        );
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let content = chars("aaaa");
        let phrase = chars("aa");

        assert_eq!(Walker::new(&content, &phrase).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn empty_phrase() {
        let content = chars("foo");

        assert_eq!(Walker::new(&content, &[]).next(), None);
    }

    #[test]
    fn phrase_longer_than_content() {
        let content = chars("fo");
        let phrase = chars("foo");

        assert_eq!(Walker::new(&content, &phrase).next(), None);
    }

    #[test]
    fn standalone_occurrences() {
        let content = chars("ass glass Assistant ass.");
        let phrase = chars("ass");

        assert_eq!(
            Walker::new(&content, &phrase).standalone().collect::<Vec<_>>(),
            vec![0, 20]
        );
    }

    #[test]
    fn standalone_whole_content() {
        assert!(is_standalone(&chars("white"), 0, 5));
    }

    #[test]
    fn standalone_punctuation_neighbors() {
        assert!(is_standalone(&chars("(white)"), 1, 5));
        assert!(is_standalone(&chars("-white_"), 1, 5));
    }

    #[test]
    fn not_standalone_digit_neighbor() {
        assert!(!is_standalone(&chars("2white"), 1, 5));
        assert!(!is_standalone(&chars("white2"), 0, 5));
    }

    #[test]
    fn standalone_superscript_neighbor() {
        assert!(is_standalone(&chars("white² ok"), 0, 5));
        assert!(is_standalone(&chars("½white"), 1, 5));
    }

    #[test]
    fn not_standalone_unicode_letter_neighbor() {
        assert!(!is_standalone(&chars("éwhite"), 1, 5));
    }

    #[test]
    fn multibyte_offsets_are_chars() {
        let content = chars("bãr foo");
        let phrase = chars("foo");

        assert_eq!(Walker::new(&content, &phrase).standalone().next(), Some(4));
    }
}
