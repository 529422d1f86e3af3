//! Split identifiers into words by casing, digit and separator transitions.
//!
//! The breaker is the entry point for everything the naming engine does with text: candidate
//! names are built from a type name's words, and compliance checks re-render a declared name
//! from its words.
//!
//! ## Notes
//! - Splits happen at lower-to-upper transitions (`myClass`), letter/digit transitions
//!   (`Vector3`), non-alphanumeric separators (`my_class`), and at the end of an upper-case run
//!   that is followed by a lower-case letter: the run minus its last letter is an acronym word
//!   and the last letter starts the next word (`IOStream` is `IO` + `Stream`).
//! - Words borrow from the input. Only transforms (pluralization, casing) allocate.
//! - Rejoining the words of a separator-free name reconstructs it exactly.
//!
//! ## Examples
//! ```rust
//! use namewright_core::words::WordBreaker;
//!
//! let words: Vec<_> = WordBreaker::new("IOStreamReader").iter().map(|w| w.to_string()).collect();
//! assert_eq!(words, ["IO", "Stream", "Reader"]);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A single word of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word<'a> {
    text: Cow<'a, str>,
    acronym: bool,
}

impl<'a> Word<'a> {
    /// Build a word, classifying it as an acronym when it has more than one character and every
    /// letter is upper-case.
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        let acronym = is_acronym(&text);
        Self { text, acronym }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_acronym(&self) -> bool {
        self.acronym
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Same classification, different spelling (an inflected form of this word).
    pub(crate) fn with_text(&self, text: impl Into<Cow<'a, str>>) -> Word<'a> {
        Word {
            text: text.into(),
            acronym: self.acronym,
        }
    }

    /// Detach the word from the input it was borrowed from.
    pub fn into_owned(self) -> Word<'static> {
        Word {
            text: Cow::Owned(self.text.into_owned()),
            acronym: self.acronym,
        }
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word<'_> {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

fn is_acronym(text: &str) -> bool {
    let mut letters = 0usize;
    for c in text.chars() {
        if c.is_alphabetic() {
            if !c.is_uppercase() {
                return false;
            }
            letters += 1;
        }
    }
    letters > 0 && text.chars().count() > 1
}

/// Restartable word source over a borrowed name.
///
/// ## Notes
/// - Call [`WordBreaker::iter`] as many times as needed; each call starts from the beginning.
#[derive(Debug, Clone, Copy)]
pub struct WordBreaker<'a> {
    name: &'a str,
}

impl<'a> WordBreaker<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Lazily produce the words of the name.
    pub fn iter(&self) -> Words<'a> {
        Words {
            name: self.name,
            pos: 0,
        }
    }

    /// Collect every word.
    pub fn words(&self) -> Vec<Word<'a>> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for WordBreaker<'a> {
    type Item = Word<'a>;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &WordBreaker<'a> {
    type Item = Word<'a>;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.iter()
    }
}

/// Iterator over the words of a name. See [`WordBreaker`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    name: &'a str,
    pos: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

fn classify(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_alphabetic() {
        CharClass::Lower
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Separator
    }
}

impl<'a> Words<'a> {
    /// Byte offset just past the run of `class` characters starting at `from`.
    fn run_end(&self, from: usize, class: CharClass) -> usize {
        self.name[from..]
            .char_indices()
            .find(|&(_, c)| classify(c) != class)
            .map_or(self.name.len(), |(i, _)| from + i)
    }

    fn word_end(&self, start: usize, first: char) -> usize {
        match classify(first) {
            CharClass::Digit => self.run_end(start, CharClass::Digit),
            CharClass::Lower => self.run_end(start, CharClass::Lower),
            CharClass::Upper => {
                let upper_end = self.run_end(start, CharClass::Upper);
                let after_first = start + first.len_utf8();
                if upper_end == after_first {
                    // `Stream`: one capital, then its lower-case tail.
                    return self.run_end(after_first, CharClass::Lower);
                }
                let next_is_lower = self.name[upper_end..]
                    .chars()
                    .next()
                    .is_some_and(|c| classify(c) == CharClass::Lower);
                if next_is_lower {
                    // `IOStream`: the last capital belongs to the next word.
                    self.name[..upper_end]
                        .char_indices()
                        .next_back()
                        .map_or(upper_end, |(i, _)| i)
                } else {
                    upper_end
                }
            }
            CharClass::Separator => start + first.len_utf8(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        let rest = &self.name[self.pos..];
        let (offset, first) = rest.char_indices().find(|&(_, c)| classify(c) != CharClass::Separator)?;
        let start = self.pos + offset;
        let end = self.word_end(start, first);
        self.pos = end;
        Some(Word::new(&self.name[start..end]))
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Contiguous sub-sequences of `words`, longest first.
///
/// ## Returns
/// - The full sequence, then for each length from `n - 1` down to `1` the prefix of that length
///   followed by the suffix of that length. An empty input yields nothing.
///
/// ## Examples
/// ```rust
/// use namewright_core::words::{word_groupings, WordBreaker};
///
/// let words = WordBreaker::new("MyClassName").words();
/// let rendered: Vec<String> = word_groupings(&words)
///     .iter()
///     .map(|g| g.iter().map(|w| w.as_str()).collect())
///     .collect();
/// assert_eq!(rendered, ["MyClassName", "MyClass", "ClassName", "My", "Name"]);
/// ```
pub fn word_groupings<'w, 'a>(words: &'w [Word<'a>]) -> Vec<&'w [Word<'a>]> {
    let n = words.len();
    if n == 0 {
        return Vec::new();
    }
    let mut groups = Vec::with_capacity(2 * n - 1);
    groups.push(words);
    for len in (1..n).rev() {
        groups.push(&words[..len]);
        groups.push(&words[n - len..]);
    }
    groups
}
