//! Naming styles: how a sequence of words becomes an identifier, and the inverse check.
//!
//! A [`NamingStyle`] renders `prefix + join(cased words, separator) + suffix`. The casing applied
//! to each word depends on its position and the style's [`Capitalization`]:
//!
//! | Scheme | First word | Other words |
//! | --- | --- | --- |
//! | `PascalCase` | first letter upper | first letter upper |
//! | `CamelCase` | first letter lower (whole word if an acronym) | first letter upper |
//! | `FirstWordUpper` | first letter upper, rest lower | all lower |
//! | `AllUpper` | all upper | all upper |
//! | `AllLower` | all lower | all lower |
//!
//! ## Examples
//! ```rust
//! use namewright::naming::NamingStyle;
//! use namewright_core::lang::capitalization::Capitalization;
//! use namewright_core::WordBreaker;
//!
//! let style = NamingStyle::new("private fields", Capitalization::CamelCase).with_prefix("_");
//! assert_eq!(style.render(&WordBreaker::new("IOStream").words()), "_ioStream");
//! assert!(style.is_compliant("_ioStream"));
//! assert!(!style.is_compliant("ioStream"));
//! assert_eq!(style.make_compliant("m_ioStream"), ["_mIoStream", "_ioStream"]);
//! ```

use namewright_core::lang::capitalization::Capitalization;
use namewright_core::lang::keywords;
use namewright_core::{Word, WordBreaker};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A capitalization scheme plus required affixes and word separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingStyle {
    pub id: Uuid,
    pub name: String,
    pub capitalization: Capitalization,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub word_separator: String,
}

impl NamingStyle {
    /// Create a style with a fresh id and no affixes or separator.
    pub fn new(name: impl Into<String>, capitalization: Capitalization) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            capitalization,
            prefix: String::new(),
            suffix: String::new(),
            word_separator: String::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    /// Render words into an identifier, affixes included.
    pub fn render(&self, words: &[Word<'_>]) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 8 * words.len());
        out.push_str(&self.prefix);
        self.push_words(&mut out, words);
        out.push_str(&self.suffix);
        out
    }

    fn push_words(&self, out: &mut String, words: &[Word<'_>]) {
        for (index, word) in words.iter().enumerate() {
            if index > 0 {
                out.push_str(&self.word_separator);
            }
            case_word(out, self.capitalization, word, index);
        }
    }

    /// Check whether `name` already follows this style.
    ///
    /// ## Notes
    /// - The name must carry the prefix and suffix around a non-empty middle. The middle is split by
    ///   the word separator (or word-broken when there is none), re-rendered, and compared.
    /// - A leading verbatim prefix (`@class`) is ignored.
    pub fn is_compliant(&self, name: &str) -> bool {
        let name = keywords::unescape_identifier(name);
        let Some(middle) = name
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
        else {
            return false;
        };
        if middle.is_empty() {
            return false;
        }

        let words: Vec<Word<'_>> = if self.word_separator.is_empty() {
            WordBreaker::new(middle).words()
        } else {
            middle.split(self.word_separator.as_str()).map(Word::new).collect()
        };
        if words.iter().any(Word::is_empty) {
            return false;
        }

        let mut rendered = String::with_capacity(middle.len());
        self.push_words(&mut rendered, &words);
        rendered == middle
    }

    /// Produce compliant renderings of a (possibly non-compliant) name.
    ///
    /// ## Returns
    /// - The re-rendered name first. When the name starts with a one-letter marker word
    ///   (`m_count`, `s_cache`), the rendering without the marker follows.
    /// - An empty list when the name has no words at all.
    pub fn make_compliant(&self, name: &str) -> Vec<String> {
        let mut core = keywords::unescape_identifier(name);
        if !self.prefix.is_empty() {
            core = core.strip_prefix(self.prefix.as_str()).unwrap_or(core);
        }
        if !self.suffix.is_empty() {
            core = core.strip_suffix(self.suffix.as_str()).unwrap_or(core);
        }

        let words = WordBreaker::new(core).words();
        if words.is_empty() {
            return Vec::new();
        }

        let mut renderings = vec![self.render(&words)];
        if words.len() > 1 && starts_with_marker(core) {
            let without_marker = self.render(&words[1..]);
            if !renderings.contains(&without_marker) {
                renderings.push(without_marker);
            }
        }
        renderings
    }
}

/// `m_`, `s_`, `t_`, ...: one letter followed by a separator.
fn starts_with_marker(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(marker), Some(sep)) if marker.is_alphabetic() && !sep.is_alphanumeric()
    )
}

fn case_word(out: &mut String, capitalization: Capitalization, word: &Word<'_>, index: usize) {
    let text = word.as_str();
    match capitalization {
        Capitalization::PascalCase => push_first_upper(out, text),
        Capitalization::CamelCase if index == 0 => {
            if word.is_acronym() {
                out.push_str(&text.to_lowercase());
            } else {
                push_first_lower(out, text);
            }
        }
        Capitalization::CamelCase => push_first_upper(out, text),
        Capitalization::FirstWordUpper if index == 0 => {
            let mut chars = text.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
        Capitalization::FirstWordUpper | Capitalization::AllLower => out.push_str(&text.to_lowercase()),
        Capitalization::AllUpper => out.push_str(&text.to_uppercase()),
    }
}

fn push_first_upper(out: &mut String, text: &str) {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn push_first_lower(out: &mut String, text: &str) {
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
        out.push_str(chars.as_str());
    }
}
