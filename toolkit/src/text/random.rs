//! Random string generation
//!
//! A [`RandomTextBuilder`] holds the shape of the requested string (length
//! plus alphabet) and generates against any [`RandomSource`], so the same
//! builder can produce throwaway strings from system entropy or
//! reproducible ones from a seeded source.
//!
//! The alphabet comes either from an explicit string or from a
//! [`CharacterClassSet`]; the default set enables all three classes.
//!
//! # Example
//! ```
//! use actionkit_core::{RandomTextBuilder, SeededSource};
//!
//! let builder = RandomTextBuilder::new(8);
//! let text = builder.generate(&mut SeededSource::from_text("demo"));
//! assert_eq!(text.chars().count(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

/// A class of characters the generated string may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
}

impl CharacterClass {
    /// The characters belonging to this class, in canonical order.
    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => "0123456789",
        }
    }
}

/// An order-independent set of [`CharacterClass`] members.
///
/// The concrete alphabet is the concatenation of the member classes'
/// alphabets in declaration order (lowercase, uppercase, digits), so two
/// sets with the same members always produce the same alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
}

impl CharacterClassSet {
    /// The set containing all three classes.
    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
        }
    }

    /// The empty set. Unusable as an alphabet on its own.
    pub const fn empty() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
        }
    }

    /// Whether no class is enabled.
    pub const fn is_empty(self) -> bool {
        !self.lowercase && !self.uppercase && !self.digits
    }

    /// The concrete alphabet for this set.
    ///
    /// # Example
    /// ```
    /// use actionkit_core::CharacterClassSet;
    ///
    /// let digits_only = CharacterClassSet {
    ///     lowercase: false,
    ///     uppercase: false,
    ///     digits: true,
    /// };
    /// assert_eq!(digits_only.alphabet(), "0123456789");
    /// ```
    pub fn alphabet(self) -> String {
        let mut alphabet = String::new();
        if self.lowercase {
            alphabet.push_str(CharacterClass::Lowercase.alphabet());
        }
        if self.uppercase {
            alphabet.push_str(CharacterClass::Uppercase.alphabet());
        }
        if self.digits {
            alphabet.push_str(CharacterClass::Digits.alphabet());
        }
        alphabet
    }
}

impl Default for CharacterClassSet {
    /// Defaults to all three classes enabled.
    fn default() -> Self {
        Self::all()
    }
}

/// Alphabet specification: character classes or an explicit string.
#[derive(Debug, Clone)]
enum AlphabetSpec {
    Classes(CharacterClassSet),
    Explicit(String),
}

/// Configures and generates random strings.
///
/// Each output character is drawn independently and uniformly (with
/// replacement) from the configured alphabet.
///
/// # Example
/// ```
/// use actionkit_core::{RandomTextBuilder, SeededSource};
///
/// let builder = RandomTextBuilder::new(6).with_alphabet("acgt");
/// let mut source = SeededSource::from_text("sequence");
/// let text = builder.generate(&mut source);
///
/// assert_eq!(text.len(), 6);
/// assert!(text.chars().all(|c| "acgt".contains(c)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomTextBuilder {
    length: usize,
    alphabet: AlphabetSpec,
}

impl RandomTextBuilder {
    /// Create a builder for strings of `length` characters drawn from the
    /// default class set (lowercase, uppercase, digits).
    pub fn new(length: usize) -> Self {
        Self {
            length,
            alphabet: AlphabetSpec::Classes(CharacterClassSet::all()),
        }
    }

    /// Draw from an explicit alphabet instead of character classes.
    ///
    /// The alphabet must be non-empty by the time [`generate`] is called;
    /// repeated characters weight the draw accordingly.
    ///
    /// [`generate`]: RandomTextBuilder::generate
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = AlphabetSpec::Explicit(alphabet.into());
        self
    }

    /// Draw from the given character-class set.
    pub fn with_classes(mut self, classes: CharacterClassSet) -> Self {
        self.alphabet = AlphabetSpec::Classes(classes);
        self
    }

    /// Generate one string from the given source.
    ///
    /// A length of zero yields the empty string.
    ///
    /// # Panics
    /// Panics if the configured alphabet is empty (explicit empty string or
    /// empty class set). An empty alphabet is a programmer error, not a
    /// recoverable condition.
    pub fn generate<R>(&self, source: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let alphabet: Vec<char> = match &self.alphabet {
            AlphabetSpec::Classes(set) => set.alphabet().chars().collect(),
            AlphabetSpec::Explicit(custom) => custom.chars().collect(),
        };
        assert!(!alphabet.is_empty(), "alphabet must not be empty");

        (0..self.length)
            .map(|_| alphabet[source.next_below(alphabet.len() as u64) as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededSource;

    #[test]
    fn test_class_alphabets() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
    }

    #[test]
    fn test_set_alphabet_concatenates_in_declaration_order() {
        let set = CharacterClassSet::all();
        let alphabet = set.alphabet();

        assert_eq!(alphabet.len(), 62);
        assert!(alphabet.starts_with('a'));
        assert!(alphabet.ends_with('9'));
        assert_eq!(&alphabet[26..28], "AB");
    }

    #[test]
    fn test_default_set_is_all() {
        assert_eq!(CharacterClassSet::default(), CharacterClassSet::all());
    }

    #[test]
    fn test_empty_set_reports_empty() {
        assert!(CharacterClassSet::empty().is_empty());
        assert!(!CharacterClassSet::all().is_empty());
        assert_eq!(CharacterClassSet::empty().alphabet(), "");
    }

    #[test]
    #[should_panic(expected = "alphabet must not be empty")]
    fn test_generate_empty_explicit_alphabet_panics() {
        let builder = RandomTextBuilder::new(4).with_alphabet("");
        builder.generate(&mut SeededSource::new(1));
    }

    #[test]
    #[should_panic(expected = "alphabet must not be empty")]
    fn test_generate_empty_class_set_panics() {
        let builder = RandomTextBuilder::new(4).with_classes(CharacterClassSet::empty());
        builder.generate(&mut SeededSource::new(1));
    }

    #[test]
    fn test_zero_length_yields_empty_string() {
        let builder = RandomTextBuilder::new(0);
        assert_eq!(builder.generate(&mut SeededSource::new(42)), "");
    }

    #[test]
    fn test_multibyte_alphabet_counts_chars_not_bytes() {
        let builder = RandomTextBuilder::new(5).with_alphabet("åß∂");
        let text = builder.generate(&mut SeededSource::new(9));

        assert_eq!(text.chars().count(), 5);
        assert!(text.chars().all(|c| "åß∂".contains(c)));
    }
}
