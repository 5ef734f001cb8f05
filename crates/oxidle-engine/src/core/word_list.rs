/// Set of characters a word (and therefore any typed guess) may contain.
///
/// ASCII letters and digits are always allowed; anything beyond that is
/// opt-in. Membership is checked on the lowercased character, matching the
/// one-case normalization applied everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    extra: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl Alphabet {
    /// Letters, digits, hyphen, and space.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            extra: vec!['-', ' '],
        }
    }

    /// Letters and digits plus the given extra characters.
    #[must_use]
    pub fn with_extra(extra: impl IntoIterator<Item = char>) -> Self {
        Self {
            extra: extra.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_allowed(&self, ch: char) -> bool {
        let ch = normalize_char(ch);
        ch.is_ascii_alphanumeric() || self.extra.contains(&ch)
    }
}

/// Lowercases a character the same way [`WordList`] lowercases words.
#[must_use]
pub fn normalize_char(ch: char) -> char {
    ch.to_ascii_lowercase()
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum WordListError {
    #[display("word list is empty")]
    Empty,
    #[display("word {word:?} contains a character outside the alphabet")]
    DisallowedCharacter {
        #[error(not(source))]
        word: String,
    },
}

/// The fixed, ordered candidate list: every member is both a possible secret
/// and a valid guess.
///
/// Words are lowercased once at construction and validated against the
/// [`Alphabet`]; this is the single place case normalization and character
/// validation of candidates happen, so membership checks elsewhere can
/// compare lowercased strings directly.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    alphabet: Alphabet,
}

impl WordList {
    pub fn new<I, S>(words: I, alphabet: Alphabet) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        for word in &words {
            if word.is_empty() || !word.chars().all(|ch| alphabet.is_allowed(ch)) {
                return Err(WordListError::DisallowedCharacter { word: word.clone() });
            }
        }
        Ok(Self { words, alphabet })
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; secret pickers derive indices from
    /// `len()`, so this indicates a picker bug.
    #[must_use]
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowercase() {
        let list = WordList::new(["CRANE", "Lc-10"], Alphabet::standard()).unwrap();
        assert_eq!(list.word(0), "crane");
        assert_eq!(list.word(1), "lc-10");
        assert!(list.contains("CrAnE"));
        assert!(list.contains("lc-10"));
    }

    #[test]
    fn rejects_empty_list() {
        let words: [&str; 0] = [];
        assert!(matches!(
            WordList::new(words, Alphabet::standard()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn rejects_words_outside_the_alphabet() {
        assert!(matches!(
            WordList::new(["cra_ne"], Alphabet::standard()),
            Err(WordListError::DisallowedCharacter { .. })
        ));
        assert!(matches!(
            WordList::new([""], Alphabet::standard()),
            Err(WordListError::DisallowedCharacter { .. })
        ));
    }

    #[test]
    fn standard_alphabet_accepts_hyphen_and_space() {
        let alphabet = Alphabet::standard();
        assert!(alphabet.is_allowed('a'));
        assert!(alphabet.is_allowed('Z'));
        assert!(alphabet.is_allowed('7'));
        assert!(alphabet.is_allowed('-'));
        assert!(alphabet.is_allowed(' '));
        assert!(!alphabet.is_allowed('_'));
        assert!(!alphabet.is_allowed('!'));
    }

    #[test]
    fn custom_extra_characters() {
        let alphabet = Alphabet::with_extra(['\'']);
        assert!(alphabet.is_allowed('\''));
        assert!(!alphabet.is_allowed('-'));
    }
}
