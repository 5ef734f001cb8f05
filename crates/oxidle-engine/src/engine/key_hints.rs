use std::collections::HashMap;

use crate::core::Verdict;

/// Strongest verdict observed for each character guessed so far.
///
/// Drives the persistent keyboard coloring: once a character has been seen
/// `Correct` anywhere, later `Present` or `Absent` sightings do not weaken
/// it. The `Ord` on [`Verdict`] encodes that priority.
#[derive(Debug, Clone, Default)]
pub struct KeyHints {
    hints: HashMap<char, Verdict>,
}

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one submitted guess's verdicts into the memory.
    pub fn record(&mut self, guess: &str, feedback: &[Verdict]) {
        for (ch, &verdict) in guess.chars().zip(feedback) {
            self.hints
                .entry(ch)
                .and_modify(|current| *current = (*current).max(verdict))
                .or_insert(verdict);
        }
    }

    /// The remembered verdict for `ch`, if the character was ever guessed.
    #[must_use]
    pub fn hint(&self, ch: char) -> Option<Verdict> {
        self.hints.get(&ch).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.hints.iter().map(|(&ch, &v)| (ch, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unguessed_characters_have_no_hint() {
        let hints = KeyHints::new();
        assert_eq!(hints.hint('a'), None);
    }

    #[test]
    fn records_the_verdict_per_character() {
        let mut hints = KeyHints::new();
        hints.record("ab", &[Verdict::Correct, Verdict::Absent]);
        assert_eq!(hints.hint('a'), Some(Verdict::Correct));
        assert_eq!(hints.hint('b'), Some(Verdict::Absent));
    }

    #[test]
    fn upgrades_but_never_downgrades() {
        let mut hints = KeyHints::new();
        hints.record("a", &[Verdict::Absent]);
        hints.record("a", &[Verdict::Present]);
        assert_eq!(hints.hint('a'), Some(Verdict::Present));

        hints.record("a", &[Verdict::Correct]);
        hints.record("a", &[Verdict::Present]);
        hints.record("a", &[Verdict::Absent]);
        assert_eq!(hints.hint('a'), Some(Verdict::Correct));
    }

    #[test]
    fn duplicate_characters_keep_the_strongest_verdict() {
        let mut hints = KeyHints::new();
        // One 's' correct, one absent, in the same guess.
        hints.record("ss", &[Verdict::Correct, Verdict::Absent]);
        assert_eq!(hints.hint('s'), Some(Verdict::Correct));
    }
}
