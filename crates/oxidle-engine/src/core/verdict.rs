use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-character feedback for one slot of a submitted guess.
///
/// The variant order doubles as hint priority: a `Correct` sighting of a
/// character outranks `Present`, which outranks `Absent`. The derived `Ord`
/// relies on this order, so keep the variants sorted weakest-first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The character does not occur in the secret (or all of its
    /// occurrences are already accounted for).
    Absent,
    /// The character occurs in the secret, but at a different position.
    Present,
    /// The character is at exactly this position in the secret.
    Correct,
}

/// Feedback for a whole submitted guess, one verdict per slot.
pub type Feedback = Vec<Verdict>;

/// Scores `guess` against `secret`, one [`Verdict`] per character.
///
/// Duplicate characters are handled with two passes. The first pass marks
/// exact matches and tallies the remaining (non-matched) secret characters.
/// The second pass marks a non-exact guess character `Present` only while
/// that tally is positive, so a character is never credited more times than
/// it occurs in the secret.
///
/// Equal length is a caller contract; both strings are expected to be
/// normalized to lowercase already (see [`WordList`](crate::WordList)).
#[must_use]
pub fn evaluate(secret: &str, guess: &str) -> Feedback {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());

    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    let mut feedback = vec![Verdict::Absent; secret.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    for (i, (&s, &g)) in secret.iter().zip(&guess).enumerate() {
        if s == g {
            feedback[i] = Verdict::Correct;
        } else {
            *remaining.entry(s).or_insert(0) += 1;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if feedback[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            feedback[i] = Verdict::Present;
            *count -= 1;
        }
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrences(word: &str, ch: char) -> usize {
        word.chars().filter(|&c| c == ch).count()
    }

    fn marks(feedback: &[Verdict], guess: &str, ch: char) -> usize {
        feedback
            .iter()
            .zip(guess.chars())
            .filter(|&(v, g)| g == ch && *v != Verdict::Absent)
            .count()
    }

    #[test]
    fn exact_guess_is_all_correct() {
        assert_eq!(evaluate("apple", "apple"), vec![Verdict::Correct; 5]);
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        assert_eq!(evaluate("crane", "hjklm"), vec![Verdict::Absent; 5]);
    }

    #[test]
    fn duplicate_guess_characters_are_capped() {
        // "spare" has one 's': the first 's' of "press" is presentable, the
        // second is not.
        assert_eq!(
            evaluate("spare", "press"),
            vec![
                Verdict::Present,
                Verdict::Present,
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn exact_match_consumes_a_secret_occurrence() {
        // Both 'l's of "llama" are guessed; only the one exact match plus the
        // single remaining 'l' may score.
        let feedback = evaluate("llama", "label");
        assert_eq!(
            feedback,
            vec![
                Verdict::Correct,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
            ]
        );
    }

    #[test]
    fn works_on_hyphens_digits_and_spaces() {
        let feedback = evaluate("lc-10", "lc-10");
        assert_eq!(feedback, vec![Verdict::Correct; 5]);

        let feedback = evaluate("kill confirmed", "kill confirmed");
        assert_eq!(feedback, vec![Verdict::Correct; 14]);
    }

    #[test]
    fn marks_never_exceed_secret_occurrences() {
        let pairs = [
            ("spare", "press"),
            ("speed", "erase"),
            ("llama", "label"),
            ("abbey", "babes"),
            ("kompact-92", "jackal-pdw"),
            ("score streaks", "kill confirme"),
        ];
        for (secret, guess) in pairs {
            let feedback = evaluate(secret, guess);
            for ch in guess.chars() {
                assert!(
                    marks(&feedback, guess, ch) <= occurrences(secret, ch),
                    "{ch:?} over-marked for secret {secret:?}, guess {guess:?}"
                );
            }
        }
    }

    #[test]
    fn verdict_priority_order() {
        assert!(Verdict::Absent < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
    }

    #[test]
    fn verdict_serializes_as_snake_case() {
        let json = serde_json::to_string(&vec![
            Verdict::Correct,
            Verdict::Present,
            Verdict::Absent,
        ])
        .unwrap();
        assert_eq!(json, r#"["correct","present","absent"]"#);
    }
}
