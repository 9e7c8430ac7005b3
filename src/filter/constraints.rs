//! Per-letter constraints folded from a guess history
//!
//! Feedback for a repeated letter carries an exact-count signal, so each guess
//! is evaluated per distinct letter value rather than per slot:
//!
//! - every Green slot fixes that letter at that position
//! - every Yellow slot forbids the letter at that position and requires it somewhere
//! - with `g` greens and `y` yellows for a letter, the candidate holds at least
//!   `g + y` of it; if any slot for the letter is White, exactly `g + y`

use crate::core::{GuessRecord, LetterState, WORD_LENGTH, Word};

const ALPHABET: usize = 26;

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Accumulated constraints from zero or more guesses
///
/// Count bounds from separate guesses intersect, so folding is order-independent.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{GuessRecord, Word};
/// use wordle_advisor::filter::Constraints;
///
/// // Two yellow E's: at least two E's, neither in the first two slots
/// let history = [GuessRecord::parse("eexyz", "YY...").unwrap()];
/// let constraints = Constraints::from_history(&history);
///
/// assert!(constraints.is_satisfied_by(&Word::new("creep").unwrap()));
/// assert!(!constraints.is_satisfied_by(&Word::new("crane").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Letters that must sit at each position (bitmask; more than one bit is unsatisfiable)
    required: [u32; WORD_LENGTH],
    /// Letters that must not sit at each position
    excluded: [u32; WORD_LENGTH],
    min_counts: [u8; ALPHABET],
    max_counts: [u8; ALPHABET],
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: [0; WORD_LENGTH],
            excluded: [0; WORD_LENGTH],
            min_counts: [0; ALPHABET],
            max_counts: [WORD_LENGTH as u8; ALPHABET],
        }
    }
}

impl Constraints {
    /// Create an empty constraint set that every word satisfies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every record of a history, left to right
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut constraints = Self::new();
        for record in history {
            constraints.add(record);
        }
        constraints
    }

    /// Add the constraints implied by one guess and its feedback
    pub fn add(&mut self, record: &GuessRecord) {
        let mut greens = [0u8; ALPHABET];
        let mut yellows = [0u8; ALPHABET];
        let mut whites = [0u8; ALPHABET];

        for (position, letter, state) in record.slots() {
            if !letter.is_ascii_lowercase() {
                continue;
            }
            let index = usize::from(letter - b'a');
            match state {
                LetterState::Green => {
                    greens[index] += 1;
                    self.required[position] |= letter_bit(letter);
                }
                LetterState::Yellow => {
                    yellows[index] += 1;
                    self.excluded[position] |= letter_bit(letter);
                }
                LetterState::White => whites[index] += 1,
                LetterState::None => {}
            }
        }

        for index in 0..ALPHABET {
            let accounted = greens[index] + yellows[index];
            self.min_counts[index] = self.min_counts[index].max(accounted);
            if whites[index] > 0 {
                self.max_counts[index] = self.max_counts[index].min(accounted);
            }
        }
    }

    /// True when no guess has been folded in (or none carried feedback)
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Minimum and maximum allowed occurrences of `letter`
    ///
    /// Bytes outside `a..=z` are unconstrained.
    #[must_use]
    pub fn count_bounds(&self, letter: u8) -> (u8, u8) {
        if !letter.is_ascii_lowercase() {
            return (0, WORD_LENGTH as u8);
        }
        let index = usize::from(letter - b'a');
        (self.min_counts[index], self.max_counts[index])
    }

    /// Returns `true` iff the given word satisfies every constraint
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(position, &letter)| {
            let bit = letter_bit(letter);
            self.required[position] & !bit == 0 && self.excluded[position] & bit == 0
        });

        positions_ok
            && (b'a'..=b'z').all(|letter| {
                let (min, max) = self.count_bounds(letter);
                let count = word.count_of(letter);
                (min..=max).contains(&count)
            })
    }
}

/// Check a candidate against every record of a history
///
/// An empty history accepts every candidate.
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[GuessRecord]) -> bool {
    Constraints::from_history(history).is_satisfied_by(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn accepts(guess: &str, feedback: &str, candidate: &str) -> bool {
        let history = [GuessRecord::parse(guess, feedback).unwrap()];
        is_consistent(&word(candidate), &history)
    }

    #[test]
    fn empty_history_accepts_everything() {
        for candidate in ["crane", "aaaaa", "zzzzz"] {
            assert!(is_consistent(&word(candidate), &[]));
        }
        assert!(Constraints::new().is_unconstrained());
    }

    #[test]
    fn two_yellows_require_at_least_two() {
        assert!(accepts("eexyz", "YY...", "creep"));
        assert!(!accepts("eexyz", "YY...", "crane"));
        // Three E's is still "at least two"
        assert!(accepts("eexyz", "YY...", "abeee"));
    }

    #[test]
    fn yellow_and_white_require_exactly_one() {
        assert!(accepts("eexyz", "YW...", "brake"));
        assert!(!accepts("eexyz", "YW...", "creep"));
        assert!(!accepts("eexyz", "YW...", "crypt"));
    }

    #[test]
    fn yellow_forbids_its_own_position() {
        assert!(!accepts("eexyz", "YW...", "elbow"));
    }

    #[test]
    fn two_whites_require_none() {
        assert!(accepts("eexyz", "WW...", "crypt"));
        assert!(!accepts("eexyz", "WW...", "brake"));
    }

    #[test]
    fn green_and_yellow_require_at_least_two() {
        assert!(accepts("eexyz", "GY...", "elope"));
        assert!(!accepts("eexyz", "GY...", "eland"));
        assert!(!accepts("eexyz", "GY...", "eerie"));
    }

    #[test]
    fn green_and_white_require_exactly_one() {
        assert!(accepts("eexyz", "GW...", "eland"));
        assert!(!accepts("eexyz", "GW...", "elope"));
        assert!(!accepts("eexyz", "GW...", "bland"));
    }

    #[test]
    fn two_greens_require_both_positions() {
        assert!(accepts("eexyz", "GG...", "eerie"));
        assert!(!accepts("eexyz", "GG...", "elope"));
    }

    #[test]
    fn green_yellow_white_require_exactly_two() {
        assert!(accepts("eeexy", "GYW..", "elope"));
        assert!(!accepts("eeexy", "GYW..", "eland"));
        assert!(!accepts("eeexy", "GYW..", "eerie"));
    }

    #[test]
    fn none_slots_add_no_constraint() {
        assert!(accepts("crane", ".....", "eerie"));
        let constraints =
            Constraints::from_history(&[GuessRecord::parse("crane", ".....").unwrap()]);
        assert!(constraints.is_unconstrained());
    }

    #[test]
    fn white_letter_absent() {
        assert!(accepts("crane", "WWWWW", "louts"));
        assert!(!accepts("crane", "WWWWW", "trace"));
    }

    #[test]
    fn multiple_guesses_fold_left_to_right() {
        let history = [
            GuessRecord::parse("crane", "YGGWG").unwrap(),
            GuessRecord::parse("brace", "WGGGG").unwrap(),
        ];
        assert!(is_consistent(&word("trace"), &history));
        assert!(!is_consistent(&word("brace"), &history));
        assert!(!is_consistent(&word("crate"), &history));
    }

    #[test]
    fn bounds_intersect_across_guesses() {
        let history = [
            GuessRecord::parse("eexyz", "YY...").unwrap(),
            GuessRecord::parse("abcde", "....W").unwrap(),
        ];
        let constraints = Constraints::from_history(&history);
        // At least two from the first guess, at most zero from the second
        assert_eq!(constraints.count_bounds(b'e'), (2, 0));
        assert!(!constraints.is_satisfied_by(&word("creep")));
        assert!(!constraints.is_satisfied_by(&word("crypt")));
    }

    #[test]
    fn count_bounds_outside_alphabet_are_open() {
        let constraints =
            Constraints::from_history(&[GuessRecord::parse("crane", "WWWWW").unwrap()]);
        assert_eq!(constraints.count_bounds(b'c'), (0, 0));
        for byte in [b'A', b'0', b'{', 0, 0xff] {
            assert_eq!(constraints.count_bounds(byte), (0, WORD_LENGTH as u8));
        }
    }

    #[test]
    fn conflicting_greens_reject_everything() {
        let history = [
            GuessRecord::parse("crane", "G....").unwrap(),
            GuessRecord::parse("slate", "G....").unwrap(),
        ];
        assert!(!is_consistent(&word("crane"), &history));
        assert!(!is_consistent(&word("slate"), &history));
    }

    #[test]
    fn true_answer_is_always_consistent() {
        let words = [
            "speed", "erase", "eerie", "geese", "hello", "llama", "robot", "floor", "crane",
            "trace", "abbey", "babes", "there", "world",
        ];
        for answer in words {
            let answer = word(answer);
            let history: Vec<GuessRecord> = words
                .iter()
                .map(|g| GuessRecord::from_answer(&word(g), &answer))
                .collect();
            assert!(
                is_consistent(&answer, &history),
                "{answer} rejected by its own feedback"
            );
        }
    }
}
