//! One played round: the guessed letters and the feedback they received

use super::word::WORD_LENGTH;
use super::{LetterState, Pattern, Word, WordError};
use std::fmt;

/// A guess and its feedback, position by position
///
/// A game's history is a `Vec<GuessRecord>` in play order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    letters: [u8; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

/// Error type for records built from user-supplied text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRecordError {
    InvalidWord(WordError),
    InvalidFeedback(String),
}

impl fmt::Display for GuessRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidFeedback(s) => {
                write!(f, "Invalid feedback '{s}': expected 5 of G/Y/W")
            }
        }
    }
}

impl std::error::Error for GuessRecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::InvalidFeedback(_) => None,
        }
    }
}

impl From<WordError> for GuessRecordError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl GuessRecord {
    #[must_use]
    pub fn new(guess: &Word, pattern: Pattern) -> Self {
        Self {
            letters: *guess.chars(),
            states: *pattern.states(),
        }
    }

    /// Record the feedback `guess` would receive if `answer` were hidden
    #[must_use]
    pub fn from_answer(guess: &Word, answer: &Word) -> Self {
        Self::new(guess, Pattern::calculate(guess, answer))
    }

    /// Build a record from a guess and a feedback string
    ///
    /// # Errors
    /// Returns `GuessRecordError` if the guess is not a valid word or the
    /// feedback is not five recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{GuessRecord, LetterState};
    ///
    /// let record = GuessRecord::parse("crane", "GYWWW").unwrap();
    /// assert_eq!(record.states()[1], LetterState::Yellow);
    /// ```
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, GuessRecordError> {
        let word = Word::new(guess)?;
        let pattern = Pattern::parse(feedback)
            .ok_or_else(|| GuessRecordError::InvalidFeedback(feedback.to_string()))?;
        Ok(Self::new(&word, pattern))
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        Pattern::new(self.states)
    }

    /// The guessed word as text
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// Iterate `(position, letter, state)` triples
    pub fn slots(&self) -> impl Iterator<Item = (usize, u8, LetterState)> + '_ {
        self.letters
            .iter()
            .zip(self.states.iter())
            .enumerate()
            .map(|(i, (&letter, &state))| (i, letter, state))
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.guess_text(), self.pattern())
    }
}

impl std::str::FromStr for GuessRecord {
    type Err = GuessRecordError;

    /// Parses `guess=feedback` or `guess:feedback`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(['=', ':'])
            .ok_or_else(|| GuessRecordError::InvalidFeedback(s.to_string()))?;
        Self::parse(guess, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record() {
        let record = GuessRecord::parse("CRANE", "gyw-.").unwrap();
        assert_eq!(record.letters(), b"crane");
        assert_eq!(
            record.states(),
            &[
                LetterState::Green,
                LetterState::Yellow,
                LetterState::White,
                LetterState::White,
                LetterState::None,
            ]
        );
        assert_eq!(record.guess_text(), "crane");
    }

    #[test]
    fn parse_record_errors() {
        assert!(matches!(
            GuessRecord::parse("cran", "GGGGG"),
            Err(GuessRecordError::InvalidWord(WordError::InvalidLength(4)))
        ));
        assert!(matches!(
            GuessRecord::parse("crane", "GGXGG"),
            Err(GuessRecordError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn from_answer_matches_pattern() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("trace").unwrap();
        let record = GuessRecord::from_answer(&guess, &answer);
        assert_eq!(record.to_string(), "crane=YGGWG");
    }

    #[test]
    fn from_str_accepts_both_separators() {
        let a: GuessRecord = "slate=WWGWG".parse().unwrap();
        let b: GuessRecord = "slate:WWGWG".parse().unwrap();
        assert_eq!(a, b);
        assert!("slate".parse::<GuessRecord>().is_err());
    }

    #[test]
    fn slots_are_position_indexed() {
        let record = GuessRecord::parse("speed", "YWYYW").unwrap();
        let slots: Vec<_> = record.slots().collect();
        assert_eq!(slots[2], (2, b'e', LetterState::Yellow));
        assert_eq!(slots[4], (4, b'd', LetterState::White));
    }
}
