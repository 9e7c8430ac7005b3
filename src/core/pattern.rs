//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the five-slot feedback produced when a guess is compared
//! against a hidden answer. Each slot holds a [`LetterState`].

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Feedback for a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// No feedback recorded for this slot yet
    #[default]
    None,
    /// Correct letter, correct position
    Green,
    /// Letter present elsewhere in the answer
    Yellow,
    /// Letter exhausted: no unaccounted-for occurrence remains in the answer
    White,
}

impl LetterState {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - 'W'/'w'/'-'/'_'/⬜/⬛ for white
    /// - '.'/'?' for no feedback
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'W' | 'w' | '-' | '_' | '⬜' | '⬛' => Some(Self::White),
            '.' | '?' => Some(Self::None),
            _ => None,
        }
    }

    /// Single-letter symbol used by `Display`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::None => '.',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::White => 'W',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::None => '▫',
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::White => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([LetterState; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterState::Green; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and consume that answer slot
    /// 2. Second pass: for each remaining guess letter, scan the unconsumed
    ///    answer slots left to right; consume the first match and mark yellow,
    ///    otherwise mark white
    ///
    /// Greens plus yellows for any letter never exceed that letter's count in
    /// the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "YWYYW");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut result = [LetterState::White; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: Index needed to compare guess[i], answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = LetterState::Green;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Green {
                continue;
            }
            if let Some(slot) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                consumed[slot] = true;
                result[i] = LetterState::Yellow;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GYWWG" or "🟩🟨⬜⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut states = [LetterState::None; WORD_LENGTH];
        let mut symbols = s.trim().chars();

        for state in &mut states {
            *state = LetterState::from_symbol(symbols.next()?)?;
        }

        if symbols.next().is_some() {
            return None;
        }

        Some(Self(states))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Pattern::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn pattern_all_green() {
        assert_eq!(pattern("HELLO", "HELLO"), "GGGGG");
        let word = Word::new("crane").unwrap();
        assert!(Pattern::calculate(&word, &word).is_perfect());
    }

    #[test]
    fn pattern_all_white() {
        assert_eq!(pattern("HELLO", "TRACK"), "WWWWW");
        assert_eq!(pattern("abcde", "fghij"), "WWWWW");
    }

    #[test]
    fn pattern_duplicate_letters_both_yellow() {
        // ERASE has E at 0 and 4, S at 3
        assert_eq!(pattern("SPEED", "ERASE"), "YWYYW");
    }

    #[test]
    fn pattern_yellow_and_green() {
        assert_eq!(pattern("CRANE", "TRACE"), "YGGWG");
    }

    #[test]
    fn pattern_green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: second O is green, first O takes the remaining O
        assert_eq!(pattern("robot", "floor"), "YYWGW");
    }

    #[test]
    fn pattern_excess_duplicates_are_white() {
        // WORLD has a single L
        assert_eq!(pattern("llama", "world"), "YWWWW");
        assert_eq!(pattern("hello", "world"), "WWWGY");
        assert_eq!(pattern("eerie", "there"), "YWYWG");
    }

    #[test]
    fn pattern_never_overcounts_letters() {
        let words = [
            "speed", "erase", "eerie", "geese", "hello", "llama", "robot", "floor", "crane",
            "trace", "aaaaa", "abbey", "babes",
        ];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                let p = Pattern::calculate(&g, &a);
                for letter in b'a'..=b'z' {
                    let marked = (0..WORD_LENGTH)
                        .filter(|&i| {
                            g.char_at(i) == letter && p.states()[i] != LetterState::White
                        })
                        .count();
                    assert!(
                        marked <= usize::from(a.count_of(letter)),
                        "{guess} vs {answer} over-counts {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYGWW").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg-_").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨🟩⬜⬜");
    }

    #[test]
    fn pattern_parse_none_slots() {
        let p = Pattern::parse("G....").unwrap();
        assert_eq!(p.states()[0], LetterState::Green);
        assert!(p.states()[1..].iter().all(|&s| s == LetterState::None));
        assert_eq!(p.to_string(), "G....");
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GYGGYW").is_none());
        assert!(Pattern::parse("GYG").is_none());
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
        assert!("GXGGY".parse::<Pattern>().is_err());
    }
}
