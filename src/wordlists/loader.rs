//! Word list loading utilities
//!
//! Entries that are not valid 5-letter words are skipped, never reported as errors.

use crate::core::Word;
use crate::pool::UsedWordIndex;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\nslate\ntoolong\n\nabc\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}

/// Convert a string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse used-word history lines of the form `word,game_id,date`
///
/// Header rows and malformed lines are skipped.
#[must_use]
pub fn parse_used_words(content: &str) -> UsedWordIndex {
    let mut index = UsedWordIndex::new();

    for line in content.lines() {
        let mut fields = line.split(',').map(str::trim);
        let (Some(word), Some(game_id), Some(date)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let (Ok(word), Ok(game_id)) = (Word::new(word), game_id.parse::<u32>()) else {
            continue;
        };
        index.insert(word.text(), game_id, date);
    }

    index
}

/// Load used-word history from a CSV file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_used_words<P: AsRef<Path>>(path: P) -> io::Result<UsedWordIndex> {
    Ok(parse_used_words(&fs::read_to_string(path)?))
}
