use crate::error::WordListError;
use crate::scoring::WORD_LENGTH;
use crate::debug_log;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_WORDS: &str = include_str!("resources/words.json");

/// Day zero of the daily word sequence. Changing it shifts every day's target.
const EPOCH: (i32, u32, u32) = (2021, 6, 19);

#[derive(Debug, Deserialize)]
struct WordListAsset {
    targets: Vec<String>,
    valid: Vec<String>,
}

/// Read-only dictionary: the ordered answer pool plus every acceptable guess.
#[derive(Debug, Clone)]
pub struct WordStore {
    targets: Vec<String>,
    lookup: HashSet<String>,
}

/// Trim and lowercase raw input the same way for guesses and list entries.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_well_formed(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase())
}

fn normalize_entries(words: Vec<String>) -> Result<Vec<String>, WordListError> {
    words
        .into_iter()
        .map(|raw| {
            let word = normalize_word(&raw);
            if is_well_formed(&word) {
                Ok(word)
            } else {
                Err(WordListError::MalformedWord(raw))
            }
        })
        .collect()
}

pub fn epoch() -> NaiveDate {
    let (year, month, day) = EPOCH;
    NaiveDate::from_ymd_opt(year, month, day).expect("epoch is a valid calendar date")
}

/// Whole days from the epoch to `date`; negative before the epoch.
pub fn day_index_for_date(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

impl WordStore {
    /// Build a store from target words and additional valid guesses.
    ///
    /// Entries are normalized; anything that is not five ASCII letters is
    /// rejected, as is an empty target list.
    pub fn new(targets: Vec<String>, valid: Vec<String>) -> Result<Self, WordListError> {
        let targets = normalize_entries(targets)?;
        let valid = normalize_entries(valid)?;
        if targets.is_empty() {
            return Err(WordListError::NoTargets);
        }

        let lookup: HashSet<String> = targets.iter().chain(valid.iter()).cloned().collect();
        Ok(Self { targets, lookup })
    }

    pub fn from_json(data: &str) -> Result<Self, WordListError> {
        let asset: WordListAsset = serde_json::from_str(data)?;
        Self::new(asset.targets, asset.valid)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// The word list compiled into the binary.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_json(EMBEDDED_WORDS)
    }

    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.lookup.contains(&normalize_word(word))
    }

    /// Target for day `n`. The target list repeats once exhausted, and
    /// negative days count backwards from the end.
    pub fn word_for_day(&self, n: i64) -> &str {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = n.rem_euclid(self.targets.len() as i64) as usize;
        debug_log!("word_for_day({}) -> index {}", n, index);
        &self.targets[index]
    }

    pub fn day_index_and_word_for_date(&self, date: NaiveDate) -> (i64, &str) {
        let n = day_index_for_date(date);
        (n, self.word_for_day(n))
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of distinct acceptable guesses, targets included.
    pub fn word_count(&self) -> usize {
        self.lookup.len()
    }
}
