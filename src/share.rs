//! Spoiler-free share text: a header plus one row of squares per guess.

use crate::scoring::{Classification, ScoredGuess};

/// Glyphs and title used for the share summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareStyle {
    pub title: String,
    pub correct: String,
    pub present: String,
    pub absent: String,
}

impl Default for ShareStyle {
    fn default() -> Self {
        Self {
            title: "WordTerm".to_string(),
            correct: "🟩".to_string(),
            present: "🟨".to_string(),
            absent: "⬛".to_string(),
        }
    }
}

impl ShareStyle {
    pub fn glyph(&self, classification: Classification) -> &str {
        match classification {
            Classification::Correct => &self.correct,
            Classification::Present => &self.present,
            Classification::Absent => &self.absent,
        }
    }
}

/// Render e.g. `WordTerm 226 3/6` followed by one line per guess.
pub fn render_share_summary(
    day_index: i64,
    guesses: &[ScoredGuess],
    max_attempts: usize,
    style: &ShareStyle,
) -> String {
    let mut result = format!(
        "{} {} {}/{}\n",
        style.title,
        day_index,
        guesses.len(),
        max_attempts
    );
    for guess in guesses {
        for &mark in guess.marks() {
            result.push_str(style.glyph(mark));
        }
        result.push('\n');
    }
    result
}
