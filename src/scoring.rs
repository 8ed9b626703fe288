pub const WORD_LENGTH: usize = 5;

/// Per-letter result of scoring a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Right letter, right position (green).
    Correct,
    /// Letter occurs in the target at another position (yellow).
    Present,
    /// Letter does not occur in the target (gray).
    Absent,
}

impl Classification {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// How letters that are in the target but out of place get marked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringRule {
    /// Any letter contained anywhere in the target is `Present`, however many
    /// times it appears in the guess.
    #[default]
    Containment,
    /// Exact matches consume target letters first; each remaining guess letter
    /// is `Present` only while an unconsumed copy is left in the target.
    DuplicateAware,
}

impl ScoringRule {
    /// Score `guess` against `target`. Both are expected to be normalized
    /// five-letter words.
    pub fn score(self, guess: &str, target: &str) -> ScoredGuess {
        let marks = match self {
            Self::Containment => containment_marks(guess, target),
            Self::DuplicateAware => duplicate_aware_marks(guess, target),
        };
        ScoredGuess {
            word: guess.to_string(),
            marks,
        }
    }
}

/// Score with the default [`ScoringRule::Containment`] rule.
pub fn score_guess(guess: &str, target: &str) -> ScoredGuess {
    ScoringRule::Containment.score(guess, target)
}

fn containment_marks(guess: &str, target: &str) -> [Classification; WORD_LENGTH] {
    let mut marks = [Classification::Absent; WORD_LENGTH];
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate().take(WORD_LENGTH) {
        marks[i] = if g == t {
            Classification::Correct
        } else if target.contains(g) {
            Classification::Present
        } else {
            Classification::Absent
        };
    }
    marks
}

fn duplicate_aware_marks(guess: &str, target: &str) -> [Classification; WORD_LENGTH] {
    let mut marks = [Classification::Absent; WORD_LENGTH];
    let guess_chars: Vec<char> = guess.chars().take(WORD_LENGTH).collect();
    let mut remaining: Vec<Option<char>> = target.chars().take(WORD_LENGTH).map(Some).collect();

    // First pass: greens
    for (i, &g) in guess_chars.iter().enumerate() {
        if remaining.get(i).copied().flatten() == Some(g) {
            marks[i] = Classification::Correct;
            remaining[i] = None;
        }
    }
    // Second pass: yellows
    for (i, &g) in guess_chars.iter().enumerate() {
        if marks[i] == Classification::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
            marks[i] = Classification::Present;
            *slot = None;
        }
    }
    marks
}

/// An accepted guess together with its per-letter classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: String,
    marks: [Classification; WORD_LENGTH],
}

impl ScoredGuess {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn marks(&self) -> &[Classification; WORD_LENGTH] {
        &self.marks
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        self.word.chars().zip(self.marks.iter().copied())
    }

    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Classification::Correct)
    }

    /// `G`/`Y`/`X` rendering of the marks, e.g. `GYXXG`.
    pub fn pattern(&self) -> String {
        self.marks.iter().map(|m| m.to_char()).collect()
    }
}
