use serde::{Deserialize, Serialize};

use crate::color::ColorName;

/// One Stroop trial: a color word rendered in some ink color.
///
/// The correct answer is the ink (`display_color`), never the word's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StroopTrial {
    pub word: ColorName,
    pub display_color: ColorName,
}

impl StroopTrial {
    pub fn new(word: ColorName, display_color: ColorName) -> Self {
        Self {
            word,
            display_color,
        }
    }

    /// Word and ink match (the non-interference condition).
    pub fn is_congruent(&self) -> bool {
        self.word == self.display_color
    }

    pub fn correct_answer(&self) -> ColorName {
        self.display_color
    }
}

/// Recorded outcome of an answered trial, for research logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResponse {
    pub selected: ColorName,
    pub was_correct: bool,
    /// Seconds since the Unix epoch at the moment the answer was captured.
    pub answered_at: f64,
}
