use serde::Serialize;

pub use crate::reference::Reference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(skip_serializing_if = "Reference::is_none")]
    pub reference: Reference,
}

impl Question {
    /// Case-insensitive match against the stored answer. No trimming happens here.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice.to_lowercase() == self.answer.to_lowercase()
    }

    /// Whether any option can score. Used for diagnostics only; the data is never patched.
    pub fn has_answer_option(&self) -> bool {
        self.options.iter().any(|o| self.is_correct(o))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Rounded to the nearest whole number, halves away from zero. Zero for an empty session.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 * 100.0 / self.total as f64).round() as u32
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
