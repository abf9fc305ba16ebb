//! The interactive ask/check loop.
//!
//! Input, output and randomness are all injected: the binary passes locked
//! stdin/stdout and an entropy-seeded `StdRng`, tests pass byte buffers and a
//! fixed seed.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{QuizError, ValidationError};
use crate::model::{Question, Score};
use crate::reference::hyperlink;
use crate::timer::format_elapsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub shuffle_questions: bool,
    pub shuffle_options: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            shuffle_questions: true,
            shuffle_options: true,
        }
    }
}

/// Turns one line of user input into a zero-based option index.
pub fn validate(raw: &str, option_count: usize) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber { max: option_count });
    }

    match trimmed.parse::<usize>() {
        Ok(choice) if (1..=option_count).contains(&choice) => Ok(choice - 1),
        _ => Err(ValidationError::OutOfRange { max: option_count }),
    }
}

pub struct Session<G> {
    rng: G,
    base_dir: PathBuf,
    options: SessionOptions,
}

impl<G: Rng> Session<G> {
    /// `base_dir` anchors relative reference paths.
    pub fn new(rng: G, base_dir: PathBuf) -> Self {
        Self {
            rng,
            base_dir,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut questions: Vec<Question>,
        input: &mut R,
        output: &mut W,
    ) -> Result<Score, QuizError> {
        let started = Utc::now();
        if self.options.shuffle_questions {
            questions.shuffle(&mut self.rng);
        }
        info!(count = questions.len(), "starting session");

        let mut score = Score::default();
        for question in questions.iter_mut() {
            let correct = self.ask(question, input, output)?;
            score.record(correct);
        }

        writeln!(output, "You got {} correct ({}%).", score, score.percentage())?;
        writeln!(output, "Time: {}", format_elapsed(Utc::now() - started))?;
        output.flush()?;
        Ok(score)
    }

    /// Presents one question and blocks until a valid selection is read.
    pub fn ask<R: BufRead, W: Write>(
        &mut self,
        question: &mut Question,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool, QuizError> {
        if self.options.shuffle_options {
            question.options.shuffle(&mut self.rng);
        }

        writeln!(output, "{}", question.prompt)?;
        for (idx, option) in question.options.iter().enumerate() {
            writeln!(output, "{}: {}", idx + 1, option)?;
        }

        let choice = read_choice(input, output, question.options.len())?;
        let correct = question.is_correct(&question.options[choice]);

        if correct {
            writeln!(output, "✅ Correct!")?;
        } else {
            writeln!(output, "❌ Wrong! The correct answer was: {}", question.answer)?;
        }

        if !question.explanation.is_empty() {
            writeln!(output, "💡 Explanation: {}", question.explanation)?;
        }

        if !question.reference.is_none() {
            let label = question.reference.to_string();
            match question.reference.resolve(&self.base_dir) {
                Some(uri) => writeln!(output, "📎 Reference: {}", hyperlink(&uri, &label))?,
                None => writeln!(output, "📎 Reference: {}", label)?,
            }
        }

        writeln!(output)?;
        Ok(correct)
    }
}

fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    option_count: usize,
) -> Result<usize, QuizError> {
    let mut buf = Vec::new();
    loop {
        write!(output, "Choose 1-{}: ", option_count)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }

        match validate(&String::from_utf8_lossy(&buf), option_count) {
            Ok(choice) => return Ok(choice),
            Err(e) => {
                debug!(input = %String::from_utf8_lossy(&buf).trim(), "rejected selection");
                writeln!(output, "{}", e)?;
            }
        }
    }
}
