use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::QuizError;
use crate::model::*;

pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    let bytes = fs::read(path).map_err(|source| QuizError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| QuizError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&content);
    debug!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Parses every block in file order. Blocks too short to form a question are skipped.
pub fn parse_questions(content: &str) -> Vec<Question> {
    let normalized = content.replace("\r\n", "\n");

    normalized
        .trim()
        .split("\n\n")
        .enumerate()
        .filter_map(|(index, block)| {
            let question = parse_block(block);
            if question.is_none() && !block.trim().is_empty() {
                debug!(block = index + 1, "skipping block with fewer than 3 lines");
            }
            question
        })
        .collect()
}

/// Line layout: prompt, answer, comma-separated options, then optional
/// explanation and reference. Anything past the fifth line is ignored.
pub fn parse_block(block: &str) -> Option<Question> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        return None;
    }

    let question = Question {
        prompt: lines[0].to_string(),
        answer: lines[1].to_string(),
        // Empty fragments from stray commas stay in as blank options.
        options: lines[2].split(',').map(|s| s.trim().to_string()).collect(),
        explanation: lines.get(3).map(|s| s.to_string()).unwrap_or_default(),
        reference: lines.get(4).map(|s| Reference::parse(s)).unwrap_or_default(),
    };

    if !question.has_answer_option() {
        debug!(prompt = %question.prompt, "answer is not among the options");
    }

    Some(question)
}
