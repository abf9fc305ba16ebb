use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::QuizError;
use crate::model::Question;

pub fn export_questions(questions: &[Question], path: &Path) -> Result<(), QuizError> {
    let yaml = serde_yaml::to_string(questions)?;
    fs::write(path, yaml).map_err(|source| QuizError::Export {
        path: path.to_path_buf(),
        source,
    })
}

pub fn print_status(questions: &[Question], path: &Path) -> Result<(), QuizError> {
    let unanswerable = questions.iter().filter(|q| !q.has_answer_option()).count();
    let with_reference = questions.iter().filter(|q| !q.reference.is_none()).count();
    println!("Questions file: {}", path.display());
    println!("Fingerprint: {}", compute_file_hash(path)?);
    println!("Questions: {}", questions.len());
    println!(
        "  With reference: {}, Answer not among options: {}",
        with_reference, unanswerable
    );
    Ok(())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn compute_file_hash(path: &Path) -> Result<String, QuizError> {
    let content = fs::read(path).map_err(|source| QuizError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let result = hasher.finalize();
    Ok(format!("sha256:{}", hex_encode(&result)))
}
