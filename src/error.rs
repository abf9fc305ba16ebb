use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the run. Nothing is scored once one of these is raised.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Cannot read question file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Question file {} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Input closed before an answer was chosen")]
    InputClosed,

    #[error("Cannot export questions to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot serialize questions: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A rejected selection. The message doubles as the re-prompt shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a number between 1 and {max}.")]
    NotANumber { max: usize },

    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}
