//! Error taxonomy for a comparison run.
//!
//! Every variant is terminal: the harness reports exactly one diagnostic per
//! failing run and never recovers locally.

use std::path::PathBuf;

use proc_runner::RunnerError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A supplied path does not exist.
    #[error("File does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    /// A supplied path exists but is not a regular file.
    #[error("This is not a regular file: {}", .0.display())]
    NotRegularFile(PathBuf),

    /// A child process failed or produced no usable output.
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// The two programs disagree on one input line.
    #[error(
        "Output mismatch on line {line} of file '{file}':\n\tProgram {program} returned: '{program_answer}'\n\tReference {reference} returned: '{reference_answer}'"
    )]
    Mismatch {
        file: String,
        line: usize,
        program: String,
        program_answer: String,
        reference: String,
        reference_answer: String,
    },

    /// The inputs file could not be read.
    #[error("Failed to read inputs file: {0}")]
    Io(#[from] std::io::Error),
}
