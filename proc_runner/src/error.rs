//! Error types for subprocess execution.

/// Errors that can occur while running a program against one input line.
///
/// Every variant is fatal to the comparison run: the harness never retries a
/// failed child and never tolerates a silent one.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The child could not be spawned or its streams could not be driven.
    #[error("Failed to run program {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child exited with a failing status. Both captured streams are
    /// carried so the diagnostic is self-contained.
    #[error(
        "Program {program} exited with error (code {exit_code}) on input '{input}':\n---STDOUT---\n{stdout}\n---STDERR---\n{stderr}"
    )]
    SubprocessFailure {
        program: String,
        input: String,
        /// Exit code, or -1 for abnormal termination (e.g. killed by signal).
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// The child exited successfully but wrote no non-blank line to stdout,
    /// so there is no answer to compare.
    #[error("Program {program} produced no output on input '{input}'")]
    EmptyOutput { program: String, input: String },
}
