//! Subprocess execution for the differential-testing harness.
//!
//! A program is executed once per input line: the line is written to the
//! child's stdin, stdin is closed, and both output streams are captured
//! until the child exits. The child's *answer* is the last non-blank line
//! of its stdout. Spawning sits behind the [`ProcessExecutor`] trait so the
//! comparison driver can be exercised with scripted results instead of real
//! processes.

use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub mod error;
pub use crate::error::RunnerError;

/// Captured result of one child-process execution.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the child, or `None` on abnormal termination.
    pub exit_code: Option<i32>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Capability trait for executing a program with one line of input.
///
/// The harness only ever needs this one operation, so tests can substitute
/// an implementation that returns scripted [`RunResult`]s.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    async fn run(&self, program: &Path, input: &str) -> io::Result<RunResult>;
}

/// Executor that spawns real child processes.
pub struct SystemExecutor;

#[async_trait]
impl ProcessExecutor for SystemExecutor {
    async fn run(&self, program: &Path, input: &str) -> io::Result<RunResult> {
        log::debug!("spawning {} with input '{}'", program.display(), input);

        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits without reading its stdin is judged on its
            // exit status and output alone, so a broken pipe here is fine.
            match stdin.write_all(input.as_bytes()).await {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => return Err(err),
            }
        }

        let output = child.wait_with_output().await?;

        Ok(RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Runs `program` on one input line and extracts its answer.
///
/// Fails with [`RunnerError::SubprocessFailure`] if the child exits with a
/// non-zero or abnormal status, and with [`RunnerError::EmptyOutput`] if the
/// child succeeds without printing anything usable.
pub async fn run_program(
    executor: &dyn ProcessExecutor,
    program: &Path,
    input: &str,
) -> Result<String, RunnerError> {
    let result = executor
        .run(program, input)
        .await
        .map_err(|source| RunnerError::Spawn {
            program: display_name(program),
            source,
        })?;

    if !result.success() {
        return Err(RunnerError::SubprocessFailure {
            program: display_name(program),
            input: input.to_string(),
            exit_code: result.exit_code.unwrap_or(-1),
            stdout: result.stdout,
            stderr: result.stderr,
        });
    }

    extract_answer(&result.stdout).ok_or_else(|| RunnerError::EmptyOutput {
        program: display_name(program),
        input: input.to_string(),
    })
}

/// The file name of a program path, used in diagnostics.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The answer contract: the last line of stdout that is non-empty after
/// trimming, with surrounding whitespace stripped.
pub fn extract_answer(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
