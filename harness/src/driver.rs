//! The comparison driver: one pass over the inputs file, two child runs per
//! non-blank line, fail-fast on the first disagreement.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use proc_runner::{ProcessExecutor, display_name, run_program};

use crate::error::HarnessError;

/// Runs every non-blank line of `inputs_file` through both programs and
/// compares their answers.
///
/// Line numbers are 1-based over *all* lines of the file, so a diagnostic
/// always points at the line as seen in an editor even when blank lines were
/// skipped. The program under test always runs before the reference, and the
/// two runs for a line are strictly sequential.
pub async fn check_outputs(
    executor: &dyn ProcessExecutor,
    inputs_file: &Path,
    program: &Path,
    reference: &Path,
) -> Result<(), HarnessError> {
    let file = File::open(inputs_file)?;
    let mut compared = 0usize;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let raw = line?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }

        let program_answer = run_program(executor, program, input).await?;
        let reference_answer = run_program(executor, reference, input).await?;

        if program_answer != reference_answer {
            return Err(HarnessError::Mismatch {
                file: display_name(inputs_file),
                line: line_number,
                program: display_name(program),
                program_answer,
                reference: display_name(reference),
                reference_answer,
            });
        }

        log::debug!("line {line_number}: '{input}' -> '{program_answer}' (match)");
        compared += 1;
    }

    log::info!(
        "{} agreed with {} on {} input line(s)",
        display_name(program),
        display_name(reference),
        compared
    );
    Ok(())
}
