//! Command-line surface and pre-flight path validation.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::HarnessError;

/// Checks that two programs produce identical answers for every input line.
#[derive(Parser, Debug)]
#[command(name = "compare-outputs", version, about)]
pub struct Args {
    /// Path to the program under test
    #[arg(long = "put", value_name = "PATH")]
    pub program_under_test: PathBuf,

    /// Path to the trusted reference program
    #[arg(long = "ref", value_name = "PATH")]
    pub reference_program: PathBuf,

    /// Path to the newline-delimited inputs file
    #[arg(long = "inputs", value_name = "PATH")]
    pub inputs_file: PathBuf,
}

impl Args {
    /// Validates all three paths, in the order they would be used.
    ///
    /// Runs before any subprocess is spawned; the first bad path aborts the
    /// run, so a broken `--put` is reported without ever touching the
    /// reference program or the inputs file.
    pub fn validate(&self) -> Result<(), HarnessError> {
        require_regular_file(&self.program_under_test)?;
        require_regular_file(&self.reference_program)?;
        require_regular_file(&self.inputs_file)?;
        Ok(())
    }
}

fn require_regular_file(path: &Path) -> Result<(), HarnessError> {
    if !path.exists() {
        return Err(HarnessError::MissingFile(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(HarnessError::NotRegularFile(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_with_put(put: PathBuf, dir: &Path) -> Args {
        let ok = dir.join("ok");
        fs::write(&ok, b"x").unwrap();
        Args {
            program_under_test: put,
            reference_program: ok.clone(),
            inputs_file: ok,
        }
    }

    #[test]
    fn test_all_paths_valid() {
        let temp = tempdir().unwrap();
        let put = temp.path().join("put");
        fs::write(&put, b"x").unwrap();

        let args = args_with_put(put, temp.path());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let temp = tempdir().unwrap();
        let args = args_with_put(temp.path().join("nope"), temp.path());

        let err = args.validate().unwrap_err();
        assert!(matches!(err, HarnessError::MissingFile(_)));
        assert!(err.to_string().contains("File does not exist"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_directory_is_not_a_regular_file() {
        let temp = tempdir().unwrap();
        let args = args_with_put(temp.path().to_path_buf(), temp.path());

        let err = args.validate().unwrap_err();
        assert!(matches!(err, HarnessError::NotRegularFile(_)));
        assert!(err.to_string().contains("This is not a regular file"));
    }
}
