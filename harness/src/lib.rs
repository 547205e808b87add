//! # Harness Library
//!
//! Core logic of the `compare-outputs` binary: resolve and validate the
//! three filesystem arguments, drive every input line through the program
//! under test and the reference program, and report the first disagreement.

pub mod args;
pub mod driver;
pub mod error;

pub use crate::args::Args;
pub use crate::driver::check_outputs;
pub use crate::error::HarnessError;
