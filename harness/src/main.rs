use anyhow::Result;
use clap::Parser;

use harness::{Args, check_outputs};
use proc_runner::SystemExecutor;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::logger::init_from_env();

    if let Err(err) = run(&args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    args.validate()?;
    check_outputs(
        &SystemExecutor,
        &args.inputs_file,
        &args.program_under_test,
        &args.reference_program,
    )
    .await?;
    Ok(())
}
