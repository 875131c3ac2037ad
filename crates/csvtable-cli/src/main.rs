//! csvtable CLI
//!
//! Compiles a CSV file into a TypeScript module exporting a typed table.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csvtable")]
#[command(about = "Compile a CSV file into a TypeScript table constant", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file to read; the first row is the header
    input: PathBuf,

    /// TypeScript file to write (overwritten)
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> csvtable_core::Result<()> {
    let cli = Cli::parse();

    log::debug!("converting {} -> {}", cli.input.display(), cli.output.display());
    let summary = csvtable_core::convert(&cli.input, &cli.output)?;

    println!(
        "Wrote {} records ({} columns) to {}",
        summary.records,
        summary.columns,
        cli.output.display()
    );

    Ok(())
}
