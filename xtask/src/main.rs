use anyhow::Result;
use clap::{Parser, Subcommand};
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for trigfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build across the feature matrix
    Build,
    /// Test across the feature matrix
    Test,
    Clippy,
    Fmt,
    /// fmt, then clippy
    Analyze,
    /// Criterion benchmarks against rustfft
    Bench,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Build => {
            for set in detect_matrix() {
                run(build_command(&set))?;
            }
        }
        Commands::Test => {
            for set in detect_matrix() {
                run(test_command(&set))?;
            }
        }
        Commands::Clippy => run(clippy_command())?,
        Commands::Fmt => run(fmt_command())?,
        Commands::Analyze => {
            run(fmt_command())?;
            run(clippy_command())?;
        }
        Commands::Bench => run(bench_command())?,
    }
    Ok(())
}
