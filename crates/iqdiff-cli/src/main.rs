// crates/iqdiff-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(name = "iqdiff-cli")]
#[command(about = "Compare fixed-point I/Q device output against a float reference", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode device I/Q files and print the summed deviation from the reference
    Compare(cmd::compare::CompareArgs),

    /// Decode device I/Q hex files into *_float.txt files
    Decode(cmd::decode::DecodeArgs),

    /// Decode individual 25-bit hex words
    Hex2float(cmd::hex2float::Hex2floatArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iqdiff_core=info,iqdiff_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Hex2float(args) => cmd::hex2float::run(args),
    }
}
