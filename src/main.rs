//! `nilakkal` CLI - strip black backgrounds and serve the status API.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nilakkal::server::DEFAULT_ADDR;
use nilakkal::strip::DEFAULT_THRESHOLD;
use nilakkal::{Server, StripConfig, Stripper};

/// Nilakkal parking backend tools.
#[derive(Parser, Debug)]
#[command(name = "nilakkal")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make near-black pixels fully transparent.
    Strip {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path. Must be .png or .webp to keep transparency.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Pixels with red, green and blue all below this value are stripped.
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_THRESHOLD,
            allow_negative_numbers = true,
            value_name = "INT"
        )]
        threshold: i32,
    },

    /// Serve the health endpoints over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(short, long, default_value = DEFAULT_ADDR, value_name = "HOST:PORT")]
        addr: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("nilakkal={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(args.command) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Strip {
            input,
            output,
            threshold,
        } => strip(&input, &output, threshold),
        Command::Serve { addr } => serve(&addr),
    }
}

fn strip(input: &Path, output: &Path, threshold: i32) -> Result<()> {
    let stripper =
        Stripper::new(StripConfig { threshold }).context("Failed to configure stripper")?;

    stripper
        .process(input, output)
        .with_context(|| format!("Failed to strip background from {}", input.display()))?;

    println!("Successfully saved to {}", output.display());

    Ok(())
}

fn serve(addr: &str) -> Result<()> {
    let server = Server::bind(addr).context("Failed to configure server")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(server.serve())
        .with_context(|| format!("Server on {addr} failed"))
}
