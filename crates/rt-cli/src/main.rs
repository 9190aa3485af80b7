//! VRF Route-Target CLI (rtdiff)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use rtdiff::commands;

#[derive(Parser)]
#[command(name = "rtdiff")]
#[command(about = "Parse VRF route-target state from captured device output and diff it against intent")]
#[command(version)]
#[command(long_about = "
Parse VRF route-target configuration from captured device CLI output and
compute the changes needed to reach a desired (intent) state.

Examples:
  rtdiff parse -p ios csr.txt              # Parse captured IOS-XE output
  rtdiff parse -p iosxr xrv.txt            # Parse captured IOS-XR output
  rtdiff diff -p ios -i vrfs.yml csr.txt   # Diff device state against intent
  rtdiff diff -p ios -i vrfs.yml --changes-only csr.txt
  rtdiff version show_ver.txt              # Extract the software version ID
")]
struct Cli {
    /// Enable verbose output
    #[arg(short = 'V', long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse captured VRF configuration into a JSON table
    Parse {
        /// Platform dialect of the captured output (ios or iosxr)
        #[arg(short, long)]
        platform: String,

        /// File holding the captured running-config output
        config: PathBuf,
    },

    /// Diff captured VRF configuration against an intent document
    Diff {
        /// Platform dialect of the captured output (ios or iosxr)
        #[arg(short, long)]
        platform: String,

        /// Intent YAML document with desired route-targets per VRF
        #[arg(short, long)]
        intent: PathBuf,

        /// Omit VRFs that already match intent
        #[arg(long)]
        changes_only: bool,

        /// File holding the captured running-config output
        config: PathBuf,
    },

    /// Extract the software version ID from captured `show version` output
    Version {
        /// File holding the captured `show version` output
        output: PathBuf,
    },
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let output = match &cli.command {
        Commands::Parse { platform, config } => commands::parse_command(platform, config)?,
        Commands::Diff {
            platform,
            intent,
            changes_only,
            config,
        } => commands::diff_command(platform, intent, config, *changes_only)?,
        Commands::Version { output } => commands::version_command(output)?,
    };

    println!("{}", output);
    Ok(())
}
