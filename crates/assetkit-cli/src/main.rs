//! assetkit CLI - Inspect the embedded asset bundle or a directory

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{cat, info, list};

#[derive(Parser)]
#[command(name = "assetkit")]
#[command(about = "Inspect the asset bundle compiled into the assetkit shim", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bundled asset paths
    List {
        /// Read a directory instead of the embedded bundle
        #[arg(long)]
        dir: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show MIME type, size and hash of an asset
    Info {
        /// Asset path relative to the bundle root
        path: String,

        /// Read a directory instead of the embedded bundle
        #[arg(long)]
        dir: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Write an asset's raw bytes to stdout
    Cat {
        /// Asset path relative to the bundle root
        path: String,

        /// Read a directory instead of the embedded bundle
        #[arg(long)]
        dir: Option<String>,
    },
}

fn main() -> Result<()> {
    assetkit_ffi::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { dir, format } => list::run(dir.as_deref(), &format),
        Commands::Info { path, dir, format } => info::run(&path, dir.as_deref(), &format),
        Commands::Cat { path, dir } => cat::run(&path, dir.as_deref()),
    }
}
