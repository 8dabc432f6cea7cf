use std::path::PathBuf;

use audiotica_core::PageKey;
use clap::{Parser, Subcommand};

/// Audiotica: headless driver for the application core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Simple ping command for checking the binary starts
    #[arg(long)]
    pub ping: bool,

    /// Settings file (.json, .toml, .yaml); defaults to ./audiotica.toml when present
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG and the settings file
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed the collection with the built-in sample library
    #[arg(long)]
    pub sample_library: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the application, show the first page, then shut down
    Launch {
        /// Page to open instead of the configured initial page
        #[arg(long)]
        page: Option<PageKey>,
        /// Argument forwarded to the first page
        #[arg(long)]
        arg: Option<String>,
    },
    /// Resolve the view model of a page and print its summary
    Locate {
        /// The page whose view model to resolve
        page: PageKey,
        /// Resolve through the process-wide accessor without an installed
        /// application (design-time kernel)
        #[arg(long)]
        design_time: bool,
    },
    /// List the navigable pages
    Pages,
    /// List the types registered in the application kernel
    Registrations,
}
