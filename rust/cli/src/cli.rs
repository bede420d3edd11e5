//! Command-line argument definitions for the Twenty-One CLI.
//!
//! This module holds the clap parser types. Argument parsing is kept separate
//! from command handling so that handlers can be tested with injected streams.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `twentyone` binary.
#[derive(Parser)]
#[command(
    name = "twentyone",
    version,
    about = "Twenty-One card game for the terminal"
)]
pub struct TwentyOneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Play interactive rounds against the house
    Play {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Force ASCII suit letters instead of Unicode symbols
        #[arg(long)]
        ascii: bool,
        /// Pacing delay in milliseconds between announcements
        #[arg(long)]
        pacing_ms: Option<u64>,
    },
    /// Deal one opening table and exit
    Deal {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration with value sources
    Cfg,
}
