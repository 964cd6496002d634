// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands live here:
// - check: classify every git link in a list as invalid, unavailable or alive
// - clean-storage: print shell commands that would tidy a mirror directory
//
// Every flag of `check` has a default, so running `gitlink-audit check` with
// no flags reads ./link.txt and writes the three result files next to it.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

#[derive(Parser, Debug)]
#[command(
    name = "gitlink-audit",
    version = "0.1.0",
    about = "Check git repository links and audit a mirror storage directory",
    long_about = "gitlink-audit checks a list of git repository URLs and sorts them into \
                  invalid, unavailable and alive buckets. It can also audit a local mirror \
                  storage directory and print the shell commands needed to tidy it up."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a list of git repository links
    ///
    /// Example: gitlink-audit check --input link.txt --out-dir results
    Check {
        /// Newline-delimited file of repository URLs
        #[arg(long, short, default_value = config::DEFAULT_INPUT)]
        input: PathBuf,

        /// Directory the three result files are written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Print the full report as JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },

    /// Print (but never run) shell commands to normalize a storage directory
    ///
    /// Example: gitlink-audit clean-storage -d /data/storage
    CleanStorage {
        /// Base directory of the mirror storage
        #[arg(short = 'd', long = "dir")]
        dir: PathBuf,
    },
}
