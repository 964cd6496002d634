// src/config.rs
// =============================================================================
// Fixed settings for the link checker.
//
// The file names below are what other tooling expects to find after a run,
// so they are constants rather than flags. The input path, output directory
// and timeout can be overridden from the command line.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INPUT: &str = "link.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

pub const NOT_VALID_FILE: &str = "url_not_valid.txt";
pub const NOT_AVAILABLE_FILE: &str = "repository_not_available.txt";
pub const CORRECT_LINKS_FILE: &str = "correct_links.txt";

// Sent with every probe so hosts can tell who is asking
pub const USER_AGENT: &str = concat!("gitlink-audit/", env!("CARGO_PKG_VERSION"));

// Everything the `check` subcommand needs, gathered from the CLI
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    pub json: bool,
}

impl CheckConfig {
    pub fn new(input: PathBuf, out_dir: PathBuf, timeout_secs: u64, json: bool) -> Self {
        Self {
            input,
            out_dir,
            timeout: Duration::from_secs(timeout_secs),
            json,
        }
    }

    pub fn not_valid_path(&self) -> PathBuf {
        self.out_dir.join(NOT_VALID_FILE)
    }

    pub fn not_available_path(&self) -> PathBuf {
        self.out_dir.join(NOT_AVAILABLE_FILE)
    }

    pub fn correct_links_path(&self) -> PathBuf {
        self.out_dir.join(CORRECT_LINKS_FILE)
    }
}
