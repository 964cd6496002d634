// src/gitlink/output.rs
// =============================================================================
// Writes the result buckets to disk.
//
// Three files, always written, always overwritten:
//   url_not_valid.txt              "<url>.git"
//   repository_not_available.txt   "<url>.git"
//   correct_links.txt              "<url>.git",
//
// The trailing comma in correct_links.txt lets the file be pasted straight
// into a list literal in another source file.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::partition::Buckets;
use crate::config::CheckConfig;

pub fn write_buckets(config: &CheckConfig, buckets: &Buckets) -> Result<()> {
    std::fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("Failed to create output directory {}", config.out_dir.display())
    })?;

    write_lines(&config.not_valid_path(), &quoted(buckets.invalid.iter()))?;
    write_lines(&config.not_available_path(), &quoted(buckets.unavailable.iter()))?;
    write_lines(&config.correct_links_path(), &list_entries(buckets.correct_links()))?;

    Ok(())
}

// `"<url>.git"` per line
fn quoted<'a>(links: impl Iterator<Item = &'a String>) -> String {
    links.map(|link| format!("\"{link}.git\"\n")).collect()
}

// `"<url>.git",` per line
fn list_entries<'a>(links: impl Iterator<Item = &'a String>) -> String {
    links.map(|link| format!("\"{link}.git\",\n")).collect()
}

fn write_lines(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), lines = contents.lines().count(), "wrote results");
    Ok(())
}
