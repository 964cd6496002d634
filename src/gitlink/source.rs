// src/gitlink/source.rs
// =============================================================================
// Reads the list of candidate repository links.
//
// Input format: one URL per line, UTF-8, no header.
//
// Normalization:
// - "\n", "\r\n" and a lone "\r" all end a line
// - surrounding whitespace is trimmed
// - lines shorter than 6 characters are dropped (blank lines, stray tokens)
// - a trailing ".git" is removed, it gets added back when writing results
//
// Duplicates are kept and the order of the file is preserved.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

// Lines must be at least this many characters to count as a link
const MIN_LINK_LEN: usize = 6;

pub fn read_links(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read link list {}", path.display()))?;
    Ok(parse_links(&text))
}

pub fn parse_links(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINK_LEN)
        .map(|line| line.strip_suffix(".git").unwrap_or(line).to_string())
        .collect()
}
