// src/gitlink/mod.rs
// =============================================================================
// This module contains all git link checking logic.
//
// Submodules:
// - source: Reads and normalizes the list of candidate links
// - validate: Cheap syntactic checks that need no network
// - hosts: Which marker proves a repository page rendered, per host
// - probe: Makes the HTTP request and looks for the marker
// - partition: Runs every check at once and sorts results into buckets
// - output: Writes each bucket to its own file
// =============================================================================

mod hosts;
mod output;
mod partition;
mod probe;
mod source;
mod validate;

pub use output::write_buckets;
pub use partition::{classify_all, Buckets, LinkReport, Verdict};
pub use probe::LinkProber;
pub use source::read_links;
