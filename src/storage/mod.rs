// src/storage/mod.rs
// =============================================================================
// This module audits a local mirror storage directory.
//
// Expected layout:
//   <base>/github.com/<owner>/<repo>
//   <base>/gitlab.com/...
//
// Anything at the root without a dot in its name is not a host directory and
// should go. Under github.com, "<repo>.git" directories should be renamed to
// "<repo>", or removed when "<repo>" already exists.
//
// Nothing here changes the filesystem. snapshot.rs reads the directory once,
// and plan.rs turns that snapshot into shell commands for a human to review.
// =============================================================================

mod plan;
mod snapshot;

pub use plan::{plan, render};
pub use snapshot::StorageSnapshot;
