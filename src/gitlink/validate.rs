// src/gitlink/validate.rs
// =============================================================================
// Syntactic checks that run before any network request.
//
// A link to a file inside a repository ("/blob/", "/master/"), a link with a
// fragment, or a link with whitespace in it is not a repository root, so it
// is rejected without being probed.
// =============================================================================

const REJECTED_FRAGMENTS: [&str; 5] = [" ", "\n", "#", "/blob/", "/master/"];

// Schemes that are not served over HTTP. These are trusted without a probe.
const PROTOCOL_ONLY_SCHEMES: [&str; 2] = ["git://", "svn://"];

pub fn is_url_valid(url: &str) -> bool {
    !REJECTED_FRAGMENTS.iter().any(|fragment| url.contains(fragment))
}

pub fn is_protocol_only(url: &str) -> bool {
    PROTOCOL_ONLY_SCHEMES.iter().any(|scheme| url.contains(scheme))
}
