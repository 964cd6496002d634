// src/gitlink/hosts.rs
// =============================================================================
// Markers that prove a repository page actually rendered.
//
// Hosts answer 200 for plenty of pages that are not a live repository (login
// walls, "this repository has moved" pages, search results), so a 200 alone
// is not enough. Each known host has a string that only shows up in the page
// chrome of a real repository. Unknown hosts fall back to looking for the
// word "clone" anywhere in the page, ignoring case.
//
// These strings follow the hosts' front-end markup and will need updating
// when that markup changes.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub needle: &'static str,
    pub case_insensitive: bool,
}

impl Marker {
    const fn exact(needle: &'static str) -> Self {
        Self { needle, case_insensitive: false }
    }

    // Is the marker present in the page body?
    pub fn found_in(&self, body: &str) -> bool {
        if self.case_insensitive {
            body.to_lowercase().contains(&self.needle.to_lowercase())
        } else {
            body.contains(self.needle)
        }
    }
}

// Checked in order, the first host substring found in the URL wins
const HOST_MARKERS: [(&str, Marker); 3] = [
    ("github.com", Marker::exact("R55ab")),
    ("gitlab.com", Marker::exact("project-code-holder gl-w-full sm:gl-w-auto")),
    ("bitbucket.org", Marker::exact("css-1ianfu6")),
];

const DEFAULT_MARKER: Marker = Marker {
    needle: "clone",
    case_insensitive: true,
};

pub fn marker_for(url: &str) -> Marker {
    HOST_MARKERS
        .iter()
        .find(|(host, _)| url.contains(host))
        .map(|(_, marker)| *marker)
        .unwrap_or(DEFAULT_MARKER)
}
