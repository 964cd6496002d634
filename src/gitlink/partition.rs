// src/gitlink/partition.rs
// =============================================================================
// Runs the checks and sorts every link into exactly one bucket.
//
// Per link:
//   invalid syntax      -> Invalid      (never touches the network)
//   git:// or svn://    -> SshOrSvn     (trusted, never probed)
//   probe succeeded     -> Alive
//   probe failed        -> Unavailable
//
// All probes are launched at once and awaited together. Each task returns its
// own LinkReport, and bucketing happens afterwards on a single thread, so no
// shared state or locks are involved.
//
// Rust concepts:
// - Futures are lazy: mapping links to classify() only builds them,
//   join_all is what drives them all at once
// - Borrowing: every future borrows the same LinkProber, no cloning needed
// =============================================================================

use futures::future::join_all;
use serde::Serialize;

use super::probe::LinkProber;
use super::validate::{is_protocol_only, is_url_valid};

// The outcome for one link. Exactly one applies to every input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Not a repository root (file link, fragment, whitespace)
    Invalid,
    /// git:// or svn:// link, trusted without a request
    SshOrSvn,
    /// Page answered 200 and carried the host marker
    Alive,
    /// Request failed, non-200 status, or marker missing
    Unavailable,
}

// The result of checking a single link
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    /// The link as read from the input, without ".git"
    pub url: String,
    /// Which bucket the link lands in
    pub verdict: Verdict,
    /// Why an Unavailable link failed, for the JSON report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LinkReport {
    fn new(url: String, verdict: Verdict) -> Self {
        Self { url, verdict, reason: None }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.verdict, Verdict::Alive | Verdict::SshOrSvn)
    }
}

pub async fn classify(prober: &LinkProber, url: String) -> LinkReport {
    if !is_url_valid(&url) {
        return LinkReport::new(url, Verdict::Invalid);
    }

    if is_protocol_only(&url) {
        return LinkReport::new(url.replace(' ', ""), Verdict::SshOrSvn);
    }

    match prober.probe(&url).await {
        Ok(()) => LinkReport::new(url, Verdict::Alive),
        Err(reason) => LinkReport {
            url,
            verdict: Verdict::Unavailable,
            reason: Some(reason.to_string()),
        },
    }
}

// Checks every link concurrently. Reports come back in input order no matter
// which request finished first, which keeps the output files stable.
pub async fn classify_all(prober: &LinkProber, links: Vec<String>) -> Vec<LinkReport> {
    let tasks = links.into_iter().map(|url| classify(prober, url));
    join_all(tasks).await
}

// The four result buckets, each in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub invalid: Vec<String>,
    pub unavailable: Vec<String>,
    pub alive: Vec<String>,
    pub ssh: Vec<String>,
}

impl Buckets {
    pub fn from_reports(reports: &[LinkReport]) -> Self {
        let mut buckets = Buckets::default();
        for report in reports {
            let bucket = match report.verdict {
                Verdict::Invalid => &mut buckets.invalid,
                Verdict::Unavailable => &mut buckets.unavailable,
                Verdict::Alive => &mut buckets.alive,
                Verdict::SshOrSvn => &mut buckets.ssh,
            };
            bucket.push(report.url.clone());
        }
        buckets
    }

    // Probed-alive links first, then the trusted git:// and svn:// ones
    pub fn correct_links(&self) -> impl Iterator<Item = &String> {
        self.alive.iter().chain(self.ssh.iter())
    }

    pub fn has_failures(&self) -> bool {
        !self.invalid.is_empty() || !self.unavailable.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. join_all vs buffer_unordered
//    - buffer_unordered(N) caps how many futures run at once and yields
//      results in completion order
//    - join_all starts every future and returns results in the order the
//      futures were given, which is what keeps our output files stable
//
// 2. Why no Mutex around the buckets?
//    - Each future owns its LinkReport and just returns it
//    - The buckets are filled after join_all finishes, on one thread
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;
    use wiremock::{
        matchers::{any, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn prober() -> LinkProber {
        LinkProber::new(Duration::from_secs(5)).unwrap()
    }

    // Fails the test on drop if any request reaches the server
    async fn forbid_requests(server: &MockServer) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("clone"))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_invalid_links_never_hit_network() {
        let server = MockServer::start().await;
        forbid_requests(&server).await;

        let links = vec![
            format!("{}/a/b/blob/main/x.rs", server.uri()),
            format!("{}/a/b/tree/master/src", server.uri()),
            format!("{}/a/b#readme", server.uri()),
            format!("{}/a/b c", server.uri()),
        ];
        let reports = classify_all(&prober(), links).await;
        assert!(reports.iter().all(|r| r.verdict == Verdict::Invalid));
    }

    #[tokio::test]
    async fn test_protocol_links_trusted_without_probe() {
        let prober = prober();
        let reports = classify_all(
            &prober,
            vec![
                "git://git.kernel.org/pub/scm/git/git".to_string(),
                "svn://svn.code.sf.net/p/foo/code".to_string(),
            ],
        )
        .await;

        assert!(reports.iter().all(|r| r.verdict == Verdict::SshOrSvn));
        assert_eq!(reports[0].url, "git://git.kernel.org/pub/scm/git/git");
    }

    #[tokio::test]
    async fn test_protocol_link_with_space_is_invalid() {
        // Validation runs before the git:// shortcut
        let reports = classify_all(&prober(), vec!["git://host/a b".to_string()]).await;
        assert_eq!(reports[0].verdict, Verdict::Invalid);
        assert_eq!(reports[0].url, "git://host/a b");
    }

    #[tokio::test]
    async fn test_results_keep_input_order_when_responses_arrive_out_of_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("git clone")
                    .set_delay(Duration::from_millis(800)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("git clone"))
            .mount(&server)
            .await;

        let links = vec![
            format!("{}/slow", server.uri()),
            format!("{}/fast", server.uri()),
        ];
        let first = Buckets::from_reports(&classify_all(&prober(), links.clone()).await);
        let second = Buckets::from_reports(&classify_all(&prober(), links.clone()).await);

        assert_eq!(first.alive, links);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_transport_failure_only_affects_its_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/good/repo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("git clone it"))
            .mount(&server)
            .await;

        let links = vec![
            "http://127.0.0.1:1/dead/repo".to_string(),
            format!("{}/good/repo", server.uri()),
        ];
        let reports = classify_all(&prober(), links).await;

        assert_eq!(reports[0].verdict, Verdict::Unavailable);
        assert!(reports[0].reason.as_deref().unwrap().starts_with("request failed"));
        assert_eq!(reports[1].verdict, Verdict::Alive);
        assert!(reports[1].reason.is_none());
    }

    #[tokio::test]
    async fn test_buckets_are_disjoint_and_cover_input() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/github.com/live/repo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"<i class="R55ab">"#))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/github.com/gone/repo"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let links = vec![
            format!("{}/github.com/live/repo", server.uri()),
            format!("{}/github.com/gone/repo", server.uri()),
            format!("{}/github.com/a/b/blob/x", server.uri()),
            "git://example.org/repo".to_string(),
        ];
        let reports = classify_all(&prober(), links.clone()).await;
        let buckets = Buckets::from_reports(&reports);

        assert_eq!(buckets.alive, vec![links[0].clone()]);
        assert_eq!(buckets.unavailable, vec![links[1].clone()]);
        assert_eq!(buckets.invalid, vec![links[2].clone()]);
        assert_eq!(buckets.ssh, vec![links[3].clone()]);

        let all: Vec<&String> = buckets
            .invalid
            .iter()
            .chain(&buckets.unavailable)
            .chain(buckets.correct_links())
            .collect();
        let unique: HashSet<&String> = all.iter().copied().collect();
        assert_eq!(all.len(), links.len());
        assert_eq!(unique, links.iter().collect::<HashSet<_>>());
        assert!(buckets.has_failures());
    }

    #[test]
    fn test_correct_links_order() {
        let buckets = Buckets {
            alive: vec!["https://a".into(), "https://b".into()],
            ssh: vec!["git://c".into()],
            ..Default::default()
        };
        let order: Vec<&String> = buckets.correct_links().collect();
        assert_eq!(order, vec!["https://a", "https://b", "git://c"]);
        assert!(!buckets.has_failures());
    }

    #[test]
    fn test_report_json_shape() {
        let report = LinkReport::new("git://x/y".into(), Verdict::SshOrSvn);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "git://x/y", "verdict": "ssh_or_svn" }));
        assert!(report.is_ok());
    }
}
