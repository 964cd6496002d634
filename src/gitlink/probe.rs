// src/gitlink/probe.rs
// =============================================================================
// This module checks if a repository is alive by requesting its web page.
//
// Key functionality:
// - Makes exactly one HTTP GET per link, with a fixed timeout and no retry
// - Does NOT follow redirects: a moved repository answers 301, which must not
//   be mistaken for a live page
// - A link is alive only if the status is 200 AND the host marker is in the
//   body (see hosts.rs)
//
// Every failure (network error, non-200 status, missing marker) comes back as
// a ProbeFailure value. Nothing here returns early out of the batch.
//
// Rust concepts:
// - thiserror: derives Display and Error for our failure enum
// - #[from]: lets `?` turn a reqwest::Error into ProbeFailure::Transport
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::hosts::marker_for;
use crate::config::USER_AGENT;

// Why a probe could not prove a repository alive.
//
// All three variants end up in the "unavailable" bucket. The distinction is
// only kept for the JSON report and the logs.
#[derive(Debug, Error)]
pub enum ProbeFailure {
    /// Timeout, DNS failure, refused or reset connection, unreadable body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any status other than 200, redirects included
    #[error("HTTP {}", .0.as_u16())]
    HttpNonOk(StatusCode),

    /// 200, but the host's marker is not in the page
    #[error("marker {0:?} not found in page")]
    MarkerAbsent(&'static str),
}

// Holds one HTTP client shared by every probe (connection pooling).
//
// Client is reference counted internally, so cloning a LinkProber is cheap.
#[derive(Debug, Clone)]
pub struct LinkProber {
    client: Client,
}

impl LinkProber {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    // Returns Ok(()) when the repository page is live.
    pub async fn probe(&self, url: &str) -> Result<(), ProbeFailure> {
        let result = self.fetch_and_match(url).await;

        match &result {
            Ok(()) => debug!(url, "repository alive"),
            Err(ProbeFailure::Transport(e)) => warn!(url, error = %e, "probe failed"),
            Err(reason) => debug!(url, %reason, "repository unavailable"),
        }

        result
    }

    async fn fetch_and_match(&self, url: &str) -> Result<(), ProbeFailure> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeFailure::HttpNonOk(status));
        }

        let body = response.text().await?;
        let marker = marker_for(url);
        if marker.found_in(&body) {
            Ok(())
        } else {
            Err(ProbeFailure::MarkerAbsent(marker.needle))
        }
    }
}
