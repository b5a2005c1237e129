//! HTTP client for the profile endpoint.
//!
//! This module provides the `ProfileFetcher` for retrieving the
//! authenticated user's profile with a bearer token. One GET per call,
//! no retries; every failure is reported once to the caller.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client};
use tracing::debug;

use crate::config::Config;
use crate::session::Profile;

use super::FetchError;

/// Transport seam between the session controller and the profile endpoint.
///
/// The controller is generic over this trait so its orchestration (store
/// updates, request coalescing) can be exercised without a network.
pub trait FetchProfile: Send + Sync + 'static {
    /// Retrieve the profile payload authorized by `token`.
    fn fetch(&self, token: &str) -> impl Future<Output = Result<Profile, FetchError>> + Send;
}

/// Fetcher for the profile endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ProfileFetcher {
    client: Client,
    profile_url: String,
}

impl ProfileFetcher {
    /// Create a fetcher for the configured profile endpoint
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            profile_url: config.profile_url.clone(),
        })
    }
}

impl FetchProfile for ProfileFetcher {
    async fn fetch(&self, token: &str) -> Result<Profile, FetchError> {
        debug!(url = %self.profile_url, "fetching profile");

        let response = self
            .client
            .get(&self.profile_url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::from_status(status, &body))
        }
    }
}
