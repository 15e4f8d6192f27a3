//! Data Dragon is Riot's public static-asset CDN. Nothing here needs an API key.

use crate::{execute_json, parse_url, Handle, NotFoundPolicy, Result, DEFAULT_TIMEOUT};
use std::time::Duration;

pub const VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
pub const CDN_URL: &str = "https://ddragon.leagueoflegends.com/cdn";
/// Used whenever the live version list cannot be read
pub const FALLBACK_VERSION: &str = "14.9.1";

pub struct DataDragon {
    handle: Handle,
    versions_url: String,
}

impl DataDragon {
    pub fn new() -> Result<Self> {
        Self::with_versions_url(VERSIONS_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_versions_url(versions_url: &str, timeout: Duration) -> Result<Self> {
        let web = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            handle: Handle { web },
            versions_url: versions_url.to_string(),
        })
    }

    /// Newest asset version, or [`FALLBACK_VERSION`] when the lookup fails for any reason.
    pub async fn latest_version(&self) -> String {
        match self.fetch_versions().await {
            Ok(versions) => match pick_latest(versions) {
                Some(version) => version,
                None => {
                    tracing::warn!("data dragon returned no versions, using {}", FALLBACK_VERSION);
                    FALLBACK_VERSION.to_string()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "could not fetch data dragon versions, using {}: {}",
                    FALLBACK_VERSION,
                    e
                );
                FALLBACK_VERSION.to_string()
            }
        }
    }

    async fn fetch_versions(&self) -> Result<Vec<String>> {
        let request = reqwest::Request::new(reqwest::Method::GET, parse_url(&self.versions_url)?);
        execute_json(&self.handle, request, NotFoundPolicy::Status).await
    }
}

/// The list is ordered newest first
fn pick_latest(versions: Vec<String>) -> Option<String> {
    versions.into_iter().next().filter(|v| !v.trim().is_empty())
}

pub fn profile_icon_url(version: &str, profile_icon_id: i64) -> String {
    format!(
        "{}/{}/img/profileicon/{}.png",
        CDN_URL, version, profile_icon_id
    )
}
