use crate::{execute_json, parse_url, Handle, NotFoundPolicy, Queue, Result};
use serde::{Deserialize, Serialize};

pub struct GetLeagueEntriesRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl GetLeagueEntriesRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Result<Self> {
        Ok(Self {
            handle,
            request: reqwest::Request::new(reqwest::Method::GET, parse_url(&url)?),
        })
    }
    pub fn url(&self) -> &reqwest::Url {
        self.request.url()
    }
    pub async fn send(self) -> Result<Vec<LeagueEntry>> {
        execute_json(&self.handle, self.request, NotFoundPolicy::Status).await
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: Option<String>,
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
}

/// First entry for `queue`, in upstream order
pub fn find_queue(entries: &[LeagueEntry], queue: Queue) -> Option<&LeagueEntry> {
    entries.iter().find(|e| e.queue_type == queue.queue_type())
}
