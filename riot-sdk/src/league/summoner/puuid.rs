use crate::{execute_json, parse_url, Handle, NotFoundPolicy, Result};
use serde::{Deserialize, Serialize};

pub struct GetByPuuidRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl GetByPuuidRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Result<Self> {
        Ok(Self {
            handle,
            request: reqwest::Request::new(reqwest::Method::GET, parse_url(&url)?),
        })
    }
    pub fn url(&self) -> &reqwest::Url {
        self.request.url()
    }
    /// A resolved account is expected to have a summoner, so 404 stays a status error
    pub async fn send(self) -> Result<SummonerResponse> {
        execute_json(&self.handle, self.request, NotFoundPolicy::Status).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerResponse {
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default = "default_level")]
    pub summoner_level: i64,
    /// Legacy summoner name, no longer sent for most accounts
    pub name: Option<String>,
}

fn default_level() -> i64 {
    1
}
