use crate::{execute_json, parse_url, Handle, NotFoundPolicy, Result, ServiceUrl};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRegion {
    AMERICAS,
    ASIA,
    EUROPE,
    SEA,
}

impl Display for AccountRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let region = match self {
            AccountRegion::AMERICAS => "americas",
            AccountRegion::ASIA => "asia",
            AccountRegion::EUROPE => "europe",
            AccountRegion::SEA => "sea",
        };
        write!(f, "{}", region)
    }
}
impl ServiceUrl for AccountRegion {}

impl FromStr for AccountRegion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "americas" => Ok(AccountRegion::AMERICAS),
            "asia" => Ok(AccountRegion::ASIA),
            "europe" => Ok(AccountRegion::EUROPE),
            "sea" => Ok(AccountRegion::SEA),
            other => Err(format!("unknown account region `{}`", other)),
        }
    }
}

pub struct AccountClient {
    handle: std::sync::Arc<Handle>,
    region: AccountRegion,
}
impl AccountClient {
    pub fn new(handle: std::sync::Arc<Handle>, region: AccountRegion) -> Self {
        Self { handle, region }
    }
    /// Get the account (and its PUUID) by Riot ID (gameName + tagLine)
    pub fn get_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<GetByRiotIdRequestBuilder> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.region.base_url(),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );
        GetByRiotIdRequestBuilder::new(self.handle.clone(), url)
    }
}

pub struct GetByRiotIdRequestBuilder {
    request: reqwest::Request,
    handle: std::sync::Arc<Handle>,
}

impl GetByRiotIdRequestBuilder {
    pub fn new(handle: std::sync::Arc<Handle>, url: String) -> Result<Self> {
        Ok(Self {
            handle,
            request: reqwest::Request::new(reqwest::Method::GET, parse_url(&url)?),
        })
    }
    pub fn url(&self) -> &reqwest::Url {
        self.request.url()
    }
    /// A 404 here means the Riot ID does not exist and surfaces as `Error::NotFound`
    pub async fn send(self) -> Result<AccountResponse> {
        execute_json(&self.handle, self.request, NotFoundPolicy::Absent).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub puuid: String,
    /// Canonical spelling, may differ in case from what was searched
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}
