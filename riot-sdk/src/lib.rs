pub mod account;
pub mod ddragon;
pub mod league;
pub mod summoner;

use crate::summoner::Region as SummonerRegion;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use self::account::AccountRegion;

pub type Result<T> = core::result::Result<T, Error>;

/// Per-call bound applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum Error {
    HttpError(reqwest::Error),
    /// The call did not finish within the client timeout
    Timeout,
    /// Only produced by account resolution; every other 404 is a `Status`
    NotFound,
    Status {
        code: u16,
        body: String,
    },
    Decode(String),
    InvalidUrl(String),
    InvalidApiKey,
}

impl Error {
    /// Upstream status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound => Some(404),
            Error::Status { code, .. } => Some(*code),
            Error::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::HttpError(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Error::HttpError(e) => return e.fmt(f),
            Error::Timeout => "Riot API request timed out",
            Error::NotFound => "Account not found",
            Error::Status { code, .. } => match *code {
                400 => "Bad request to Riot API (likely an error on their end)",
                401 => "Unauthorized",
                403 => "API key is invalid",
                404 => "Riot API resource not found",
                429 => "Too many requests",
                500..=599 => "Riot API error",
                _ => return write!(f, "Riot API returned status {}", code),
            },
            Error::Decode(e) => return write!(f, "Malformed Riot API response: {}", e),
            Error::InvalidUrl(e) => return write!(f, "Invalid Riot API url: {}", e),
            Error::InvalidApiKey => "API key is not a valid header value",
        };
        write!(f, "{}", msg)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::HttpError(e)
        }
    }
}

/// How a 404 from an endpoint should surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotFoundPolicy {
    Absent,
    Status,
}

pub(crate) fn classify_status(status: StatusCode, body: String, policy: NotFoundPolicy) -> Error {
    match (status, policy) {
        (StatusCode::NOT_FOUND, NotFoundPolicy::Absent) => Error::NotFound,
        _ => Error::Status {
            code: status.as_u16(),
            body,
        },
    }
}

pub(crate) fn parse_url(url: &str) -> Result<reqwest::Url> {
    reqwest::Url::from_str(url).map_err(|e| Error::InvalidUrl(e.to_string()))
}

/// Runs a prepared request and decodes a 2xx JSON body.
pub(crate) async fn execute_json<T: DeserializeOwned>(
    handle: &Handle,
    request: reqwest::Request,
    policy: NotFoundPolicy,
) -> Result<T> {
    let url = request.url().path().to_string();
    let res = handle.web.execute(request).await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        tracing::debug!(path = %url, status = status.as_u16(), "riot api returned an error status");
        return Err(classify_status(status, body, policy));
    }
    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    RankedSolo5x5,
}

impl Queue {
    /// The `queueType` value used by the league endpoints
    pub fn queue_type(&self) -> &'static str {
        match self {
            Queue::RankedSolo5x5 => "RANKED_SOLO_5x5",
        }
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.queue_type())
    }
}

#[derive(Debug)]
pub struct Handle {
    pub web: reqwest::Client,
}

/// Client for the Riot account and League of Legends APIs
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut shared_headers = HeaderMap::new();
        shared_headers.insert("X-Riot-Token", api_key);
        let client = reqwest::Client::builder()
            .default_headers(shared_headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            handle: Arc::new(Handle { web: client }),
        })
    }

    pub fn account(&self, region: AccountRegion) -> account::AccountClient {
        account::AccountClient::new(self.handle.clone(), region)
    }

    pub fn summoner(&self, region: SummonerRegion) -> league::summoner::SummonerClient {
        league::summoner::SummonerClient::new(self.handle.clone(), region)
    }
}

impl Clone for Client {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    I,
    II,
    III,
    IV,
}

#[derive(Debug)]
pub struct PlayerRank {
    division: Division,
    rank: Rank,
    league_points: i64,
}

impl PlayerRank {
    /// Returns `None` for unranked players or tiers this client does not know.
    pub fn parse_str(division: &str, rank: &str, league_points: i64) -> Option<Self> {
        let division = match division.to_ascii_uppercase().as_str() {
            "IRON" => Division::Iron,
            "BRONZE" => Division::Bronze,
            "SILVER" => Division::Silver,
            "GOLD" => Division::Gold,
            "PLATINUM" => Division::Platinum,
            "EMERALD" => Division::Emerald,
            "DIAMOND" => Division::Diamond,
            "MASTER" => Division::Master,
            "GRANDMASTER" => Division::Grandmaster,
            "CHALLENGER" => Division::Challenger,
            _ => return None,
        };

        // apex tiers have a single division and upstream may send it empty
        let rank = match rank {
            "I" => Rank::I,
            "II" => Rank::II,
            "III" => Rank::III,
            "IV" => Rank::IV,
            _ if Self::is_apex(division) => Rank::I,
            _ => return None,
        };

        Some(PlayerRank {
            division,
            rank,
            league_points,
        })
    }

    fn is_apex(division: Division) -> bool {
        matches!(
            division,
            Division::Master | Division::Grandmaster | Division::Challenger
        )
    }

    // Each division inside a tier is worth 100 points and each tier 400.
    // Apex tiers share one floor and are ordered by LP alone.
    pub fn to_points(&self) -> i64 {
        let division_points: i64 = match &self.division {
            Division::Iron => 0,
            Division::Bronze => 400,
            Division::Silver => 800,
            Division::Gold => 1200,
            Division::Platinum => 1600,
            Division::Emerald => 2000,
            Division::Diamond => 2400,
            Division::Master => 2800,
            Division::Grandmaster => 2800,
            Division::Challenger => 2800,
        };

        let rank_points: i64 = match &self.rank {
            Rank::I => 300,
            Rank::II => 200,
            Rank::III => 100,
            Rank::IV => 0,
        };

        if Self::is_apex(self.division) {
            division_points.saturating_add(self.league_points)
        } else {
            (division_points + rank_points).saturating_add(self.league_points)
        }
    }
}

trait ServiceUrl
where
    Self: Display,
{
    fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self)
    }
}
