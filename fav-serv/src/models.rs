// Request/response bodies for the HTTP surface

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPlayerRequest {
    pub riot_id: Option<String>,
}

/// Favorite payload as posted by the frontend, a `PlayerView` with every
/// field optional so missing ones can be reported instead of rejected
/// by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritePayload {
    pub puuid: Option<String>,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    pub summoner_name: Option<String>,
    pub profile_icon_id: Option<i64>,
    pub profile_icon_url: Option<String>,
    pub summoner_level: Option<i64>,
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub league_points: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
}

impl FavoritePayload {
    /// Names of required fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("puuid", &self.puuid),
            ("gameName", &self.game_name),
            ("tagLine", &self.tag_line),
            ("profileIconUrl", &self.profile_icon_url),
        ];
        required
            .iter()
            .filter(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoritesQuery {
    pub sort: Option<String>,
}

/// Query of the legacy `get-user-info` endpoint
#[derive(Debug, Deserialize)]
pub struct UserInfoQuery {
    pub riot_id: Option<String>,
    pub tag_line: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub riot_id: String,
    pub profile_icon_link: String,
    pub summoner_level: i64,
    pub league: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub asset_version: String,
    pub upstream_configured: bool,
}
