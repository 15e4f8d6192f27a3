//! Player lookup: Riot ID -> account -> profile + rank entries -> [`PlayerView`].
//!
//! Every step depends on the PUUID returned by account resolution. Any upstream
//! failure aborts the lookup; a partially filled view is never returned.

use crate::source::PlayerSource;
use riot_sdk::ddragon::profile_icon_url;
use riot_sdk::league::summoner::league::find_queue;
use riot_sdk::Queue;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

pub const RIOT_ID_SEPARATOR: char = '#';
pub const UNRANKED_TIER: &str = fav_db::builders::favorites::UNRANKED_TIER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
    pub summoner_name: String,
    pub profile_icon_id: i64,
    pub profile_icon_url: String,
    pub summoner_level: i64,
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
}

impl PlayerView {
    pub fn riot_id(&self) -> String {
        format!("{}{}{}", self.game_name, RIOT_ID_SEPARATOR, self.tag_line)
    }

    /// `GOLD II - 45 LP`, or `Unranked`
    pub fn league_label(&self) -> String {
        if self.tier == UNRANKED_TIER {
            "Unranked".to_string()
        } else {
            format!("{} {} - {} LP", self.tier, self.rank, self.league_points)
        }
    }
}

#[derive(Debug)]
pub enum LookupError {
    InvalidFormat,
    PlayerNotFound,
    UpstreamFailure { status: Option<u16>, detail: String },
    Timeout,
}

impl std::error::Error for LookupError {}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            LookupError::InvalidFormat => "Invalid Riot ID format. Expected \"gameName#tagLine\".",
            LookupError::PlayerNotFound => "Player not found.",
            LookupError::UpstreamFailure { .. } => "Failed to fetch data from Riot API.",
            LookupError::Timeout => "Riot API did not respond in time.",
        };
        write!(f, "{}", msg)
    }
}

impl LookupError {
    /// Account resolution is the only call whose 404 means the player does not exist.
    fn from_account(e: riot_sdk::Error) -> Self {
        match e {
            riot_sdk::Error::NotFound => LookupError::PlayerNotFound,
            other => Self::from_upstream(other),
        }
    }

    fn from_upstream(e: riot_sdk::Error) -> Self {
        match e {
            riot_sdk::Error::Timeout => LookupError::Timeout,
            riot_sdk::Error::Status { code, body } => LookupError::UpstreamFailure {
                status: Some(code),
                detail: body,
            },
            other => LookupError::UpstreamFailure {
                status: other.status(),
                detail: other.to_string(),
            },
        }
    }
}

/// Splits `gameName#tagLine` on the first separator. Both halves must be non-empty.
pub fn parse_riot_id(raw: &str) -> Result<(String, String), LookupError> {
    match raw.trim().split_once(RIOT_ID_SEPARATOR) {
        Some((game_name, tag_line)) if !game_name.is_empty() && !tag_line.is_empty() => {
            Ok((game_name.to_string(), tag_line.to_string()))
        }
        _ => Err(LookupError::InvalidFormat),
    }
}

pub struct PlayerLookup {
    source: Arc<dyn PlayerSource>,
    asset_version: String,
}

impl PlayerLookup {
    /// `asset_version` is resolved once at startup and never changes afterwards.
    pub fn new(source: Arc<dyn PlayerSource>, asset_version: impl Into<String>) -> Self {
        Self {
            source,
            asset_version: asset_version.into(),
        }
    }

    pub fn asset_version(&self) -> &str {
        &self.asset_version
    }

    pub async fn lookup(&self, raw_riot_id: &str) -> Result<PlayerView, LookupError> {
        let (game_name, tag_line) = parse_riot_id(raw_riot_id)?;
        self.lookup_parts(&game_name, &tag_line).await
    }

    pub async fn lookup_parts(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<PlayerView, LookupError> {
        let account = self
            .source
            .resolve_account(game_name, tag_line)
            .await
            .map_err(LookupError::from_account)?;
        let puuid = account.puuid.as_str();
        tracing::debug!(puuid, "resolved {}#{}", game_name, tag_line);

        // both only need the puuid
        let (profile, entries) = futures::try_join!(
            async {
                self.source
                    .fetch_profile(puuid)
                    .await
                    .map_err(LookupError::from_upstream)
            },
            async {
                self.source
                    .fetch_rank_entries(puuid)
                    .await
                    .map_err(LookupError::from_upstream)
            },
        )?;

        let game_name = account.game_name.unwrap_or_else(|| game_name.to_string());
        let tag_line = account.tag_line.unwrap_or_else(|| tag_line.to_string());
        let solo = find_queue(&entries, Queue::RankedSolo5x5);

        let view = PlayerView {
            puuid: account.puuid.clone(),
            summoner_name: profile.name.unwrap_or_else(|| game_name.clone()),
            game_name,
            tag_line,
            profile_icon_id: profile.profile_icon_id,
            profile_icon_url: profile_icon_url(&self.asset_version, profile.profile_icon_id),
            summoner_level: profile.summoner_level,
            tier: solo
                .and_then(|e| e.tier.clone())
                .unwrap_or_else(|| UNRANKED_TIER.to_string()),
            rank: solo.and_then(|e| e.rank.clone()).unwrap_or_default(),
            league_points: solo.map(|e| e.league_points).unwrap_or(0),
            wins: solo.map(|e| e.wins).unwrap_or(0),
            losses: solo.map(|e| e.losses).unwrap_or(0),
        };
        tracing::info!(puuid = %view.puuid, tier = %view.tier, "player lookup finished");
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::{entry, ScriptedSource, Step};
    use riot_sdk::account::AccountResponse;
    use riot_sdk::ddragon::{DataDragon, FALLBACK_VERSION};
    use std::time::Duration;

    fn lookup_with(source: Arc<ScriptedSource>) -> PlayerLookup {
        PlayerLookup::new(source, "14.20.1")
    }

    #[test]
    fn splits_on_first_separator_only() {
        let (name, tag) = parse_riot_id("Faker#KR#1").unwrap();
        assert_eq!(name, "Faker");
        assert_eq!(tag, "KR#1");
        let (name, tag) = parse_riot_id("  Hide on bush#KR1 ").unwrap();
        assert_eq!((name.as_str(), tag.as_str()), ("Hide on bush", "KR1"));
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["noseparator", "#KR1", "Faker#", "", "#"] {
            assert!(
                matches!(parse_riot_id(raw), Err(LookupError::InvalidFormat)),
                "{} should be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn faker_scenario() {
        let source = Arc::new(ScriptedSource::found(
            "P1",
            7,
            vec![entry("RANKED_SOLO_5x5", "CHALLENGER", "I", 1200, 300, 150)],
        ));
        let view = lookup_with(source.clone()).lookup("Faker#KR1").await.unwrap();

        assert_eq!(view.puuid, "P1");
        assert_eq!(view.game_name, "Faker");
        assert_eq!(view.tag_line, "KR1");
        assert_eq!(view.tier, "CHALLENGER");
        assert_eq!(view.rank, "I");
        assert_eq!(view.league_points, 1200);
        assert_eq!((view.wins, view.losses), (300, 150));
        assert!(view.profile_icon_url.ends_with("/14.20.1/img/profileicon/7.png"));
        assert_eq!(view.league_label(), "CHALLENGER I - 1200 LP");
        assert_eq!(source.calls()[0], "account:Faker#KR1");
    }

    #[tokio::test]
    async fn invalid_format_makes_no_calls() {
        let source = Arc::new(ScriptedSource::found("P1", 7, vec![]));
        let err = lookup_with(source.clone()).lookup("noseparator").await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidFormat));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn not_found_stops_after_account() {
        let mut source = ScriptedSource::found("P1", 7, vec![]);
        source.account = Step::NotFound;
        let source = Arc::new(source);

        let err = lookup_with(source.clone()).lookup("Ghost#NA1").await.unwrap_err();
        assert!(matches!(err, LookupError::PlayerNotFound));
        assert_eq!(source.calls(), vec!["account:Ghost#NA1".to_string()]);
    }

    #[tokio::test]
    async fn unranked_sentinel_without_solo_entry() {
        let source = Arc::new(ScriptedSource::found(
            "P1",
            1,
            vec![entry("RANKED_FLEX_SR", "GOLD", "II", 50, 10, 9)],
        ));
        let view = lookup_with(source).lookup("Flexer#EUW").await.unwrap();
        assert_eq!(view.tier, "UNRANKED");
        assert_eq!(view.rank, "");
        assert_eq!(
            (view.league_points, view.wins, view.losses),
            (0, 0, 0)
        );
        assert_eq!(view.league_label(), "Unranked");
    }

    #[tokio::test]
    async fn solo_entry_selected_regardless_of_order() {
        let solo = entry("RANKED_SOLO_5x5", "DIAMOND", "III", 77, 40, 38);
        let flex = entry("RANKED_FLEX_SR", "SILVER", "IV", 5, 3, 7);

        for entries in [vec![solo.clone(), flex.clone()], vec![flex, solo]] {
            let source = Arc::new(ScriptedSource::found("P1", 1, entries));
            let view = lookup_with(source).lookup("Someone#EUW").await.unwrap();
            assert_eq!(view.tier, "DIAMOND");
            assert_eq!(view.rank, "III");
            assert_eq!(view.league_points, 77);
            assert_eq!((view.wins, view.losses), (40, 38));
        }
    }

    #[tokio::test]
    async fn canonical_name_wins_over_input() {
        let mut source = ScriptedSource::found("P1", 1, vec![]);
        source.account = Step::Ok(AccountResponse {
            puuid: "P1".to_string(),
            game_name: Some("Hide on bush".to_string()),
            tag_line: Some("KR1".to_string()),
        });
        let view = lookup_with(Arc::new(source))
            .lookup("hide on bush#kr1")
            .await
            .unwrap();
        assert_eq!(view.riot_id(), "Hide on bush#KR1");
        assert_eq!(view.summoner_name, "Hide on bush");
    }

    #[tokio::test]
    async fn profile_404_is_upstream_failure_not_missing_player() {
        let mut source = ScriptedSource::found("P1", 1, vec![]);
        source.profile = Step::Status(404);
        let err = lookup_with(Arc::new(source)).lookup("Faker#KR1").await.unwrap_err();
        match err {
            LookupError::UpstreamFailure { status, .. } => assert_eq!(status, Some(404)),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn rank_failure_aborts_lookup() {
        let mut source = ScriptedSource::found("P1", 1, vec![]);
        source.entries = Step::Status(503);
        let err = lookup_with(Arc::new(source)).lookup("Faker#KR1").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::UpstreamFailure {
                status: Some(503),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn undecodable_profile_is_upstream_failure() {
        let mut source = ScriptedSource::found("P1", 1, vec![]);
        source.profile = Step::Malformed;
        let err = lookup_with(Arc::new(source)).lookup("Faker#KR1").await.unwrap_err();
        match err {
            LookupError::UpstreamFailure { status, detail } => {
                assert_eq!(status, None);
                assert!(detail.starts_with("Malformed Riot API response"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn account_timeout_surfaces_as_timeout() {
        let mut source = ScriptedSource::found("P1", 1, vec![]);
        source.account = Step::Timeout;
        let source = Arc::new(source);
        let err = lookup_with(source.clone()).lookup("Faker#KR1").await.unwrap_err();
        assert!(matches!(err, LookupError::Timeout));
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn repeated_lookup_is_stable() {
        let source = Arc::new(ScriptedSource::found("P1", 7, vec![]));
        let lookup = lookup_with(source);
        let first = lookup.lookup("Faker#KR1").await.unwrap();
        let second = lookup.lookup("Faker#KR1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn version_fallback_still_allows_lookup() {
        let ddragon = DataDragon::with_versions_url(
            "http://127.0.0.1:9/api/versions.json",
            Duration::from_secs(2),
        )
        .unwrap();
        let version = ddragon.latest_version().await;
        assert_eq!(version, FALLBACK_VERSION);

        let source = Arc::new(ScriptedSource::found("P1", 7, vec![]));
        let view = PlayerLookup::new(source, version)
            .lookup("Faker#KR1")
            .await
            .unwrap();
        assert_eq!(
            view.profile_icon_url,
            format!(
                "https://ddragon.leagueoflegends.com/cdn/{}/img/profileicon/7.png",
                FALLBACK_VERSION
            )
        );
    }
}
