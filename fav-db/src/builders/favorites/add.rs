use super::{FavoriteItem, UNRANKED_TIER};
use crate::error::{Error, Result};
use crate::Handle;

pub struct AddBuilder {
    handle: std::sync::Arc<Handle>,
    /// The PUUID of the player, the only stable key
    puuid: Option<String>,
    game_name: Option<String>,
    tag_line: Option<String>,
    /// Falls back to the game name when not set
    summoner_name: Option<String>,
    profile_icon_id: i64,
    profile_icon_url: Option<String>,
    summoner_level: i64,
    tier: Option<String>,
    rank: Option<String>,
    league_points: i64,
    wins: i64,
    losses: i64,
}

impl AddBuilder {
    pub fn new(handle: std::sync::Arc<Handle>) -> Self {
        Self {
            handle,
            puuid: None,
            game_name: None,
            tag_line: None,
            summoner_name: None,
            profile_icon_id: 0,
            profile_icon_url: None,
            summoner_level: 1,
            tier: None,
            rank: None,
            league_points: 0,
            wins: 0,
            losses: 0,
        }
    }
    pub fn puuid(mut self, puuid: &str) -> Self {
        self.puuid = Some(puuid.to_string());
        self
    }
    /// This field might get outdated as players can rename themselves
    pub fn game_name(mut self, game_name: &str) -> Self {
        self.game_name = Some(game_name.to_string());
        self
    }
    pub fn tag_line(mut self, tag_line: &str) -> Self {
        self.tag_line = Some(tag_line.to_string());
        self
    }
    pub fn summoner_name(mut self, summoner_name: &str) -> Self {
        self.summoner_name = Some(summoner_name.to_string());
        self
    }
    pub fn profile_icon_id(mut self, profile_icon_id: i64) -> Self {
        self.profile_icon_id = profile_icon_id;
        self
    }
    pub fn profile_icon_url(mut self, profile_icon_url: &str) -> Self {
        self.profile_icon_url = Some(profile_icon_url.to_string());
        self
    }
    pub fn summoner_level(mut self, summoner_level: i64) -> Self {
        self.summoner_level = summoner_level;
        self
    }
    pub fn tier(mut self, tier: &str) -> Self {
        self.tier = Some(tier.to_string());
        self
    }
    pub fn rank(mut self, rank: &str) -> Self {
        self.rank = Some(rank.to_string());
        self
    }
    pub fn league_points(mut self, league_points: i64) -> Self {
        self.league_points = league_points;
        self
    }
    pub fn wins(mut self, wins: i64) -> Self {
        self.wins = wins;
        self
    }
    pub fn losses(mut self, losses: i64) -> Self {
        self.losses = losses;
        self
    }

    fn into_item(self) -> Result<(std::sync::Arc<Handle>, FavoriteItem)> {
        let puuid = required(self.puuid, "puuid")?;
        let game_name = required(self.game_name, "gameName")?;
        let tag_line = required(self.tag_line, "tagLine")?;
        let profile_icon_url = required(self.profile_icon_url, "profileIconUrl")?;

        let item = FavoriteItem {
            summoner_name: self.summoner_name.unwrap_or_else(|| game_name.clone()),
            puuid,
            game_name,
            tag_line,
            profile_icon_id: self.profile_icon_id,
            profile_icon_url,
            summoner_level: self.summoner_level,
            tier: self.tier.unwrap_or_else(|| UNRANKED_TIER.to_string()),
            rank: self.rank.unwrap_or_default(),
            league_points: self.league_points,
            wins: self.wins,
            losses: self.losses,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        Ok((self.handle, item))
    }

    /// Inserts the favorite. An existing row with the same puuid is left
    /// untouched and the call fails with `Error::Conflict`.
    pub async fn send(self) -> Result<FavoriteItem> {
        let (handle, item) = self.into_item()?;

        let res = sqlx::query(
            r#"
            INSERT INTO favorites (
                puuid, game_name, tag_line, summoner_name, profile_icon_id,
                profile_icon_url, summoner_level, tier, "rank", league_points,
                wins, losses, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.puuid)
        .bind(&item.game_name)
        .bind(&item.tag_line)
        .bind(&item.summoner_name)
        .bind(item.profile_icon_id)
        .bind(&item.profile_icon_url)
        .bind(item.summoner_level)
        .bind(&item.tier)
        .bind(&item.rank)
        .bind(item.league_points)
        .bind(item.wins)
        .bind(item.losses)
        .bind(&item.created_at)
        .execute(&handle.pool)
        .await;

        match res {
            Ok(_) => {
                tracing::info!(puuid = %item.puuid, "favorite added");
                Ok(item)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(Error::Conflict(item.puuid))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Validation(format!("Missing required field: {}", field))),
    }
}
