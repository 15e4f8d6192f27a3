use crate::Handle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod add;
pub mod list;
pub mod remove;

/// Tier stored for players without a solo queue entry
pub const UNRANKED_TIER: &str = "UNRANKED";

/// A favorited player, the stored copy of a looked-up player view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
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
    pub created_at: String,
}

pub struct FavoritesClient {
    handle: Arc<Handle>,
}

impl FavoritesClient {
    pub fn new(handle: std::sync::Arc<Handle>) -> Self {
        Self { handle }
    }
    pub fn add(&self) -> add::AddBuilder {
        add::AddBuilder::new(self.handle.clone())
    }
    pub fn list(&self) -> list::ListBuilder {
        list::ListBuilder::new(self.handle.clone())
    }
    pub fn remove(&self) -> remove::RemoveBuilder {
        remove::RemoveBuilder::new(self.handle.clone())
    }
}
