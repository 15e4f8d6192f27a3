use super::FavoriteItem;
use crate::error::Result;
use crate::Handle;

pub struct ListBuilder {
    handle: std::sync::Arc<Handle>,
}

impl ListBuilder {
    pub fn new(handle: std::sync::Arc<Handle>) -> Self {
        Self { handle }
    }
    /// All favorites, oldest first
    pub async fn send(self) -> Result<Vec<FavoriteItem>> {
        let items = sqlx::query_as::<_, FavoriteItem>(
            r#"
            SELECT puuid, game_name, tag_line, summoner_name, profile_icon_id,
                   profile_icon_url, summoner_level, tier, "rank", league_points,
                   wins, losses, created_at
            FROM favorites
            ORDER BY id
            "#,
        )
        .fetch_all(&self.handle.pool)
        .await?;
        Ok(items)
    }
}
