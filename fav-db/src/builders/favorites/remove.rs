use crate::error::Result;
use crate::Handle;

pub struct RemoveBuilder {
    handle: std::sync::Arc<Handle>,
    puuid: Option<String>,
}

impl RemoveBuilder {
    pub fn new(handle: std::sync::Arc<Handle>) -> Self {
        Self {
            handle,
            puuid: None,
        }
    }
    pub fn puuid(mut self, puuid: &str) -> Self {
        self.puuid = Some(puuid.to_string());
        self
    }
    /// `true` when a row was deleted
    pub async fn send(self) -> Result<bool> {
        let Some(puuid) = self.puuid else {
            return Ok(false);
        };
        let res = sqlx::query("DELETE FROM favorites WHERE puuid = ?")
            .bind(&puuid)
            .execute(&self.handle.pool)
            .await?;
        let removed = res.rows_affected() > 0;
        if removed {
            tracing::info!(puuid = %puuid, "favorite removed");
        }
        Ok(removed)
    }
}
