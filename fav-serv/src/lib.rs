pub mod config;
pub mod error;
pub mod handlers;
pub mod lookup;
pub mod models;
pub mod routes;
pub mod server;
pub mod source;
pub mod telemetry;

use self::error::{Error, Result};
use self::lookup::PlayerLookup;

pub struct AppState {
    /// Absent when the server runs without a Riot API key
    pub lookup: Option<PlayerLookup>,
    pub favorites: fav_db::Client,
    pub asset_version: String,
}

impl AppState {
    pub fn lookup(&self) -> Result<&PlayerLookup> {
        self.lookup.as_ref().ok_or(Error::MissingApiKey)
    }
}
