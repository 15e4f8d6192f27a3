use self::league::GetLeagueEntriesRequestBuilder;
use self::puuid::GetByPuuidRequestBuilder;
use crate::summoner::Region;
use crate::{Handle, Result, ServiceUrl};

pub mod league;
pub mod puuid;

pub struct SummonerClient {
    handle: std::sync::Arc<Handle>,
    region: Region,
}
impl SummonerClient {
    pub fn new(handle: std::sync::Arc<Handle>, region: Region) -> Self {
        Self { handle, region }
    }

    pub fn get_by_puuid(&self, puuid: &str) -> Result<GetByPuuidRequestBuilder> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.region.base_url(),
            urlencoding::encode(puuid)
        );
        GetByPuuidRequestBuilder::new(self.handle.clone(), url)
    }

    /// Get league entries in all queues for a given PUUID
    pub fn get_league_entries(&self, puuid: &str) -> Result<GetLeagueEntriesRequestBuilder> {
        let url = format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.region.base_url(),
            urlencoding::encode(puuid)
        );
        GetLeagueEntriesRequestBuilder::new(self.handle.clone(), url)
    }
}
