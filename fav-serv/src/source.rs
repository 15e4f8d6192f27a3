use async_trait::async_trait;
use riot_sdk::account::{AccountRegion, AccountResponse};
use riot_sdk::league::summoner::league::LeagueEntry;
use riot_sdk::league::summoner::puuid::SummonerResponse;
use riot_sdk::summoner::Region;

/// The three upstream calls a player lookup is made of.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn resolve_account(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> riot_sdk::Result<AccountResponse>;
    async fn fetch_profile(&self, puuid: &str) -> riot_sdk::Result<SummonerResponse>;
    async fn fetch_rank_entries(&self, puuid: &str) -> riot_sdk::Result<Vec<LeagueEntry>>;
}

pub struct RiotSource {
    client: riot_sdk::Client,
    account_region: AccountRegion,
    platform: Region,
}

impl RiotSource {
    pub fn new(client: riot_sdk::Client, account_region: AccountRegion, platform: Region) -> Self {
        Self {
            client,
            account_region,
            platform,
        }
    }
}

#[async_trait]
impl PlayerSource for RiotSource {
    async fn resolve_account(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> riot_sdk::Result<AccountResponse> {
        self.client
            .account(self.account_region)
            .get_by_riot_id(game_name, tag_line)?
            .send()
            .await
    }

    async fn fetch_profile(&self, puuid: &str) -> riot_sdk::Result<SummonerResponse> {
        self.client
            .summoner(self.platform)
            .get_by_puuid(puuid)?
            .send()
            .await
    }

    async fn fetch_rank_entries(&self, puuid: &str) -> riot_sdk::Result<Vec<LeagueEntry>> {
        self.client
            .summoner(self.platform)
            .get_league_entries(puuid)?
            .send()
            .await
    }
}
