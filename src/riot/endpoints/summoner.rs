use crate::error::Result;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::SummonerDto;

impl RiotClient {
    /// Get summoner by PUUID
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_summoner_by_puuid(&self, region: Region, puuid: &str) -> Result<SummonerDto> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.region_url(region),
            urlencoding::encode(puuid)
        );

        self.get(&url).await
    }
}
