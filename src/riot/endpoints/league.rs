use crate::error::Result;
use crate::riot::client::RiotClient;
use crate::riot::region::Region;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked info) for a summoner, one per ranked queue.
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.region_url(region),
            urlencoding::encode(summoner_id)
        );

        self.get(&url).await
    }
}
