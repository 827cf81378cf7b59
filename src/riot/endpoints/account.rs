use crate::error::Result;
use crate::riot::client::RiotClient;
use crate::riot::region::Cluster;
use crate::riot::types::AccountDto;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses cluster routing (americas, europe, asia, sea)
    pub async fn get_account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.cluster_url(cluster),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.get(&url).await
    }
}
