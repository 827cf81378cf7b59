use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::region::{Cluster, Region};
use super::types::{AccountDto, LeagueEntryDto, SummonerDto};
use crate::error::{Error, Result};

/// Riot API routes used by the lookup chain.
#[async_trait]
pub trait RiotApi: Send + Sync {
    async fn get_account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto>;

    async fn get_summoner_by_puuid(&self, region: Region, puuid: &str) -> Result<SummonerDto>;

    async fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>>;
}

#[async_trait]
impl<T: RiotApi + ?Sized> RiotApi for Arc<T> {
    async fn get_account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto> {
        (**self)
            .get_account_by_riot_id(cluster, game_name, tag_line)
            .await
    }

    async fn get_summoner_by_puuid(&self, region: Region, puuid: &str) -> Result<SummonerDto> {
        (**self).get_summoner_by_puuid(region, puuid).await
    }

    async fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>> {
        (**self)
            .get_league_entries_by_summoner(region, summoner_id)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct RiotClient {
    client: reqwest::Client,
    /// Riot API Key
    key: String,
    /// Replaces every routing host when set, used to target a mock server.
    base_url: Option<String>,
}

impl RiotClient {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            key: key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    pub(crate) fn cluster_url(&self, cluster: Cluster) -> String {
        self.base_url.clone().unwrap_or_else(|| cluster.base_url())
    }

    pub(crate) fn region_url(&self, region: Region) -> String {
        self.base_url.clone().unwrap_or_else(|| region.base_url())
    }

    /// Shared request logic: the key is sent as a query parameter and any status
    /// other than 200 is reported with the response body.
    pub(crate) async fn get<T: DeserializeOwned + Debug>(&self, url: &str) -> Result<T> {
        tracing::trace!("[RIOT::CLIENT] GET {}", url);

        let res = self
            .client
            .get(url)
            .query(&[("api_key", self.key.as_str())])
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => {
                let body = res.text().await.unwrap_or_default();
                Err(Error::RemoteLookup {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn get_account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto> {
        RiotClient::get_account_by_riot_id(self, cluster, game_name, tag_line).await
    }

    async fn get_summoner_by_puuid(&self, region: Region, puuid: &str) -> Result<SummonerDto> {
        RiotClient::get_summoner_by_puuid(self, region, puuid).await
    }

    async fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>> {
        RiotClient::get_league_entries_by_summoner(self, region, summoner_id).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = RiotClient::new("RGAPI-INVALID-KEY");

        let res: Result<()> = client.get("ht!tp://invalid-url").await; // incorrect schema

        assert!(matches!(res, Err(Error::Http(_))));
        assert!(res.unwrap_err().is_remote_failure());
    }

    #[tokio::test]
    async fn non_success_status_carries_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/forbidden").query_param("api_key", "KEY");
                then.status(403).body(r#"{"status":{"message":"Forbidden"}}"#);
            })
            .await;

        let client = RiotClient::new("KEY");
        let res: Result<serde_json::Value> = client.get(&server.url("/forbidden")).await;

        match res {
            Err(Error::RemoteLookup { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("Forbidden"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn base_url_override_replaces_routing_hosts() {
        let client = RiotClient::new("KEY");
        assert_eq!(
            client.cluster_url(Cluster::Europe),
            "https://europe.api.riotgames.com"
        );

        let client = client.with_base_url("http://127.0.0.1:8080/");
        assert_eq!(client.cluster_url(Cluster::Europe), "http://127.0.0.1:8080");
        assert_eq!(client.region_url(Region::EUW1), "http://127.0.0.1:8080");
    }
}
