//! Account → Summoner → Entry resolution.
//!
//! Two sets of operations are exposed on [`RankLookup`]:
//!
//! * `resolve_*` and `try_*` return a [`Result`] so callers can tell a validation
//!   error from a failed Riot API call.
//! * The best-effort accessors (`summoner`, `entry`, `tier`, `rank`, `wins`, ...)
//!   never fail. Errors are logged and collapsed to an absent or zero value.

use tracing::{debug, instrument, warn};

use crate::config::{Config, DatabaseConfig};
use crate::db::{CacheStore, SqlCache};
use crate::error::{Error, Result};
use crate::models::{Account, Entry, Summoner};
use crate::riot::{Cluster, LeagueEntryDto, Region, RiotApi, RiotClient, Tier};

const GAME_NAME_LENGTH: (usize, usize) = (3, 16);
const TAG_LINE_LENGTH: (usize, usize) = (3, 5);

/// Check a riot id before it is used for any lookup.
pub fn validate_riot_id(game_name: &str, tag_line: &str) -> Result<()> {
    if game_name.trim().is_empty() || tag_line.trim().is_empty() {
        return Err(Error::Validation(
            "Game name and tag line must not be empty".into(),
        ));
    }

    let name_len = game_name.chars().count();
    let tag_len = tag_line.chars().count();

    if name_len > GAME_NAME_LENGTH.1 || tag_len > TAG_LINE_LENGTH.1 {
        return Err(Error::Validation(format!(
            "Game name must not be longer than {} characters and tag line must not be longer than {} characters",
            GAME_NAME_LENGTH.1, TAG_LINE_LENGTH.1
        )));
    }
    if name_len < GAME_NAME_LENGTH.0 || tag_len < TAG_LINE_LENGTH.0 {
        return Err(Error::Validation(format!(
            "Game name must not be shorter than {} characters and tag line must not be shorter than {} characters",
            GAME_NAME_LENGTH.0, TAG_LINE_LENGTH.0
        )));
    }

    Ok(())
}

/// Lookup chain owning its Riot API transport and identifier cache.
#[derive(Debug)]
pub struct RankLookup<A, C> {
    api: A,
    cache: C,
    cluster: Cluster,
}

impl RankLookup<RiotClient, SqlCache> {
    /// Build a chain on the Riot API and connect to the cache database.
    pub async fn connect(
        api_key: impl Into<String>,
        cluster: Cluster,
        database: &DatabaseConfig,
    ) -> Result<Self> {
        let cache = SqlCache::connect(database).await?;
        Ok(Self::new(RiotClient::new(api_key), cache, cluster))
    }

    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::connect(config.riot_api_key.clone(), config.cluster, &config.database).await
    }
}

impl<A, C> RankLookup<A, C>
where
    A: RiotApi,
    C: CacheStore,
{
    pub fn new(api: A, cache: C, cluster: Cluster) -> Self {
        Self {
            api,
            cache,
            cluster,
        }
    }

    /// Cluster used for Account-v1 lookups.
    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    // === Primitives ===

    /// Account for a riot id, from the cache when known, otherwise from the API
    /// and stored in the cache.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_account(&self, game_name: &str, tag_line: &str) -> Result<Account> {
        validate_riot_id(game_name, tag_line)?;

        if let Some(account) = self.cache.get_account(game_name, tag_line).await {
            debug!("account cache hit");
            return Ok(account);
        }

        let dto = self
            .api
            .get_account_by_riot_id(self.cluster, game_name, tag_line)
            .await?;
        let account = Account::from_dto(dto, game_name, tag_line);

        self.cache.put_account(&account).await;
        Ok(account)
    }

    /// Summoner of an account on a region, from the cache when known, otherwise
    /// from the API and stored in the cache.
    #[instrument(level = "debug", skip(self, account), fields(puuid = account.puuid()))]
    pub async fn resolve_summoner(&self, account: &Account, region: Region) -> Result<Summoner> {
        if account.puuid().trim().is_empty() {
            return Err(Error::Validation("Account must have a puuid".into()));
        }

        if let Some(summoner) = self.cache.get_summoner(account.puuid()).await {
            debug!("summoner cache hit");
            return Ok(summoner);
        }

        let summoner: Summoner = self
            .api
            .get_summoner_by_puuid(region, account.puuid())
            .await?
            .into();

        self.cache.put_summoner(&summoner).await;
        Ok(summoner)
    }

    /// Current ranked standing of a summoner, `None` when unranked. Never cached.
    #[instrument(level = "debug", skip(self, summoner), fields(summoner_id = summoner.summoner_id()))]
    pub async fn resolve_entry(&self, summoner: &Summoner, region: Region) -> Result<Option<Entry>> {
        if summoner.summoner_id().trim().is_empty() {
            return Err(Error::Validation("Summoner must have an id".into()));
        }

        let entries = self
            .api
            .get_league_entries_by_summoner(region, summoner.summoner_id())
            .await?;

        if entries.is_empty() {
            debug!("no league entry, summoner is unranked");
        }
        Ok(LeagueEntryDto::select(entries).map(Entry::from))
    }

    /// Summoner for a riot id. A summoner already cached for the riot id is
    /// returned without touching the API, even if the player has been renamed
    /// since.
    pub async fn try_summoner(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<Summoner> {
        validate_riot_id(game_name, tag_line)?;

        if let Some(summoner) = self.cache.get_summoner_by_riot_id(game_name, tag_line).await {
            debug!("{}#{} summoner cache hit", game_name, tag_line);
            return Ok(summoner);
        }

        let account = self.resolve_account(game_name, tag_line).await?;
        self.resolve_summoner(&account, region).await
    }

    /// Ranked standing for a riot id, resolving the whole chain.
    pub async fn try_entry(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<Option<Entry>> {
        let summoner = self.try_summoner(game_name, tag_line, region).await?;
        self.resolve_entry(&summoner, region).await
    }

    // === Best-effort accessors ===

    pub async fn summoner(&self, game_name: &str, tag_line: &str, region: Region) -> Option<Summoner> {
        self.try_summoner(game_name, tag_line, region)
            .await
            .inspect_err(|e| warn!("could not resolve summoner {}#{}: {}", game_name, tag_line, e))
            .ok()
    }

    pub async fn entry(&self, game_name: &str, tag_line: &str, region: Region) -> Option<Entry> {
        self.try_entry(game_name, tag_line, region)
            .await
            .inspect_err(|e| warn!("could not resolve entry {}#{}: {}", game_name, tag_line, e))
            .ok()
            .flatten()
    }

    pub async fn profile_icon_id(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Option<i64> {
        self.summoner(game_name, tag_line, region)
            .await
            .map(|s| s.profile_icon_id())
    }

    pub async fn summoner_level(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Option<i64> {
        self.summoner(game_name, tag_line, region)
            .await
            .map(|s| s.summoner_level())
    }

    /// [`Tier::Unranked`] when no entry could be resolved.
    pub async fn tier(&self, game_name: &str, tag_line: &str, region: Region) -> Tier {
        self.entry(game_name, tag_line, region)
            .await
            .map(|e| e.tier())
            .unwrap_or_default()
    }

    /// Rank label such as `Gold II`.
    pub async fn rank(&self, game_name: &str, tag_line: &str, region: Region) -> Option<String> {
        self.entry(game_name, tag_line, region)
            .await
            .map(|e| e.rank_label())
    }

    pub async fn league_points(&self, game_name: &str, tag_line: &str, region: Region) -> i32 {
        self.entry(game_name, tag_line, region)
            .await
            .map_or(0, |e| e.league_points())
    }

    pub async fn wins(&self, game_name: &str, tag_line: &str, region: Region) -> i32 {
        self.entry(game_name, tag_line, region)
            .await
            .map_or(0, |e| e.wins())
    }

    pub async fn losses(&self, game_name: &str, tag_line: &str, region: Region) -> i32 {
        self.entry(game_name, tag_line, region)
            .await
            .map_or(0, |e| e.losses())
    }

    pub async fn is_veteran(&self, game_name: &str, tag_line: &str, region: Region) -> bool {
        self.entry(game_name, tag_line, region)
            .await
            .is_some_and(|e| e.is_veteran())
    }

    pub async fn is_inactive(&self, game_name: &str, tag_line: &str, region: Region) -> bool {
        self.entry(game_name, tag_line, region)
            .await
            .is_some_and(|e| e.is_inactive())
    }

    pub async fn is_fresh_blood(&self, game_name: &str, tag_line: &str, region: Region) -> bool {
        self.entry(game_name, tag_line, region)
            .await
            .is_some_and(|e| e.is_fresh_blood())
    }

    pub async fn is_hot_streak(&self, game_name: &str, tag_line: &str, region: Region) -> bool {
        self.entry(game_name, tag_line, region)
            .await
            .is_some_and(|e| e.is_hot_streak())
    }
}
