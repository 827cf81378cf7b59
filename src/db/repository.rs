use async_trait::async_trait;
use sqlx::{
    AnyPool,
    any::{AnyPoolOptions, AnyQueryResult},
};
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::{CacheStore, migrations::run_migrations};
use crate::config::DatabaseConfig;
use crate::error::Error;
use crate::models::{Account, Summoner};

const ACCOUNT_COLUMN_NAMES: [&str; 3] = ["puuid", "game_name", "tag_line"];

const SUMMONER_COLUMN_NAMES: [&str; 5] = [
    "summoner_id",
    "account_id",
    "puuid",
    "profile_icon_id",
    "summoner_level",
];

/// Unique violations mean a concurrent writer stored the row first.
fn skip_duplicate(result: Result<AnyQueryResult, sqlx::Error>) -> Result<bool, Error> {
    match result {
        Ok(_) => Ok(true),
        Err(e)
            if e
                .as_database_error()
                .is_some_and(|d| d.is_unique_violation()) =>
        {
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn columns(names: &[&str], alias: Option<&str>) -> String {
    let prefix = alias.map(|a| format!("{a}.")).unwrap_or_default();
    names
        .iter()
        .map(|col| format!("{prefix}{col}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Identifier cache stored in a relational database through sqlx.
///
/// The connection pool is opened on first use and reopened whenever it has been
/// closed, running the schema migrations each time.
///
/// The pool holds a single connection that never idles out or expires. Its
/// liveness is only observed through [`AnyPool::is_closed`], so if sqlx drops
/// that connection on its own, an in-memory SQLite database comes back empty and
/// queries fail as storage errors (cache misses) until [`SqlCache::close`] forces
/// a reconnect.
#[derive(Debug)]
pub struct SqlCache {
    url: String,
    pool: Mutex<Option<AnyPool>>,
}

impl SqlCache {
    /// Create a cache which connects lazily on its first operation.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url(),
            pool: Mutex::new(None),
        }
    }

    /// Create a cache and connect to it right away, provisioning the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let cache = Self::new(config);
        cache.pool().await?;
        Ok(cache)
    }

    /// Close the underlying pool. The next operation reconnects.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.lock().await.take() {
            pool.close().await;
        }
    }

    async fn pool(&self) -> Result<AnyPool, Error> {
        let mut guard = self.pool.lock().await;

        if let Some(pool) = guard.as_ref().filter(|pool| !pool.is_closed()) {
            return Ok(pool.clone());
        }

        debug!("📜 Opening cache database connection...");
        sqlx::any::install_default_drivers();

        // A single long-lived connection keeps in-memory databases alive and
        // matches the sequential use of the cache.
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&self.url)
            .await?;
        run_migrations(&pool).await?;

        *guard = Some(pool.clone());
        Ok(pool)
    }

    // === Account operations ===

    pub async fn find_account(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<Account>, Error> {
        let pool = self.pool().await?;
        let columns = columns(&ACCOUNT_COLUMN_NAMES, None);
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {columns} FROM accounts WHERE game_name = ? AND tag_line = ?"
        ))
        .bind(game_name)
        .bind(tag_line)
        .fetch_optional(&pool)
        .await?;
        Ok(account)
    }

    /// Insert the account unless a row with the same puuid already exists.
    /// Returns whether a row was written.
    pub async fn insert_account(&self, account: &Account) -> Result<bool, Error> {
        let pool = self.pool().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT 1 FROM accounts WHERE puuid = ?")
            .bind(account.puuid())
            .fetch_optional(&pool)
            .await?;
        if exists.is_some() {
            return Ok(false);
        }

        let result =
            sqlx::query("INSERT INTO accounts (puuid, game_name, tag_line) VALUES (?, ?, ?)")
                .bind(account.puuid())
                .bind(account.game_name())
                .bind(account.tag_line())
                .execute(&pool)
                .await;
        skip_duplicate(result)
    }

    // === Summoner operations ===

    pub async fn find_summoner(&self, puuid: &str) -> Result<Option<Summoner>, Error> {
        let pool = self.pool().await?;
        let columns = columns(&SUMMONER_COLUMN_NAMES, None);
        let summoner = sqlx::query_as::<_, Summoner>(&format!(
            "SELECT {columns} FROM summoners WHERE puuid = ?"
        ))
        .bind(puuid)
        .fetch_optional(&pool)
        .await?;
        Ok(summoner)
    }

    pub async fn find_summoner_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<Summoner>, Error> {
        let pool = self.pool().await?;
        let columns = columns(&SUMMONER_COLUMN_NAMES, Some("s"));
        let summoner = sqlx::query_as::<_, Summoner>(&format!(
            r#"
            SELECT {columns}
            FROM summoners s
            INNER JOIN accounts a ON a.puuid = s.puuid
            WHERE a.game_name = ? AND a.tag_line = ?
            "#
        ))
        .bind(game_name)
        .bind(tag_line)
        .fetch_optional(&pool)
        .await?;
        Ok(summoner)
    }

    /// Insert the summoner unless one is already stored for its puuid.
    /// A player owns exactly one summoner per shard, so the puuid identifies the
    /// row as well as the `summoner_id` key does. Returns whether a row was written.
    pub async fn insert_summoner(&self, summoner: &Summoner) -> Result<bool, Error> {
        if self.find_summoner(summoner.puuid()).await?.is_some() {
            return Ok(false);
        }

        let pool = self.pool().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO summoners (summoner_id, account_id, puuid, profile_icon_id, summoner_level)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(summoner.summoner_id())
        .bind(summoner.account_id())
        .bind(summoner.puuid())
        .bind(summoner.profile_icon_id())
        .bind(summoner.summoner_level())
        .execute(&pool)
        .await;
        skip_duplicate(result)
    }
}

#[async_trait]
impl CacheStore for SqlCache {
    async fn put_account(&self, account: &Account) {
        match self.insert_account(account).await {
            Ok(true) => debug!(puuid = account.puuid(), "account cached"),
            Ok(false) => debug!(puuid = account.puuid(), "account already cached"),
            Err(e) => error!("DB error while caching account {}: {}", account.riot_id(), e),
        }
    }

    async fn get_account(&self, game_name: &str, tag_line: &str) -> Option<Account> {
        match self.find_account(game_name, tag_line).await {
            Ok(x) => x,
            Err(e) => {
                error!("DB error while getting account {}#{}: {}", game_name, tag_line, e);
                None
            }
        }
    }

    async fn put_summoner(&self, summoner: &Summoner) {
        match self.insert_summoner(summoner).await {
            Ok(true) => debug!(puuid = summoner.puuid(), "summoner cached"),
            Ok(false) => debug!(puuid = summoner.puuid(), "summoner already cached"),
            Err(e) => error!(
                "DB error while caching summoner {}: {}",
                summoner.summoner_id(),
                e
            ),
        }
    }

    async fn get_summoner(&self, puuid: &str) -> Option<Summoner> {
        match self.find_summoner(puuid).await {
            Ok(x) => x,
            Err(e) => {
                error!("DB error while getting summoner for {}: {}", puuid, e);
                None
            }
        }
    }

    async fn get_summoner_by_riot_id(&self, game_name: &str, tag_line: &str) -> Option<Summoner> {
        match self.find_summoner_by_riot_id(game_name, tag_line).await {
            Ok(x) => x,
            Err(e) => {
                error!(
                    "DB error while getting summoner {}#{}: {}",
                    game_name, tag_line, e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_cache() -> SqlCache {
        SqlCache::connect(&DatabaseConfig::from("sqlite::memory:"))
            .await
            .expect("in-memory database should open")
    }

    async fn count(cache: &SqlCache, table: &str) -> i64 {
        let pool = cache.pool().await.unwrap();
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn put_account_twice_stores_one_row() {
        let cache = memory_cache().await;
        let account = Account::new("P1", "NattyNatt", "2005");

        assert!(cache.insert_account(&account).await.unwrap());
        assert!(!cache.insert_account(&account).await.unwrap());
        cache.put_account(&account).await;

        assert_eq!(count(&cache, "accounts").await, 1);
        assert_eq!(
            cache.get_account("NattyNatt", "2005").await,
            Some(account)
        );
    }

    #[tokio::test]
    async fn concurrent_account_inserts_store_one_row() {
        let cache = memory_cache().await;
        let account = Account::new("P1", "NattyNatt", "2005");

        let (first, second) = tokio::join!(
            cache.insert_account(&account),
            cache.insert_account(&account)
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(count(&cache, "accounts").await, 1);
    }

    #[tokio::test]
    async fn duplicate_insert_past_the_check_is_skipped() {
        let cache = memory_cache().await;
        let pool = cache.pool().await.unwrap();
        let account = Account::new("P1", "NattyNatt", "2005");
        cache.put_account(&account).await;

        let result =
            sqlx::query("INSERT INTO accounts (puuid, game_name, tag_line) VALUES (?, ?, ?)")
                .bind(account.puuid())
                .bind(account.game_name())
                .bind(account.tag_line())
                .execute(&pool)
                .await;

        assert!(!skip_duplicate(result).unwrap());
        assert_eq!(count(&cache, "accounts").await, 1);
    }

    #[tokio::test]
    async fn summoner_without_account_is_not_stored() {
        let cache = memory_cache().await;

        let written = cache.insert_summoner(&Summoner::new("S9", "A9", "P9", 1, 1)).await;
        assert!(matches!(written, Err(Error::Database(_))));

        cache.put_summoner(&Summoner::new("S9", "A9", "P9", 1, 1)).await;
        assert_eq!(count(&cache, "summoners").await, 0);
        assert!(cache.get_summoner("P9").await.is_none());
    }

    #[tokio::test]
    async fn account_lookup_is_case_sensitive() {
        let cache = memory_cache().await;
        cache.put_account(&Account::new("P1", "NattyNatt", "2005")).await;

        assert!(cache.get_account("nattynatt", "2005").await.is_none());
    }

    #[tokio::test]
    async fn summoner_is_found_by_puuid_and_riot_id() {
        let cache = memory_cache().await;
        let summoner = Summoner::new("S1", "A1", "P1", 42, 77);

        cache.put_account(&Account::new("P1", "NattyNatt", "2005")).await;
        cache.put_summoner(&summoner).await;
        cache.put_summoner(&summoner).await;

        assert_eq!(count(&cache, "summoners").await, 1);
        assert_eq!(cache.get_summoner("P1").await, Some(summoner.clone()));
        assert_eq!(
            cache.get_summoner_by_riot_id("NattyNatt", "2005").await,
            Some(summoner)
        );
        assert!(cache.get_summoner_by_riot_id("Other", "EUW").await.is_none());
    }

    #[tokio::test]
    async fn reconnects_after_pool_was_closed() {
        let cache = memory_cache().await;
        cache.close().await;

        // A fresh in-memory database comes back with its schema provisioned.
        assert!(cache.get_account("NattyNatt", "2005").await.is_none());
        cache.put_account(&Account::new("P1", "NattyNatt", "2005")).await;
        assert!(cache.get_account("NattyNatt", "2005").await.is_some());
    }

    #[tokio::test]
    async fn storage_failures_degrade_to_cache_misses() {
        let cache = SqlCache::new(&DatabaseConfig::from("unknown://nowhere/none"));

        cache.put_account(&Account::new("P1", "NattyNatt", "2005")).await;
        assert!(cache.get_account("NattyNatt", "2005").await.is_none());
        assert!(cache.get_summoner("P1").await.is_none());
    }
}
