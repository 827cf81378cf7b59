//! Identifier cache for resolved accounts and summoners.
//!
//! Implementations never surface storage errors: a failed read is a cache miss and a
//! failed write is skipped, both logged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Account, Summoner};

mod migrations;
mod repository;

pub use repository::SqlCache;

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store the account unless one with the same puuid exists.
    async fn put_account(&self, account: &Account);

    async fn get_account(&self, game_name: &str, tag_line: &str) -> Option<Account>;

    /// Store the summoner unless one with the same puuid exists. A player has a single
    /// summoner per shard, so the puuid stands in for the `summoner_id` key.
    async fn put_summoner(&self, summoner: &Summoner);

    async fn get_summoner(&self, puuid: &str) -> Option<Summoner>;

    /// Summoner of the cached account matching the riot id.
    async fn get_summoner_by_riot_id(&self, game_name: &str, tag_line: &str) -> Option<Summoner>;
}

#[async_trait]
impl<T: CacheStore + ?Sized> CacheStore for Arc<T> {
    async fn put_account(&self, account: &Account) {
        (**self).put_account(account).await
    }

    async fn get_account(&self, game_name: &str, tag_line: &str) -> Option<Account> {
        (**self).get_account(game_name, tag_line).await
    }

    async fn put_summoner(&self, summoner: &Summoner) {
        (**self).put_summoner(summoner).await
    }

    async fn get_summoner(&self, puuid: &str) -> Option<Summoner> {
        (**self).get_summoner(puuid).await
    }

    async fn get_summoner_by_riot_id(&self, game_name: &str, tag_line: &str) -> Option<Summoner> {
        (**self).get_summoner_by_riot_id(game_name, tag_line).await
    }
}
