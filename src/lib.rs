//! Riot account, summoner and ranked lookups backed by an identifier cache.
//!
//! [`RankLookup`] resolves a riot id (game name + tag line) into its account, the
//! summoner on a region and the current league entry. Accounts and summoners are
//! stored in a relational cache on first resolution; league entries are fetched on
//! every call.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod riot;

pub use config::{Config, DatabaseConfig};
pub use db::{CacheStore, SqlCache};
pub use error::{Error, Result};
pub use lookup::{RankLookup, validate_riot_id};
pub use models::{Account, Entry, Summoner};
pub use riot::{Cluster, Region, RiotApi, RiotClient, Tier};
