pub mod client;
mod endpoints;
pub mod region;
pub mod tier;
pub mod types;

pub use client::{RiotApi, RiotClient};
pub use region::{Cluster, Region};
pub use tier::Tier;
pub use types::{AccountDto, LeagueEntryDto, SummonerDto};
