//! Records resolved by the lookup chain.
//!
//! [`Account`] and [`Summoner`] can be built either from a Riot API response or from
//! a row of the identifier cache. [`Entry`] only ever comes from the API.

use sqlx::FromRow;

use crate::riot::{
    tier::Tier,
    types::{AccountDto, LeagueEntryDto, SummonerDto},
};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    puuid: String,
    game_name: String,
    tag_line: String,
}

impl Account {
    pub fn new(
        puuid: impl Into<String>,
        game_name: impl Into<String>,
        tag_line: impl Into<String>,
    ) -> Self {
        Self {
            puuid: puuid.into(),
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    /// Build an account from an Account-v1 response. The API may omit the riot id
    /// parts, in which case the ones used for the lookup are kept.
    pub fn from_dto(dto: AccountDto, game_name: &str, tag_line: &str) -> Self {
        Self {
            puuid: dto.puuid,
            game_name: dto.game_name.unwrap_or_else(|| game_name.to_string()),
            tag_line: dto.tag_line.unwrap_or_else(|| tag_line.to_string()),
        }
    }

    pub fn puuid(&self) -> &str {
        &self.puuid
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }

    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Summoner {
    summoner_id: String,
    account_id: String,
    puuid: String,
    profile_icon_id: i64,
    summoner_level: i64,
}

impl Summoner {
    pub fn new(
        summoner_id: impl Into<String>,
        account_id: impl Into<String>,
        puuid: impl Into<String>,
        profile_icon_id: i64,
        summoner_level: i64,
    ) -> Self {
        Self {
            summoner_id: summoner_id.into(),
            account_id: account_id.into(),
            puuid: puuid.into(),
            profile_icon_id,
            summoner_level,
        }
    }

    pub fn summoner_id(&self) -> &str {
        &self.summoner_id
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn puuid(&self) -> &str {
        &self.puuid
    }

    pub fn profile_icon_id(&self) -> i64 {
        self.profile_icon_id
    }

    pub fn summoner_level(&self) -> i64 {
        self.summoner_level
    }
}

impl From<SummonerDto> for Summoner {
    fn from(dto: SummonerDto) -> Self {
        Self {
            summoner_id: dto.id,
            account_id: dto.account_id,
            puuid: dto.puuid,
            profile_icon_id: dto.profile_icon_id,
            summoner_level: dto.summoner_level,
        }
    }
}

/// Standing of a summoner in one ranked queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    league_id: String,
    queue_type: Option<String>,
    tier: String,
    rank: String,
    summoner_id: String,
    league_points: i32,
    wins: i32,
    losses: i32,
    veteran: bool,
    inactive: bool,
    fresh_blood: bool,
    hot_streak: bool,
}

impl Entry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        league_id: impl Into<String>,
        tier: impl Into<String>,
        rank: impl Into<String>,
        summoner_id: impl Into<String>,
        league_points: i32,
        wins: i32,
        losses: i32,
        veteran: bool,
        inactive: bool,
        fresh_blood: bool,
        hot_streak: bool,
    ) -> Self {
        Self {
            league_id: league_id.into(),
            queue_type: None,
            tier: tier.into(),
            rank: rank.into(),
            summoner_id: summoner_id.into(),
            league_points: league_points.max(0),
            wins: wins.max(0),
            losses: losses.max(0),
            veteran,
            inactive,
            fresh_blood,
            hot_streak,
        }
    }

    pub fn with_queue_type(mut self, queue_type: impl Into<String>) -> Self {
        self.queue_type = Some(queue_type.into());
        self
    }

    pub fn league_id(&self) -> &str {
        &self.league_id
    }

    pub fn queue_type(&self) -> Option<&str> {
        self.queue_type.as_deref()
    }

    /// Raw tier code, e.g. `GOLD`.
    pub fn tier_code(&self) -> &str {
        &self.tier
    }

    pub fn tier(&self) -> Tier {
        Tier::from_code(Some(&self.tier))
    }

    /// Division inside the tier, `I` to `IV`.
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Display label such as `Gold II`.
    pub fn rank_label(&self) -> String {
        format!("{} {}", self.tier().name(), self.rank)
    }

    pub fn summoner_id(&self) -> &str {
        &self.summoner_id
    }

    pub fn league_points(&self) -> i32 {
        self.league_points
    }

    pub fn wins(&self) -> i32 {
        self.wins
    }

    pub fn losses(&self) -> i32 {
        self.losses
    }

    pub fn is_veteran(&self) -> bool {
        self.veteran
    }

    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    pub fn is_fresh_blood(&self) -> bool {
        self.fresh_blood
    }

    pub fn is_hot_streak(&self) -> bool {
        self.hot_streak
    }
}

impl From<LeagueEntryDto> for Entry {
    fn from(dto: LeagueEntryDto) -> Self {
        let entry = Entry::new(
            dto.league_id,
            dto.tier,
            dto.rank,
            dto.summoner_id,
            dto.league_points,
            dto.wins,
            dto.losses,
            dto.veteran,
            dto.inactive,
            dto.fresh_blood,
            dto.hot_streak,
        );

        match dto.queue_type {
            Some(queue_type) => entry.with_queue_type(queue_type),
            None => entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_from_dto_keeps_requested_riot_id_when_missing() {
        let dto = AccountDto {
            puuid: "P1".to_string(),
            game_name: None,
            tag_line: Some("2005".to_string()),
        };

        let account = Account::from_dto(dto, "NattyNatt", "EUW");
        assert_eq!(account, Account::new("P1", "NattyNatt", "2005"));
        assert_eq!(account.riot_id(), "NattyNatt#2005");
    }

    #[test]
    fn summoner_from_dto_matches_cached_shape() {
        let dto = SummonerDto {
            id: "S1".to_string(),
            account_id: "A1".to_string(),
            puuid: "P1".to_string(),
            profile_icon_id: 42,
            summoner_level: 77,
        };

        assert_eq!(Summoner::from(dto), Summoner::new("S1", "A1", "P1", 42, 77));
    }

    #[test]
    fn entry_rank_label_uses_tier_display_name() {
        let entry = Entry::new("L1", "GOLD", "II", "S1", 55, 10, 5, false, false, false, true);

        assert_eq!(entry.tier(), Tier::Gold);
        assert_eq!(entry.rank_label(), "Gold II");
        assert!(entry.is_hot_streak());
        assert_eq!(entry.queue_type(), None);
    }

    #[test]
    fn entry_counters_are_never_negative() {
        let entry = Entry::new("L1", "IRON", "IV", "S1", -3, -1, 2, false, false, false, false);

        assert_eq!(entry.league_points(), 0);
        assert_eq!(entry.wins(), 0);
        assert_eq!(entry.losses(), 2);
    }
}
