use serde::Deserialize;

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub profile_icon_id: i64,
    pub summoner_level: i64,
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub league_id: String,
    #[serde(default)]
    pub queue_type: Option<String>,
    pub tier: String,
    pub rank: String,
    pub summoner_id: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub hot_streak: bool,
}

impl LeagueEntryDto {
    pub const SOLO_QUEUE: &'static str = "RANKED_SOLO_5x5";

    pub fn is_solo_queue(&self) -> bool {
        self.queue_type.as_deref() == Some(Self::SOLO_QUEUE)
    }

    /// Pick the entry reported for a player: the solo/duo queue if the player is
    /// placed there, otherwise the first entry in response order.
    pub fn select(entries: Vec<LeagueEntryDto>) -> Option<LeagueEntryDto> {
        let solo = entries.iter().position(LeagueEntryDto::is_solo_queue);
        entries.into_iter().nth(solo.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(queue_type: Option<&str>, league_id: &str) -> LeagueEntryDto {
        LeagueEntryDto {
            league_id: league_id.to_string(),
            queue_type: queue_type.map(str::to_string),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            summoner_id: "S1".to_string(),
            league_points: 0,
            wins: 0,
            losses: 0,
            veteran: false,
            inactive: false,
            fresh_blood: false,
            hot_streak: false,
        }
    }

    #[test]
    fn select_prefers_solo_queue() {
        let entries = vec![
            entry(Some("RANKED_FLEX_SR"), "flex"),
            entry(Some("RANKED_SOLO_5x5"), "solo"),
        ];

        let selected = LeagueEntryDto::select(entries).unwrap();
        assert_eq!(selected.league_id, "solo");
    }

    #[test]
    fn select_falls_back_to_first_entry() {
        let entries = vec![
            entry(Some("RANKED_FLEX_SR"), "flex"),
            entry(Some("CHERRY"), "arena"),
        ];

        assert_eq!(LeagueEntryDto::select(entries).unwrap().league_id, "flex");
        assert!(LeagueEntryDto::select(Vec::new()).is_none());
    }

    #[test]
    fn league_entry_flags_default_to_false() {
        let json = r#"{
            "leagueId": "L1",
            "tier": "SILVER",
            "rank": "IV",
            "summonerId": "S1",
            "leaguePoints": 12,
            "wins": 3,
            "losses": 4
        }"#;

        let dto: LeagueEntryDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.queue_type, None);
        assert!(!dto.hot_streak);
        assert_eq!(dto.league_points, 12);
    }
}
