use std::fmt;

/// Competitive tiers, lowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    #[default]
    Unranked,
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Unranked,
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// Map a tier code as sent by League-v4 (e.g. `GOLD`). Unknown or missing
    /// codes fall back to [`Tier::Unranked`].
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.map(str::trim) else {
            return Tier::Unranked;
        };

        Self::ALL
            .into_iter()
            .skip(1)
            .find(|tier| tier.code().is_some_and(|c| c.eq_ignore_ascii_case(code)))
            .unwrap_or(Tier::Unranked)
    }

    /// Code used by the Riot API, `None` for [`Tier::Unranked`].
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Unranked => None,
            Self::Iron => Some("IRON"),
            Self::Bronze => Some("BRONZE"),
            Self::Silver => Some("SILVER"),
            Self::Gold => Some("GOLD"),
            Self::Platinum => Some("PLATINUM"),
            Self::Diamond => Some("DIAMOND"),
            Self::Master => Some("MASTER"),
            Self::Grandmaster => Some("GRANDMASTER"),
            Self::Challenger => Some("CHALLENGER"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unranked => "Unranked",
            Self::Iron => "Iron",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_matched_case_insensitively() {
        assert_eq!(Tier::from_code(Some("GOLD")), Tier::Gold);
        assert_eq!(Tier::from_code(Some("gold")), Tier::Gold);
        assert_eq!(Tier::from_code(Some("GrandMaster")), Tier::Grandmaster);
    }

    #[test]
    fn missing_or_unknown_codes_are_unranked() {
        assert_eq!(Tier::from_code(None), Tier::Unranked);
        assert_eq!(Tier::from_code(Some("")), Tier::Unranked);
        assert_eq!(Tier::from_code(Some("WOOD")), Tier::Unranked);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Unranked < Tier::Iron);
        assert!(Tier::Master < Tier::Challenger);
        assert_eq!(Tier::Platinum.to_string(), "Platinum");
    }
}
