//! Sponsor tiers and their display rank

use serde::{Deserialize, Serialize};

/// Rank given to sponsors with no recognised tier; sorts after bronze.
pub const UNRANKED: u8 = 5;

/// Sponsorship tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl SponsorTier {
    /// Parse a tier as stored in the database.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "platinum" => Some(Self::Platinum),
            "gold" => Some(Self::Gold),
            "silver" => Some(Self::Silver),
            "bronze" => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Display rank: platinum=1 through bronze=4.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Platinum => 1,
            Self::Gold => 2,
            Self::Silver => 3,
            Self::Bronze => 4,
        }
    }

    /// Rank for an optional tier; missing tiers sort last.
    pub fn rank_of(tier: Option<Self>) -> u8 {
        tier.map_or(UNRANKED, |t| t.rank())
    }
}
