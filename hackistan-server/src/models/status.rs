//! Hackathon lifecycle status

use serde::{Deserialize, Serialize};

/// Hackathon status, matching the `hackathons.status` CHECK constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Upcoming,
    Active,
    Past,
}

impl HackathonStatus {
    /// Parse status from its stored form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(Self::Upcoming),
            "active" => Some(Self::Active),
            "past" => Some(Self::Past),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
