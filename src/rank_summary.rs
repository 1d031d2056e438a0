use serde::{Deserialize, Serialize};

use crate::tier_ordinal::{format_tier, Division, Tier, TierPoint};

/// A summoner's entry in one ranked queue, as returned by the summoner lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: i32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl RankedEntry {
    pub fn is_ranked(&self) -> bool {
        self.tier.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Percentage rounded to one decimal place, 0 with no games played.
    pub fn win_rate(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        let pct = f64::from(self.wins) / games as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }

    /// Apex tiers come back with rank "I"; it carries no meaning there.
    pub fn point(&self) -> Option<TierPoint> {
        let tier = Tier::parse(self.tier.as_deref()?)?;
        if !tier.has_divisions() {
            return TierPoint::new(tier, Division::Absent);
        }
        TierPoint::new(tier, Division::parse(self.rank.as_deref()?)?)
    }

    pub fn summary(&self) -> String {
        if !self.is_ranked() {
            return "Unranked".to_string();
        }
        let tier = format_tier(self.tier.as_deref(), self.rank.as_deref());
        format!("{} {}LP", tier, self.league_points)
    }
}
