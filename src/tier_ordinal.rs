use std::cmp::Ordering;
use std::fmt;

/// Ranked tiers, lowest first. Master, Grandmaster and Challenger share one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
}

impl Tier {
    /// Parse a wire label. The apex labels all collapse into `Tier::Master`.
    pub fn parse(label: &str) -> Option<Tier> {
        let tier = match label {
            "IRON" => Tier::Iron,
            "BRONZE" => Tier::Bronze,
            "SILVER" => Tier::Silver,
            "GOLD" => Tier::Gold,
            "PLATINUM" => Tier::Platinum,
            "EMERALD" => Tier::Emerald,
            "DIAMOND" => Tier::Diamond,
            "MASTER" | "GRANDMASTER" | "CHALLENGER" | "MASTER_PLUS" => Tier::Master,
            _ => return None,
        };
        Some(tier)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn has_divisions(self) -> bool {
        self != Tier::Master
    }
}

/// Sub-rank inside a tier, weakest first. `Absent` is only valid for Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Division {
    IV,
    III,
    II,
    I,
    Absent,
}

impl Division {
    /// `"NONE"` and `""` are both spellings of `Absent`.
    pub fn parse(label: &str) -> Option<Division> {
        let division = match label {
            "IV" => Division::IV,
            "III" => Division::III,
            "II" => Division::II,
            "I" => Division::I,
            "NONE" | "" => Division::Absent,
            _ => return None,
        };
        Some(division)
    }

    /// Wire spelling; `Absent` goes out as the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Division::IV => "IV",
            Division::III => "III",
            Division::II => "II",
            Division::I => "I",
            Division::Absent => "",
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// A valid (tier, division) pair. Ordered by tier rank, then division rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TierPoint {
    tier: Tier,
    division: Division,
}

impl TierPoint {
    pub const FLOOR: TierPoint = TierPoint::raw(Tier::Iron, Division::IV);

    const fn raw(tier: Tier, division: Division) -> TierPoint {
        TierPoint { tier, division }
    }

    /// Returns `None` unless Master is paired with `Absent` and every other
    /// tier with one of IV..I.
    pub fn new(tier: Tier, division: Division) -> Option<TierPoint> {
        if tier.has_divisions() == (division == Division::Absent) {
            return None;
        }
        Some(TierPoint { tier, division })
    }

    pub fn parse(tier: &str, division: &str) -> Option<TierPoint> {
        TierPoint::new(Tier::parse(tier)?, Division::parse(division)?)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn ordinal(&self) -> usize {
        // Every constructed point is in the table.
        TIER_DIVISIONS.iter().position(|p| p == self).unwrap_or(0)
    }
}

impl fmt::Display for TierPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tier(Some(self.tier.as_str()), Some(self.division.as_str())))
    }
}

pub const ORDINAL_COUNT: usize = 29;
pub const MAX_ORDINAL: usize = ORDINAL_COUNT - 1;

/// Every valid point in slider order, Iron IV at 0 through Master at 28.
pub const TIER_DIVISIONS: [TierPoint; ORDINAL_COUNT] = {
    use Division::*;
    use Tier::*;
    [
        TierPoint::raw(Iron, IV),
        TierPoint::raw(Iron, III),
        TierPoint::raw(Iron, II),
        TierPoint::raw(Iron, I),
        TierPoint::raw(Bronze, IV),
        TierPoint::raw(Bronze, III),
        TierPoint::raw(Bronze, II),
        TierPoint::raw(Bronze, I),
        TierPoint::raw(Silver, IV),
        TierPoint::raw(Silver, III),
        TierPoint::raw(Silver, II),
        TierPoint::raw(Silver, I),
        TierPoint::raw(Gold, IV),
        TierPoint::raw(Gold, III),
        TierPoint::raw(Gold, II),
        TierPoint::raw(Gold, I),
        TierPoint::raw(Platinum, IV),
        TierPoint::raw(Platinum, III),
        TierPoint::raw(Platinum, II),
        TierPoint::raw(Platinum, I),
        TierPoint::raw(Emerald, IV),
        TierPoint::raw(Emerald, III),
        TierPoint::raw(Emerald, II),
        TierPoint::raw(Emerald, I),
        TierPoint::raw(Diamond, IV),
        TierPoint::raw(Diamond, III),
        TierPoint::raw(Diamond, II),
        TierPoint::raw(Diamond, I),
        TierPoint::raw(Master, Absent),
    ]
};

/// Slider position of a (tier, division) pair given as wire labels.
/// Anything that isn't a valid pair degrades to 0.
pub fn to_ordinal(tier: &str, division: &str) -> usize {
    match TierPoint::parse(tier, division) {
        Some(point) => point.ordinal(),
        None => {
            debug!("unknown tier pair ({:?}, {:?}), using ordinal 0", tier, division);
            0
        }
    }
}

/// Inverse of `to_ordinal`. Out-of-range indexes in either direction fall
/// back to Iron IV, not to the nearest end.
pub fn from_ordinal(index: i32) -> TierPoint {
    if index < 0 || index as usize >= ORDINAL_COUNT {
        debug!("slider index {} out of range, using Iron IV", index);
        return TierPoint::FLOOR;
    }
    TIER_DIVISIONS[index as usize]
}

pub fn compare(a: &TierPoint, b: &TierPoint) -> Ordering {
    a.cmp(b)
}

/// Compare raw labels without validating the pair. Unknown tiers rank as
/// Iron and unknown divisions as IV.
pub fn compare_labels(tier1: &str, division1: &str, tier2: &str, division2: &str) -> Ordering {
    let tier_rank = |t: &str| Tier::parse(t).map_or(0, Tier::rank);
    let division_rank = |d: &str| Division::parse(d).map_or(0, Division::rank);

    tier_rank(tier1)
        .cmp(&tier_rank(tier2))
        .then_with(|| division_rank(division1).cmp(&division_rank(division2)))
}

fn is_apex_label(tier: &str) -> bool {
    matches!(tier, "MASTER" | "GRANDMASTER" | "CHALLENGER" | "MASTER_PLUS")
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Display label for a tier, e.g. `"Gold II"`, `"Master"`, `"Master+"`.
/// A missing or empty tier renders as `"Unranked"`.
pub fn format_tier(tier: Option<&str>, division: Option<&str>) -> String {
    let tier = match tier {
        Some(t) if !t.is_empty() => t,
        _ => return "Unranked".to_string(),
    };
    let name = title_case(tier);

    match division {
        Some(d) if !is_apex_label(tier) && !d.is_empty() && d != "NONE" => {
            format!("{} {}", name, d)
        }
        _ => name.replace("_plus", "+"),
    }
}
