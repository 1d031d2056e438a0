use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::tier_ordinal::{format_tier, from_ordinal, to_ordinal, TierPoint, MAX_ORDINAL};

pub const MIN_LP: i32 = 0;
pub const MAX_LP: i32 = 99;

/// `{tier, division, lp}` as it travels to and from the team-post API.
/// Any field may be missing in payloads coming back from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lp: Option<i32>,
}

impl TierRecord {
    pub fn from_point(point: &TierPoint, lp: i32) -> TierRecord {
        TierRecord {
            tier: Some(point.tier().as_str().to_string()),
            division: Some(point.division().as_str().to_string()),
            lp: Some(lp),
        }
    }

    /// A record missing either field is not a table entry and sits at 0.
    pub fn ordinal(&self) -> usize {
        match (&self.tier, &self.division) {
            (Some(tier), Some(division)) => to_ordinal(tier, division),
            _ => 0,
        }
    }

    pub fn point(&self) -> Option<TierPoint> {
        TierPoint::parse(self.tier.as_deref()?, self.division.as_deref()?)
    }

    pub fn display(&self) -> String {
        format_tier(self.tier.as_deref(), self.division.as_deref())
    }
}

/// `"Gold IV ~ Platinum I"`, or empty when either end is missing.
pub fn format_range(min: Option<&TierRecord>, max: Option<&TierRecord>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} ~ {}", min.display(), max.display()),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for SliderBounds {
    fn default() -> Self {
        SliderBounds { min: 0, max: MAX_ORDINAL }
    }
}

/// Track limits for the slider. Without both boundaries the full
/// Iron IV..Master scale is used.
pub fn slider_bounds(
    min_boundary: Option<&TierRecord>,
    max_boundary: Option<&TierRecord>,
) -> SliderBounds {
    match (min_boundary, max_boundary) {
        (Some(min), Some(max)) => SliderBounds { min: min.ordinal(), max: max.ordinal() },
        _ => SliderBounds::default(),
    }
}

/// Handle positions for a selected range, if both ends are present.
pub fn handles_from_records(
    min: Option<&TierRecord>,
    max: Option<&TierRecord>,
) -> Option<(usize, usize)> {
    Some((min?.ordinal(), max?.ordinal()))
}

/// Turn dragged handle positions back into records. The low end starts at
/// 0 LP and the high end runs to 99 LP so the range covers both divisions fully.
pub fn records_from_handles(min_index: i32, max_index: i32) -> (TierRecord, TierRecord) {
    (
        TierRecord::from_point(&from_ordinal(min_index), MIN_LP),
        TierRecord::from_point(&from_ordinal(max_index), MAX_LP),
    )
}

/// Inclusive range of tier points. LP plays no part in membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRange {
    pub min: TierPoint,
    pub max: TierPoint,
}

impl TierRange {
    pub fn from_handles(min_index: i32, max_index: i32) -> TierRange {
        TierRange { min: from_ordinal(min_index), max: from_ordinal(max_index) }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, point: &TierPoint) -> bool {
        self.min <= *point && *point <= self.max
    }

    pub fn records(&self) -> (TierRecord, TierRecord) {
        (TierRecord::from_point(&self.min, MIN_LP), TierRecord::from_point(&self.max, MAX_LP))
    }
}

/// Body fragment for creating a team post with a tier requirement.
pub fn request_body(min: &TierRecord, max: &TierRecord) -> Value {
    json!({
        "minTier": min,
        "maxTier": max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tier: &str, division: &str) -> TierRecord {
        TierRecord {
            tier: Some(tier.to_string()),
            division: Some(division.to_string()),
            lp: None,
        }
    }

    #[test]
    fn test_format_range() {
        let min = record("IRON", "IV");
        let max = record("DIAMOND", "I");
        assert_eq!(format_range(Some(&min), Some(&max)), "Iron IV ~ Diamond I");
        let master = record("MASTER", "");
        assert_eq!(format_range(Some(&record("GOLD", "IV")), Some(&master)), "Gold IV ~ Master");
        assert_eq!(format_range(Some(&min), None), "");
        assert_eq!(format_range(None, Some(&max)), "");
    }

    #[test]
    fn test_format_range_partial_record() {
        let min = TierRecord::default();
        let max = record("GOLD", "II");
        assert_eq!(format_range(Some(&min), Some(&max)), "Unranked ~ Gold II");
    }

    #[test]
    fn test_slider_bounds() {
        assert_eq!(slider_bounds(None, None), SliderBounds { min: 0, max: 28 });
        assert_eq!(slider_bounds(Some(&record("GOLD", "IV")), None), SliderBounds::default());
        assert_eq!(
            slider_bounds(Some(&record("SILVER", "IV")), Some(&record("PLATINUM", "I"))),
            SliderBounds { min: 8, max: 19 }
        );
    }

    #[test]
    fn test_handles_from_records() {
        let iron = record("IRON", "IV");
        let master = record("MASTER", "");
        assert_eq!(handles_from_records(Some(&iron), Some(&master)), Some((0, 28)));

        let invalid = record("GOLD", "NONE");
        let gold = record("GOLD", "I");
        assert_eq!(handles_from_records(Some(&invalid), Some(&gold)), Some((0, 15)));
        assert_eq!(handles_from_records(None, Some(&gold)), None);
    }

    #[test]
    fn test_records_from_handles() {
        let (min, max) = records_from_handles(12, 28);
        assert_eq!(min, TierRecord { lp: Some(0), ..record("GOLD", "IV") });
        assert_eq!(max, TierRecord { lp: Some(99), ..record("MASTER", "") });

        let (min, max) = records_from_handles(-1, 40);
        assert_eq!(min.point(), Some(TierPoint::FLOOR));
        assert_eq!(max.point(), Some(TierPoint::FLOOR));
    }

    #[test]
    fn test_range_contains() {
        let range = TierRange::from_handles(12, 19);
        assert!(range.is_ordered());
        assert!(range.contains(&from_ordinal(12)));
        assert!(range.contains(&from_ordinal(19)));
        assert!(!range.contains(&from_ordinal(11)));
        assert!(!range.contains(&from_ordinal(20)));
        assert!(!TierRange::from_handles(19, 12).is_ordered());
    }

    #[test]
    fn test_request_body() {
        let (min, max) = TierRange::from_handles(4, 28).records();
        let body = request_body(&min, &max);
        assert_eq!(
            body,
            json!({
                "minTier": {"tier": "BRONZE", "division": "IV", "lp": 0},
                "maxTier": {"tier": "MASTER", "division": "", "lp": 99},
            })
        );
    }

    #[test]
    fn test_record_from_backend_payload() {
        let min: TierRecord =
            serde_json::from_value(json!({"tier": "EMERALD", "division": "II", "lp": 40})).unwrap();
        assert_eq!(min.ordinal(), 22);
        assert_eq!(min.point().map(|p| p.ordinal()), Some(22));

        // a missing division is not the same as an empty one
        for tier in &["MASTER", "CHALLENGER", "GOLD"] {
            let max: TierRecord = serde_json::from_value(json!({ "tier": tier })).unwrap();
            assert_eq!(max.ordinal(), 0);
            assert_eq!(max.point(), None);
        }
        assert_eq!(record("CHALLENGER", "").ordinal(), 28);

        let empty: TierRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.ordinal(), 0);
    }
}
