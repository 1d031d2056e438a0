use serde::{Deserialize, Serialize};

/// Queue a team post recruits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    SoloRank,
    FlexRank,
    OtherModes,
}

impl MatchType {
    pub fn parse(label: &str) -> Option<MatchType> {
        match label {
            "SOLO_RANK" => Some(MatchType::SoloRank),
            "FLEX_RANK" => Some(MatchType::FlexRank),
            "OTHER_MODES" => Some(MatchType::OtherModes),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchType::SoloRank => "솔로랭크",
            MatchType::FlexRank => "자유랭크",
            MatchType::OtherModes => "기타 모드",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MatchType::SoloRank => "🏆",
            MatchType::FlexRank => "🎮",
            MatchType::OtherModes => "⚔️",
        }
    }

    /// Solo queue has no Master+ recruiting option.
    pub fn allows_master_plus(self) -> bool {
        self != MatchType::SoloRank
    }
}

/// Unknown labels are echoed back unchanged.
pub fn format_match_type(label: &str) -> String {
    MatchType::parse(label).map_or_else(|| label.to_string(), |m| m.label().to_string())
}

pub fn match_type_icon(label: &str) -> &'static str {
    MatchType::parse(label).map_or("📌", MatchType::icon)
}
