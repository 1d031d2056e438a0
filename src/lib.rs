#[macro_use] extern crate log;

pub mod match_type;
pub mod rank_summary;
pub mod tier_ordinal;
pub mod tier_range;

pub use tier_ordinal::{compare, format_tier, from_ordinal, to_ordinal, Division, Tier, TierPoint};
pub use tier_range::{format_range, TierRange, TierRecord};
