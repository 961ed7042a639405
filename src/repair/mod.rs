//! 泊地修理・戦意高揚の所要時間と回復量を求める純粋関数群。

pub mod constants;

mod factor;
pub use factor::{ship_type_factor, ShipTypeFactor, SHIP_TYPE_FACTORS};

mod rate;
pub use rate::{
    estimate_hp_repaired, estimate_repair_duration, morale_boost_estimate, per_hp_duration,
    per_hp_duration_by_level_and_class, MoraleBoost,
};

mod label;
pub use label::{countdown_label, hp_label, CountdownLabel, HpLabel};
