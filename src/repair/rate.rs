use serde::{Deserialize, Serialize};

use crate::fleet::{MasterShipId, MoraleBooster};
use crate::repair::constants::{
    DEFAULT_LEVEL, DEFAULT_SHIP_TYPE, DOCKING_OFFSET_MS, MAX_CONDITION, MODERATE_DAMAGE_THRESHOLD,
    REPAIR_INTERVAL_MS,
};
use crate::repair::ship_type_factor;

const MINUTE_MS: u64 = 60 * 1000;

fn ceil_to_minute(time: u64) -> u64 {
    time.div_ceil(MINUTE_MS) * MINUTE_MS
}

/// 中破以下 (耐久 50% 以下) かどうか。
fn is_moderate_or_worse(now_hp: u16, max_hp: u16) -> bool {
    now_hp as f64 <= max_hp as f64 * MODERATE_DAMAGE_THRESHOLD
}

/// 泊地修理で全回復するまでの時間 (ミリ秒) を見積もる。
///
/// 入渠時間が 0、無傷、中破以下の場合は 0。
/// 残り 1 の場合は最短間隔、それ以外は入渠時間からオフセットを引いて分単位に切り上げた値
/// (ただし最短間隔を下回らない)。
pub fn estimate_repair_duration(now_hp: u16, max_hp: u16, dock_time_ms: u64) -> u64 {
    if dock_time_ms == 0 || now_hp >= max_hp {
        return 0;
    }
    if is_moderate_or_worse(now_hp, max_hp) {
        return 0;
    }
    if max_hp - now_hp == 1 {
        return REPAIR_INTERVAL_MS;
    }
    ceil_to_minute(dock_time_ms.saturating_sub(DOCKING_OFFSET_MS)).max(REPAIR_INTERVAL_MS)
}

/// 入渠時間から逆算した 1HP あたりの修理時間 (ミリ秒)。分単位の丸めは行わない。
pub fn per_hp_duration(now_hp: u16, max_hp: u16, dock_time_ms: u64) -> f64 {
    if now_hp >= max_hp || (now_hp as f64) < max_hp as f64 * MODERATE_DAMAGE_THRESHOLD {
        return 0.0;
    }
    (dock_time_ms as f64 - DOCKING_OFFSET_MS as f64) / (max_hp - now_hp) as f64
}

/// レベルと艦種から 1HP あたりの修理時間 (ミリ秒) を求める。
/// 省略時はレベル 1、艦種 1 (海防艦) として扱う。係数が 0 か未知の艦種なら 0。
pub fn per_hp_duration_by_level_and_class(level: Option<u16>, ship_type: Option<u16>) -> f64 {
    let level = level.unwrap_or(DEFAULT_LEVEL) as f64;
    let factor = ship_type_factor(ship_type.unwrap_or(DEFAULT_SHIP_TYPE)).map_or(0.0, |f| f.factor);
    if factor == 0.0 {
        return 0.0;
    }

    if level < 12.0 {
        return level * 10.0 * factor * 1000.0;
    }
    (level * 5.0 + (f64::floor(f64::sqrt(level - 11.0)) * 10.0 + 50.0)) * factor * 1000.0
}

/// タイマー開始からの経過時間 (秒) で回復している HP を見積もる。
///
/// 最短間隔に満たない間は 0。以降は少なくとも 1、多くとも損傷分。
pub fn estimate_hp_repaired(
    now_hp: u16,
    max_hp: u16,
    per_hp_ms: f64,
    elapsed_secs: f64,
    slot_available: bool,
) -> u16 {
    if now_hp >= max_hp || per_hp_ms == 0.0 || !slot_available {
        return 0;
    }
    if is_moderate_or_worse(now_hp, max_hp) {
        return 0;
    }
    let elapsed_ms = elapsed_secs * 1000.0;
    if elapsed_ms < REPAIR_INTERVAL_MS as f64 {
        return 0;
    }

    let repaired = f64::floor(elapsed_ms / per_hp_ms).max(1.0);
    let damage = max_hp - now_hp;
    if repaired >= damage as f64 {
        damage
    } else {
        repaired as u16
    }
}

/// 戦意高揚の見積もり結果。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoraleBoost {
    pub can_boost: bool,
    pub boost_amount: u16,
}

/// 疲労度 `condition` の艦が野埼 (`booster_ship_id`) から受けとる疲労度を見積もる。
/// 上限 54 を超える分は切り捨てる。
pub fn morale_boost_estimate(condition: u16, booster_ship_id: Option<MasterShipId>) -> MoraleBoost {
    let Some(booster) = booster_ship_id.and_then(MoraleBooster::from_ship_id) else {
        return MoraleBoost::default();
    };
    if condition >= MAX_CONDITION {
        return MoraleBoost::default();
    }
    MoraleBoost {
        can_boost: true,
        boost_amount: booster.base_amount().min(MAX_CONDITION - condition),
    }
}
