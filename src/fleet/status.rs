use serde::{Deserialize, Serialize};

use crate::repair::constants::{BELOW_MINOR_PERCENT, MODERATE_DAMAGE_THRESHOLD};

/// 損傷度を表す列挙型。
/// 判定は耐久割合の境界を含む側に倒す (ちょうど 50% は中破、ちょうど 75% は小破)。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DamagedLevel {
    NoDamage,
    Minor,
    Moderate,
    Heavy,
    Sunk,
}

impl DamagedLevel {
    pub fn from_hp(now_hp: u16, max_hp: u16) -> Self {
        if now_hp == 0 || max_hp == 0 {
            return DamagedLevel::Sunk;
        }
        let ratio = now_hp as f64 / max_hp as f64;
        if ratio <= 0.25 {
            DamagedLevel::Heavy
        } else if ratio <= MODERATE_DAMAGE_THRESHOLD {
            DamagedLevel::Moderate
        } else if ratio <= BELOW_MINOR_PERCENT {
            DamagedLevel::Minor
        } else {
            DamagedLevel::NoDamage
        }
    }

    /// 中破未満 (耐久 50% 超) かどうか。泊地修理の旗艦条件。
    pub fn is_below_moderate(&self) -> bool {
        *self <= DamagedLevel::Minor
    }

    /// 小破未満 (耐久 75% 超) かどうか。野埼と二番艦の条件。
    pub fn is_healthy(&self) -> bool {
        *self == DamagedLevel::NoDamage
    }
}
