use serde::{Deserialize, Serialize};

use crate::repair::constants::MODERATE_DAMAGE_THRESHOLD;

/// 耐久表示の色分け。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HpLabel {
    Success,
    Primary,
    Warning,
}

/// 耐久表示の色分けを決める。
/// 修理枠から外れている艦は常に Warning、無傷か入渠中なら Success。
pub fn hp_label(now_hp: u16, max_hp: u16, slot_available: bool, in_dock: bool) -> HpLabel {
    if !slot_available {
        return HpLabel::Warning;
    }
    if now_hp >= max_hp || in_dock {
        return HpLabel::Success;
    }
    if now_hp as f64 >= max_hp as f64 * MODERATE_DAMAGE_THRESHOLD {
        HpLabel::Primary
    } else {
        HpLabel::Warning
    }
}

/// カウントダウン表示の色分け。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CountdownLabel {
    Primary,
    Warning,
    Success,
    Default,
}

/// 残り時間 (秒) からカウントダウン表示の色分けを決める。
pub fn countdown_label(remaining_secs: i64) -> CountdownLabel {
    match remaining_secs {
        r if r > 600 => CountdownLabel::Primary,
        r if r > 60 => CountdownLabel::Warning,
        r if r >= 0 => CountdownLabel::Success,
        _ => CountdownLabel::Default,
    }
}
