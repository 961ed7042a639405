use serde::{Deserialize, Serialize};

use crate::detail::ShipRepairDetail;
use crate::fleet::ShipId;
use crate::repair::constants::{MAX_CONDITION, MORALE_INTERVAL_MS};
use crate::repair::{countdown_label, estimate_hp_repaired, hp_label, CountdownLabel, HpLabel};
use crate::timer::{TimerSnapshot, Timestamp};

/// 表示用に、見積もりとタイマーを組み合わせた1隻分の進捗。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipProgress {
    pub id: ShipId,
    /// 泊地修理タイマーの経過秒数。停止中は 0。
    pub elapsed_secs: f64,
    pub hp_repaired: u16,
    /// 全回復する時刻。通知の予約に使う。
    pub complete_time: Option<Timestamp>,
    pub remaining_secs: Option<i64>,
    pub countdown_label: Option<CountdownLabel>,
    pub hp_label: HpLabel,
    /// 次に戦意高揚が入る時刻。
    pub next_morale_tick: Option<Timestamp>,
    /// 戦意高揚タイマー開始から加算された疲労度の見込み。
    pub morale_accrued: u16,
}

/// 1隻分の進捗を計算する。
pub fn ship_progress(detail: &ShipRepairDetail, timer: &TimerSnapshot, now: Timestamp) -> ShipProgress {
    let elapsed_secs = timer.repair_elapsed(now).unwrap_or(0) as f64 / 1000.0;
    let hp_repaired = if detail.in_repair {
        0
    } else {
        estimate_hp_repaired(
            detail.now_hp,
            detail.max_hp,
            detail.time_per_hp,
            elapsed_secs,
            detail.available_srf,
        )
    };

    let complete_time = (timer.repair_active()
        && detail.estimate > 0
        && detail.available_srf
        && !detail.in_repair)
        .then(|| timer.last_repair_refresh + detail.estimate);
    let remaining_secs = complete_time.map(|t| (t as i64 - now as i64).div_euclid(1000));

    let boosting = detail.can_boost_morale && timer.morale_active();
    let next_morale_tick = boosting.then(|| {
        let elapsed = timer.morale_elapsed(now).unwrap_or(0);
        timer.last_morale_refresh + (elapsed / MORALE_INTERVAL_MS + 1) * MORALE_INTERVAL_MS
    });
    let morale_accrued = if boosting {
        let ticks = timer.morale_elapsed(now).unwrap_or(0) / MORALE_INTERVAL_MS;
        let headroom = MAX_CONDITION.saturating_sub(detail.condition) as u64;
        (ticks * detail.morale_boost_amount as u64).min(headroom) as u16
    } else {
        0
    };

    ShipProgress {
        id: detail.id,
        elapsed_secs,
        hp_repaired,
        complete_time,
        remaining_secs,
        countdown_label: remaining_secs.map(countdown_label),
        hp_label: hp_label(detail.now_hp, detail.max_hp, detail.available_srf, detail.in_repair),
        next_morale_tick,
        morale_accrued,
    }
}

/// 艦隊の全艦の進捗を計算する。
pub fn fleet_progress(
    details: &[ShipRepairDetail],
    timer: &TimerSnapshot,
    now: Timestamp,
) -> Vec<ShipProgress> {
    details.iter().map(|d| ship_progress(d, timer, now)).collect()
}
