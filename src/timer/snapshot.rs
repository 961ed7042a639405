use serde::{Deserialize, Serialize};

use crate::repair::constants::{MORALE_INTERVAL_MS, REPAIR_INTERVAL_MS};

/// エポックからのミリ秒。
pub type Timestamp = u64;

/// 2つのタイマーの開始時刻。0 は停止中。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub last_repair_refresh: Timestamp,
    pub last_morale_refresh: Timestamp,
}

fn elapsed(start: Timestamp, now: Timestamp) -> Option<u64> {
    (start > 0).then(|| now.saturating_sub(start))
}

fn within(start: Timestamp, now: Timestamp, interval: u64) -> bool {
    elapsed(start, now).map_or(true, |e| e < interval)
}

impl TimerSnapshot {
    pub fn repair_active(&self) -> bool {
        self.last_repair_refresh > 0
    }

    pub fn morale_active(&self) -> bool {
        self.last_morale_refresh > 0
    }

    /// 泊地修理タイマーの経過時間 (ミリ秒)。停止中なら None。
    pub fn repair_elapsed(&self, now: Timestamp) -> Option<u64> {
        elapsed(self.last_repair_refresh, now)
    }

    /// 戦意高揚タイマーの経過時間 (ミリ秒)。停止中なら None。
    pub fn morale_elapsed(&self, now: Timestamp) -> Option<u64> {
        elapsed(self.last_morale_refresh, now)
    }

    /// 泊地修理タイマーが 20 分未満か。停止中も真。
    pub fn repair_within_interval(&self, now: Timestamp) -> bool {
        within(self.last_repair_refresh, now, REPAIR_INTERVAL_MS)
    }

    /// 戦意高揚タイマーが 15 分未満か。停止中も真。
    pub fn morale_within_interval(&self, now: Timestamp) -> bool {
        within(self.last_morale_refresh, now, MORALE_INTERVAL_MS)
    }
}
