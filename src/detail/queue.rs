use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::fleet::{MasterShipId, PortSnapshot, Ship, ShipId};
use crate::repair::{estimate_repair_duration, per_hp_duration};

/// 艦隊番号を調べる対象の艦隊数 (第1〜第4艦隊)。
const QUEUE_FLEET_COUNT: usize = 4;

/// 修理待ち一覧の並べ替えキー。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QueueSortKey {
    #[default]
    HpRatio,
    RepairTime,
    PerHp,
}

impl QueueSortKey {
    /// JS から渡された文字列を解釈する。未知の値は None。
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "hpRatio" => Some(QueueSortKey::HpRatio),
            "repairTime" => Some(QueueSortKey::RepairTime),
            "perHp" => Some(QueueSortKey::PerHp),
            _ => None,
        }
    }
}

/// 泊地修理で直せる損傷艦の一覧の1行。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: ShipId,
    pub ship_id: MasterShipId,
    pub name: Option<String>,
    pub level: u16,
    pub now_hp: u16,
    pub max_hp: u16,
    /// 所属する艦隊の番号 (0 始まり)。第1〜第4艦隊のどれにも居なければ None。
    pub fleet_index: Option<usize>,
    /// 全回復までの見積もり時間 (ミリ秒)。
    pub estimate: u64,
    pub per_hp: f64,
    pub hp_ratio: f64,
}

impl QueueEntry {
    fn new(ship: &Ship, snapshot: &PortSnapshot) -> Self {
        let fleet_index = snapshot
            .fleets()
            .iter()
            .take(QUEUE_FLEET_COUNT)
            .position(|fleet| fleet.contains(ship.id()));
        Self {
            id: ship.id(),
            ship_id: ship.ship_id(),
            name: snapshot.master_of(ship).map(|m| m.name().to_owned()),
            level: ship.level(),
            now_hp: ship.now_hp(),
            max_hp: ship.max_hp(),
            fleet_index,
            estimate: estimate_repair_duration(ship.now_hp(), ship.max_hp(), ship.dock_time()),
            per_hp: per_hp_duration(ship.now_hp(), ship.max_hp(), ship.dock_time()),
            hp_ratio: ship.hp_ratio(),
        }
    }

    fn compare(&self, other: &Self, key: QueueSortKey) -> Ordering {
        match key {
            QueueSortKey::HpRatio => self.hp_ratio.total_cmp(&other.hp_ratio),
            QueueSortKey::RepairTime => self.estimate.cmp(&other.estimate),
            QueueSortKey::PerHp => self.per_hp.total_cmp(&other.per_hp),
        }
    }
}

/// 入渠していない艦のうち、泊地修理の見積もりが 0 より大きい艦を並べる。
/// 同じ値の艦は艦娘IDの昇順に並べる。
pub fn repair_queue(snapshot: &PortSnapshot, key: QueueSortKey, descending: bool) -> Vec<QueueEntry> {
    snapshot
        .ships()
        .filter(|ship| !snapshot.is_in_dock(ship.id()))
        .map(|ship| QueueEntry::new(ship, snapshot))
        .filter(|entry| entry.estimate > 0)
        .sorted_by(|a, b| {
            let order = a.compare(b, key);
            let order = if descending { order.reverse() } else { order };
            order.then(a.id.cmp(&b.id))
        })
        .collect()
}
