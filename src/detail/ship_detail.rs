use log::warn;
use serde::{Deserialize, Serialize};

use crate::eligibility::{fleet_repair_count, fleet_status};
use crate::fleet::{Fleet, MasterShipId, PortSnapshot, ShipId};
use crate::repair::constants::PAIRED_REPAIR_TIME_MULTIPLIER;
use crate::repair::{estimate_repair_duration, morale_boost_estimate, per_hp_duration_by_level_and_class};

/// 艦隊内の1隻分の泊地修理・戦意高揚の見積もり。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipRepairDetail {
    pub id: ShipId,
    pub ship_id: MasterShipId,
    pub level: u16,
    pub now_hp: u16,
    pub max_hp: u16,
    pub condition: u16,
    pub dock_time: u64,
    pub name: Option<String>,
    pub ship_type: Option<u16>,
    /// 全回復までの見積もり時間 (ミリ秒)。
    pub estimate: u64,
    /// 1HP あたりの修理時間 (ミリ秒)。
    pub time_per_hp: f64,
    pub in_repair: bool,
    /// 修理枠に入っているかどうか。
    pub available_srf: bool,
    pub can_boost_morale: bool,
    pub morale_boost_amount: u16,
}

/// 艦隊の各艦の見積もりを艦隊順に作る。
///
/// 修理枠は損傷の大きさに関係なく先頭から順に割り当てる。
/// `booster_ship_id` は艦隊にいる野埼の艦船ID。野埼自身と入渠中の艦は戦意高揚の対象外。
/// `paired` が真なら1HPあたりの時間に 0.85 を掛ける。
pub fn fleet_repair_detail(
    fleet: &Fleet,
    snapshot: &PortSnapshot,
    repair_capacity: usize,
    booster_ship_id: Option<MasterShipId>,
    paired: bool,
) -> Vec<ShipRepairDetail> {
    fleet
        .valid_ship_ids()
        .enumerate()
        .filter_map(|(index, id)| {
            let Some(ship) = snapshot.ship(id) else {
                warn!("Fleet {}: ship {} not found in snapshot", fleet.id(), id);
                return None;
            };
            let master = snapshot.master_of(ship);
            let ship_type = master.map(|m| m.ship_type());
            let in_repair = snapshot.is_in_dock(id);

            let mut time_per_hp = per_hp_duration_by_level_and_class(Some(ship.level()), ship_type);
            if paired {
                time_per_hp *= PAIRED_REPAIR_TIME_MULTIPLIER;
            }

            let is_booster = booster_ship_id == Some(ship.ship_id());
            let boost = if is_booster || in_repair {
                Default::default()
            } else {
                morale_boost_estimate(ship.condition(), booster_ship_id)
            };

            Some(ShipRepairDetail {
                id,
                ship_id: ship.ship_id(),
                level: ship.level(),
                now_hp: ship.now_hp(),
                max_hp: ship.max_hp(),
                condition: ship.condition(),
                dock_time: ship.dock_time(),
                name: master.map(|m| m.name().to_owned()),
                ship_type,
                estimate: estimate_repair_duration(ship.now_hp(), ship.max_hp(), ship.dock_time()),
                time_per_hp,
                in_repair,
                available_srf: index < repair_capacity,
                can_boost_morale: boost.can_boost,
                morale_boost_amount: boost.boost_amount,
            })
        })
        .collect()
}

/// 艦隊の状態と修理枠を計算してから各艦の見積もりを作る。
/// 野埼がいても戦意高揚が発動しない状態なら、どの艦も高揚の対象にしない。
pub fn fleet_detail(fleet: &Fleet, snapshot: &PortSnapshot) -> Vec<ShipRepairDetail> {
    let status = fleet_status(fleet, snapshot);
    let capacity = fleet_repair_count(fleet, snapshot);
    let booster = status.nosaki_ship_id.filter(|_| status.can_boost_morale);
    fleet_repair_detail(fleet, snapshot, capacity, booster, status.paired_repair_bonus)
}
