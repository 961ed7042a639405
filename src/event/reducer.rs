use log::{debug, warn};

use crate::eligibility::{check_repair_active, fleet_status, find_morale_booster};
use crate::event::GameEvent;
use crate::fleet::{Fleet, FleetId, PortSnapshot, RepairShipKind, ShipId};
use crate::timer::{TimerState, Timestamp};

fn is_repair_ship(snapshot: &PortSnapshot, ship_id: ShipId) -> bool {
    snapshot
        .ship(ship_id)
        .and_then(|ship| RepairShipKind::from_ship_id(ship.ship_id()))
        .is_some()
}

fn flagship_is_repair_ship(fleet: &Fleet, snapshot: &PortSnapshot) -> bool {
    fleet
        .flagship_id()
        .is_some_and(|id| is_repair_ship(snapshot, id))
}

fn find_fleet(snapshot: &PortSnapshot, fleet_id: FleetId) -> Option<&Fleet> {
    let fleet = snapshot.fleet(fleet_id);
    if fleet.is_none() {
        warn!("Fleet {} not found in snapshot", fleet_id);
    }
    fleet
}

/// イベントに応じてタイマーを更新する。
///
/// スナップショットはイベント発生時点 (API レスポンス反映後) のものを渡す。
/// 参照先の艦隊や艦娘が見つからない場合、その仕組みについては何もしない。
pub fn apply_event(event: &GameEvent, snapshot: &PortSnapshot, timer: &TimerState, now: Timestamp) {
    match *event {
        GameEvent::PortReturn => {
            on_port_repair(snapshot, timer, now);
            on_port_morale(snapshot, timer, now);
        }
        GameEvent::CompositionChange { fleet_id, .. } => {
            let Some(fleet) = find_fleet(snapshot, fleet_id) else {
                return;
            };
            on_composition_repair(fleet, snapshot, timer, now);
            on_composition_morale(fleet, snapshot, timer, now);
        }
        GameEvent::PresetLoad | GameEvent::Remodel => {
            debug!("{:?}: timers untouched", event);
        }
        GameEvent::ExpeditionStart { fleet_id } => {
            let Some(fleet) = fleet_id.and_then(|id| find_fleet(snapshot, id)) else {
                return;
            };
            if fleet.valid_ship_ids().any(|id| is_repair_ship(snapshot, id)) {
                debug!("Fleet {} left with a repair ship", fleet.id());
                timer.reset_repair_timer(now);
            }
        }
        GameEvent::DockStart { ship_id, instant } => {
            if !instant {
                return;
            }
            let Some(fleet) = ship_id.and_then(|id| snapshot.fleet_of(id)) else {
                return;
            };
            if flagship_is_repair_ship(fleet, snapshot) {
                debug!("Instant repair used in fleet {}", fleet.id());
                timer.reset_repair_timer(now);
            }
        }
        GameEvent::ExpeditionResult | GameEvent::Other => {}
    }
}

fn on_port_repair(snapshot: &PortSnapshot, timer: &TimerState, now: Timestamp) {
    let value = timer.snapshot();
    let expired = !value.repair_active() || !value.repair_within_interval(now);
    if !expired {
        return;
    }
    let any_active = snapshot
        .fleets()
        .iter()
        .any(|fleet| check_repair_active(fleet, snapshot).active);
    if any_active {
        timer.reset_repair_timer(now);
    }
}

fn on_port_morale(snapshot: &PortSnapshot, timer: &TimerState, now: Timestamp) {
    let statuses: Vec<_> = snapshot
        .fleets()
        .iter()
        .map(|fleet| fleet_status(fleet, snapshot))
        .collect();
    if !statuses.iter().any(|status| status.nosaki_present) {
        return;
    }

    let value = timer.snapshot();
    if !value.morale_active() {
        timer.reset_morale_timer(now);
    } else if !value.morale_within_interval(now) && statuses.iter().any(|status| status.can_boost_morale) {
        timer.reset_morale_timer(now);
    }
}

fn on_composition_repair(fleet: &Fleet, snapshot: &PortSnapshot, timer: &TimerState, now: Timestamp) {
    if !flagship_is_repair_ship(fleet, snapshot) {
        return;
    }
    if timer.snapshot().repair_within_interval(now) {
        timer.reset_repair_timer(now);
    } else {
        // 20 分を過ぎていれば耐久の更新待ちに戻す
        timer.clear_repair_timer();
    }
}

/// 編成変更後のスナップショットで戦意高揚タイマーを更新する。
///
/// 変更した艦隊の旗艦か二番艦に野埼がいれば、20 分以内ならリセットする。
/// どの艦隊の旗艦・二番艦にも野埼がいなくなった場合は、変更したスロットに関係なく停止する。
/// 別の艦隊に野埼が残っていればタイマーは共有なのでそのままにする。
fn on_composition_morale(fleet: &Fleet, snapshot: &PortSnapshot, timer: &TimerState, now: Timestamp) {
    let value = timer.snapshot();
    if find_morale_booster(fleet, snapshot).is_some() {
        if value.morale_within_interval(now) {
            timer.reset_morale_timer(now);
        }
        return;
    }

    let booster_anywhere = snapshot
        .fleets()
        .iter()
        .any(|other| find_morale_booster(other, snapshot).is_some());
    if !booster_anywhere && value.morale_active() {
        debug!("No booster left after change in fleet {}", fleet.label());
        timer.clear_morale_timer();
    }
}
