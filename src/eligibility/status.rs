use serde::{Deserialize, Serialize};

use crate::eligibility::{check_repair_active, find_morale_booster, has_paired_repair_bonus};
use crate::fleet::{Fleet, FleetId, MasterShipId, PortSnapshot, ShipId};
use crate::repair::constants::MIN_BOOSTER_CONDITION;

/// 艦隊の泊地修理・戦意高揚の状態。スナップショットから都度計算する。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatus {
    pub can_repair: bool,
    pub repair_ship_flagship: bool,
    pub paired_repair_bonus: bool,
    pub nosaki_present: bool,
    pub nosaki_position: Option<usize>,
    pub nosaki_ship_id: Option<MasterShipId>,
    pub can_boost_morale: bool,
    pub in_expedition: bool,
    pub flag_ship_in_repair: bool,
}

/// 艦隊の状態をまとめて計算する。
///
/// 野埼は旗艦、二番艦の順に探し、見つかれば `nosaki_present` などを埋める。
/// 戦意高揚が発動するのは野埼が満載補給、小破未満、疲労度 30 以上で、
/// 遠征中でも入渠中でもない場合に限る。
pub fn fleet_status(fleet: &Fleet, snapshot: &PortSnapshot) -> FleetStatus {
    let activity = check_repair_active(fleet, snapshot);
    let in_expedition = fleet.in_expedition();
    let flag_ship_in_repair = fleet
        .flagship_id()
        .is_some_and(|id| snapshot.is_in_dock(id));

    let mut status = FleetStatus {
        can_repair: activity.active,
        repair_ship_flagship: activity.is_repair_ship_flagship,
        paired_repair_bonus: has_paired_repair_bonus(fleet, snapshot),
        in_expedition,
        flag_ship_in_repair,
        ..Default::default()
    };

    if let Some(booster) = find_morale_booster(fleet, snapshot) {
        let ship = booster.ship;
        status.nosaki_present = true;
        status.nosaki_position = Some(booster.position);
        status.nosaki_ship_id = Some(booster.ship_id());
        status.can_boost_morale = snapshot
            .master_of(ship)
            .is_some_and(|master| ship.is_fully_supplied(master))
            && ship.damaged_level().is_healthy()
            && ship.condition() >= MIN_BOOSTER_CONDITION
            && !in_expedition
            && !snapshot.is_in_dock(ship.id());
    }

    status
}

/// 艦隊で泊地修理が発動しているかどうか。`fleet_status(..).can_repair` と同じ。
pub fn can_fleet_repair(fleet: &Fleet, snapshot: &PortSnapshot) -> bool {
    check_repair_active(fleet, snapshot).active
}

/// 艦隊IDとスロット順の艦娘ID。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetBasicInfo {
    pub id: FleetId,
    pub ship_ids: Vec<ShipId>,
}

impl From<&Fleet> for FleetBasicInfo {
    fn from(fleet: &Fleet) -> Self {
        Self {
            id: fleet.id(),
            ship_ids: fleet.ship_ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{MasterShip, Ship, SlotItem, SHIP_REPAIR_FACILITY};

    fn nosaki_master() -> MasterShip {
        MasterShip::new(996, "野埼", 22).with_capacity(10, 10)
    }

    fn booster_snapshot(nosaki: Ship) -> PortSnapshot {
        PortSnapshot::new()
            .with_ship(Ship::new(101, 182, 40, 40))
            .with_ship(nosaki)
            .with_master_ship(nosaki_master())
    }

    fn nosaki() -> Ship {
        Ship::new(102, 996, 20, 20)
            .with_supply(10, 10)
            .with_condition(49)
    }

    #[test]
    fn test_status_of_plain_fleet() {
        let fleet = Fleet::new(1, vec![101]);
        let snapshot = PortSnapshot::new().with_ship(Ship::new(101, 1, 30, 40));
        assert_eq!(fleet_status(&fleet, &snapshot), FleetStatus::default());
        assert!(!can_fleet_repair(&fleet, &snapshot));
    }

    #[test]
    fn test_status_with_booster() {
        let fleet = Fleet::new(1, vec![101, 102]);
        let status = fleet_status(&fleet, &booster_snapshot(nosaki()));
        assert!(status.can_repair);
        assert!(status.repair_ship_flagship);
        assert!(status.nosaki_present);
        assert_eq!(status.nosaki_position, Some(1));
        assert_eq!(status.nosaki_ship_id, Some(996));
        assert!(status.can_boost_morale);
    }

    #[test]
    fn test_booster_conditions() {
        let fleet = Fleet::new(1, vec![101, 102]);
        let cases = [
            nosaki().with_supply(9, 10),
            nosaki().with_supply(10, 9),
            nosaki().with_condition(29),
            // ちょうど 75% は小破
            Ship::new(102, 996, 15, 20).with_supply(10, 10).with_condition(49),
        ];
        for ship in cases {
            let status = fleet_status(&fleet, &booster_snapshot(ship));
            assert!(status.nosaki_present);
            assert!(!status.can_boost_morale);
        }

        let docked = booster_snapshot(nosaki()).with_dock(102);
        let status = fleet_status(&fleet, &docked);
        assert!(status.nosaki_present);
        assert!(!status.can_boost_morale);

        let expedition = Fleet::new(1, vec![101, 102]).with_mission(1);
        let status = fleet_status(&expedition, &booster_snapshot(nosaki()));
        assert!(status.in_expedition);
        assert!(!status.can_repair);
        assert!(!status.can_boost_morale);
    }

    #[test]
    fn test_booster_condition_boundary() {
        let fleet = Fleet::new(1, vec![102]);
        let status = fleet_status(&fleet, &booster_snapshot(nosaki().with_condition(30)));
        assert!(status.can_boost_morale);
        assert_eq!(status.nosaki_position, Some(0));
    }

    #[test]
    fn test_flagship_in_dock() {
        let fleet = Fleet::new(1, vec![101]);
        let snapshot = PortSnapshot::new()
            .with_ship(Ship::new(101, 182, 40, 40))
            .with_dock(101);
        let status = fleet_status(&fleet, &snapshot);
        assert!(status.flag_ship_in_repair);
        assert!(status.repair_ship_flagship);
        assert!(!status.can_repair);
    }

    #[test]
    fn test_paired_bonus_not_granted_to_same_variant() {
        let fleet = Fleet::new(1, vec![101, 102]);
        let snapshot = PortSnapshot::new()
            .with_ship(Ship::new(101, 182, 40, 40).with_slots(vec![1001]))
            .with_ship(Ship::new(102, 187, 40, 40).with_slots(vec![1002]))
            .with_equip(SlotItem::new(1001, SHIP_REPAIR_FACILITY))
            .with_equip(SlotItem::new(1002, SHIP_REPAIR_FACILITY));
        let status = fleet_status(&fleet, &snapshot);
        assert!(status.can_repair);
        assert!(!status.paired_repair_bonus);
    }

    #[test]
    fn test_basic_info() {
        let fleet = Fleet::new(3, vec![101, -1]);
        let info = FleetBasicInfo::from(&fleet);
        assert_eq!(info.id, 3);
        assert_eq!(info.ship_ids, vec![101, -1]);
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"id":3,"shipIds":[101,-1]}"#
        );
    }
}
