use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fleet::{Fleet, FleetId, ItemId, MasterShip, MasterShipId, Ship, ShipId, SlotItem};

/// 入渠ドック (api_ndock の要素)。空きドックの api_ship_id は 0 か -1。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepairDock {
    #[serde(rename = "api_ship_id")]
    ship_id: ShipId,
}

impl RepairDock {
    pub fn new(ship_id: ShipId) -> Self {
        Self { ship_id }
    }

    pub fn ship_id(&self) -> ShipId {
        self.ship_id
    }
}

/// 判定に使う母港の状態をひとまとめにしたスナップショット。
/// 子に艦隊、所持艦娘、艦船マスタ、所持装備、入渠ドックを持つ。
///
/// 所持装備は取得できていない場合があり、その場合は `None` になる。
/// 装備が必要な判定は装備なしとして扱う。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PortSnapshot {
    fleets: Vec<Fleet>,
    ships: HashMap<ShipId, Ship>,
    #[serde(rename = "$ships", alias = "masterShips")]
    master_ships: HashMap<MasterShipId, MasterShip>,
    equips: Option<HashMap<ItemId, SlotItem>>,
    repairs: Vec<RepairDock>,
}

impl PortSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleets.push(fleet);
        self
    }

    pub fn with_ship(mut self, ship: Ship) -> Self {
        self.ships.insert(ship.id(), ship);
        self
    }

    pub fn with_master_ship(mut self, master: MasterShip) -> Self {
        self.master_ships.insert(master.id(), master);
        self
    }

    /// 装備を追加する。これを一度でも呼ぶと装備データは「取得済み」になる。
    pub fn with_equip(mut self, item: SlotItem) -> Self {
        self.equips
            .get_or_insert_with(HashMap::new)
            .insert(item.id(), item);
        self
    }

    /// 装備データを空の状態で取得済みにする。
    pub fn with_empty_equips(mut self) -> Self {
        self.equips.get_or_insert_with(HashMap::new);
        self
    }

    pub fn with_dock(mut self, ship_id: ShipId) -> Self {
        self.repairs.push(RepairDock::new(ship_id));
        self
    }

    pub fn fleets(&self) -> &[Fleet] {
        &self.fleets
    }

    pub fn fleet(&self, id: FleetId) -> Option<&Fleet> {
        self.fleets.iter().find(|f| f.id() == id)
    }

    /// 指定した艦娘が所属している艦隊を探す。
    pub fn fleet_of(&self, ship_id: ShipId) -> Option<&Fleet> {
        self.fleets.iter().find(|f| f.contains(ship_id))
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn master_ship(&self, id: MasterShipId) -> Option<&MasterShip> {
        self.master_ships.get(&id)
    }

    /// 艦娘に対応する艦船マスタ。
    pub fn master_of(&self, ship: &Ship) -> Option<&MasterShip> {
        self.master_ship(ship.ship_id())
    }

    pub fn equips(&self) -> Option<&HashMap<ItemId, SlotItem>> {
        self.equips.as_ref()
    }

    /// 入渠中の艦娘IDの一覧。
    pub fn dock_ship_ids(&self) -> Vec<ShipId> {
        self.repairs
            .iter()
            .map(|dock| dock.ship_id())
            .filter(|&id| id > 0)
            .collect()
    }

    pub fn is_in_dock(&self, ship_id: ShipId) -> bool {
        ship_id > 0 && self.repairs.iter().any(|dock| dock.ship_id() == ship_id)
    }
}
