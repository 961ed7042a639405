use serde::{Deserialize, Serialize};

use crate::fleet::{DamagedLevel, ItemId, MasterShipId, ShipId};

/// 所持艦娘 (api_ship の要素) を表す構造体。
/// 子に固有ID、艦船マスタID、レベル、耐久、疲労度、燃料・弾薬、装備スロット、入渠時間を持つ。
///
/// ホストのスナップショットから欠けているフィールドは 0 で補完されるため、
/// フィールドは隠蔽してゲッターメソッドを通じてのみアクセスする。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Ship {
    #[serde(rename = "api_id")]
    id: ShipId,
    #[serde(rename = "api_ship_id")]
    ship_id: MasterShipId,
    #[serde(rename = "api_lv")]
    level: u16,
    #[serde(rename = "api_nowhp")]
    now_hp: u16,
    #[serde(rename = "api_maxhp")]
    max_hp: u16,
    #[serde(rename = "api_cond")]
    condition: u16,
    #[serde(rename = "api_fuel")]
    fuel: u16,
    #[serde(rename = "api_bull")]
    ammo: u16,
    #[serde(rename = "api_slot")]
    slots: Vec<ItemId>,
    #[serde(rename = "api_ndock_time")]
    dock_time: u64,
}

impl Ship {
    /// 最低限の情報から艦娘を作る。
    /// レベル 50、疲労度 49、燃料・弾薬 100、入渠時間 100 秒が初期値。
    pub fn new(id: ShipId, ship_id: MasterShipId, now_hp: u16, max_hp: u16) -> Self {
        Self {
            id,
            ship_id,
            level: 50,
            now_hp,
            max_hp,
            condition: 49,
            fuel: 100,
            ammo: 100,
            slots: Vec::new(),
            dock_time: 100_000,
        }
    }

    pub fn with_slots(mut self, slots: Vec<ItemId>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_level(mut self, level: u16) -> Self {
        self.level = level;
        self
    }

    pub fn with_dock_time(mut self, dock_time: u64) -> Self {
        self.dock_time = dock_time;
        self
    }

    pub fn with_condition(mut self, condition: u16) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_supply(mut self, fuel: u16, ammo: u16) -> Self {
        self.fuel = fuel;
        self.ammo = ammo;
        self
    }

    // attributes getters
    pub fn id(&self) -> ShipId {
        self.id
    }
    /// 艦船マスタID。艦種や工作艦・野埼の判定に使う。
    pub fn ship_id(&self) -> MasterShipId {
        self.ship_id
    }
    pub fn level(&self) -> u16 {
        self.level
    }
    pub fn slots(&self) -> &[ItemId] {
        &self.slots
    }
    /// 入渠した場合の所要時間 (ミリ秒)。
    pub fn dock_time(&self) -> u64 {
        self.dock_time
    }

    // status getters
    pub fn now_hp(&self) -> u16 {
        self.now_hp
    }
    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }
    pub fn condition(&self) -> u16 {
        self.condition
    }
    pub fn fuel(&self) -> u16 {
        self.fuel
    }
    pub fn ammo(&self) -> u16 {
        self.ammo
    }

    /// 現在耐久の割合。最大耐久が 0 の場合は 0 を返す。
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.now_hp as f64 / self.max_hp as f64
    }

    pub fn damaged_level(&self) -> DamagedLevel {
        DamagedLevel::from_hp(self.now_hp, self.max_hp)
    }

    /// 燃料・弾薬がマスタの搭載量上限まで補給されているかどうか。
    pub fn is_fully_supplied(&self, master: &MasterShip) -> bool {
        self.fuel >= master.fuel_max() && self.ammo >= master.ammo_max()
    }
}

/// 艦船マスタ ($ships の要素) を表す不変の構造体。
/// 子に艦名、艦種ID、燃料・弾薬の搭載量を持つ。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MasterShip {
    #[serde(rename = "api_id")]
    id: MasterShipId,
    #[serde(rename = "api_name")]
    name: String,
    #[serde(rename = "api_stype")]
    ship_type: u16,
    #[serde(rename = "api_fuel_max")]
    fuel_max: u16,
    #[serde(rename = "api_bull_max")]
    ammo_max: u16,
}

impl MasterShip {
    /// 燃料・弾薬の搭載量は 100 が初期値。
    pub fn new(id: MasterShipId, name: &str, ship_type: u16) -> Self {
        Self {
            id,
            name: name.to_owned(),
            ship_type,
            fuel_max: 100,
            ammo_max: 100,
        }
    }

    pub fn with_capacity(mut self, fuel_max: u16, ammo_max: u16) -> Self {
        self.fuel_max = fuel_max;
        self.ammo_max = ammo_max;
        self
    }

    pub fn id(&self) -> MasterShipId {
        self.id
    }
    /// 艦名 (日本語) を取得する。
    pub fn name(&self) -> &str {
        &self.name
    }
    /// 艦種ID (api_stype) を取得する。
    pub fn ship_type(&self) -> u16 {
        self.ship_type
    }
    pub fn fuel_max(&self) -> u16 {
        self.fuel_max
    }
    pub fn ammo_max(&self) -> u16 {
        self.ammo_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_ship() {
        let json = r#"{
            "api_id": 101, "api_ship_id": 182, "api_lv": 80,
            "api_nowhp": 30, "api_maxhp": 40, "api_cond": 49,
            "api_fuel": 35, "api_bull": 40, "api_slot": [1001, -1, -1, -1, -1],
            "api_ndock_time": 330000, "api_exp": [1, 2, 3]
        }"#;
        let ship: Ship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.id(), 101);
        assert_eq!(ship.ship_id(), 182);
        assert_eq!(ship.level(), 80);
        assert_eq!(ship.slots(), &[1001, -1, -1, -1, -1]);
        assert_eq!(ship.dock_time(), 330_000);
    }

    #[test]
    fn test_partial_ship_is_zero_filled() {
        let ship: Ship =
            serde_json::from_str(r#"{"api_id":101,"api_nowhp":40,"api_maxhp":40}"#).unwrap();
        assert_eq!(ship.ship_id(), 0);
        assert_eq!(ship.dock_time(), 0);
        assert!(ship.slots().is_empty());
    }

    #[test]
    fn test_hp_ratio_without_max_hp() {
        let ship = Ship::default();
        assert_eq!(ship.hp_ratio(), 0.0);
    }

    #[test]
    fn test_fully_supplied() {
        let master = MasterShip::new(996, "野埼", 22).with_capacity(15, 10);
        let ship = Ship::new(101, 996, 40, 40).with_supply(15, 10);
        assert!(ship.is_fully_supplied(&master));
        let ship = ship.with_supply(14, 10);
        assert!(!ship.is_fully_supplied(&master));
    }
}
