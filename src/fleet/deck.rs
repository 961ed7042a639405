use serde::{Deserialize, Serialize};

use crate::fleet::{FleetId, ShipId};

fn unknown_fleet_id() -> FleetId {
    -1
}

/// 艦隊 (api_deck_port の要素) を表す構造体。
/// 子に艦隊ID、艦娘IDのリスト (最大6、空きは -1)、遠征状態を持つ。
///
/// 0番目が旗艦、1番目が二番艦であり、泊地修理と戦意高揚の判定ではこの2隻だけが参照される。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fleet {
    #[serde(rename = "api_id", default = "unknown_fleet_id")]
    id: FleetId,
    #[serde(rename = "api_name", default)]
    name: Option<String>,
    #[serde(rename = "api_ship", default)]
    ship_ids: Vec<ShipId>,
    #[serde(rename = "api_mission", default)]
    mission: Vec<i64>,
}

impl Fleet {
    pub fn new(id: FleetId, ship_ids: Vec<ShipId>) -> Self {
        Self {
            id,
            name: None,
            ship_ids,
            mission: vec![0],
        }
    }

    /// 遠征中の艦隊を作る。`mission` は api_mission の先頭 (遠征状態) に入る値。
    pub fn with_mission(mut self, mission: i64) -> Self {
        self.mission = vec![mission];
        self
    }

    pub fn id(&self) -> FleetId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// ログ用の表示名。艦隊名が無ければ `#ID`。
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("#{}", self.id),
        }
    }

    /// 空きスロットを含む、スロット順の艦娘IDを取得する。
    pub fn ship_ids(&self) -> &[ShipId] {
        &self.ship_ids
    }

    /// 有効な (正の) 艦娘IDだけを艦隊順に返す。
    pub fn valid_ship_ids(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.ship_ids.iter().copied().filter(|&id| id > 0)
    }

    /// 指定したスロットの艦娘ID。空きスロットや範囲外の場合は None。
    pub fn slot(&self, index: usize) -> Option<ShipId> {
        self.ship_ids.get(index).copied().filter(|&id| id > 0)
    }

    pub fn flagship_id(&self) -> Option<ShipId> {
        self.slot(0)
    }

    pub fn second_ship_id(&self) -> Option<ShipId> {
        self.slot(1)
    }

    pub fn contains(&self, ship_id: ShipId) -> bool {
        ship_id > 0 && self.ship_ids.contains(&ship_id)
    }

    /// 遠征に出ているかどうか。api_mission の先頭が 0 以外なら遠征中とみなす。
    pub fn in_expedition(&self) -> bool {
        self.mission.first().is_some_and(|&state| state != 0)
    }
}
