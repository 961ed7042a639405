use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fleet::{ItemId, Ship};

/// 艦艇修理施設の装備マスタID。
pub const SHIP_REPAIR_FACILITY: u16 = 86;

/// 所持装備 (api_slot_item の要素) を表す構造体。
/// 泊地修理では装備マスタIDから艦艇修理施設かどうかを見るだけなので、それ以外は保持しない。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SlotItem {
    #[serde(rename = "api_id")]
    id: ItemId,
    #[serde(rename = "api_slotitem_id")]
    slotitem_id: u16,
}

impl SlotItem {
    pub fn new(id: ItemId, slotitem_id: u16) -> Self {
        Self { id, slotitem_id }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn slotitem_id(&self) -> u16 {
        self.slotitem_id
    }

    pub fn is_repair_facility(&self) -> bool {
        self.slotitem_id == SHIP_REPAIR_FACILITY
    }
}

/// 艦娘が装備している艦艇修理施設の数を数える。
/// 装備データが無い場合は 0 (修理施設なし) とみなす。
pub(crate) fn count_repair_facilities(ship: &Ship, equips: Option<&HashMap<ItemId, SlotItem>>) -> usize {
    let Some(equips) = equips else {
        return 0;
    };
    ship.slots()
        .iter()
        .filter_map(|id| equips.get(id))
        .filter(|item| item.is_repair_facility())
        .count()
}
