//! 母港のスナップショットを構成するデータモデル。
//! ホスト側のストアから受けとった値をそのままデシリアライズできる形で保持する。

/// 艦娘の固有ID (api_id)。艦隊の空きスロットは -1 で表される。
pub type ShipId = i32;
/// 艦隊ID (api_id)。
pub type FleetId = i32;
/// 所持装備の固有ID (api_slot の要素)。
pub type ItemId = i32;
/// 艦船マスタのID (api_ship_id)。
pub type MasterShipId = u16;

mod deck;
pub use deck::Fleet;

mod ship;
pub use ship::{MasterShip, Ship};

mod ship_class;
pub use ship_class::{MoraleBooster, RepairShipKind};

mod status;
pub use status::DamagedLevel;

mod equipment;
pub(crate) use equipment::count_repair_facilities;
pub use equipment::{SlotItem, SHIP_REPAIR_FACILITY};

mod snapshot;
pub use snapshot::{PortSnapshot, RepairDock};
