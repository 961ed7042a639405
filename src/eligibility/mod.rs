//! 艦隊編成と艦娘の状態から、泊地修理と戦意高揚が発動しているかを判定する。
//!
//! すべての関数はスナップショットを読むだけで、状態を持たない。
//! 参照先の艦隊や艦娘が見つからない場合は例外にせず「発動していない」側の結果を返す。

mod repair;
pub use repair::{check_repair_active, fleet_repair_count, has_paired_repair_bonus, RepairActivity};

mod morale;
pub use morale::{check_nosaki_present, find_morale_booster, BoosterPresence};

mod status;
pub use status::{can_fleet_repair, fleet_status, FleetBasicInfo, FleetStatus};
