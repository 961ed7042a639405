//! フロントエンドと判定コア間のインターフェースを定義する。
//! このモジュールで公開される構造体は、シリアライズ/デシリアライズ可能でなければならない。
//! また、それらのメソッドは単なるゲッターに限定し、原則的にロジックを含めてはならない。
use log::warn;

/// ストアから受け取る母港のスナップショット。
pub use crate::fleet::{Fleet, MasterShip, PortSnapshot, RepairDock, Ship, SlotItem};

/// フロントエンドに返す判定結果。
pub use crate::detail::{QueueEntry, QueueSortKey, ShipProgress, ShipRepairDetail};
pub use crate::eligibility::{FleetBasicInfo, FleetStatus};
pub use crate::repair::{CountdownLabel, HpLabel, MoraleBoost};
pub use crate::timer::TimerSnapshot;

/// 受け取ったデータの整合性を確認する。
/// 不整合はログに出すだけで、判定はそのまま続ける。
pub trait Validate {
    fn validate(&self) -> bool;
}

impl Validate for Fleet {
    fn validate(&self) -> bool {
        if self.id() < 0 {
            warn!("Fleet id is not set: {:?}", self.ship_ids());
            return false;
        }
        true
    }
}

impl Validate for PortSnapshot {
    fn validate(&self) -> bool {
        let mut valid = true;
        for fleet in self.fleets() {
            valid &= fleet.validate();
            for id in fleet.valid_ship_ids() {
                if self.ship(id).is_none() {
                    warn!("Fleet {}: ship {} not found", fleet.label(), id);
                    valid = false;
                }
            }
        }
        if self.equips().is_none() {
            warn!("Equipment data is not loaded");
        }
        valid
    }
}
