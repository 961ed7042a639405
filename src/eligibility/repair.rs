use log::debug;

use crate::fleet::{count_repair_facilities, Fleet, PortSnapshot, RepairShipKind, Ship};

/// 旗艦による泊地修理の判定結果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairActivity<'a> {
    /// 泊地修理が発動しているかどうか。
    pub active: bool,
    /// 旗艦が工作艦かどうか (損傷や装備とは無関係)。
    pub is_repair_ship_flagship: bool,
    pub flagship: Option<&'a Ship>,
}

impl<'a> RepairActivity<'a> {
    fn inactive(flagship: Option<&'a Ship>, is_repair_ship_flagship: bool) -> Self {
        Self {
            active: false,
            is_repair_ship_flagship,
            flagship,
        }
    }

    /// 旗艦の工作艦の種類。工作艦でなければ None。
    pub fn kind(&self) -> Option<RepairShipKind> {
        self.flagship
            .and_then(|ship| RepairShipKind::from_ship_id(ship.ship_id()))
    }
}

/// 艦隊の泊地修理が発動しているかどうかを判定する。
///
/// 発動条件
/// - 旗艦が工作艦 (明石・明石改・朝日改)
/// - 旗艦が中破未満
/// - 朝日改の場合は艦艇修理施設を1つ以上装備 (装備データが無ければ不可)
/// - 遠征中でない
/// - 旗艦が入渠中でない
pub fn check_repair_active<'a>(fleet: &Fleet, snapshot: &'a PortSnapshot) -> RepairActivity<'a> {
    let Some(flagship) = fleet.flagship_id().and_then(|id| snapshot.ship(id)) else {
        return RepairActivity::inactive(None, false);
    };
    let Some(kind) = RepairShipKind::from_ship_id(flagship.ship_id()) else {
        return RepairActivity::inactive(Some(flagship), false);
    };
    if !flagship.damaged_level().is_below_moderate() {
        return RepairActivity::inactive(Some(flagship), true);
    }
    if kind.requires_repair_facility() && count_repair_facilities(flagship, snapshot.equips()) == 0 {
        debug!(
            "Fleet {}: flagship {} has no repair facility",
            fleet.id(),
            flagship.id()
        );
        return RepairActivity::inactive(Some(flagship), true);
    }

    RepairActivity {
        active: !fleet.in_expedition() && !snapshot.is_in_dock(flagship.id()),
        is_repair_ship_flagship: true,
        flagship: Some(flagship),
    }
}

/// 旗艦と二番艦が明石と朝日改の組み合わせで、二番艦が条件を満たしていれば返す。
fn paired_second_ship<'a>(
    fleet: &Fleet,
    snapshot: &'a PortSnapshot,
    activity: &RepairActivity<'_>,
) -> Option<&'a Ship> {
    if !activity.active {
        return None;
    }
    let flagship_kind = activity.kind()?;
    let second = fleet.second_ship_id().and_then(|id| snapshot.ship(id))?;
    let second_kind = RepairShipKind::from_ship_id(second.ship_id())?;

    let paired = flagship_kind.pairs_with(second_kind)
        && second.damaged_level().is_healthy()
        && count_repair_facilities(second, snapshot.equips()) > 0;
    paired.then_some(second)
}

/// 明石と朝日改の併用による修理時間短縮が有効かどうか。
///
/// 旗艦と二番艦がそれぞれ明石系と朝日改 (順不同) で、二番艦が小破未満かつ艦艇修理施設を装備している必要がある。
pub fn has_paired_repair_bonus(fleet: &Fleet, snapshot: &PortSnapshot) -> bool {
    let activity = check_repair_active(fleet, snapshot);
    paired_second_ship(fleet, snapshot, &activity).is_some()
}

/// 艦隊で泊地修理の対象になる隻数 (修理枠) を求める。
///
/// 旗艦の基本枠 (明石2、朝日改0) + 旗艦の艦艇修理施設の数 + 併用時は二番艦の艦艇修理施設の数。
/// 泊地修理が発動していなければ 0。
pub fn fleet_repair_count(fleet: &Fleet, snapshot: &PortSnapshot) -> usize {
    let activity = check_repair_active(fleet, snapshot);
    if !activity.active {
        return 0;
    }
    let (Some(kind), Some(flagship)) = (activity.kind(), activity.flagship) else {
        return 0;
    };

    let mut count = kind.base_capacity() + count_repair_facilities(flagship, snapshot.equips());
    if let Some(second) = paired_second_ship(fleet, snapshot, &activity) {
        count += count_repair_facilities(second, snapshot.equips());
    }
    count
}
