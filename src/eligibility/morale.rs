use crate::fleet::{Fleet, MasterShipId, MoraleBooster, PortSnapshot, Ship};

/// 旗艦か二番艦にいる野埼。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoosterPresence<'a> {
    /// 艦隊内の位置 (0 か 1)。
    pub position: usize,
    pub ship: &'a Ship,
    pub kind: MoraleBooster,
}

impl BoosterPresence<'_> {
    pub fn ship_id(&self) -> MasterShipId {
        self.ship.ship_id()
    }
}

fn privileged_ships<'f, 'a>(
    fleet: &'f Fleet,
    snapshot: &'a PortSnapshot,
) -> impl Iterator<Item = (usize, &'a Ship)> + 'f
where
    'a: 'f,
{
    (0..2).filter_map(move |position| {
        let ship = fleet.slot(position).and_then(|id| snapshot.ship(id))?;
        Some((position, ship))
    })
}

/// 旗艦、二番艦の順に野埼を探す。艦船マスタが引けない場合は居ないものとして扱う。
pub fn find_morale_booster<'a>(fleet: &Fleet, snapshot: &'a PortSnapshot) -> Option<BoosterPresence<'a>> {
    privileged_ships(fleet, snapshot).find_map(|(position, ship)| {
        let kind = MoraleBooster::from_ship_id(ship.ship_id())?;
        snapshot.master_of(ship)?;
        Some(BoosterPresence { position, ship, kind })
    })
}

/// 旗艦か二番艦に野埼がいるかどうか。艦船IDだけで判定する。
pub fn check_nosaki_present(fleet: &Fleet, snapshot: &PortSnapshot) -> bool {
    privileged_ships(fleet, snapshot)
        .any(|(_, ship)| MoraleBooster::from_ship_id(ship.ship_id()).is_some())
}
