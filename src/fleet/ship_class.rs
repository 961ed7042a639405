use serde::{Deserialize, Serialize};

use crate::fleet::MasterShipId;

/// 泊地修理を行える工作艦の種類。
///
/// 明石 (明石改を含む) は単独で2隻分の修理枠を持つ。
/// 朝日改は修理枠を持たず、艦艇修理施設を積んだ分だけ修理できる。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepairShipKind {
    Akashi,
    AsahiKai,
}

impl RepairShipKind {
    pub const AKASHI: MasterShipId = 182;
    pub const AKASHI_KAI: MasterShipId = 187;
    pub const ASAHI_KAI: MasterShipId = 958;

    /// 工作艦として扱う艦船マスタIDの一覧。
    pub const IDS: [MasterShipId; 3] = [Self::AKASHI, Self::AKASHI_KAI, Self::ASAHI_KAI];

    pub fn from_ship_id(ship_id: MasterShipId) -> Option<Self> {
        match ship_id {
            Self::AKASHI | Self::AKASHI_KAI => Some(RepairShipKind::Akashi),
            Self::ASAHI_KAI => Some(RepairShipKind::AsahiKai),
            _ => None,
        }
    }

    /// 装備に依らない基本の修理枠。
    pub fn base_capacity(&self) -> usize {
        match self {
            RepairShipKind::Akashi => 2,
            RepairShipKind::AsahiKai => 0,
        }
    }

    /// 泊地修理の発動に艦艇修理施設の装備が必要かどうか。
    pub fn requires_repair_facility(&self) -> bool {
        matches!(self, RepairShipKind::AsahiKai)
    }

    /// 明石と朝日改の組み合わせなら true。順序は問わない。
    pub fn pairs_with(&self, other: RepairShipKind) -> bool {
        *self != other
    }
}

/// 戦意高揚 (疲労度回復) を行う艦の種類。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoraleBooster {
    Nosaki,
    NosakiKai,
}

impl MoraleBooster {
    pub const NOSAKI: MasterShipId = 996;
    pub const NOSAKI_KAI: MasterShipId = 1002;

    pub const IDS: [MasterShipId; 2] = [Self::NOSAKI, Self::NOSAKI_KAI];

    pub fn from_ship_id(ship_id: MasterShipId) -> Option<Self> {
        match ship_id {
            Self::NOSAKI => Some(MoraleBooster::Nosaki),
            Self::NOSAKI_KAI => Some(MoraleBooster::NosakiKai),
            _ => None,
        }
    }

    /// 1回の発動で上がる疲労度の基本値。
    pub fn base_amount(&self) -> u16 {
        match self {
            MoraleBooster::Nosaki => 2,
            MoraleBooster::NosakiKai => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_ship_lookup() {
        assert_eq!(RepairShipKind::IDS, [182, 187, 958]);
        assert_eq!(RepairShipKind::from_ship_id(182), Some(RepairShipKind::Akashi));
        assert_eq!(RepairShipKind::from_ship_id(187), Some(RepairShipKind::Akashi));
        assert_eq!(RepairShipKind::from_ship_id(958), Some(RepairShipKind::AsahiKai));
        assert_eq!(RepairShipKind::from_ship_id(996), None);
    }

    #[test]
    fn test_pairing() {
        assert!(RepairShipKind::Akashi.pairs_with(RepairShipKind::AsahiKai));
        assert!(RepairShipKind::AsahiKai.pairs_with(RepairShipKind::Akashi));
        assert!(!RepairShipKind::Akashi.pairs_with(RepairShipKind::Akashi));
    }

    #[test]
    fn test_booster_lookup() {
        assert_eq!(MoraleBooster::IDS, [996, 1002]);
        assert_eq!(MoraleBooster::from_ship_id(996).map(|b| b.base_amount()), Some(2));
        assert_eq!(MoraleBooster::from_ship_id(1002).map(|b| b.base_amount()), Some(3));
        assert_eq!(MoraleBooster::from_ship_id(182), None);
    }
}
