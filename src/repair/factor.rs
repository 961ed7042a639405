use serde::Serialize;

/// 艦種ごとの入渠時間係数。
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipTypeFactor {
    pub ship_type: u16,
    pub name: &'static str,
    pub factor: f64,
}

const fn entry(ship_type: u16, name: &'static str, factor: f64) -> ShipTypeFactor {
    ShipTypeFactor {
        ship_type,
        name,
        factor,
    }
}

/// 艦種ID (api_stype) 順に並べた係数表。
pub const SHIP_TYPE_FACTORS: [ShipTypeFactor; 22] = [
    entry(1, "海防艦", 0.5),
    entry(2, "駆逐艦", 1.0),
    entry(3, "軽巡洋艦", 1.0),
    entry(4, "重雷装巡洋艦", 1.0),
    entry(5, "重巡洋艦", 1.5),
    entry(6, "航空巡洋艦", 1.5),
    entry(7, "軽空母", 1.5),
    entry(8, "巡洋戦艦", 1.5),
    entry(9, "戦艦", 2.0),
    entry(10, "航空戦艦", 2.0),
    entry(11, "正規空母", 2.0),
    entry(12, "超弩級戦艦", 0.0),
    entry(13, "潜水艦", 0.5),
    entry(14, "潜水空母", 1.0),
    entry(15, "補給艦", 0.0),
    entry(16, "水上機母艦", 1.0),
    entry(17, "揚陸艦", 1.0),
    entry(18, "装甲空母", 2.0),
    entry(19, "工作艦", 1.0),
    entry(20, "潜水母艦", 1.0),
    entry(21, "練習巡洋艦", 1.0),
    entry(22, "補給艦", 1.0),
];

/// 艦種の係数を引く。未知の艦種は None。
pub fn ship_type_factor(ship_type: u16) -> Option<&'static ShipTypeFactor> {
    SHIP_TYPE_FACTORS.iter().find(|f| f.ship_type == ship_type)
}
