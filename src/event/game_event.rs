use log::warn;
use serde_json::Value;

use crate::fleet::{FleetId, ShipId};

pub const PORT_PATH: &str = "/kcsapi/api_port/port";
pub const HENSEI_CHANGE_PATH: &str = "/kcsapi/api_req_hensei/change";
pub const PRESET_SELECT_PATH: &str = "/kcsapi/api_req_hensei/preset_select";
pub const REMODELING_PATH: &str = "/kcsapi/api_req_kaisou/remodeling";
pub const MISSION_START_PATH: &str = "/kcsapi/api_req_mission/start";
pub const MISSION_RESULT_PATH: &str = "/kcsapi/api_req_mission/result";
pub const NYUKYO_START_PATH: &str = "/kcsapi/api_req_nyukyo/start";

/// 編成変更で指定スロットに起きたこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 艦娘を配置した (入れ替えを含む)。
    Placed(ShipId),
    /// 艦娘を外した (api_ship_id = -1)。
    Removed,
    /// 旗艦以外を全て外した (api_ship_id = -2)。
    EscortsRemoved,
}

impl Placement {
    fn from_api(ship_id: i64) -> Option<Self> {
        match ship_id {
            -2 => Some(Placement::EscortsRemoved),
            -1 => Some(Placement::Removed),
            id if id > 0 => ShipId::try_from(id).ok().map(Placement::Placed),
            _ => None,
        }
    }
}

/// 母港側で関心のある API 呼び出し。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PortReturn,
    CompositionChange {
        fleet_id: FleetId,
        slot_index: usize,
        placement: Placement,
    },
    PresetLoad,
    Remodel,
    ExpeditionStart {
        fleet_id: Option<FleetId>,
    },
    ExpeditionResult,
    DockStart {
        ship_id: Option<ShipId>,
        instant: bool,
    },
    Other,
}

/// 数値か数値文字列を整数として読む。読めなければ None。
pub fn parse_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 値が 1 (数値でも文字列でもよい) かどうか。
pub fn parse_flag(value: Option<&Value>) -> bool {
    parse_id(value) == Some(1)
}

fn parse_i32(body: &Value, key: &str) -> Option<i32> {
    let id = parse_id(body.get(key))?;
    i32::try_from(id).ok()
}

impl GameEvent {
    /// API のパスと POST 本文から1回だけ解釈する。
    pub fn decode(path: &str, body: &Value) -> Self {
        match path {
            PORT_PATH => GameEvent::PortReturn,
            HENSEI_CHANGE_PATH => Self::decode_composition_change(body),
            PRESET_SELECT_PATH => GameEvent::PresetLoad,
            REMODELING_PATH => GameEvent::Remodel,
            MISSION_START_PATH => GameEvent::ExpeditionStart {
                fleet_id: parse_i32(body, "api_deck_id"),
            },
            MISSION_RESULT_PATH => GameEvent::ExpeditionResult,
            NYUKYO_START_PATH => GameEvent::DockStart {
                ship_id: parse_i32(body, "api_ship_id"),
                instant: parse_flag(body.get("api_highspeed")),
            },
            _ => GameEvent::Other,
        }
    }

    fn decode_composition_change(body: &Value) -> Self {
        let fleet_id = parse_i32(body, "api_id");
        let slot_index = parse_id(body.get("api_ship_idx")).and_then(|i| usize::try_from(i).ok());
        let placement = parse_id(body.get("api_ship_id")).and_then(Placement::from_api);

        match (fleet_id, slot_index, placement) {
            (Some(fleet_id), Some(slot_index), Some(placement)) => GameEvent::CompositionChange {
                fleet_id,
                slot_index,
                placement,
            },
            _ => {
                warn!("Unparsable hensei/change body: {}", body);
                GameEvent::Other
            }
        }
    }
}
