//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

use anchorage_core::interface::{FleetStatus, ShipRepairDetail, TimerSnapshot};

wasm_bindgen_test_configure!(run_in_browser);

const STORE: &str = r#"{
    "fleets": [
        {"api_id": 1, "api_ship": [101, 102, -1, -1, -1, -1], "api_mission": [0, 0, 0, 0]},
        {"api_id": 2, "api_ship": [201, -1, -1, -1, -1, -1], "api_mission": [0, 0, 0, 0]}
    ],
    "ships": {
        "101": {"api_id": 101, "api_ship_id": 182, "api_lv": 50, "api_nowhp": 45, "api_maxhp": 45, "api_slot": [1001]},
        "102": {"api_id": 102, "api_ship_id": 1, "api_lv": 50, "api_nowhp": 30, "api_maxhp": 40, "api_ndock_time": 1531000},
        "201": {"api_id": 201, "api_ship_id": 996, "api_lv": 30, "api_nowhp": 20, "api_maxhp": 20,
                "api_cond": 49, "api_fuel": 10, "api_bull": 10}
    },
    "$ships": {
        "182": {"api_id": 182, "api_name": "明石", "api_stype": 19, "api_fuel_max": 35, "api_bull_max": 10},
        "1": {"api_id": 1, "api_name": "睦月", "api_stype": 2, "api_fuel_max": 15, "api_bull_max": 15},
        "996": {"api_id": 996, "api_name": "野埼", "api_stype": 22, "api_fuel_max": 10, "api_bull_max": 10}
    },
    "equips": {"1001": {"api_id": 1001, "api_slotitem_id": 86}},
    "repairs": [{"api_ship_id": 0}, {"api_ship_id": -1}]
}"#;

fn store() -> JsValue {
    js_sys::JSON::parse(STORE).unwrap()
}

#[wasm_bindgen_test]
fn fleet_queries() {
    anchorage_core::init(Some("debug".to_owned()));

    let status: FleetStatus =
        serde_wasm_bindgen::from_value(anchorage_core::fleet_status(store(), 1)).unwrap();
    assert!(status.can_repair);
    assert!(!status.nosaki_present);
    assert_eq!(anchorage_core::fleet_repair_count(store(), 1), 3);
    assert!(anchorage_core::can_fleet_repair(store(), 1));

    let details: Vec<ShipRepairDetail> =
        serde_wasm_bindgen::from_value(anchorage_core::fleet_repair_detail(store(), 1)).unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[1].estimate, 1_560_000);

    assert!(anchorage_core::fleet_status(store(), 9).is_null());
    assert_eq!(anchorage_core::fleet_repair_count(store(), 9), 0);
    assert!(anchorage_core::fleet_status(JsValue::UNDEFINED, 1).is_null());
}

#[wasm_bindgen_test]
fn game_response_drives_timers() {
    let start = 1_700_000_000_000.0;
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    let callback = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
        let _: TimerSnapshot = serde_wasm_bindgen::from_value(value).unwrap();
        c.set(c.get() + 1);
    });
    let mut subscription =
        anchorage_core::subscribe_timers(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());

    anchorage_core::handle_game_response("/kcsapi/api_port/port", JsValue::NULL, store(), Some(start));
    assert_eq!(anchorage_core::last_repair_refresh(), start);
    assert_eq!(anchorage_core::last_morale_refresh(), start);
    assert_eq!(calls.get(), 2);

    let body = js_sys::JSON::parse(r#"{"api_id":"1","api_ship_idx":"1","api_ship_id":"102"}"#).unwrap();
    anchorage_core::handle_game_response("/kcsapi/api_req_hensei/change", body, store(), Some(start + 60_000.0));
    assert_eq!(anchorage_core::last_repair_refresh(), start + 60_000.0);

    subscription.unsubscribe();
    anchorage_core::handle_game_response("/kcsapi/api_port/port", JsValue::NULL, store(), Some(start + 3_600_000.0));
    assert_eq!(calls.get(), 3);
}

#[wasm_bindgen_test]
fn auto_switch_after_expedition() {
    let now = 1_700_000_000_000.0;
    assert!(!anchorage_core::should_switch_to_plugin("/kcsapi/api_req_mission/result", JsValue::NULL, Some(now)));
    assert!(!anchorage_core::should_switch_to_plugin("/kcsapi/api_port/port", store(), Some(now + 1_000.0)));
    assert!(anchorage_core::should_switch_to_plugin("/kcsapi/api_port/port", store(), Some(now + 2_000.0)));
}

#[wasm_bindgen_test]
fn unreadable_port_snapshot_consumes_expedition_lock() {
    let now = 1_800_000_000_000.0;
    let broken = JsValue::from_str("not a snapshot");
    assert!(!anchorage_core::should_switch_to_plugin("/kcsapi/api_req_mission/result", JsValue::NULL, Some(now)));
    assert!(!anchorage_core::should_switch_to_plugin("/kcsapi/api_port/port", broken, Some(now + 1_000.0)));
    assert!(anchorage_core::should_switch_to_plugin("/kcsapi/api_port/port", store(), Some(now + 2_000.0)));
}
