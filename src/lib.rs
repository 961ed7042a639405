use std::cell::RefCell;

use log::{debug, error, info, warn, Level};
use serde_json::Value;
use wasm_bindgen::prelude::*;

pub mod detail;
pub mod eligibility;
pub mod event;
pub mod fleet;
pub mod interface;
pub mod repair;
pub mod timer;
mod utils;

use crate::event::{GameEvent, SwitchGuard};
use crate::fleet::FleetId;
use crate::interface::{PortSnapshot, QueueSortKey, Validate};

static INIT: std::sync::Once = std::sync::Once::new();

thread_local! {
    static SWITCH_GUARD: RefCell<SwitchGuard> = RefCell::new(SwitchGuard::new());
}

fn parse_level(level: Option<&str>) -> Option<Level> {
    match level?.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::Trace),
        "debug" => Some(Level::Debug),
        "info" => Some(Level::Info),
        "warn" => Some(Level::Warn),
        "error" => Some(Level::Error),
        _ => None,
    }
}

fn initialize(level: Option<&str>) {
    INIT.call_once(|| {
        utils::set_panic_hook();
        let parsed = parse_level(level);
        wasm_logger::init(wasm_logger::Config::new(parsed.unwrap_or(Level::Info))); // ロガー初期化
        if parsed.is_none() && level.is_some() {
            warn!("Unknown log level {:?}, using info", level);
        }
        info!("Logger initialized");
    });
}

/// ロガーとパニックフックを初期化する。2回目以降の呼び出しは何もしない。
#[wasm_bindgen]
pub fn init(level: Option<String>) {
    initialize(level.as_deref());
}

fn read_snapshot(snapshot: &JsValue) -> Option<PortSnapshot> {
    initialize(None);
    let snapshot = utils::from_js::<PortSnapshot>(snapshot, "port snapshot")?;
    snapshot.validate();
    Some(snapshot)
}

fn with_fleet<T>(
    snapshot: &JsValue,
    fleet_id: FleetId,
    f: impl FnOnce(&fleet::Fleet, &PortSnapshot) -> T,
) -> Option<T> {
    let snapshot = read_snapshot(snapshot)?;
    let Some(fleet) = snapshot.fleet(fleet_id) else {
        debug!("Fleet {} not found", fleet_id);
        return None;
    };
    Some(f(fleet, &snapshot))
}

/// 艦隊の状態。艦隊が見つからなければ null。
#[wasm_bindgen(js_name = fleetStatus)]
pub fn fleet_status(snapshot: JsValue, fleet_id: i32) -> JsValue {
    with_fleet(&snapshot, fleet_id, eligibility::fleet_status)
        .map_or(JsValue::NULL, |status| utils::to_js(&status))
}

/// 修理枠の数。艦隊が見つからなければ 0。
#[wasm_bindgen(js_name = fleetRepairCount)]
pub fn fleet_repair_count(snapshot: JsValue, fleet_id: i32) -> u32 {
    with_fleet(&snapshot, fleet_id, eligibility::fleet_repair_count).map_or(0, |count| count as u32)
}

/// 艦隊の各艦の見積もり。艦隊が見つからなければ空配列。
#[wasm_bindgen(js_name = fleetRepairDetail)]
pub fn fleet_repair_detail(snapshot: JsValue, fleet_id: i32) -> JsValue {
    let details = with_fleet(&snapshot, fleet_id, detail::fleet_detail).unwrap_or_default();
    utils::to_js(&details)
}

#[wasm_bindgen(js_name = fleetIds)]
pub fn fleet_ids(snapshot: JsValue) -> JsValue {
    let ids: Vec<FleetId> = read_snapshot(&snapshot)
        .map(|s| s.fleets().iter().map(|f| f.id()).collect())
        .unwrap_or_default();
    utils::to_js(&ids)
}

#[wasm_bindgen(js_name = fleetBasicInfo)]
pub fn fleet_basic_info(snapshot: JsValue, fleet_id: i32) -> JsValue {
    with_fleet(&snapshot, fleet_id, |fleet, _| {
        eligibility::FleetBasicInfo::from(fleet)
    })
    .map_or(JsValue::NULL, |info| utils::to_js(&info))
}

#[wasm_bindgen(js_name = canFleetRepair)]
pub fn can_fleet_repair(snapshot: JsValue, fleet_id: i32) -> bool {
    with_fleet(&snapshot, fleet_id, eligibility::can_fleet_repair).unwrap_or(false)
}

/// 共有タイマーと組み合わせた各艦の進捗。
#[wasm_bindgen(js_name = fleetProgress)]
pub fn fleet_progress(snapshot: JsValue, fleet_id: i32, now: Option<f64>) -> JsValue {
    let now = utils::now_or(now);
    let timer = timer::timer_state().snapshot();
    let progress = with_fleet(&snapshot, fleet_id, |fleet, snapshot| {
        detail::fleet_progress(&detail::fleet_detail(fleet, snapshot), &timer, now)
    })
    .unwrap_or_default();
    utils::to_js(&progress)
}

/// 泊地修理で直せる損傷艦の一覧。
#[wasm_bindgen(js_name = repairQueue)]
pub fn repair_queue(snapshot: JsValue, sort_key: Option<String>, descending: Option<bool>) -> JsValue {
    let key = match sort_key.as_deref() {
        None => QueueSortKey::default(),
        Some(s) => QueueSortKey::parse(s).unwrap_or_else(|| {
            warn!("Unknown sort key {:?}", s);
            QueueSortKey::default()
        }),
    };
    let queue = read_snapshot(&snapshot)
        .map(|s| detail::repair_queue(&s, key, descending.unwrap_or(false)))
        .unwrap_or_default();
    utils::to_js(&queue)
}

fn decode_event(path: &str, post_body: &JsValue) -> GameEvent {
    let body = if post_body.is_undefined() || post_body.is_null() {
        Value::Null
    } else {
        utils::from_js::<Value>(post_body, "post body").unwrap_or(Value::Null)
    };
    GameEvent::decode(path, &body)
}

/// `game.response` を受けてタイマーを更新する。
#[wasm_bindgen(js_name = handleGameResponse)]
pub fn handle_game_response(path: &str, post_body: JsValue, snapshot: JsValue, now: Option<f64>) {
    let event = decode_event(path, &post_body);
    if event == GameEvent::Other {
        return;
    }
    let Some(snapshot) = read_snapshot(&snapshot) else {
        error!("Snapshot unavailable, {:?} ignored", event);
        return;
    };
    debug!("Game event: {:?}", event);
    event::apply_event(&event, &snapshot, &timer::timer_state(), utils::now_or(now));
}

/// プラグインへ自動で切り替えるべきかどうか。
#[wasm_bindgen(js_name = shouldSwitchToPlugin)]
pub fn should_switch_to_plugin(path: &str, snapshot: JsValue, now: Option<f64>) -> bool {
    let event = GameEvent::decode(path, &Value::Null);
    // 読めないスナップショットでも母港イベントとして評価し、遠征帰投のロックを消費させる
    let snapshot = match event {
        GameEvent::PortReturn => read_snapshot(&snapshot).unwrap_or_default(),
        _ => PortSnapshot::default(),
    };
    let now = utils::now_or(now);
    SWITCH_GUARD.with(|guard| guard.borrow_mut().evaluate(&event, &snapshot, now))
}

#[wasm_bindgen(js_name = lastRepairRefresh)]
pub fn last_repair_refresh() -> f64 {
    timer::timer_state().last_repair_refresh() as f64
}

#[wasm_bindgen(js_name = lastMoraleRefresh)]
pub fn last_morale_refresh() -> f64 {
    timer::timer_state().last_morale_refresh() as f64
}

/// タイマー購読のハンドル。`unsubscribe()` で解除する。
#[wasm_bindgen]
pub struct TimerSubscription {
    inner: Option<timer::Subscription>,
}

#[wasm_bindgen]
impl TimerSubscription {
    pub fn unsubscribe(&mut self) {
        if let Some(subscription) = self.inner.take() {
            subscription.unsubscribe();
        }
    }
}

/// タイマーの変更を購読する。コールバックには `{lastRepairRefresh, lastMoraleRefresh}` が渡される。
#[wasm_bindgen(js_name = subscribeTimers)]
pub fn subscribe_timers(callback: js_sys::Function) -> TimerSubscription {
    initialize(None);
    let subscription = timer::timer_state().subscribe(move |value| {
        if let Err(err) = callback.call1(&JsValue::NULL, &utils::to_js(&value)) {
            error!("Timer listener failed: {:?}", err);
        }
    });
    TimerSubscription {
        inner: Some(subscription),
    }
}
