use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::timer::Timestamp;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// 現在時刻 (エポックからのミリ秒)。
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> Timestamp {
    js_sys::Date::now() as Timestamp
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> Timestamp {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as Timestamp)
}

/// JS から渡された省略可能な時刻。省略時は現在時刻。
pub fn now_or(now: Option<f64>) -> Timestamp {
    match now {
        Some(now) if now.is_finite() && now > 0.0 => now as Timestamp,
        _ => now_ms(),
    }
}

/// JS の値を JSON 経由で読み込む。
///
/// ストアのオブジェクトは数値キーの連想配列を含むため、一度 JSON 文字列にしてから serde_json で読む。
/// 読めない場合はログに出して None を返す。
pub fn from_js<T: DeserializeOwned>(value: &JsValue, what: &str) -> Option<T> {
    let Some(text) = js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()) else {
        error!("Failed to stringify {}", what);
        return None;
    };
    match serde_json::from_str(&text) {
        Ok(v) => Some(v),
        Err(err) => {
            error!("Failed to parse {}: {:?}", what, err);
            None
        }
    }
}

/// JS に返す値に変換する。連想配列はプレーンなオブジェクトになる。
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match value.serialize(&serializer) {
        Ok(v) => v,
        Err(err) => {
            error!("Failed to serialize result: {:?}", err);
            JsValue::NULL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_or() {
        assert_eq!(now_or(Some(1_700_000_000_000.0)), 1_700_000_000_000);
        assert!(now_or(None) > 0);
        assert!(now_or(Some(f64::NAN)) > 0);
        assert!(now_or(Some(-5.0)) > 0);
    }
}
