//! 泊地修理と戦意高揚のタイマー。
//!
//! タイマーは艦隊ごとではなく、母港全体で1つずつ共有される。
//! 値は開始時刻 (ミリ秒) で、0 は停止中 (次の条件成立待ち) を表す。

mod snapshot;
pub use snapshot::{TimerSnapshot, Timestamp};

mod state;
pub use state::{timer_state, Subscription, TimerState};
