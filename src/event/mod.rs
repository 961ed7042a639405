//! ゲームの API レスポンス通知を受けてタイマーを更新する。

mod game_event;
pub use game_event::{parse_flag, parse_id, GameEvent, Placement};

mod reducer;
pub use reducer::apply_event;

mod auto_switch;
pub use auto_switch::{should_switch_on_port, SwitchGuard, AUTO_SWITCH_GRACE_MS};
