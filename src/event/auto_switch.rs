use log::debug;

use crate::eligibility::check_repair_active;
use crate::event::GameEvent;
use crate::fleet::PortSnapshot;
use crate::repair::estimate_repair_duration;
use crate::timer::Timestamp;

/// 遠征帰投直後の母港通知を無視する時間 (ミリ秒)。
pub const AUTO_SWITCH_GRACE_MS: u64 = 5_000;

/// 泊地修理が発動している艦隊に、泊地修理で直せる艦がいるかどうか。
pub fn should_switch_on_port(snapshot: &PortSnapshot) -> bool {
    snapshot
        .fleets()
        .iter()
        .filter(|fleet| check_repair_active(fleet, snapshot).active)
        .flat_map(|fleet| fleet.valid_ship_ids())
        .filter_map(|id| snapshot.ship(id))
        .any(|ship| estimate_repair_duration(ship.now_hp(), ship.max_hp(), ship.dock_time()) > 0)
}

/// 自動切り替えの判定。
///
/// 遠征帰投 (mission/result) の直後には必ず母港 (port) が呼ばれるため、
/// 帰投から猶予時間内の最初の母港通知は1回だけ切り替えの対象外にする。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchGuard {
    lock_until: Option<Timestamp>,
}

impl SwitchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self, now: Timestamp) -> bool {
        self.lock_until.is_some_and(|until| now < until)
    }

    /// イベントを受けて、プラグインに切り替えるべきかを返す。
    pub fn evaluate(&mut self, event: &GameEvent, snapshot: &PortSnapshot, now: Timestamp) -> bool {
        match event {
            GameEvent::ExpeditionResult => {
                self.lock_until = Some(now + AUTO_SWITCH_GRACE_MS);
                false
            }
            GameEvent::PortReturn => {
                if let Some(until) = self.lock_until.take() {
                    if now < until {
                        debug!("Port check suppressed after expedition result");
                        return false;
                    }
                }
                should_switch_on_port(snapshot)
            }
            _ => false,
        }
    }
}
