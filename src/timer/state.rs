use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::timer::{TimerSnapshot, Timestamp};

type Listener = Rc<dyn Fn(TimerSnapshot)>;

#[derive(Default)]
struct Shared {
    value: Cell<TimerSnapshot>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl Shared {
    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }
}

/// タイマーの状態を保持し、変更を購読者に通知する。
///
/// 更新系のメソッドは値を書き換えた直後に、その時点の購読者全員へ1回ずつ同期的に通知する。
/// 購読者は通知中に状態を読んだり購読を解除したりしてよい。
///
/// `Clone` は同じ状態を指すハンドルを作る。
#[derive(Clone, Default)]
pub struct TimerState {
    shared: Rc<Shared>,
}

impl fmt::Debug for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerState")
            .field("value", &self.shared.value.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.shared.value.get()
    }

    pub fn last_repair_refresh(&self) -> Timestamp {
        self.snapshot().last_repair_refresh
    }

    pub fn last_morale_refresh(&self) -> Timestamp {
        self.snapshot().last_morale_refresh
    }

    pub fn set_last_repair_refresh(&self, timestamp: Timestamp) {
        debug!("Repair timer set to {}", timestamp);
        self.update(|value| value.last_repair_refresh = timestamp);
    }

    pub fn set_last_morale_refresh(&self, timestamp: Timestamp) {
        debug!("Morale timer set to {}", timestamp);
        self.update(|value| value.last_morale_refresh = timestamp);
    }

    pub fn reset_repair_timer(&self, now: Timestamp) {
        self.set_last_repair_refresh(now);
    }

    pub fn reset_morale_timer(&self, now: Timestamp) {
        self.set_last_morale_refresh(now);
    }

    pub fn clear_repair_timer(&self) {
        self.set_last_repair_refresh(0);
    }

    pub fn clear_morale_timer(&self) {
        self.set_last_morale_refresh(0);
    }

    /// 変更通知を購読する。返り値の [`Subscription`] で解除する。
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(TimerSnapshot) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    fn update(&self, f: impl FnOnce(&mut TimerSnapshot)) {
        let mut value = self.shared.value.get();
        f(&mut value);
        self.shared.value.set(value);

        // 通知中の購読・解除で借用が衝突しないよう、先に複製する
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }
}

/// 購読の解除用ハンドル。破棄しただけでは解除されない。
#[must_use = "the listener stays registered until `unsubscribe` is called"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    /// 購読を解除する。他の購読者には影響しない。
    pub fn unsubscribe(self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.remove(self.id);
        }
    }
}

thread_local! {
    static TIMER_STATE: TimerState = TimerState::new();
}

/// プロセス全体で共有されるタイマー。
pub fn timer_state() -> TimerState {
    TIMER_STATE.with(TimerState::clone)
}
