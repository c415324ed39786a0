//! Timer-driven refetch for the polling containers
//!
//! Each container owns exactly one repeating browser interval. When the
//! watched dependency changes, the stale interval is cleared before the
//! next one is armed, and unmounting clears whatever is left.

use std::cell::Cell;
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;

/// Slot holding the single armed interval of one container
pub struct PollTimer<H: Copy> {
    armed: Cell<Option<H>>,
}

impl<H: Copy> PollTimer<H> {
    pub fn new() -> Self {
        Self {
            armed: Cell::new(None),
        }
    }

    /// Arm `next`, handing back whatever was armed before
    pub fn arm(&self, next: Option<H>) -> Option<H> {
        self.armed.replace(next)
    }

    /// Empty the slot, handing back the armed interval
    pub fn disarm(&self) -> Option<H> {
        self.armed.take()
    }
}

impl<H: Copy> Default for PollTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch immediately and every `interval` thereafter, restarting the cycle
/// whenever `watch` reads a changed signal.
///
/// The previous interval is cleared before the next one is armed, so the
/// container never ticks twice per cycle. In-flight requests are not
/// cancelled; a late response simply lands before the next fetch.
pub fn use_polling<W, F>(interval: Duration, watch: W, fetch: F)
where
    W: Fn() + 'static,
    F: Fn() + Clone + 'static,
{
    let timer = StoredValue::new_local(PollTimer::<IntervalHandle>::new());

    Effect::new(move |_| {
        watch();
        if let Some(stale) = timer.with_value(|slot| slot.disarm()) {
            stale.clear();
        }

        fetch();

        let tick = fetch.clone();
        let next = set_interval_with_handle(move || tick(), interval).ok();
        if let Some(stale) = timer.with_value(|slot| slot.arm(next)) {
            stale.clear();
        }
    });

    on_cleanup(move || {
        if let Some(stale) = timer.with_value(|slot| slot.disarm()) {
            stale.clear();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_hands_back_previous_interval() {
        let timer: PollTimer<u32> = PollTimer::new();
        assert_eq!(timer.arm(Some(1)), None);
        assert_eq!(timer.arm(Some(2)), Some(1));
    }

    #[test]
    fn disarm_empties_the_slot() {
        let timer: PollTimer<u32> = PollTimer::new();
        timer.arm(Some(7));
        assert_eq!(timer.disarm(), Some(7));
        assert_eq!(timer.disarm(), None);
    }

    #[test]
    fn restart_cycles_never_stack_intervals() {
        let timer: PollTimer<u32> = PollTimer::new();
        let mut cleared = Vec::new();

        for generation in 0..5 {
            if let Some(stale) = timer.disarm() {
                cleared.push(stale);
            }
            assert_eq!(timer.arm(Some(generation)), None);
        }

        assert_eq!(cleared, vec![0, 1, 2, 3]);
        assert_eq!(timer.disarm(), Some(4));
    }

    #[test]
    fn failed_arm_leaves_slot_empty() {
        let timer: PollTimer<u32> = PollTimer::new();
        timer.arm(None);
        assert_eq!(timer.disarm(), None);
    }
}
