use std::cell::RefCell;
use std::rc::Rc;

/// Shared owner of at most one pending timer.
///
/// `gloo-timers` handles cancel themselves on drop, so arming replaces (and
/// cancels) the previous timer, and `cancel` or dropping the last clone
/// cancels the current one. Clones share the same slot, which lets a timer
/// callback clear its own handle.
pub struct TimerSlot<T> {
    timer: Rc<RefCell<Option<T>>>,
}

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        TimerSlot {
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn arm(&self, timer: T) {
        // Take first so the old timer drops outside the borrow.
        let previous = self.timer.borrow_mut().replace(timer);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.timer.borrow_mut().take();
        drop(previous);
    }

    pub fn is_armed(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

impl<T> Clone for TimerSlot<T> {
    fn clone(&self) -> Self {
        TimerSlot {
            timer: self.timer.clone(),
        }
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared record of which fake timers were cancelled, in order.
    pub type CancelLog = Rc<RefCell<Vec<u32>>>;

    /// Stands in for a gloo timer: records its id when dropped.
    pub struct FakeTimer {
        id: u32,
        cancelled: CancelLog,
    }

    impl FakeTimer {
        pub fn new(id: u32, cancelled: &CancelLog) -> Self {
            FakeTimer {
                id,
                cancelled: cancelled.clone(),
            }
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTimer;
    use super::*;
    use std::cell::Cell;

    fn timer(id: u32, log: &fake::CancelLog) -> FakeTimer {
        FakeTimer::new(id, log)
    }

    #[test]
    fn rearming_cancels_the_pending_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = TimerSlot::new();
        slot.arm(timer(1, &log));
        assert!(log.borrow().is_empty());

        slot.arm(timer(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_armed());
    }

    #[test]
    fn cancel_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = TimerSlot::new();
        slot.arm(timer(1, &log));
        slot.cancel();
        slot.cancel();
        assert_eq!(*log.borrow(), vec![1]);
        assert!(!slot.is_armed());
    }

    #[test]
    fn dropping_the_last_owner_cancels() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = TimerSlot::new();
        let callback_handle = slot.clone();
        slot.arm(timer(7, &log));

        drop(slot);
        assert!(log.borrow().is_empty(), "a clone still owns the timer");
        drop(callback_handle);
        assert_eq!(*log.borrow(), vec![7]);
    }

    #[test]
    fn a_clone_can_clear_its_own_timer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = TimerSlot::new();
        slot.arm(timer(3, &log));

        let fired = Cell::new(false);
        let handle = slot.clone();
        let on_finish = || {
            fired.set(true);
            handle.cancel();
        };
        on_finish();

        assert!(fired.get());
        assert!(!slot.is_armed());
        assert_eq!(*log.borrow(), vec![3]);
    }
}
