// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A host-driven scheduler with a virtual clock.
//!
//! Nothing fires on its own: the host moves time forward with [`ManualScheduler::advance`]
//! (once per frame, per tick, or per test step) and every due thunk runs inside that call,
//! in deadline order.
//!
//! ```
//! use pacer_runtime::{ManualScheduler, Scheduler};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&fired);
//!
//! scheduler.schedule(Duration::from_millis(50), Box::new(move || flag.set(true)));
//!
//! scheduler.advance(Duration::from_millis(49));
//! assert!(!fired.get());
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use crate::scheduler::{Scheduler, Thunk};
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handle returned by [`ManualScheduler::schedule`].
///
/// Orders by deadline first, then by scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimerId {
    deadline: Duration,
    seq: u64,
}

impl ManualTimerId {
    /// Virtual time at which the thunk becomes due
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_seq: u64,
    entries: BTreeMap<ManualTimerId, Thunk>,
}

/// Deterministic scheduler over a virtual clock starting at zero.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of thunks still waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Moves the clock forward by `by`, firing every thunk that becomes due.
    ///
    /// Returns how many thunks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Moves the clock to `instant`, firing every thunk due at or before it.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&self, instant: Duration) -> usize {
        let mut fired = 0;
        while let Some(thunk) = self.pop_due(Some(instant)) {
            thunk();
            fired += 1;
        }

        let mut queue = self.queue.borrow_mut();
        queue.now = queue.now.max(instant);
        fired
    }

    /// Fires everything in the queue, including thunks scheduled while firing.
    ///
    /// Does not return while thunks keep rescheduling themselves.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(thunk) = self.pop_due(None) {
            thunk();
            fired += 1;
        }
        fired
    }

    // The borrow ends before the thunk runs, so thunks may schedule and cancel.
    fn pop_due(&self, until: Option<Duration>) -> Option<Thunk> {
        let mut queue = self.queue.borrow_mut();
        let (id, _) = queue.entries.first_key_value()?;
        if until.is_some_and(|limit| id.deadline > limit) {
            return None;
        }

        let (id, thunk) = queue.entries.pop_first()?;
        queue.now = queue.now.max(id.deadline);
        Some(thunk)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimerId;

    fn schedule(&self, delay: Duration, thunk: Thunk) -> Self::Handle {
        let mut queue = self.queue.borrow_mut();
        let id = ManualTimerId {
            deadline: queue.now.saturating_add(delay),
            seq: queue.next_seq,
        };
        queue.next_seq += 1;
        queue.entries.insert(id, thunk);
        id
    }

    fn cancel(&self, handle: &Self::Handle) {
        self.queue.borrow_mut().entries.remove(handle);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.entries.len())
            .finish()
    }
}
