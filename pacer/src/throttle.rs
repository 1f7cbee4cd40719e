// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Caps a callback to at most one execution per cooldown window.
//!
//! This implements **leading throttle** semantics:
//! - A call outside a cooldown window runs the callback immediately and opens a window
//!   of `limit`
//! - Calls inside the window are dropped without a trace: nothing is deferred and the
//!   window is not extended
//! - The window always runs to completion; there is no trailing execution

use crate::logging::{debug, trace};
use core::cell::Cell;
use core::fmt;
use core::time::Duration;
use pacer_runtime::Scheduler;
use std::rc::Rc;

/// A throttled callable.
///
/// Clones share the same cooldown window.
pub struct Throttled<A, S: Scheduler> {
    state: Rc<ThrottleState<A, S>>,
}

struct ThrottleState<A, S: Scheduler> {
    callback: Box<dyn Fn(A)>,
    limit: Duration,
    scheduler: S,
    cooling: Cell<bool>,
}

/// Wraps `callback` so it runs at most once per `limit`.
pub fn throttle_with_scheduler<A, F, S>(
    callback: F,
    limit: Duration,
    scheduler: S,
) -> Throttled<A, S>
where
    A: 'static,
    F: Fn(A) + 'static,
    S: Scheduler,
{
    Throttled {
        state: Rc::new(ThrottleState {
            callback: Box::new(callback),
            limit,
            scheduler,
            cooling: Cell::new(false),
        }),
    }
}

/// [`throttle_with_scheduler`] on the [`DefaultScheduler`](crate::DefaultScheduler).
///
/// Calls must happen inside a `tokio::task::LocalSet`.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<A, F>(callback: F, limit: Duration) -> Throttled<A, crate::DefaultScheduler>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    throttle_with_scheduler(callback, limit, crate::DefaultScheduler::default())
}

impl<A: 'static, S: Scheduler> Throttled<A, S> {
    /// Invokes the throttled callable.
    ///
    /// The callback runs before the window opens. A callback that panics leaves the
    /// instance ready, so the next call runs.
    pub fn call(&self, args: A) {
        let state = &self.state;
        if state.cooling.get() {
            trace!("throttle: dropped call during cooldown");
            return;
        }

        debug!("throttle: firing, cooling down for {:?}", state.limit);
        (state.callback)(args);

        state.cooling.set(true);
        let owner = Rc::clone(state);
        state.scheduler.schedule(
            state.limit,
            Box::new(move || {
                owner.cooling.set(false);
                trace!("throttle: cooldown ended");
            }),
        );
    }

    /// Whether the instance is inside its cooldown window
    pub fn is_cooling(&self) -> bool {
        self.state.cooling.get()
    }

    /// Length of the cooldown window
    pub fn limit(&self) -> Duration {
        self.state.limit
    }

    /// Turns the instance into a plain closure with the same behavior.
    pub fn into_fn(self) -> impl Fn(A) + 'static {
        move |args| self.call(args)
    }
}

impl<A, S: Scheduler> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Throttled<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("limit", &self.state.limit)
            .field("cooling", &self.state.cooling.get())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `throttle` on any `Fn(A)` closure.
pub trait ThrottleExt<A>: Fn(A) + Sized + 'static
where
    A: 'static,
{
    /// Throttles this callback on the given scheduler.
    fn throttle_with_scheduler<S: Scheduler>(
        self,
        limit: Duration,
        scheduler: S,
    ) -> Throttled<A, S> {
        throttle_with_scheduler(self, limit, scheduler)
    }

    /// Throttles this callback on the default scheduler for the active runtime.
    #[cfg(feature = "runtime-tokio")]
    fn throttle(self, limit: Duration) -> Throttled<A, crate::DefaultScheduler> {
        throttle(self, limit)
    }
}

impl<F, A> ThrottleExt<A> for F
where
    F: Fn(A) + 'static,
    A: 'static,
{
}
