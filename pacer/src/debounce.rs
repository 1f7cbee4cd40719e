// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Collapses a burst of calls into a single execution.
//!
//! Every call restarts the quiet period. What happens at the ends of a burst depends on
//! the [`Edge`]:
//!
//! - **Trailing** - the callback runs once, `wait` after the last call of the burst,
//!   with that last call's arguments
//! - **Leading** - the callback runs synchronously on the first call of the burst; every
//!   call until `wait` of silence has passed is swallowed, and nothing runs at the end
//!
//! # Example
//!
//! ```
//! use pacer::{DebounceExt, Edge};
//! use pacer_runtime::ManualScheduler;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = ManualScheduler::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let on_resize = (move |width: u32| sink.borrow_mut().push(width)).debounce_with_scheduler(
//!     Duration::from_millis(50),
//!     Edge::Trailing,
//!     scheduler.clone(),
//! );
//!
//! on_resize.call(800);
//! scheduler.advance(Duration::from_millis(10));
//! on_resize.call(1024);
//! scheduler.advance(Duration::from_millis(100));
//!
//! assert_eq!(*seen.borrow(), vec![1024]);
//! ```

use crate::edge::Edge;
use crate::logging::{debug, trace};
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;
use pacer_runtime::Scheduler;
use std::rc::Rc;

/// A debounced callable.
///
/// Cloning yields another handle to the same instance: clones share the pending timer.
/// Build a separate instance with another [`debounce_with_scheduler`] call.
pub struct Debounced<A, S: Scheduler> {
    state: Rc<DebounceState<A, S>>,
}

struct DebounceState<A, S: Scheduler> {
    callback: Box<dyn Fn(A)>,
    wait: Duration,
    edge: Edge,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

/// Wraps `callback` so that bursts of calls collapse into one execution.
///
/// `edge` accepts an [`Edge`] or the `immediate` flag as a `bool`.
pub fn debounce_with_scheduler<A, F, S>(
    callback: F,
    wait: Duration,
    edge: impl Into<Edge>,
    scheduler: S,
) -> Debounced<A, S>
where
    A: 'static,
    F: Fn(A) + 'static,
    S: Scheduler,
{
    Debounced {
        state: Rc::new(DebounceState {
            callback: Box::new(callback),
            wait,
            edge: edge.into(),
            scheduler,
            pending: RefCell::new(None),
        }),
    }
}

/// [`debounce_with_scheduler`] on the [`DefaultScheduler`](crate::DefaultScheduler).
///
/// Calls must happen inside a `tokio::task::LocalSet`.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, F>(
    callback: F,
    wait: Duration,
    edge: impl Into<Edge>,
) -> Debounced<A, crate::DefaultScheduler>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    debounce_with_scheduler(callback, wait, edge, crate::DefaultScheduler::default())
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    /// Invokes the debounced callable.
    ///
    /// Any pending timer is replaced. In trailing mode `args` are held until the new
    /// timer fires; in leading mode they are used now if no burst is in progress and
    /// dropped otherwise.
    pub fn call(&self, args: A) {
        let state = &self.state;
        let previous = state.pending.borrow_mut().take();
        let fire_now = state.edge.is_leading() && previous.is_none();

        if let Some(handle) = previous {
            trace!("debounce: resetting pending timer {:?}", handle);
            state.scheduler.cancel(&handle);
        }

        let (deferred, immediate) = match state.edge {
            Edge::Leading => (None, Some(args)),
            Edge::Trailing => (Some(args), None),
        };

        let owner = Rc::clone(state);
        let handle = state
            .scheduler
            .schedule(state.wait, Box::new(move || owner.fire(deferred)));
        trace!("debounce: scheduled {:?} in {:?}", handle, state.wait);
        *state.pending.borrow_mut() = Some(handle);

        match immediate {
            Some(args) if fire_now => {
                debug!("debounce: firing on the leading edge");
                (state.callback)(args);
            }
            Some(_) => trace!("debounce: swallowed call inside quiet period"),
            None => {}
        }
    }

    /// Whether a quiet-period timer is outstanding
    pub fn is_pending(&self) -> bool {
        self.state.pending.borrow().is_some()
    }

    /// Quiet period required before a burst ends
    pub fn wait(&self) -> Duration {
        self.state.wait
    }

    /// Which end of a burst fires
    pub fn edge(&self) -> Edge {
        self.state.edge
    }

    /// Turns the instance into a plain closure with the same behavior.
    pub fn into_fn(self) -> impl Fn(A) + 'static {
        move |args| self.call(args)
    }
}

impl<A, S: Scheduler> DebounceState<A, S> {
    fn fire(&self, deferred: Option<A>) {
        self.pending.borrow_mut().take();

        if let Some(args) = deferred {
            debug!("debounce: quiet period elapsed, firing on the trailing edge");
            (self.callback)(args);
        }
    }
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A, S: Scheduler> fmt::Debug for Debounced<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.state.wait)
            .field("edge", &self.state.edge)
            .field("pending", &self.state.pending.borrow())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `debounce` on any `Fn(A)` closure.
pub trait DebounceExt<A>: Fn(A) + Sized + 'static
where
    A: 'static,
{
    /// Debounces this callback on the given scheduler.
    fn debounce_with_scheduler<S: Scheduler>(
        self,
        wait: Duration,
        edge: impl Into<Edge>,
        scheduler: S,
    ) -> Debounced<A, S> {
        debounce_with_scheduler(self, wait, edge, scheduler)
    }

    /// Debounces this callback on the default scheduler for the active runtime.
    #[cfg(feature = "runtime-tokio")]
    fn debounce(
        self,
        wait: Duration,
        edge: impl Into<Edge>,
    ) -> Debounced<A, crate::DefaultScheduler> {
        debounce(self, wait, edge)
    }
}

impl<F, A> DebounceExt<A> for F
where
    F: Fn(A) + 'static,
    A: 'static,
{
}
