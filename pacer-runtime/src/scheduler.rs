// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

/// A deferred callback. Not `Send`: everything runs on one cooperative thread.
pub type Thunk = Box<dyn FnOnce() + 'static>;

/// Host facility that runs a thunk once after a delay, with cancellation.
pub trait Scheduler: Clone + Debug + 'static {
    /// Opaque identifier of a scheduled thunk
    type Handle: Clone + Debug + 'static;

    /// Queue `thunk` to run once, no sooner than `delay` from now.
    ///
    /// Implementations never run the thunk synchronously inside this call.
    fn schedule(&self, delay: Duration, thunk: Thunk) -> Self::Handle;

    /// Prevent a scheduled thunk from running.
    ///
    /// Canceling a handle that already fired or was already canceled does nothing.
    fn cancel(&self, handle: &Self::Handle);
}
