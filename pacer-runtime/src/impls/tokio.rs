// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{Scheduler, Thunk};
use core::time::Duration;
use pacer_error::{PacerError, Result};
use tokio::task::AbortHandle;

/// Scheduler backed by tokio local tasks.
///
/// Thunks are spawned with [`tokio::task::spawn_local`], so `schedule` must be called
/// from inside a [`tokio::task::LocalSet`] on a current-thread runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Returns a scheduler if a tokio runtime is entered on this thread.
    ///
    /// Only the runtime is checked: `schedule` still panics when called outside a
    /// `LocalSet`.
    pub fn try_current() -> Result<Self> {
        tokio::runtime::Handle::try_current()
            .map(|_| Self)
            .map_err(|err| PacerError::no_runtime(err.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&self, delay: Duration, thunk: Thunk) -> Self::Handle {
        // Created here so the deadline counts from the call; tokio clamps far-future delays.
        let sleep = tokio::time::sleep(delay);
        tokio::task::spawn_local(async move {
            sleep.await;
            thunk();
        })
        .abort_handle()
    }

    fn cancel(&self, handle: &Self::Handle) {
        handle.abort();
    }
}
