// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The deferred-execution primitive behind the pacer wrappers.
//!
//! A [`Scheduler`](scheduler::Scheduler) runs a thunk once after a delay on the same
//! cooperative thread, and can cancel it before it fires. Two implementations ship:
//!
//! - [`ManualScheduler`](impls::manual::ManualScheduler) - a virtual clock driven by the host
//! - `TokioScheduler` - local tasks on a current-thread tokio runtime (`runtime-tokio`)

pub mod impls;
pub mod scheduler;

pub use impls::manual::{ManualScheduler, ManualTimerId};
#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;
pub use scheduler::{Scheduler, Thunk};
