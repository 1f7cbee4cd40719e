// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```ignore
//! use pacer::prelude::*;
//!
//! let on_move = handle_pointer.throttle(Duration::from_millis(16));
//! let on_type = run_search.debounce(Duration::from_millis(250), Edge::Trailing);
//! ```

pub use crate::{DebounceExt, Debounced, Edge, ThrottleExt, Throttled};
pub use pacer_runtime::{ManualScheduler, Scheduler};

#[cfg(feature = "runtime-tokio")]
pub use crate::DefaultScheduler;
#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::TokioScheduler;
