// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for callbacks driven by high-frequency events.
//!
//! Both wrappers take a callback and return a stateful callable with the same argument
//! type but different timing. Deferred work goes through a
//! [`Scheduler`](pacer_runtime::Scheduler), so the same wrappers run on tokio, on a host
//! event loop, or on a virtual clock in tests.
//!
//! # Overview
//!
//! - **[`Debounced`]** - collapses a burst into one call, on the leading or trailing [`Edge`]
//! - **[`Throttled`]** - runs on the leading edge, then drops calls for a cooldown window
//! - **[`DebounceExt`] / [`ThrottleExt`]** - `.debounce(..)` / `.throttle(..)` on closures
//!
//! Arguments are forwarded as one value. To pass a receiver along with the arguments,
//! make the argument a tuple such as `(context, event)`.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioScheduler` as the [`DefaultScheduler`]; calls
//!   must happen inside a `tokio::task::LocalSet`
//! - [`ManualScheduler`](pacer_runtime::ManualScheduler) is always available
//!
//! Enable the `tracing` feature to log timer activity at `trace`/`debug` level.
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let on_scroll = (|offset: f64| println!("scrolled to {offset}"))
//!             .throttle(Duration::from_millis(100));
//!         let on_search = (|query: String| println!("searching {query}"))
//!             .debounce(Duration::from_millis(250), Edge::Trailing);
//!
//!         on_scroll.call(12.0);
//!         on_scroll.call(24.0); // dropped
//!         on_search.call("ru".to_string());
//!         on_search.call("rust".to_string()); // only this one runs
//!
//!         tokio::time::sleep(Duration::from_millis(300)).await;
//!     })
//!     .await;
//! # }
//! ```

mod debounce;
mod edge;
mod logging;
mod throttle;

pub mod prelude;

pub use debounce::{debounce_with_scheduler, DebounceExt, Debounced};
pub use edge::Edge;
pub use throttle::{throttle_with_scheduler, ThrottleExt, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;

/// Scheduler used by the convenience constructors for the active runtime feature.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = pacer_runtime::TokioScheduler;
