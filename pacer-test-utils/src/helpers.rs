// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::time::Duration;
use tokio::task::LocalSet;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Runs `future` inside a fresh `LocalSet`, as the tokio scheduler requires.
pub async fn run_local<F: Future>(future: F) -> F::Output {
    LocalSet::new().run_until(future).await
}
