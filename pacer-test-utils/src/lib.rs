// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared fixtures for the pacer test suites.

pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use helpers::{ms, run_local};
pub use recorder::CallRecorder;
pub use test_data::InputEvent;
