// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::ManualScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

/// Records every invocation of a callback together with the time it happened.
///
/// Clones share the same log.
pub struct CallRecorder<T> {
    clock: Rc<dyn Fn() -> Duration>,
    calls: Rc<RefCell<Vec<(Duration, T)>>>,
}

impl<T: 'static> CallRecorder<T> {
    pub fn new(clock: impl Fn() -> Duration + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Timestamps calls with the scheduler's virtual clock.
    pub fn manual(scheduler: &ManualScheduler) -> Self {
        let scheduler = scheduler.clone();
        Self::new(move || scheduler.now())
    }

    /// Timestamps calls with tokio time elapsed since this recorder was created.
    ///
    /// With a paused clock the readings are exact.
    pub fn tokio() -> Self {
        let start = Instant::now();
        Self::new(move || start.elapsed())
    }

    /// A callback that appends to this recorder.
    pub fn sink(&self) -> impl Fn(T) + 'static {
        let recorder = self.clone();
        move |args| {
            let at = (recorder.clock)();
            recorder.calls.borrow_mut().push((at, args));
        }
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    pub fn times(&self) -> Vec<Duration> {
        self.calls.borrow().iter().map(|(at, _)| *at).collect()
    }
}

impl<T: Clone + 'static> CallRecorder<T> {
    pub fn calls(&self) -> Vec<(Duration, T)> {
        self.calls.borrow().clone()
    }

    pub fn args(&self) -> Vec<T> {
        self.calls.borrow().iter().map(|(_, args)| args.clone()).collect()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            clock: Rc::clone(&self.clock),
            calls: Rc::clone(&self.calls),
        }
    }
}
