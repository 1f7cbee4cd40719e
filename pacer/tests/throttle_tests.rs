// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{throttle_with_scheduler, ThrottleExt};
use pacer_runtime::ManualScheduler;
use pacer_test_utils::test_data::{scroll_by, InputEvent};
use pacer_test_utils::{ms, CallRecorder};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_throttle_fires_leading_and_drops_during_cooldown() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(25), scheduler.clone());

    // Act
    for at in [0, 10, 20, 30] {
        scheduler.advance_to(ms(at));
        throttled.call(at);
    }

    // Assert
    assert_eq!(recorder.calls(), vec![(ms(0), 0), (ms(30), 30)]);
}

#[test]
fn test_throttle_fires_synchronously() {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(100), scheduler.clone());

    throttled.call(scroll_by(3.0));

    assert_eq!(recorder.args(), vec![scroll_by(3.0)]);
    assert!(throttled.is_cooling());
}

#[test]
fn test_dropped_calls_leave_no_trace() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(100), scheduler.clone());

    // Act
    throttled.call(0);
    for at in 1..100 {
        scheduler.advance_to(ms(at));
        throttled.call(at);
    }

    // Assert
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(recorder.args(), vec![0]);

    // Cooldown is not extended by the dropped calls.
    scheduler.advance_to(ms(100));
    assert!(!throttled.is_cooling());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_call_at_exact_cooldown_end_fires() {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(25), scheduler.clone());

    throttled.call("a");
    scheduler.advance_to(ms(24));
    throttled.call("b");
    scheduler.advance_to(ms(25));
    throttled.call("c");

    assert_eq!(recorder.calls(), vec![(ms(0), "a"), (ms(25), "c")]);
}

#[test]
fn test_zero_limit_fires_every_separated_call() {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(0), scheduler.clone());

    for value in 1..=3 {
        throttled.call(value);
        scheduler.advance(ms(0));
    }

    assert_eq!(recorder.args(), vec![1, 2, 3]);
}

#[test]
fn test_pointer_stream_is_capped_per_window() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = recorder
        .sink()
        .throttle_with_scheduler(ms(16), scheduler.clone());

    // Act: one pointer event per millisecond for 100ms
    for at in 0..100 {
        scheduler.advance_to(ms(at));
        throttled.call(InputEvent::PointerMove { x: at as i32, y: 0 });
    }

    // Assert
    assert_eq!(
        recorder.times(),
        vec![ms(0), ms(16), ms(32), ms(48), ms(64), ms(80), ms(96)]
    );
}

#[test]
fn test_instances_from_same_callback_are_independent() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let first = throttle_with_scheduler(recorder.sink(), ms(50), scheduler.clone());
    let second = throttle_with_scheduler(recorder.sink(), ms(50), scheduler.clone());

    // Act
    first.call("first");
    scheduler.advance_to(ms(10));
    second.call("second");
    first.call("first dropped");

    // Assert
    assert_eq!(
        recorder.calls(),
        vec![(ms(0), "first"), (ms(10), "second")]
    );
    scheduler.advance_to(ms(50));
    assert!(!first.is_cooling());
    assert!(second.is_cooling());
}

#[test]
fn test_clones_share_cooldown() {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(50), scheduler.clone());
    let clone = throttled.clone();

    throttled.call(1);
    clone.call(2);

    assert_eq!(recorder.args(), vec![1]);
    assert!(clone.is_cooling());
}

#[test]
fn test_panicking_callback_does_not_open_cooldown() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let sink = recorder.sink();
    let throttled = throttle_with_scheduler(
        move |value: u32| {
            sink(value);
            if value == 0 {
                panic!("callback failure");
            }
        },
        ms(40),
        scheduler.clone(),
    );

    // Act
    let result = catch_unwind(AssertUnwindSafe(|| throttled.call(0)));
    let cooling_after_panic = throttled.is_cooling();
    throttled.call(1);

    // Assert
    assert!(result.is_err());
    assert!(!cooling_after_panic);
    assert_eq!(recorder.args(), vec![0, 1]);
    assert!(throttled.is_cooling());
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_into_fn_and_accessors() {
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::manual(&scheduler);
    let throttled = throttle_with_scheduler(recorder.sink(), ms(30), scheduler.clone());
    assert_eq!(throttled.limit(), ms(30));
    assert!(format!("{throttled:?}").contains("cooling: false"));

    let on_scroll = throttled.into_fn();
    on_scroll(1.5_f32);
    on_scroll(2.5_f32);

    assert_eq!(recorder.args(), vec![1.5_f32]);
}
