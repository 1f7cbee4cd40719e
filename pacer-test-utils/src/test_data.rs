// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The kind of high-frequency input the wrappers are built for.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: i32, y: i32 },
    Scroll { delta: f32 },
    Key(char),
}

pub fn pointer_at(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerMove { x, y }
}

pub fn scroll_by(delta: f32) -> InputEvent {
    InputEvent::Scroll { delta }
}

pub fn key(c: char) -> InputEvent {
    InputEvent::Key(c)
}

/// A pointer drag along the x axis, one event per step.
pub fn pointer_drag(steps: i32) -> Vec<InputEvent> {
    (0..steps).map(|step| pointer_at(step * 10, 0)).collect()
}

/// Keystrokes for `text`, in order.
pub fn typed(text: &str) -> Vec<InputEvent> {
    text.chars().map(key).collect()
}
