// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::str::FromStr;
use pacer_error::PacerError;

/// Which end of a burst a debounced callback fires on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Fire synchronously on the first call of a burst and swallow the rest
    Leading,
    /// Fire once, after the burst has been quiet for the whole wait
    #[default]
    Trailing,
}

impl Edge {
    /// Whether this is the `immediate` policy
    pub fn is_leading(self) -> bool {
        self == Self::Leading
    }
}

/// `true` is the classic `immediate` flag.
impl From<bool> for Edge {
    fn from(immediate: bool) -> Self {
        if immediate {
            Self::Leading
        } else {
            Self::Trailing
        }
    }
}

impl FromStr for Edge {
    type Err = PacerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "leading" | "immediate" => Ok(Self::Leading),
            "trailing" => Ok(Self::Trailing),
            _ => Err(PacerError::invalid_edge(value)),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leading => f.write_str("leading"),
            Self::Trailing => f.write_str("trailing"),
        }
    }
}
