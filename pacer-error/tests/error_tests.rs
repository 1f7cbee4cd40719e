// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_error::{PacerError, Result};

#[test]
fn test_error_display() {
    let err = PacerError::no_runtime("must be called from the context of a Tokio runtime");
    assert_eq!(
        err.to_string(),
        "No runtime available: must be called from the context of a Tokio runtime"
    );

    let err = PacerError::invalid_edge("sideways");
    assert_eq!(
        err.to_string(),
        "Invalid edge policy 'sideways': expected 'leading' or 'trailing'"
    );
}

#[test]
fn test_error_constructors() {
    let err = PacerError::no_runtime("none");
    assert!(matches!(err, PacerError::NoRuntime { .. }));

    let err = PacerError::invalid_edge("x");
    assert_eq!(
        err,
        PacerError::InvalidEdge {
            value: "x".to_string()
        }
    );
}

#[test]
fn test_result_alias_propagates() {
    fn inner() -> Result<u32> {
        Err(PacerError::invalid_edge(""))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(PacerError::InvalidEdge { .. })));
}

#[test]
fn test_error_is_std_error() {
    fn takes_boxed(err: Box<dyn std::error::Error + Send + Sync>) -> String {
        err.to_string()
    }

    let message = takes_boxed(Box::new(PacerError::no_runtime("outside")));
    assert!(message.contains("outside"));
}
