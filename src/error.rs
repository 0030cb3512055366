use thiserror::Error;

/// Sentinel returned after a failure record has been emitted. Carries no
/// payload; the emitted record holds all diagnostics. The runner catches
/// it to mark the current test case failed and move on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("assertion failed")]
pub struct AssertionFailed;

pub type AssertResult = Result<(), AssertionFailed>;
