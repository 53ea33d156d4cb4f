//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Simulation is deterministic, so none of these are transient: a run that
/// fails will fail the same way every time.
#[derive(Debug, Error)]
pub enum Error {
    /// The simulator was configured with values it cannot run with
    /// (e.g., zero frames).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A policy name did not match any known replacement policy.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// A reference trace contained a token that is not a page number.
    #[error("Invalid reference trace: {0}")]
    InvalidTrace(String),

    /// Internal bookkeeping went out of sync with the frame table.
    ///
    /// This indicates a bug in a policy, never bad input.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration("frame count must be at least 1".into());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: frame count must be at least 1"
        );

        let err = Error::UnknownPolicy("clock".into());
        assert_eq!(format!("{}", err), "Unknown replacement policy: clock");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
