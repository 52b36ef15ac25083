//! Helpers for asserting on assertion failures.

use shelf_core::{AssertResult, AssertionError};
use tracing_subscriber::EnvFilter;

/// Run `thunk` and require that it fails with exactly `message`.
///
/// Returns an [`AssertionError`] describing the mismatch when it passes or
/// fails differently.
pub fn fails_with<F>(thunk: F, message: &str) -> AssertResult<()>
where
    F: FnOnce() -> AssertResult<()>,
{
    match thunk() {
        Ok(()) => Err(AssertionError::new(format!(
            "expected assertion to fail with {:?}, but it passed",
            message
        ))),
        Err(err) if err.message() == message => Ok(()),
        Err(err) => Err(AssertionError::new(format!(
            "expected assertion to fail with {:?}, but got {:?}",
            message,
            err.message()
        ))),
    }
}

/// Like [`fails_with`], but panics on mismatch.
#[track_caller]
pub fn assert_fails_with<F>(thunk: F, message: &str)
where
    F: FnOnce() -> AssertResult<()>,
{
    if let Err(err) = fails_with(thunk, message) {
        panic!("{}", err);
    }
}

/// Install a test-writer subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_failure_passes() {
        let result = fails_with(|| Err(AssertionError::new("boom")), "boom");
        assert!(result.is_ok());
    }

    #[test]
    fn test_passing_thunk_is_reported() {
        let err = fails_with(|| Ok(()), "boom").unwrap_err();
        assert_eq!(
            err.message(),
            "expected assertion to fail with \"boom\", but it passed"
        );
    }

    #[test]
    fn test_different_message_is_reported() {
        let err = fails_with(|| Err(AssertionError::new("bang")), "boom").unwrap_err();
        assert_eq!(
            err.message(),
            "expected assertion to fail with \"boom\", but got \"bang\""
        );
    }

    #[test]
    #[should_panic(expected = "but it passed")]
    fn test_assert_fails_with_panics() {
        assert_fails_with(|| Ok(()), "boom");
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
