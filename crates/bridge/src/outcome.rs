use std::fmt;

/// Size in bytes of every key or secret a bridge operation returns
pub const KEY_SIZE: usize = 32;

/// Result of a bridge operation
///
/// Every failure cause (bad input, invalid point, engine fault) collapses into
/// `Failure`. Compare against [`OPERATION_FAILED`] or match on the variants;
/// nothing is ever raised.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome {
    Success([u8; KEY_SIZE]),
    Failure,
}

/// The value every failed operation returns
pub const OPERATION_FAILED: Outcome = Outcome::Failure;

/// Error form of [`Outcome::Failure`], for callers that prefer `?`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation failed")]
pub struct OperationFailed;

// key bytes stay out of logs and panic messages
impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(bytes) => write!(f, "Success(<{} bytes>)", bytes.len()),
            Outcome::Failure => f.write_str("Failure"),
        }
    }
}

impl Outcome {
    /// Whether the operation produced a key
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether this is [`OPERATION_FAILED`]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure)
    }

    /// Borrow the result bytes, if any
    pub fn bytes(&self) -> Option<&[u8; KEY_SIZE]> {
        match self {
            Outcome::Success(bytes) => Some(bytes),
            Outcome::Failure => None,
        }
    }

    /// Convert outcome to raw bytes, `None` on failure
    pub fn into_bytes(self) -> Option<[u8; KEY_SIZE]> {
        match self {
            Outcome::Success(bytes) => Some(bytes),
            Outcome::Failure => None,
        }
    }

    /// Convert outcome to a `Result` so failures can be propagated with `?`
    pub fn into_result(self) -> Result<[u8; KEY_SIZE], OperationFailed> {
        self.into_bytes().ok_or(OperationFailed)
    }
}

impl From<Outcome> for Option<[u8; KEY_SIZE]> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_bytes()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_failure_is_the_sentinel() {
        assert_eq!(Outcome::Failure, OPERATION_FAILED);
        assert_ne!(Outcome::Success([0u8; KEY_SIZE]), OPERATION_FAILED);
        assert!(OPERATION_FAILED.is_failure());
        assert_eq!(OPERATION_FAILED.into_result(), Err(OperationFailed));
    }

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::Success([5u8; KEY_SIZE]);
        assert!(outcome.is_success());
        assert_eq!(outcome.bytes(), Some(&[5u8; KEY_SIZE]));
        assert_eq!(outcome.into_result(), Ok([5u8; KEY_SIZE]));
        assert_eq!(Option::<[u8; KEY_SIZE]>::from(outcome), Some([5u8; KEY_SIZE]));
    }

    #[test]
    fn test_debug_hides_bytes() {
        let outcome = Outcome::Success([0xeeu8; KEY_SIZE]);
        assert_eq!(format!("{:?}", outcome), "Success(<32 bytes>)");
    }
}
