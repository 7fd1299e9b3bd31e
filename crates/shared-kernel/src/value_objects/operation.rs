use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, FileKitError, Result};

/// Success flag plus structured error, as reported across the public boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub error_code: i32,
    pub error_message: String,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self { success: true, error_code: 0, error_message: String::new() }
    }

    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { success: false, error_code: kind.code(), error_message: message.into() }
    }

    /// Category of the failure, `None` on success.
    pub fn kind(&self) -> Option<ErrorKind> {
        if self.success { None } else { ErrorKind::from_code(self.error_code) }
    }
}

impl Default for OperationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<&FileKitError> for OperationResult {
    fn from(err: &FileKitError) -> Self {
        Self::failed(err.kind(), err.to_string())
    }
}

/// A value paired with the result of the operation that produced it.
///
/// On failure `value` holds the operation's fallback, which may still carry
/// partial progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub value: T,
    pub result: OperationResult,
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self { value, result: OperationResult::ok() }
    }

    pub fn failure(value: T, err: &FileKitError) -> Self {
        Self { value, result: err.into() }
    }

    pub fn from_result_or(result: Result<T>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::failure(fallback(), &err),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.success
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.result.kind()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// The value on success, `None` on failure.
    pub fn ok(self) -> Option<T> {
        self.result.success.then_some(self.value)
    }
}

impl<T: Default> Outcome<T> {
    pub fn from_result(result: Result<T>) -> Self {
        Self::from_result_or(result, T::default)
    }
}
