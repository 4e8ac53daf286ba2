//! Ready-made fault types for common failure kinds.
//!
//! Each type is an ordinary `std::error::Error`, so a `catch` stage scoped to
//! it matches that exact type. The `Any*` families group related types: a
//! stage scoped to [`AnyArgumentFault`] handles [`ArgumentFault`],
//! [`ArgumentNullFault`] and [`ArgumentOutOfRangeFault`] alike.
//!
//! ```
//! use try_smarter::{attempt, Fault};
//! use try_smarter::faults::{AnyArgumentFault, ArgumentNullFault};
//!
//! let name = attempt(|| Err::<String, _>(ArgumentNullFault::new("name")))
//!     .catch(|e: AnyArgumentFault| Ok(format!("fallback ({e})")))
//!     .to_result()
//!     .unwrap();
//! assert_eq!(name, "fallback (value cannot be null (parameter 'name'))");
//! ```

use std::error::Error as StdError;

use thiserror::Error;

use crate::FaultFamily;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// An argument was invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ArgumentFault {
    message: String,
    param: Option<String>,
}

impl ArgumentFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            param: None,
        }
    }

    /// Name the offending parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

/// A required argument was missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value cannot be null (parameter '{param}')")]
pub struct ArgumentNullFault {
    param: String,
}

impl ArgumentNullFault {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }
}

/// An argument was outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (parameter '{param}')")]
pub struct ArgumentOutOfRangeFault {
    param: String,
    message: String,
}

impl ArgumentOutOfRangeFault {
    pub fn new(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }
}

/// An operation was not valid in the current state.
///
/// May wrap the fault that caused it; the cause stays reachable through
/// `source()` and [`Fault::chain`](crate::Fault::chain).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OperationFault {
    message: String,
    #[source]
    cause: Option<BoxedCause>,
}

impl OperationFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the fault that caused this one.
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Functionality that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotImplementedFault {
    message: String,
}

impl NotImplementedFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Work was cancelled before it finished.
///
/// Captured like any other fault; see the [`attempt`](crate::attempt) module
/// notes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CancelledFault {
    message: String,
}

impl CancelledFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for CancelledFault {
    fn default() -> Self {
        Self::new("operation was cancelled")
    }
}

/// A request to a remote service failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFault {
    message: String,
    status: Option<u16>,
}

impl RequestFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Any argument fault.
#[derive(Debug, FaultFamily)]
pub enum AnyArgumentFault {
    Argument(ArgumentFault),
    Null(ArgumentNullFault),
    OutOfRange(ArgumentOutOfRangeFault),
}

/// An operation fault or a cancellation.
#[derive(Debug, FaultFamily)]
pub enum AnyOperationFault {
    Operation(OperationFault),
    Cancelled(CancelledFault),
}
