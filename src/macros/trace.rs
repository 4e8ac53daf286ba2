//! Stage-level trace events.
//!
//! With the `logging` feature every stage reports to `tracing` under the
//! `try_smarter` target. Without it the macro expands to nothing.

#[cfg(feature = "logging")]
macro_rules! trace_stage {
    ($($arg:tt)+) => {
        ::tracing::trace!(target: "try_smarter", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_stage {
    ($($arg:tt)+) => {
        ()
    };
}
