//! Entry points that run a fallible computation and capture its fault.
//!
//! Four shapes: value or void, sync or async. Every shape runs the
//! computation exactly once and never lets its fault escape; the fault is
//! held in the returned container until a `catch` stage or the terminal
//! unwrap deals with it.
//!
//! Cancellation gets no special treatment. A computation that reports
//! cancellation as an error (for example a `tokio::task::JoinError`, or
//! [`CancelledFault`](crate::faults::CancelledFault)) is captured like any
//! other fault, and a chain that wants cancellation to propagate must
//! re-raise it from a handler.

use core::future::Future;
use core::panic::Location;

use crate::{Catchable, Fault, Pending, Unit};

/// Run `f` now and capture its outcome.
///
/// The fault records this call's source location (see [`Fault::origin`])
/// unless it already carries one.
///
/// ```
/// use try_smarter::attempt;
///
/// let caught = attempt(|| "42".parse::<u8>());
/// assert_eq!(caught.to_result().unwrap(), 42);
/// ```
#[track_caller]
pub fn attempt<T, E, F>(f: F) -> Catchable<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    capture(f(), Location::caller())
}

/// [`attempt`] for actions with no meaningful result. Success yields [`Unit`].
///
/// ```
/// use try_smarter::{attempt_void, Unit};
///
/// let mut log = Vec::new();
/// let done = attempt_void(|| -> Result<(), std::io::Error> {
///     log.push("written");
///     Ok(())
/// });
/// assert_eq!(done.to_result().unwrap(), Unit);
/// ```
#[track_caller]
pub fn attempt_void<E, F>(f: F) -> Catchable<Unit>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<Fault>,
{
    capture(f().map(Unit::from), Location::caller())
}

/// Build an async chain around `f`.
///
/// `f` is not called here. It is called, and its future awaited, exactly
/// once when the returned [`Pending`] is awaited.
#[track_caller]
pub fn attempt_async<T, E, F, Fut>(f: F) -> Pending<impl Future<Output = Catchable<T>>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    let origin = Location::caller();
    Pending::new(async move { capture(f().await, origin) })
}

/// [`attempt_async`] for actions with no meaningful result.
#[track_caller]
pub fn attempt_void_async<E, F, Fut>(f: F) -> Pending<impl Future<Output = Catchable<Unit>>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Into<Fault>,
{
    let origin = Location::caller();
    Pending::new(async move { capture(f().await.map(Unit::from), origin) })
}

pub(crate) fn capture<T, E>(result: Result<T, E>, origin: &'static Location<'static>) -> Catchable<T>
where
    E: Into<Fault>,
{
    match result {
        Ok(value) => Catchable::from_value(value),
        Err(e) => {
            let fault = e.into().located(origin);
            trace_stage!(
                fault = %fault,
                file = origin.file(),
                line = origin.line(),
                "fault captured"
            );
            Catchable::from_fault(fault)
        }
    }
}
