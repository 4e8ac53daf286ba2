//! Extension traits for entering a chain from existing values.

use core::future::Future;
use core::panic::Location;

use crate::attempt::capture;
use crate::{attempt_async, Catchable, Fault, Pending};

/// Start a chain from a `Result` that has already been computed.
///
/// ```
/// use try_smarter::ResultExt;
/// use std::num::ParseIntError;
///
/// let port = "http".parse::<u16>()
///     .into_catchable()
///     .catch(|_: ParseIntError| Ok(80))
///     .to_result()
///     .unwrap();
/// assert_eq!(port, 80);
/// ```
pub trait ResultExt<T> {
    /// Capture the `Err` side as a fault.
    fn into_catchable(self) -> Catchable<T>;
}

impl<T, E: Into<Fault>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn into_catchable(self) -> Catchable<T> {
        capture(self, Location::caller())
    }
}

/// Start an async chain from a future that resolves to a `Result`.
pub trait PendingExt<T>: Future + Sized {
    /// Same as `attempt_async(|| self)`.
    fn into_pending(self) -> Pending<impl Future<Output = Catchable<T>>>;
}

impl<T, E, Fut> PendingExt<T> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    #[track_caller]
    fn into_pending(self) -> Pending<impl Future<Output = Catchable<T>>> {
        attempt_async(move || self)
    }
}
