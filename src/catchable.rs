//! The two-state result container and its synchronous `catch` stages.

use core::future::{ready, Ready};
use core::panic::Location;

use crate::{Fault, FaultType, Pending, Unit};

/// Outcome of an attempted computation: a success value or a captured fault.
///
/// Produced by [`attempt`](crate::attempt) and by every `catch` stage. A
/// container is never modified in place; stages consume it and either hand
/// it on untouched or build a new one from the handler's return value.
///
/// ```
/// use try_smarter::{attempt, Fault};
/// use std::num::ParseIntError;
///
/// let n = attempt(|| "x1".parse::<i32>())
///     .catch(|_: ParseIntError| Ok(0))
///     .to_result()?;
/// assert_eq!(n, 0);
/// # Ok::<(), Fault>(())
/// ```
#[derive(Debug)]
#[must_use = "a Catchable holds a possible fault; finish the chain with `to_result`"]
pub struct Catchable<T> {
    result: Result<T, Fault>,
}

/// What a stage does with its input container.
pub(crate) enum Stage<T, F> {
    /// Leave the container as is.
    Pass(Catchable<T>),
    /// Run the handler with the matched fault. Carries the fault's capture
    /// location, which `extract` does not keep.
    Handle(F, Option<&'static Location<'static>>),
}

impl<T> Catchable<T> {
    /// A container holding a success value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { result: Ok(value) }
    }

    /// A container holding a fault.
    #[inline]
    pub fn from_fault(fault: impl Into<Fault>) -> Self {
        Self {
            result: Err(fault.into()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        self.result.is_err()
    }

    /// Whether this holds a fault that a `catch::<F>` stage would handle.
    pub fn is_fault_of<F: FaultType>(&self) -> bool {
        matches!(&self.result, Err(fault) if F::matches(fault))
    }

    /// The success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The captured fault, if any.
    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        self.result.as_ref().err()
    }

    /// Read-only view of the underlying result.
    #[inline]
    pub fn result(&self) -> &Result<T, Fault> {
        &self.result
    }

    /// Decide whether a stage scoped to `F` applies.
    pub(crate) fn stage<F: FaultType>(self) -> Stage<T, F> {
        match self.result {
            Ok(value) => {
                trace_stage!(stage = core::any::type_name::<F>(), "success, handler skipped");
                Stage::Pass(Self::from_value(value))
            }
            Err(fault) => {
                let origin = fault.origin();
                match F::extract(fault) {
                    Ok(matched) => {
                        trace_stage!(stage = core::any::type_name::<F>(), "fault matched");
                        Stage::Handle(matched, origin)
                    }
                    Err(fault) => {
                        trace_stage!(
                            stage = core::any::type_name::<F>(),
                            fault = %fault,
                            "fault not matched, passed through"
                        );
                        Stage::Pass(Self { result: Err(fault) })
                    }
                }
            }
        }
    }

    /// Give a held fault the capture location `origin`, unless it has one.
    pub(crate) fn relocated(self, origin: Option<&'static Location<'static>>) -> Self {
        Self {
            result: self.result.map_err(|fault| fault.relocated(origin)),
        }
    }

    /// Handle a fault of type `F`.
    ///
    /// - success: returned unchanged, `handler` never runs;
    /// - fault matching `F`: `handler` runs and its return value becomes the
    ///   new container (`Ok` recovers, `Err` substitutes a fault that later
    ///   stages may still match);
    /// - any other fault: returned unchanged.
    ///
    /// A fault returned by `handler` without a capture location takes the
    /// location of the fault it handled.
    ///
    /// Stages are checked in the order they are chained, so place specific
    /// fault types before broader ones.
    ///
    /// ```
    /// use try_smarter::{attempt, Fault};
    /// use try_smarter::faults::{ArgumentFault, NotImplementedFault};
    ///
    /// let outcome = attempt(|| -> Result<i32, Fault> { Err(NotImplementedFault::new("todo").into()) })
    ///     .catch(|_: ArgumentFault| Ok(1))
    ///     .catch(|_: Fault| Ok(2))
    ///     .to_result();
    /// assert_eq!(outcome.unwrap(), 2);
    /// ```
    pub fn catch<F, H>(self, handler: H) -> Self
    where
        F: FaultType,
        H: FnOnce(F) -> Result<T, Fault>,
    {
        match self.stage::<F>() {
            Stage::Pass(this) => this,
            Stage::Handle(fault, origin) => Self {
                result: handler(fault).map_err(|f| f.relocated(origin)),
            },
        }
    }

    /// Handle any fault. Same as `catch::<Fault, _>`.
    #[inline]
    pub fn catch_any<H>(self, handler: H) -> Self
    where
        H: FnOnce(Fault) -> Result<T, Fault>,
    {
        self.catch::<Fault, H>(handler)
    }

    /// Handle a fault of type `F` with a handler that may raise.
    ///
    /// The handler returns the next container, or `Err` to raise: a raised
    /// fault leaves the chain right here, so the caller's `?` skips every
    /// remaining stage.
    ///
    /// ```
    /// use try_smarter::{attempt, Fault, MessageFault};
    /// use std::num::ParseIntError;
    ///
    /// fn load(s: &str) -> Result<i32, Fault> {
    ///     attempt(|| s.parse::<i32>())
    ///         .try_catch(|e: ParseIntError| Err(Fault::msg(format!("bad input: {e}"))))?
    ///         .catch(|_: MessageFault| Ok(-1))
    ///         .to_result()
    /// }
    ///
    /// let fault = load("x").unwrap_err();
    /// assert!(fault.message().starts_with("bad input"));
    /// ```
    pub fn try_catch<F, H>(self, handler: H) -> Result<Self, Fault>
    where
        F: FaultType,
        H: FnOnce(F) -> Result<Catchable<T>, Fault>,
    {
        match self.stage::<F>() {
            Stage::Pass(this) => Ok(this),
            Stage::Handle(fault, origin) => {
                let next = handler(fault)
                    .map(|c| c.relocated(origin))
                    .map_err(|f| f.relocated(origin));
                #[cfg(feature = "logging")]
                if let Err(raised) = &next {
                    trace_stage!(fault = %raised, "handler raised, leaving chain");
                }
                next
            }
        }
    }

    /// Transform the success value.
    pub fn map<U, M>(self, f: M) -> Catchable<U>
    where
        M: FnOnce(T) -> U,
    {
        Catchable {
            result: self.result.map(f),
        }
    }

    /// Look at a held fault without handling it.
    pub fn inspect_fault<I>(self, f: I) -> Self
    where
        I: FnOnce(&Fault),
    {
        if let Err(fault) = &self.result {
            f(fault);
        }
        self
    }

    /// Lift this container into an async chain.
    #[inline]
    pub fn into_pending(self) -> Pending<Ready<Catchable<T>>> {
        Pending::new(ready(self))
    }

    /// End the chain: the success value, or the held fault unchanged.
    ///
    /// This is the only place a captured fault re-enters normal `?`
    /// propagation.
    pub fn to_result(self) -> Result<T, Fault> {
        #[cfg(feature = "logging")]
        if let Err(fault) = &self.result {
            trace_stage!(fault = %fault, "chain ended with fault");
        }
        self.result
    }
}

impl Catchable<Unit> {
    /// `catch` for void-shaped chains; the handler returns `()` on recovery.
    pub fn catch_void<F, H>(self, handler: H) -> Self
    where
        F: FaultType,
        H: FnOnce(F) -> Result<(), Fault>,
    {
        self.catch(|fault: F| handler(fault).map(Unit::from))
    }
}

impl<T, E: Into<Fault>> From<Result<T, E>> for Catchable<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self {
            result: result.map_err(Into::into),
        }
    }
}

impl<T> From<Catchable<T>> for Result<T, Fault> {
    #[inline]
    fn from(c: Catchable<T>) -> Self {
        c.result
    }
}
