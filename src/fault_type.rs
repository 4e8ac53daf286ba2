//! Fault-type tags used by `catch` stages to decide whether they apply.

use crate::Fault;
use std::error::Error as StdError;

/// A type that a `catch` stage can be scoped to.
///
/// Matching is an explicit "is-a" test on the fault taxonomy:
///
/// - every `E: Error + Send + Sync + 'static` matches faults whose wrapped
///   error is exactly `E`;
/// - [`Fault`] matches every fault (the catch-all);
/// - an enum deriving [`FaultFamily`](crate::FaultFamily) matches any fault one
///   of its variants matches, which is how subtype relations are declared.
///
/// Implement this by hand for custom matching rules. `extract` must hand the
/// fault back unchanged when it does not match, and must agree with `matches`.
pub trait FaultType: Sized {
    /// Whether `fault` belongs to this type.
    fn matches(fault: &Fault) -> bool;

    /// Take the fault as `Self`, or return it untouched on mismatch.
    fn extract(fault: Fault) -> Result<Self, Fault>;

    /// Turn a matched value back into a fault, e.g. to reinstate it from a
    /// handler with `Err(e.into_fault())`. The stage gives the returned
    /// fault its capture location back.
    fn into_fault(self) -> Fault;
}

impl<E> FaultType for E
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn matches(fault: &Fault) -> bool {
        fault.is::<E>()
    }

    #[inline]
    fn extract(fault: Fault) -> Result<Self, Fault> {
        fault.downcast::<E>()
    }

    #[inline]
    fn into_fault(self) -> Fault {
        Fault::new(self)
    }
}

impl FaultType for Fault {
    #[inline]
    fn matches(_: &Fault) -> bool {
        true
    }

    #[inline]
    fn extract(fault: Fault) -> Result<Self, Fault> {
        Ok(fault)
    }

    #[inline]
    fn into_fault(self) -> Fault {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageFault;
    use std::io;

    #[test]
    fn test_concrete_type_matches_exactly() {
        let fault = Fault::msg("x");
        assert!(MessageFault::matches(&fault));
        assert!(!io::Error::matches(&fault));
    }

    #[test]
    fn test_extract_mismatch_returns_fault() {
        let fault = Fault::msg("still here");
        let back = io::Error::extract(fault).unwrap_err();
        assert_eq!(back.message(), "still here");
    }

    #[test]
    fn test_fault_is_catch_all() {
        let fault = Fault::new(io::Error::new(io::ErrorKind::Other, "io"));
        assert!(Fault::matches(&fault));
        let same = Fault::extract(fault).unwrap();
        assert!(same.is::<io::Error>());
    }

    #[test]
    fn test_into_fault_round_trips_concrete_type() {
        let matched = MessageFault::extract(Fault::msg("again")).unwrap();
        let fault = matched.into_fault();
        assert!(fault.is::<MessageFault>());
        assert_eq!(fault.message(), "again");
    }
}
