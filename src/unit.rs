//! The placeholder value carried by void-shaped chains.

use core::fmt;

/// Stateless "no meaningful result" value.
///
/// Void actions passed to [`attempt_void`](crate::attempt_void) produce a
/// `Catchable<Unit>`, so they flow through the same `catch` stages as
/// value-returning computations. Every `Unit` is equal to every other.
///
/// ```
/// use try_smarter::Unit;
///
/// assert_eq!(Unit::value(), Unit::VALUE);
/// assert_eq!(core::mem::size_of::<Unit>(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The unit value.
    pub const VALUE: Unit = Unit;

    /// Returns the unit value.
    #[inline]
    pub const fn value() -> Unit {
        Unit
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_values_equal() {
        assert_eq!(Unit::value(), Unit::value());
        assert_eq!(Unit::VALUE, Unit::default());
        assert_eq!(Unit::from(()), Unit);
    }

    #[test]
    fn test_zero_sized() {
        assert_eq!(core::mem::size_of::<Unit>(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit.to_string(), "()");
    }
}
