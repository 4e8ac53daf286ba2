//! The universal fault type carried by every chain.

use core::fmt;
use core::panic::Location;
use std::error::Error as StdError;
use std::sync::OnceLock;

/// Type-erased fault captured by [`attempt`](crate::attempt) or substituted
/// by a handler.
///
/// `Fault` owns the original error object and never modifies it: message,
/// concrete type and `source()` chain all survive capture, pass-through and
/// the terminal unwrap.
///
/// `Fault` intentionally does not implement [`std::error::Error`]. That keeps
/// the blanket `From<E: Error>` conversion (which powers `?`) and the blanket
/// [`FaultType`](crate::FaultType) impl from overlapping with the impls for
/// `Fault` itself.
///
/// ```
/// use try_smarter::Fault;
/// use std::io;
///
/// let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
/// assert!(fault.is::<io::Error>());
/// assert_eq!(fault.message(), "missing");
/// ```
pub struct Fault {
    inner: Box<dyn StdError + Send + Sync + 'static>,
    /// Computed on first `message()` call.
    message: OnceLock<String>,
    origin: Option<&'static Location<'static>>,
}

/// A fault that carries only a message. Created by [`Fault::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageFault(pub(crate) String);

impl MessageFault {
    /// The message text.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Fault {
    /// Wrap any error.
    #[inline]
    pub fn new<E>(e: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(e))
    }

    /// Wrap an already boxed error.
    #[inline]
    pub fn from_boxed(e: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: e,
            message: OnceLock::new(),
            origin: None,
        }
    }

    /// Create a message-only fault. Its concrete type is [`MessageFault`].
    #[inline]
    pub fn msg(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: OnceLock::from(message.clone()),
            inner: Box::new(MessageFault(message)),
            origin: None,
        }
    }

    /// Convert an `anyhow::Error`, keeping its cause chain.
    #[cfg(feature = "anyhow")]
    pub fn from_anyhow(e: anyhow::Error) -> Self {
        Self::from_boxed(e.into())
    }

    /// Record where the fault was captured, unless a location is already set.
    #[inline]
    pub(crate) fn located(mut self, loc: &'static Location<'static>) -> Self {
        if self.origin.is_none() {
            self.origin = Some(loc);
        }
        self
    }

    /// [`located`](Self::located) for a location that may be absent.
    #[inline]
    pub(crate) fn relocated(self, origin: Option<&'static Location<'static>>) -> Self {
        match origin {
            Some(loc) => self.located(loc),
            None => self,
        }
    }

    /// Source location of the `attempt` call that captured this fault.
    ///
    /// `None` for faults built directly and never passed through `attempt`.
    #[inline]
    pub fn origin(&self) -> Option<&'static Location<'static>> {
        self.origin
    }

    /// The error's `Display` output, computed once.
    pub fn message(&self) -> &str {
        self.message.get_or_init(|| self.inner.to_string())
    }

    /// Whether the wrapped error is exactly of type `T`.
    #[inline]
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Take the wrapped error out as `T`, or get the fault back untouched.
    pub fn downcast<T: StdError + 'static>(self) -> Result<T, Self> {
        let Self {
            inner,
            message,
            origin,
        } = self;
        match inner.downcast::<T>() {
            Ok(e) => Ok(*e),
            Err(inner) => Err(Self {
                inner,
                message,
                origin,
            }),
        }
    }

    /// The wrapped error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// The wrapped error followed by each of its `source()` causes.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self.inner.as_ref()),
        }
    }

    /// First error of type `T` in [`chain`](Self::chain).
    pub fn find_cause<T: StdError + 'static>(&self) -> Option<&T> {
        self.chain().find_map(|e| e.downcast_ref::<T>())
    }

    /// The innermost cause. The wrapped error itself if it has no source.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self.inner.as_ref();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// Get the inner boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

/// Iterator over a fault's cause chain. See [`Fault::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Display for Fault {
    /// `{}` prints the message; `{:#}` appends every cause.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if f.alternate() {
            for cause in self.chain().skip(1) {
                write!(f, ": {}", cause)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Fault");
        s.field("inner", &self.inner);
        if let Some(loc) = self.origin {
            s.field("origin", loc);
        }
        s.finish()
    }
}

// Enables `?` on any error type inside attempted computations and handlers.
// Does not conflict with `From<T> for T` because `Fault` is not an `Error`.
impl<E: StdError + Send + Sync + 'static> From<E> for Fault {
    #[inline]
    fn from(e: E) -> Self {
        Fault::new(e)
    }
}

impl From<Fault> for Box<dyn StdError + Send + Sync + 'static> {
    #[inline]
    fn from(f: Fault) -> Self {
        f.inner
    }
}

// ============================================================
// anyhow interop
// ============================================================

/// Carries a boxed error into `anyhow` without re-wrapping its causes.
#[cfg(feature = "anyhow")]
struct Erased(Box<dyn StdError + Send + Sync + 'static>);

#[cfg(feature = "anyhow")]
impl fmt::Debug for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(feature = "anyhow")]
impl fmt::Display for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "anyhow")]
impl StdError for Erased {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

#[cfg(feature = "anyhow")]
impl From<Fault> for anyhow::Error {
    fn from(f: Fault) -> Self {
        anyhow::Error::new(Erased(f.inner))
    }
}

// ============================================================
// Serde support
// ============================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Fault;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct SerializedFault<'a> {
        message: &'a str,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        causes: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        origin: Option<String>,
    }

    impl Serialize for Fault {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializedFault {
                message: self.message(),
                causes: self.chain().skip(1).map(|c| c.to_string()).collect(),
                origin: self
                    .origin
                    .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column())),
            }
            .serialize(serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] io::Error);

    fn nested() -> Fault {
        Fault::new(Outer(io::Error::new(io::ErrorKind::Other, "disk gone")))
    }

    #[test]
    fn test_msg_is_message_fault() {
        let fault = Fault::msg("boom");
        assert!(fault.is::<MessageFault>());
        assert_eq!(fault.message(), "boom");
        assert_eq!(fault.downcast_ref::<MessageFault>().unwrap().message(), "boom");
    }

    #[test]
    fn test_downcast_miss_returns_same_fault() {
        let fault = Fault::msg("keep me");
        let fault = fault.downcast::<io::Error>().unwrap_err();
        assert_eq!(fault.message(), "keep me");
        assert!(fault.is::<MessageFault>());
    }

    #[test]
    fn test_chain_walks_sources() {
        let fault = nested();
        let messages: Vec<String> = fault.chain().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["outer failure", "disk gone"]);
        assert_eq!(fault.root_cause().to_string(), "disk gone");
        assert!(fault.find_cause::<io::Error>().is_some());
        assert!(fault.find_cause::<MessageFault>().is_none());
    }

    #[test]
    fn test_display_alternate_includes_causes() {
        let fault = nested();
        assert_eq!(fault.to_string(), "outer failure");
        assert_eq!(format!("{:#}", fault), "outer failure: disk gone");
    }

    #[test]
    fn test_question_mark_conversion() {
        fn parse(s: &str) -> Result<i32, Fault> {
            Ok(s.parse::<i32>()?)
        }
        let fault = parse("x").unwrap_err();
        assert!(fault.is::<std::num::ParseIntError>());
        assert!(fault.origin().is_none());
    }

    #[test]
    fn test_located_keeps_first_origin() {
        let first = Location::caller();
        let fault = Fault::msg("x").located(first);
        let fault = fault.located(Location::caller());
        assert_eq!(fault.origin().unwrap().line(), first.line());
    }

    #[test]
    fn test_into_boxed_error() {
        let boxed: Box<dyn StdError + Send + Sync> = Fault::msg("boxed").into();
        assert_eq!(boxed.to_string(), "boxed");
    }
}
