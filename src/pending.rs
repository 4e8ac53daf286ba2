//! Asynchronous chains: `catch_async` stages over a not-yet-resolved container.

use core::fmt;
use core::future::{Future, IntoFuture};

use crate::catchable::Stage;
use crate::{Catchable, Fault, FaultType, Unit};

/// A chain whose container is still being computed.
///
/// Built by [`attempt_async`](crate::attempt_async). Nothing runs until the
/// chain is awaited, either directly (`.await` yields the final
/// [`Catchable`]) or through [`to_result_async`](Self::to_result_async).
/// Each stage awaits the previous container completely before looking at
/// it, and awaits its own handler before the next stage starts. Stages never
/// overlap and no task is spawned.
///
/// ```
/// use try_smarter::{attempt_async, Fault};
/// use try_smarter::faults::ArgumentFault;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let n = attempt_async(|| async { Err::<i32, _>(ArgumentFault::new("negative")) })
///     .catch_async(|_: ArgumentFault| async { Ok(0) })
///     .to_result_async()
///     .await?;
/// assert_eq!(n, 0);
/// # Ok::<(), Fault>(())
/// # }).unwrap();
/// ```
#[must_use = "a Pending chain does nothing unless awaited"]
pub struct Pending<Fut> {
    fut: Fut,
}

impl<Fut> Pending<Fut> {
    #[inline]
    pub(crate) fn new(fut: Fut) -> Self {
        Self { fut }
    }
}

impl<T, Fut> Pending<Fut>
where
    Fut: Future<Output = Catchable<T>>,
{
    /// Async form of [`Catchable::catch`].
    ///
    /// Awaits the incoming container, then either passes it on or awaits
    /// `handler` and uses its output as the new container.
    pub fn catch_async<F, H, HFut>(self, handler: H) -> Pending<impl Future<Output = Catchable<T>>>
    where
        F: FaultType,
        H: FnOnce(F) -> HFut,
        HFut: Future<Output = Result<T, Fault>>,
    {
        let fut = self.fut;
        Pending::new(async move {
            match fut.await.stage::<F>() {
                Stage::Pass(caught) => caught,
                Stage::Handle(fault, origin) => Catchable::from(handler(fault).await).relocated(origin),
            }
        })
    }

    /// Handle any fault. Same as `catch_async::<Fault, _, _>`.
    #[inline]
    pub fn catch_any_async<H, HFut>(self, handler: H) -> Pending<impl Future<Output = Catchable<T>>>
    where
        H: FnOnce(Fault) -> HFut,
        HFut: Future<Output = Result<T, Fault>>,
    {
        self.catch_async::<Fault, H, HFut>(handler)
    }

    /// Async form of [`Catchable::try_catch`].
    ///
    /// Resolves to `Err` when the handler raises; continue the chain after
    /// `?` with [`Catchable::into_pending`].
    pub async fn try_catch_async<F, H, HFut>(self, handler: H) -> Result<Catchable<T>, Fault>
    where
        F: FaultType,
        H: FnOnce(F) -> HFut,
        HFut: Future<Output = Result<Catchable<T>, Fault>>,
    {
        match self.fut.await.stage::<F>() {
            Stage::Pass(this) => Ok(this),
            Stage::Handle(fault, origin) => handler(fault)
                .await
                .map(|c| c.relocated(origin))
                .map_err(|f| f.relocated(origin)),
        }
    }

    /// End the chain: await it, then unwrap like [`Catchable::to_result`].
    pub async fn to_result_async(self) -> Result<T, Fault> {
        self.fut.await.to_result()
    }
}

impl<Fut> Pending<Fut>
where
    Fut: Future<Output = Catchable<Unit>>,
{
    /// `catch_async` for void-shaped chains; the handler resolves to `()` on
    /// recovery.
    pub fn catch_void_async<F, H, HFut>(self, handler: H) -> Pending<impl Future<Output = Catchable<Unit>>>
    where
        F: FaultType,
        H: FnOnce(F) -> HFut,
        HFut: Future<Output = Result<(), Fault>>,
    {
        self.catch_async(move |fault: F| async move { handler(fault).await.map(Unit::from) })
    }
}

impl<Fut: Future> IntoFuture for Pending<Fut> {
    type Output = Fut::Output;
    type IntoFuture = Fut;

    #[inline]
    fn into_future(self) -> Fut {
        self.fut
    }
}

impl<Fut> fmt::Debug for Pending<Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}
