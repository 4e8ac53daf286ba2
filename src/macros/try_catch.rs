//! The `try_catch!` macro - block syntax over the combinators.
//!
//! Each clause becomes one stage call, in the order written, so the macro
//! has exactly the dispatch rules of a hand-written chain.

/// Block syntax for a try/catch chain.
///
/// The `try` body evaluates to a `Result<T, E>` with `E: Into<Fault>`. Each
/// handler body evaluates to a `Result<T, Fault>`; a `try catch` handler body
/// evaluates to `Result<Catchable<T>, Fault>` and an `Err` there raises,
/// skipping every later clause. The whole macro evaluates to
/// `Result<T, Fault>`.
///
/// | Clause | Stage |
/// |--------|-------|
/// | `catch e: Type => { .. }` | [`Catchable::catch`](crate::Catchable::catch) |
/// | `catch e => { .. }` | [`Catchable::catch_any`](crate::Catchable::catch_any) |
/// | `try catch e: Type => { .. }` | [`Catchable::try_catch`](crate::Catchable::try_catch) |
///
/// ```
/// use try_smarter::{try_catch, Fault};
/// use std::num::ParseIntError;
///
/// fn parse_or_default(input: &str) -> Result<i64, Fault> {
///     try_catch! {
///         try { input.trim().parse::<i64>() }
///         catch _e: ParseIntError => { Ok(0) }
///         catch e => { Err(e) }
///     }
/// }
///
/// assert_eq!(parse_or_default(" 17 ").unwrap(), 17);
/// assert_eq!(parse_or_default("seventeen").unwrap(), 0);
/// ```
///
/// Prefix with `async` to build the same chain over futures; handler bodies
/// may then `.await`, and the macro evaluates to a future of
/// `Result<T, Fault>`:
///
/// ```
/// use try_smarter::try_catch;
/// use try_smarter::faults::RequestFault;
///
/// async fn fetch() -> Result<String, RequestFault> {
///     Err(RequestFault::new("timed out").with_status(504))
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let body = try_catch! {
///     async try { fetch().await }
///     catch e: RequestFault => { Ok(format!("cached ({})", e.status().unwrap_or(0))) }
/// }
/// .await
/// .unwrap();
/// assert_eq!(body, "cached (504)");
/// # });
/// ```
#[macro_export]
macro_rules! try_catch {
    (async try { $($body:tt)* } $($rest:tt)*) => {
        async move {
            $crate::__try_catch_async!(
                @stages $crate::attempt_async(move || async move { $($body)* }) ; $($rest)*
            )
        }
    };

    (try { $($body:tt)* } $($rest:tt)*) => {
        (|| -> ::core::result::Result<_, $crate::Fault> {
            $crate::__try_catch_sync!(@stages $crate::attempt(|| { $($body)* }) ; $($rest)*)
        })()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_catch_sync {
    (@stages $chain:expr ;) => {
        $chain.to_result()
    };

    (@stages $chain:expr ; try catch $e:ident : $ty:ty => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_sync!(
            @stages $chain.try_catch(|$e: $ty| { $($h)* })? ; $($rest)*
        )
    };

    (@stages $chain:expr ; catch $e:ident : $ty:ty => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_sync!(
            @stages $chain.catch(|$e: $ty| { $($h)* }) ; $($rest)*
        )
    };

    (@stages $chain:expr ; catch $e:pat => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_sync!(
            @stages $chain.catch_any(|$e| { $($h)* }) ; $($rest)*
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_catch_async {
    (@stages $chain:expr ;) => {
        $chain.to_result_async().await
    };

    (@stages $chain:expr ; try catch $e:ident : $ty:ty => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_async!(
            @stages $chain
                .try_catch_async(move |$e: $ty| async move { $($h)* })
                .await?
                .into_pending()
            ; $($rest)*
        )
    };

    (@stages $chain:expr ; catch $e:ident : $ty:ty => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_async!(
            @stages $chain.catch_async(move |$e: $ty| async move { $($h)* }) ; $($rest)*
        )
    };

    (@stages $chain:expr ; catch $e:pat => { $($h:tt)* } $($rest:tt)*) => {
        $crate::__try_catch_async!(
            @stages $chain.catch_any_async(move |$e| async move { $($h)* }) ; $($rest)*
        )
    };
}
