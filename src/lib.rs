//! try-smarter - composable try/catch chains with type-scoped fault handlers
//!
//! # Overview
//!
//! `try-smarter` replaces nested `match`/`if let` error handling with one
//! flat chain. A fallible computation is captured into a [`Catchable`]; each
//! `catch` stage names the fault type it accepts, and the first stage whose
//! type matches the captured fault runs. The terminal
//! [`to_result`](Catchable::to_result) hands back a plain `Result`, ready
//! for `?`.
//!
//! # Quick Start
//!
//! ```
//! use try_smarter::{attempt, Fault};
//! use try_smarter::faults::{ArgumentFault, NotImplementedFault};
//!
//! fn lookup(key: &str) -> Result<u32, Fault> {
//!     match key {
//!         "" => Err(ArgumentFault::new("empty key").into()),
//!         "legacy" => Err(NotImplementedFault::new("legacy keys").into()),
//!         _ => Ok(key.len() as u32),
//!     }
//! }
//!
//! let n = attempt(|| lookup(""))
//!     .catch(|_: ArgumentFault| Ok(0))
//!     .catch(|_: Fault| Ok(u32::MAX))
//!     .to_result()?;
//! assert_eq!(n, 0);
//! # Ok::<(), Fault>(())
//! ```
//!
//! # Entry points
//!
//! | Function | Produces |
//! |----------|----------|
//! | [`attempt`] | `Catchable<T>` from `FnOnce() -> Result<T, E>` |
//! | [`attempt_void`] | `Catchable<Unit>` from `FnOnce() -> Result<(), E>` |
//! | [`attempt_async`] | `Pending` chain from `FnOnce() -> impl Future<Output = Result<T, E>>` |
//! | [`attempt_void_async`] | `Pending` chain yielding `Catchable<Unit>` |
//!
//! # Stages
//!
//! | Sync | Async | Runs when |
//! |------|-------|-----------|
//! | `catch::<F, _>` | `catch_async::<F, _, _>` | the fault is an `F` |
//! | `catch_any` | `catch_any_async` | any fault |
//! | `catch_void` | `catch_void_async` | the fault is an `F`, void chains |
//! | `try_catch` | `try_catch_async` | the fault is an `F`; handler may raise |
//! | `to_result` | `to_result_async` | terminal |
//!
//! Stages are evaluated strictly in the order they are chained. A broad
//! stage (`Fault`, or a family) placed before a specific one always wins.
//!
//! # Fault types
//!
//! Any `E: std::error::Error + Send + Sync + 'static` can scope a stage and
//! matches exactly that type. [`Fault`] matches everything. Enums deriving
//! [`FaultFamily`] match any of their members, which is how "is-a"
//! relations are declared; [`faults`] ships a small taxonomy built this way.
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `logging` | yes | stage-level `tracing` events under the `try_smarter` target |
//! | `serde` | no | `Serialize` for [`Fault`], `Serialize`/`Deserialize` for [`Unit`] |
//! | `anyhow` | no | conversions between [`Fault`] and `anyhow::Error` |

// Lets the derive output's `::try_smarter::` paths resolve inside this crate.
extern crate self as try_smarter;

// ============================================================
// Modules
// ============================================================

#[macro_use]
mod macros;

mod attempt;
mod catchable;
mod ext;
mod fault;
mod fault_type;
mod pending;
mod unit;

pub mod faults;

// ============================================================
// Re-exports
// ============================================================

pub use attempt::{attempt, attempt_async, attempt_void, attempt_void_async};
pub use catchable::Catchable;
pub use ext::{PendingExt, ResultExt};
pub use fault::{Chain, Fault, MessageFault};
pub use fault_type::FaultType;
pub use pending::Pending;
pub use unit::Unit;

pub use try_smarter_macros::FaultFamily;

/// Result type alias with [`Fault`] as the default error.
pub type Result<T, E = Fault> = core::result::Result<T, E>;
