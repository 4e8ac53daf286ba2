//! Proc macros for the try-smarter crate.
//!
//! `#[derive(FaultFamily)]` declares an "is-a" relation between fault types:
//! the annotated enum becomes a fault type that matches whatever its
//! variants match.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod family;

/// Derive `FaultType`, `Display` and `From<Self> for Fault` for an enum whose
/// variants each wrap exactly one fault type.
///
/// ```ignore
/// #[derive(Debug, FaultFamily)]
/// pub enum StorageFault {
///     Io(std::io::Error),
///     Corrupt(CorruptFault),
/// }
/// ```
///
/// A `catch::<StorageFault>` stage then handles both `io::Error` and
/// `CorruptFault`, trying variants in declaration order.
#[proc_macro_derive(FaultFamily)]
pub fn derive_fault_family(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    family::Family::parse(&input)
        .map(|family| codegen::expand(&family))
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
