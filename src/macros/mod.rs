//! Declarative macros for try-smarter.

// Crate-internal logging hook, defined first so later modules can use it.
#[macro_use]
mod trace;

// The try_catch! macro is defined here with #[macro_export], which exports it at crate root
#[macro_use]
mod try_catch;
