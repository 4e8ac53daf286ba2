//! Example: declaring "is-a" relations between fault types
//!
//! A family is an enum whose variants each wrap one member fault type. A
//! stage scoped to the family handles every member, and the family can
//! itself be a member of a wider family.
//!
//! Run with: cargo run --example fault_family

use thiserror::Error;
use try_smarter::faults::{AnyArgumentFault, ArgumentFault, ArgumentOutOfRangeFault};
use try_smarter::{attempt, Fault, FaultFamily};

#[derive(Error, Debug)]
#[error("connection refused by {host}")]
struct ConnectionRefused {
    host: String,
}

#[derive(Error, Debug)]
#[error("query failed: {0}")]
struct QueryFailed(String);

#[derive(Error, Debug)]
#[error("row {0} is locked")]
struct RowLocked(u64);

/// Anything the database layer can fail with.
#[derive(Debug, FaultFamily)]
enum DbFault {
    Connection(ConnectionRefused),
    Query(QueryFailed),
    Locked(RowLocked),
}

/// Faults a request handler knows how to answer.
#[derive(Debug, FaultFamily)]
enum ClientFault {
    Input(AnyArgumentFault),
    Db(DbFault),
}

fn handle(request: u32) -> Result<String, Fault> {
    match request {
        0 => Err(ArgumentFault::new("request id must be positive").with_param("request").into()),
        1 => Err(ArgumentOutOfRangeFault::new("request", "exceeds 1000").into()),
        2 => Err(ConnectionRefused { host: "db-1".into() }.into()),
        3 => Err(RowLocked(17).into()),
        4 => Err(Fault::msg("disk on fire")),
        n => Ok(format!("response #{n}")),
    }
}

fn status(request: u32) -> Result<String, Fault> {
    attempt(|| handle(request))
        .catch(|e: DbFault| match e {
            DbFault::Locked(row) => Ok(format!("503 retry later ({row})")),
            other => Ok(format!("502 {other}")),
        })
        .catch(|e: ClientFault| Ok(format!("400 {e}")))
        .to_result()
}

fn main() {
    println!("=== Family stages ===");
    for request in 0..6 {
        match status(request) {
            Ok(s) => println!("request {request}: {s}"),
            Err(e) => println!("request {request}: unhandled {e:?}"),
        }
    }

    println!("\n=== Unwrapping a family back into a fault ===");
    let fault: Fault = DbFault::Query(QueryFailed("syntax error".into())).into();
    println!("is QueryFailed: {}", fault.is::<QueryFailed>());
    println!("message: {}", fault.message());
}
