//! Example: sync chains over a small config loader
//!
//! Run with: cargo run --example basic

use std::collections::HashMap;
use std::num::ParseIntError;

use thiserror::Error;
use try_smarter::faults::{ArgumentNullFault, NotImplementedFault};
use try_smarter::{attempt, attempt_void, Fault, ResultExt};

#[derive(Error, Debug)]
#[error("config key not found: {0}")]
struct MissingKey(String);

fn lookup<'a>(config: &'a HashMap<&str, &str>, key: &str) -> Result<&'a str, Fault> {
    if key.is_empty() {
        return Err(ArgumentNullFault::new("key").into());
    }
    if key.starts_with("legacy.") {
        return Err(NotImplementedFault::new("legacy keys are not supported").into());
    }
    config
        .get(key)
        .copied()
        .ok_or_else(|| MissingKey(key.into()).into())
}

fn port(config: &HashMap<&str, &str>, key: &str) -> Result<u16, Fault> {
    attempt(|| Ok::<_, Fault>(lookup(config, key)?.parse::<u16>()?))
        .catch(|e: MissingKey| {
            println!("  ({e}; using 8080)");
            Ok(8080)
        })
        .catch(|_: ParseIntError| Ok(0))
        .to_result()
}

fn main() {
    let config = HashMap::from([("port", "9000"), ("admin.port", "nine"), ("name", "demo")]);

    println!("=== Ordered stages ===");
    for key in ["port", "admin.port", "metrics.port", "", "legacy.port"] {
        match port(&config, key) {
            Ok(p) => println!("{key:>14} -> {p}"),
            Err(e) => println!("{key:>14} -> uncaught: {e}"),
        }
    }

    println!("\n=== Catch-all first wins ===");
    let n = attempt(|| lookup(&config, "missing"))
        .catch_any(|e| {
            println!("  generic stage saw: {e}");
            Ok("fallback")
        })
        .catch(|_: MissingKey| Ok("never reached"))
        .to_result()
        .unwrap_or("error");
    println!("  result: {n}");

    println!("\n=== Raising from a handler ===");
    let raised = (|| -> Result<u16, Fault> {
        attempt(|| port(&config, "legacy.port"))
            .try_catch(|e: NotImplementedFault| Err(Fault::msg(format!("cannot load port: {e}"))))?
            .catch_any(|_| Ok(1))
            .to_result()
    })();
    println!("  {:?}", raised.map_err(|e| e.to_string()));

    println!("\n=== Void actions ===");
    let mut log = Vec::new();
    let done = attempt_void(|| {
        log.push("flushed");
        Err(MissingKey("output.path".into()))
    })
    .catch_void(|e: MissingKey| {
        println!("  recovered from: {e}");
        Ok(())
    })
    .to_result();
    println!("  done: {:?}, log: {log:?}", done.map(|u| u.to_string()));

    println!("\n=== From an existing Result ===");
    let parsed = "12x"
        .parse::<i32>()
        .into_catchable()
        .inspect_fault(|f| println!("  captured at {}", f.origin().map_or("?".into(), |l| l.to_string())))
        .catch(|_: ParseIntError| Ok(-1))
        .to_result();
    println!("  {parsed:?}");
}
