use std::cell::Cell;
use std::num::ParseIntError;

use try_smarter::faults::{ArgumentFault, OperationFault};
use try_smarter::{try_catch, Fault};

fn parse(input: &str) -> Result<i32, Fault> {
    try_catch! {
        try {
            if input.is_empty() {
                return Err(Fault::new(ArgumentFault::new("empty input")));
            }
            input.parse::<i32>().map_err(Fault::from)
        }
        catch e: ArgumentFault => { Ok(-(e.message().len() as i32)) }
        catch _e: ParseIntError => { Ok(0) }
    }
}

#[test]
fn clauses_dispatch_in_order() {
    assert_eq!(parse("12").unwrap(), 12);
    assert_eq!(parse("twelve").unwrap(), 0);
    assert_eq!(parse("").unwrap(), -11);
}

#[test]
fn unmatched_fault_leaves_the_block() {
    let fault = try_catch! {
        try { Err::<i32, _>(OperationFault::new("boom")) }
        catch _e: ArgumentFault => { Ok(1) }
    }
    .unwrap_err();
    assert!(fault.is::<OperationFault>());
}

#[test]
fn catch_all_clause_binds_fault() {
    let n = try_catch! {
        try { Err::<usize, _>(OperationFault::new("seven")) }
        catch _e: ArgumentFault => { Ok(1) }
        catch e => { Ok(e.message().len()) }
    }
    .unwrap();
    assert_eq!(n, 5);
}

#[test]
fn raising_clause_skips_rest() {
    let later = Cell::new(0);
    let fault = try_catch! {
        try { Err::<i32, _>(ArgumentFault::new("arg")) }
        try catch e: ArgumentFault => {
            Err(OperationFault::new(format!("wrapped {e}")).into())
        }
        catch _ => {
            later.set(later.get() + 1);
            Ok(0)
        }
    }
    .unwrap_err();
    assert_eq!(fault.message(), "wrapped arg");
    assert_eq!(later.get(), 0);
}

#[test]
fn raising_clause_may_recover() {
    let n = try_catch! {
        try { Err::<i32, _>(ArgumentFault::new("arg")) }
        try catch _e: ArgumentFault => { Ok(Ok::<_, Fault>(3).into()) }
        catch _ => { Ok(0) }
    }
    .unwrap();
    assert_eq!(n, 3);
}

#[tokio::test]
async fn async_clauses_await_handlers() {
    let n = try_catch! {
        async try {
            tokio::task::yield_now().await;
            Err::<i32, _>(ArgumentFault::new("later"))
        }
        catch _e: OperationFault => { Ok(1) }
        catch e: ArgumentFault => {
            tokio::task::yield_now().await;
            Ok(e.message().len() as i32)
        }
    }
    .await
    .unwrap();
    assert_eq!(n, 5);
}

#[tokio::test]
async fn async_raising_clause_skips_rest() {
    let fault = try_catch! {
        async try { Err::<i32, _>(ArgumentFault::new("arg")) }
        try catch _e: ArgumentFault => { Err(Fault::msg("raised")) }
        catch _ => { Ok(0) }
    }
    .await
    .unwrap_err();
    assert_eq!(fault.message(), "raised");
}
