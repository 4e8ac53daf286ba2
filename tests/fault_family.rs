//! Families declared outside the crate, including families of families.

use thiserror::Error;
use try_smarter::faults::{AnyArgumentFault, ArgumentFault, ArgumentNullFault, OperationFault};
use try_smarter::{attempt, Fault, FaultFamily, FaultType};

#[derive(Debug, Error)]
#[error("disk full on {0}")]
struct DiskFull(String);

#[derive(Debug, Error)]
#[error("permission denied")]
struct Denied;

#[derive(Debug, FaultFamily)]
enum StorageFault {
    Full(DiskFull),
    Denied(Denied),
}

#[derive(Debug, FaultFamily)]
enum InputOrStorage {
    Input(AnyArgumentFault),
    Storage(StorageFault),
}

fn save(fault: Fault) -> Result<&'static str, Fault> {
    attempt(move || Err::<&'static str, _>(fault))
        .catch(|e: StorageFault| match e {
            StorageFault::Full(_) => Ok("retry elsewhere"),
            StorageFault::Denied(_) => Ok("ask for access"),
        })
        .catch(|_: OperationFault| Ok("operation"))
        .to_result()
}

#[test]
fn family_stage_picks_member_variant() {
    assert_eq!(save(DiskFull("/var".into()).into()).unwrap(), "retry elsewhere");
    assert_eq!(save(Denied.into()).unwrap(), "ask for access");
    assert_eq!(save(OperationFault::new("x").into()).unwrap(), "operation");
}

#[test]
fn non_member_passes_family_stage() {
    let fault = save(ArgumentFault::new("bad").into()).unwrap_err();
    assert!(fault.is::<ArgumentFault>());
}

#[test]
fn nested_family_matches_leaf_types() {
    let null: Fault = ArgumentNullFault::new("id").into();
    assert!(InputOrStorage::matches(&null));
    assert!(InputOrStorage::matches(&Denied.into()));
    assert!(!InputOrStorage::matches(&OperationFault::new("x").into()));

    match InputOrStorage::extract(null).unwrap() {
        InputOrStorage::Input(AnyArgumentFault::Null(e)) => assert_eq!(e.param(), "id"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn family_displays_member_and_unwraps_to_it() {
    let family = StorageFault::Full(DiskFull("/tmp".into()));
    assert_eq!(family.to_string(), "disk full on /tmp");

    let fault: Fault = family.into();
    assert!(fault.is::<DiskFull>());
    assert_eq!(fault.message(), "disk full on /tmp");
}

#[test]
fn handler_can_return_family_as_fault() {
    let fault = attempt(|| Err::<i32, _>(Denied))
        .catch(|e: StorageFault| Err(e.into_fault()))
        .to_result()
        .unwrap_err();
    assert!(fault.is::<Denied>());
}
