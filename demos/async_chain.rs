//! Example: async chains around a flaky remote call
//!
//! Stage-level logging is printed through `tracing-subscriber`:
//!
//!     RUST_LOG=try_smarter=trace cargo run --example async_chain

use std::time::Duration;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use try_smarter::faults::{CancelledFault, RequestFault};
use try_smarter::{attempt_async, try_catch, Fault, PendingExt};

async fn fetch(path: &str) -> Result<String, RequestFault> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match path {
        "/ok" => Ok("fresh body".into()),
        "/slow" => {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok("late body".into())
        }
        _ => Err(RequestFault::new(format!("{path} not found")).with_status(404)),
    }
}

async fn fetch_with_timeout(path: &str) -> Result<String, Fault> {
    match tokio::time::timeout(Duration::from_millis(50), fetch(path)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(CancelledFault::new(format!("{path} timed out")).into()),
    }
}

async fn load(path: &str) -> Result<String, Fault> {
    attempt_async(|| fetch_with_timeout(path))
        .catch_async(|e: RequestFault| async move {
            Ok(format!("cached copy (server said {})", e.status().unwrap_or(0)))
        })
        .catch_async(|e: CancelledFault| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(format!("placeholder ({e})"))
        })
        .to_result_async()
        .await
}

async fn run() {
    println!("=== catch_async ===");
    for path in ["/ok", "/missing", "/slow"] {
        println!("{path:>10} -> {:?}", load(path).await.map_err(|e| e.to_string()));
    }

    println!("\n=== into_pending on a future ===");
    let body = fetch("/gone")
        .into_pending()
        .catch_any_async(|e| async move { Ok(format!("fallback after: {e}")) })
        .to_result_async()
        .await;
    println!("  {body:?}");

    println!("\n=== try_catch! async ===");
    let body = try_catch! {
        async try { fetch("/missing").await }
        try catch e: RequestFault => {
            if e.status() == Some(404) {
                Err(Fault::msg("giving up on 404"))
            } else {
                Ok(Ok::<_, Fault>(String::new()).into())
            }
        }
        catch _ => { Ok("unreachable for 404".into()) }
    }
    .await;
    println!("  {:?}", body.map_err(|e| e.to_string()));
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build runtime")
        .block_on(run());
}
