//! Demo driver for the soft-delete sequence.
//!
//! Starts from `[1, 2]` under addition, appends multiples of ten and deletes
//! the front element after every third append, logging a snapshot at each
//! step. Set `RUST_LOG=segseq=debug` to also see rebuild-resizes.

use std::env;
use std::process::ExitCode;

use segseq::{GrowthPolicy, SoftDeleteSequence, Sum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Optional JSON growth policy, e.g. `{"load_factor": 1.5}`.
const POLICY_ENV: &str = "SEGSEQ_GROWTH_POLICY";

fn load_policy() -> Result<GrowthPolicy, Box<dyn std::error::Error>> {
    let Ok(raw) = env::var(POLICY_ENV) else {
        return Ok(GrowthPolicy::default());
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let policy = load_policy()?;
    info!(load_factor = policy.load_factor(), "starting soft-delete sequence demo");

    let mut seq = SoftDeleteSequence::with_policy(vec![1i64, 2], Sum::new(), policy)?;
    for i in 1..10 {
        info!("\n{}", seq.snapshot());
        seq.push(i * 10);
        if i % 3 == 0 {
            info!("\n{}", seq.snapshot());
            seq.delete(0)?;
        }
    }
    info!("\n{}", seq.snapshot());

    let total = seq.query_range(0, seq.len() - 1)?;
    info!(
        len = seq.len(),
        physical_len = seq.physical_len(),
        physical_capacity = seq.physical_capacity(),
        deleted = seq.deleted_count(),
        total,
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
