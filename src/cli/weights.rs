//! Show/update cause weights.
//!
//! The update path mirrors the administrative form it replaces: each field
//! is parsed independently, non-numeric input is coerced to 0 with a
//! warning, untouched fields keep their current value, and the result is
//! persisted before it is echoed back.

use anyhow::Result;
use std::path::Path;

use crate::cli::args::WeightsArgs;
use crate::config::WeightsHandle;
use crate::queue::CauseWeights;
use crate::{debug, log};

pub fn run_weights(args: &WeightsArgs, config_path: &Path) -> Result<()> {
    let handle = WeightsHandle::load(config_path)?;

    if args.is_show() {
        print_weights(&handle.snapshot());
        return Ok(());
    }

    let mut weights = handle.snapshot();
    debug!("weights"; "current: {:?}", weights);

    if let Some(raw) = &args.user {
        weights.user = coerce_weight(raw, "user");
    }
    if let Some(raw) = &args.scm {
        weights.scm = coerce_weight(raw, "scm");
    }
    if let Some(raw) = &args.timer {
        weights.timer = coerce_weight(raw, "timer");
    }

    handle.store(weights)?;
    log!("weights"; "saved to {}", config_path.display());
    print_weights(&weights);

    Ok(())
}

/// Parse one weight field, coercing invalid input to 0.
fn coerce_weight(raw: &str, field: &str) -> i32 {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log!("weights"; "invalid {field} value `{raw}`, using 0");
            0
        }
    }
}

fn print_weights(weights: &CauseWeights) {
    println!("user  = {}", weights.user);
    println!("scm   = {}", weights.scm);
    println!("timer = {}", weights.timer);
}
