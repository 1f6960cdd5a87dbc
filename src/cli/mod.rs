//! Command-line administrative surface.
//!
//! # Module Structure
//!
//! - [`args`]: clap definitions
//! - [`init`]: default config scaffolding
//! - [`weights`]: show/update cause weights
//! - [`order`]: dispatch-order preview for queue snapshots

pub mod args;
pub mod init;
pub mod order;
pub mod weights;

pub use args::{Cli, Commands, OrderArgs, WeightsArgs};
