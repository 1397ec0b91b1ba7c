//! # checkout-terminal
//!
//! Command-line shell around `checkout-core`, used to try the pricing engine
//! by hand. It reads baskets from stdin or a file, prints totals, and renders
//! pricing failures as readable cause chains.
//!
//! All pricing logic lives in `checkout-core`; this crate only does I/O.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

pub use cli::Command;
pub use config::TerminalConfig;
pub use error::{ConfigError, TerminalError, TerminalResult};
pub use session::Session;
