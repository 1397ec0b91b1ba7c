//! # Terminal Checkout
//!
//! With no arguments, enters interactive mode: paste a basket as JSON and the
//! total is printed. With `-i <file>` / `--input <file>`, prices the basket
//! stored in that file.
//!
//! Set `CHECKOUT_PRICE_LIST` to use a price list file instead of the built-in
//! one, and `CHECKOUT_LOG` (e.g. `debug`) to see tracing output on stderr.

use std::env;
use std::io;

use checkout_terminal::{Command, Session, TerminalConfig, TerminalResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> TerminalResult<()> {
    let config = TerminalConfig::load()?;

    // Initialize tracing on stderr so stdout carries only checkout output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let pricing = config.pricing_info()?;
    info!(
        products = pricing.len(),
        source = %config.price_list_source(),
        "Price list loaded"
    );

    let session = Session::new(&pricing);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Command::parse(env::args().skip(1)) {
        Command::Interactive => {
            println!("No arguments detected, entering interactive mode...");
            session.run_interactive(io::stdin().lock(), &mut out)?;
        }
        Command::InputFile(path) => {
            session.run_file(&path, &mut out)?;
        }
        Command::MissingFilename => {
            println!("--input argument requires filename");
        }
        Command::Unknown(arg) => {
            println!(
                "Unknown Argument: {}, -i or --input are the only valid first arguments",
                arg
            );
        }
    }

    Ok(())
}
