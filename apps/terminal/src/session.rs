//! The interactive and file-driven checkout loops.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  interactive:  banner ─► [ "===" ─► prompt ─► read line ─► try_input ]* │
//! │                                                 │                       │
//! │                                                EOF ─► return            │
//! │                                                                         │
//! │  --input file: "Input File Contents:" ─► contents ─► try_input          │
//! │                                                                         │
//! │  try_input:    Ok  ─► "Total Cost of Order: 284"                        │
//! │                Err ─► render_failure (cause chain), keep going          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Readers and writers are generic so tests can drive a session in memory.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use checkout_core::PricingInfo;
use tracing::{debug, warn};

use crate::error::TerminalResult;
use crate::report::render_failure;

const ITALIC_START: &str = "\x1B[3m";
const ITALIC_END: &str = "\x1B[0m";

/// Prompt shown before each basket in interactive mode.
pub const PROMPT: &str = "Please enter checkout data as valid JSON: ";

/// A checkout session bound to one pricing table.
pub struct Session<'a> {
    pricing: &'a PricingInfo,
}

impl<'a> Session<'a> {
    pub fn new(pricing: &'a PricingInfo) -> Self {
        Session { pricing }
    }

    /// Prices one basket and prints the total or the failure block.
    ///
    /// Pricing failures are written to `out`, never returned; only a failed
    /// write is an error.
    pub fn try_input<W: Write>(&self, input_json: &str, out: &mut W) -> TerminalResult<()> {
        match self.pricing.price_basket(input_json) {
            Ok(quote) => {
                debug!(lines = ?quote.lines, total = %quote.total, "Basket priced");
                writeln!(out, "Total Cost of Order: {}", quote.total)?;
            }
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "Basket rejected");
                writeln!(out, "{}", render_failure(&e))?;
            }
        }
        Ok(())
    }

    /// Prompts for baskets until `input` is exhausted.
    pub fn run_interactive<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> TerminalResult<()> {
        writeln!(
            out,
            "Welcome to Terminal Checkout, the checkout application of the future!\n    \
             {ITALIC_START}Products on sale today: {}.{ITALIC_END}",
            self.pricing.product_ids().join(", ")
        )?;

        let mut line = String::new();
        loop {
            writeln!(out, "===")?;
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!("End of input, leaving interactive mode");
                return Ok(());
            }

            self.try_input(line.trim_end_matches(['\r', '\n']), out)?;
        }
    }

    /// Prices the basket stored in `path`.
    ///
    /// An unreadable file is reported like any other bad input.
    pub fn run_file<W: Write>(&self, path: &Path, out: &mut W) -> TerminalResult<()> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read input file");
                writeln!(
                    out,
                    "\nInvalid Input:\n===\nCould not read input file {}\n - caused by -\n{}\n===",
                    path.display(),
                    e
                )?;
                return Ok(());
            }
        };

        writeln!(out, "Input File Contents:")?;
        writeln!(out, "{}", contents)?;
        self.try_input(&contents, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_pricing_info;
    use std::env;
    use std::io::Cursor;

    const BASKET: &str = r#"[{"code":"A","quantity":3},{"code":"B","quantity":3},{"code":"C","quantity":1},{"code":"D","quantity":2}]"#;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&Session<'_>, &mut Vec<u8>) -> TerminalResult<()>,
    {
        let pricing = default_pricing_info().unwrap();
        let session = Session::new(&pricing);
        let mut out = Vec::new();
        f(&session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_try_input_prints_total() {
        let output = run(|s, out| s.try_input(BASKET, out));
        assert_eq!(output, "Total Cost of Order: 284\n");
    }

    #[test]
    fn test_try_input_prints_failure_block() {
        let output = run(|s, out| s.try_input(r#"[{"code":"E","quantity":1}]"#, out));
        assert!(output.contains("Invalid Input:"));
        assert!(output.contains("Product E in basket does not have pricing data"));
        assert!(!output.contains("Total Cost"));
    }

    #[test]
    fn test_interactive_loop_continues_after_errors() {
        let input = format!("not json\n{}\n[5]\n", BASKET);
        let output = run(|s, out| s.run_interactive(Cursor::new(input), out));

        assert!(output.starts_with("Welcome to Terminal Checkout"));
        assert!(output.contains("A, B, C, D"));
        assert_eq!(output.matches(PROMPT).count(), 4);
        assert!(output.contains("Input JSON failed to parse."));
        assert!(output.contains("Total Cost of Order: 284"));
        assert!(output.contains("Invalid Basket Format"));
    }

    #[test]
    fn test_interactive_handles_crlf() {
        let input = format!("{}\r\n", BASKET);
        let output = run(|s, out| s.run_interactive(Cursor::new(input), out));
        assert!(output.contains("Total Cost of Order: 284"));
    }

    #[test]
    fn test_run_file() {
        let path = env::temp_dir().join(format!("checkout-basket-{}.json", std::process::id()));
        fs::write(&path, BASKET).unwrap();

        let output = run(|s, out| s.run_file(&path, out));
        fs::remove_file(&path).unwrap();

        assert_eq!(
            output,
            format!("Input File Contents:\n{}\nTotal Cost of Order: 284\n", BASKET)
        );
    }

    #[test]
    fn test_run_file_missing() {
        let output = run(|s, out| s.run_file(Path::new("/definitely/not/here.json"), out));
        assert!(output.contains("Could not read input file /definitely/not/here.json"));
        assert!(!output.contains("Input File Contents:"));
    }
}
