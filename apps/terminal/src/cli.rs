//! Command-line argument parsing.
//!
//! ## Usage
//! ```bash
//! terminal-checkout                  # interactive mode
//! terminal-checkout -i basket.json   # price the basket in basket.json
//! terminal-checkout --input basket.json
//! ```

use std::path::PathBuf;

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: prompt for baskets on stdin.
    Interactive,
    /// `-i <file>` / `--input <file>`.
    InputFile(PathBuf),
    /// `-i` / `--input` given without a filename.
    MissingFilename,
    /// Any other first argument.
    Unknown(String),
}

impl Command {
    /// Parses the arguments after the program name. Only the first argument
    /// (and the filename following `-i`) is looked at.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        match args.next() {
            None => Command::Interactive,
            Some(flag) if flag == "-i" || flag == "--input" => match args.next() {
                Some(path) => Command::InputFile(PathBuf::from(path)),
                None => Command::MissingFilename,
            },
            Some(other) => Command::Unknown(other),
        }
    }
}
