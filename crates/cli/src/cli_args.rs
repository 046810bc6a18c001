//! Command-line argument parsing.
//!
//! This module defines the top-level command-line interface using the `clap`
//! crate. Everything after the top-level options is handed to the console
//! argument dispatcher as-is.

use std::collections::VecDeque;

use clap::Parser;

/// Command-line arguments for the `cparams` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use console_params_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cparams", "--run", "threshold", "otsu,3"]);
/// assert_eq!(args.console_arguments.len(), 3);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the module definitions YAML.
    ///
    /// If not provided, defaults to `~/.console-params/modules.yml`.
    #[arg(long, short = 'm')]
    pub modules_path: Option<String>,

    /// Console arguments, handled in order.
    ///
    /// # Examples
    /// ```bash
    /// cparams --run threshold otsu,radius=3 --parse a=1,b=2
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub console_arguments: Vec<String>,
}

impl Args {
    /// The console arguments as a queue, ready for dispatch.
    #[must_use]
    pub fn console_queue(&self) -> VecDeque<String> {
        self.console_arguments.iter().cloned().collect()
    }
}
