//! Console Params CLI Library
//!
//! This crate provides the `cparams` command-line interface. It takes a list
//! of console arguments, resolves the modules they refer to, and parses each
//! parameter string into a key/value map.
//!
//! # Architecture
//!
//! - [`cli_args`]: Top-level command-line argument parsing
//! - [`console`]: Console argument dispatch (`--run`, `--parse`)
//!
//! # Examples
//!
//! ```bash
//! # Parse key=value pairs
//! cparams --parse method=otsu,radius=3
//!
//! # Bind values to a module's inputs in declaration order
//! cparams --run threshold otsu,3
//!
//! # Use a custom module definitions file
//! cparams -m ./modules.yml --run threshold otsu,dark=true
//! ```

pub mod cli_args;
pub mod console;
