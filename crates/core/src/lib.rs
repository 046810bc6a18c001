//! Console Params Core Library
//!
//! This crate provides the parsing pieces of console-params: turning the
//! parameter string that follows a console flag into a key/value map, and
//! deciding whether the next console token is a value or another flag.
//!
//! # Key Features
//!
//! - **Parameter Strings**: `key=value` pairs and positional values, separated by commas
//! - **Positional Binding**: Bare values bound in order to a module's declared inputs
//! - **Best-effort Diagnostics**: Malformed segments are reported to an optional sink, never fatal
//! - **Module Definitions**: YAML-declared modules that supply the ordered input names
//!
//! # Examples
//!
//! ```
//! use console_params_core::parameter_string::{parse, parse_with_names};
//!
//! let named = parse("method=otsu,radius=3");
//! assert_eq!(named["radius"], "3");
//!
//! let positional = parse_with_names("otsu,3", ["method", "radius"]);
//! assert_eq!(positional["method"], "otsu");
//! ```

pub mod config;
pub mod console_args;
pub mod error;
pub mod file_handling;
pub mod module_definitions;
pub mod parameter_string;
