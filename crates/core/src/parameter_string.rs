//! Parsing of console parameter strings.
//!
//! A parameter string is a single comma-separated token following a console
//! flag, e.g. `method=otsu,radius=3`. Segments are either `key=value` pairs or
//! bare values; bare values are bound positionally to the next name from an
//! optional ordered name source (usually a module's declared inputs).
//!
//! Commas and equals signs cannot appear inside values; there is no quoting.

use std::collections::HashMap;

use log::warn;

/// Mapping of parameter names to their raw string values.
pub type ParameterMap = HashMap<String, String>;

/// Message emitted for every segment that is neither a `key=value` pair nor
/// resolvable through the name source.
pub const MALFORMED_PARAMETERS_WARNING: &str =
    "Parameters must be formatted as a comma-separated list of key=value pairs.";

/// Parses `raw` with neither a name source nor a warning sink.
///
/// Malformed segments are dropped silently.
#[must_use]
pub fn parse(raw: &str) -> ParameterMap {
    parse_parameter_string(raw, None::<[String; 0]>, None::<fn(&str)>)
}

/// Parses `raw`, binding bare values to `names` in order.
#[must_use]
pub fn parse_with_names<I>(raw: &str, names: I) -> ParameterMap
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    parse_parameter_string(raw, Some(names), None::<fn(&str)>)
}

/// Parses `raw` as `key=value` pairs only, reporting malformed segments to
/// `warnings`.
pub fn parse_with_warnings<W>(raw: &str, warnings: W) -> ParameterMap
where
    W: FnMut(&str),
{
    parse_parameter_string(raw, None::<[String; 0]>, Some(warnings))
}

/// Turns a parameter string into a map of key/value pairs.
///
/// The string is split on `,`. A segment of the form `key=value` is stored
/// as-is, overwriting any earlier value for `key`. A segment without `=` takes
/// the next name from `names`, when one is available. Any other segment is
/// reported to `warnings` with [`MALFORMED_PARAMETERS_WARNING`] and skipped;
/// parsing never fails.
///
/// # Examples
///
/// ```rust
/// use console_params_core::parameter_string::parse_parameter_string;
///
/// let params = parse_parameter_string("a=1,2", Some(["y"]), None::<fn(&str)>);
/// assert_eq!(params.get("a").map(String::as_str), Some("1"));
/// assert_eq!(params.get("y").map(String::as_str), Some("2"));
/// ```
pub fn parse_parameter_string<I, W>(
    raw: &str,
    names: Option<I>,
    mut warnings: Option<W>,
) -> ParameterMap
where
    I: IntoIterator,
    I::Item: Into<String>,
    W: FnMut(&str),
{
    let mut parameters = ParameterMap::new();

    if raw.is_empty() {
        return parameters;
    }

    let mut names = names.map(IntoIterator::into_iter);

    for segment in split_discarding_trailing_empty(raw, ',') {
        let parts = split_discarding_trailing_empty(segment, '=');

        match parts.as_slice() {
            [key, value] => {
                parameters.insert((*key).to_string(), (*value).to_string());
            }
            [value] => match names.as_mut().and_then(Iterator::next) {
                Some(name) => {
                    parameters.insert(name.into(), (*value).to_string());
                }
                None => report(&mut warnings),
            },
            _ => report(&mut warnings),
        }
    }

    parameters
}

/// Warning sink that forwards to the `log` facade.
pub fn log_warning(message: &str) {
    warn!("{message}");
}

fn report<W: FnMut(&str)>(warnings: &mut Option<W>) {
    if let Some(warnings) = warnings.as_mut() {
        warnings(MALFORMED_PARAMETERS_WARNING);
    }
}

/// Splits `input` on `separator` and drops trailing empty pieces.
///
/// An input without the separator is returned whole, even when empty. This is
/// why `a=` counts as a bare segment with the value `a`.
fn split_discarding_trailing_empty(input: &str, separator: char) -> Vec<&str> {
    if !input.contains(separator) {
        return vec![input];
    }

    let mut parts: Vec<&str> = input.split(separator).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    parts
}
