//! Console argument dispatch.
//!
//! Console arguments are processed front to back from a queue of tokens. Each
//! recognized flag pops what it needs from the queue and yields an
//! [`Invocation`]:
//!
//! - `--run <module-id> [<parameter-string>]`: bare values bind to the module's inputs
//! - `--parse <parameter-string>`: only `key=value` pairs are accepted

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use console_params_core::console_args::has_param;
use console_params_core::error::{Error, Result};
use console_params_core::module_definitions::ModuleDefinition;
use console_params_core::parameter_string::{
    log_warning, parse_parameter_string, parse_with_warnings, ParameterMap,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use log::debug;

pub const RUN_ARGUMENT: &str = "--run";
pub const PARSE_ARGUMENT: &str = "--parse";

/// The result of handling a single console argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The module to run, or `None` for a bare `--parse`.
    pub target: Option<String>,
    pub parameters: ParameterMap,
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            Some(id) => write!(formatter, "Running {id}:")?,
            None => formatter.write_str("Parsed parameters:")?,
        }

        for (key, value) in self.parameters.iter().sorted() {
            write!(formatter, "\n\t{key} = {value}")?;
        }

        Ok(())
    }
}

/// Returns true if any token in the queue is a `--run` argument.
///
/// Used to avoid loading module definitions when nothing needs them.
pub fn needs_modules<S: AsRef<str>>(tokens: &VecDeque<S>) -> bool {
    tokens.iter().any(|token| token.as_ref() == RUN_ARGUMENT)
}

/// Handles every console argument in `tokens`, in order.
///
/// # Errors
///
/// Returns an error if:
/// - A token is not a recognized console argument
/// - `--run` or `--parse` is missing its required value
/// - `--run` names a module that is not defined
pub fn process_console_arguments(
    mut tokens: VecDeque<String>,
    modules: &[ModuleDefinition],
) -> Result<Vec<Invocation>> {
    let mut invocations = Vec::new();

    while let Some(token) = tokens.pop_front() {
        debug!("Handling console argument `{token}`");

        let invocation = match token.as_str() {
            RUN_ARGUMENT => handle_run(&mut tokens, modules)?,
            PARSE_ARGUMENT => handle_parse(&mut tokens)?,
            other => return Err(Error::UnrecognizedArgument(other.to_string())),
        };

        invocations.push(invocation);
    }

    Ok(invocations)
}

fn handle_run(tokens: &mut VecDeque<String>, modules: &[ModuleDefinition]) -> Result<Invocation> {
    let module_id = pop_param(tokens)
        .ok_or_else(|| Error::MissingArgumentValue(RUN_ARGUMENT.to_string()))?;
    let module = find_module(&module_id, modules)?;

    // The parameter string is optional for `--run`
    let parameters = match pop_param(tokens) {
        Some(raw) => {
            parse_parameter_string(&raw, Some(module.input_names()), Some(log_warning))
        }
        None => ParameterMap::new(),
    };

    Ok(Invocation {
        target: Some(module.id.clone()),
        parameters,
    })
}

fn handle_parse(tokens: &mut VecDeque<String>) -> Result<Invocation> {
    let raw = pop_param(tokens)
        .ok_or_else(|| Error::MissingArgumentValue(PARSE_ARGUMENT.to_string()))?;

    Ok(Invocation {
        target: None,
        parameters: parse_with_warnings(&raw, log_warning),
    })
}

fn pop_param(tokens: &mut VecDeque<String>) -> Option<String> {
    if has_param(&*tokens) {
        tokens.pop_front()
    } else {
        None
    }
}

/// Look up a module by ID, suggesting the closest fuzzy match when missing.
fn find_module<'a>(id: &str, modules: &'a [ModuleDefinition]) -> Result<&'a ModuleDefinition> {
    if let Some(module) = modules.iter().find(|module| module.id == id) {
        return Ok(module);
    }

    let matcher = SkimMatcherV2::default();
    let suggestion = modules
        .iter()
        .filter_map(|module| {
            matcher
                .fuzzy_match(&module.id, id)
                .map(|score| (score, &module.id))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, module_id)| module_id.clone());

    Err(Error::module_not_found(id.to_string(), suggestion))
}
