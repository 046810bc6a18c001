//! Loading and validation of module definition files.
//!
//! Module IDs and input names are validated on load: they must be well-formed
//! and unique (input names only within their module).

use std::collections::HashSet;
use std::fs::File;

use indexmap::IndexSet;
use log::{debug, info};

use crate::error::Error::{
    EmptyId, IdWithColon, IdWithSpace, NonUniqueInputName, NonUniqueModuleId, NumericId,
};
use crate::error::{Error, Result};
use crate::module_definitions::{InputDefinition, ModuleDefinition};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(char::is_numeric) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_inputs(module: &ModuleDefinition, inputs: &[InputDefinition]) -> Result<()> {
    let mut names = IndexSet::new();
    for input in inputs {
        validate_id(&input.name)?;

        if !names.insert(input.name.as_str()) {
            return Err(NonUniqueInputName(module.id.clone(), input.name.clone()));
        }
    }

    debug!(
        "Module `{}` inputs: {}",
        module.id,
        names.iter().copied().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}

fn validate_modules(modules: &[ModuleDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for module in modules {
        validate_id(&module.id)?;

        if !ids.insert(module.id.as_str()) {
            return Err(NonUniqueModuleId(module.id.clone()));
        }

        validate_inputs(module, &module.inputs)?;
    }

    Ok(())
}

/// Loads and validates module definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no modules
/// - Module IDs or input names are invalid or non-unique
///
/// # Examples
///
/// ```no_run
/// use console_params_core::file_handling::get_module_definitions;
///
/// let modules = get_module_definitions("/etc/console-params/modules.yml")?;
/// println!("Loaded {} modules", modules.len());
/// # Ok::<(), console_params_core::error::Error>(())
/// ```
pub fn get_module_definitions(modules_path: &str) -> Result<Vec<ModuleDefinition>> {
    let reader = get_reader("module definitions", modules_path)?;

    let modules: Vec<ModuleDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "module definitions".to_string(),
            modules_path.to_string(),
            e,
        )
    })?;

    if modules.is_empty() {
        return Err(Error::empty_module_definition(modules_path.to_string()));
    }

    validate_modules(&modules)?;

    info!("Loaded {} modules from `{}`", modules.len(), modules_path);

    Ok(modules)
}
