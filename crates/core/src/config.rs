//! Configuration path utilities for console-params.
//!
//! This module resolves the module definition file path and expands shell
//! variables like `~` in it.

/// Default path for the module definitions file
const DEFAULT_MODULES_PATH: &str = "~/.console-params/modules.yml";

/// Resolves the module definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use console_params_core::config::get_modules_path;
///
/// // Use default path
/// let default_path = get_modules_path(None);
///
/// // Use custom path
/// let custom_path = get_modules_path(Some("/path/to/modules.yml"));
/// assert_eq!(custom_path, "/path/to/modules.yml");
/// ```
#[must_use]
pub fn get_modules_path(modules_path_arg: Option<&str>) -> String {
    let modules_path = modules_path_arg.unwrap_or(DEFAULT_MODULES_PATH);

    shellexpand::tilde(modules_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_modules_path_with_custom_path() {
        let result = get_modules_path(Some("/custom/path/modules.yml"));
        assert_eq!(result, "/custom/path/modules.yml");
    }

    #[test]
    fn test_get_modules_path_with_none() {
        let result = get_modules_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".console-params/modules.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_modules_path_with_tilde() {
        let result = get_modules_path(Some("~/my-modules.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-modules.yml"));
    }
}
