use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No modules were found in the module definition YAML. Is `{}` empty?", .path)]
    EmptyModuleDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Found a non-unique module ID: `{}`", .0)]
    NonUniqueModuleId(String),

    #[error("Found a non-unique input name on module {}: `{}`", .0, .1)]
    NonUniqueInputName(String, String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),

    #[error("Module not found: `{}`", .0)]
    ModuleNotFound(String),

    #[error("Module not found: `{}` (did you mean `{}`?)", .0, .1)]
    ModuleNotFoundWithSuggestion(String, String),

    #[error("Console argument `{}` requires a value", .0)]
    MissingArgumentValue(String),

    #[error("Unrecognized console argument: `{}`", .0)]
    UnrecognizedArgument(String),
}

impl Error {
    pub fn empty_module_definition(path: String) -> Self {
        Self::EmptyModuleDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn module_not_found(id: String, suggestion: Option<String>) -> Self {
        match suggestion {
            Some(suggestion) => Self::ModuleNotFoundWithSuggestion(id, suggestion),
            None => Self::ModuleNotFound(id),
        }
    }
}
