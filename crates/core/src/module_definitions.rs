use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InputDefinition {
    pub name: String,
    pub description: Option<String>,
}

impl Display for InputDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

/// A module that can be run from the console, with its inputs in
/// declaration order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefinition {
    pub id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub inputs: Vec<InputDefinition>,
}

impl ModuleDefinition {
    /// Input names in declaration order, for positional parameter binding.
    pub fn input_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inputs.iter().map(|input| input.name.as_str())
    }
}

impl Display for ModuleDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.id, desc),
            None => formatter.write_str(&self.id),
        }
    }
}
