//! Named custom build steps.

use serde::Deserialize;

/// A runnable script, emitted as a custom target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Shell commands, run in order from the project root
    #[serde(default)]
    pub commands: Vec<String>,

    /// Files this script produces
    #[serde(default)]
    pub products: Vec<String>,

    /// Names this script depends on
    #[serde(default)]
    pub requires: Vec<String>,
}

impl Script {
    pub fn new(name: impl Into<String>) -> Self {
        Script {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.commands.push(command.into());
        self
    }
}
