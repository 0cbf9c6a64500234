//! Alias command

use clap::Args;
use ui_forge::registry::derive_alias;

/// Show the alias a class path derives to
#[derive(Debug, Args)]
pub struct AliasCommand {
    /// Class path (e.g. `Input::Date`)
    pub class: String,

    /// Component namespace stripped from the class path
    #[arg(short, long, default_value = "app::components")]
    pub namespace: String,
}

impl AliasCommand {
    /// Execute the alias command
    pub fn execute(&self) {
        println!("{}", self.alias());
    }

    fn alias(&self) -> String {
        derive_alias(&self.class, &self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias() {
        let cmd = AliasCommand {
            class: "app::components::Input::Date".to_string(),
            namespace: "app::components".to_string(),
        };
        assert_eq!(cmd.alias(), "date-input");
    }
}
