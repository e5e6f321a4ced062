//! Environment variable source port

use std::collections::HashMap;

/// Read access to environment variables.
pub trait EnvironmentSource {
    /// Returns the value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value of `name` if it is set to a non-empty string.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

impl EnvironmentSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
