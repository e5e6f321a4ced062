//! Process environment adapter
//!
//! Snapshots the process environment, filling gaps from a `.env` file.

use std::collections::HashMap;
use std::path::Path;

use camunda_deploy_application::ports::EnvironmentSource;

/// Name of the optional dotenv file.
pub const DOTENV_FILE: &str = ".env";

/// Errors reading a dotenv file.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {path}: {source}")]
pub struct DotenvError {
    path: String,
    source: dotenvy::Error,
}

/// Environment variables of the current process.
///
/// Variables set in the process win over entries of the dotenv file.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    vars: HashMap<String, String>,
}

impl ProcessEnvironment {
    /// Snapshots the process environment. Variables that are not valid
    /// UTF-8 are skipped.
    #[must_use]
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Snapshots the process environment and adds entries from
    /// `dir/.env` that are not already set. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(dir: &Path) -> Result<Self, DotenvError> {
        let mut env = Self::capture();
        env.merge_dotenv(&dir.join(DOTENV_FILE))?;
        Ok(env)
    }

    fn merge_dotenv(&mut self, path: &Path) -> Result<(), DotenvError> {
        let to_error = |source: dotenvy::Error| DotenvError {
            path: path.display().to_string(),
            source,
        };

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => return Ok(()),
            Err(e) => return Err(to_error(e)),
        };

        let mut loaded = 0usize;
        for entry in entries {
            let (key, value) = entry.map_err(to_error)?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                loaded += 1;
            }
        }

        tracing::debug!(path = %path.display(), loaded, "loaded dotenv file");
        Ok(())
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut env = ProcessEnvironment::default();
        assert!(env.merge_dotenv(&dir.path().join(DOTENV_FILE)).is_ok());
        assert!(env.vars.is_empty());
    }

    #[test]
    fn test_dotenv_fills_missing_vars_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        std::fs::write(
            &path,
            "CAMUNDA_URL=http://localhost:8080/engine-rest\nCAMUNDA_AUTH_BEARER=from-file\n",
        )
        .unwrap();

        let mut env = ProcessEnvironment {
            vars: HashMap::from([(
                "CAMUNDA_AUTH_BEARER".to_string(),
                "from-process".to_string(),
            )]),
        };
        env.merge_dotenv(&path).unwrap();

        assert_eq!(
            env.var("CAMUNDA_URL").as_deref(),
            Some("http://localhost:8080/engine-rest")
        );
        assert_eq!(
            env.var("CAMUNDA_AUTH_BEARER").as_deref(),
            Some("from-process")
        );
    }

    #[test]
    fn test_capture_reads_process_environment() {
        let env = ProcessEnvironment::capture();
        assert_eq!(env.var("PATH"), std::env::var("PATH").ok());
    }
}
