//! Expands resource arguments into deployable resources.
//!
//! Arguments containing glob metacharacters are expanded relative to the
//! working directory; anything else is taken literally. Wildcards do not
//! match a leading dot. Names are the working-directory-relative paths,
//! with `/` as separator.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use camunda_deploy_domain::Resource;

/// Errors while collecting resources.
#[derive(Debug, thiserror::Error)]
pub enum ResourceCollectionError {
    /// The pattern is not a valid glob.
    #[error("invalid pattern {pattern}: {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Parser message
        message: String,
    },

    /// A matched path could not be read while expanding.
    #[error("failed to expand {pattern}: {message}")]
    Expansion {
        /// The pattern being expanded
        pattern: String,
        /// I/O error description
        message: String,
    },
}

/// Returns true if `arg` contains glob metacharacters.
#[must_use]
pub fn is_glob(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Collects resources from `args`, relative to `cwd`.
///
/// Glob matches are files only, in sorted order. Duplicates keep the
/// first occurrence.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or a match cannot be read.
pub fn collect_resources(
    cwd: &Path,
    args: &[String],
) -> Result<Vec<Resource>, ResourceCollectionError> {
    let mut seen = HashSet::new();
    let mut resources = Vec::new();

    let mut add = |resource: Resource| {
        if seen.insert(resource.name.clone()) {
            resources.push(resource);
        }
    };

    for arg in args {
        if !is_glob(arg) {
            add(Resource::new(arg.clone(), cwd.join(arg)));
            continue;
        }

        for resource in expand(cwd, arg)? {
            add(resource);
        }
    }

    tracing::debug!(count = resources.len(), "collected resources");
    Ok(resources)
}

fn expand(cwd: &Path, pattern: &str) -> Result<Vec<Resource>, ResourceCollectionError> {
    let escaped_cwd = glob::Pattern::escape(&cwd.to_string_lossy());
    let full_pattern = Path::new(&escaped_cwd).join(pattern);
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let paths = glob::glob_with(&full_pattern.to_string_lossy(), options).map_err(|e| {
        ResourceCollectionError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        }
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| ResourceCollectionError::Expansion {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        if path.is_file() {
            matches.push(matched_resource(cwd, path));
        }
    }

    Ok(matches)
}

/// The matched path is kept as found; only the name is lossy.
fn matched_resource(cwd: &Path, path: PathBuf) -> Resource {
    let name = path
        .strip_prefix(cwd)
        .map_or_else(|_| path.to_string_lossy().into_owned(), to_name);
    Resource::new(name, path)
}

fn to_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
