use crate::ports::outbound::DependencySource;
use crate::shared::error::GraphError;
use crate::shared::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maximum repository file size for security (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// StaticRepoSource adapter backed by a JSON test-repository file
///
/// The file is a JSON object mapping package names to arrays of dependency
/// names. The whole repository is loaded up front, so lookups during graph
/// discovery are plain map reads.
#[derive(Debug)]
pub struct StaticRepoSource {
    packages: HashMap<String, Vec<String>>,
}

impl StaticRepoSource {
    /// Loads the repository file from the given path.
    ///
    /// # Errors
    /// Returns `RepositoryNotFound` if the file does not exist, and
    /// `RepositoryParseError` if it cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GraphError::RepositoryNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = safe_read_file(path).map_err(|e| GraphError::RepositoryParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let data: HashMap<String, Value> =
            serde_json::from_str(&content).map_err(|e| GraphError::RepositoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(Self {
            packages: normalize(data),
        })
    }

    /// Returns the number of packages in the repository (for testing)
    #[cfg(test)]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}

/// Normalizes raw JSON values so every entry is a list of strings.
/// A value that is not an array becomes an empty list; non-string
/// array elements are stringified.
fn normalize(data: HashMap<String, Value>) -> HashMap<String, Vec<String>> {
    data.into_iter()
        .map(|(name, value)| {
            let dependencies = match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
                _ => Vec::new(),
            };
            (name, dependencies)
        })
        .collect()
}

/// Safely read a file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
fn safe_read_file(path: &Path) -> Result<String> {
    // Get file metadata without following symlinks
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read repository metadata: {}", e))?;

    // Security check: Reject symbolic links
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    // Security check: Ensure it's a regular file
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    // Security check: File size limit (prevent DoS via huge files)
    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_FILE_SIZE
        );
    }

    // Safe to read the file now
    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read repository: {}", e))
}

impl DependencySource for StaticRepoSource {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        self.packages.get(package).cloned().unwrap_or_default()
    }
}
