//! Allowed root configuration.

use super::errors::SecurityError;
use std::path::{Path, PathBuf};

/// The ordered set of directories tools are allowed to operate in.
///
/// Built once at process start from the launch configuration and immutable
/// for the process lifetime. Each root is canonicalized at construction, so
/// containment checks later compare canonical paths on both sides.
#[derive(Debug, Clone)]
pub struct AllowedRoots {
    roots: Vec<PathBuf>,
}

impl AllowedRoots {
    /// Build the root set from configured directory paths.
    ///
    /// Order is preserved and duplicates (after canonicalization) are
    /// dropped. Fails if the set is empty, or if any entry does not exist or
    /// is not a directory.
    pub fn new<I, P>(paths: I) -> Result<Self, SecurityError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut roots: Vec<PathBuf> = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let canonical = path
                .canonicalize()
                .map_err(|e| SecurityError::InvalidRoot {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

            if !canonical.is_dir() {
                return Err(SecurityError::InvalidRoot {
                    path: path.display().to_string(),
                    reason: "not a directory".to_string(),
                });
            }

            if !roots.contains(&canonical) {
                roots.push(canonical);
            }
        }

        if roots.is_empty() {
            return Err(SecurityError::NoRootsConfigured);
        }

        Ok(Self { roots })
    }

    /// Check whether a canonical path is equal to or a descendant of some root.
    pub fn contains(&self, canonical: &Path) -> bool {
        self.roots.iter().any(|root| canonical.starts_with(root))
    }

    /// Iterate the canonical roots in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
