//! Path validation against the allowed roots.
//!
//! `ValidatedPath` is an opaque type that can only be created through
//! [`PathGuard::validate`], so a function taking one can rely on the
//! containment check having run.

use super::errors::SecurityError;
use super::policy::AllowedRoots;
use std::path::{Path, PathBuf};

/// A path that has passed the containment check.
///
/// The inner `PathBuf` is canonical: symlinks and `..` segments are already
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    inner: PathBuf,
}

impl ValidatedPath {
    /// Get a reference to the validated path.
    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// Convert into the inner `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.inner
    }

    /// Display the path.
    pub fn display(&self) -> std::path::Display<'_> {
        self.inner.display()
    }
}

/// The containment check every filesystem-touching tool runs first.
///
/// Holds the read-only [`AllowedRoots`]; validation never mutates state. A
/// successful validation is recorded as an audit log entry.
#[derive(Debug, Clone)]
pub struct PathGuard {
    roots: AllowedRoots,
}

impl PathGuard {
    /// Create a guard over the configured roots.
    pub fn new(roots: AllowedRoots) -> Self {
        Self { roots }
    }

    /// The roots this guard enforces.
    pub fn roots(&self) -> &AllowedRoots {
        &self.roots
    }

    /// Resolve a requested path and check it lies within an allowed root.
    ///
    /// The path is canonicalized, so `..` segments and symlinks cannot
    /// escape the roots. Fails with `InvalidPath` when the path cannot be
    /// resolved and `PathNotAllowed` when it resolves outside every root.
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<ValidatedPath, SecurityError> {
        let path = path.as_ref();
        let raw = path.as_os_str();

        if raw.is_empty() {
            return Err(SecurityError::InvalidPath {
                path: String::new(),
            });
        }

        if raw.as_encoded_bytes().contains(&0) {
            return Err(SecurityError::InvalidPath {
                path: path.to_string_lossy().into_owned(),
            });
        }

        let canonical = path.canonicalize().map_err(|e| SecurityError::InvalidPath {
            path: format!("{}: {}", path.display(), e),
        })?;

        if !self.roots.contains(&canonical) {
            return Err(SecurityError::PathNotAllowed {
                path: canonical.to_string_lossy().into_owned(),
            });
        }

        tracing::info!(path = %canonical.display(), "path validated");

        Ok(ValidatedPath { inner: canonical })
    }
}
