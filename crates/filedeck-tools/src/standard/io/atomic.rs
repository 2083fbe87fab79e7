//! Atomic file writing.
//!
//! Content is staged in a uniquely named scratch file inside the target
//! directory, then published onto the final path with a single rename. The
//! final path therefore always holds either its previous complete content or
//! the new complete content; a reader can never observe a partial write.
//!
//! The scratch file lives in the same directory as the target, which keeps
//! the rename on one volume and inside the filesystem's atomicity guarantee.

use filedeck_core::{PathGuard, ToolError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Staged write handle; removes the scratch file unless it was published.
///
/// Cleanup runs on every exit path, including unwinds, and a removal failure
/// is logged and swallowed so it never masks the original error.
struct ScratchFile {
    path: PathBuf,
    file: Option<File>,
    published: bool,
}

impl ScratchFile {
    /// Create a scratch file with a unique name next to the target.
    fn create(directory: &Path, file_name: &str) -> io::Result<Self> {
        let scratch_name = format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple());
        let path = directory.join(scratch_name);
        let file = File::create_new(&path)?;
        Ok(Self {
            path,
            file: Some(file),
            published: false,
        })
    }

    /// Write the full content and force it to disk before publication.
    fn write_all(&mut self, content: &str) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.write_all(content.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        Ok(())
    }

    /// Rename the scratch file onto the final path.
    ///
    /// The handle is closed first; after a successful rename the scratch
    /// file no longer exists under its scratch name and Drop does nothing.
    fn publish(mut self, target: &Path) -> io::Result<()> {
        self.file.take();
        fs::rename(&self.path, target)?;
        self.published = true;
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.published {
            return;
        }
        self.file.take();
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove scratch file"
                );
            }
        }
    }
}

/// Path-scoped atomic writer.
///
/// Validates the target directory through [`PathGuard`], stages content in a
/// scratch file and publishes it with an atomic rename. Exactly one of
/// "final path unchanged" and "final path fully updated" holds when
/// [`write`](AtomicWriter::write) returns, whatever failed along the way.
#[derive(Clone)]
pub struct AtomicWriter {
    guard: Arc<PathGuard>,
}

impl AtomicWriter {
    /// Create a writer scoped to the guard's allowed roots.
    pub fn new(guard: Arc<PathGuard>) -> Self {
        Self { guard }
    }

    /// Write `content` to `directory/file_name` as UTF-8, atomically.
    ///
    /// Two concurrent writers on the same final path serialize at the
    /// rename; the last rename wins with no merging. Returns the final path
    /// on success.
    pub fn write(
        &self,
        directory: &str,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, ToolError> {
        let dir = self.guard.validate(directory)?;
        validate_file_name(file_name)?;

        let mut scratch = ScratchFile::create(dir.as_path(), file_name)
            .map_err(|e| ToolError::write_failure(format!("could not stage content: {e}")))?;

        scratch
            .write_all(content)
            .map_err(|e| ToolError::write_failure(format!("could not stage content: {e}")))?;

        let target = dir.as_path().join(file_name);
        let replacing = target.exists();

        scratch
            .publish(&target)
            .map_err(|e| ToolError::write_failure(format!("could not publish file: {e}")))?;

        if replacing {
            tracing::info!(path = %target.display(), "replaced existing file");
        } else {
            tracing::info!(path = %target.display(), "wrote new file");
        }

        Ok(target)
    }
}

/// The file name must be a single bare component so the final path cannot
/// leave the validated directory.
fn validate_file_name(file_name: &str) -> Result<(), ToolError> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ToolError::PermissionDenied {
            reason: format!("file name must be a bare file name: {file_name:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedeck_core::AllowedRoots;

    fn writer_for(dir: &Path) -> AtomicWriter {
        let guard = PathGuard::new(AllowedRoots::new([dir]).unwrap());
        AtomicWriter::new(Arc::new(guard))
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn write_round_trips_content() {
        let root = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());

        let target = writer
            .write(root.path().to_str().unwrap(), "note.txt", "hello world")
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "hello world");
        assert_eq!(entries(root.path()), vec!["note.txt"]);
    }

    #[test]
    fn overwrite_replaces_content_and_leaves_no_scratch() {
        let root = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());
        let dir = root.path().to_str().unwrap();

        writer.write(dir, "note.txt", "first").unwrap();
        writer.write(dir, "note.txt", "second").unwrap();

        assert_eq!(
            fs::read_to_string(root.path().join("note.txt")).unwrap(),
            "second"
        );
        assert_eq!(entries(root.path()), vec!["note.txt"]);
    }

    #[test]
    fn denied_directory_fails_with_permission_denied() {
        let root = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());

        let err = writer
            .write(outside.path().to_str().unwrap(), "note.txt", "x")
            .unwrap_err();
        assert!(matches!(err, ToolError::PermissionDenied { .. }));
        assert!(entries(outside.path()).is_empty());
    }

    #[test]
    fn file_name_with_separator_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());

        for bad in ["sub/note.txt", "..", "../note.txt", "", "."] {
            let err = writer
                .write(root.path().to_str().unwrap(), bad, "x")
                .unwrap_err();
            assert!(
                matches!(err, ToolError::PermissionDenied { .. }),
                "expected rejection for {bad:?}"
            );
        }
        assert!(entries(root.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_directory_leaves_no_trace() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());
        fs::set_permissions(root.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users ignore directory modes; nothing to test then.
        let probe = root.path().join("probe");
        if fs::write(&probe, "x").is_ok() {
            fs::remove_file(&probe).unwrap();
            fs::set_permissions(root.path(), fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let err = writer
            .write(root.path().to_str().unwrap(), "note.txt", "x")
            .unwrap_err();

        fs::set_permissions(root.path(), fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(err, ToolError::WriteFailure { .. }));
        assert!(entries(root.path()).is_empty());
    }

    #[test]
    fn failed_publish_preserves_prior_content() {
        let root = tempfile::tempdir().unwrap();
        let writer = writer_for(root.path());

        // Occupy the final path with a non-empty directory so the rename
        // cannot succeed.
        let target = root.path().join("note.txt");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "original").unwrap();

        let err = writer
            .write(root.path().to_str().unwrap(), "note.txt", "new content")
            .unwrap_err();

        assert!(matches!(err, ToolError::WriteFailure { .. }));
        assert_eq!(
            fs::read_to_string(target.join("keep.txt")).unwrap(),
            "original"
        );
        assert_eq!(entries(root.path()), vec!["note.txt"]);
    }

    #[test]
    fn scratch_file_is_removed_when_dropped_unpublished() {
        let root = tempfile::tempdir().unwrap();

        let scratch = ScratchFile::create(root.path(), "note.txt").unwrap();
        let scratch_path = scratch.path.clone();
        assert!(scratch_path.exists());

        drop(scratch);
        assert!(!scratch_path.exists());
        assert!(entries(root.path()).is_empty());
    }

    #[test]
    fn published_scratch_file_becomes_the_target() {
        let root = tempfile::tempdir().unwrap();

        let mut scratch = ScratchFile::create(root.path(), "note.txt").unwrap();
        scratch.write_all("data").unwrap();
        let scratch_path = scratch.path.clone();

        let target = root.path().join("note.txt");
        scratch.publish(&target).unwrap();

        assert!(!scratch_path.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "data");
    }

    #[test]
    fn concurrent_scratch_names_do_not_collide() {
        let root = tempfile::tempdir().unwrap();

        let a = ScratchFile::create(root.path(), "note.txt").unwrap();
        let b = ScratchFile::create(root.path(), "note.txt").unwrap();
        assert_ne!(a.path, b.path);
    }
}
