//! Profile image lookup.

use std::path::{Component, Path, PathBuf};

/// Reads profile image bytes for embedding in a `PHOTO` line.
///
/// Returning `None` means "no photo"; rendering continues without the line.
pub trait PhotoSource: Send + Sync {
    fn read_photo(&self, path: &str) -> Option<Vec<u8>>;
}

/// Reads photos straight from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPhotoSource;

impl PhotoSource for FsPhotoSource {
    fn read_photo(&self, path: &str) -> Option<Vec<u8>> {
        read_file(Path::new(path))
    }
}

/// Never yields a photo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhotoSource;

impl PhotoSource for NoPhotoSource {
    fn read_photo(&self, _path: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Resolves photo paths relative to a fixed root directory.
///
/// Only relative paths made of plain components are accepted; absolute
/// paths, `..` and prefixes resolve to no photo. Symlinks are followed only
/// while their target stays under the root.
#[derive(Debug, Clone)]
pub struct ScopedPhotoSource {
    root: PathBuf,
}

impl ScopedPhotoSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();
        let mut has_component = false;

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    has_component = true;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return None;
                }
            }
        }

        has_component.then_some(resolved)
    }
}

impl PhotoSource for ScopedPhotoSource {
    fn read_photo(&self, path: &str) -> Option<Vec<u8>> {
        let Some(resolved) = self.resolve(path) else {
            tracing::debug!(path = %path, "Photo path escapes photo directory");
            return None;
        };

        let contained = match (self.root.canonicalize(), resolved.canonicalize()) {
            (Ok(root), Ok(target)) => target.starts_with(&root).then_some(target),
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!(path = %resolved.display(), error = %e, "Profile image unavailable");
                return None;
            }
        };

        let Some(target) = contained else {
            tracing::debug!(path = %path, "Photo path links outside photo directory");
            return None;
        };
        read_file(&target)
    }
}

fn read_file(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Profile image unavailable");
            None
        }
    }
}
