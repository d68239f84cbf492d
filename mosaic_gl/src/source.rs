// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// The directory shader sources are resolved against.
///
/// Logical paths use `/` as separator on every platform, for example `"tiles/blit.frag"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderRoot {
    base: PathBuf,
}

impl ShaderRoot {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The filesystem path for a logical shader path.
    ///
    /// Fails for paths that would leave the base directory: `..` segments, and segments
    /// carrying a drive or root of their own.
    pub fn resolve(&self, logical: &str) -> Result<PathBuf> {
        let mut path = self.base.clone();
        for part in logical.split('/') {
            for component in Path::new(part).components() {
                match component {
                    Component::Normal(name) => path.push(name),
                    Component::CurDir => {}
                    Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                        return Err(Error::ShaderSource {
                            path: self.base.join(logical),
                            source: io::Error::new(
                                io::ErrorKind::InvalidInput,
                                "shader path leaves the shader root",
                            ),
                        });
                    }
                }
            }
        }
        Ok(path)
    }

    /// Reads the source at `logical` verbatim.
    pub fn read(&self, logical: &str) -> Result<String> {
        let path = self.resolve(logical)?;
        log::debug!("loading shader source {}", path.display());
        fs::read_to_string(&path).map_err(|source| Error::ShaderSource { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_logical_paths() {
        let root = ShaderRoot::new("assets");
        assert_eq!(
            root.resolve("tiles/blit.frag").unwrap(),
            Path::new("assets").join("tiles").join("blit.frag")
        );
        assert_eq!(
            root.resolve("/a.vert").unwrap(),
            Path::new("assets").join("a.vert")
        );
        assert_eq!(
            root.resolve("./tiles//b.vert").unwrap(),
            Path::new("assets").join("tiles").join("b.vert")
        );
    }

    #[test]
    fn parent_segments_are_rejected() {
        let root = ShaderRoot::new("assets");
        for logical in ["../secret", "tiles/../../x", "..", "tiles/.."] {
            match root.resolve(logical) {
                Err(Error::ShaderSource { source, .. }) => {
                    assert_eq!(source.kind(), io::ErrorKind::InvalidInput, "{logical}");
                }
                other => panic!("{logical} resolved to {other:?}"),
            }
        }
        assert!(root.resolve("tiles/..frag").is_ok());
    }

    #[test]
    fn missing_file_reports_path() {
        let root = ShaderRoot::new("/nonexistent/mosaic");
        match root.read("nope.frag") {
            Err(Error::ShaderSource { path, .. }) => {
                assert!(path.ends_with("nope.frag"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
