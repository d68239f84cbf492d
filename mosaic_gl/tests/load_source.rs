// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod util;

use std::fs;

use mosaic_gl::{DesktopGl, Error, Es2Gl, Gl};
use util::Recorder;

const SHADER: &str = "#version 100\nvarying vec2 uv;\nvoid main() {}\n";

fn shader_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("tiles")).unwrap();
    fs::write(dir.path().join("tiles").join("blit.frag"), SHADER).unwrap();
    dir
}

#[test]
fn desktop_loads_verbatim() {
    let dir = shader_dir();
    let gl = DesktopGl::new(Recorder::new()).with_shader_root(dir.path());
    assert_eq!(gl.load_source("tiles/blit.frag").unwrap(), SHADER);
}

#[test]
fn es2_adds_default_precision() {
    let dir = shader_dir();
    let gl = Es2Gl::new(Recorder::new()).with_shader_root(dir.path());
    let source = gl.load_source("tiles/blit.frag").unwrap();
    assert_eq!(
        source,
        "#version 100\nprecision mediump float;\nvarying vec2 uv;\nvoid main() {}\n"
    );
}

#[test]
fn missing_source() {
    let dir = shader_dir();
    let gl = DesktopGl::new(Recorder::new()).with_shader_root(dir.path());
    let err = gl.load_source("tiles/missing.frag").unwrap_err();
    assert!(matches!(err, Error::ShaderSource { .. }));
    assert!(err.to_string().contains("missing.frag"));
    assert!(gl.native().calls().is_empty());
}

#[test]
fn sources_outside_the_root_are_refused() {
    let outer = tempfile::tempdir().unwrap();
    fs::write(outer.path().join("outside.frag"), SHADER).unwrap();
    let root = outer.path().join("shaders");
    fs::create_dir(&root).unwrap();
    let gl = DesktopGl::new(Recorder::new()).with_shader_root(root.clone());

    let err = gl.load_source("../outside.frag").unwrap_err();
    match &err {
        Error::ShaderSource { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(gl.native().calls().is_empty());
}
