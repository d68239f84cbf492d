// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic GL is a backend-neutral GL capability interface.
//!
//! The [`Gl`] trait exposes one method per GL entry point the Mosaic renderer needs, with
//! every GL enum replaced by a strongly typed neutral value from [`types`]. Two adapters
//! implement it:
//!
//! - [`DesktopGl`], for desktop-class OpenGL with the full feature set.
//! - [`Es2Gl`], for OpenGL ES 2.0, which lacks a number of entry points and constants.
//!
//! Both translate neutral values through total `match` tables to bit-exact native constants
//! and forward the call to a [`NativeGl`] binding. Nothing is ever silently defaulted: a value
//! the backend cannot express fails with [`Error::InvalidEnumMapping`] or
//! [`Error::UnsupportedCapability`], and a driver status the backend does not recognise fails
//! with [`Error::UnknownDriverStatus`].
//!
//! ```ignore
//! let gl = mosaic_gl::DesktopGl::new(native).with_shader_root("assets/shaders");
//! let shader = gl.create_shader(ShaderType::Fragment)?;
//! gl.shader_source(shader, &gl.load_source("blit.frag")?)?;
//! gl.compile_shader(shader)?;
//! match gl.get_shader_source(shader) {
//!     Ok(text) => log::debug!("compiled:\n{text}"),
//!     Err(e) if e.is_unsupported() => {}
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! # Features
//!
//! - `gl`: provides [`LoadedGl`], a [`NativeGl`] over function pointers loaded by the
//!   [`gl`](https://crates.io/crates/gl) crate.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(unsafe_code)]
#![allow(missing_docs, reason = "GL entry points are documented by Khronos.")]

mod adapter;
mod consts;
mod desktop;
pub mod draw;
mod es2;
mod interface;
#[cfg(feature = "gl")]
mod loaded;
mod native;
mod source;
pub mod types;

pub use adapter::{Adapter, Dialect, Operation};
pub use desktop::Desktop;
pub use es2::Es2;
pub use interface::Gl;
#[cfg(feature = "gl")]
pub use loaded::LoadedGl;
pub use native::{NativeActiveAttrib, NativeGl};
pub use source::ShaderRoot;
pub use types::*;

use std::path::PathBuf;
use thiserror::Error;

/// A [`Gl`] for desktop-class OpenGL over the native binding `N`.
pub type DesktopGl<N> = Adapter<N, Desktop>;

/// A [`Gl`] for OpenGL ES 2.0 over the native binding `N`.
pub type Es2Gl<N> = Adapter<N, Es2>;

/// Errors that can occur in Mosaic GL.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A neutral value (or combination of values) has no entry in the backend's translation
    /// table. This is a programming error.
    #[error("{backend} backend has no native mapping for {kind}::{variant}")]
    InvalidEnumMapping {
        kind: &'static str,
        variant: String,
        backend: Backend,
    },
    /// The platform behind this backend cannot perform the operation at all.
    #[error("{operation} is not supported by the {backend} backend")]
    UnsupportedCapability {
        operation: &'static str,
        backend: Backend,
    },
    /// The driver returned a status code with no neutral equivalent.
    #[error("{backend} driver returned unknown {kind} code {code:#06x}")]
    UnknownDriverStatus {
        kind: &'static str,
        code: u32,
        backend: Backend,
    },
    /// A shader source could not be read.
    #[error("Couldn't load shader source '{}'", path.display())]
    ShaderSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An argument is outside what the native call can accept, such as a pixel buffer too
    /// small for the image it describes. Nothing reaches the driver.
    #[error("invalid argument to {operation}: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },
    /// The driver failed an object creation call.
    #[error("{operation} failed: {message}")]
    Driver {
        operation: &'static str,
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_mapping(
        kind: &'static str,
        variant: impl core::fmt::Debug,
        backend: Backend,
    ) -> Self {
        Self::InvalidEnumMapping {
            kind,
            variant: format!("{variant:?}"),
            backend,
        }
    }

    pub(crate) fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// Whether this error reports a capability missing on the current platform.
    ///
    /// Callers use this to skip optional features, such as shader source diagnostics.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedCapability { .. })
    }
}

/// The result type used throughout Mosaic GL.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type of the GL layer, under the name dependent crates use for it.
pub type GlError = Error;
