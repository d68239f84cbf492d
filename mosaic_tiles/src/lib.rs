// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Tiles is a tiled, double-buffered renderer for retained scenes.
//!
//! A [`TileRenderer`] partitions the device bounds into fixed-size tiles. Each tile keeps the
//! last completed render as its front buffer, which is what [`TileRenderer::blit`] composites.
//! When the [`Scene`] changes, the affected tiles are marked dirty, and a fixed pool of
//! background workers renders them into back buffers, swapping each into place once it is
//! complete. Once no tile is dirty or being rendered, the pass has settled and every
//! [`TileListener`] is told through [`TileListener::tiles_computed`].
//!
//! A tile whose render fails (or panics) keeps its last good front buffer and is retried in a
//! later pass, after [`TileOptions::retry_interval`].
//!
//! ```ignore
//! let (sender, events) = crossbeam_channel::unbounded();
//! let mut renderer = TileRenderer::new(TileOptions::default())?;
//! renderer.add_listener(Arc::new(sender));
//! renderer.set_device_bounds(DeviceRect::new(0, 0, 800, 600));
//! renderer.set_scene(Some(scene));
//!
//! while let Ok(TileEvent::TilesComputed(_)) = events.recv() {
//!     renderer.blit(&mut surface);
//! }
//! ```
//!
//! With `num_workers` set to zero no threads are spawned, and [`TileRenderer::render_pass`]
//! renders on the calling thread instead.

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
#![forbid(unsafe_code)]

mod grid;
mod pixmap;
mod pool;
mod rect;
mod renderer;
mod scene;
mod scheduler;

pub use peniko;

pub use grid::{TileCoord, TileState, WorkerId};
pub use pixmap::Pixmap;
pub use pool::{BufferPool, PoolStats};
pub use rect::DeviceRect;
pub use renderer::{PassReport, TileEvent, TileListener, TileRenderer};
pub use scene::{BlitTarget, BoxError, Scene, SceneChange, SceneListener, SubscriptionId};

use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur in Mosaic Tiles.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TileError {
    /// The scene failed to render a tile.
    ///
    /// This is recovered from by the worker: the tile keeps its previous contents and is
    /// retried in a later pass. It is reported through [`TileListener::tile_failed`].
    #[error("failed to render tile ({col}, {row}): {reason}")]
    TileRenderFailure { col: u32, row: u32, reason: String },
    /// The [`TileOptions`] are not usable.
    #[error("invalid tile renderer configuration: {0}")]
    InvalidConfig(&'static str),
    /// A worker thread could not be started.
    #[error("failed to spawn tile worker")]
    WorkerSpawn(#[source] std::io::Error),
}

/// A specialized `Result` type for Mosaic Tiles.
pub type Result<T, E = TileError> = std::result::Result<T, E>;

/// Options which are set at renderer creation time, used in [`TileRenderer::new`].
#[derive(Clone, Debug)]
pub struct TileOptions {
    /// The width and height of a tile, in device pixels.
    pub tile_size: u16,
    /// The number of background worker threads.
    ///
    /// Zero means no workers are spawned, and tiles are only rendered by
    /// [`TileRenderer::render_pass`].
    pub num_workers: usize,
    /// How long to wait after a pass with failed tiles before retrying them.
    pub retry_interval: Duration,
    /// The most tile buffers the pool keeps for reuse.
    pub pool_capacity: usize,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            tile_size: 256,
            num_workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            retry_interval: Duration::from_millis(250),
            pool_capacity: 64,
        }
    }
}
