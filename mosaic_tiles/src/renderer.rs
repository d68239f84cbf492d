// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{Arc, Weak};
use std::thread::JoinHandle;

use crossbeam_channel::Sender;

use crate::grid::{TileCoord, TileState, WorkerId};
use crate::pool::PoolStats;
use crate::scheduler::Shared;
use crate::{
    BlitTarget, DeviceRect, Result, Scene, SceneChange, SceneListener, SubscriptionId, TileError,
    TileOptions,
};

/// A summary of a render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Tiles rendered successfully.
    pub rendered: usize,
    /// Tiles whose render failed.
    pub failed: usize,
    /// Whether every tile is clean at the end of the pass.
    pub settled: bool,
}

/// Receives notifications from a [`TileRenderer`].
///
/// Listeners are called from worker threads, without any renderer lock held.
pub trait TileListener: Send + Sync {
    /// A pass has settled with every tile clean. Called once per pass.
    fn tiles_computed(&self, report: &PassReport);

    /// A tile failed to render and will be retried.
    fn tile_failed(&self, error: &TileError) {
        let _ = error;
    }
}

/// The events sent by the [`TileListener`] implementation for channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileEvent {
    TilesComputed(PassReport),
    TileFailed { col: u32, row: u32, reason: String },
}

impl TileListener for Sender<TileEvent> {
    fn tiles_computed(&self, report: &PassReport) {
        // The receiver may have been dropped, in which case nobody is interested.
        let _ = self.send(TileEvent::TilesComputed(*report));
    }

    fn tile_failed(&self, error: &TileError) {
        if let TileError::TileRenderFailure { col, row, reason } = error {
            let _ = self.send(TileEvent::TileFailed {
                col: *col,
                row: *row,
                reason: reason.clone(),
            });
        }
    }
}

/// Forwards scene notifications to the renderer, for as long as it exists.
struct SceneLink {
    shared: Weak<Shared>,
}

impl SceneListener for SceneLink {
    fn scene_changed(&self, change: SceneChange) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        match change {
            SceneChange::Structure => shared.mark_all_dirty(),
            SceneChange::Property { region } => shared.mark_dirty(region),
        }
    }
}

/// Renders a [`Scene`] into a grid of tiles on background workers.
///
/// See the [crate documentation](crate) for an overview.
pub struct TileRenderer {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
    num_workers: usize,
    subscription: Option<(Arc<dyn Scene>, SubscriptionId)>,
}

impl core::fmt::Debug for TileRenderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TileRenderer")
            .field("num_workers", &self.num_workers)
            .field("grid_size", &self.grid_size())
            .finish_non_exhaustive()
    }
}

impl TileRenderer {
    /// Creates a new renderer and starts its workers.
    ///
    /// The renderer has no scene and empty bounds; nothing is rendered until both are set.
    pub fn new(options: TileOptions) -> Result<Self> {
        if options.tile_size == 0 {
            return Err(TileError::InvalidConfig("tile size must be non-zero"));
        }
        let mut renderer = Self {
            shared: Arc::new(Shared::new(&options)),
            workers: Vec::with_capacity(options.num_workers),
            num_workers: options.num_workers,
            subscription: None,
        };
        for n in 0..options.num_workers {
            let shared = Arc::clone(&renderer.shared);
            // On failure, dropping `renderer` stops the workers already running.
            let handle = std::thread::Builder::new()
                .name(format!("mosaic-tile-{n}"))
                .spawn(move || shared.run_worker(WorkerId(n)))
                .map_err(TileError::WorkerSpawn)?;
            renderer.workers.push(handle);
        }
        log::debug!(
            "tile renderer started with {} workers and {}px tiles",
            options.num_workers,
            options.tile_size
        );
        Ok(renderer)
    }

    /// Reallocates the grid to cover `bounds`, marking every tile dirty.
    ///
    /// Does nothing if the bounds are unchanged.
    pub fn set_device_bounds(&self, bounds: DeviceRect) {
        self.shared.set_device_bounds(bounds);
    }

    /// Replaces the scene, reallocating the grid.
    ///
    /// The renderer unsubscribes from the previous scene and subscribes to the new one, so
    /// that its change notifications mark tiles dirty.
    pub fn set_scene(&mut self, scene: Option<Arc<dyn Scene>>) {
        if let Some((old, id)) = self.subscription.take() {
            old.unsubscribe(id);
        }
        self.shared.set_scene(scene.clone());
        if let Some(scene) = scene {
            let link = SceneLink {
                shared: Arc::downgrade(&self.shared),
            };
            let id = scene.subscribe(Arc::new(link));
            self.subscription = Some((scene, id));
        }
    }

    pub fn mark_all_dirty(&self) {
        self.shared.mark_all_dirty();
    }

    /// Marks every tile intersecting `rect` dirty.
    pub fn mark_dirty(&self, rect: DeviceRect) {
        self.shared.mark_dirty(rect);
    }

    /// Draws the last completed render of every tile onto `target`.
    ///
    /// Tiles that have never completed are skipped.
    pub fn blit(&self, target: &mut dyn BlitTarget) {
        for (origin, front) in self.shared.fronts() {
            target.draw_tile(origin, &front);
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn TileListener>) {
        self.shared.add_listener(listener);
    }

    /// Renders one pass on the calling thread.
    ///
    /// This claims and renders dirty tiles until none are left, then reports on the pass.
    /// Tiles that failed in an earlier pass are retried immediately. It is meant for
    /// renderers without workers; with workers, the pass may still be in progress when this
    /// returns.
    pub fn render_pass(&self) -> PassReport {
        self.shared.run_pass(WorkerId(self.num_workers))
    }

    /// The state of every tile, in row-major order.
    pub fn tile_states(&self) -> Vec<(TileCoord, TileState)> {
        self.shared.tile_states()
    }

    /// The number of columns and rows in the grid.
    pub fn grid_size(&self) -> (u32, u32) {
        self.shared.grid_size()
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.shared.pool_stats()
    }

    /// Stops and joins the workers, and releases the tile buffers.
    ///
    /// Workers finish the tile they are rendering first. Calling this more than once is
    /// harmless, and it is called on drop.
    pub fn shutdown(&mut self) {
        if let Some((scene, id)) = self.subscription.take() {
            scene.unsubscribe(id);
        }
        self.shared.shutdown();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("tile worker panicked outside of a tile render");
            }
        }
    }
}

impl Drop for TileRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
