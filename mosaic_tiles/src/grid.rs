// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid of tiles covering the device bounds.

use std::sync::Arc;

use crate::pool::BufferPool;
use crate::{DeviceRect, Pixmap};

/// The grid position of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub col: u32,
    pub row: u32,
}

impl TileCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Identifies the thread rendering a tile.
///
/// Background workers are numbered from zero. The thread calling
/// [`TileRenderer::render_pass`](crate::TileRenderer::render_pass) uses the id after the
/// last worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorkerId(pub usize);

/// The observable state of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileState {
    /// The front buffer shows the current scene.
    Clean,
    /// Waiting for a worker.
    Dirty,
    /// A worker is rendering the tile.
    Rendering,
    /// The tile was marked dirty again while a worker was rendering it.
    RenderingRedirtied,
}

#[derive(Debug)]
pub(crate) struct Tile {
    pub(crate) coord: TileCoord,
    pub(crate) rect: DeviceRect,
    /// The last completed render; only ever replaced wholesale.
    pub(crate) front: Option<Arc<Pixmap>>,
    pub(crate) dirty: bool,
    pub(crate) owner: Option<WorkerId>,
    /// Failed in the current pass; not claimable until the next one.
    pub(crate) held_out: bool,
}

impl Tile {
    pub(crate) fn state(&self) -> TileState {
        match (self.owner.is_some(), self.dirty) {
            (false, false) => TileState::Clean,
            (false, true) => TileState::Dirty,
            (true, false) => TileState::Rendering,
            (true, true) => TileState::RenderingRedirtied,
        }
    }

    fn is_claimable(&self) -> bool {
        self.dirty && self.owner.is_none() && !self.held_out
    }
}

/// Tiles covering the device bounds, in row-major order.
#[derive(Debug)]
pub(crate) struct TileGrid {
    bounds: DeviceRect,
    tile_size: u16,
    cols: u32,
    rows: u32,
    tiles: Vec<Tile>,
    generation: u64,
}

impl TileGrid {
    pub(crate) fn new(tile_size: u16) -> Self {
        Self {
            bounds: DeviceRect::default(),
            tile_size,
            cols: 0,
            rows: 0,
            tiles: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) fn bounds(&self) -> DeviceRect {
        self.bounds
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// Replaces every tile with a fresh, dirty one covering `bounds`.
    ///
    /// Front buffers of the old tiles go back to `pool`. Renders still in flight for the
    /// old tiles will be discarded, since the generation changes.
    pub(crate) fn reallocate(&mut self, bounds: DeviceRect, pool: &mut BufferPool) {
        for tile in self.tiles.drain(..) {
            if let Some(front) = tile.front {
                pool.give_shared(front);
            }
        }
        self.generation += 1;
        self.bounds = bounds;

        let size = i32::from(self.tile_size);
        self.cols = bounds.width().div_ceil(u32::from(self.tile_size));
        self.rows = bounds.height().div_ceil(u32::from(self.tile_size));

        let (x0, mut y) = bounds.origin();
        let count = u64::from(self.cols) * u64::from(self.rows);
        self.tiles.reserve(usize::try_from(count).unwrap_or(0));
        for row in 0..self.rows {
            let mut x = x0;
            for col in 0..self.cols {
                self.tiles.push(Tile {
                    coord: TileCoord::new(col, row),
                    rect: DeviceRect::from_origin_size(x, y, size, size),
                    front: None,
                    dirty: true,
                    owner: None,
                    held_out: false,
                });
                x = x.saturating_add(size);
            }
            y = y.saturating_add(size);
        }
        log::debug!(
            "tile grid generation {}: {}x{} tiles for {bounds}",
            self.generation,
            self.cols,
            self.rows
        );
    }

    /// Returns the number of tiles that became dirty.
    pub(crate) fn mark_all_dirty(&mut self) -> usize {
        let mut marked = 0;
        for tile in &mut self.tiles {
            marked += usize::from(!tile.dirty);
            tile.dirty = true;
        }
        marked
    }

    /// Marks every tile intersecting `rect`; returns the number that became dirty.
    pub(crate) fn mark_dirty(&mut self, rect: DeviceRect) -> usize {
        let mut marked = 0;
        for tile in self.tiles.iter_mut().filter(|t| t.rect.intersects(&rect)) {
            marked += usize::from(!tile.dirty);
            tile.dirty = true;
        }
        marked
    }

    /// The first claimable tile at or after `start`, wrapping around.
    pub(crate) fn find_claimable(&self, start: usize) -> Option<usize> {
        let len = self.tiles.len();
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| self.tiles[index].is_claimable())
    }

    /// Makes failed tiles claimable again; returns how many there were.
    pub(crate) fn release_held_out(&mut self) -> usize {
        let mut released = 0;
        for tile in self.tiles.iter_mut().filter(|t| t.held_out) {
            tile.held_out = false;
            released += 1;
        }
        released
    }

    /// Whether any tile is being rendered or is waiting to be claimed.
    pub(crate) fn is_busy(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.owner.is_some() || tile.is_claimable())
    }

    pub(crate) fn any_dirty(&self) -> bool {
        self.tiles.iter().any(|tile| tile.dirty)
    }

    /// Committed front buffers with their device origins.
    pub(crate) fn fronts(&self) -> Vec<((i32, i32), Arc<Pixmap>)> {
        self.tiles
            .iter()
            .filter_map(|tile| Some((tile.rect.origin(), Arc::clone(tile.front.as_ref()?))))
            .collect()
    }

    /// Returns every front buffer to `pool` and removes all tiles.
    pub(crate) fn teardown(&mut self, pool: &mut BufferPool) {
        for tile in self.tiles.drain(..) {
            if let Some(front) = tile.front {
                pool.give_shared(front);
            }
        }
        self.generation += 1;
        self.cols = 0;
        self.rows = 0;
    }
}
