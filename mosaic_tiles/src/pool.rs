// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A free-list of tile-sized pixmaps.

use std::sync::Arc;

use crate::Pixmap;

/// Diagnostics for a [`BufferPool`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently waiting in the free-list.
    pub pooled: usize,
    /// Buffers the pool has allocated over its lifetime.
    pub allocated: usize,
}

/// Recycles tile buffers so that steady-state rendering does not allocate.
///
/// Buffers come back when a tile's front buffer is replaced, when the grid is reallocated,
/// and when a render fails or is discarded. At most `capacity` buffers are retained; the rest
/// are dropped.
#[derive(Debug)]
pub struct BufferPool {
    tile_size: u16,
    capacity: usize,
    free: Vec<Pixmap>,
    allocated: usize,
}

impl BufferPool {
    pub fn new(tile_size: u16, capacity: usize) -> Self {
        Self {
            tile_size,
            capacity,
            free: Vec::new(),
            allocated: 0,
        }
    }

    pub fn tile_size(&self) -> u16 {
        self.tile_size
    }

    /// A transparent tile-sized buffer, recycled if one is available.
    pub fn take(&mut self) -> Pixmap {
        match self.free.pop() {
            Some(mut buffer) => {
                buffer.clear();
                buffer
            }
            None => {
                self.allocated += 1;
                Pixmap::new(self.tile_size, self.tile_size)
            }
        }
    }

    /// Returns a buffer to the free-list.
    pub fn give(&mut self, buffer: Pixmap) {
        if buffer.width() != self.tile_size || buffer.height() != self.tile_size {
            return;
        }
        if self.free.len() < self.capacity {
            self.free.push(buffer);
        }
    }

    /// Returns a front buffer, if no blit is still reading it.
    pub fn give_shared(&mut self, buffer: Arc<Pixmap>) {
        if let Ok(buffer) = Arc::try_unwrap(buffer) {
            self.give(buffer);
        }
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            pooled: self.free.len(),
            allocated: self.allocated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::PremulRgba8;

    #[test]
    fn recycled_buffers_are_cleared() {
        let mut pool = BufferPool::new(4, 8);
        let mut buffer = pool.take();
        buffer.fill(PremulRgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        });
        pool.give(buffer);
        assert_eq!(pool.stats(), PoolStats { pooled: 1, allocated: 1 });

        let buffer = pool.take();
        assert!(buffer.data().iter().all(|p| p.a == 0));
        assert_eq!(pool.stats(), PoolStats { pooled: 0, allocated: 1 });
    }

    #[test]
    fn retained_capacity_is_capped() {
        let mut pool = BufferPool::new(2, 2);
        let buffers: Vec<_> = (0..4).map(|_| pool.take()).collect();
        for buffer in buffers {
            pool.give(buffer);
        }
        assert_eq!(pool.stats(), PoolStats { pooled: 2, allocated: 4 });
    }

    #[test]
    fn foreign_sizes_are_dropped() {
        let mut pool = BufferPool::new(2, 2);
        pool.give(Pixmap::new(3, 3));
        assert_eq!(pool.stats().pooled, 0);
    }

    #[test]
    fn shared_buffers_return_only_when_unique() {
        let mut pool = BufferPool::new(2, 2);
        let front = Arc::new(pool.take());
        let reader = Arc::clone(&front);
        pool.give_shared(front);
        assert_eq!(pool.stats().pooled, 0);
        pool.give_shared(reader);
        assert_eq!(pool.stats().pooled, 1);
    }
}
