// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interfaces between the renderer and the code around it.

use std::sync::Arc;

use crate::{DeviceRect, Pixmap};

/// The error type returned by [`Scene::render`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Identifies a [`SceneListener`] registered with [`Scene::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// A change to a scene, as reported to its listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneChange {
    /// The scene changed in a way that can affect any pixel.
    Structure,
    /// Some property changed; only `region` (in device pixels) is affected.
    Property { region: DeviceRect },
}

/// Receives change notifications from a [`Scene`].
pub trait SceneListener: Send + Sync {
    fn scene_changed(&self, change: SceneChange);
}

/// The retained content a [`TileRenderer`](crate::TileRenderer) draws.
///
/// `render` is called from worker threads, concurrently for different tiles, and never
/// while the renderer holds its own lock, so a scene may notify its listeners from
/// within its own locks.
pub trait Scene: Send + Sync {
    /// Render the area `rect` of the scene into `target`.
    ///
    /// `target` is transparent and exactly one tile in size; its top-left pixel corresponds
    /// to the origin of `rect`.
    fn render(&self, rect: DeviceRect, target: &mut Pixmap) -> Result<(), BoxError>;

    /// Start sending change notifications to `listener`.
    fn subscribe(&self, listener: Arc<dyn SceneListener>) -> SubscriptionId;

    /// Stop sending change notifications to the listener registered as `id`.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// A surface that completed tiles can be drawn onto.
pub trait BlitTarget {
    /// Draw `tile` with its top-left corner at `origin`, in device pixels.
    fn draw_tile(&mut self, origin: (i32, i32), tile: &Pixmap);
}

impl BlitTarget for Pixmap {
    fn draw_tile(&mut self, origin: (i32, i32), tile: &Pixmap) {
        self.composite(tile, origin.0, origin.1);
    }
}
