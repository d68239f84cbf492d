// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the tile renderer tests.

#![allow(dead_code, reason = "not every test uses every helper")]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use mosaic_tiles::peniko::color::PremulRgba8;
use mosaic_tiles::{
    BoxError, DeviceRect, Pixmap, Scene, SceneChange, SceneListener, SubscriptionId, TileOptions,
    TileRenderer, TileState,
};

/// The opaque colour a [`TestScene`] paints at `version`.
pub fn version_color(version: u32) -> PremulRgba8 {
    let [a, b, ..] = version.to_le_bytes();
    PremulRgba8 {
        r: a,
        g: b,
        b: 255 - a,
        a: 255,
    }
}

/// A scene that fills each tile with one colour per version.
///
/// It records which tiles are being rendered at any moment, and can be told to fail
/// particular tiles.
#[derive(Default)]
pub struct TestScene {
    version: AtomicU32,
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn SceneListener>)>>,
    /// Origins of tiles whose next render fails.
    fail_once: Mutex<HashSet<(i32, i32)>>,
    in_flight: Mutex<HashSet<(i32, i32)>>,
    overlapped: AtomicBool,
    renders: AtomicUsize,
    /// Paint tiles in two halves with a pause in between.
    slow: bool,
}

impl TestScene {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn slow() -> Arc<Self> {
        Arc::new(Self {
            slow: true,
            ..Self::default()
        })
    }

    pub fn fail_once_at(&self, origin: (i32, i32)) {
        self.fail_once.lock().unwrap().insert(origin);
    }

    pub fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }

    /// Bumps the version and notifies listeners.
    pub fn change(&self, change: SceneChange) {
        self.version.fetch_add(1, Ordering::SeqCst);
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener.scene_changed(change);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Whether two renders of the same tile ever overlapped in time.
    pub fn overlapped(&self) -> bool {
        self.overlapped.load(Ordering::SeqCst)
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl Scene for TestScene {
    fn render(&self, rect: DeviceRect, target: &mut Pixmap) -> Result<(), BoxError> {
        let origin = rect.origin();
        if !self.in_flight.lock().unwrap().insert(origin) {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        self.renders.fetch_add(1, Ordering::SeqCst);

        let result = if self.fail_once.lock().unwrap().remove(&origin) {
            Err(format!("injected failure at {rect}").into())
        } else {
            let color = version_color(self.version());
            let data = target.data_mut();
            let half = data.len() / 2;
            data[..half].fill(color);
            if self.slow {
                thread::sleep(Duration::from_micros(200));
            }
            data[half..].fill(color);
            Ok(())
        };

        self.in_flight.lock().unwrap().remove(&origin);
        result
    }

    fn subscribe(&self, listener: Arc<dyn SceneListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().unwrap().retain(|(i, _)| *i != id);
    }
}

pub fn options(tile_size: u16, num_workers: usize) -> TileOptions {
    TileOptions {
        tile_size,
        num_workers,
        retry_interval: Duration::from_millis(10),
        ..TileOptions::default()
    }
}

/// Waits until every tile is clean, panicking after a few seconds.
pub fn wait_until_clean(renderer: &TileRenderer) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !renderer
        .tile_states()
        .iter()
        .all(|(_, state)| *state == TileState::Clean)
    {
        assert!(Instant::now() < deadline, "tiles never became clean");
        thread::sleep(Duration::from_millis(2));
    }
}
