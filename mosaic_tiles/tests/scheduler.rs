// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests of the background workers.

mod util;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use mosaic_tiles::{
    BlitTarget, DeviceRect, Pixmap, SceneChange, TileEvent, TileListener, TileRenderer,
};
use util::{options, version_color, wait_until_clean, TestScene};

#[test]
fn dirty_tiles_converge_once() {
    let (sender, events) = crossbeam_channel::unbounded();
    let mut renderer = TileRenderer::new(options(64, 4)).unwrap();
    renderer.add_listener(Arc::new(sender));
    let scene = TestScene::new();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 640, 480));
    renderer.set_scene(Some(scene.clone()));

    let event = events.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(
        event,
        TileEvent::TilesComputed(mosaic_tiles::PassReport {
            rendered: 80,
            failed: 0,
            settled: true,
        })
    );
    assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
    assert_eq!(scene.renders(), 80);

    let mut surface = Pixmap::new(640, 480);
    renderer.blit(&mut surface);
    assert!(surface.data().iter().all(|p| *p == version_color(0)));
}

#[test]
fn a_tile_is_never_rendered_twice_at_once() {
    let mut renderer = TileRenderer::new(options(16, 6)).unwrap();
    let scene = TestScene::slow();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 128, 128));
    renderer.set_scene(Some(scene.clone()));

    for i in 0..300 {
        let x = (i * 37) % 128;
        let y = (i * 53) % 128;
        renderer.mark_dirty(DeviceRect::new(x, y, x + 20, y + 20));
        if i % 50 == 0 {
            renderer.mark_all_dirty();
        }
        if i % 7 == 0 {
            thread::yield_now();
        }
    }
    wait_until_clean(&renderer);
    assert!(!scene.overlapped());
    assert!(scene.renders() >= 64);
}

/// Checks that every tile it is given is a single colour.
struct UniformCheck {
    tiles: usize,
}

impl BlitTarget for UniformCheck {
    fn draw_tile(&mut self, origin: (i32, i32), tile: &Pixmap) {
        let first = tile.data()[0];
        assert!(
            tile.data().iter().all(|p| *p == first),
            "tile at {origin:?} is torn"
        );
        self.tiles += 1;
    }
}

#[test]
fn blits_never_see_partial_renders() {
    let mut renderer = TileRenderer::new(options(32, 4)).unwrap();
    let scene = TestScene::slow();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 256, 192));
    renderer.set_scene(Some(scene.clone()));

    let mut check = UniformCheck { tiles: 0 };
    for _ in 0..200 {
        scene.change(SceneChange::Structure);
        renderer.blit(&mut check);
    }
    wait_until_clean(&renderer);

    let mut surface = Pixmap::new(256, 192);
    renderer.blit(&mut surface);
    let color = version_color(scene.version());
    assert!(surface.data().iter().all(|p| *p == color));
}

#[test]
fn listeners_see_every_settled_pass() {
    struct Counter(std::sync::atomic::AtomicUsize);
    impl TileListener for Counter {
        fn tiles_computed(&self, _: &mosaic_tiles::PassReport) {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }

    let counter = Arc::new(Counter(Default::default()));
    let (sender, events) = crossbeam_channel::unbounded();
    let mut renderer = TileRenderer::new(options(64, 2)).unwrap();
    renderer.add_listener(counter.clone());
    renderer.add_listener(Arc::new(sender));
    renderer.set_device_bounds(DeviceRect::new(0, 0, 128, 128));
    renderer.set_scene(Some(TestScene::new()));

    let timeout = Duration::from_secs(10);
    events.recv_timeout(timeout).unwrap();
    renderer.mark_dirty(DeviceRect::new(0, 0, 1, 1));
    let TileEvent::TilesComputed(report) = events.recv_timeout(timeout).unwrap() else {
        panic!("expected a computed pass");
    };
    assert_eq!(report.rendered, 1);
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 2);
}
