// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod util;

use std::sync::Arc;

use mosaic_tiles::{
    DeviceRect, Pixmap, SceneChange, TileCoord, TileError, TileOptions, TileRenderer, TileState,
};
use util::{options, version_color, TestScene};

#[test]
fn resize_reallocates() {
    let mut renderer = TileRenderer::new(options(256, 0)).unwrap();
    let scene = TestScene::new();
    renderer.set_scene(Some(scene.clone()));

    renderer.set_device_bounds(DeviceRect::new(0, 0, 800, 600));
    assert_eq!(renderer.grid_size(), (4, 3));
    let report = renderer.render_pass();
    assert_eq!(report.rendered, 12);
    assert!(report.settled);

    renderer.set_device_bounds(DeviceRect::new(0, 0, 257, 257));
    assert_eq!(renderer.grid_size(), (2, 2));
    let states = renderer.tile_states();
    assert_eq!(states.len(), 4);
    assert!(states.iter().all(|(_, state)| *state == TileState::Dirty));
    assert_eq!(states[3].0, TileCoord::new(1, 1));
    // The twelve front buffers went back to the pool.
    assert_eq!(renderer.pool_stats().pooled, 12);

    assert_eq!(renderer.render_pass().rendered, 4);
    assert_eq!(renderer.pool_stats().allocated, 12);
}

#[test]
fn blit_covers_bounds() {
    let mut renderer = TileRenderer::new(options(64, 0)).unwrap();
    let scene = TestScene::new();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 200, 130));
    renderer.set_scene(Some(scene.clone()));

    let mut surface = Pixmap::new(200, 130);
    renderer.blit(&mut surface);
    assert!(surface.data().iter().all(|p| p.a == 0), "nothing is rendered yet");

    assert!(renderer.render_pass().settled);
    renderer.blit(&mut surface);
    let color = version_color(scene.version());
    assert!(surface.data().iter().all(|p| *p == color));
}

#[test]
fn scene_changes_mark_tiles() {
    let mut renderer = TileRenderer::new(options(100, 0)).unwrap();
    let scene = TestScene::new();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 300, 200));
    renderer.set_scene(Some(scene.clone()));
    renderer.render_pass();

    scene.change(SceneChange::Property {
        region: DeviceRect::new(150, 50, 160, 150),
    });
    let dirty: Vec<_> = renderer
        .tile_states()
        .into_iter()
        .filter(|(_, state)| *state == TileState::Dirty)
        .map(|(coord, _)| coord)
        .collect();
    assert_eq!(dirty, [TileCoord::new(1, 0), TileCoord::new(1, 1)]);

    let report = renderer.render_pass();
    assert_eq!(report.rendered, 2);
    assert!(report.settled);

    scene.change(SceneChange::Structure);
    assert!(renderer
        .tile_states()
        .iter()
        .all(|(_, state)| *state == TileState::Dirty));
}

#[test]
fn explicit_marking() {
    let mut renderer = TileRenderer::new(options(100, 0)).unwrap();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 300, 200));
    renderer.set_scene(Some(TestScene::new()));
    renderer.render_pass();

    renderer.mark_dirty(DeviceRect::new(299, 199, 400, 400));
    assert_eq!(renderer.tile_states()[5].1, TileState::Dirty);
    assert_eq!(renderer.render_pass().rendered, 1);

    renderer.mark_all_dirty();
    assert_eq!(renderer.render_pass().rendered, 6);
}

#[test]
fn rebinding_moves_the_subscription() {
    let first = TestScene::new();
    let second = TestScene::new();
    let mut renderer = TileRenderer::new(options(64, 1)).unwrap();
    renderer.set_scene(Some(first.clone()));
    assert_eq!(first.listener_count(), 1);

    renderer.set_scene(Some(second.clone()));
    assert_eq!(first.listener_count(), 0);
    assert_eq!(second.listener_count(), 1);

    renderer.set_scene(None);
    assert_eq!(second.listener_count(), 0);

    renderer.set_scene(Some(second.clone()));
    drop(renderer);
    assert_eq!(second.listener_count(), 0);
}

#[test]
fn nothing_renders_without_a_scene() {
    let renderer = TileRenderer::new(options(64, 0)).unwrap();
    renderer.set_device_bounds(DeviceRect::new(0, 0, 128, 128));
    let report = renderer.render_pass();
    assert_eq!(report.rendered, 0);
    assert!(!report.settled);
}

#[test]
fn zero_tile_size_is_rejected() {
    let options = TileOptions {
        tile_size: 0,
        ..TileOptions::default()
    };
    assert!(matches!(
        TileRenderer::new(options),
        Err(TileError::InvalidConfig(_))
    ));
}

#[test]
fn shutdown_is_idempotent() {
    let mut renderer = TileRenderer::new(options(32, 3)).unwrap();
    let scene: Arc<TestScene> = TestScene::new();
    renderer.set_scene(Some(scene.clone()));
    renderer.set_device_bounds(DeviceRect::new(0, 0, 256, 256));
    renderer.shutdown();
    renderer.shutdown();
    assert_eq!(renderer.grid_size(), (0, 0));
    assert_eq!(scene.listener_count(), 0);
}
