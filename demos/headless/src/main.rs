// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossbeam_channel::RecvTimeoutError;
use mosaic_tiles::peniko::color::PremulRgba8;
use mosaic_tiles::{
    BoxError, DeviceRect, Pixmap, Scene, SceneChange, SceneListener, SubscriptionId, TileEvent,
    TileOptions, TileRenderer,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        bail!("the image must not be empty");
    }

    let mut renderer = TileRenderer::new(TileOptions {
        tile_size: args.tile_size,
        num_workers: args.workers,
        ..Default::default()
    })?;
    let (sender, events) = crossbeam_channel::unbounded();
    renderer.add_listener(Arc::new(sender));

    let scene = Arc::new(Rings::new(f32::from(args.width), f32::from(args.height)));
    renderer.set_device_bounds(DeviceRect::new(
        0,
        0,
        i32::from(args.width),
        i32::from(args.height),
    ));
    renderer.set_scene(Some(scene.clone()));
    settle(&renderer, &events, args.workers)?;

    // Only the tiles under the spot are rendered again.
    let spot = (f32::from(args.width) * 0.7, f32::from(args.height) * 0.3);
    scene.set_spot(spot, f32::from(args.width.min(args.height)) * 0.15);
    settle(&renderer, &events, args.workers)?;

    let mut surface = Pixmap::new(args.width, args.height);
    renderer.blit(&mut surface);
    log::info!(
        "rendered {:?} tiles, pool {:?}",
        renderer.grid_size(),
        renderer.pool_stats()
    );

    let rgba = surface.take_unpremultiplied();
    let bytes = bytemuck::cast_slice(&rgba).to_vec();
    let image = image::RgbaImage::from_raw(u32::from(args.width), u32::from(args.height), bytes)
        .context("pixmap size does not match the image size")?;
    std::fs::create_dir_all(&args.out_directory)?;
    let out_path = args.out_directory.join("rings.png");
    image
        .save(&out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    log::info!(
        "wrote result ({}x{}) to {}",
        args.width,
        args.height,
        out_path.display()
    );
    Ok(())
}

/// Waits for the current pass to complete, rendering it here if there are no workers.
fn settle(
    renderer: &TileRenderer,
    events: &crossbeam_channel::Receiver<TileEvent>,
    workers: usize,
) -> Result<()> {
    if workers == 0 {
        let report = renderer.render_pass();
        if !report.settled {
            bail!("{} tiles failed to render", report.failed);
        }
        log::debug!("pass rendered {} tiles", report.rendered);
        return Ok(());
    }
    loop {
        match events.recv_timeout(Duration::from_secs(30)) {
            Ok(TileEvent::TilesComputed(report)) => {
                log::debug!("pass rendered {} tiles", report.rendered);
                return Ok(());
            }
            Ok(TileEvent::TileFailed { col, row, reason }) => {
                log::warn!("tile ({col}, {row}) failed: {reason}");
            }
            Err(RecvTimeoutError::Timeout) => bail!("timed out waiting for tiles"),
            Err(RecvTimeoutError::Disconnected) => bail!("the renderer went away"),
        }
    }
}

/// Concentric rings, with an optional bright spot.
struct Rings {
    center: (f32, f32),
    spot: Mutex<Option<((f32, f32), f32)>>,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn SceneListener>)>>,
    next_id: Mutex<u64>,
}

impl Rings {
    fn new(width: f32, height: f32) -> Self {
        Self {
            center: (width * 0.5, height * 0.5),
            spot: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
        }
    }

    fn set_spot(&self, center: (f32, f32), radius: f32) {
        *self.spot.lock().unwrap_or_else(|e| e.into_inner()) = Some((center, radius));
        let region = DeviceRect::new(
            (center.0 - radius).floor() as i32,
            (center.1 - radius).floor() as i32,
            (center.0 + radius).ceil() as i32,
            (center.1 + radius).ceil() as i32,
        );
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener.scene_changed(SceneChange::Property { region });
        }
    }

    fn shade(&self, x: f32, y: f32, spot: Option<((f32, f32), f32)>) -> PremulRgba8 {
        let distance = (x - self.center.0).hypot(y - self.center.1);
        let wave = (distance * 0.08).sin() * 0.5 + 0.5;
        let mut rgb = [0.1 + 0.3 * wave, 0.2 + 0.5 * wave, 0.4 + 0.6 * wave];
        if let Some(((sx, sy), radius)) = spot {
            let glow = (1.0 - (x - sx).hypot(y - sy) / radius).max(0.0);
            for channel in &mut rgb {
                *channel += glow;
            }
        }
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        PremulRgba8 {
            r: quantize(rgb[0]),
            g: quantize(rgb[1]),
            b: quantize(rgb[2]),
            a: 255,
        }
    }
}

impl Scene for Rings {
    fn render(&self, rect: DeviceRect, target: &mut Pixmap) -> Result<(), BoxError> {
        let spot = *self.spot.lock().map_err(|_| "spot lock poisoned")?;
        let (x0, y0) = rect.origin();
        for y in 0..target.height() {
            for x in 0..target.width() {
                let (px, py) = (
                    (x0 + i32::from(x)) as f32 + 0.5,
                    (y0 + i32::from(y)) as f32 + 0.5,
                );
                target.set_pixel(x, y, self.shade(px, py, spot));
            }
        }
        Ok(())
    }

    fn subscribe(&self, listener: Arc<dyn SceneListener>) -> SubscriptionId {
        let mut next_id = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
        let id = SubscriptionId(*next_id);
        *next_id += 1;
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|(other, _)| *other != id);
    }
}

#[derive(Parser, Debug)]
#[command(about, long_about = None, bin_name = "cargo run -p headless --")]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u16,
    #[arg(long, default_value_t = 600)]
    height: u16,
    /// Width and height of a tile
    #[arg(long, default_value_t = 128)]
    tile_size: u16,
    /// Number of background workers; 0 renders on the main thread
    #[arg(long, short, default_value_t = 4)]
    workers: usize,
    /// Directory to store the result into
    #[arg(long, default_value_os_t = default_directory())]
    out_directory: PathBuf,
}

fn default_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("outputs")
}
