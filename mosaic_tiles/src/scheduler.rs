// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives dirty tiles to clean.
//!
//! All tile state lives in one [`GridState`] behind a single mutex. A worker claims a dirty
//! tile under the lock, renders it with the lock released, and re-locks to swap the result
//! into place. Workers sleep on a condition variable while there is nothing to claim, and
//! are woken whenever tiles are marked dirty.
//!
//! A pass starts when the first tile becomes dirty and settles once no tile is claimable or
//! being rendered. Exactly one thread observes the settling, and it notifies the listeners
//! after releasing the lock.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::grid::{TileCoord, TileGrid, TileState, WorkerId};
use crate::pool::{BufferPool, PoolStats};
use crate::renderer::{PassReport, TileListener};
use crate::{DeviceRect, Pixmap, Scene, TileError, TileOptions};

#[derive(Debug, Default)]
struct Pass {
    active: bool,
    rendered: usize,
    failed: usize,
}

/// How a pass ended.
#[derive(Debug)]
enum Settled {
    /// Every tile is clean.
    Computed(PassReport),
    /// Some tiles failed and are held out until the retry deadline.
    Retry(PassReport),
}

impl Settled {
    fn report(&self) -> PassReport {
        match self {
            Self::Computed(report) | Self::Retry(report) => *report,
        }
    }
}

/// A claimed tile, carried by its worker while the lock is released.
struct Job {
    index: usize,
    generation: u64,
    coord: TileCoord,
    rect: DeviceRect,
    back: Pixmap,
    scene: Arc<dyn Scene>,
}

pub(crate) struct GridState {
    grid: TileGrid,
    pool: BufferPool,
    scene: Option<Arc<dyn Scene>>,
    listeners: Vec<Arc<dyn TileListener>>,
    pass: Pass,
    retry_at: Option<Instant>,
    shutdown: bool,
}

impl GridState {
    fn reallocate(&mut self, bounds: DeviceRect) {
        self.grid.reallocate(bounds, &mut self.pool);
        self.pass = Pass {
            active: !self.grid.tiles().is_empty(),
            ..Pass::default()
        };
        self.retry_at = None;
    }

    fn note_marked(&mut self, marked: usize) -> bool {
        if marked > 0 {
            self.pass.active = true;
        }
        marked > 0
    }

    fn claim(&mut self, worker: WorkerId, cursor: &mut usize) -> Option<Job> {
        if self.shutdown {
            return None;
        }
        let scene = Arc::clone(self.scene.as_ref()?);
        let index = self.grid.find_claimable(*cursor)?;
        *cursor = index + 1;

        let generation = self.grid.generation();
        let tile = self.grid.tile_mut(index);
        tile.owner = Some(worker);
        tile.dirty = false;
        let (coord, rect) = (tile.coord, tile.rect);
        Some(Job {
            index,
            generation,
            coord,
            rect,
            back: self.pool.take(),
            scene,
        })
    }

    /// Commits a finished render.
    ///
    /// Returns the job to run next if the tile was marked dirty again while it was being
    /// rendered, and the failure to report if the render failed.
    fn finish(
        &mut self,
        job: Job,
        outcome: Result<(), String>,
    ) -> (Option<Job>, Option<TileError>) {
        let Job {
            index,
            generation,
            coord,
            rect,
            back,
            scene,
        } = job;
        if generation != self.grid.generation() {
            log::trace!("discarding tile ({}, {}) from a previous grid", coord.col, coord.row);
            self.pool.give(back);
            return (None, None);
        }

        match outcome {
            Ok(()) => {
                self.pass.rendered += 1;
                let front = self.grid.tile_mut(index).front.replace(Arc::new(back));
                if let Some(front) = front {
                    self.pool.give_shared(front);
                }
                let rerender = !self.shutdown && self.grid.tiles()[index].dirty;
                let tile = self.grid.tile_mut(index);
                if rerender {
                    tile.dirty = false;
                    let job = Job {
                        index,
                        generation,
                        coord,
                        rect,
                        back: self.pool.take(),
                        scene,
                    };
                    return (Some(job), None);
                }
                tile.owner = None;
                (None, None)
            }
            Err(reason) => {
                self.pass.failed += 1;
                self.pool.give(back);
                let tile = self.grid.tile_mut(index);
                tile.owner = None;
                tile.dirty = true;
                tile.held_out = true;
                let error = TileError::TileRenderFailure {
                    col: coord.col,
                    row: coord.row,
                    reason,
                };
                (None, Some(error))
            }
        }
    }

    fn settle(&mut self, retry_interval: Duration) -> Option<Settled> {
        if !self.pass.active || self.scene.is_none() || self.grid.is_busy() {
            return None;
        }
        let report = PassReport {
            rendered: self.pass.rendered,
            failed: self.pass.failed,
            settled: !self.grid.any_dirty(),
        };
        self.pass = Pass::default();
        if report.settled {
            return Some(Settled::Computed(report));
        }
        if self.retry_at.is_none() {
            self.retry_at = Some(Instant::now() + retry_interval);
        }
        Some(Settled::Retry(report))
    }

    /// Returns failed tiles to the queue, starting a new pass.
    fn release_held_out(&mut self) -> bool {
        self.retry_at = None;
        let released = self.grid.release_held_out();
        self.note_marked(released)
    }

    fn retry_due(&self, now: Instant) -> bool {
        self.retry_at.is_some_and(|at| at <= now)
    }
}

pub(crate) struct Shared {
    state: Mutex<GridState>,
    work: Condvar,
    retry_interval: Duration,
}

impl Shared {
    pub(crate) fn new(options: &TileOptions) -> Self {
        Self {
            state: Mutex::new(GridState {
                grid: TileGrid::new(options.tile_size),
                pool: BufferPool::new(options.tile_size, options.pool_capacity),
                scene: None,
                listeners: Vec::new(),
                pass: Pass::default(),
                retry_at: None,
                shutdown: false,
            }),
            work: Condvar::new(),
            retry_interval: options.retry_interval,
        }
    }

    /// Scene code never runs under the lock, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, GridState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_device_bounds(&self, bounds: DeviceRect) {
        let mut state = self.lock();
        if state.grid.bounds() == bounds && !state.grid.tiles().is_empty() {
            return;
        }
        state.reallocate(bounds);
        self.work.notify_all();
    }

    pub(crate) fn set_scene(&self, scene: Option<Arc<dyn Scene>>) {
        let mut state = self.lock();
        state.scene = scene;
        let bounds = state.grid.bounds();
        state.reallocate(bounds);
        self.work.notify_all();
    }

    pub(crate) fn mark_all_dirty(&self) {
        let mut state = self.lock();
        let marked = state.grid.mark_all_dirty();
        if state.note_marked(marked) {
            self.work.notify_all();
        }
    }

    pub(crate) fn mark_dirty(&self, rect: DeviceRect) {
        let mut state = self.lock();
        let marked = state.grid.mark_dirty(rect);
        if state.note_marked(marked) {
            self.work.notify_all();
        }
    }

    pub(crate) fn add_listener(&self, listener: Arc<dyn TileListener>) {
        self.lock().listeners.push(listener);
    }

    pub(crate) fn fronts(&self) -> Vec<((i32, i32), Arc<Pixmap>)> {
        self.lock().grid.fronts()
    }

    pub(crate) fn tile_states(&self) -> Vec<(TileCoord, TileState)> {
        let state = self.lock();
        state
            .grid
            .tiles()
            .iter()
            .map(|tile| (tile.coord, tile.state()))
            .collect()
    }

    pub(crate) fn grid_size(&self) -> (u32, u32) {
        self.lock().grid.size()
    }

    pub(crate) fn pool_stats(&self) -> PoolStats {
        self.lock().pool.stats()
    }

    /// Stops the workers after their current tile and releases all tile buffers.
    pub(crate) fn shutdown(&self) {
        let mut state = self.lock();
        state.shutdown = true;
        let GridState { grid, pool, .. } = &mut *state;
        grid.teardown(pool);
        self.work.notify_all();
    }

    /// The body of a background worker thread.
    pub(crate) fn run_worker(&self, worker: WorkerId) {
        log::debug!("tile worker {} started", worker.0);
        let mut cursor = 0;
        let mut state = self.lock();
        loop {
            if state.shutdown {
                break;
            }
            if state.retry_due(Instant::now()) && state.release_held_out() {
                self.work.notify_all();
            }
            if let Some(job) = state.claim(worker, &mut cursor) {
                drop(state);
                self.render(job);
                state = self.lock();
                continue;
            }
            if let Some(settled) = state.settle(self.retry_interval) {
                let listeners = state.listeners.clone();
                drop(state);
                self.dispatch(&settled, &listeners);
                state = self.lock();
                continue;
            }
            state = match state.retry_at {
                Some(at) => {
                    let timeout = at.saturating_duration_since(Instant::now());
                    self.work
                        .wait_timeout(state, timeout)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
                None => self.work.wait(state).unwrap_or_else(PoisonError::into_inner),
            };
        }
        log::debug!("tile worker {} stopped", worker.0);
    }

    /// Runs one pass on the calling thread.
    ///
    /// Tiles held out by an earlier failed pass are released first.
    pub(crate) fn run_pass(&self, worker: WorkerId) -> PassReport {
        let mut cursor = 0;
        let mut state = self.lock();
        if state.release_held_out() {
            self.work.notify_all();
        }
        while let Some(job) = state.claim(worker, &mut cursor) {
            drop(state);
            self.render(job);
            state = self.lock();
        }

        let settled = state.settle(self.retry_interval);
        let unsettled = PassReport {
            rendered: state.pass.rendered,
            failed: state.pass.failed,
            settled: !state.pass.active && !state.grid.any_dirty(),
        };
        let listeners = state.listeners.clone();
        drop(state);

        match settled {
            Some(settled) => {
                self.dispatch(&settled, &listeners);
                settled.report()
            }
            None => unsettled,
        }
    }

    /// Renders `job`, and again for as long as its tile is re-dirtied meanwhile.
    fn render(&self, mut job: Job) {
        loop {
            let outcome = render_tile(&mut job);
            let mut state = self.lock();
            let (next, failure) = state.finish(job, outcome);
            if let Some(error) = failure {
                let listeners = state.listeners.clone();
                drop(state);
                for listener in &listeners {
                    listener.tile_failed(&error);
                }
            } else {
                drop(state);
            }
            match next {
                Some(next) => job = next,
                None => return,
            }
        }
    }

    fn dispatch(&self, settled: &Settled, listeners: &[Arc<dyn TileListener>]) {
        match settled {
            Settled::Computed(report) => {
                log::debug!("tile pass settled: {} rendered", report.rendered);
                for listener in listeners {
                    listener.tiles_computed(report);
                }
            }
            Settled::Retry(report) => {
                log::info!(
                    "{} tiles failed to render; retrying in {:?}",
                    report.failed,
                    self.retry_interval
                );
                // Sleeping workers need to pick up the retry deadline.
                self.work.notify_all();
            }
        }
    }
}

fn render_tile(job: &mut Job) -> Result<(), String> {
    let Job {
        coord,
        rect,
        back,
        scene,
        ..
    } = job;
    match panic::catch_unwind(AssertUnwindSafe(|| scene.render(*rect, back))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            log::warn!("tile ({}, {}) failed to render: {e}", coord.col, coord.row);
            Err(e.to_string())
        }
        Err(payload) => {
            let reason = panic_message(&*payload);
            log::error!("tile ({}, {}) panicked while rendering: {reason}", coord.col, coord.row);
            Err(reason)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
