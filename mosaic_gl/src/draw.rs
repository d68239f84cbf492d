// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-ordered accumulation of draw calls against any [`Gl`].
//!
//! Drawables are pushed into groups keyed by a Z value. [`DrawStack::execute`] runs the
//! groups back to front, setting up blending per group, so callers can queue primitives in
//! any order during a frame.

use std::collections::BTreeMap;
use std::fmt;

use crate::{BlendFactor, Capability, Gl, Result};

/// Something that issues GL calls when executed.
pub trait Drawable {
    fn draw(&self, gl: &dyn Gl) -> Result<()>;
}

impl<F> Drawable for F
where
    F: Fn(&dyn Gl) -> Result<()>,
{
    fn draw(&self, gl: &dyn Gl) -> Result<()> {
        self(gl)
    }
}

/// Drawables sharing one Z value and blend setup, executed in insertion order.
pub struct DrawGroup {
    z: i32,
    blend: Option<(BlendFactor, BlendFactor)>,
    items: Vec<Box<dyn Drawable>>,
}

impl fmt::Debug for DrawGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawGroup")
            .field("z", &self.z)
            .field("blend", &self.blend)
            .field("items", &self.items.len())
            .finish()
    }
}

impl DrawGroup {
    pub fn new(z: i32) -> Self {
        Self {
            z,
            blend: None,
            items: Vec::new(),
        }
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    /// Blends this group's output with `src`/`dst` factors. Without this, blending is
    /// disabled while the group draws.
    pub fn set_blend(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.blend = Some((src, dst));
    }

    pub fn push(&mut self, item: impl Drawable + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn execute(&self, gl: &dyn Gl) -> Result<()> {
        match self.blend {
            Some((src, dst)) => {
                gl.enable(Capability::Blend)?;
                gl.blend_func(src, dst)?;
            }
            None => gl.disable(Capability::Blend)?,
        }
        for item in &self.items {
            item.draw(gl)?;
        }
        Ok(())
    }
}

/// All groups of a frame, ordered by ascending Z.
#[derive(Debug, Default)]
pub struct DrawStack {
    groups: BTreeMap<i32, DrawGroup>,
}

impl DrawStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group at `z`, created empty if missing.
    pub fn group(&mut self, z: i32) -> &mut DrawGroup {
        self.groups.entry(z).or_insert_with(|| DrawGroup::new(z))
    }

    pub fn push(&mut self, z: i32, item: impl Drawable + 'static) {
        self.group(z).push(item);
    }

    /// Number of drawables across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(DrawGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(DrawGroup::is_empty)
    }

    /// Runs every group from lowest to highest Z.
    ///
    /// When every group succeeds and any of them enabled blending, blending is disabled
    /// before returning. Stops at the first failing call and returns its error; blending is
    /// then left in whatever state the failing group set.
    pub fn execute(&self, gl: &dyn Gl) -> Result<()> {
        for group in self.groups.values() {
            group.execute(gl)?;
        }
        if self.groups.values().any(|g| g.blend.is_some()) {
            gl.disable(Capability::Blend)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
