// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use peniko::color::{PremulRgba8, Rgba8};

const TRANSPARENT: PremulRgba8 = PremulRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// A pixmap of premultiplied RGBA8 values.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in RGBA8 format.
    buf: Vec<PremulRgba8>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![TRANSPARENT; usize::from(width) * usize::from(height)];
        Self { width, height, buf }
    }

    /// Create a new pixmap with the given premultiplied RGBA8 data.
    ///
    /// The pixels are in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the `data` vector is not of length `width * height`.
    pub fn from_parts(data: Vec<PremulRgba8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "Expected `data` to have length of exactly `width * height`"
        );
        Self {
            width,
            height,
            buf: data,
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.buf.fill(TRANSPARENT);
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: PremulRgba8) {
        self.buf.fill(color);
    }

    /// Returns a reference to the underlying data as premultiplied RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data(&self) -> &[PremulRgba8] {
        &self.buf
    }

    /// Returns a mutable reference to the underlying data as premultiplied RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data_mut(&mut self) -> &mut [PremulRgba8] {
        &mut self.buf
    }

    /// Returns a reference to the underlying data as premultiplied RGBA8.
    ///
    /// The pixels are in row-major order. Each pixel consists of four bytes in the order
    /// `[r, g, b, a]`.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Returns a mutable reference to the underlying data as premultiplied RGBA8.
    pub fn data_as_u8_slice_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.buf)
    }

    /// Sample a pixel from the pixmap.
    #[inline(always)]
    pub fn sample(&self, x: u16, y: u16) -> PremulRgba8 {
        let idx = usize::from(self.width) * usize::from(y) + usize::from(x);
        self.buf[idx]
    }

    /// Set a pixel in the pixmap at the given coordinates.
    ///
    /// The coordinate system has its origin at the top-left corner, with `x` increasing to
    /// the right and `y` increasing downward.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u16, y: u16, pixel: PremulRgba8) {
        let idx = usize::from(self.width) * usize::from(y) + usize::from(x);
        self.buf[idx] = pixel;
    }

    /// Composite `src` over this pixmap with its top-left corner at `(x, y)`.
    ///
    /// Uses the source-over operator. Parts of `src` falling outside this pixmap are
    /// clipped, so `x` and `y` may be negative.
    pub fn composite(&mut self, src: &Self, x: i32, y: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(i32::from(src.width)).min(i32::from(self.width));
        let y1 = y.saturating_add(i32::from(src.height)).min(i32::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        // All four bounds are clipped to both pixmaps, so they are non-negative.
        let span = (x1 - x0) as usize;
        for dy in y0..y1 {
            let src_start = (dy - y) as usize * usize::from(src.width) + (x0 - x) as usize;
            let dst_start = dy as usize * usize::from(self.width) + x0 as usize;
            let src_row = &src.buf[src_start..src_start + span];
            let dst_row = &mut self.buf[dst_start..dst_start + span];
            for (d, s) in dst_row.iter_mut().zip(src_row) {
                *d = source_over(*s, *d);
            }
        }
    }

    /// Consume the pixmap, returning the data as (unpremultiplied) RGBA8.
    ///
    /// Not fast, but useful for saving to PNG etc.
    ///
    /// The pixels are in row-major order.
    pub fn take_unpremultiplied(self) -> Vec<Rgba8> {
        self.buf
            .into_iter()
            .map(|PremulRgba8 { r, g, b, a }| {
                let alpha = 255.0 / f32::from(a);
                if a != 0 {
                    let unpremultiply = |component| (f32::from(component) * alpha + 0.5) as u8;
                    Rgba8 {
                        r: unpremultiply(r),
                        g: unpremultiply(g),
                        b: unpremultiply(b),
                        a,
                    }
                } else {
                    Rgba8 { r, g, b, a }
                }
            })
            .collect()
    }
}

#[inline(always)]
fn source_over(src: PremulRgba8, dst: PremulRgba8) -> PremulRgba8 {
    if src.a == 255 {
        return src;
    }
    let inv = 255 - u16::from(src.a);
    let blend = |s: u8, d: u8| (u16::from(s) + (u16::from(d) * inv + 127) / 255) as u8;
    PremulRgba8 {
        r: blend(src.r, dst.r),
        g: blend(src.g, dst.g),
        b: blend(src.b, dst.b),
        a: blend(src.a, dst.a),
    }
}
