// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raw native binding a backend adapter forwards to.

use crate::consts::*;
use crate::{Error, Result};

/// Raw GL entry points, taking native integer enums and object names.
///
/// This mirrors the C API closely, and every call acts on whatever native context is current
/// on the calling thread. Backend adapters are the only intended callers; they translate
/// neutral values before forwarding.
///
/// Calls where the driver accesses client memory through a pointer return a [`Result`].
/// An implementation refuses a slice shorter than what the driver would touch with
/// [`Error::InvalidArgument`], and never truncates a length it cannot express.
///
/// With the `gl` feature enabled, [`LoadedGl`](crate::LoadedGl) implements this trait over
/// function pointers loaded by the `gl` crate. Embedders with their own loader implement it
/// directly.
pub trait NativeGl {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32);
    fn enable(&self, cap: u32);
    fn disable(&self, cap: u32);
    fn is_enabled(&self, cap: u32) -> bool;
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear_depth(&self, depth: f64);
    fn clear_stencil(&self, stencil: i32);
    fn clear(&self, mask: u32);
    fn blend_func(&self, src: u32, dst: u32);
    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    fn blend_equation(&self, mode: u32);
    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn depth_func(&self, func: u32);
    fn depth_mask(&self, flag: bool);
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool);
    fn stencil_func(&self, func: u32, reference: i32, mask: u32);
    fn stencil_op(&self, stencil_fail: u32, depth_fail: u32, depth_pass: u32);
    fn stencil_mask(&self, mask: u32);
    fn cull_face(&self, mode: u32);
    fn front_face(&self, mode: u32);
    fn line_width(&self, width: f32);
    /// Only the pack and unpack alignments are set through this call.
    fn pixel_store_i(&self, pname: u32, param: i32) -> Result<()>;
    fn flush(&self);
    fn finish(&self);

    fn get_error(&self) -> u32;
    /// Returns `None` when the driver hands back a null string.
    fn get_string(&self, name: u32) -> Option<String>;
    fn get_integer_v(&self, pname: u32, out: &mut [i32]) -> Result<()>;

    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    /// `offset` is a byte offset into the bound element array buffer.
    fn draw_elements(&self, mode: u32, count: i32, ty: u32, offset: usize);
    #[allow(clippy::too_many_arguments, reason = "mirrors glReadPixels")]
    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        out: &mut [u8],
    ) -> Result<()>;

    /// Returns 0 if the driver could not create a name.
    fn gen_buffer(&self) -> u32;
    fn delete_buffer(&self, buffer: u32);
    fn bind_buffer(&self, target: u32, buffer: u32);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]);

    fn gen_vertex_array(&self) -> u32;
    fn delete_vertex_array(&self, array: u32);
    fn bind_vertex_array(&self, array: u32);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn disable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: usize,
    );

    fn gen_texture(&self) -> u32;
    fn delete_texture(&self, texture: u32);
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: u32);
    #[allow(clippy::too_many_arguments, reason = "mirrors glTexImage2D")]
    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) -> Result<()>;
    #[allow(clippy::too_many_arguments, reason = "mirrors glTexSubImage2D")]
    fn tex_sub_image_2d(
        &self,
        target: u32,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    ) -> Result<()>;
    fn tex_parameter_i(&self, target: u32, pname: u32, param: i32);
    fn generate_mipmap(&self, target: u32);

    fn gen_framebuffer(&self) -> u32;
    fn delete_framebuffer(&self, framebuffer: u32);
    fn bind_framebuffer(&self, target: u32, framebuffer: u32);
    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        tex_target: u32,
        texture: u32,
        level: i32,
    );
    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: u32,
    );
    fn check_framebuffer_status(&self, target: u32) -> u32;
    /// Rectangles are `[x0, y0, x1, y1]`.
    fn blit_framebuffer(&self, src: [i32; 4], dst: [i32; 4], mask: u32, filter: u32);
    fn gen_renderbuffer(&self) -> u32;
    fn delete_renderbuffer(&self, renderbuffer: u32);
    fn bind_renderbuffer(&self, target: u32, renderbuffer: u32);
    fn renderbuffer_storage(&self, target: u32, format: u32, width: i32, height: i32);
    fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    );

    /// Returns 0 if the driver could not create a shader.
    fn create_shader(&self, ty: u32) -> u32;
    fn delete_shader(&self, shader: u32);
    fn shader_source(&self, shader: u32, source: &str) -> Result<()>;
    fn compile_shader(&self, shader: u32);
    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32;
    fn get_shader_info_log(&self, shader: u32) -> String;
    fn get_shader_source(&self, shader: u32) -> String;
    fn shader_binary(&self, shaders: &[u32], format: u32, binary: &[u8]) -> Result<()>;
    /// Returns 0 if the driver could not create a program.
    fn create_program(&self) -> u32;
    fn delete_program(&self, program: u32);
    fn attach_shader(&self, program: u32, shader: u32);
    fn detach_shader(&self, program: u32, shader: u32);
    fn link_program(&self, program: u32);
    fn validate_program(&self, program: u32);
    fn use_program(&self, program: u32);
    fn get_program_iv(&self, program: u32, pname: u32) -> i32;
    fn get_program_info_log(&self, program: u32) -> String;
    /// Returns -1 if `name` is not an active attribute.
    fn get_attrib_location(&self, program: u32, name: &str) -> i32;
    fn bind_attrib_location(&self, program: u32, index: u32, name: &str);
    fn get_active_attrib(&self, program: u32, index: u32) -> Option<NativeActiveAttrib>;
    /// Returns -1 if `name` is not an active uniform.
    fn get_uniform_location(&self, program: u32, name: &str) -> i32;

    fn uniform_1i(&self, location: i32, x: i32);
    fn uniform_1f(&self, location: i32, x: f32);
    fn uniform_2f(&self, location: i32, x: f32, y: f32);
    fn uniform_3f(&self, location: i32, x: f32, y: f32, z: f32);
    fn uniform_4f(&self, location: i32, x: f32, y: f32, z: f32, w: f32);
    fn uniform_4fv(&self, location: i32, values: &[f32]) -> Result<()>;
    fn uniform_matrix_3fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()>;
    fn uniform_matrix_4fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()>;
}

/// An active attribute as the driver describes it, before type translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeActiveAttrib {
    pub name: String,
    pub size: i32,
    pub ty: u32,
}

/// Bytes per pixel of client data laid out as `format` and `ty`.
fn bytes_per_pixel(format: u32, ty: u32) -> Option<usize> {
    let components = match format {
        ALPHA | RED | LUMINANCE | DEPTH_COMPONENT => 1,
        LUMINANCE_ALPHA => 2,
        RGB => 3,
        RGBA | BGRA => 4,
        _ => return None,
    };
    match ty {
        BYTE | UNSIGNED_BYTE => Some(components),
        SHORT | UNSIGNED_SHORT => Some(components * 2),
        INT | UNSIGNED_INT | FLOAT => Some(components * 4),
        UNSIGNED_SHORT_5_6_5 | UNSIGNED_SHORT_4_4_4_4 | UNSIGNED_SHORT_5_5_5_1 => Some(2),
        UNSIGNED_INT_8_8_8_8_REV => Some(4),
        _ => None,
    }
}

/// The number of bytes the driver reads or writes for a `width` by `height` image.
///
/// Rows start on `alignment`-byte boundaries and the last row is not padded. Row length and
/// skip parameters are at their initial value of zero.
pub(crate) fn image_size(
    operation: &'static str,
    width: i32,
    height: i32,
    format: u32,
    ty: u32,
    alignment: i32,
) -> Result<usize> {
    let (Ok(columns), Ok(rows)) = (usize::try_from(width), usize::try_from(height)) else {
        return Err(Error::invalid_argument(
            operation,
            format!("negative image size {width}x{height}"),
        ));
    };
    let pixel = bytes_per_pixel(format, ty).ok_or_else(|| {
        Error::invalid_argument(
            operation,
            format!("no client layout for format {format:#06x} with type {ty:#06x}"),
        )
    })?;
    if columns == 0 || rows == 0 {
        return Ok(0);
    }
    let alignment = usize::try_from(alignment).unwrap_or(1).clamp(1, 8);
    columns
        .checked_mul(pixel)
        .and_then(|row| {
            let stride = row.checked_next_multiple_of(alignment)?;
            stride.checked_mul(rows - 1)?.checked_add(row)
        })
        .ok_or_else(|| {
            Error::invalid_argument(operation, format!("{width}x{height} image is too large"))
        })
}

/// Fails unless `len` bytes hold the image [`image_size`] describes.
pub(crate) fn check_image(
    operation: &'static str,
    width: i32,
    height: i32,
    format: u32,
    ty: u32,
    alignment: i32,
    len: usize,
) -> Result<()> {
    let needed = image_size(operation, width, height, format, ty, alignment)?;
    if len < needed {
        return Err(Error::invalid_argument(
            operation,
            format!("{width}x{height} image needs {needed} bytes, the buffer holds {len}"),
        ));
    }
    Ok(())
}

/// Converts a length or count to the signed size type GL takes.
pub(crate) fn gl_size(operation: &'static str, len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| {
        Error::invalid_argument(operation, format!("{len} exceeds the largest GL size"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tight_rows() {
        assert_eq!(image_size("t", 2, 2, RGBA, UNSIGNED_BYTE, 4).unwrap(), 16);
        assert_eq!(image_size("t", 3, 2, RGB, UNSIGNED_BYTE, 1).unwrap(), 18);
        assert_eq!(image_size("t", 4, 4, RGB, UNSIGNED_SHORT_5_6_5, 4).unwrap(), 32);
        assert_eq!(image_size("t", 0, 100, RGBA, FLOAT, 4).unwrap(), 0);
    }

    #[test]
    fn padded_rows() {
        // Rows of 9 bytes start every 12; the last row is not padded.
        assert_eq!(image_size("t", 3, 2, RGB, UNSIGNED_BYTE, 4).unwrap(), 21);
        assert_eq!(image_size("t", 1, 3, ALPHA, UNSIGNED_BYTE, 8).unwrap(), 17);
        assert!(check_image("t", 3, 2, RGB, UNSIGNED_BYTE, 4, 20).is_err());
        assert!(check_image("t", 3, 2, RGB, UNSIGNED_BYTE, 4, 21).is_ok());
    }

    #[test]
    fn rejected_layouts() {
        assert!(matches!(
            image_size("glReadPixels", -1, 4, RGBA, UNSIGNED_BYTE, 4),
            Err(Error::InvalidArgument {
                operation: "glReadPixels",
                ..
            })
        ));
        assert!(image_size("t", 1, 1, RGBA, DOUBLE, 4).is_err());
        assert!(image_size("t", 1, 1, 0xFFFF, UNSIGNED_BYTE, 4).is_err());
        assert!(image_size("t", i32::MAX, i32::MAX, RGBA, FLOAT, 4).is_err());
    }

    #[test]
    fn oversized_lengths() {
        assert_eq!(gl_size("glShaderSource", 12).unwrap(), 12);
        let too_long = usize::try_from(i32::MAX).unwrap() + 1;
        assert!(matches!(
            gl_size("glShaderSource", too_long),
            Err(Error::InvalidArgument {
                operation: "glShaderSource",
                ..
            })
        ));
    }
}
