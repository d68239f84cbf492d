// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`NativeGl`] over function pointers loaded by the `gl` crate.

#![allow(unsafe_code, reason = "FFI into the loaded GL entry points")]

use core::ffi::c_void;
use core::marker::PhantomData;
use core::ptr;
use std::ffi::{CStr, CString};

use gl::types::{GLboolean, GLchar, GLenum, GLint, GLsizei, GLuint};

use crate::native::{check_image, gl_size};
use crate::{consts, Error, NativeActiveAttrib, NativeGl, Result};

macro_rules! gl_call {
    ($($call:tt)*) => {{
        // SAFETY: `LoadedGl::new` requires the loaded context to be current on this thread
        // (the type is not `Send`). Pointer arguments come from live slices or locals that
        // outlive the call. Each slice has been checked to hold at least as many elements as
        // the driver accesses for the given lengths, image sizes and query names.
        unsafe { $($call)* }
    }};
}

/// Forwards to the global function pointers of the [`gl`] crate.
///
/// Not `Send` or `Sync`: GL calls act on the context current on the calling thread.
#[derive(Debug)]
pub struct LoadedGl {
    _not_send: PhantomData<*const ()>,
}

impl LoadedGl {
    /// Loads every GL entry point through `loader` and returns the binding.
    ///
    /// # Safety
    ///
    /// The context whose entry points `loader` resolves must be current on this thread for
    /// as long as the returned value is used. While it is, pixel storage parameters other
    /// than the pack and unpack alignments keep their initial values, and vertex and index
    /// data is always sourced from bound buffer objects.
    pub unsafe fn new(loader: impl FnMut(&'static str) -> *const c_void) -> Self {
        gl::load_with(loader);
        Self {
            _not_send: PhantomData,
        }
    }
}

impl LoadedGl {
    /// The current row alignment for `pname`, one of the pack or unpack alignments.
    fn alignment(&self, pname: u32) -> i32 {
        let mut value: GLint = 4;
        gl_call!(gl::GetIntegerv(pname, &mut value));
        value
    }
}

fn gl_bool(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

fn c_name(name: &str) -> Option<CString> {
    match CString::new(name) {
        Ok(name) => Some(name),
        Err(_) => {
            log::warn!("GL identifier {name:?} contains a NUL byte");
            None
        }
    }
}

/// The number of values `glGetIntegerv` writes for `pname`.
fn integer_count(pname: u32) -> Option<usize> {
    match pname {
        consts::VIEWPORT | consts::SCISSOR_BOX => Some(4),
        consts::MAX_VIEWPORT_DIMS => Some(2),
        consts::MAX_TEXTURE_SIZE
        | consts::MAX_VERTEX_ATTRIBS
        | consts::MAX_TEXTURE_IMAGE_UNITS
        | consts::MAX_RENDERBUFFER_SIZE
        | consts::CURRENT_PROGRAM
        | consts::ARRAY_BUFFER_BINDING
        | consts::ELEMENT_ARRAY_BUFFER_BINDING
        | consts::FRAMEBUFFER_BINDING
        | consts::RENDERBUFFER_BINDING
        | consts::TEXTURE_BINDING_2D
        | consts::ACTIVE_TEXTURE
        | consts::PACK_ALIGNMENT
        | consts::UNPACK_ALIGNMENT
        | consts::MAX_COLOR_ATTACHMENTS
        | consts::MAX_SAMPLES => Some(1),
        _ => None,
    }
}

/// The number of `stride`-sized elements in `values`, as a GL count.
fn element_count(operation: &'static str, values: &[f32], stride: usize) -> Result<GLsizei> {
    gl_size(operation, values.len() / stride)
}

fn slice_len<T>(data: &[T]) -> isize {
    // Rust slices never exceed `isize::MAX` bytes.
    core::mem::size_of_val(data) as isize
}

/// Reads a log or source string of at most `length` bytes, including the terminator.
fn read_string(
    name: GLuint,
    length: GLint,
    fetch: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    if length <= 0 {
        return String::new();
    }
    let mut buf = vec![0_u8; length as usize];
    let mut written: GLsizei = 0;
    gl_call!(fetch(name, length, &mut written, buf.as_mut_ptr().cast()));
    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

impl NativeGl for LoadedGl {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        gl_call!(gl::Viewport(x, y, width, height));
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        gl_call!(gl::Scissor(x, y, width, height));
    }

    fn enable(&self, cap: u32) {
        gl_call!(gl::Enable(cap));
    }

    fn disable(&self, cap: u32) {
        gl_call!(gl::Disable(cap));
    }

    fn is_enabled(&self, cap: u32) -> bool {
        gl_call!(gl::IsEnabled(cap)) == gl::TRUE
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        gl_call!(gl::ClearColor(red, green, blue, alpha));
    }

    fn clear_depth(&self, depth: f64) {
        gl_call!(gl::ClearDepth(depth));
    }

    fn clear_stencil(&self, stencil: i32) {
        gl_call!(gl::ClearStencil(stencil));
    }

    fn clear(&self, mask: u32) {
        gl_call!(gl::Clear(mask));
    }

    fn blend_func(&self, src: u32, dst: u32) {
        gl_call!(gl::BlendFunc(src, dst));
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        gl_call!(gl::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha));
    }

    fn blend_equation(&self, mode: u32) {
        gl_call!(gl::BlendEquation(mode));
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        gl_call!(gl::BlendColor(red, green, blue, alpha));
    }

    fn depth_func(&self, func: u32) {
        gl_call!(gl::DepthFunc(func));
    }

    fn depth_mask(&self, flag: bool) {
        gl_call!(gl::DepthMask(gl_bool(flag)));
    }

    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        gl_call!(gl::ColorMask(
            gl_bool(red),
            gl_bool(green),
            gl_bool(blue),
            gl_bool(alpha)
        ));
    }

    fn stencil_func(&self, func: u32, reference: i32, mask: u32) {
        gl_call!(gl::StencilFunc(func, reference, mask));
    }

    fn stencil_op(&self, stencil_fail: u32, depth_fail: u32, depth_pass: u32) {
        gl_call!(gl::StencilOp(stencil_fail, depth_fail, depth_pass));
    }

    fn stencil_mask(&self, mask: u32) {
        gl_call!(gl::StencilMask(mask));
    }

    fn cull_face(&self, mode: u32) {
        gl_call!(gl::CullFace(mode));
    }

    fn front_face(&self, mode: u32) {
        gl_call!(gl::FrontFace(mode));
    }

    fn line_width(&self, width: f32) {
        gl_call!(gl::LineWidth(width));
    }

    fn pixel_store_i(&self, pname: u32, param: i32) -> Result<()> {
        if !matches!(pname, consts::PACK_ALIGNMENT | consts::UNPACK_ALIGNMENT) {
            return Err(Error::invalid_argument(
                "glPixelStorei",
                format!("{pname:#06x} is not a pixel alignment"),
            ));
        }
        gl_call!(gl::PixelStorei(pname, param));
        Ok(())
    }

    fn flush(&self) {
        gl_call!(gl::Flush());
    }

    fn finish(&self) {
        gl_call!(gl::Finish());
    }

    fn get_error(&self) -> u32 {
        gl_call!(gl::GetError())
    }

    fn get_string(&self, name: u32) -> Option<String> {
        let ptr = gl_call!(gl::GetString(name));
        if ptr.is_null() {
            return None;
        }
        // SAFETY: non-null results of glGetString are static NUL-terminated strings.
        let text = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(text.to_string_lossy().into_owned())
    }

    fn get_integer_v(&self, pname: u32, out: &mut [i32]) -> Result<()> {
        let count = integer_count(pname).ok_or_else(|| {
            Error::invalid_argument("glGetIntegerv", format!("unknown query {pname:#06x}"))
        })?;
        if out.len() < count {
            return Err(Error::invalid_argument(
                "glGetIntegerv",
                format!("{pname:#06x} returns {count} values, the buffer holds {}", out.len()),
            ));
        }
        gl_call!(gl::GetIntegerv(pname, out.as_mut_ptr()));
        Ok(())
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        gl_call!(gl::DrawArrays(mode, first, count));
    }

    fn draw_elements(&self, mode: u32, count: i32, ty: u32, offset: usize) {
        gl_call!(gl::DrawElements(mode, count, ty, offset as *const c_void));
    }

    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        out: &mut [u8],
    ) -> Result<()> {
        let alignment = self.alignment(consts::PACK_ALIGNMENT);
        check_image("glReadPixels", width, height, format, ty, alignment, out.len())?;
        gl_call!(gl::ReadPixels(
            x,
            y,
            width,
            height,
            format,
            ty,
            out.as_mut_ptr().cast()
        ));
        Ok(())
    }

    fn gen_buffer(&self) -> u32 {
        let mut name = 0;
        gl_call!(gl::GenBuffers(1, &mut name));
        name
    }

    fn delete_buffer(&self, buffer: u32) {
        gl_call!(gl::DeleteBuffers(1, &buffer));
    }

    fn bind_buffer(&self, target: u32, buffer: u32) {
        gl_call!(gl::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        gl_call!(gl::BufferData(
            target,
            slice_len(data),
            data.as_ptr().cast(),
            usage
        ));
    }

    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        gl_call!(gl::BufferSubData(
            target,
            offset as isize,
            slice_len(data),
            data.as_ptr().cast()
        ));
    }

    fn gen_vertex_array(&self) -> u32 {
        let mut name = 0;
        gl_call!(gl::GenVertexArrays(1, &mut name));
        name
    }

    fn delete_vertex_array(&self, array: u32) {
        gl_call!(gl::DeleteVertexArrays(1, &array));
    }

    fn bind_vertex_array(&self, array: u32) {
        gl_call!(gl::BindVertexArray(array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        gl_call!(gl::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        gl_call!(gl::DisableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        gl_call!(gl::VertexAttribPointer(
            index,
            size,
            ty,
            gl_bool(normalized),
            stride,
            offset as *const c_void
        ));
    }

    fn gen_texture(&self) -> u32 {
        let mut name = 0;
        gl_call!(gl::GenTextures(1, &mut name));
        name
    }

    fn delete_texture(&self, texture: u32) {
        gl_call!(gl::DeleteTextures(1, &texture));
    }

    fn active_texture(&self, unit: u32) {
        gl_call!(gl::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: u32) {
        gl_call!(gl::BindTexture(target, texture));
    }

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
    ) -> Result<()> {
        if let Some(pixels) = pixels {
            let alignment = self.alignment(consts::UNPACK_ALIGNMENT);
            check_image("glTexImage2D", width, height, format, ty, alignment, pixels.len())?;
        }
        let data = pixels.map_or(ptr::null(), |p| p.as_ptr().cast());
        gl_call!(gl::TexImage2D(
            target,
            level,
            internal_format,
            width,
            height,
            0,
            format,
            ty,
            data
        ));
        Ok(())
    }

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
    ) -> Result<()> {
        let alignment = self.alignment(consts::UNPACK_ALIGNMENT);
        check_image("glTexSubImage2D", width, height, format, ty, alignment, pixels.len())?;
        gl_call!(gl::TexSubImage2D(
            target,
            level,
            x,
            y,
            width,
            height,
            format,
            ty,
            pixels.as_ptr().cast()
        ));
        Ok(())
    }

    fn tex_parameter_i(&self, target: u32, pname: u32, param: i32) {
        gl_call!(gl::TexParameteri(target, pname, param));
    }

    fn generate_mipmap(&self, target: u32) {
        gl_call!(gl::GenerateMipmap(target));
    }

    fn gen_framebuffer(&self) -> u32 {
        let mut name = 0;
        gl_call!(gl::GenFramebuffers(1, &mut name));
        name
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        gl_call!(gl::DeleteFramebuffers(1, &framebuffer));
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: u32) {
        gl_call!(gl::BindFramebuffer(target, framebuffer));
    }

    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        tex_target: u32,
        texture: u32,
        level: i32,
    ) {
        gl_call!(gl::FramebufferTexture2D(
            target, attachment, tex_target, texture, level
        ));
    }

    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: u32,
    ) {
        gl_call!(gl::FramebufferRenderbuffer(
            target,
            attachment,
            renderbuffer_target,
            renderbuffer
        ));
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        gl_call!(gl::CheckFramebufferStatus(target))
    }

    fn blit_framebuffer(&self, src: [i32; 4], dst: [i32; 4], mask: u32, filter: u32) {
        gl_call!(gl::BlitFramebuffer(
            src[0], src[1], src[2], src[3], dst[0], dst[1], dst[2], dst[3], mask, filter
        ));
    }

    fn gen_renderbuffer(&self) -> u32 {
        let mut name = 0;
        gl_call!(gl::GenRenderbuffers(1, &mut name));
        name
    }

    fn delete_renderbuffer(&self, renderbuffer: u32) {
        gl_call!(gl::DeleteRenderbuffers(1, &renderbuffer));
    }

    fn bind_renderbuffer(&self, target: u32, renderbuffer: u32) {
        gl_call!(gl::BindRenderbuffer(target, renderbuffer));
    }

    fn renderbuffer_storage(&self, target: u32, format: u32, width: i32, height: i32) {
        gl_call!(gl::RenderbufferStorage(target, format, width, height));
    }

    fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    ) {
        gl_call!(gl::RenderbufferStorageMultisample(
            target, samples, format, width, height
        ));
    }

    fn create_shader(&self, ty: u32) -> u32 {
        gl_call!(gl::CreateShader(ty))
    }

    fn delete_shader(&self, shader: u32) {
        gl_call!(gl::DeleteShader(shader));
    }

    fn shader_source(&self, shader: u32, source: &str) -> Result<()> {
        let ptr: *const GLchar = source.as_ptr().cast();
        let len: GLint = gl_size("glShaderSource", source.len())?;
        gl_call!(gl::ShaderSource(shader, 1, &ptr, &len));
        Ok(())
    }

    fn compile_shader(&self, shader: u32) {
        gl_call!(gl::CompileShader(shader));
    }

    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32 {
        let mut value = 0;
        gl_call!(gl::GetShaderiv(shader, pname, &mut value));
        value
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        let length = self.get_shader_iv(shader, consts::INFO_LOG_LENGTH);
        read_string(shader, length, gl::GetShaderInfoLog)
    }

    fn get_shader_source(&self, shader: u32) -> String {
        let length = self.get_shader_iv(shader, consts::SHADER_SOURCE_LENGTH);
        read_string(shader, length, gl::GetShaderSource)
    }

    fn shader_binary(&self, shaders: &[u32], format: u32, binary: &[u8]) -> Result<()> {
        let count = gl_size("glShaderBinary", shaders.len())?;
        let len = gl_size("glShaderBinary", binary.len())?;
        gl_call!(gl::ShaderBinary(
            count,
            shaders.as_ptr(),
            format,
            binary.as_ptr().cast(),
            len
        ));
        Ok(())
    }

    fn create_program(&self) -> u32 {
        gl_call!(gl::CreateProgram())
    }

    fn delete_program(&self, program: u32) {
        gl_call!(gl::DeleteProgram(program));
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        gl_call!(gl::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        gl_call!(gl::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        gl_call!(gl::LinkProgram(program));
    }

    fn validate_program(&self, program: u32) {
        gl_call!(gl::ValidateProgram(program));
    }

    fn use_program(&self, program: u32) {
        gl_call!(gl::UseProgram(program));
    }

    fn get_program_iv(&self, program: u32, pname: u32) -> i32 {
        let mut value = 0;
        gl_call!(gl::GetProgramiv(program, pname, &mut value));
        value
    }

    fn get_program_info_log(&self, program: u32) -> String {
        let length = self.get_program_iv(program, consts::INFO_LOG_LENGTH);
        read_string(program, length, gl::GetProgramInfoLog)
    }

    fn get_attrib_location(&self, program: u32, name: &str) -> i32 {
        match c_name(name) {
            Some(name) => gl_call!(gl::GetAttribLocation(program, name.as_ptr())),
            None => -1,
        }
    }

    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        if let Some(name) = c_name(name) {
            gl_call!(gl::BindAttribLocation(program, index, name.as_ptr()));
        }
    }

    fn get_active_attrib(&self, program: u32, index: u32) -> Option<NativeActiveAttrib> {
        let max_len = self.get_program_iv(program, consts::ACTIVE_ATTRIBUTE_MAX_LENGTH);
        if max_len <= 0 {
            return None;
        }
        let mut buf = vec![0_u8; max_len as usize];
        let mut written: GLsizei = 0;
        let mut size: GLint = 0;
        let mut ty: GLenum = 0;
        gl_call!(gl::GetActiveAttrib(
            program,
            index,
            max_len,
            &mut written,
            &mut size,
            &mut ty,
            buf.as_mut_ptr().cast()
        ));
        if written <= 0 {
            return None;
        }
        buf.truncate(written as usize);
        Some(NativeActiveAttrib {
            name: String::from_utf8_lossy(&buf).into_owned(),
            size,
            ty,
        })
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> i32 {
        match c_name(name) {
            Some(name) => gl_call!(gl::GetUniformLocation(program, name.as_ptr())),
            None => -1,
        }
    }

    fn uniform_1i(&self, location: i32, x: i32) {
        gl_call!(gl::Uniform1i(location, x));
    }

    fn uniform_1f(&self, location: i32, x: f32) {
        gl_call!(gl::Uniform1f(location, x));
    }

    fn uniform_2f(&self, location: i32, x: f32, y: f32) {
        gl_call!(gl::Uniform2f(location, x, y));
    }

    fn uniform_3f(&self, location: i32, x: f32, y: f32, z: f32) {
        gl_call!(gl::Uniform3f(location, x, y, z));
    }

    fn uniform_4f(&self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        gl_call!(gl::Uniform4f(location, x, y, z, w));
    }

    fn uniform_4fv(&self, location: i32, values: &[f32]) -> Result<()> {
        let count = element_count("glUniform4fv", values, 4)?;
        gl_call!(gl::Uniform4fv(location, count, values.as_ptr()));
        Ok(())
    }

    fn uniform_matrix_3fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()> {
        let count = element_count("glUniformMatrix3fv", values, 9)?;
        gl_call!(gl::UniformMatrix3fv(
            location,
            count,
            gl_bool(transpose),
            values.as_ptr()
        ));
        Ok(())
    }

    fn uniform_matrix_4fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()> {
        let count = element_count("glUniformMatrix4fv", values, 16)?;
        gl_call!(gl::UniformMatrix4fv(
            location,
            count,
            gl_bool(transpose),
            values.as_ptr()
        ));
        Ok(())
    }
}
