// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    ActiveAttrib, Backend, BlendEquation, BlendFactor, BufferId, BufferTarget, BufferUsage,
    Capability, ClearMask, ColorMask, CompareFunc, CullFace, ErrorCode, FramebufferAttachment,
    FramebufferId, FramebufferStatus, FramebufferTarget, FrontFace, IndexType, IntegerQuery,
    IntegerVectorQuery, InternalFormat, PixelFormat, PixelType, PrimitiveMode, ProgramId,
    ProgramParameter, RenderbufferFormat, RenderbufferId, Result, ShaderId, ShaderParameter,
    ShaderType, StencilOp, StringName, TexImageTarget, TexParam, TextureFilter, TextureId,
    TextureTarget, UniformLocation, VertexArrayId, VertexDataType,
};

/// The GL capability interface.
///
/// One method per GL entry point the renderer needs. Every enum argument is a neutral
/// variant; the implementing backend translates it to its native constant or fails with
/// [`Error::InvalidEnumMapping`](crate::Error::InvalidEnumMapping). Operations the backend's
/// platform cannot perform at all fail with
/// [`Error::UnsupportedCapability`](crate::Error::UnsupportedCapability), so callers can
/// branch on platform support.
///
/// Object handles returned by the `gen_*`/`create_*` methods are owned by the caller, who is
/// responsible for deleting them.
///
/// The trait is object safe, so a backend can also be selected at runtime through `&dyn Gl`.
pub trait Gl {
    /// The platform flavour this implementation targets.
    fn backend(&self) -> Backend;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;
    fn enable(&self, cap: Capability) -> Result<()>;
    fn disable(&self, cap: Capability) -> Result<()>;
    fn is_enabled(&self, cap: Capability) -> Result<bool>;
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Result<()>;
    fn clear_depth(&self, depth: f64) -> Result<()>;
    fn clear_stencil(&self, stencil: i32) -> Result<()>;
    fn clear(&self, mask: ClearMask) -> Result<()>;
    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) -> Result<()>;
    fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) -> Result<()>;
    fn blend_equation(&self, mode: BlendEquation) -> Result<()>;
    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Result<()>;
    fn depth_func(&self, func: CompareFunc) -> Result<()>;
    fn depth_mask(&self, write: bool) -> Result<()>;
    fn color_mask(&self, mask: ColorMask) -> Result<()>;
    fn stencil_func(&self, func: CompareFunc, reference: i32, mask: u32) -> Result<()>;
    fn stencil_op(&self, stencil_fail: StencilOp, depth_fail: StencilOp, depth_pass: StencilOp)
        -> Result<()>;
    fn stencil_mask(&self, mask: u32) -> Result<()>;
    fn cull_face(&self, face: CullFace) -> Result<()>;
    fn front_face(&self, face: FrontFace) -> Result<()>;
    fn line_width(&self, width: f32) -> Result<()>;
    /// Sets both the pack and unpack row alignment, in bytes (1, 2, 4 or 8).
    fn pixel_store_alignment(&self, pack: i32, unpack: i32) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn finish(&self) -> Result<()>;

    /// Pops the oldest error flag from the driver.
    fn get_error(&self) -> Result<ErrorCode>;
    fn get_string(&self, name: StringName) -> Result<String>;
    fn get_integer(&self, query: IntegerQuery) -> Result<i32>;
    fn get_integer_v(&self, query: IntegerVectorQuery) -> Result<Vec<i32>>;

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) -> Result<()>;
    /// Draws from the bound element array buffer, starting `offset` bytes in.
    fn draw_elements(
        &self,
        mode: PrimitiveMode,
        count: i32,
        ty: IndexType,
        offset: usize,
    ) -> Result<()>;
    #[allow(clippy::too_many_arguments, reason = "mirrors glReadPixels")]
    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        out: &mut [u8],
    ) -> Result<()>;

    fn gen_buffer(&self) -> Result<BufferId>;
    fn delete_buffer(&self, buffer: BufferId) -> Result<()>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferId>) -> Result<()>;
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()>;
    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) -> Result<()>;

    fn gen_vertex_array(&self) -> Result<VertexArrayId>;
    fn delete_vertex_array(&self, array: VertexArrayId) -> Result<()>;
    fn bind_vertex_array(&self, array: Option<VertexArrayId>) -> Result<()>;
    fn enable_vertex_attrib_array(&self, index: u32) -> Result<()>;
    fn disable_vertex_attrib_array(&self, index: u32) -> Result<()>;
    /// Describes attribute `index` as read from the bound array buffer at byte `offset`.
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: VertexDataType,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) -> Result<()>;

    fn gen_texture(&self) -> Result<TextureId>;
    fn delete_texture(&self, texture: TextureId) -> Result<()>;
    /// Selects texture unit `unit` (0-based).
    fn active_texture(&self, unit: u32) -> Result<()>;
    fn bind_texture(&self, target: TextureTarget, texture: Option<TextureId>) -> Result<()>;
    /// Allocates and optionally fills level `level` of the bound texture.
    #[allow(clippy::too_many_arguments, reason = "mirrors glTexImage2D")]
    fn tex_image_2d(
        &self,
        target: TexImageTarget,
        level: i32,
        internal_format: InternalFormat,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        pixels: Option<&[u8]>,
    ) -> Result<()>;
    #[allow(clippy::too_many_arguments, reason = "mirrors glTexSubImage2D")]
    fn tex_sub_image_2d(
        &self,
        target: TexImageTarget,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        pixels: &[u8],
    ) -> Result<()>;
    fn tex_parameter(&self, target: TextureTarget, param: TexParam) -> Result<()>;
    fn generate_mipmap(&self, target: TextureTarget) -> Result<()>;

    fn gen_framebuffer(&self) -> Result<FramebufferId>;
    fn delete_framebuffer(&self, framebuffer: FramebufferId) -> Result<()>;
    fn bind_framebuffer(
        &self,
        target: FramebufferTarget,
        framebuffer: Option<FramebufferId>,
    ) -> Result<()>;
    fn framebuffer_texture_2d(
        &self,
        target: FramebufferTarget,
        attachment: FramebufferAttachment,
        tex_target: TexImageTarget,
        texture: Option<TextureId>,
        level: i32,
    ) -> Result<()>;
    fn framebuffer_renderbuffer(
        &self,
        target: FramebufferTarget,
        attachment: FramebufferAttachment,
        renderbuffer: Option<RenderbufferId>,
    ) -> Result<()>;
    fn check_framebuffer_status(&self, target: FramebufferTarget) -> Result<FramebufferStatus>;
    /// Copies `src` of the read framebuffer to `dst` of the draw framebuffer.
    ///
    /// Rectangles are `[x0, y0, x1, y1]`. Only `Nearest` and `Linear` filters are accepted.
    fn blit_framebuffer(
        &self,
        src: [i32; 4],
        dst: [i32; 4],
        mask: ClearMask,
        filter: TextureFilter,
    ) -> Result<()>;
    fn gen_renderbuffer(&self) -> Result<RenderbufferId>;
    fn delete_renderbuffer(&self, renderbuffer: RenderbufferId) -> Result<()>;
    fn bind_renderbuffer(&self, renderbuffer: Option<RenderbufferId>) -> Result<()>;
    fn renderbuffer_storage(
        &self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<()>;
    fn renderbuffer_storage_multisample(
        &self,
        samples: i32,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<()>;

    fn create_shader(&self, ty: ShaderType) -> Result<ShaderId>;
    fn delete_shader(&self, shader: ShaderId) -> Result<()>;
    fn shader_source(&self, shader: ShaderId, source: &str) -> Result<()>;
    fn compile_shader(&self, shader: ShaderId) -> Result<()>;
    fn get_shader_parameter(&self, shader: ShaderId, param: ShaderParameter) -> Result<i32>;
    fn get_shader_info_log(&self, shader: ShaderId) -> Result<String>;
    /// Retrieves the source text attached to `shader`.
    fn get_shader_source(&self, shader: ShaderId) -> Result<String>;
    /// Uploads a precompiled binary. `format` is a vendor-specific value reported by the
    /// driver, so it is passed through untranslated.
    fn shader_binary(&self, shaders: &[ShaderId], format: u32, binary: &[u8]) -> Result<()>;
    fn create_program(&self) -> Result<ProgramId>;
    fn delete_program(&self, program: ProgramId) -> Result<()>;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId) -> Result<()>;
    fn detach_shader(&self, program: ProgramId, shader: ShaderId) -> Result<()>;
    fn link_program(&self, program: ProgramId) -> Result<()>;
    fn validate_program(&self, program: ProgramId) -> Result<()>;
    fn use_program(&self, program: Option<ProgramId>) -> Result<()>;
    fn get_program_parameter(&self, program: ProgramId, param: ProgramParameter) -> Result<i32>;
    fn get_program_info_log(&self, program: ProgramId) -> Result<String>;
    /// Returns `None` if `name` is not an active attribute.
    fn get_attrib_location(&self, program: ProgramId, name: &str) -> Result<Option<u32>>;
    fn bind_attrib_location(&self, program: ProgramId, index: u32, name: &str) -> Result<()>;
    fn get_active_attrib(&self, program: ProgramId, index: u32) -> Result<ActiveAttrib>;
    /// Returns `None` if `name` is not an active uniform.
    fn get_uniform_location(
        &self,
        program: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>>;

    fn uniform_1i(&self, location: UniformLocation, x: i32) -> Result<()>;
    fn uniform_1f(&self, location: UniformLocation, x: f32) -> Result<()>;
    fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) -> Result<()>;
    fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) -> Result<()>;
    fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32)
        -> Result<()>;
    /// Uploads `values.len() / 4` consecutive `vec4`s.
    fn uniform_4fv(&self, location: UniformLocation, values: &[f32]) -> Result<()>;
    fn uniform_matrix_3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) -> Result<()>;
    fn uniform_matrix_4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) -> Result<()>;

    /// Resolves a shader source by logical path, applying this backend's packaging rules.
    fn load_source(&self, path: &str) -> Result<String>;
}
