// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding from the neutral interface to a native binding.

use core::marker::PhantomData;
use std::path::PathBuf;

use crate::consts::{self, clear_mask_bits};
use crate::native::{check_image, gl_size};
use crate::{
    ActiveAttrib, AttributeType, Backend, BlendEquation, BlendFactor, BufferId, BufferTarget,
    BufferUsage, Capability, ClearMask, ColorMask, CompareFunc, CullFace, Error, ErrorCode,
    FramebufferAttachment, FramebufferId, FramebufferStatus, FramebufferTarget, FrontFace, Gl,
    IndexType, IntegerQuery, IntegerVectorQuery, InternalFormat, NativeGl, PixelFormat,
    PixelType, PrimitiveMode, ProgramId, ProgramParameter, RenderbufferFormat, RenderbufferId,
    Result, ShaderId, ShaderParameter, ShaderRoot, ShaderType, StencilOp, StringName,
    TexImageTarget, TexParam, TextureFilter, TextureId, TextureTarget, UniformLocation,
    VertexArrayId, VertexDataType,
};

mod sealed {
    pub trait Sealed {}
}

/// Whole operations that a platform may lack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ShaderSourceRetrieval,
    ActiveAttribIntrospection,
    ShaderBinary,
    BlitFramebuffer,
    MultisampleRenderbuffer,
    VertexArrayObjects,
    TransposedMatrixUpload,
}

impl Operation {
    pub const ALL: &'static [Self] = &[
        Self::ShaderSourceRetrieval,
        Self::ActiveAttribIntrospection,
        Self::ShaderBinary,
        Self::BlitFramebuffer,
        Self::MultisampleRenderbuffer,
        Self::VertexArrayObjects,
        Self::TransposedMatrixUpload,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ShaderSourceRetrieval => "shader source retrieval",
            Self::ActiveAttribIntrospection => "active attribute introspection",
            Self::ShaderBinary => "binary shader upload",
            Self::BlitFramebuffer => "framebuffer blit",
            Self::MultisampleRenderbuffer => "multisample renderbuffer storage",
            Self::VertexArrayObjects => "vertex array objects",
            Self::TransposedMatrixUpload => "transposed matrix upload",
        }
    }
}

/// The translation tables of one GL flavour.
///
/// Each neutral-to-native function is a total `match` over the neutral enum. Variants the
/// platform cannot express return [`Error::UnsupportedCapability`]; combinations with no
/// native meaning return [`Error::InvalidEnumMapping`]. The native-to-neutral functions fail
/// with [`Error::UnknownDriverStatus`] for codes outside the platform's set.
///
/// This trait is sealed; [`Desktop`](crate::Desktop) and [`Es2`](crate::Es2) are the only
/// implementations.
pub trait Dialect: sealed::Sealed + Send + Sync + 'static {
    const BACKEND: Backend;

    /// Fails if the platform lacks `op` entirely.
    fn require(op: Operation) -> Result<()>;

    /// Applies the platform's packaging rules to a shader source read from disk.
    fn package_source(source: String) -> String;

    fn blend_factor(value: BlendFactor) -> Result<u32>;
    fn blend_equation(value: BlendEquation) -> Result<u32>;
    fn buffer_target(value: BufferTarget) -> Result<u32>;
    fn buffer_usage(value: BufferUsage) -> Result<u32>;
    fn texture_target(value: TextureTarget) -> Result<u32>;
    fn tex_image_target(value: TexImageTarget) -> Result<u32>;
    /// Returns the native parameter name and value.
    fn tex_param(value: TexParam) -> Result<(u32, i32)>;
    fn pixel_format(value: PixelFormat) -> Result<u32>;
    fn internal_format(value: InternalFormat) -> Result<u32>;
    fn pixel_type(value: PixelType) -> Result<u32>;
    fn vertex_data_type(value: VertexDataType) -> Result<u32>;
    fn index_type(value: IndexType) -> Result<u32>;
    fn shader_type(value: ShaderType) -> Result<u32>;
    fn primitive_mode(value: PrimitiveMode) -> Result<u32>;
    fn capability(value: Capability) -> Result<u32>;
    fn compare_func(value: CompareFunc) -> Result<u32>;
    fn stencil_op(value: StencilOp) -> Result<u32>;
    fn cull_face(value: CullFace) -> Result<u32>;
    fn front_face(value: FrontFace) -> Result<u32>;
    fn framebuffer_target(value: FramebufferTarget) -> Result<u32>;
    fn framebuffer_attachment(value: FramebufferAttachment) -> Result<u32>;
    fn framebuffer_status(value: FramebufferStatus) -> Result<u32>;
    fn error_code(value: ErrorCode) -> Result<u32>;
    fn string_name(value: StringName) -> Result<u32>;
    fn integer_query(value: IntegerQuery) -> Result<u32>;
    fn integer_vector_query(value: IntegerVectorQuery) -> Result<u32>;
    fn shader_parameter(value: ShaderParameter) -> Result<u32>;
    fn program_parameter(value: ProgramParameter) -> Result<u32>;
    fn renderbuffer_format(value: RenderbufferFormat) -> Result<u32>;
    fn blit_filter(value: TextureFilter) -> Result<u32>;

    fn framebuffer_status_from_native(code: u32) -> Result<FramebufferStatus>;
    fn error_code_from_native(code: u32) -> Result<ErrorCode>;
    fn string_name_from_native(code: u32) -> Result<StringName>;
    fn attribute_type_from_native(code: u32) -> Result<AttributeType>;
}

impl sealed::Sealed for crate::Desktop {}
impl sealed::Sealed for crate::Es2 {}

/// Helper for dialects: the error for a variant the platform cannot express.
pub(crate) fn unsupported<T>(operation: &'static str, backend: Backend) -> Result<T> {
    Err(Error::UnsupportedCapability { operation, backend })
}

/// A backend adapter: translates neutral calls with dialect `D` and forwards them to `N`.
///
/// The adapter holds no GL state of its own, so it is cheap to construct per frame.
/// Use the [`DesktopGl`](crate::DesktopGl) and [`Es2Gl`](crate::Es2Gl) aliases.
#[derive(Debug, Clone)]
pub struct Adapter<N, D> {
    native: N,
    shader_root: ShaderRoot,
    dialect: PhantomData<D>,
}

impl<N: NativeGl, D: Dialect> Adapter<N, D> {
    /// Creates an adapter forwarding to `native`, loading shader sources relative to the
    /// working directory.
    pub fn new(native: N) -> Self {
        Self {
            native,
            shader_root: ShaderRoot::default(),
            dialect: PhantomData,
        }
    }

    /// Sets the directory `load_source` resolves logical paths against.
    pub fn with_shader_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.shader_root = ShaderRoot::new(root);
        self
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn into_native(self) -> N {
        self.native
    }

    fn created(&self, operation: &'static str, name: u32) -> Result<u32> {
        if name == 0 {
            log::warn!("{operation} returned no object on the {} backend", D::BACKEND);
            return Err(Error::Driver {
                operation,
                message: "driver returned no object name".into(),
            });
        }
        Ok(name)
    }

    /// Fails unless `len` bytes hold the described image under the current row alignment.
    #[allow(clippy::too_many_arguments, reason = "the full image description")]
    fn check_pixels(
        &self,
        operation: &'static str,
        alignment: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        len: usize,
    ) -> Result<()> {
        let mut value = [4_i32];
        self.native.get_integer_v(alignment, &mut value)?;
        check_image(operation, width, height, format, ty, value[0], len)
    }
}

fn check_alignment(value: i32) -> Result<()> {
    if matches!(value, 1 | 2 | 4 | 8) {
        Ok(())
    } else {
        Err(Error::invalid_argument(
            "glPixelStorei",
            format!("alignment {value} is not 1, 2, 4 or 8"),
        ))
    }
}

fn check_elements(operation: &'static str, values: &[f32], stride: usize) -> Result<()> {
    gl_size(operation, values.len() / stride).map(drop)
}

impl<N: NativeGl, D: Dialect> Gl for Adapter<N, D> {
    fn backend(&self) -> Backend {
        D::BACKEND
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.native.viewport(x, y, width, height);
        Ok(())
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.native.scissor(x, y, width, height);
        Ok(())
    }

    fn enable(&self, cap: Capability) -> Result<()> {
        self.native.enable(D::capability(cap)?);
        Ok(())
    }

    fn disable(&self, cap: Capability) -> Result<()> {
        self.native.disable(D::capability(cap)?);
        Ok(())
    }

    fn is_enabled(&self, cap: Capability) -> Result<bool> {
        Ok(self.native.is_enabled(D::capability(cap)?))
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Result<()> {
        self.native.clear_color(red, green, blue, alpha);
        Ok(())
    }

    fn clear_depth(&self, depth: f64) -> Result<()> {
        self.native.clear_depth(depth);
        Ok(())
    }

    fn clear_stencil(&self, stencil: i32) -> Result<()> {
        self.native.clear_stencil(stencil);
        Ok(())
    }

    fn clear(&self, mask: ClearMask) -> Result<()> {
        self.native.clear(clear_mask_bits(mask));
        Ok(())
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) -> Result<()> {
        self.native
            .blend_func(D::blend_factor(src)?, D::blend_factor(dst)?);
        Ok(())
    }

    fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) -> Result<()> {
        self.native.blend_func_separate(
            D::blend_factor(src_rgb)?,
            D::blend_factor(dst_rgb)?,
            D::blend_factor(src_alpha)?,
            D::blend_factor(dst_alpha)?,
        );
        Ok(())
    }

    fn blend_equation(&self, mode: BlendEquation) -> Result<()> {
        self.native.blend_equation(D::blend_equation(mode)?);
        Ok(())
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) -> Result<()> {
        self.native.blend_color(red, green, blue, alpha);
        Ok(())
    }

    fn depth_func(&self, func: CompareFunc) -> Result<()> {
        self.native.depth_func(D::compare_func(func)?);
        Ok(())
    }

    fn depth_mask(&self, write: bool) -> Result<()> {
        self.native.depth_mask(write);
        Ok(())
    }

    fn color_mask(&self, mask: ColorMask) -> Result<()> {
        self.native
            .color_mask(mask.red, mask.green, mask.blue, mask.alpha);
        Ok(())
    }

    fn stencil_func(&self, func: CompareFunc, reference: i32, mask: u32) -> Result<()> {
        self.native
            .stencil_func(D::compare_func(func)?, reference, mask);
        Ok(())
    }

    fn stencil_op(
        &self,
        stencil_fail: StencilOp,
        depth_fail: StencilOp,
        depth_pass: StencilOp,
    ) -> Result<()> {
        self.native.stencil_op(
            D::stencil_op(stencil_fail)?,
            D::stencil_op(depth_fail)?,
            D::stencil_op(depth_pass)?,
        );
        Ok(())
    }

    fn stencil_mask(&self, mask: u32) -> Result<()> {
        self.native.stencil_mask(mask);
        Ok(())
    }

    fn cull_face(&self, face: CullFace) -> Result<()> {
        self.native.cull_face(D::cull_face(face)?);
        Ok(())
    }

    fn front_face(&self, face: FrontFace) -> Result<()> {
        self.native.front_face(D::front_face(face)?);
        Ok(())
    }

    fn line_width(&self, width: f32) -> Result<()> {
        self.native.line_width(width);
        Ok(())
    }

    fn pixel_store_alignment(&self, pack: i32, unpack: i32) -> Result<()> {
        check_alignment(pack)?;
        check_alignment(unpack)?;
        self.native.pixel_store_i(consts::PACK_ALIGNMENT, pack)?;
        self.native.pixel_store_i(consts::UNPACK_ALIGNMENT, unpack)
    }

    fn flush(&self) -> Result<()> {
        self.native.flush();
        Ok(())
    }

    fn finish(&self) -> Result<()> {
        self.native.finish();
        Ok(())
    }

    fn get_error(&self) -> Result<ErrorCode> {
        D::error_code_from_native(self.native.get_error())
    }

    fn get_string(&self, name: StringName) -> Result<String> {
        let native = D::string_name(name)?;
        // A null string only happens without a current context, or for an invalid name.
        self.native.get_string(native).ok_or_else(|| Error::Driver {
            operation: "glGetString",
            message: format!("driver returned no string for {name:?}"),
        })
    }

    fn get_integer(&self, query: IntegerQuery) -> Result<i32> {
        let mut out = [0_i32; 1];
        self.native.get_integer_v(D::integer_query(query)?, &mut out)?;
        Ok(out[0])
    }

    fn get_integer_v(&self, query: IntegerVectorQuery) -> Result<Vec<i32>> {
        let mut out = vec![0_i32; query.len()];
        self.native
            .get_integer_v(D::integer_vector_query(query)?, &mut out)?;
        Ok(out)
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) -> Result<()> {
        self.native
            .draw_arrays(D::primitive_mode(mode)?, first, count);
        Ok(())
    }

    fn draw_elements(
        &self,
        mode: PrimitiveMode,
        count: i32,
        ty: IndexType,
        offset: usize,
    ) -> Result<()> {
        self.native
            .draw_elements(D::primitive_mode(mode)?, count, D::index_type(ty)?, offset);
        Ok(())
    }

    fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        out: &mut [u8],
    ) -> Result<()> {
        let format = D::pixel_format(format)?;
        let ty = D::pixel_type(ty)?;
        self.check_pixels(
            "glReadPixels",
            consts::PACK_ALIGNMENT,
            width,
            height,
            format,
            ty,
            out.len(),
        )?;
        self.native
            .read_pixels(x, y, width, height, format, ty, out)
    }

    fn gen_buffer(&self) -> Result<BufferId> {
        self.created("glGenBuffers", self.native.gen_buffer())
            .map(BufferId)
    }

    fn delete_buffer(&self, buffer: BufferId) -> Result<()> {
        self.native.delete_buffer(buffer.0);
        Ok(())
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferId>) -> Result<()> {
        self.native
            .bind_buffer(D::buffer_target(target)?, buffer.map_or(0, |b| b.0));
        Ok(())
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()> {
        self.native
            .buffer_data(D::buffer_target(target)?, data, D::buffer_usage(usage)?);
        Ok(())
    }

    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) -> Result<()> {
        self.native
            .buffer_sub_data(D::buffer_target(target)?, offset, data);
        Ok(())
    }

    fn gen_vertex_array(&self) -> Result<VertexArrayId> {
        D::require(Operation::VertexArrayObjects)?;
        self.created("glGenVertexArrays", self.native.gen_vertex_array())
            .map(VertexArrayId)
    }

    fn delete_vertex_array(&self, array: VertexArrayId) -> Result<()> {
        D::require(Operation::VertexArrayObjects)?;
        self.native.delete_vertex_array(array.0);
        Ok(())
    }

    fn bind_vertex_array(&self, array: Option<VertexArrayId>) -> Result<()> {
        D::require(Operation::VertexArrayObjects)?;
        self.native.bind_vertex_array(array.map_or(0, |a| a.0));
        Ok(())
    }

    fn enable_vertex_attrib_array(&self, index: u32) -> Result<()> {
        self.native.enable_vertex_attrib_array(index);
        Ok(())
    }

    fn disable_vertex_attrib_array(&self, index: u32) -> Result<()> {
        self.native.disable_vertex_attrib_array(index);
        Ok(())
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: VertexDataType,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) -> Result<()> {
        self.native.vertex_attrib_pointer(
            index,
            size,
            D::vertex_data_type(ty)?,
            normalized,
            stride,
            offset,
        );
        Ok(())
    }

    fn gen_texture(&self) -> Result<TextureId> {
        self.created("glGenTextures", self.native.gen_texture())
            .map(TextureId)
    }

    fn delete_texture(&self, texture: TextureId) -> Result<()> {
        self.native.delete_texture(texture.0);
        Ok(())
    }

    fn active_texture(&self, unit: u32) -> Result<()> {
        if unit >= consts::MAX_TEXTURE_UNITS {
            return Err(Error::invalid_mapping("TextureUnit", unit, D::BACKEND));
        }
        self.native.active_texture(consts::TEXTURE0 + unit);
        Ok(())
    }

    fn bind_texture(&self, target: TextureTarget, texture: Option<TextureId>) -> Result<()> {
        self.native
            .bind_texture(D::texture_target(target)?, texture.map_or(0, |t| t.0));
        Ok(())
    }

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
    ) -> Result<()> {
        let target = D::tex_image_target(target)?;
        // glTexImage2D takes the internal format as a signed integer; every constant fits.
        let internal_format = D::internal_format(internal_format)? as i32;
        let format = D::pixel_format(format)?;
        let ty = D::pixel_type(ty)?;
        if let Some(pixels) = pixels {
            self.check_pixels(
                "glTexImage2D",
                consts::UNPACK_ALIGNMENT,
                width,
                height,
                format,
                ty,
                pixels.len(),
            )?;
        }
        self.native.tex_image_2d(
            target,
            level,
            internal_format,
            width,
            height,
            format,
            ty,
            pixels,
        )
    }

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
    ) -> Result<()> {
        let target = D::tex_image_target(target)?;
        let format = D::pixel_format(format)?;
        let ty = D::pixel_type(ty)?;
        self.check_pixels(
            "glTexSubImage2D",
            consts::UNPACK_ALIGNMENT,
            width,
            height,
            format,
            ty,
            pixels.len(),
        )?;
        self.native
            .tex_sub_image_2d(target, level, x, y, width, height, format, ty, pixels)
    }

    fn tex_parameter(&self, target: TextureTarget, param: TexParam) -> Result<()> {
        let target = D::texture_target(target)?;
        let (pname, value) = D::tex_param(param)?;
        self.native.tex_parameter_i(target, pname, value);
        Ok(())
    }

    fn generate_mipmap(&self, target: TextureTarget) -> Result<()> {
        self.native.generate_mipmap(D::texture_target(target)?);
        Ok(())
    }

    fn gen_framebuffer(&self) -> Result<FramebufferId> {
        self.created("glGenFramebuffers", self.native.gen_framebuffer())
            .map(FramebufferId)
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferId) -> Result<()> {
        self.native.delete_framebuffer(framebuffer.0);
        Ok(())
    }

    fn bind_framebuffer(
        &self,
        target: FramebufferTarget,
        framebuffer: Option<FramebufferId>,
    ) -> Result<()> {
        self.native.bind_framebuffer(
            D::framebuffer_target(target)?,
            framebuffer.map_or(0, |f| f.0),
        );
        Ok(())
    }

    fn framebuffer_texture_2d(
        &self,
        target: FramebufferTarget,
        attachment: FramebufferAttachment,
        tex_target: TexImageTarget,
        texture: Option<TextureId>,
        level: i32,
    ) -> Result<()> {
        self.native.framebuffer_texture_2d(
            D::framebuffer_target(target)?,
            D::framebuffer_attachment(attachment)?,
            D::tex_image_target(tex_target)?,
            texture.map_or(0, |t| t.0),
            level,
        );
        Ok(())
    }

    fn framebuffer_renderbuffer(
        &self,
        target: FramebufferTarget,
        attachment: FramebufferAttachment,
        renderbuffer: Option<RenderbufferId>,
    ) -> Result<()> {
        self.native.framebuffer_renderbuffer(
            D::framebuffer_target(target)?,
            D::framebuffer_attachment(attachment)?,
            consts::RENDERBUFFER,
            renderbuffer.map_or(0, |r| r.0),
        );
        Ok(())
    }

    fn check_framebuffer_status(&self, target: FramebufferTarget) -> Result<FramebufferStatus> {
        let code = self
            .native
            .check_framebuffer_status(D::framebuffer_target(target)?);
        D::framebuffer_status_from_native(code)
    }

    fn blit_framebuffer(
        &self,
        src: [i32; 4],
        dst: [i32; 4],
        mask: ClearMask,
        filter: TextureFilter,
    ) -> Result<()> {
        D::require(Operation::BlitFramebuffer)?;
        let filter = D::blit_filter(filter)?;
        self.native
            .blit_framebuffer(src, dst, clear_mask_bits(mask), filter);
        Ok(())
    }

    fn gen_renderbuffer(&self) -> Result<RenderbufferId> {
        self.created("glGenRenderbuffers", self.native.gen_renderbuffer())
            .map(RenderbufferId)
    }

    fn delete_renderbuffer(&self, renderbuffer: RenderbufferId) -> Result<()> {
        self.native.delete_renderbuffer(renderbuffer.0);
        Ok(())
    }

    fn bind_renderbuffer(&self, renderbuffer: Option<RenderbufferId>) -> Result<()> {
        self.native
            .bind_renderbuffer(consts::RENDERBUFFER, renderbuffer.map_or(0, |r| r.0));
        Ok(())
    }

    fn renderbuffer_storage(
        &self,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<()> {
        self.native.renderbuffer_storage(
            consts::RENDERBUFFER,
            D::renderbuffer_format(format)?,
            width,
            height,
        );
        Ok(())
    }

    fn renderbuffer_storage_multisample(
        &self,
        samples: i32,
        format: RenderbufferFormat,
        width: i32,
        height: i32,
    ) -> Result<()> {
        D::require(Operation::MultisampleRenderbuffer)?;
        self.native.renderbuffer_storage_multisample(
            consts::RENDERBUFFER,
            samples,
            D::renderbuffer_format(format)?,
            width,
            height,
        );
        Ok(())
    }

    fn create_shader(&self, ty: ShaderType) -> Result<ShaderId> {
        let native_ty = D::shader_type(ty)?;
        self.created("glCreateShader", self.native.create_shader(native_ty))
            .map(ShaderId)
    }

    fn delete_shader(&self, shader: ShaderId) -> Result<()> {
        self.native.delete_shader(shader.0);
        Ok(())
    }

    fn shader_source(&self, shader: ShaderId, source: &str) -> Result<()> {
        gl_size("glShaderSource", source.len())?;
        self.native.shader_source(shader.0, source)
    }

    fn compile_shader(&self, shader: ShaderId) -> Result<()> {
        self.native.compile_shader(shader.0);
        Ok(())
    }

    fn get_shader_parameter(&self, shader: ShaderId, param: ShaderParameter) -> Result<i32> {
        Ok(self
            .native
            .get_shader_iv(shader.0, D::shader_parameter(param)?))
    }

    fn get_shader_info_log(&self, shader: ShaderId) -> Result<String> {
        Ok(self.native.get_shader_info_log(shader.0))
    }

    fn get_shader_source(&self, shader: ShaderId) -> Result<String> {
        D::require(Operation::ShaderSourceRetrieval)?;
        Ok(self.native.get_shader_source(shader.0))
    }

    fn shader_binary(&self, shaders: &[ShaderId], format: u32, binary: &[u8]) -> Result<()> {
        D::require(Operation::ShaderBinary)?;
        gl_size("glShaderBinary", shaders.len())?;
        gl_size("glShaderBinary", binary.len())?;
        let names: Vec<u32> = shaders.iter().map(|s| s.0).collect();
        self.native.shader_binary(&names, format, binary)
    }

    fn create_program(&self) -> Result<ProgramId> {
        self.created("glCreateProgram", self.native.create_program())
            .map(ProgramId)
    }

    fn delete_program(&self, program: ProgramId) -> Result<()> {
        self.native.delete_program(program.0);
        Ok(())
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) -> Result<()> {
        self.native.attach_shader(program.0, shader.0);
        Ok(())
    }

    fn detach_shader(&self, program: ProgramId, shader: ShaderId) -> Result<()> {
        self.native.detach_shader(program.0, shader.0);
        Ok(())
    }

    fn link_program(&self, program: ProgramId) -> Result<()> {
        self.native.link_program(program.0);
        Ok(())
    }

    fn validate_program(&self, program: ProgramId) -> Result<()> {
        self.native.validate_program(program.0);
        Ok(())
    }

    fn use_program(&self, program: Option<ProgramId>) -> Result<()> {
        self.native.use_program(program.map_or(0, |p| p.0));
        Ok(())
    }

    fn get_program_parameter(&self, program: ProgramId, param: ProgramParameter) -> Result<i32> {
        Ok(self
            .native
            .get_program_iv(program.0, D::program_parameter(param)?))
    }

    fn get_program_info_log(&self, program: ProgramId) -> Result<String> {
        Ok(self.native.get_program_info_log(program.0))
    }

    fn get_attrib_location(&self, program: ProgramId, name: &str) -> Result<Option<u32>> {
        let location = self.native.get_attrib_location(program.0, name);
        Ok(u32::try_from(location).ok())
    }

    fn bind_attrib_location(&self, program: ProgramId, index: u32, name: &str) -> Result<()> {
        self.native.bind_attrib_location(program.0, index, name);
        Ok(())
    }

    fn get_active_attrib(&self, program: ProgramId, index: u32) -> Result<ActiveAttrib> {
        D::require(Operation::ActiveAttribIntrospection)?;
        let attrib = self
            .native
            .get_active_attrib(program.0, index)
            .ok_or_else(|| Error::Driver {
                operation: "glGetActiveAttrib",
                message: format!("no active attribute at index {index} of {program}"),
            })?;
        Ok(ActiveAttrib {
            kind: D::attribute_type_from_native(attrib.ty)?,
            name: attrib.name,
            size: attrib.size,
        })
    }

    fn get_uniform_location(
        &self,
        program: ProgramId,
        name: &str,
    ) -> Result<Option<UniformLocation>> {
        let location = self.native.get_uniform_location(program.0, name);
        Ok((location >= 0).then_some(UniformLocation(location)))
    }

    fn uniform_1i(&self, location: UniformLocation, x: i32) -> Result<()> {
        self.native.uniform_1i(location.0, x);
        Ok(())
    }

    fn uniform_1f(&self, location: UniformLocation, x: f32) -> Result<()> {
        self.native.uniform_1f(location.0, x);
        Ok(())
    }

    fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) -> Result<()> {
        self.native.uniform_2f(location.0, x, y);
        Ok(())
    }

    fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) -> Result<()> {
        self.native.uniform_3f(location.0, x, y, z);
        Ok(())
    }

    fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) -> Result<()> {
        self.native.uniform_4f(location.0, x, y, z, w);
        Ok(())
    }

    fn uniform_4fv(&self, location: UniformLocation, values: &[f32]) -> Result<()> {
        check_elements("glUniform4fv", values, 4)?;
        self.native.uniform_4fv(location.0, values)
    }

    fn uniform_matrix_3fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) -> Result<()> {
        if transpose {
            D::require(Operation::TransposedMatrixUpload)?;
        }
        check_elements("glUniformMatrix3fv", values, 9)?;
        self.native.uniform_matrix_3fv(location.0, transpose, values)
    }

    fn uniform_matrix_4fv(
        &self,
        location: UniformLocation,
        transpose: bool,
        values: &[f32],
    ) -> Result<()> {
        if transpose {
            D::require(Operation::TransposedMatrixUpload)?;
        }
        check_elements("glUniformMatrix4fv", values, 16)?;
        self.native.uniform_matrix_4fv(location.0, transpose, values)
    }

    fn load_source(&self, path: &str) -> Result<String> {
        self.shader_root.read(path).map(D::package_source)
    }
}
