// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation tables for desktop-class OpenGL.
//!
//! Every neutral variant has a native constant here; the only failures are combinations
//! that no GL flavour accepts.

use crate::adapter::{Dialect, Operation};
use crate::consts::*;
use crate::{
    AttributeType, Backend, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability,
    CompareFunc, CullFace, Error, ErrorCode, FramebufferAttachment, FramebufferStatus,
    FramebufferTarget, FrontFace, IndexType, IntegerQuery, IntegerVectorQuery, InternalFormat,
    PixelFormat, PixelType, PrimitiveMode, ProgramParameter, RenderbufferFormat, Result,
    ShaderParameter, ShaderType, StencilOp, StringName, TexImageTarget, TexParam, TextureFilter,
    TextureTarget, TextureWrap, VertexDataType,
};

/// The desktop GL dialect. See [`DesktopGl`](crate::DesktopGl).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Desktop;

/// Filter constants, shared with ES2 where the variant set agrees.
pub(crate) fn texture_filter(value: TextureFilter) -> u32 {
    match value {
        TextureFilter::Nearest => NEAREST,
        TextureFilter::Linear => LINEAR,
        TextureFilter::NearestMipmapNearest => NEAREST_MIPMAP_NEAREST,
        TextureFilter::LinearMipmapNearest => LINEAR_MIPMAP_NEAREST,
        TextureFilter::NearestMipmapLinear => NEAREST_MIPMAP_LINEAR,
        TextureFilter::LinearMipmapLinear => LINEAR_MIPMAP_LINEAR,
    }
}

/// Magnification and blit filters cannot sample mipmaps.
pub(crate) fn non_mipmap_filter(value: TextureFilter, backend: Backend) -> Result<u32> {
    if value.uses_mipmaps() {
        return Err(Error::invalid_mapping(TextureFilter::KIND, value, backend));
    }
    Ok(texture_filter(value))
}

pub(crate) fn color_attachment(index: u8, backend: Backend) -> Result<u32> {
    if index > FramebufferAttachment::MAX_COLOR_INDEX {
        return Err(Error::invalid_mapping(
            FramebufferAttachment::KIND,
            FramebufferAttachment::Color(index),
            backend,
        ));
    }
    Ok(COLOR_ATTACHMENT0 + u32::from(index))
}

fn unknown(kind: &'static str, code: u32) -> Error {
    Error::UnknownDriverStatus {
        kind,
        code,
        backend: Backend::Desktop,
    }
}

impl Dialect for Desktop {
    const BACKEND: Backend = Backend::Desktop;

    fn require(_op: Operation) -> Result<()> {
        Ok(())
    }

    fn package_source(source: String) -> String {
        source
    }

    fn blend_factor(value: BlendFactor) -> Result<u32> {
        Ok(match value {
            BlendFactor::Zero => ZERO,
            BlendFactor::One => ONE,
            BlendFactor::SrcColor => SRC_COLOR,
            BlendFactor::OneMinusSrcColor => ONE_MINUS_SRC_COLOR,
            BlendFactor::SrcAlpha => SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => ONE_MINUS_DST_ALPHA,
            BlendFactor::DstColor => DST_COLOR,
            BlendFactor::OneMinusDstColor => ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlphaSaturate => SRC_ALPHA_SATURATE,
            BlendFactor::ConstantColor => CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => ONE_MINUS_CONSTANT_ALPHA,
        })
    }

    fn blend_equation(value: BlendEquation) -> Result<u32> {
        Ok(match value {
            BlendEquation::FuncAdd => FUNC_ADD,
            BlendEquation::FuncSubtract => FUNC_SUBTRACT,
            BlendEquation::FuncReverseSubtract => FUNC_REVERSE_SUBTRACT,
            BlendEquation::Min => MIN,
            BlendEquation::Max => MAX,
        })
    }

    fn buffer_target(value: BufferTarget) -> Result<u32> {
        Ok(match value {
            BufferTarget::ArrayBuffer => ARRAY_BUFFER,
            BufferTarget::ElementArrayBuffer => ELEMENT_ARRAY_BUFFER,
            BufferTarget::PixelPackBuffer => PIXEL_PACK_BUFFER,
            BufferTarget::PixelUnpackBuffer => PIXEL_UNPACK_BUFFER,
            BufferTarget::UniformBuffer => UNIFORM_BUFFER,
            BufferTarget::CopyReadBuffer => COPY_READ_BUFFER,
            BufferTarget::CopyWriteBuffer => COPY_WRITE_BUFFER,
        })
    }

    fn buffer_usage(value: BufferUsage) -> Result<u32> {
        Ok(match value {
            BufferUsage::StreamDraw => STREAM_DRAW,
            BufferUsage::StreamRead => STREAM_READ,
            BufferUsage::StreamCopy => STREAM_COPY,
            BufferUsage::StaticDraw => STATIC_DRAW,
            BufferUsage::StaticRead => STATIC_READ,
            BufferUsage::StaticCopy => STATIC_COPY,
            BufferUsage::DynamicDraw => DYNAMIC_DRAW,
            BufferUsage::DynamicRead => DYNAMIC_READ,
            BufferUsage::DynamicCopy => DYNAMIC_COPY,
        })
    }

    fn texture_target(value: TextureTarget) -> Result<u32> {
        Ok(match value {
            TextureTarget::Texture1D => TEXTURE_1D,
            TextureTarget::Texture2D => TEXTURE_2D,
            TextureTarget::Texture3D => TEXTURE_3D,
            TextureTarget::TextureRectangle => TEXTURE_RECTANGLE,
            TextureTarget::TextureCubeMap => TEXTURE_CUBE_MAP,
        })
    }

    fn tex_image_target(value: TexImageTarget) -> Result<u32> {
        Ok(match value {
            TexImageTarget::Texture2D => TEXTURE_2D,
            TexImageTarget::TextureRectangle => TEXTURE_RECTANGLE,
            TexImageTarget::CubeMapPositiveX => TEXTURE_CUBE_MAP_POSITIVE_X,
            TexImageTarget::CubeMapNegativeX => TEXTURE_CUBE_MAP_NEGATIVE_X,
            TexImageTarget::CubeMapPositiveY => TEXTURE_CUBE_MAP_POSITIVE_Y,
            TexImageTarget::CubeMapNegativeY => TEXTURE_CUBE_MAP_NEGATIVE_Y,
            TexImageTarget::CubeMapPositiveZ => TEXTURE_CUBE_MAP_POSITIVE_Z,
            TexImageTarget::CubeMapNegativeZ => TEXTURE_CUBE_MAP_NEGATIVE_Z,
        })
    }

    fn tex_param(value: TexParam) -> Result<(u32, i32)> {
        let wrap = |wrap: TextureWrap| match wrap {
            TextureWrap::Repeat => REPEAT,
            TextureWrap::ClampToEdge => CLAMP_TO_EDGE,
            TextureWrap::ClampToBorder => CLAMP_TO_BORDER,
            TextureWrap::MirroredRepeat => MIRRORED_REPEAT,
        };
        let (pname, param) = match value {
            TexParam::MinFilter(filter) => (TEXTURE_MIN_FILTER, texture_filter(filter)),
            TexParam::MagFilter(filter) => (
                TEXTURE_MAG_FILTER,
                non_mipmap_filter(filter, Self::BACKEND)?,
            ),
            TexParam::WrapS(w) => (TEXTURE_WRAP_S, wrap(w)),
            TexParam::WrapT(w) => (TEXTURE_WRAP_T, wrap(w)),
            TexParam::WrapR(w) => (TEXTURE_WRAP_R, wrap(w)),
        };
        // Parameter values are small enum constants, well inside i32.
        Ok((pname, param as i32))
    }

    fn pixel_format(value: PixelFormat) -> Result<u32> {
        Ok(match value {
            PixelFormat::Alpha => ALPHA,
            PixelFormat::Red => RED,
            PixelFormat::Rgb => RGB,
            PixelFormat::Rgba => RGBA,
            PixelFormat::Bgra => BGRA,
            PixelFormat::Luminance => LUMINANCE,
            PixelFormat::LuminanceAlpha => LUMINANCE_ALPHA,
            PixelFormat::DepthComponent => DEPTH_COMPONENT,
        })
    }

    fn internal_format(value: InternalFormat) -> Result<u32> {
        Ok(match value {
            InternalFormat::Alpha => ALPHA,
            InternalFormat::Luminance => LUMINANCE,
            InternalFormat::LuminanceAlpha => LUMINANCE_ALPHA,
            InternalFormat::Rgb => RGB,
            InternalFormat::Rgba => RGBA,
            InternalFormat::R8 => R8,
            InternalFormat::Rgb8 => RGB8,
            InternalFormat::Rgba8 => RGBA8,
            InternalFormat::DepthComponent16 => DEPTH_COMPONENT16,
            InternalFormat::DepthComponent24 => DEPTH_COMPONENT24,
            InternalFormat::DepthComponent32 => DEPTH_COMPONENT32,
        })
    }

    fn pixel_type(value: PixelType) -> Result<u32> {
        Ok(match value {
            PixelType::Byte => BYTE,
            PixelType::UnsignedByte => UNSIGNED_BYTE,
            PixelType::Short => SHORT,
            PixelType::UnsignedShort => UNSIGNED_SHORT,
            PixelType::Int => INT,
            PixelType::UnsignedInt => UNSIGNED_INT,
            PixelType::Float => FLOAT,
            PixelType::UnsignedShort565 => UNSIGNED_SHORT_5_6_5,
            PixelType::UnsignedShort4444 => UNSIGNED_SHORT_4_4_4_4,
            PixelType::UnsignedShort5551 => UNSIGNED_SHORT_5_5_5_1,
            PixelType::UnsignedInt8888Rev => UNSIGNED_INT_8_8_8_8_REV,
        })
    }

    fn vertex_data_type(value: VertexDataType) -> Result<u32> {
        Ok(match value {
            VertexDataType::Byte => BYTE,
            VertexDataType::UnsignedByte => UNSIGNED_BYTE,
            VertexDataType::Short => SHORT,
            VertexDataType::UnsignedShort => UNSIGNED_SHORT,
            VertexDataType::Int => INT,
            VertexDataType::UnsignedInt => UNSIGNED_INT,
            VertexDataType::Float => FLOAT,
            VertexDataType::Double => DOUBLE,
            VertexDataType::Fixed => FIXED,
        })
    }

    fn index_type(value: IndexType) -> Result<u32> {
        Ok(match value {
            IndexType::UnsignedByte => UNSIGNED_BYTE,
            IndexType::UnsignedShort => UNSIGNED_SHORT,
            IndexType::UnsignedInt => UNSIGNED_INT,
        })
    }

    fn shader_type(value: ShaderType) -> Result<u32> {
        Ok(match value {
            ShaderType::Vertex => VERTEX_SHADER,
            ShaderType::Fragment => FRAGMENT_SHADER,
            ShaderType::Geometry => GEOMETRY_SHADER,
        })
    }

    fn primitive_mode(value: PrimitiveMode) -> Result<u32> {
        Ok(match value {
            PrimitiveMode::Points => POINTS,
            PrimitiveMode::Lines => LINES,
            PrimitiveMode::LineLoop => LINE_LOOP,
            PrimitiveMode::LineStrip => LINE_STRIP,
            PrimitiveMode::Triangles => TRIANGLES,
            PrimitiveMode::TriangleStrip => TRIANGLE_STRIP,
            PrimitiveMode::TriangleFan => TRIANGLE_FAN,
            PrimitiveMode::Quads => QUADS,
        })
    }

    fn capability(value: Capability) -> Result<u32> {
        Ok(match value {
            Capability::Blend => BLEND,
            Capability::CullFace => CULL_FACE,
            Capability::DepthTest => DEPTH_TEST,
            Capability::Dither => DITHER,
            Capability::PolygonOffsetFill => POLYGON_OFFSET_FILL,
            Capability::SampleAlphaToCoverage => SAMPLE_ALPHA_TO_COVERAGE,
            Capability::SampleCoverage => SAMPLE_COVERAGE,
            Capability::ScissorTest => SCISSOR_TEST,
            Capability::StencilTest => STENCIL_TEST,
            Capability::Multisample => MULTISAMPLE,
            Capability::LineSmooth => LINE_SMOOTH,
            Capability::FramebufferSrgb => FRAMEBUFFER_SRGB,
        })
    }

    fn compare_func(value: CompareFunc) -> Result<u32> {
        Ok(match value {
            CompareFunc::Never => NEVER,
            CompareFunc::Less => LESS,
            CompareFunc::Equal => EQUAL,
            CompareFunc::LessEqual => LEQUAL,
            CompareFunc::Greater => GREATER,
            CompareFunc::NotEqual => NOTEQUAL,
            CompareFunc::GreaterEqual => GEQUAL,
            CompareFunc::Always => ALWAYS,
        })
    }

    fn stencil_op(value: StencilOp) -> Result<u32> {
        Ok(match value {
            StencilOp::Keep => KEEP,
            StencilOp::Zero => ZERO,
            StencilOp::Replace => REPLACE,
            StencilOp::Increment => INCR,
            StencilOp::Decrement => DECR,
            StencilOp::Invert => INVERT,
            StencilOp::IncrementWrap => INCR_WRAP,
            StencilOp::DecrementWrap => DECR_WRAP,
        })
    }

    fn cull_face(value: CullFace) -> Result<u32> {
        Ok(match value {
            CullFace::Front => FRONT,
            CullFace::Back => BACK,
            CullFace::FrontAndBack => FRONT_AND_BACK,
        })
    }

    fn front_face(value: FrontFace) -> Result<u32> {
        Ok(match value {
            FrontFace::Clockwise => CW,
            FrontFace::CounterClockwise => CCW,
        })
    }

    fn framebuffer_target(value: FramebufferTarget) -> Result<u32> {
        Ok(match value {
            FramebufferTarget::Framebuffer => FRAMEBUFFER,
            FramebufferTarget::ReadFramebuffer => READ_FRAMEBUFFER,
            FramebufferTarget::DrawFramebuffer => DRAW_FRAMEBUFFER,
        })
    }

    fn framebuffer_attachment(value: FramebufferAttachment) -> Result<u32> {
        match value {
            FramebufferAttachment::Color(index) => color_attachment(index, Self::BACKEND),
            FramebufferAttachment::Depth => Ok(DEPTH_ATTACHMENT),
            FramebufferAttachment::Stencil => Ok(STENCIL_ATTACHMENT),
            FramebufferAttachment::DepthStencil => Ok(DEPTH_STENCIL_ATTACHMENT),
        }
    }

    fn framebuffer_status(value: FramebufferStatus) -> Result<u32> {
        Ok(match value {
            FramebufferStatus::Complete => FRAMEBUFFER_COMPLETE,
            FramebufferStatus::Undefined => FRAMEBUFFER_UNDEFINED,
            FramebufferStatus::IncompleteAttachment => FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
            FramebufferStatus::IncompleteMissingAttachment => {
                FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT
            }
            FramebufferStatus::IncompleteDimensions => FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
            FramebufferStatus::IncompleteDrawBuffer => FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER,
            FramebufferStatus::IncompleteReadBuffer => FRAMEBUFFER_INCOMPLETE_READ_BUFFER,
            FramebufferStatus::Unsupported => FRAMEBUFFER_UNSUPPORTED,
            FramebufferStatus::IncompleteMultisample => FRAMEBUFFER_INCOMPLETE_MULTISAMPLE,
            FramebufferStatus::IncompleteLayerTargets => FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS,
        })
    }

    fn error_code(value: ErrorCode) -> Result<u32> {
        Ok(match value {
            ErrorCode::NoError => NO_ERROR,
            ErrorCode::InvalidEnum => INVALID_ENUM,
            ErrorCode::InvalidValue => INVALID_VALUE,
            ErrorCode::InvalidOperation => INVALID_OPERATION,
            ErrorCode::StackOverflow => STACK_OVERFLOW,
            ErrorCode::StackUnderflow => STACK_UNDERFLOW,
            ErrorCode::OutOfMemory => OUT_OF_MEMORY,
            ErrorCode::InvalidFramebufferOperation => INVALID_FRAMEBUFFER_OPERATION,
        })
    }

    fn string_name(value: StringName) -> Result<u32> {
        Ok(match value {
            StringName::Vendor => VENDOR,
            StringName::Renderer => RENDERER,
            StringName::Version => VERSION,
            StringName::Extensions => EXTENSIONS,
            StringName::ShadingLanguageVersion => SHADING_LANGUAGE_VERSION,
        })
    }

    fn integer_query(value: IntegerQuery) -> Result<u32> {
        Ok(match value {
            IntegerQuery::MaxTextureSize => MAX_TEXTURE_SIZE,
            IntegerQuery::MaxVertexAttribs => MAX_VERTEX_ATTRIBS,
            IntegerQuery::MaxTextureImageUnits => MAX_TEXTURE_IMAGE_UNITS,
            IntegerQuery::MaxRenderbufferSize => MAX_RENDERBUFFER_SIZE,
            IntegerQuery::CurrentProgram => CURRENT_PROGRAM,
            IntegerQuery::ArrayBufferBinding => ARRAY_BUFFER_BINDING,
            IntegerQuery::ElementArrayBufferBinding => ELEMENT_ARRAY_BUFFER_BINDING,
            IntegerQuery::FramebufferBinding => FRAMEBUFFER_BINDING,
            IntegerQuery::RenderbufferBinding => RENDERBUFFER_BINDING,
            IntegerQuery::TextureBinding2D => TEXTURE_BINDING_2D,
            IntegerQuery::ActiveTexture => ACTIVE_TEXTURE,
            IntegerQuery::PackAlignment => PACK_ALIGNMENT,
            IntegerQuery::UnpackAlignment => UNPACK_ALIGNMENT,
            IntegerQuery::MaxColorAttachments => MAX_COLOR_ATTACHMENTS,
            IntegerQuery::MaxSamples => MAX_SAMPLES,
        })
    }

    fn integer_vector_query(value: IntegerVectorQuery) -> Result<u32> {
        Ok(match value {
            IntegerVectorQuery::Viewport => VIEWPORT,
            IntegerVectorQuery::ScissorBox => SCISSOR_BOX,
            IntegerVectorQuery::MaxViewportDims => MAX_VIEWPORT_DIMS,
        })
    }

    fn shader_parameter(value: ShaderParameter) -> Result<u32> {
        Ok(match value {
            ShaderParameter::ShaderType => SHADER_TYPE,
            ShaderParameter::DeleteStatus => DELETE_STATUS,
            ShaderParameter::CompileStatus => COMPILE_STATUS,
            ShaderParameter::InfoLogLength => INFO_LOG_LENGTH,
            ShaderParameter::ShaderSourceLength => SHADER_SOURCE_LENGTH,
        })
    }

    fn program_parameter(value: ProgramParameter) -> Result<u32> {
        Ok(match value {
            ProgramParameter::DeleteStatus => DELETE_STATUS,
            ProgramParameter::LinkStatus => LINK_STATUS,
            ProgramParameter::ValidateStatus => VALIDATE_STATUS,
            ProgramParameter::InfoLogLength => INFO_LOG_LENGTH,
            ProgramParameter::AttachedShaders => ATTACHED_SHADERS,
            ProgramParameter::ActiveUniforms => ACTIVE_UNIFORMS,
            ProgramParameter::ActiveUniformMaxLength => ACTIVE_UNIFORM_MAX_LENGTH,
            ProgramParameter::ActiveAttributes => ACTIVE_ATTRIBUTES,
            ProgramParameter::ActiveAttributeMaxLength => ACTIVE_ATTRIBUTE_MAX_LENGTH,
        })
    }

    fn renderbuffer_format(value: RenderbufferFormat) -> Result<u32> {
        Ok(match value {
            RenderbufferFormat::Rgba4 => RGBA4,
            RenderbufferFormat::Rgb565 => RGB565,
            RenderbufferFormat::Rgb5A1 => RGB5_A1,
            RenderbufferFormat::Rgba8 => RGBA8,
            RenderbufferFormat::DepthComponent16 => DEPTH_COMPONENT16,
            RenderbufferFormat::DepthComponent24 => DEPTH_COMPONENT24,
            RenderbufferFormat::DepthComponent32 => DEPTH_COMPONENT32,
            RenderbufferFormat::StencilIndex8 => STENCIL_INDEX8,
            RenderbufferFormat::Depth24Stencil8 => DEPTH24_STENCIL8,
        })
    }

    fn blit_filter(value: TextureFilter) -> Result<u32> {
        non_mipmap_filter(value, Self::BACKEND)
    }

    fn framebuffer_status_from_native(code: u32) -> Result<FramebufferStatus> {
        Ok(match code {
            FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
            FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
            FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
            FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
                FramebufferStatus::IncompleteMissingAttachment
            }
            FRAMEBUFFER_INCOMPLETE_DIMENSIONS => FramebufferStatus::IncompleteDimensions,
            FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
            FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
            FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
            FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
            FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
            _ => return Err(unknown(FramebufferStatus::KIND, code)),
        })
    }

    fn error_code_from_native(code: u32) -> Result<ErrorCode> {
        Ok(match code {
            NO_ERROR => ErrorCode::NoError,
            INVALID_ENUM => ErrorCode::InvalidEnum,
            INVALID_VALUE => ErrorCode::InvalidValue,
            INVALID_OPERATION => ErrorCode::InvalidOperation,
            STACK_OVERFLOW => ErrorCode::StackOverflow,
            STACK_UNDERFLOW => ErrorCode::StackUnderflow,
            OUT_OF_MEMORY => ErrorCode::OutOfMemory,
            INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
            _ => return Err(unknown(ErrorCode::KIND, code)),
        })
    }

    fn string_name_from_native(code: u32) -> Result<StringName> {
        Ok(match code {
            VENDOR => StringName::Vendor,
            RENDERER => StringName::Renderer,
            VERSION => StringName::Version,
            EXTENSIONS => StringName::Extensions,
            SHADING_LANGUAGE_VERSION => StringName::ShadingLanguageVersion,
            _ => return Err(unknown(StringName::KIND, code)),
        })
    }

    fn attribute_type_from_native(code: u32) -> Result<AttributeType> {
        Ok(match code {
            FLOAT => AttributeType::Float,
            FLOAT_VEC2 => AttributeType::FloatVec2,
            FLOAT_VEC3 => AttributeType::FloatVec3,
            FLOAT_VEC4 => AttributeType::FloatVec4,
            FLOAT_MAT2 => AttributeType::FloatMat2,
            FLOAT_MAT3 => AttributeType::FloatMat3,
            FLOAT_MAT4 => AttributeType::FloatMat4,
            INT => AttributeType::Int,
            INT_VEC2 => AttributeType::IntVec2,
            INT_VEC3 => AttributeType::IntVec3,
            INT_VEC4 => AttributeType::IntVec4,
            _ => return Err(unknown(AttributeType::KIND, code)),
        })
    }
}
