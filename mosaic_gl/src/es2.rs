// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation tables for OpenGL ES 2.0.
//!
//! ES2 is a strict subset of what the neutral interface can express. Variants with no ES2
//! equivalent fail with [`Error::UnsupportedCapability`]. A few have a close equivalent and
//! are substituted instead:
//!
//! - buffer usage `*Read` and `*Copy` hints become the matching `*Draw` hint;
//! - sized internal formats `Rgba8`, `Rgb8` become `RGBA`, `RGB`, `R8` becomes `LUMINANCE`,
//!   and the sized depth formats become `DEPTH_COMPONENT`;
//! - renderbuffer formats `DepthComponent24/32` become `DEPTH_COMPONENT16`, and `Rgba8`
//!   becomes `RGBA4`.

use crate::adapter::{unsupported, Dialect, Operation};
use crate::consts::*;
use crate::desktop::{color_attachment, non_mipmap_filter, texture_filter};
use crate::{
    AttributeType, Backend, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability,
    CompareFunc, CullFace, Error, ErrorCode, FramebufferAttachment, FramebufferStatus,
    FramebufferTarget, FrontFace, IndexType, IntegerQuery, IntegerVectorQuery, InternalFormat,
    PixelFormat, PixelType, PrimitiveMode, ProgramParameter, RenderbufferFormat, Result,
    ShaderParameter, ShaderType, StencilOp, StringName, TexImageTarget, TexParam, TextureFilter,
    TextureTarget, TextureWrap, VertexDataType,
};

/// The OpenGL ES 2.0 dialect. See [`Es2Gl`](crate::Es2Gl).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Es2;

const DEFAULT_PRECISION: &str = "precision mediump float;";

fn missing<T>(operation: &'static str) -> Result<T> {
    unsupported(operation, Backend::Es2)
}

fn unknown(kind: &'static str, code: u32) -> Error {
    Error::UnknownDriverStatus {
        kind,
        code,
        backend: Backend::Es2,
    }
}

fn declares_precision(source: &str) -> bool {
    source
        .lines()
        .any(|line| line.trim_start().starts_with("precision "))
}

impl Dialect for Es2 {
    const BACKEND: Backend = Backend::Es2;

    fn require(op: Operation) -> Result<()> {
        match op {
            Operation::ShaderSourceRetrieval
            | Operation::ActiveAttribIntrospection
            | Operation::ShaderBinary
            | Operation::BlitFramebuffer
            | Operation::MultisampleRenderbuffer
            | Operation::VertexArrayObjects
            | Operation::TransposedMatrixUpload => missing(op.name()),
        }
    }

    fn package_source(source: String) -> String {
        if declares_precision(&source) {
            return source;
        }
        // The precision statement must follow `#version`, which has to come first.
        let version_end = source
            .lines()
            .next()
            .filter(|line| line.trim_start().starts_with("#version"))
            .map(|line| line.len());
        match version_end {
            Some(end) => {
                let (head, tail) = source.split_at(end);
                let tail = tail.strip_prefix("\r\n").or_else(|| tail.strip_prefix('\n'));
                format!("{head}\n{DEFAULT_PRECISION}\n{}", tail.unwrap_or(""))
            }
            None => format!("{DEFAULT_PRECISION}\n{source}"),
        }
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
        match value {
            BlendEquation::FuncAdd => Ok(FUNC_ADD),
            BlendEquation::FuncSubtract => Ok(FUNC_SUBTRACT),
            BlendEquation::FuncReverseSubtract => Ok(FUNC_REVERSE_SUBTRACT),
            BlendEquation::Min => missing("BlendEquation::Min"),
            BlendEquation::Max => missing("BlendEquation::Max"),
        }
    }

    fn buffer_target(value: BufferTarget) -> Result<u32> {
        match value {
            BufferTarget::ArrayBuffer => Ok(ARRAY_BUFFER),
            BufferTarget::ElementArrayBuffer => Ok(ELEMENT_ARRAY_BUFFER),
            BufferTarget::PixelPackBuffer => missing("BufferTarget::PixelPackBuffer"),
            BufferTarget::PixelUnpackBuffer => missing("BufferTarget::PixelUnpackBuffer"),
            BufferTarget::UniformBuffer => missing("BufferTarget::UniformBuffer"),
            BufferTarget::CopyReadBuffer => missing("BufferTarget::CopyReadBuffer"),
            BufferTarget::CopyWriteBuffer => missing("BufferTarget::CopyWriteBuffer"),
        }
    }

    fn buffer_usage(value: BufferUsage) -> Result<u32> {
        Ok(match value {
            BufferUsage::StreamDraw | BufferUsage::StreamRead | BufferUsage::StreamCopy => {
                STREAM_DRAW
            }
            BufferUsage::StaticDraw | BufferUsage::StaticRead | BufferUsage::StaticCopy => {
                STATIC_DRAW
            }
            BufferUsage::DynamicDraw | BufferUsage::DynamicRead | BufferUsage::DynamicCopy => {
                DYNAMIC_DRAW
            }
        })
    }

    fn texture_target(value: TextureTarget) -> Result<u32> {
        match value {
            TextureTarget::Texture2D => Ok(TEXTURE_2D),
            TextureTarget::TextureCubeMap => Ok(TEXTURE_CUBE_MAP),
            TextureTarget::Texture1D => missing("TextureTarget::Texture1D"),
            TextureTarget::Texture3D => missing("TextureTarget::Texture3D"),
            TextureTarget::TextureRectangle => missing("TextureTarget::TextureRectangle"),
        }
    }

    fn tex_image_target(value: TexImageTarget) -> Result<u32> {
        Ok(match value {
            TexImageTarget::Texture2D => TEXTURE_2D,
            TexImageTarget::TextureRectangle => {
                return missing("TexImageTarget::TextureRectangle")
            }
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
            TextureWrap::Repeat => Ok(REPEAT),
            TextureWrap::ClampToEdge => Ok(CLAMP_TO_EDGE),
            TextureWrap::MirroredRepeat => Ok(MIRRORED_REPEAT),
            TextureWrap::ClampToBorder => missing("TextureWrap::ClampToBorder"),
        };
        let (pname, param) = match value {
            TexParam::MinFilter(filter) => (TEXTURE_MIN_FILTER, texture_filter(filter)),
            TexParam::MagFilter(filter) => (
                TEXTURE_MAG_FILTER,
                non_mipmap_filter(filter, Self::BACKEND)?,
            ),
            TexParam::WrapS(w) => (TEXTURE_WRAP_S, wrap(w)?),
            TexParam::WrapT(w) => (TEXTURE_WRAP_T, wrap(w)?),
            TexParam::WrapR(_) => return missing("TexParam::WrapR"),
        };
        Ok((pname, param as i32))
    }

    fn pixel_format(value: PixelFormat) -> Result<u32> {
        match value {
            PixelFormat::Alpha => Ok(ALPHA),
            PixelFormat::Rgb => Ok(RGB),
            PixelFormat::Rgba => Ok(RGBA),
            PixelFormat::Luminance => Ok(LUMINANCE),
            PixelFormat::LuminanceAlpha => Ok(LUMINANCE_ALPHA),
            PixelFormat::DepthComponent => Ok(DEPTH_COMPONENT),
            PixelFormat::Red => missing("PixelFormat::Red"),
            PixelFormat::Bgra => missing("PixelFormat::Bgra"),
        }
    }

    fn internal_format(value: InternalFormat) -> Result<u32> {
        Ok(match value {
            InternalFormat::Alpha => ALPHA,
            InternalFormat::Luminance | InternalFormat::R8 => LUMINANCE,
            InternalFormat::LuminanceAlpha => LUMINANCE_ALPHA,
            InternalFormat::Rgb | InternalFormat::Rgb8 => RGB,
            InternalFormat::Rgba | InternalFormat::Rgba8 => RGBA,
            InternalFormat::DepthComponent16
            | InternalFormat::DepthComponent24
            | InternalFormat::DepthComponent32 => DEPTH_COMPONENT,
        })
    }

    fn pixel_type(value: PixelType) -> Result<u32> {
        Ok(match value {
            PixelType::UnsignedByte => UNSIGNED_BYTE,
            PixelType::UnsignedShort565 => UNSIGNED_SHORT_5_6_5,
            PixelType::UnsignedShort4444 => UNSIGNED_SHORT_4_4_4_4,
            PixelType::UnsignedShort5551 => UNSIGNED_SHORT_5_5_5_1,
            // Depth textures and float textures are OES extensions.
            PixelType::UnsignedShort => return missing("PixelType::UnsignedShort"),
            PixelType::UnsignedInt => return missing("PixelType::UnsignedInt"),
            PixelType::Float => return missing("PixelType::Float"),
            PixelType::Byte => return missing("PixelType::Byte"),
            PixelType::Short => return missing("PixelType::Short"),
            PixelType::Int => return missing("PixelType::Int"),
            PixelType::UnsignedInt8888Rev => return missing("PixelType::UnsignedInt8888Rev"),
        })
    }

    fn vertex_data_type(value: VertexDataType) -> Result<u32> {
        Ok(match value {
            VertexDataType::Byte => BYTE,
            VertexDataType::UnsignedByte => UNSIGNED_BYTE,
            VertexDataType::Short => SHORT,
            VertexDataType::UnsignedShort => UNSIGNED_SHORT,
            VertexDataType::Float => FLOAT,
            VertexDataType::Fixed => FIXED,
            VertexDataType::Int => return missing("VertexDataType::Int"),
            VertexDataType::UnsignedInt => return missing("VertexDataType::UnsignedInt"),
            VertexDataType::Double => return missing("VertexDataType::Double"),
        })
    }

    fn index_type(value: IndexType) -> Result<u32> {
        match value {
            IndexType::UnsignedByte => Ok(UNSIGNED_BYTE),
            IndexType::UnsignedShort => Ok(UNSIGNED_SHORT),
            IndexType::UnsignedInt => missing("IndexType::UnsignedInt"),
        }
    }

    fn shader_type(value: ShaderType) -> Result<u32> {
        match value {
            ShaderType::Vertex => Ok(VERTEX_SHADER),
            ShaderType::Fragment => Ok(FRAGMENT_SHADER),
            ShaderType::Geometry => missing("ShaderType::Geometry"),
        }
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
            PrimitiveMode::Quads => return missing("PrimitiveMode::Quads"),
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
            Capability::Multisample => return missing("Capability::Multisample"),
            Capability::LineSmooth => return missing("Capability::LineSmooth"),
            Capability::FramebufferSrgb => return missing("Capability::FramebufferSrgb"),
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
        match value {
            FramebufferTarget::Framebuffer => Ok(FRAMEBUFFER),
            FramebufferTarget::ReadFramebuffer => missing("FramebufferTarget::ReadFramebuffer"),
            FramebufferTarget::DrawFramebuffer => missing("FramebufferTarget::DrawFramebuffer"),
        }
    }

    fn framebuffer_attachment(value: FramebufferAttachment) -> Result<u32> {
        match value {
            FramebufferAttachment::Color(0) => color_attachment(0, Self::BACKEND),
            FramebufferAttachment::Color(index)
                if index > FramebufferAttachment::MAX_COLOR_INDEX =>
            {
                color_attachment(index, Self::BACKEND)
            }
            FramebufferAttachment::Color(_) => missing("FramebufferAttachment::Color(n > 0)"),
            FramebufferAttachment::Depth => Ok(DEPTH_ATTACHMENT),
            FramebufferAttachment::Stencil => Ok(STENCIL_ATTACHMENT),
            FramebufferAttachment::DepthStencil => missing("FramebufferAttachment::DepthStencil"),
        }
    }

    fn framebuffer_status(value: FramebufferStatus) -> Result<u32> {
        Ok(match value {
            FramebufferStatus::Complete => FRAMEBUFFER_COMPLETE,
            FramebufferStatus::IncompleteAttachment => FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
            FramebufferStatus::IncompleteMissingAttachment => {
                FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT
            }
            FramebufferStatus::IncompleteDimensions => FRAMEBUFFER_INCOMPLETE_DIMENSIONS,
            FramebufferStatus::Unsupported => FRAMEBUFFER_UNSUPPORTED,
            FramebufferStatus::Undefined => return missing("FramebufferStatus::Undefined"),
            FramebufferStatus::IncompleteDrawBuffer => {
                return missing("FramebufferStatus::IncompleteDrawBuffer")
            }
            FramebufferStatus::IncompleteReadBuffer => {
                return missing("FramebufferStatus::IncompleteReadBuffer")
            }
            FramebufferStatus::IncompleteMultisample => {
                return missing("FramebufferStatus::IncompleteMultisample")
            }
            FramebufferStatus::IncompleteLayerTargets => {
                return missing("FramebufferStatus::IncompleteLayerTargets")
            }
        })
    }

    fn error_code(value: ErrorCode) -> Result<u32> {
        Ok(match value {
            ErrorCode::NoError => NO_ERROR,
            ErrorCode::InvalidEnum => INVALID_ENUM,
            ErrorCode::InvalidValue => INVALID_VALUE,
            ErrorCode::InvalidOperation => INVALID_OPERATION,
            ErrorCode::OutOfMemory => OUT_OF_MEMORY,
            ErrorCode::InvalidFramebufferOperation => INVALID_FRAMEBUFFER_OPERATION,
            ErrorCode::StackOverflow => return missing("ErrorCode::StackOverflow"),
            ErrorCode::StackUnderflow => return missing("ErrorCode::StackUnderflow"),
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
            IntegerQuery::MaxColorAttachments => return missing("IntegerQuery::MaxColorAttachments"),
            IntegerQuery::MaxSamples => return missing("IntegerQuery::MaxSamples"),
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
            ProgramParameter::ActiveAttributeMaxLength => ACTIVE_ATTRIBUTE_MAX_LENGTH,
            ProgramParameter::ActiveAttributes => {
                return missing("ProgramParameter::ActiveAttributes")
            }
        })
    }

    fn renderbuffer_format(value: RenderbufferFormat) -> Result<u32> {
        Ok(match value {
            RenderbufferFormat::Rgba4 | RenderbufferFormat::Rgba8 => RGBA4,
            RenderbufferFormat::Rgb565 => RGB565,
            RenderbufferFormat::Rgb5A1 => RGB5_A1,
            RenderbufferFormat::DepthComponent16
            | RenderbufferFormat::DepthComponent24
            | RenderbufferFormat::DepthComponent32 => DEPTH_COMPONENT16,
            RenderbufferFormat::StencilIndex8 => STENCIL_INDEX8,
            RenderbufferFormat::Depth24Stencil8 => {
                return missing("RenderbufferFormat::Depth24Stencil8")
            }
        })
    }

    fn blit_filter(value: TextureFilter) -> Result<u32> {
        // Checked for consistency; `blit_framebuffer` itself is rejected before this runs.
        non_mipmap_filter(value, Self::BACKEND)
    }

    fn framebuffer_status_from_native(code: u32) -> Result<FramebufferStatus> {
        Ok(match code {
            FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
            FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
            FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
                FramebufferStatus::IncompleteMissingAttachment
            }
            FRAMEBUFFER_INCOMPLETE_DIMENSIONS => FramebufferStatus::IncompleteDimensions,
            FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
            _ => return Err(unknown(FramebufferStatus::KIND, code)),
        })
    }

    fn error_code_from_native(code: u32) -> Result<ErrorCode> {
        Ok(match code {
            NO_ERROR => ErrorCode::NoError,
            INVALID_ENUM => ErrorCode::InvalidEnum,
            INVALID_VALUE => ErrorCode::InvalidValue,
            INVALID_OPERATION => ErrorCode::InvalidOperation,
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
