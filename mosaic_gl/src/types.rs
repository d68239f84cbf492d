// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-neutral GL parameter types and object handles.
//!
//! Each enum here is a closed set of symbolic values. Backends translate them to native
//! constants in their own tables, so an invalid value can never reach the driver as a bare
//! integer.

use core::fmt;

/// Declares a closed neutral enum together with the list of all its variants.
macro_rules! neutral_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub(crate) const KIND: &'static str = stringify!($name);
        }
    };
}

neutral_enum! {
    /// Source and destination factors for `blend_func`.
    pub enum BlendFactor {
        Zero,
        One,
        SrcColor,
        OneMinusSrcColor,
        SrcAlpha,
        OneMinusSrcAlpha,
        DstAlpha,
        OneMinusDstAlpha,
        DstColor,
        OneMinusDstColor,
        SrcAlphaSaturate,
        ConstantColor,
        OneMinusConstantColor,
        ConstantAlpha,
        OneMinusConstantAlpha,
    }
}

neutral_enum! {
    pub enum BlendEquation {
        FuncAdd,
        FuncSubtract,
        FuncReverseSubtract,
        Min,
        Max,
    }
}

neutral_enum! {
    /// Binding points for buffer objects.
    pub enum BufferTarget {
        ArrayBuffer,
        ElementArrayBuffer,
        PixelPackBuffer,
        PixelUnpackBuffer,
        UniformBuffer,
        CopyReadBuffer,
        CopyWriteBuffer,
    }
}

neutral_enum! {
    /// Usage hints for `buffer_data`.
    pub enum BufferUsage {
        StreamDraw,
        StreamRead,
        StreamCopy,
        StaticDraw,
        StaticRead,
        StaticCopy,
        DynamicDraw,
        DynamicRead,
        DynamicCopy,
    }
}

neutral_enum! {
    /// Targets for `bind_texture` and `generate_mipmap`.
    pub enum TextureTarget {
        Texture1D,
        Texture2D,
        Texture3D,
        TextureRectangle,
        TextureCubeMap,
    }
}

neutral_enum! {
    /// Targets accepted by the two dimensional image upload calls.
    pub enum TexImageTarget {
        Texture2D,
        TextureRectangle,
        CubeMapPositiveX,
        CubeMapNegativeX,
        CubeMapPositiveY,
        CubeMapNegativeY,
        CubeMapPositiveZ,
        CubeMapNegativeZ,
    }
}

neutral_enum! {
    pub enum TextureFilter {
        Nearest,
        Linear,
        NearestMipmapNearest,
        LinearMipmapNearest,
        NearestMipmapLinear,
        LinearMipmapLinear,
    }
}

impl TextureFilter {
    /// Whether this filter samples from mipmap levels.
    ///
    /// Mipmapped filters are only meaningful for minification.
    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, Self::Nearest | Self::Linear)
    }
}

neutral_enum! {
    pub enum TextureWrap {
        Repeat,
        ClampToEdge,
        ClampToBorder,
        MirroredRepeat,
    }
}

/// A texture parameter together with its value.
///
/// Pairing the parameter with a typed value rules out most invalid combinations at compile
/// time. The remaining ones (a mipmapped filter used for magnification) are rejected by the
/// backends with [`Error::InvalidEnumMapping`](crate::Error::InvalidEnumMapping).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TexParam {
    MinFilter(TextureFilter),
    MagFilter(TextureFilter),
    WrapS(TextureWrap),
    WrapT(TextureWrap),
    WrapR(TextureWrap),
}

neutral_enum! {
    /// Client-side pixel layout for uploads and readbacks.
    pub enum PixelFormat {
        Alpha,
        Red,
        Rgb,
        Rgba,
        Bgra,
        Luminance,
        LuminanceAlpha,
        DepthComponent,
    }
}

neutral_enum! {
    /// Storage format requested for a texture image.
    pub enum InternalFormat {
        Alpha,
        Luminance,
        LuminanceAlpha,
        Rgb,
        Rgba,
        R8,
        Rgb8,
        Rgba8,
        DepthComponent16,
        DepthComponent24,
        DepthComponent32,
    }
}

neutral_enum! {
    /// Component type of client-side pixel data.
    pub enum PixelType {
        Byte,
        UnsignedByte,
        Short,
        UnsignedShort,
        Int,
        UnsignedInt,
        Float,
        UnsignedShort565,
        UnsignedShort4444,
        UnsignedShort5551,
        UnsignedInt8888Rev,
    }
}

neutral_enum! {
    /// Component type of vertex attribute data.
    pub enum VertexDataType {
        Byte,
        UnsignedByte,
        Short,
        UnsignedShort,
        Int,
        UnsignedInt,
        Float,
        Double,
        Fixed,
    }
}

neutral_enum! {
    /// Index type for `draw_elements`.
    pub enum IndexType {
        UnsignedByte,
        UnsignedShort,
        UnsignedInt,
    }
}

neutral_enum! {
    pub enum ShaderType {
        Vertex,
        Fragment,
        Geometry,
    }
}

neutral_enum! {
    pub enum PrimitiveMode {
        Points,
        Lines,
        LineLoop,
        LineStrip,
        Triangles,
        TriangleStrip,
        TriangleFan,
        Quads,
    }
}

neutral_enum! {
    /// Server-side capabilities toggled with `enable`/`disable`.
    pub enum Capability {
        Blend,
        CullFace,
        DepthTest,
        Dither,
        PolygonOffsetFill,
        SampleAlphaToCoverage,
        SampleCoverage,
        ScissorTest,
        StencilTest,
        Multisample,
        LineSmooth,
        FramebufferSrgb,
    }
}

neutral_enum! {
    /// Comparison used by depth and stencil tests.
    pub enum CompareFunc {
        Never,
        Less,
        Equal,
        LessEqual,
        Greater,
        NotEqual,
        GreaterEqual,
        Always,
    }
}

neutral_enum! {
    pub enum StencilOp {
        Keep,
        Zero,
        Replace,
        Increment,
        Decrement,
        Invert,
        IncrementWrap,
        DecrementWrap,
    }
}

neutral_enum! {
    pub enum CullFace {
        Front,
        Back,
        FrontAndBack,
    }
}

neutral_enum! {
    pub enum FrontFace {
        Clockwise,
        CounterClockwise,
    }
}

neutral_enum! {
    pub enum FramebufferTarget {
        Framebuffer,
        ReadFramebuffer,
        DrawFramebuffer,
    }
}

/// Attachment points of a framebuffer object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FramebufferAttachment {
    /// Colour attachment `n`; at most 16 are addressable.
    Color(u8),
    Depth,
    Stencil,
    DepthStencil,
}

impl FramebufferAttachment {
    pub(crate) const KIND: &'static str = "FramebufferAttachment";

    /// The highest colour attachment index any backend can express.
    pub const MAX_COLOR_INDEX: u8 = 15;
}

neutral_enum! {
    /// Result of `check_framebuffer_status`, translated back from the driver.
    pub enum FramebufferStatus {
        Complete,
        Undefined,
        IncompleteAttachment,
        IncompleteMissingAttachment,
        IncompleteDimensions,
        IncompleteDrawBuffer,
        IncompleteReadBuffer,
        Unsupported,
        IncompleteMultisample,
        IncompleteLayerTargets,
    }
}

impl FramebufferStatus {
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

neutral_enum! {
    /// Error codes reported by `get_error`.
    pub enum ErrorCode {
        NoError,
        InvalidEnum,
        InvalidValue,
        InvalidOperation,
        StackOverflow,
        StackUnderflow,
        OutOfMemory,
        InvalidFramebufferOperation,
    }
}

neutral_enum! {
    /// Names accepted by `get_string`.
    pub enum StringName {
        Vendor,
        Renderer,
        Version,
        Extensions,
        ShadingLanguageVersion,
    }
}

neutral_enum! {
    /// Scalar state queried with `get_integer`.
    pub enum IntegerQuery {
        MaxTextureSize,
        MaxVertexAttribs,
        MaxTextureImageUnits,
        MaxRenderbufferSize,
        CurrentProgram,
        ArrayBufferBinding,
        ElementArrayBufferBinding,
        FramebufferBinding,
        RenderbufferBinding,
        TextureBinding2D,
        ActiveTexture,
        PackAlignment,
        UnpackAlignment,
        MaxColorAttachments,
        MaxSamples,
    }
}

neutral_enum! {
    /// Vector state queried with `get_integer_v`.
    pub enum IntegerVectorQuery {
        Viewport,
        ScissorBox,
        MaxViewportDims,
    }
}

impl IntegerVectorQuery {
    /// Number of integers the driver writes for this query.
    pub fn len(self) -> usize {
        match self {
            Self::Viewport | Self::ScissorBox => 4,
            Self::MaxViewportDims => 2,
        }
    }
}

neutral_enum! {
    pub enum ShaderParameter {
        ShaderType,
        DeleteStatus,
        CompileStatus,
        InfoLogLength,
        ShaderSourceLength,
    }
}

neutral_enum! {
    pub enum ProgramParameter {
        DeleteStatus,
        LinkStatus,
        ValidateStatus,
        InfoLogLength,
        AttachedShaders,
        ActiveUniforms,
        ActiveUniformMaxLength,
        ActiveAttributes,
        ActiveAttributeMaxLength,
    }
}

neutral_enum! {
    /// Storage formats for renderbuffers.
    pub enum RenderbufferFormat {
        Rgba4,
        Rgb565,
        Rgb5A1,
        Rgba8,
        DepthComponent16,
        DepthComponent24,
        DepthComponent32,
        StencilIndex8,
        Depth24Stencil8,
    }
}

neutral_enum! {
    /// Type of an active vertex attribute, translated back from the driver.
    pub enum AttributeType {
        Float,
        FloatVec2,
        FloatVec3,
        FloatVec4,
        FloatMat2,
        FloatMat3,
        FloatMat4,
        Int,
        IntVec2,
        IntVec3,
        IntVec4,
    }
}

/// Buffers cleared by `clear`, and copied by `blit_framebuffer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
    pub stencil: bool,
}

impl ClearMask {
    pub const COLOR: Self = Self {
        color: true,
        depth: false,
        stencil: false,
    };

    pub const ALL: Self = Self {
        color: true,
        depth: true,
        stencil: true,
    };

    pub fn is_empty(self) -> bool {
        !(self.color || self.depth || self.stencil)
    }
}

/// Per-channel colour write mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub alpha: bool,
}

impl Default for ColorMask {
    fn default() -> Self {
        Self {
            red: true,
            green: true,
            blue: true,
            alpha: true,
        }
    }
}

/// An active vertex attribute of a linked program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveAttrib {
    pub name: String,
    /// Array length, 1 for non-array attributes.
    pub size: i32,
    pub kind: AttributeType,
}

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

handle!(
    /// Driver name of a buffer object.
    BufferId
);
handle!(
    /// Driver name of a texture object.
    TextureId
);
handle!(
    /// Driver name of a shader object.
    ShaderId
);
handle!(
    /// Driver name of a program object.
    ProgramId
);
handle!(
    /// Driver name of a framebuffer object. The default framebuffer is bound with `None`.
    FramebufferId
);
handle!(
    /// Driver name of a renderbuffer object.
    RenderbufferId
);
handle!(
    /// Driver name of a vertex array object.
    VertexArrayId
);

/// Location of a uniform in a linked program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

/// The GL flavour a backend adapter targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Desktop-class OpenGL.
    Desktop,
    /// Embedded OpenGL ES 2.0.
    Es2,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Desktop => "desktop",
            Self::Es2 => "es2",
        })
    }
}
