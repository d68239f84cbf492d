// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native GL constant values, as defined by the Khronos registry.
//!
//! Values shared between desktop GL and OpenGL ES 2.0 are identical, so both backends pull
//! from this one list. Which constants a backend is allowed to emit is decided by its own
//! translation table.

// Blending
pub(crate) const ZERO: u32 = 0;
pub(crate) const ONE: u32 = 1;
pub(crate) const SRC_COLOR: u32 = 0x0300;
pub(crate) const ONE_MINUS_SRC_COLOR: u32 = 0x0301;
pub(crate) const SRC_ALPHA: u32 = 0x0302;
pub(crate) const ONE_MINUS_SRC_ALPHA: u32 = 0x0303;
pub(crate) const DST_ALPHA: u32 = 0x0304;
pub(crate) const ONE_MINUS_DST_ALPHA: u32 = 0x0305;
pub(crate) const DST_COLOR: u32 = 0x0306;
pub(crate) const ONE_MINUS_DST_COLOR: u32 = 0x0307;
pub(crate) const SRC_ALPHA_SATURATE: u32 = 0x0308;
pub(crate) const CONSTANT_COLOR: u32 = 0x8001;
pub(crate) const ONE_MINUS_CONSTANT_COLOR: u32 = 0x8002;
pub(crate) const CONSTANT_ALPHA: u32 = 0x8003;
pub(crate) const ONE_MINUS_CONSTANT_ALPHA: u32 = 0x8004;
pub(crate) const FUNC_ADD: u32 = 0x8006;
pub(crate) const MIN: u32 = 0x8007;
pub(crate) const MAX: u32 = 0x8008;
pub(crate) const FUNC_SUBTRACT: u32 = 0x800A;
pub(crate) const FUNC_REVERSE_SUBTRACT: u32 = 0x800B;

// Buffers
pub(crate) const ARRAY_BUFFER: u32 = 0x8892;
pub(crate) const ELEMENT_ARRAY_BUFFER: u32 = 0x8893;
pub(crate) const PIXEL_PACK_BUFFER: u32 = 0x88EB;
pub(crate) const PIXEL_UNPACK_BUFFER: u32 = 0x88EC;
pub(crate) const UNIFORM_BUFFER: u32 = 0x8A11;
pub(crate) const COPY_READ_BUFFER: u32 = 0x8F36;
pub(crate) const COPY_WRITE_BUFFER: u32 = 0x8F37;
pub(crate) const STREAM_DRAW: u32 = 0x88E0;
pub(crate) const STREAM_READ: u32 = 0x88E1;
pub(crate) const STREAM_COPY: u32 = 0x88E2;
pub(crate) const STATIC_DRAW: u32 = 0x88E4;
pub(crate) const STATIC_READ: u32 = 0x88E5;
pub(crate) const STATIC_COPY: u32 = 0x88E6;
pub(crate) const DYNAMIC_DRAW: u32 = 0x88E8;
pub(crate) const DYNAMIC_READ: u32 = 0x88E9;
pub(crate) const DYNAMIC_COPY: u32 = 0x88EA;

// Textures
pub(crate) const TEXTURE_1D: u32 = 0x0DE0;
pub(crate) const TEXTURE_2D: u32 = 0x0DE1;
pub(crate) const TEXTURE_3D: u32 = 0x806F;
pub(crate) const TEXTURE_RECTANGLE: u32 = 0x84F5;
pub(crate) const TEXTURE_CUBE_MAP: u32 = 0x8513;
pub(crate) const TEXTURE_CUBE_MAP_POSITIVE_X: u32 = 0x8515;
pub(crate) const TEXTURE_CUBE_MAP_NEGATIVE_X: u32 = 0x8516;
pub(crate) const TEXTURE_CUBE_MAP_POSITIVE_Y: u32 = 0x8517;
pub(crate) const TEXTURE_CUBE_MAP_NEGATIVE_Y: u32 = 0x8518;
pub(crate) const TEXTURE_CUBE_MAP_POSITIVE_Z: u32 = 0x8519;
pub(crate) const TEXTURE_CUBE_MAP_NEGATIVE_Z: u32 = 0x851A;
pub(crate) const TEXTURE0: u32 = 0x84C0;
pub(crate) const TEXTURE_MAG_FILTER: u32 = 0x2800;
pub(crate) const TEXTURE_MIN_FILTER: u32 = 0x2801;
pub(crate) const TEXTURE_WRAP_S: u32 = 0x2802;
pub(crate) const TEXTURE_WRAP_T: u32 = 0x2803;
pub(crate) const TEXTURE_WRAP_R: u32 = 0x8072;
pub(crate) const NEAREST: u32 = 0x2600;
pub(crate) const LINEAR: u32 = 0x2601;
pub(crate) const NEAREST_MIPMAP_NEAREST: u32 = 0x2700;
pub(crate) const LINEAR_MIPMAP_NEAREST: u32 = 0x2701;
pub(crate) const NEAREST_MIPMAP_LINEAR: u32 = 0x2702;
pub(crate) const LINEAR_MIPMAP_LINEAR: u32 = 0x2703;
pub(crate) const REPEAT: u32 = 0x2901;
pub(crate) const CLAMP_TO_BORDER: u32 = 0x812D;
pub(crate) const CLAMP_TO_EDGE: u32 = 0x812F;
pub(crate) const MIRRORED_REPEAT: u32 = 0x8370;

// Pixel formats and types
pub(crate) const DEPTH_COMPONENT: u32 = 0x1902;
pub(crate) const RED: u32 = 0x1903;
pub(crate) const ALPHA: u32 = 0x1906;
pub(crate) const RGB: u32 = 0x1907;
pub(crate) const RGBA: u32 = 0x1908;
pub(crate) const LUMINANCE: u32 = 0x1909;
pub(crate) const LUMINANCE_ALPHA: u32 = 0x190A;
pub(crate) const BGRA: u32 = 0x80E1;
pub(crate) const R8: u32 = 0x8229;
pub(crate) const RGB8: u32 = 0x8051;
pub(crate) const RGBA4: u32 = 0x8056;
pub(crate) const RGB5_A1: u32 = 0x8057;
pub(crate) const RGBA8: u32 = 0x8058;
pub(crate) const RGB565: u32 = 0x8D62;
pub(crate) const DEPTH_COMPONENT16: u32 = 0x81A5;
pub(crate) const DEPTH_COMPONENT24: u32 = 0x81A6;
pub(crate) const DEPTH_COMPONENT32: u32 = 0x81A7;
pub(crate) const STENCIL_INDEX8: u32 = 0x8D48;
pub(crate) const DEPTH24_STENCIL8: u32 = 0x88F0;
pub(crate) const BYTE: u32 = 0x1400;
pub(crate) const UNSIGNED_BYTE: u32 = 0x1401;
pub(crate) const SHORT: u32 = 0x1402;
pub(crate) const UNSIGNED_SHORT: u32 = 0x1403;
pub(crate) const INT: u32 = 0x1404;
pub(crate) const UNSIGNED_INT: u32 = 0x1405;
pub(crate) const FLOAT: u32 = 0x1406;
pub(crate) const DOUBLE: u32 = 0x140A;
pub(crate) const FIXED: u32 = 0x140C;
pub(crate) const UNSIGNED_SHORT_4_4_4_4: u32 = 0x8033;
pub(crate) const UNSIGNED_SHORT_5_5_5_1: u32 = 0x8034;
pub(crate) const UNSIGNED_SHORT_5_6_5: u32 = 0x8363;
pub(crate) const UNSIGNED_INT_8_8_8_8_REV: u32 = 0x8367;
pub(crate) const PACK_ALIGNMENT: u32 = 0x0D05;
pub(crate) const UNPACK_ALIGNMENT: u32 = 0x0CF5;

// Shaders
pub(crate) const FRAGMENT_SHADER: u32 = 0x8B30;
pub(crate) const VERTEX_SHADER: u32 = 0x8B31;
pub(crate) const GEOMETRY_SHADER: u32 = 0x8DD9;
pub(crate) const SHADER_TYPE: u32 = 0x8B4F;
pub(crate) const DELETE_STATUS: u32 = 0x8B80;
pub(crate) const COMPILE_STATUS: u32 = 0x8B81;
pub(crate) const LINK_STATUS: u32 = 0x8B82;
pub(crate) const VALIDATE_STATUS: u32 = 0x8B83;
pub(crate) const INFO_LOG_LENGTH: u32 = 0x8B84;
pub(crate) const ATTACHED_SHADERS: u32 = 0x8B85;
pub(crate) const ACTIVE_UNIFORMS: u32 = 0x8B86;
pub(crate) const ACTIVE_UNIFORM_MAX_LENGTH: u32 = 0x8B87;
pub(crate) const SHADER_SOURCE_LENGTH: u32 = 0x8B88;
pub(crate) const ACTIVE_ATTRIBUTES: u32 = 0x8B89;
pub(crate) const ACTIVE_ATTRIBUTE_MAX_LENGTH: u32 = 0x8B8A;
pub(crate) const FLOAT_VEC2: u32 = 0x8B50;
pub(crate) const FLOAT_VEC3: u32 = 0x8B51;
pub(crate) const FLOAT_VEC4: u32 = 0x8B52;
pub(crate) const INT_VEC2: u32 = 0x8B53;
pub(crate) const INT_VEC3: u32 = 0x8B54;
pub(crate) const INT_VEC4: u32 = 0x8B55;
pub(crate) const FLOAT_MAT2: u32 = 0x8B5A;
pub(crate) const FLOAT_MAT3: u32 = 0x8B5B;
pub(crate) const FLOAT_MAT4: u32 = 0x8B5C;

// Primitives
pub(crate) const POINTS: u32 = 0x0000;
pub(crate) const LINES: u32 = 0x0001;
pub(crate) const LINE_LOOP: u32 = 0x0002;
pub(crate) const LINE_STRIP: u32 = 0x0003;
pub(crate) const TRIANGLES: u32 = 0x0004;
pub(crate) const TRIANGLE_STRIP: u32 = 0x0005;
pub(crate) const TRIANGLE_FAN: u32 = 0x0006;
pub(crate) const QUADS: u32 = 0x0007;

// Capabilities
pub(crate) const LINE_SMOOTH: u32 = 0x0B20;
pub(crate) const CULL_FACE: u32 = 0x0B44;
pub(crate) const DEPTH_TEST: u32 = 0x0B71;
pub(crate) const STENCIL_TEST: u32 = 0x0B90;
pub(crate) const DITHER: u32 = 0x0BD0;
pub(crate) const BLEND: u32 = 0x0BE2;
pub(crate) const SCISSOR_TEST: u32 = 0x0C11;
pub(crate) const POLYGON_OFFSET_FILL: u32 = 0x8037;
pub(crate) const MULTISAMPLE: u32 = 0x809D;
pub(crate) const SAMPLE_ALPHA_TO_COVERAGE: u32 = 0x809E;
pub(crate) const SAMPLE_COVERAGE: u32 = 0x80A0;
pub(crate) const FRAMEBUFFER_SRGB: u32 = 0x8DB9;

// Depth and stencil
pub(crate) const NEVER: u32 = 0x0200;
pub(crate) const LESS: u32 = 0x0201;
pub(crate) const EQUAL: u32 = 0x0202;
pub(crate) const LEQUAL: u32 = 0x0203;
pub(crate) const GREATER: u32 = 0x0204;
pub(crate) const NOTEQUAL: u32 = 0x0205;
pub(crate) const GEQUAL: u32 = 0x0206;
pub(crate) const ALWAYS: u32 = 0x0207;
pub(crate) const KEEP: u32 = 0x1E00;
pub(crate) const REPLACE: u32 = 0x1E01;
pub(crate) const INCR: u32 = 0x1E02;
pub(crate) const DECR: u32 = 0x1E03;
pub(crate) const INVERT: u32 = 0x150A;
pub(crate) const INCR_WRAP: u32 = 0x8507;
pub(crate) const DECR_WRAP: u32 = 0x8508;
pub(crate) const FRONT: u32 = 0x0404;
pub(crate) const BACK: u32 = 0x0405;
pub(crate) const FRONT_AND_BACK: u32 = 0x0408;
pub(crate) const CW: u32 = 0x0900;
pub(crate) const CCW: u32 = 0x0901;

// Clear masks
pub(crate) const DEPTH_BUFFER_BIT: u32 = 0x0100;
pub(crate) const STENCIL_BUFFER_BIT: u32 = 0x0400;
pub(crate) const COLOR_BUFFER_BIT: u32 = 0x4000;

// Framebuffers
pub(crate) const FRAMEBUFFER: u32 = 0x8D40;
pub(crate) const READ_FRAMEBUFFER: u32 = 0x8CA8;
pub(crate) const DRAW_FRAMEBUFFER: u32 = 0x8CA9;
pub(crate) const RENDERBUFFER: u32 = 0x8D41;
pub(crate) const COLOR_ATTACHMENT0: u32 = 0x8CE0;
pub(crate) const DEPTH_ATTACHMENT: u32 = 0x8D00;
pub(crate) const STENCIL_ATTACHMENT: u32 = 0x8D20;
pub(crate) const DEPTH_STENCIL_ATTACHMENT: u32 = 0x821A;
pub(crate) const FRAMEBUFFER_COMPLETE: u32 = 0x8CD5;
pub(crate) const FRAMEBUFFER_UNDEFINED: u32 = 0x8219;
pub(crate) const FRAMEBUFFER_INCOMPLETE_ATTACHMENT: u32 = 0x8CD6;
pub(crate) const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: u32 = 0x8CD7;
pub(crate) const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: u32 = 0x8CD9;
pub(crate) const FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER: u32 = 0x8CDB;
pub(crate) const FRAMEBUFFER_INCOMPLETE_READ_BUFFER: u32 = 0x8CDC;
pub(crate) const FRAMEBUFFER_UNSUPPORTED: u32 = 0x8CDD;
pub(crate) const FRAMEBUFFER_INCOMPLETE_MULTISAMPLE: u32 = 0x8D56;
pub(crate) const FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS: u32 = 0x8DA8;

// Errors
pub(crate) const NO_ERROR: u32 = 0;
pub(crate) const INVALID_ENUM: u32 = 0x0500;
pub(crate) const INVALID_VALUE: u32 = 0x0501;
pub(crate) const INVALID_OPERATION: u32 = 0x0502;
pub(crate) const STACK_OVERFLOW: u32 = 0x0503;
pub(crate) const STACK_UNDERFLOW: u32 = 0x0504;
pub(crate) const OUT_OF_MEMORY: u32 = 0x0505;
pub(crate) const INVALID_FRAMEBUFFER_OPERATION: u32 = 0x0506;

// Queries
pub(crate) const VENDOR: u32 = 0x1F00;
pub(crate) const RENDERER: u32 = 0x1F01;
pub(crate) const VERSION: u32 = 0x1F02;
pub(crate) const EXTENSIONS: u32 = 0x1F03;
pub(crate) const SHADING_LANGUAGE_VERSION: u32 = 0x8B8C;
pub(crate) const VIEWPORT: u32 = 0x0BA2;
pub(crate) const SCISSOR_BOX: u32 = 0x0C10;
pub(crate) const MAX_TEXTURE_SIZE: u32 = 0x0D33;
pub(crate) const MAX_VIEWPORT_DIMS: u32 = 0x0D3A;
pub(crate) const TEXTURE_BINDING_2D: u32 = 0x8069;
pub(crate) const ACTIVE_TEXTURE: u32 = 0x84E0;
pub(crate) const MAX_RENDERBUFFER_SIZE: u32 = 0x84E8;
pub(crate) const MAX_VERTEX_ATTRIBS: u32 = 0x8869;
pub(crate) const MAX_TEXTURE_IMAGE_UNITS: u32 = 0x8872;
pub(crate) const ARRAY_BUFFER_BINDING: u32 = 0x8894;
pub(crate) const ELEMENT_ARRAY_BUFFER_BINDING: u32 = 0x8895;
pub(crate) const CURRENT_PROGRAM: u32 = 0x8B8D;
pub(crate) const FRAMEBUFFER_BINDING: u32 = 0x8CA6;
pub(crate) const RENDERBUFFER_BINDING: u32 = 0x8CA7;
pub(crate) const MAX_COLOR_ATTACHMENTS: u32 = 0x8CDF;
pub(crate) const MAX_SAMPLES: u32 = 0x8D57;

/// Number of texture units addressable through `TEXTURE0 + n`.
pub(crate) const MAX_TEXTURE_UNITS: u32 = 32;

/// Packs the clear mask bits in native form.
pub(crate) fn clear_mask_bits(mask: crate::ClearMask) -> u32 {
    let mut bits = 0;
    if mask.color {
        bits |= COLOR_BUFFER_BIT;
    }
    if mask.depth {
        bits |= DEPTH_BUFFER_BIT;
    }
    if mask.stencil {
        bits |= STENCIL_BUFFER_BIT;
    }
    bits
}
