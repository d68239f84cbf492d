// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forwarding from the neutral interface to the native binding.

mod util;

use mosaic_gl::{
    AttributeType, Backend, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability,
    ClearMask, DesktopGl, Error, ErrorCode, Es2Gl, FramebufferAttachment, FramebufferStatus,
    FramebufferTarget, Gl, IntegerQuery, IntegerVectorQuery, InternalFormat,
    NativeActiveAttrib, PixelFormat, PixelType, ProgramId, ProgramParameter, ShaderId,
    ShaderType, StringName, TexImageTarget, TexParam, TextureFilter, TextureId, TextureTarget,
    TextureWrap, UniformLocation, VertexDataType,
};
use util::Recorder;

fn desktop() -> DesktopGl<Recorder> {
    DesktopGl::new(Recorder::new())
}

fn es2() -> Es2Gl<Recorder> {
    Es2Gl::new(Recorder::new())
}

#[test]
fn state_calls_are_translated() {
    let gl = desktop();
    gl.enable(Capability::Blend).unwrap();
    gl.blend_func(BlendFactor::One, BlendFactor::OneMinusSrcAlpha)
        .unwrap();
    gl.clear(ClearMask::ALL).unwrap();
    gl.disable(Capability::ScissorTest).unwrap();

    assert_eq!(
        gl.native().calls(),
        [
            "enable 0x0be2",
            "blend_func 0x0001 0x0303",
            "clear 0x4500",
            "disable 0x0c11",
        ]
    );
}

#[test]
fn none_binds_zero() {
    let gl = desktop();
    gl.bind_buffer(BufferTarget::ArrayBuffer, None).unwrap();
    gl.bind_texture(TextureTarget::Texture2D, Some(TextureId(7)))
        .unwrap();
    gl.use_program(None).unwrap();
    gl.bind_framebuffer(FramebufferTarget::Framebuffer, None)
        .unwrap();

    assert_eq!(
        gl.native().calls(),
        [
            "bind_buffer 0x8892 0",
            "bind_texture 0x0de1 7",
            "use_program 0",
            "bind_framebuffer 0x8d40 0",
        ]
    );
}

#[test]
fn object_creation() {
    let gl = desktop();
    let buffer = gl.gen_buffer().unwrap();
    let texture = gl.gen_texture().unwrap();
    assert_ne!(buffer.0, 0);
    assert_ne!(texture.0, 0);

    let shader = gl.create_shader(ShaderType::Fragment).unwrap();
    assert_ne!(shader.0, 0);
    assert_eq!(gl.native().calls()[2], "create_shader 0x8b30");
}

#[test]
fn zero_name_is_a_driver_error() {
    let gl = desktop();
    gl.native().fail_creation.set(true);
    assert!(matches!(
        gl.gen_framebuffer(),
        Err(Error::Driver {
            operation: "glGenFramebuffers",
            ..
        })
    ));
    assert!(matches!(gl.create_program(), Err(Error::Driver { .. })));
}

#[test]
fn active_texture_units() {
    let gl = desktop();
    gl.active_texture(0).unwrap();
    gl.active_texture(31).unwrap();
    assert!(matches!(
        gl.active_texture(32),
        Err(Error::InvalidEnumMapping { .. })
    ));
    assert_eq!(
        gl.native().calls(),
        ["active_texture 0x84c0", "active_texture 0x84df"]
    );
}

#[test]
fn invalid_combinations_never_reach_the_driver() {
    let gl = desktop();
    let err = gl
        .tex_parameter(
            TextureTarget::Texture2D,
            TexParam::MagFilter(TextureFilter::LinearMipmapLinear),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEnumMapping { .. }));
    let err = gl
        .framebuffer_texture_2d(
            FramebufferTarget::Framebuffer,
            FramebufferAttachment::Color(16),
            TexImageTarget::Texture2D,
            Some(TextureId(1)),
            0,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEnumMapping { .. }));
    assert!(gl.native().calls().is_empty());
}

#[test]
fn tex_image_upload() {
    let gl = desktop();
    let pixels = [0_u8; 16];
    gl.tex_image_2d(
        TexImageTarget::Texture2D,
        0,
        InternalFormat::Rgba8,
        2,
        2,
        PixelFormat::Rgba,
        PixelType::UnsignedByte,
        Some(&pixels),
    )
    .unwrap();
    gl.tex_parameter(
        TextureTarget::Texture2D,
        TexParam::WrapS(TextureWrap::ClampToEdge),
    )
    .unwrap();
    assert_eq!(
        gl.native().calls(),
        [
            "get_integer_v 0x0cf5 1",
            "tex_image_2d 0x0de1 0 0x8058 2 2 0x1908 0x1401 16",
            "tex_parameter_i 0x0de1 0x2802 0x812f",
        ]
    );
}

fn reaches_driver(gl: &DesktopGl<Recorder>, call: &str) -> bool {
    gl.native().calls().iter().any(|c| c.starts_with(call))
}

#[test]
fn short_pixel_buffers_never_reach_the_driver() {
    let gl = desktop();
    let mut out = [0_u8; 4];
    let err = gl
        .read_pixels(
            0,
            0,
            256,
            256,
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
            &mut out,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            operation: "glReadPixels",
            ..
        }
    ));

    let pixels = [0_u8; 15];
    assert!(matches!(
        gl.tex_image_2d(
            TexImageTarget::Texture2D,
            0,
            InternalFormat::Rgba8,
            2,
            2,
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
            Some(&pixels),
        ),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        gl.tex_sub_image_2d(
            TexImageTarget::Texture2D,
            0,
            0,
            0,
            4,
            1,
            PixelFormat::Rgb,
            PixelType::Float,
            &pixels,
        ),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        gl.read_pixels(
            0,
            0,
            -1,
            1,
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
            &mut out,
        ),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(!reaches_driver(&gl, "read_pixels"));
    assert!(!reaches_driver(&gl, "tex_"));

    // Allocation without data has nothing to check.
    gl.tex_image_2d(
        TexImageTarget::Texture2D,
        0,
        InternalFormat::Rgba8,
        1024,
        1024,
        PixelFormat::Rgba,
        PixelType::UnsignedByte,
        None,
    )
    .unwrap();
    assert!(reaches_driver(&gl, "tex_image_2d"));
}

#[test]
fn row_alignment_is_read_from_the_driver() {
    let gl = desktop();
    // Two rows of three RGB pixels: 9 bytes each, padded to 12 at the default alignment.
    let mut out = [0_u8; 18];
    *gl.native().integers.borrow_mut() = vec![4];
    assert!(gl
        .read_pixels(0, 0, 3, 2, PixelFormat::Rgb, PixelType::UnsignedByte, &mut out)
        .is_err());

    *gl.native().integers.borrow_mut() = vec![1];
    gl.read_pixels(0, 0, 3, 2, PixelFormat::Rgb, PixelType::UnsignedByte, &mut out)
        .unwrap();
    assert_eq!(
        gl.native().calls(),
        [
            "get_integer_v 0x0d05 1",
            "get_integer_v 0x0d05 1",
            "read_pixels 0 0 3 2 0x1907 0x1401 18",
        ]
    );
}

#[test]
fn pixel_alignment_values() {
    let gl = desktop();
    gl.pixel_store_alignment(1, 8).unwrap();
    assert!(matches!(
        gl.pixel_store_alignment(4, 3),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(
        gl.native().calls(),
        ["pixel_store_i 0x0d05 1", "pixel_store_i 0x0cf5 8"]
    );
}

#[test]
fn native_failures_are_reported() {
    let gl = desktop();
    gl.native().refuse_memory.set(true);
    assert!(gl.shader_source(ShaderId(1), "void main() {}").is_err());
    assert!(gl.shader_binary(&[ShaderId(1)], 0x1234, &[0; 8]).is_err());
    assert!(gl.uniform_4fv(UniformLocation(0), &[0.0; 8]).is_err());
    assert!(gl
        .uniform_matrix_3fv(UniformLocation(0), false, &[0.0; 9])
        .is_err());
    assert_eq!(
        gl.native().take(),
        [
            "shader_source 1 14",
            "shader_binary [1] 0x1234 8",
            "uniform_4fv 0 8",
            "uniform_matrix_3fv 0 false 9",
        ]
    );

    gl.native().refuse_memory.set(false);
    gl.shader_source(ShaderId(1), "void main() {}").unwrap();
}

#[test]
fn status_queries_are_translated_back() {
    let gl = desktop();
    gl.native().framebuffer_status.set(0x8CD5);
    assert_eq!(
        gl.check_framebuffer_status(FramebufferTarget::Framebuffer)
            .unwrap(),
        FramebufferStatus::Complete
    );

    gl.native().framebuffer_status.set(0x1234);
    let err = gl
        .check_framebuffer_status(FramebufferTarget::Framebuffer)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownDriverStatus {
            code: 0x1234,
            backend: Backend::Desktop,
            ..
        }
    ));

    gl.native().error.set(0x0502);
    assert_eq!(gl.get_error().unwrap(), ErrorCode::InvalidOperation);
}

#[test]
fn integer_queries() {
    let gl = desktop();
    *gl.native().integers.borrow_mut() = vec![0, 0, 800, 600];
    assert_eq!(
        gl.get_integer_v(IntegerVectorQuery::Viewport).unwrap(),
        [0, 0, 800, 600]
    );
    *gl.native().integers.borrow_mut() = vec![4096];
    assert_eq!(gl.get_integer(IntegerQuery::MaxTextureSize).unwrap(), 4096);
}

#[test]
fn get_string_reports_null() {
    let gl = desktop();
    assert!(matches!(
        gl.get_string(StringName::Renderer),
        Err(Error::Driver { .. })
    ));
    *gl.native().string.borrow_mut() = Some("Mock".into());
    assert_eq!(gl.get_string(StringName::Renderer).unwrap(), "Mock");
}

#[test]
fn missing_locations_are_none() {
    let gl = desktop();
    gl.native().location.set(-1);
    assert_eq!(gl.get_attrib_location(ProgramId(1), "pos").unwrap(), None);
    assert_eq!(gl.get_uniform_location(ProgramId(1), "mvp").unwrap(), None);
    gl.native().location.set(3);
    assert_eq!(gl.get_attrib_location(ProgramId(1), "pos").unwrap(), Some(3));
    assert_eq!(
        gl.get_uniform_location(ProgramId(1), "mvp").unwrap(),
        Some(UniformLocation(3))
    );
}

#[test]
fn active_attrib_types() {
    let gl = desktop();
    *gl.native().active_attrib.borrow_mut() = Some(NativeActiveAttrib {
        name: "position".into(),
        size: 1,
        ty: 0x8B51,
    });
    let attrib = gl.get_active_attrib(ProgramId(2), 0).unwrap();
    assert_eq!(attrib.name, "position");
    assert_eq!(attrib.kind, AttributeType::FloatVec3);

    *gl.native().active_attrib.borrow_mut() = Some(NativeActiveAttrib {
        name: "weird".into(),
        size: 1,
        ty: 0xFFFF,
    });
    assert!(matches!(
        gl.get_active_attrib(ProgramId(2), 1),
        Err(Error::UnknownDriverStatus { .. })
    ));
}

#[test]
fn es2_rejects_missing_operations_before_the_driver() {
    let gl = es2();
    assert!(gl.get_shader_source(mosaic_gl::ShaderId(1)).unwrap_err().is_unsupported());
    assert!(gl.get_active_attrib(ProgramId(1), 0).unwrap_err().is_unsupported());
    assert!(gl.shader_binary(&[], 0, &[]).unwrap_err().is_unsupported());
    assert!(gl
        .blit_framebuffer([0, 0, 1, 1], [0, 0, 1, 1], ClearMask::COLOR, TextureFilter::Nearest)
        .unwrap_err()
        .is_unsupported());
    assert!(gl
        .renderbuffer_storage_multisample(4, mosaic_gl::RenderbufferFormat::Rgba4, 1, 1)
        .unwrap_err()
        .is_unsupported());
    assert!(gl.gen_vertex_array().unwrap_err().is_unsupported());
    assert!(gl.bind_vertex_array(None).unwrap_err().is_unsupported());
    assert!(gl
        .uniform_matrix_4fv(UniformLocation(0), true, &[0.0; 16])
        .unwrap_err()
        .is_unsupported());
    assert!(gl
        .get_program_parameter(ProgramId(1), ProgramParameter::ActiveAttributes)
        .unwrap_err()
        .is_unsupported());
    assert!(gl.native().calls().is_empty());

    gl.uniform_matrix_4fv(UniformLocation(0), false, &[0.0; 16])
        .unwrap();
    assert_eq!(gl.native().calls(), ["uniform_matrix_4fv 0 false 16"]);
}

#[test]
fn es2_variants() {
    let gl = es2();
    assert_eq!(gl.backend(), Backend::Es2);
    let err = gl.blend_equation(BlendEquation::Max).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedCapability {
            backend: Backend::Es2,
            ..
        }
    ));
    assert!(gl
        .vertex_attrib_pointer(0, 2, VertexDataType::Double, false, 0, 0)
        .unwrap_err()
        .is_unsupported());
    assert!(gl.enable(Capability::Multisample).unwrap_err().is_unsupported());
    for ty in [VertexDataType::Int, VertexDataType::UnsignedInt] {
        assert!(gl
            .vertex_attrib_pointer(0, 2, ty, false, 0, 0)
            .unwrap_err()
            .is_unsupported());
    }

    gl.buffer_data(BufferTarget::ArrayBuffer, &[0; 8], BufferUsage::StaticRead)
        .unwrap();
    assert_eq!(gl.native().calls(), ["buffer_data 0x8892 8 0x88e4"]);
}

#[test]
fn dyn_selection() {
    let backends: Vec<Box<dyn Gl>> = vec![Box::new(desktop()), Box::new(es2())];
    let supported: Vec<bool> = backends
        .iter()
        .map(|gl| gl.enable(Capability::LineSmooth).is_ok())
        .collect();
    assert_eq!(supported, [true, false]);
}

#[test]
fn es2_pixel_types() {
    let gl = es2();
    let mut out = [0_u8; 64];
    for ty in [
        PixelType::Byte,
        PixelType::Short,
        PixelType::UnsignedShort,
        PixelType::Int,
        PixelType::UnsignedInt,
        PixelType::Float,
    ] {
        let err = gl
            .read_pixels(0, 0, 1, 1, PixelFormat::Rgba, ty, &mut out)
            .unwrap_err();
        assert!(
            matches!(
                err,
                Error::UnsupportedCapability {
                    backend: Backend::Es2,
                    ..
                }
            ),
            "{ty:?}: {err}"
        );
    }
    assert!(gl.native().calls().is_empty());

    gl.read_pixels(
        0,
        0,
        2,
        2,
        PixelFormat::Rgb,
        PixelType::UnsignedShort565,
        &mut out,
    )
    .unwrap();
    assert_eq!(
        gl.native().calls()[1],
        "read_pixels 0 0 2 2 0x1907 0x8363 64"
    );
}

#[test]
fn es2_has_no_undefined_framebuffer() {
    let gl = es2();
    gl.native().framebuffer_status.set(0x8219);
    assert!(matches!(
        gl.check_framebuffer_status(FramebufferTarget::Framebuffer),
        Err(Error::UnknownDriverStatus {
            backend: Backend::Es2,
            ..
        })
    ));
}
