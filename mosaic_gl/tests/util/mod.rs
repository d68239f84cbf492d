// Copyright 2025 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`NativeGl`] that records every call instead of reaching a driver.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::{Cell, RefCell};

use mosaic_gl::{Error, NativeActiveAttrib, NativeGl, Result};

/// Records calls as `name arg arg ...`, with enum arguments in hex.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: RefCell<Vec<String>>,
    next_name: Cell<u32>,
    /// Makes every `gen_*`/`create_*` call return 0.
    pub fail_creation: Cell<bool>,
    pub framebuffer_status: Cell<u32>,
    pub error: Cell<u32>,
    pub string: RefCell<Option<String>>,
    pub integers: RefCell<Vec<i32>>,
    pub active_attrib: RefCell<Option<NativeActiveAttrib>>,
    pub location: Cell<i32>,
    /// Makes every call that hands the driver client memory fail.
    pub refuse_memory: Cell<bool>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        self.calls.take()
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn memory(&self, call: String) -> Result<()> {
        self.log(call);
        if self.refuse_memory.get() {
            return Err(Error::InvalidArgument {
                operation: "recorder",
                message: "refused".into(),
            });
        }
        Ok(())
    }

    fn name(&self, call: &str) -> u32 {
        self.log(call.to_owned());
        if self.fail_creation.get() {
            return 0;
        }
        let next = self.next_name.get() + 1;
        self.next_name.set(next);
        next
    }
}

impl NativeGl for Recorder {
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log(format!("viewport {x} {y} {width} {height}"));
    }
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.log(format!("scissor {x} {y} {width} {height}"));
    }
    fn enable(&self, cap: u32) {
        self.log(format!("enable {cap:#06x}"));
    }
    fn disable(&self, cap: u32) {
        self.log(format!("disable {cap:#06x}"));
    }
    fn is_enabled(&self, cap: u32) -> bool {
        self.log(format!("is_enabled {cap:#06x}"));
        true
    }
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.log(format!("clear_color {red} {green} {blue} {alpha}"));
    }
    fn clear_depth(&self, depth: f64) {
        self.log(format!("clear_depth {depth}"));
    }
    fn clear_stencil(&self, stencil: i32) {
        self.log(format!("clear_stencil {stencil}"));
    }
    fn clear(&self, mask: u32) {
        self.log(format!("clear {mask:#06x}"));
    }
    fn blend_func(&self, src: u32, dst: u32) {
        self.log(format!("blend_func {src:#06x} {dst:#06x}"));
    }
    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.log(format!(
            "blend_func_separate {src_rgb:#06x} {dst_rgb:#06x} {src_alpha:#06x} {dst_alpha:#06x}"
        ));
    }
    fn blend_equation(&self, mode: u32) {
        self.log(format!("blend_equation {mode:#06x}"));
    }
    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.log(format!("blend_color {red} {green} {blue} {alpha}"));
    }
    fn depth_func(&self, func: u32) {
        self.log(format!("depth_func {func:#06x}"));
    }
    fn depth_mask(&self, flag: bool) {
        self.log(format!("depth_mask {flag}"));
    }
    fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.log(format!("color_mask {red} {green} {blue} {alpha}"));
    }
    fn stencil_func(&self, func: u32, reference: i32, mask: u32) {
        self.log(format!("stencil_func {func:#06x} {reference} {mask}"));
    }
    fn stencil_op(&self, stencil_fail: u32, depth_fail: u32, depth_pass: u32) {
        self.log(format!(
            "stencil_op {stencil_fail:#06x} {depth_fail:#06x} {depth_pass:#06x}"
        ));
    }
    fn stencil_mask(&self, mask: u32) {
        self.log(format!("stencil_mask {mask}"));
    }
    fn cull_face(&self, mode: u32) {
        self.log(format!("cull_face {mode:#06x}"));
    }
    fn front_face(&self, mode: u32) {
        self.log(format!("front_face {mode:#06x}"));
    }
    fn line_width(&self, width: f32) {
        self.log(format!("line_width {width}"));
    }
    fn pixel_store_i(&self, pname: u32, param: i32) -> Result<()> {
        self.log(format!("pixel_store_i {pname:#06x} {param}"));
        Ok(())
    }
    fn flush(&self) {
        self.log("flush".into());
    }
    fn finish(&self) {
        self.log("finish".into());
    }
    fn get_error(&self) -> u32 {
        self.log("get_error".into());
        self.error.get()
    }
    fn get_string(&self, name: u32) -> Option<String> {
        self.log(format!("get_string {name:#06x}"));
        self.string.borrow().clone()
    }
    fn get_integer_v(&self, pname: u32, out: &mut [i32]) -> Result<()> {
        self.log(format!("get_integer_v {pname:#06x} {}", out.len()));
        for (slot, value) in out.iter_mut().zip(self.integers.borrow().iter()) {
            *slot = *value;
        }
        Ok(())
    }
    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.log(format!("draw_arrays {mode:#06x} {first} {count}"));
    }
    fn draw_elements(&self, mode: u32, count: i32, ty: u32, offset: usize) {
        self.log(format!("draw_elements {mode:#06x} {count} {ty:#06x} {offset}"));
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
        self.memory(format!(
            "read_pixels {x} {y} {width} {height} {format:#06x} {ty:#06x} {}",
            out.len()
        ))
    }
    fn gen_buffer(&self) -> u32 {
        self.name("gen_buffer")
    }
    fn delete_buffer(&self, buffer: u32) {
        self.log(format!("delete_buffer {buffer}"));
    }
    fn bind_buffer(&self, target: u32, buffer: u32) {
        self.log(format!("bind_buffer {target:#06x} {buffer}"));
    }
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.log(format!(
            "buffer_data {target:#06x} {} {usage:#06x}",
            data.len()
        ));
    }
    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        self.log(format!(
            "buffer_sub_data {target:#06x} {offset} {}",
            data.len()
        ));
    }
    fn gen_vertex_array(&self) -> u32 {
        self.name("gen_vertex_array")
    }
    fn delete_vertex_array(&self, array: u32) {
        self.log(format!("delete_vertex_array {array}"));
    }
    fn bind_vertex_array(&self, array: u32) {
        self.log(format!("bind_vertex_array {array}"));
    }
    fn enable_vertex_attrib_array(&self, index: u32) {
        self.log(format!("enable_vertex_attrib_array {index}"));
    }
    fn disable_vertex_attrib_array(&self, index: u32) {
        self.log(format!("disable_vertex_attrib_array {index}"));
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
        self.log(format!(
            "vertex_attrib_pointer {index} {size} {ty:#06x} {normalized} {stride} {offset}"
        ));
    }
    fn gen_texture(&self) -> u32 {
        self.name("gen_texture")
    }
    fn delete_texture(&self, texture: u32) {
        self.log(format!("delete_texture {texture}"));
    }
    fn active_texture(&self, unit: u32) {
        self.log(format!("active_texture {unit:#06x}"));
    }
    fn bind_texture(&self, target: u32, texture: u32) {
        self.log(format!("bind_texture {target:#06x} {texture}"));
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
        self.memory(format!(
            "tex_image_2d {target:#06x} {level} {internal_format:#06x} {width} {height} \
             {format:#06x} {ty:#06x} {}",
            pixels.map_or(0, <[u8]>::len)
        ))
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
        self.memory(format!(
            "tex_sub_image_2d {target:#06x} {level} {x} {y} {width} {height} \
             {format:#06x} {ty:#06x} {}",
            pixels.len()
        ))
    }
    fn tex_parameter_i(&self, target: u32, pname: u32, param: i32) {
        self.log(format!("tex_parameter_i {target:#06x} {pname:#06x} {param:#06x}"));
    }
    fn generate_mipmap(&self, target: u32) {
        self.log(format!("generate_mipmap {target:#06x}"));
    }
    fn gen_framebuffer(&self) -> u32 {
        self.name("gen_framebuffer")
    }
    fn delete_framebuffer(&self, framebuffer: u32) {
        self.log(format!("delete_framebuffer {framebuffer}"));
    }
    fn bind_framebuffer(&self, target: u32, framebuffer: u32) {
        self.log(format!("bind_framebuffer {target:#06x} {framebuffer}"));
    }
    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        tex_target: u32,
        texture: u32,
        level: i32,
    ) {
        self.log(format!(
            "framebuffer_texture_2d {target:#06x} {attachment:#06x} {tex_target:#06x} \
             {texture} {level}"
        ));
    }
    fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: u32,
    ) {
        self.log(format!(
            "framebuffer_renderbuffer {target:#06x} {attachment:#06x} \
             {renderbuffer_target:#06x} {renderbuffer}"
        ));
    }
    fn check_framebuffer_status(&self, target: u32) -> u32 {
        self.log(format!("check_framebuffer_status {target:#06x}"));
        self.framebuffer_status.get()
    }
    fn blit_framebuffer(&self, src: [i32; 4], dst: [i32; 4], mask: u32, filter: u32) {
        self.log(format!(
            "blit_framebuffer {src:?} {dst:?} {mask:#06x} {filter:#06x}"
        ));
    }
    fn gen_renderbuffer(&self) -> u32 {
        self.name("gen_renderbuffer")
    }
    fn delete_renderbuffer(&self, renderbuffer: u32) {
        self.log(format!("delete_renderbuffer {renderbuffer}"));
    }
    fn bind_renderbuffer(&self, target: u32, renderbuffer: u32) {
        self.log(format!("bind_renderbuffer {target:#06x} {renderbuffer}"));
    }
    fn renderbuffer_storage(&self, target: u32, format: u32, width: i32, height: i32) {
        self.log(format!(
            "renderbuffer_storage {target:#06x} {format:#06x} {width} {height}"
        ));
    }
    fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    ) {
        self.log(format!(
            "renderbuffer_storage_multisample {target:#06x} {samples} {format:#06x} \
             {width} {height}"
        ));
    }
    fn create_shader(&self, ty: u32) -> u32 {
        self.name(&format!("create_shader {ty:#06x}"))
    }
    fn delete_shader(&self, shader: u32) {
        self.log(format!("delete_shader {shader}"));
    }
    fn shader_source(&self, shader: u32, source: &str) -> Result<()> {
        self.memory(format!("shader_source {shader} {}", source.len()))
    }
    fn compile_shader(&self, shader: u32) {
        self.log(format!("compile_shader {shader}"));
    }
    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32 {
        self.log(format!("get_shader_iv {shader} {pname:#06x}"));
        1
    }
    fn get_shader_info_log(&self, shader: u32) -> String {
        self.log(format!("get_shader_info_log {shader}"));
        String::new()
    }
    fn get_shader_source(&self, shader: u32) -> String {
        self.log(format!("get_shader_source {shader}"));
        "void main() {}".into()
    }
    fn shader_binary(&self, shaders: &[u32], format: u32, binary: &[u8]) -> Result<()> {
        self.memory(format!(
            "shader_binary {shaders:?} {format:#06x} {}",
            binary.len()
        ))
    }
    fn create_program(&self) -> u32 {
        self.name("create_program")
    }
    fn delete_program(&self, program: u32) {
        self.log(format!("delete_program {program}"));
    }
    fn attach_shader(&self, program: u32, shader: u32) {
        self.log(format!("attach_shader {program} {shader}"));
    }
    fn detach_shader(&self, program: u32, shader: u32) {
        self.log(format!("detach_shader {program} {shader}"));
    }
    fn link_program(&self, program: u32) {
        self.log(format!("link_program {program}"));
    }
    fn validate_program(&self, program: u32) {
        self.log(format!("validate_program {program}"));
    }
    fn use_program(&self, program: u32) {
        self.log(format!("use_program {program}"));
    }
    fn get_program_iv(&self, program: u32, pname: u32) -> i32 {
        self.log(format!("get_program_iv {program} {pname:#06x}"));
        1
    }
    fn get_program_info_log(&self, program: u32) -> String {
        self.log(format!("get_program_info_log {program}"));
        String::new()
    }
    fn get_attrib_location(&self, program: u32, name: &str) -> i32 {
        self.log(format!("get_attrib_location {program} {name}"));
        self.location.get()
    }
    fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        self.log(format!("bind_attrib_location {program} {index} {name}"));
    }
    fn get_active_attrib(&self, program: u32, index: u32) -> Option<NativeActiveAttrib> {
        self.log(format!("get_active_attrib {program} {index}"));
        self.active_attrib.borrow().clone()
    }
    fn get_uniform_location(&self, program: u32, name: &str) -> i32 {
        self.log(format!("get_uniform_location {program} {name}"));
        self.location.get()
    }
    fn uniform_1i(&self, location: i32, x: i32) {
        self.log(format!("uniform_1i {location} {x}"));
    }
    fn uniform_1f(&self, location: i32, x: f32) {
        self.log(format!("uniform_1f {location} {x}"));
    }
    fn uniform_2f(&self, location: i32, x: f32, y: f32) {
        self.log(format!("uniform_2f {location} {x} {y}"));
    }
    fn uniform_3f(&self, location: i32, x: f32, y: f32, z: f32) {
        self.log(format!("uniform_3f {location} {x} {y} {z}"));
    }
    fn uniform_4f(&self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        self.log(format!("uniform_4f {location} {x} {y} {z} {w}"));
    }
    fn uniform_4fv(&self, location: i32, values: &[f32]) -> Result<()> {
        self.memory(format!("uniform_4fv {location} {}", values.len()))
    }
    fn uniform_matrix_3fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()> {
        self.memory(format!(
            "uniform_matrix_3fv {location} {transpose} {}",
            values.len()
        ))
    }
    fn uniform_matrix_4fv(&self, location: i32, transpose: bool, values: &[f32]) -> Result<()> {
        self.memory(format!(
            "uniform_matrix_4fv {location} {transpose} {}",
            values.len()
        ))
    }
}
