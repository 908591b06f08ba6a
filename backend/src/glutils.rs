use gl::{types::*, *};
use log::{info, warn};
use std::ffi::CStr;

/// Returns the oldest pending GL error flag, if any.
pub fn gl_error() -> Option<GLenum> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return None;
    }
    Some(err)
}

/// Drains the GL error queue, logging each flag against `context`.
pub fn log_gl_errors(context: &str) {
    while let Some(err) = gl_error() {
        warn!("{context}: GL error 0x{err:04X}");
    }
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn print_opengl_info() {
    info!("GL_VENDOR = {}", gl_string(VENDOR));
    info!("GL_RENDERER = {}", gl_string(RENDERER));
    info!("GL_VERSION = {}", gl_string(VERSION));
    info!(
        "GL_SHADING_LANGUAGE_VERSION = {}",
        gl_string(SHADING_LANGUAGE_VERSION)
    );

    let mut max_attribs: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_VERTEX_ATTRIBS, &mut max_attribs) };
    info!("MAX_VERTEX_ATTRIBS = {}", max_attribs);
}

/// Rectangle handed to `glViewport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Viewport {
    /// Covers the whole framebuffer of the given size.
    pub fn full(w: i32, h: i32) -> Viewport {
        Viewport { x: 0, y: 0, w, h }
    }

    pub fn apply(&self) {
        unsafe { gl::Viewport(self.x, self.y, self.w, self.h) };
    }
}

pub fn gl_gen_vertex_array() -> u32 {
    let mut vao = 0;
    unsafe { gl::GenVertexArrays(1, &mut vao) };
    vao
}

pub fn gl_gen_buffer() -> u32 {
    let mut buffer = 0;
    unsafe { gl::GenBuffers(1, &mut buffer) };
    buffer
}

pub fn gl_bind_vertex_array(vao: u32) {
    unsafe { gl::BindVertexArray(vao) };
}

pub fn gl_bind_buffer(target: GLenum, buffer: u32) {
    unsafe { gl::BindBuffer(target, buffer) };
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

/// Describes a float attribute at `index`; `stride` and `pointer` are in floats.
pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

pub fn gl_draw_triangles_u32(index_count: usize) {
    unsafe {
        gl::DrawElements(
            TRIANGLES,
            index_count as i32,
            UNSIGNED_INT,
            std::ptr::null(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn full_viewport_starts_at_origin() {
        assert_eq!(
            Viewport::full(1024, 768),
            Viewport {
                x: 0,
                y: 0,
                w: 1024,
                h: 768
            }
        );
    }

    #[test]
    fn full_viewport_keeps_odd_sizes() {
        let vp = Viewport::full(1, 3);
        assert_eq!((vp.x, vp.y, vp.w, vp.h), (0, 0, 1, 3));
    }
}
