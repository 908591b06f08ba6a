use crate::config::WindowConfig;
use crate::error::SystemError;
use crate::glutils::{self, Viewport};
use log::{debug, info, warn};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video::{GLProfile, SwapInterval};

pub enum IoEvents {
    /// Escape pressed or the window manager asked us to close.
    Quit,
    // framebuffer w, h
    Resize(i32, i32),
}

/// Maps a raw SDL event onto what the frame loop cares about.
pub fn classify_event(event: &Event) -> Option<IoEvents> {
    match event {
        Event::Quit { .. }
        | Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(IoEvents::Quit),
        Event::Window {
            win_event: WindowEvent::SizeChanged(w, h),
            ..
        } => Some(IoEvents::Resize(*w, *h)),
        _ => None,
    }
}

/// Close flag and current viewport of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameState {
    should_close: bool,
    viewport: Viewport,
}

impl FrameState {
    pub fn new(w: i32, h: i32) -> FrameState {
        FrameState {
            should_close: false,
            viewport: Viewport::full(w, h),
        }
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the state; returns the viewport to apply when it changed.
    pub fn handle(&mut self, event: &IoEvents) -> Option<Viewport> {
        match event {
            IoEvents::Quit => {
                self.should_close = true;
                None
            }
            IoEvents::Resize(w, h) => {
                let vp = Viewport::full(*w, *h);
                if vp == self.viewport {
                    return None;
                }
                self.viewport = vp;
                Some(vp)
            }
        }
    }
}

pub struct System {
    pub config: WindowConfig,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
    state: FrameState,
}

impl System {
    pub fn new(config: WindowConfig) -> Result<System, SystemError> {
        let sdl_context = sdl2::init().map_err(SystemError::WindowCreation)?;
        let video_subsystem = sdl_context
            .video()
            .map_err(SystemError::WindowCreation)?;
        info!("Init SDL2 video");

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| SystemError::WindowCreation(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(SystemError::WindowCreation)?;
        window
            .gl_make_current(&gl_ctx)
            .map_err(SystemError::WindowCreation)?;
        info!(
            "Created {}x{} window '{}'",
            config.width, config.height, config.title
        );

        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
        if !gl::Clear::is_loaded() || !gl::Viewport::is_loaded() || !gl::DrawElements::is_loaded()
        {
            return Err(SystemError::LoadGl);
        }

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug!("context version {:?}", gl_attr.context_version());
        glutils::print_opengl_info();

        let interval = if config.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            warn!("could not set swap interval (vsync={}): {e}", config.vsync);
        }

        let event_pump = sdl_context
            .event_pump()
            .map_err(SystemError::WindowCreation)?;

        let (w, h) = window.drawable_size();
        let state = FrameState::new(w as i32, h as i32);
        state.viewport().apply();

        Ok(System {
            config,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
            state,
        })
    }

    pub fn should_close(&self) -> bool {
        self.state.should_close()
    }

    /// Drains pending events without blocking.
    pub fn process_io_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            let Some(io) = classify_event(&event) else {
                continue;
            };
            if let Some(vp) = self.state.handle(&io) {
                debug!("framebuffer resized to {}x{}", vp.w, vp.h);
                vp.apply();
            }
        }
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
    }

    pub fn clear_screen(&mut self) {
        let [r, g, b] = self.config.clear_color;
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
