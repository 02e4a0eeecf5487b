//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::config::AppConfig;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Field order matters: the GL context must be dropped before the window it was created for.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates a new [`App`] from the given configuration.
    ///
    /// Fails if SDL cannot be initialized, the window or GL context cannot be created, or the
    /// OpenGL function pointers cannot be loaded.
    pub fn new(config: &AppConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);

        let window = video_subsystem
            .window(config.title, config.width, config.height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| format!("Failed to create SDL window: {e}"))?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;

        // `glow` cannot report a failed load, so probe a core entry point first.
        if video_subsystem.gl_get_proc_address("glClear").is_null() {
            return Err("Failed to load OpenGL function pointers".to_string());
        }
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let event_pump = sdl.event_pump()?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }

    /// Returns the vendor, renderer and version strings reported by the driver.
    pub fn gl_info(&self) -> (String, String, String) {
        unsafe {
            (
                self.gl.get_parameter_string(glow::VENDOR),
                self.gl.get_parameter_string(glow::RENDERER),
                self.gl.get_parameter_string(glow::VERSION),
            )
        }
    }

    /// Sets the viewport to cover the whole drawable area of the window.
    ///
    /// The drawable size is in pixels and can be larger than the window size on high-DPI
    /// displays.
    pub fn fit_viewport(&self) -> (u32, u32) {
        let (width, height) = self.window.drawable_size();
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
        (width, height)
    }
}
