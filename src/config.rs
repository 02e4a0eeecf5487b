//! Compile-time application settings.

use glam::Vec4;

/// Window, context and frame settings used during bootstrap and by the render loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub clear_color: Vec4,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL",
            width: 800,
            height: 600,
            // The shaders are written against `#version 330 core`.
            gl_version: (3, 3),
            clear_color: Vec4::new(0.2, 0.3, 0.3, 1.0),
        }
    }
}
