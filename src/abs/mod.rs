//! Thin wrappers over SDL2 and OpenGL: application setup, shader management and meshes.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
