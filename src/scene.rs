//! The two-triangle scene: shaders, geometry and the per-frame draw.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use glow::HasContext;

use crate::abs::{Mesh, PositionVertex, Shader, ShaderProgram, ShaderStage};

pub const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
pub const ORANGE_FRAGMENT_SHADER: &str = include_str!("shaders/orange.frag");
pub const YELLOW_FRAGMENT_SHADER: &str = include_str!("shaders/yellow.frag");

/// Left half of the square, drawn orange.
pub const ORANGE_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex::new(-0.5, -0.5, 0.0),
    PositionVertex::new(-0.5, 0.5, 0.0),
    PositionVertex::new(0.5, -0.5, 0.0),
];

/// Right half of the square, drawn yellow.
pub const YELLOW_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex::new(0.5, -0.5, 0.0),
    PositionVertex::new(-0.5, 0.5, 0.0),
    PositionVertex::new(0.5, 0.5, 0.5),
];

/// GPU resources for both triangles.
///
/// The compiled shaders are kept alive alongside the programs and are deleted together with
/// them when the scene is dropped.
pub struct TriangleScene {
    orange_program: ShaderProgram,
    yellow_program: ShaderProgram,
    orange_mesh: Mesh,
    yellow_mesh: Mesh,
    _shaders: [Shader; 3],
}

impl TriangleScene {
    /// Compiles the shaders, links both programs and uploads both triangles.
    pub fn new(gl: &Arc<glow::Context>) -> anyhow::Result<Self> {
        let vertex = compile(gl, ShaderStage::Vertex, VERTEX_SHADER, "triangle")?;
        let orange = compile(gl, ShaderStage::Fragment, ORANGE_FRAGMENT_SHADER, "orange")?;
        let yellow = compile(gl, ShaderStage::Fragment, YELLOW_FRAGMENT_SHADER, "yellow")?;

        let orange_program = ShaderProgram::new(gl, &[&vertex, &orange])
            .map_err(|e| anyhow!(e))
            .context("linking orange shader program")?;
        let yellow_program = ShaderProgram::new(gl, &[&vertex, &yellow])
            .map_err(|e| anyhow!(e))
            .context("linking yellow shader program")?;

        let orange_mesh = Mesh::new(gl, &ORANGE_TRIANGLE, glow::TRIANGLES)
            .map_err(|e| anyhow!(e))
            .context("uploading orange triangle")?;
        let yellow_mesh = Mesh::new(gl, &YELLOW_TRIANGLE, glow::TRIANGLES)
            .map_err(|e| anyhow!(e))
            .context("uploading yellow triangle")?;
        log::debug!(
            "Uploaded {} + {} vertices",
            orange_mesh.vertex_count(),
            yellow_mesh.vertex_count()
        );

        Ok(Self {
            orange_program,
            yellow_program,
            orange_mesh,
            yellow_mesh,
            _shaders: [vertex, orange, yellow],
        })
    }

    /// Draws the orange triangle, then the yellow one.
    pub fn draw(&self) {
        self.orange_program.use_program();
        self.orange_mesh.draw();
        self.yellow_program.use_program();
        self.yellow_mesh.draw();
    }
}

fn compile(
    gl: &Arc<glow::Context>,
    stage: ShaderStage,
    source: &str,
    name: &str,
) -> anyhow::Result<Shader> {
    let shader = Shader::new(gl, stage, source)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("compiling {name} shader"))?;
    log::debug!("Compiled {} shader `{name}`", shader.stage());
    Ok(shader)
}

/// Clears the colour buffer to `color`.
pub fn clear(gl: &glow::Context, color: glam::Vec4) {
    unsafe {
        gl.clear_color(color.x, color.y, color.z, color.w);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    fn signed_area(t: &[PositionVertex; 3]) -> f32 {
        let [a, b, c] = t.map(|v| v.position.truncate());
        (b - a).perp_dot(c - a) / 2.0
    }

    #[test]
    fn triangles_tile_the_square() {
        let area = signed_area(&ORANGE_TRIANGLE).abs() + signed_area(&YELLOW_TRIANGLE).abs();
        assert!((area - 1.0).abs() < f32::EPSILON);

        // Both share the diagonal from the top-left to the bottom-right corner.
        let diagonal = [Vec2::new(-0.5, 0.5), Vec2::new(0.5, -0.5)];
        for triangle in [&ORANGE_TRIANGLE, &YELLOW_TRIANGLE] {
            for corner in diagonal {
                assert!(triangle.iter().any(|v| v.position.truncate() == corner));
            }
        }
        assert!(ORANGE_TRIANGLE.iter().any(|v| v.position.truncate() == Vec2::new(-0.5, -0.5)));
        assert!(YELLOW_TRIANGLE.iter().any(|v| v.position.truncate() == Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn geometry_stays_inside_clip_space() {
        for v in ORANGE_TRIANGLE.iter().chain(YELLOW_TRIANGLE.iter()) {
            assert!(v.position.abs().cmple(Vec3::ONE).all());
        }
    }

    #[test]
    fn shaders_target_glsl_330_core() {
        for source in [VERTEX_SHADER, ORANGE_FRAGMENT_SHADER, YELLOW_FRAGMENT_SHADER] {
            assert!(source.starts_with("#version 330 core"));
        }
        assert!(VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos;"));
    }

    #[test]
    fn fragment_shaders_use_distinct_colours() {
        assert!(ORANGE_FRAGMENT_SHADER.contains("vec4(1.0f, 0.5f, 0.2f, 1.0f)"));
        assert!(YELLOW_FRAGMENT_SHADER.contains("vec4(1.0f, 1.0f, 0.1f, 1.0f)"));
    }
}
