//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB)
pub mod colors {
    /// `0xRRGGBB` to RGBA
    pub const fn hex(rgb: u32, alpha: f32) -> [f32; 4] {
        [
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
            alpha,
        ]
    }

    pub const SKY_TOP: [f32; 4] = hex(0x87CEEB, 1.0);
    pub const SKY_BOTTOM: [f32; 4] = hex(0x98FB98, 1.0);
    pub const CLOUD: [f32; 4] = hex(0xFFFFFF, 0.3);

    pub const PIPE: [f32; 4] = hex(0x228B22, 1.0);
    pub const PIPE_CAP: [f32; 4] = hex(0x32CD32, 1.0);
    pub const PIPE_HIGHLIGHT: [f32; 4] = hex(0x90EE90, 1.0);
    pub const PIPE_SHADOW: [f32; 4] = hex(0x006400, 1.0);
    pub const PIPE_SIDE_LIGHT: [f32; 4] = hex(0x90EE90, 0.3);
    pub const PIPE_SIDE_DARK: [f32; 4] = hex(0x006400, 0.4);

    pub const BIRD: [f32; 4] = hex(0xFF4444, 1.0);
    pub const WING: [f32; 4] = hex(0xCC2222, 1.0);
    pub const EYE: [f32; 4] = hex(0xFFFFFF, 1.0);
    pub const PUPIL: [f32; 4] = hex(0x000000, 1.0);
    pub const BEAK: [f32; 4] = hex(0xFFA500, 1.0);

    pub const START_TINT: [f32; 4] = hex(0x000000, 0.1);
    pub const GAME_OVER_TINT: [f32; 4] = hex(0xDC143C, 0.2);
}
