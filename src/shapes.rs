//! Shared mesh templates.
//!
//! Every spawned object copies its geometry from one of the `'static`
//! templates in this module, so the GPU buffers of all objects hold
//! identical contents and only the per-object transform differs.

use bytemuck::{Pod, Zeroable};

/// A single vertex: position plus a packed 32-bit color.
///
/// The color is packed as `0xAABBGGRR` (alpha in the highest byte), which in
/// little-endian memory lays the bytes out as R, G, B, A. The vertex buffer
/// therefore feeds a [`wgpu::VertexFormat::Unorm8x4`] attribute directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PosColorVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Packed vertex color, `0xAABBGGRR`.
    pub color: u32,
}

impl PosColorVertex {
    /// Byte stride of one vertex in a buffer.
    pub const STRIDE: wgpu::BufferAddress =
        std::mem::size_of::<Self>() as wgpu::BufferAddress;

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Unorm8x4,
            offset: 12,
            shader_location: 1,
        },
    ];

    /// Vertex buffer layout matching the WGSL vertex inputs.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn v(x: f32, y: f32, z: f32, color: u32) -> PosColorVertex {
    PosColorVertex {
        position: [x, y, z],
        color,
    }
}

/// An immutable mesh: vertex data plus triangle-list indices.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTemplate {
    /// Short name used in buffer labels and logs.
    pub label: &'static str,
    pub vertices: &'static [PosColorVertex],
    pub indices: &'static [u16],
}

impl ShapeTemplate {
    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Vertex data as raw bytes, ready for buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index data as raw bytes, ready for buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &'static [u8] {
        bytemuck::cast_slice(self.indices)
    }
}

// 8 corners, one color per corner.
const CUBE_VERTICES: [PosColorVertex; 8] = [
    v(-1.0, 1.0, 1.0, 0xff00_0000),
    v(1.0, 1.0, 1.0, 0xff00_00ff),
    v(-1.0, -1.0, 1.0, 0xff00_ff00),
    v(1.0, -1.0, 1.0, 0xff00_ffff),
    v(-1.0, 1.0, -1.0, 0xffff_0000),
    v(1.0, 1.0, -1.0, 0xffff_00ff),
    v(-1.0, -1.0, -1.0, 0xffff_ff00),
    v(1.0, -1.0, -1.0, 0xffff_ffff),
];

// 12 triangles, 2 per face.
const CUBE_INDICES: [u16; 36] = [
    // Front face (+Z)
    0, 1, 2, //
    1, 3, 2, //
    // Back face (-Z)
    4, 6, 5, //
    5, 6, 7, //
    // Left face (-X)
    0, 2, 4, //
    4, 2, 6, //
    // Right face (+X)
    1, 5, 3, //
    5, 7, 3, //
    // Top face (+Y)
    0, 4, 1, //
    4, 5, 1, //
    // Bottom face (-Y)
    2, 3, 6, //
    6, 3, 7, //
];

// 4 corners in the Z=0 plane.
const QUAD_VERTICES: [PosColorVertex; 4] = [
    v(-1.0, 1.0, 0.0, 0xff00_0000),
    v(1.0, 1.0, 0.0, 0xff00_00ff),
    v(-1.0, -1.0, 0.0, 0xff00_ff00),
    v(1.0, -1.0, 0.0, 0xff00_ffff),
];

const QUAD_INDICES: [u16; 6] = [
    0, 1, 2, //
    1, 3, 2, //
];

/// The cube template every grid cell is spawned from.
pub const CUBE: ShapeTemplate = ShapeTemplate {
    label: "cube",
    vertices: &CUBE_VERTICES,
    indices: &CUBE_INDICES,
};

/// A flat single-sided quad, the smallest template the pipeline accepts.
/// Useful when checking buffer plumbing without a full cube.
pub const QUAD: ShapeTemplate = ShapeTemplate {
    label: "quad",
    vertices: &QUAD_VERTICES,
    indices: &QUAD_INDICES,
};
