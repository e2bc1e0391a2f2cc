//! Per-object GPU buffers.
//!
//! Every spawned object owns its own vertex/index buffer pair, copied from
//! a shared [`ShapeTemplate`]. Releasing an object is just dropping its
//! [`ObjectBuffers`].

use wgpu::util::DeviceExt;

use crate::render::settings::BufferKind;
use crate::shapes::ShapeTemplate;

/// The vertex/index buffer pair backing one spawned object.
#[derive(Debug)]
pub struct ObjectBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl ObjectBuffers {
    /// Creates the buffer pair for `shape`, filled with the template data.
    ///
    /// `Static` buffers receive their contents at creation. `Dynamic`
    /// buffers are created empty and filled through the queue, so their
    /// contents could be rewritten later.
    #[must_use]
    pub fn create(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        kind: BufferKind,
        shape: &ShapeTemplate,
    ) -> Self {
        let (vertex, index) = match kind {
            BufferKind::Static => (
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Object Vertex Buffer"),
                    contents: shape.vertex_bytes(),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Object Index Buffer"),
                    contents: shape.index_bytes(),
                    usage: wgpu::BufferUsages::INDEX,
                }),
            ),
            BufferKind::Dynamic => {
                let vertex = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Object Vertex Buffer"),
                    size: shape.vertex_bytes().len() as wgpu::BufferAddress,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let index = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Object Index Buffer"),
                    size: shape.index_bytes().len() as wgpu::BufferAddress,
                    usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                queue.write_buffer(&vertex, 0, shape.vertex_bytes());
                queue.write_buffer(&index, 0, shape.index_bytes());
                (vertex, index)
            }
        };

        Self {
            vertex,
            index,
            index_count: shape.index_count(),
        }
    }
}
