//! The renderer: GPU setup, per-object resources, and the frame loop.

pub mod context;
pub mod objects;
pub mod settings;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::FrameView;
use crate::errors::Result;
use crate::grid::{self, CellDraw};
use crate::shapes::{self, PosColorVertex};

use self::context::WgpuContext;
use self::objects::ObjectBuffers;
use self::settings::{BufferKind, RendererSettings};

const SHADER_SOURCE: &str = include_str!("../shaders/cubes.wgsl");

/// Per-frame uniforms (Group 0).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct FrameUniforms {
    view_projection: Mat4,
}

/// Per-object uniforms (Group 1), padded to the dynamic offset stride.
///
/// The padding keeps each slot at 256 bytes, which satisfies
/// `min_uniform_buffer_offset_alignment` on every backend wgpu supports.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct ModelUniforms {
    model: Mat4,
    _padding: [f32; 48],
}

impl ModelUniforms {
    fn new(model: Mat4) -> Self {
        Self {
            model,
            _padding: [0.0; 48],
        }
    }
}

/// Byte stride between per-object uniform slots.
const MODEL_UNIFORM_STRIDE: u32 = std::mem::size_of::<ModelUniforms>() as u32;

/// The main renderer.
///
/// Owns the GPU context, the single render pipeline, the uniform buffers,
/// and one [`ObjectBuffers`] pair per spawned object. Dropping the renderer
/// releases all of it.
pub struct Renderer {
    ctx: WgpuContext,
    pipeline: wgpu::RenderPipeline,

    // Global resources (Group 0)
    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,

    // Per-object resources (Group 1): one 256-byte slot per grid cell,
    // bound at a dynamic offset
    model_uniform_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,

    objects: Vec<ObjectBuffers>,
    buffer_kind: BufferKind,
}

impl Renderer {
    /// Brings up the GPU and allocates every fixed-size resource: the
    /// pipeline, the frame uniforms, and a model uniform buffer with one
    /// slot per grid cell. Object buffers are created later, as objects
    /// spawn.
    pub async fn new(window: Arc<Window>, settings: &RendererSettings) -> Result<Self> {
        let size = window.inner_size();
        let ctx =
            WgpuContext::new(window, settings, size.width.max(1), size.height.max(1)).await?;

        let device = &ctx.device;

        // Group 0: frame uniforms
        let frame_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniforms"),
            contents: bytemuck::bytes_of(&FrameUniforms {
                view_projection: Mat4::IDENTITY,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Frame BindGroup Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame BindGroup"),
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        // Group 1: per-object uniforms, sized for the full grid up front
        let model_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniforms"),
            size: u64::from(MODEL_UNIFORM_STRIDE) * u64::from(grid::CELL_COUNT),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let model_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Model BindGroup Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model BindGroup"),
            layout: &model_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                // The binding window is one slot; the dynamic offset walks it
                // across the buffer.
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(u64::from(MODEL_UNIFORM_STRIDE)),
                }),
            }],
        });

        let pipeline = Self::create_pipeline(
            device,
            ctx.color_format(),
            ctx.depth_format,
            &frame_bind_group_layout,
            &model_bind_group_layout,
        );

        Ok(Self {
            ctx,
            pipeline,
            frame_uniform_buffer,
            frame_bind_group,
            model_uniform_buffer,
            model_bind_group,
            objects: Vec::new(),
            buffer_kind: settings.buffer_kind,
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        model_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[frame_layout, model_layout],
            immediate_size: 0,
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PosColorVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The shared templates wind their outward faces clockwise.
                front_face: wgpu::FrontFace::Cw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    /// Creates the GPU buffers for one newly spawned object.
    ///
    /// Every object copies the same cube template; spawning past the grid
    /// capacity is a caller bug.
    pub fn spawn_object(&mut self) {
        debug_assert!((self.objects.len() as u32) < grid::CELL_COUNT);
        let buffers = ObjectBuffers::create(
            &self.ctx.device,
            &self.ctx.queue,
            self.buffer_kind,
            &shapes::CUBE,
        );
        self.objects.push(buffers);
    }

    /// Number of objects with live GPU buffers.
    #[must_use]
    pub fn object_count(&self) -> u32 {
        self.objects.len() as u32
    }

    /// Releases every spawned object's buffer pair. Dropping the renderer
    /// has the same effect; this exists so shutdown can log what it freed.
    pub fn release_objects(&mut self) {
        log::info!("Releasing {} object buffer pairs", self.objects.len());
        self.objects.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Current surface size in pixels.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    /// Records and submits one frame.
    ///
    /// `draws` must reference only objects that have already spawned. The
    /// pass runs even with an empty draw list, so the frame still clears
    /// and presents. Surface loss reconfigures and skips the frame.
    pub fn render(&mut self, frame: &FrameView, draws: &[CellDraw]) {
        debug_assert!(draws.len() <= self.objects.len());

        let output = match self.ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = self.ctx.size();
                self.ctx.resize(width, height);
                return;
            }
            Err(e) => {
                log::warn!("Dropped frame: {e:?}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // 1. Upload frame uniforms
        let frame_uniforms = FrameUniforms {
            view_projection: frame.view_projection,
        };
        self.ctx.queue.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms),
        );

        // 2. Upload per-object model matrices, one slot per draw
        if !draws.is_empty() {
            let model_uniforms: Vec<ModelUniforms> = draws
                .iter()
                .map(|cell| ModelUniforms::new(cell.model))
                .collect();
            self.ctx.queue.write_buffer(
                &self.model_uniform_buffer,
                0,
                bytemuck::cast_slice(&model_uniforms),
            );
        }

        // 3. Record the pass
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some((width, height)) = frame.viewport {
                let (max_width, max_height) = self.ctx.size();
                pass.set_viewport(
                    0.0,
                    0.0,
                    width.min(max_width) as f32,
                    height.min(max_height) as f32,
                    0.0,
                    1.0,
                );
            }

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            for (slot, cell) in draws.iter().enumerate() {
                let object = &self.objects[cell.index as usize];
                let offset = slot as u32 * MODEL_UNIFORM_STRIDE;
                pass.set_bind_group(1, &self.model_bind_group, &[offset]);
                pass.set_vertex_buffer(0, object.vertex.slice(..));
                pass.set_index_buffer(object.index.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..object.index_count, 0, 0..1);
            }
        }

        // 4. Submit and present
        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
