//! Renderer Settings
//!
//! This module defines the one-shot configuration consumed when the
//! renderer is created.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cubegrid::{App, BufferKind, RendererSettings};
//!
//! // Default: dynamic per-object buffers, vsync on
//! let settings = RendererSettings::default();
//!
//! // Immutable buffers and an uncapped frame rate
//! let settings = RendererSettings {
//!     buffer_kind: BufferKind::Static,
//!     vsync: false,
//!     ..Default::default()
//! };
//!
//! App::new(settings).run()?;
//! ```

use crate::camera::HmdState;

// ---------------------------------------------------------------------------
// BufferKind
// ---------------------------------------------------------------------------

/// Storage strategy for the per-object vertex and index buffers.
///
/// Both kinds draw identically; they differ only in how the template data
/// reaches the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferKind {
    /// Immutable buffers whose contents are supplied at creation and never
    /// written again.
    Static,
    /// Updatable buffers created empty with `COPY_DST` and filled through
    /// the queue after creation.
    #[default]
    Dynamic,
}

// ---------------------------------------------------------------------------
// RendererSettings
// ---------------------------------------------------------------------------

/// Global configuration for renderer initialization.
///
/// This struct is consumed once when the [`Renderer`](crate::Renderer) is
/// created. None of the fields can be changed afterwards.
///
/// # Fields
///
/// | Field              | Description                            | Default           |
/// |--------------------|----------------------------------------|-------------------|
/// | `width` / `height` | Initial window size in logical pixels  | 1280 x 720        |
/// | `vsync`            | Vertical sync enabled                  | `true`            |
/// | `power_preference` | GPU adapter selection strategy         | `HighPerformance` |
/// | `clear_color`      | Framebuffer clear color                | Dark gray         |
/// | `required_features`| Required wgpu features                 | Empty             |
/// | `required_limits`  | Required wgpu limits                   | Default           |
/// | `depth_format`     | Depth buffer texture format            | `Depth32Float`    |
/// | `buffer_kind`      | Per-object buffer storage strategy     | `Dynamic`         |
/// | `hmd`              | Optional HMD pose/FOV override         | `None`            |
#[derive(Debug, Clone)]
pub struct RendererSettings {
    // === Window ===
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,

    /// Enable vertical synchronization (VSync).
    ///
    /// When `true`, the frame rate is capped to the display refresh rate,
    /// reducing screen tearing and power consumption.
    /// When `false`, the frame rate is uncapped, which may cause tearing
    /// but reduces input latency.
    pub vsync: bool,

    // === GPU / Backend Configuration ===
    /// GPU adapter selection preference.
    ///
    /// - `HighPerformance`: Prefer discrete / dedicated GPU
    /// - `LowPower`: Prefer integrated GPU (better battery life)
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features that must be supported by the adapter.
    ///
    /// Initialization fails if these features are unavailable. The demo
    /// itself needs nothing beyond the baseline.
    pub required_features: wgpu::Features,

    /// Required wgpu limits (max buffer sizes, binding counts, etc.).
    pub required_limits: wgpu::Limits,

    // === Rendering Defaults ===
    /// Background clear color for the main render target.
    pub clear_color: wgpu::Color,

    /// Depth buffer texture format.
    pub depth_format: wgpu::TextureFormat,

    /// Storage strategy for the per-object vertex and index buffers.
    pub buffer_kind: BufferKind,

    /// Optional head-mounted display override.
    ///
    /// When set, the tracked pose and per-eye FOV replace the fixed camera
    /// rig and rendering is restricted to the device's render target size.
    pub hmd: Option<HmdState>,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            // Dark gray, 0x303030ff.
            clear_color: wgpu::Color {
                r: 48.0 / 255.0,
                g: 48.0 / 255.0,
                b: 48.0 / 255.0,
                a: 1.0,
            },
            depth_format: wgpu::TextureFormat::Depth32Float,
            buffer_kind: BufferKind::default(),
            hmd: None,
        }
    }
}
