//! Camera rigs: the fixed grid view and the optional HMD override.
//!
//! The demo uses a single stationary camera. When an [`HmdState`] is
//! supplied, the tracked head orientation and per-eye field of view take
//! over from the fixed rig and the viewport shrinks to the device's render
//! target.

use glam::{Mat4, Quat, Vec3, Vec4};

/// Fixed camera position for the grid view.
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, -35.0);
/// The camera always looks at the grid center.
pub const TARGET: Vec3 = Vec3::ZERO;
/// Vertical field of view of the default projection, in degrees.
pub const FOV_Y_DEGREES: f32 = 60.0;
/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance.
pub const Z_FAR: f32 = 100.0;

/// View matrix of the fixed rig: eye at [`EYE`] looking at [`TARGET`].
#[must_use]
pub fn view_matrix() -> Mat4 {
    Mat4::look_at_rh(EYE, TARGET, Vec3::Y)
}

/// Symmetric perspective projection for the given aspect ratio.
///
/// glam's `perspective_rh` maps depth to the 0..1 range wgpu expects.
#[must_use]
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

// ============================================================================
// HMD override
// ============================================================================

/// Per-eye field of view, expressed as view-space tangents of the four
/// frustum half-angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeFov {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
}

impl EyeFov {
    /// Symmetric FOV from a vertical angle (degrees) and an aspect ratio.
    #[must_use]
    pub fn symmetric(fov_y_degrees: f32, aspect: f32) -> Self {
        let half = (fov_y_degrees.to_radians() * 0.5).tan();
        Self {
            up: half,
            down: half,
            left: half * aspect,
            right: half * aspect,
        }
    }
}

/// Head-mounted display state injected by an external tracking source.
///
/// The demo does not talk to any headset itself; whoever constructs the
/// renderer settings is responsible for feeding a pose here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HmdState {
    /// Tracked head orientation.
    pub orientation: Quat,
    /// Field of view of the rendered eye.
    pub fov: EyeFov,
    /// Device render target width in pixels.
    pub width: u32,
    /// Device render target height in pixels.
    pub height: u32,
}

/// View matrix from a tracked head pose: the camera sits at [`EYE`] and
/// turns with the device orientation.
#[must_use]
pub fn hmd_view_matrix(orientation: Quat) -> Mat4 {
    Mat4::from_rotation_translation(orientation, EYE).inverse()
}

/// Off-center perspective projection from per-eye FOV tangents, mapping
/// depth to 0..1.
///
/// With symmetric tangents this reduces to [`projection_matrix`].
#[must_use]
pub fn hmd_projection_matrix(fov: EyeFov, z_near: f32, z_far: f32) -> Mat4 {
    let inv_width = 1.0 / (fov.left + fov.right);
    let inv_height = 1.0 / (fov.up + fov.down);
    let r = z_far / (z_near - z_far);
    Mat4::from_cols(
        Vec4::new(2.0 * inv_width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * inv_height, 0.0, 0.0),
        Vec4::new(
            (fov.right - fov.left) * inv_width,
            (fov.up - fov.down) * inv_height,
            r,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, r * z_near, 0.0),
    )
}

// ============================================================================
// Per-frame view selection
// ============================================================================

/// Per-frame view parameters fed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    /// Combined `projection * view` matrix.
    pub view_projection: Mat4,
    /// Viewport override in pixels; `None` renders to the full surface.
    pub viewport: Option<(u32, u32)>,
}

/// Computes this frame's view, either from the fixed rig or from the HMD.
///
/// `surface_size` is the current window surface in pixels. It sets the
/// aspect ratio of the fixed rig and caps any HMD viewport override, since
/// the viewport can never exceed the surface it renders into.
#[must_use]
pub fn frame_view(surface_size: (u32, u32), hmd: Option<&HmdState>) -> FrameView {
    let (width, height) = surface_size;
    match hmd {
        Some(hmd) => {
            let view = hmd_view_matrix(hmd.orientation);
            let proj = hmd_projection_matrix(hmd.fov, Z_NEAR, Z_FAR);
            FrameView {
                view_projection: proj * view,
                viewport: Some((hmd.width.min(width), hmd.height.min(height))),
            }
        }
        None => {
            let aspect = width as f32 / height.max(1) as f32;
            FrameView {
                view_projection: projection_matrix(aspect) * view_matrix(),
                viewport: None,
            }
        }
    }
}
