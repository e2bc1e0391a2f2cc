//! Camera rig tests
//!
//! Tests for:
//! - The fixed view and projection
//! - HMD view and off-center projection overrides
//! - Per-frame view selection and viewport clamping

use cubegrid::camera::{self, EYE, EyeFov, FOV_Y_DEGREES, HmdState, TARGET, Z_FAR, Z_NEAR};
use glam::{Mat4, Quat, Vec3, Vec4};
use std::f32::consts::PI;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| approx_eq(*x, *y))
}

// ============================================================================
// Fixed rig
// ============================================================================

#[test]
fn the_eye_sits_behind_the_grid() {
    assert_eq!(EYE, Vec3::new(0.0, 0.0, -35.0));
    assert_eq!(TARGET, Vec3::ZERO);
}

#[test]
fn view_matrix_puts_the_eye_at_the_view_origin() {
    let view = camera::view_matrix();
    let eye_in_view = view * EYE.extend(1.0);
    assert!(vec3_approx(eye_in_view.truncate(), Vec3::ZERO));
}

#[test]
fn view_matrix_looks_straight_at_the_target() {
    let view = camera::view_matrix();
    let target_in_view = view * TARGET.extend(1.0);
    // 35 units straight ahead; forward is -Z in view space.
    assert!(vec3_approx(target_in_view.truncate(), Vec3::new(0.0, 0.0, -35.0)));
}

#[test]
fn projection_matches_glam_perspective() {
    let aspect = 16.0 / 9.0;
    let expected = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    assert!(mat4_approx(camera::projection_matrix(aspect), expected));
}

#[test]
fn projection_maps_depth_to_the_unit_range() {
    let proj = camera::projection_matrix(1.0);
    let near = proj * Vec4::new(0.0, 0.0, -Z_NEAR, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, -Z_FAR, 1.0);
    assert!(approx_eq(near.z / near.w, 0.0));
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn grid_center_projects_to_the_screen_center() {
    let frame = camera::frame_view((1280, 720), None);
    let clip = frame.view_projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip / clip.w;
    assert!(approx_eq(ndc.x, 0.0));
    assert!(approx_eq(ndc.y, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn fixed_rig_renders_to_the_full_surface() {
    let frame = camera::frame_view((1024, 768), None);
    assert_eq!(frame.viewport, None);
}

// ============================================================================
// HMD override
// ============================================================================

#[test]
fn hmd_view_keeps_the_camera_at_the_eye() {
    let poses = [
        Quat::IDENTITY,
        Quat::from_rotation_y(1.2),
        Quat::from_rotation_x(-0.4) * Quat::from_rotation_y(0.7),
    ];
    for pose in poses {
        let view = camera::hmd_view_matrix(pose);
        let eye_in_view = view * EYE.extend(1.0);
        assert!(vec3_approx(eye_in_view.truncate(), Vec3::ZERO), "pose {pose:?}");
    }
}

#[test]
fn grid_facing_hmd_pose_matches_the_fixed_rig() {
    // The fixed rig looks from -Z toward the origin; the same facing
    // expressed as a head pose is a half-turn around Y.
    let view = camera::hmd_view_matrix(Quat::from_rotation_y(PI));
    assert!(mat4_approx(view, camera::view_matrix()));
}

#[test]
fn symmetric_hmd_fov_reproduces_the_standard_projection() {
    let aspect = 1280.0 / 720.0;
    let fov = EyeFov::symmetric(FOV_Y_DEGREES, aspect);
    let proj = camera::hmd_projection_matrix(fov, Z_NEAR, Z_FAR);
    let expected = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    assert!(mat4_approx(proj, expected));
}

#[test]
fn asymmetric_hmd_fov_shifts_the_frustum_center() {
    let fov = EyeFov {
        up: 1.0,
        down: 1.0,
        left: 0.5,
        right: 1.5,
    };
    let proj = camera::hmd_projection_matrix(fov, Z_NEAR, Z_FAR);
    // The frustum center shifts toward the wider side.
    assert!(approx_eq(proj.z_axis.x, 0.5));
    assert!(approx_eq(proj.z_axis.y, 0.0));
}

#[test]
fn hmd_frame_view_uses_the_device_render_target() {
    let hmd = HmdState {
        orientation: Quat::from_rotation_y(PI),
        fov: EyeFov::symmetric(90.0, 1.0),
        width: 960,
        height: 540,
    };
    let frame = camera::frame_view((1280, 720), Some(&hmd));
    assert_eq!(frame.viewport, Some((960, 540)));
}

#[test]
fn hmd_viewport_never_exceeds_the_surface() {
    let hmd = HmdState {
        orientation: Quat::IDENTITY,
        fov: EyeFov::symmetric(90.0, 1.0),
        width: 4096,
        height: 4096,
    };
    let frame = camera::frame_view((1280, 720), Some(&hmd));
    assert_eq!(frame.viewport, Some((1280, 720)));
}

#[test]
fn hmd_frame_view_combines_pose_and_fov() {
    let hmd = HmdState {
        orientation: Quat::from_rotation_y(PI),
        fov: EyeFov::symmetric(FOV_Y_DEGREES, 1.0),
        width: 720,
        height: 720,
    };
    let frame = camera::frame_view((1280, 720), Some(&hmd));
    let expected = camera::hmd_projection_matrix(hmd.fov, Z_NEAR, Z_FAR)
        * camera::hmd_view_matrix(hmd.orientation);
    assert!(mat4_approx(frame.view_projection, expected));
}
