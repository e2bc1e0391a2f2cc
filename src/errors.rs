//! Error Types
//!
//! This module defines the error types used throughout the demo.
//!
//! # Overview
//!
//! The main error type [`CubeGridError`] covers all failure modes including:
//! - GPU adapter and device acquisition failures
//! - Window surface creation and configuration errors
//! - Event loop errors
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, CubeGridError>`.
//!
//! ```rust,ignore
//! use cubegrid::errors::{CubeGridError, Result};
//!
//! fn bring_up_gpu() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the cube grid demo.
///
/// Every variant here is fatal: the demo has no fallback path when the
/// GPU or the window system cannot be brought up. Callers are expected
/// to log the error and exit.
#[derive(Error, Debug)]
pub enum CubeGridError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the window surface.
    #[error("Failed to create window surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The adapter cannot present to the window surface.
    #[error("Surface configuration error: {0}")]
    SurfaceConfigFailed(String),

    // ========================================================================
    // Window & Event Loop Errors
    // ========================================================================
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, CubeGridError>`.
pub type Result<T> = std::result::Result<T, CubeGridError>;
