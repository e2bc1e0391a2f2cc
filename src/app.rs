//! Application shell: window, event loop, and per-frame orchestration.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::camera;
use crate::errors::{CubeGridError, Result};
use crate::grid::{self, SpawnSchedule};
use crate::render::Renderer;
use crate::render::settings::RendererSettings;

/// Seconds between window title refreshes.
const STATS_INTERVAL: f32 = 1.0;

/// Rolling frame statistics shown in the window title.
#[derive(Debug)]
struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    /// Records a frame; returns `(fps, frame_ms)` once per interval.
    fn record(&mut self, now: Instant) -> Option<(f32, f32)> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start).as_secs_f32();
        if elapsed < STATS_INTERVAL {
            return None;
        }
        let fps = self.frames as f32 / elapsed;
        let frame_ms = elapsed * 1000.0 / self.frames as f32;
        self.window_start = now;
        self.frames = 0;
        Some((fps, frame_ms))
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    settings: RendererSettings,
    pub title: String,

    schedule: SpawnSchedule,
    start_time: Instant,
    stats: FrameStats,

    // True while the window reports a zero size (minimized).
    minimized: bool,
    // Renderer bring-up failure parked by `resumed` for `run()` to return.
    init_error: Option<CubeGridError>,
}

impl App {
    #[must_use]
    pub fn new(settings: RendererSettings) -> Self {
        let now = Instant::now();
        Self {
            window: None,
            renderer: None,
            settings,
            title: "cubegrid".into(),
            schedule: SpawnSchedule::new(),
            start_time: now,
            stats: FrameStats::new(now),
            minimized: false,
            init_error: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Runs the event loop until the window closes.
    ///
    /// A renderer bring-up failure exits the loop and is returned here, so
    /// the process terminates nonzero on a failed start.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        self.take_outcome()
    }

    /// Result of a finished run: the error parked by `resumed`, or a clean
    /// shutdown.
    fn take_outcome(&mut self) -> Result<()> {
        match self.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Applies a window size change, pausing frames while the size is zero.
    fn handle_resize(&mut self, width: u32, height: u32) {
        // Minimized windows report a zero size; there is nothing to present
        // until a real size comes back.
        self.minimized = width == 0 || height == 0;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }

    fn update_and_render(&mut self) {
        if self.minimized {
            return;
        }
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        if self.schedule.tick(elapsed) {
            renderer.spawn_object();
            log::debug!(
                "Spawned object {}/{} at t={elapsed:.2}s",
                self.schedule.spawned(),
                grid::CELL_COUNT
            );
        }
        // One buffer pair per granted spawn, always.
        debug_assert_eq!(self.schedule.spawned(), renderer.object_count());

        let frame = camera::frame_view(renderer.surface_size(), self.settings.hmd.as_ref());
        let cells = grid::visible_cells(elapsed, self.schedule.spawned());
        renderer.render(&frame, &cells);

        if let Some((fps, frame_ms)) = self.stats.record(now) {
            let title = format!(
                "{} | {fps:5.1} fps | {frame_ms:6.2} ms | {}/{} objects",
                self.title,
                self.schedule.spawned(),
                grid::CELL_COUNT
            );
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            log::debug!(
                "{fps:5.1} fps, {frame_ms:6.2} ms/frame, {} objects",
                self.schedule.spawned()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.settings.width),
                f64::from(self.settings.height),
            ));

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");
        let window = Arc::new(window);
        self.window = Some(window.clone());

        log::info!("Initializing renderer backend...");

        match pollster::block_on(Renderer::new(window, &self.settings)) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                // Objects spawn relative to this moment, not process start.
                self.start_time = Instant::now();
                self.stats = FrameStats::new(self.start_time);
            }
            Err(e) => {
                log::error!("Fatal renderer error: {e}");
                // Parked so `run()` returns it once the loop unwinds.
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.handle_resize(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.update_and_render();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.release_objects();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parked_init_error_fails_the_run() {
        let mut app = App::default();
        app.init_error = Some(CubeGridError::AdapterRequestFailed(
            "no compatible adapter".to_string(),
        ));

        let err = app.take_outcome().unwrap_err();
        assert!(matches!(err, CubeGridError::AdapterRequestFailed(_)));
        // The latch is consumed; the next outcome is a clean shutdown.
        assert!(app.take_outcome().is_ok());
    }

    #[test]
    fn test_clean_shutdown_is_ok() {
        let mut app = App::default();
        assert!(app.take_outcome().is_ok());
    }

    #[test]
    fn test_zero_size_resize_pauses_frames() {
        let mut app = App::default();
        assert!(!app.minimized);

        app.handle_resize(0, 0);
        assert!(app.minimized);

        app.handle_resize(1024, 768);
        assert!(!app.minimized);
    }
}
