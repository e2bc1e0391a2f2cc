//! Grid layout and spawn scheduling.
//!
//! The demo arranges its objects on a fixed 11x11 grid centered on the
//! origin. Objects spawn in row-major order, one per elapsed whole second,
//! until every cell is filled. Each cell spins around the X and Y axes with
//! a phase offset derived from its grid coordinates.

use glam::{Mat4, Vec3};

/// Cells per grid side.
pub const GRID_DIM: u32 = 11;
/// Total number of grid cells; also the object cap.
pub const CELL_COUNT: u32 = GRID_DIM * GRID_DIM;
/// World-space distance between neighbouring cell centers.
pub const CELL_SPACING: f32 = 3.0;
/// World-space coordinate of the first row/column. With 11 cells spaced
/// 3 units apart this centers the grid on the origin.
pub const GRID_OFFSET: f32 = -15.0;
/// Per-column phase step of the X-axis spin, in radians.
pub const SPIN_PHASE_X: f32 = 0.21;
/// Per-row phase step of the Y-axis spin, in radians.
pub const SPIN_PHASE_Y: f32 = 0.37;

/// World-space center of the cell at (`row`, `col`).
#[must_use]
pub fn cell_position(row: u32, col: u32) -> Vec3 {
    debug_assert!(row < GRID_DIM && col < GRID_DIM);
    Vec3::new(
        GRID_OFFSET + col as f32 * CELL_SPACING,
        GRID_OFFSET + row as f32 * CELL_SPACING,
        0.0,
    )
}

/// Model matrix of the cell at (`row`, `col`) for animation time `time`
/// (seconds).
///
/// The spin phase of each axis advances with time and is offset per cell,
/// so neighbouring objects tumble visibly out of step. Rotation applies
/// X first, then Y, then the translation onto the grid.
#[must_use]
pub fn cell_transform(time: f32, row: u32, col: u32) -> Mat4 {
    let angle_x = time + col as f32 * SPIN_PHASE_X;
    let angle_y = time + row as f32 * SPIN_PHASE_Y;
    let rotation = Mat4::from_rotation_y(angle_y) * Mat4::from_rotation_x(angle_x);
    Mat4::from_translation(cell_position(row, col)) * rotation
}

// ============================================================================
// Draw list
// ============================================================================

/// One renderable cell for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDraw {
    /// Linear index in spawn order (`row * GRID_DIM + col`).
    pub index: u32,
    pub row: u32,
    pub col: u32,
    /// World transform for this frame.
    pub model: Mat4,
}

/// Collects the cells to draw this frame, in spawn order.
///
/// Spawning is row-major, so the spawned cells always form a contiguous
/// prefix of the grid. The scan stops outright at the first index that has
/// not spawned yet; no cell after it can have spawned either.
#[must_use]
pub fn visible_cells(time: f32, spawned: u32) -> Vec<CellDraw> {
    let mut cells = Vec::with_capacity(spawned.min(CELL_COUNT) as usize);
    'grid: for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let index = row * GRID_DIM + col;
            if index >= spawned {
                break 'grid;
            }
            cells.push(CellDraw {
                index,
                row,
                col,
                model: cell_transform(time, row, col),
            });
        }
    }
    cells
}

// ============================================================================
// Spawn schedule
// ============================================================================

/// Rate-limited spawn schedule: one object per elapsed whole second, at
/// most one per frame, capped at [`CELL_COUNT`].
///
/// Whole seconds are what matter. At `elapsed = 0.9` nothing spawns, and a
/// first frame arriving late at `elapsed = 5.0` grants a single spawn
/// rather than five; the schedule then catches up one object per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSchedule {
    spawned: u32,
}

impl SpawnSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self { spawned: 0 }
    }

    /// Number of spawns granted so far.
    #[must_use]
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// `true` once every grid cell has an object.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spawned >= CELL_COUNT
    }

    /// Advances the schedule for a frame at `elapsed` seconds since start.
    ///
    /// Returns `true` when this frame should spawn exactly one object.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        if self.spawned < CELL_COUNT && elapsed as u32 > self.spawned {
            self.spawned += 1;
            true
        } else {
            false
        }
    }
}
