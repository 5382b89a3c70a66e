//! Stroke engine - the orchestrator tying the pieces together
//!
//! This module owns the composition surface, the stroke ledger, and the
//! symmetry configuration, and drives them from pointer input:
//! 1. Pointer events come in via `on_pointer_down` / `on_pointer_drag` /
//!    `on_pointer_up`
//! 2. Each sample becomes a stamp, expanded through the symmetry
//!    transformer and rendered immediately
//! 3. On release the gesture is committed to (or erased against) the ledger
//! 4. Configuration changes replay the whole ledger onto a cleared surface
//!
//! The engine is single-threaded by construction; renderers read a
//! [`Snapshot`](crate::surface::Snapshot), never the live surface.

mod gesture;
mod replay;

use glam::Vec2;
use tracing::debug;

use crate::constants::{
    BACKGROUND, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_SIZE, DEFAULT_SECTOR_COUNT, ERASER_COLOR,
    SURFACE_SIZE,
};
use crate::ledger::StrokeLedger;
use crate::surface::CanvasSurface;
use crate::symmetry::SymmetryConfig;
use crate::types::StrokeGroup;
use crate::validation::{check_brush_size, check_surface_dims, ConfigError};

/// The gesture currently between pointer-down and pointer-up.
pub(crate) struct ActiveGesture {
    /// Stamps accumulated so far.
    pub(crate) group: StrokeGroup,
    /// Previous sample position; drag stamps are anchored here.
    pub(crate) last_pos: Vec2,
}

/// Symmetric stroke engine.
pub struct StrokeEngine {
    pub(crate) surface: CanvasSurface,
    pub(crate) ledger: StrokeLedger,
    pub(crate) symmetry: SymmetryConfig,
    /// Brush diameter in pixels.
    pub(crate) brush_size: f32,
    pub(crate) brush_color: [u8; 3],
    pub(crate) erase_mode: bool,
    /// Brush color remembered while the eraser is active.
    pub(crate) stashed_color: Option<[u8; 3]>,
    /// Some while a gesture is in progress (Drawing state), None when Idle.
    pub(crate) active: Option<ActiveGesture>,
}

impl StrokeEngine {
    /// Engine over the default 600x600 surface.
    pub fn new() -> Self {
        // SURFACE_SIZE is a non-zero constant, so this cannot fail.
        Self::with_size(SURFACE_SIZE, SURFACE_SIZE).expect("default surface size is non-zero")
    }

    /// Engine over a surface of the given dimensions, rotating about its
    /// center.
    pub fn with_size(width: u32, height: u32) -> Result<Self, ConfigError> {
        check_surface_dims(width, height)?;
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        Ok(Self {
            surface: CanvasSurface::new(width, height, BACKGROUND),
            ledger: StrokeLedger::new(),
            symmetry: SymmetryConfig::new(center, DEFAULT_SECTOR_COUNT, false),
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_color: DEFAULT_BRUSH_COLOR,
            erase_mode: false,
            stashed_color: None,
            active: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Whether a gesture is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Set the brush diameter in pixels. Non-positive sizes are rejected so
    /// a degenerate radius can never reach the symmetry transformer.
    pub fn set_brush_size(&mut self, px: f32) -> Result<(), ConfigError> {
        self.brush_size = check_brush_size(px)?;
        Ok(())
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn set_brush_color(&mut self, rgb: [u8; 3]) {
        self.brush_color = rgb;
    }

    pub fn brush_color(&self) -> [u8; 3] {
        self.brush_color
    }

    /// Set whether new stamps are reflected across the vertical axis in
    /// addition to being rotated. Affects future stamps only; already
    /// committed stamps keep the flag they were created with.
    pub fn set_mirror(&mut self, mirror: bool) {
        self.symmetry.mirror = mirror;
    }

    /// Set the sector count and replay the whole ledger, since every past
    /// stroke's rendered footprint changes with it. Zero is accepted and
    /// renders nothing (distinct from one).
    pub fn set_sector_count(&mut self, sectors: u32) {
        debug!("sector count {} -> {}", self.symmetry.sectors, sectors);
        self.symmetry.sectors = sectors;
        self.replay();
    }

    /// Toggle the eraser. Turning it on stashes the brush color and paints
    /// with the background color; turning it off restores the stashed color
    /// exactly. Redundant toggles are no-ops.
    pub fn set_erase_mode(&mut self, enabled: bool) {
        if enabled == self.erase_mode {
            return;
        }
        self.erase_mode = enabled;
        if enabled {
            self.stashed_color = Some(self.brush_color);
            self.brush_color = ERASER_COLOR;
        } else if let Some(color) = self.stashed_color.take() {
            self.brush_color = color;
        }
    }

    pub fn erase_mode(&self) -> bool {
        self.erase_mode
    }

    /// The single symmetry configuration, shared with overlay renderers via
    /// this accessor rather than a second mutable copy.
    pub fn symmetry(&self) -> &SymmetryConfig {
        &self.symmetry
    }

    /// Undo the last committed gesture. No-op (false) on empty history.
    pub fn undo(&mut self) -> bool {
        if self.ledger.undo() {
            self.replay();
            true
        } else {
            false
        }
    }

    /// Redo the most recently undone gesture. No-op (false) when the redo
    /// stack is empty.
    pub fn redo(&mut self) -> bool {
        if self.ledger.redo() {
            self.replay();
            true
        } else {
            false
        }
    }

    /// Discard every committed stroke and blank the surface.
    pub fn clear_all(&mut self) {
        debug!("clear: dropping {} groups", self.ledger.committed().len());
        self.ledger.clear_all();
        self.surface.clear(BACKGROUND);
    }

    /// Read access to the ledger, for hosts that persist or inspect it.
    pub fn ledger(&self) -> &StrokeLedger {
        &self.ledger
    }
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new()
    }
}
