//! Whole-surface operations: replay and snapshot export

use tracing::debug;

use crate::constants::BACKGROUND;
use crate::surface::Snapshot;

use super::StrokeEngine;

impl StrokeEngine {
    /// Clear the surface and redraw every committed stamp through the
    /// current symmetry configuration, in ledger order.
    ///
    /// Deterministic and idempotent: the same ledger and configuration
    /// always produce pixel-identical surfaces.
    pub fn replay(&mut self) {
        debug!(
            "replay: {} stamps x {} sectors",
            self.ledger.stamp_count(),
            self.symmetry.sectors
        );
        self.surface.clear(BACKGROUND);

        for group in self.ledger.committed() {
            for stamp in group {
                for copy in crate::symmetry::expand(stamp, &self.symmetry) {
                    self.surface
                        .fill_circle(copy.center, copy.radius, copy.color_rgba());
                }
            }
        }
    }

    /// Immutable copy of the current surface pixels, for the gallery or a
    /// render thread.
    pub fn export_snapshot(&self) -> Snapshot {
        self.surface.snapshot()
    }

    /// Raw live-surface bytes for same-thread texture upload.
    pub fn surface_as_bytes(&self) -> &[u8] {
        self.surface.as_bytes()
    }

    /// A single pixel of the live surface, None out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.surface.get_pixel(x, y)
    }
}
