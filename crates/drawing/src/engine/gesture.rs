//! Gesture handling: the Idle -> Drawing -> Idle state machine

use glam::Vec2;
use tracing::debug;

use crate::symmetry;
use crate::types::{Stamp, StrokeGroup};

use super::{ActiveGesture, StrokeEngine};

impl StrokeEngine {
    /// Pointer pressed: start a new gesture.
    ///
    /// Starting any gesture invalidates the redo history, even before
    /// anything is committed. The first stamp is placed at the press
    /// position and rendered immediately.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.active.is_some() {
            debug!("pointer down while drawing, ignoring");
            return;
        }

        self.ledger.clear_redo();

        let pos = Vec2::new(x, y);
        let stamp = self.make_stamp(pos);
        debug!("gesture start at ({x:.1}, {y:.1})");

        let mut group = StrokeGroup::new();
        group.push(stamp);
        self.render_stamp(&stamp);

        self.active = Some(ActiveGesture {
            group,
            last_pos: pos,
        });
    }

    /// Pointer moved while pressed: append a stamp and re-anchor.
    ///
    /// The stamp is placed at the *previous* sample position, then the
    /// anchor moves to the new one. This reproduces the stamp-trail look of
    /// continuous circular stamping along the path, not line rasterization.
    /// Ignored when no gesture is in progress.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32) {
        let Some(active) = self.active.as_mut() else {
            debug!("pointer drag with no gesture, ignoring");
            return;
        };

        let stamp = Stamp::new(
            active.last_pos,
            self.brush_size / 2.0,
            self.brush_color,
            self.symmetry.mirror,
        );
        active.group.push(stamp);
        active.last_pos = Vec2::new(x, y);

        self.render_stamp(&stamp);
    }

    /// Pointer released: finish the gesture.
    ///
    /// In paint mode the group is committed to the ledger; in erase mode it
    /// is expanded through the symmetry transformer and every overlapped
    /// committed stamp is removed. Either way the surface is replayed and
    /// the engine returns to idle. Ignored when no gesture is in progress.
    pub fn on_pointer_up(&mut self) {
        let Some(active) = self.active.take() else {
            debug!("pointer up with no gesture, ignoring");
            return;
        };

        if self.erase_mode {
            let candidates = self.eraser_candidates(&active.group);
            self.ledger.erase_overlapping(&candidates);
        } else {
            self.ledger.commit(active.group);
        }

        // Required after erase; a harmless no-op after commit, since the
        // incremental draws already match the ledger.
        self.replay();
    }

    /// A stamp at the given position with the current brush settings.
    fn make_stamp(&self, pos: Vec2) -> Stamp {
        Stamp::new(
            pos,
            self.brush_size / 2.0,
            self.brush_color,
            self.symmetry.mirror,
        )
    }

    /// Render one stamp's symmetric expansion onto the surface.
    pub(crate) fn render_stamp(&mut self, stamp: &Stamp) {
        for copy in symmetry::expand(stamp, &self.symmetry) {
            self.surface
                .fill_circle(copy.center, copy.radius, copy.color_rgba());
        }
    }

    /// The eraser's candidate set: the gesture's own stamps plus their full
    /// symmetric expansion, so one click removes every mirrored/rotated copy
    /// of a stroke, not just the one under the cursor.
    fn eraser_candidates(&self, group: &StrokeGroup) -> Vec<Stamp> {
        let mut candidates: Vec<Stamp> = group.stamps().to_vec();
        for stamp in group {
            candidates.extend(symmetry::expand(stamp, &self.symmetry));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_state_transitions() {
        let mut engine = StrokeEngine::new();
        assert!(!engine.is_drawing());

        engine.on_pointer_down(100.0, 100.0);
        assert!(engine.is_drawing());

        engine.on_pointer_drag(110.0, 100.0);
        assert!(engine.is_drawing());

        engine.on_pointer_up();
        assert!(!engine.is_drawing());
        assert_eq!(engine.ledger().committed().len(), 1);
    }

    #[test]
    fn test_drag_and_up_outside_gesture_are_ignored() {
        let mut engine = StrokeEngine::new();
        engine.on_pointer_drag(100.0, 100.0);
        engine.on_pointer_up();

        assert!(!engine.is_drawing());
        assert!(engine.ledger().committed().is_empty());
    }

    #[test]
    fn test_drag_stamps_at_previous_position() {
        let mut engine = StrokeEngine::new();
        engine.on_pointer_down(100.0, 100.0);
        engine.on_pointer_drag(150.0, 100.0);
        engine.on_pointer_drag(160.0, 110.0);
        engine.on_pointer_up();

        let group = &engine.ledger().committed()[0];
        let stamps = group.stamps();
        assert_eq!(stamps.len(), 3);
        // Press stamp at the press point; each drag stamp at the previous
        // sample, one position behind the cursor.
        assert_eq!(stamps[0].center, Vec2::new(100.0, 100.0));
        assert_eq!(stamps[1].center, Vec2::new(100.0, 100.0));
        assert_eq!(stamps[2].center, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn test_stamp_captures_brush_state() {
        let mut engine = StrokeEngine::new();
        engine.set_brush_color([10, 20, 30]);
        engine.set_brush_size(16.0).unwrap();
        engine.set_mirror(true);

        engine.on_pointer_down(200.0, 200.0);
        engine.on_pointer_up();

        let stamp = engine.ledger().committed()[0].stamps()[0];
        assert_eq!(stamp.color, [10, 20, 30]);
        assert_eq!(stamp.radius, 8.0);
        assert!(stamp.mirrored);
    }

    #[test]
    fn test_pointer_down_invalidates_redo() {
        let mut engine = StrokeEngine::new();
        engine.on_pointer_down(100.0, 100.0);
        engine.on_pointer_up();
        engine.undo();
        assert!(engine.ledger().can_redo());

        // Starting a gesture is enough; it does not need to finish.
        engine.on_pointer_down(200.0, 200.0);
        assert!(!engine.ledger().can_redo());
        engine.on_pointer_up();
        assert!(!engine.redo());
    }

    #[test]
    fn test_erase_gesture_removes_symmetric_copies() {
        let mut engine = StrokeEngine::new();
        engine.set_sector_count(4);

        // One committed stroke; its pattern has copies in all four sectors.
        engine.on_pointer_down(100.0, 100.0);
        engine.on_pointer_up();
        assert_eq!(engine.ledger().stamp_count(), 1);

        // Erase at the opposite sector's copy position (500, 500): the
        // expanded eraser set must still reach the stored stamp.
        engine.set_erase_mode(true);
        engine.on_pointer_down(500.0, 500.0);
        engine.on_pointer_up();

        assert_eq!(engine.ledger().stamp_count(), 0);
    }

    #[test]
    fn test_erase_gesture_spares_distant_strokes() {
        let mut engine = StrokeEngine::new();

        engine.on_pointer_down(105.0, 100.0);
        engine.on_pointer_up();
        engine.on_pointer_down(400.0, 400.0);
        engine.on_pointer_up();
        assert_eq!(engine.ledger().stamp_count(), 2);

        // Eraser stamp at (100, 100) with diameter 20 overlaps only the
        // first stroke (distance 5 <= 15).
        engine.set_erase_mode(true);
        engine.set_brush_size(20.0).unwrap();
        engine.on_pointer_down(100.0, 100.0);
        engine.on_pointer_up();

        assert_eq!(engine.ledger().stamp_count(), 1);
        let survivor = engine.ledger().committed()[1].stamps()[0];
        assert_eq!(survivor.center, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_erase_gesture_is_not_committed() {
        let mut engine = StrokeEngine::new();
        engine.set_erase_mode(true);
        engine.on_pointer_down(100.0, 100.0);
        engine.on_pointer_up();

        // The eraser group itself never lands in the ledger.
        assert!(engine.ledger().committed().is_empty());
    }
}
