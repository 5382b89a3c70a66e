//! Stroke ledger - committed stroke groups plus the redo stack

use tracing::debug;

use crate::types::{Stamp, StrokeGroup};

/// Ordered record of every committed gesture, with undo/redo history.
///
/// Insertion order is z-order on replay. The redo stack only survives until
/// the next edit: any commit or erase invalidates it.
#[derive(Debug, Default)]
pub struct StrokeLedger {
    committed: Vec<StrokeGroup>,
    redo_stack: Vec<StrokeGroup>,
}

impl StrokeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed groups in insertion order.
    pub fn committed(&self) -> &[StrokeGroup] {
        &self.committed
    }

    /// Append a finished gesture. Empty groups are dropped; any non-empty
    /// commit invalidates the redo history.
    pub fn commit(&mut self, group: StrokeGroup) {
        if group.is_empty() {
            return;
        }
        debug!("commit: {} stamps, {} groups total", group.len(), self.committed.len() + 1);
        self.committed.push(group);
        self.redo_stack.clear();
    }

    /// Move the most recent group onto the redo stack.
    ///
    /// Returns false (not an error) when there is nothing to undo. The
    /// caller is responsible for replaying the surface afterwards.
    pub fn undo(&mut self) -> bool {
        let Some(group) = self.committed.pop() else {
            debug!("undo: nothing committed");
            return false;
        };
        debug!("undo: {} stamps back onto redo stack", group.len());
        self.redo_stack.push(group);
        true
    }

    /// Re-append the most recently undone group.
    ///
    /// Returns false when the redo stack is empty. The caller replays.
    pub fn redo(&mut self) -> bool {
        let Some(group) = self.redo_stack.pop() else {
            debug!("redo: stack empty");
            return false;
        };
        debug!("redo: restoring {} stamps", group.len());
        self.committed.push(group);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop the redo history. The engine calls this on pointer-down:
    /// starting any new gesture invalidates redo, not just finishing one.
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Empty the committed sequence. The redo stack is deliberately left
    /// untouched, matching the long-standing behavior this tool inherits:
    /// a redo after clear revives the last undone stroke onto the blank
    /// surface. See DESIGN.md.
    pub fn clear_all(&mut self) {
        self.committed.clear();
    }

    /// Remove every committed stamp that overlaps any of the eraser
    /// candidate circles, in place.
    ///
    /// Overlap is the inclusive circle test: center distance <= sum of
    /// radii, compared as squared values. Groups emptied by removal persist
    /// as empty groups (replaying them is a no-op). This mutation does not
    /// create an undo entry, but it is still an edit, so the redo stack is
    /// cleared. Returns the number of stamps removed.
    pub fn erase_overlapping(&mut self, candidates: &[Stamp]) -> usize {
        let mut removed = 0;
        for group in &mut self.committed {
            let before = group.len();
            group.retain(|stamp| !candidates.iter().any(|eraser| overlaps(eraser, stamp)));
            removed += before - group.len();
        }
        self.redo_stack.clear();
        debug!("erase: removed {removed} stamps against {} candidates", candidates.len());
        removed
    }

    /// Total stamps across all committed groups.
    pub fn stamp_count(&self) -> usize {
        self.committed.iter().map(StrokeGroup::len).sum()
    }
}

/// Circle-overlap test, inclusive at exact tangency.
#[inline]
fn overlaps(a: &Stamp, b: &Stamp) -> bool {
    let radii = a.radius + b.radius;
    a.center.distance_squared(b.center) <= radii * radii
}
