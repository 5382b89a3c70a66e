use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single circular paint mark.
///
/// Stamps are immutable once created: the stroke engine builds one per
/// pointer sample and hands it to the ledger on commit. The `mirrored` flag
/// is captured from the engine configuration at creation time so that later
/// configuration changes never alter how an existing stamp replicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Center in surface coordinates.
    pub center: Vec2,
    /// Radius in pixels (always positive, enforced at the setter boundary).
    pub radius: f32,
    /// Color as 8-bit RGB.
    pub color: [u8; 3],
    /// Whether this stamp is reflected across the vertical axis in addition
    /// to being rotated.
    pub mirrored: bool,
}

impl Stamp {
    pub fn new(center: Vec2, radius: f32, color: [u8; 3], mirrored: bool) -> Self {
        Self {
            center,
            radius,
            color,
            mirrored,
        }
    }

    /// Copy of this stamp at a different center, same radius/color/flags.
    pub fn with_center(&self, center: Vec2) -> Self {
        Self { center, ..*self }
    }

    /// Color as normalized RGBA for surface compositing.
    pub fn color_rgba(&self) -> [f32; 4] {
        [
            self.color[0] as f32 / 255.0,
            self.color[1] as f32 / 255.0,
            self.color[2] as f32 / 255.0,
            1.0,
        ]
    }
}

/// The ordered stamps produced by one press-drag-release gesture.
///
/// Append-only while the gesture is in progress; once committed to the
/// ledger the only mutation path is the eraser's overlap removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeGroup {
    stamps: Vec<Stamp>,
}

impl StrokeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stamp: Stamp) {
        self.stamps.push(stamp);
    }

    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stamp> {
        self.stamps.iter()
    }

    /// Keep only stamps the predicate accepts. Used by the eraser.
    pub(crate) fn retain(&mut self, f: impl FnMut(&Stamp) -> bool) {
        self.stamps.retain(f);
    }
}

impl<'a> IntoIterator for &'a StrokeGroup {
    type Item = &'a Stamp;
    type IntoIter = std::slice::Iter<'a, Stamp>;

    fn into_iter(self) -> Self::IntoIter {
        self.stamps.iter()
    }
}
