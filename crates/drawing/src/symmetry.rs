//! Symmetry transformer - rotation/reflection replication of stamps
//!
//! Pure functions: one stamp in, the full set of symmetric copies out.
//! The engine renders exactly what [`expand`] returns; the i = N rotation
//! is a full turn and lands on the original position, so the visible copy
//! count equals the sector count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Stamp;

/// Symmetry configuration shared by rendering, erasing, and the overlay
/// guides. Owned by the stroke engine; there is exactly one copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryConfig {
    /// Rotation center in surface coordinates.
    pub center: Vec2,
    /// Sector count N. Zero means nothing is drawn at all (distinct from
    /// one, which draws a single copy).
    pub sectors: u32,
    /// Whether newly created stamps record the mirror flag.
    pub mirror: bool,
}

impl SymmetryConfig {
    pub fn new(center: Vec2, sectors: u32, mirror: bool) -> Self {
        Self {
            center,
            sectors,
            mirror,
        }
    }
}

/// Expand one stamp into its rotated (and, if the stamp is mirrored,
/// reflected) copies.
///
/// For i = 1..=N the stamp is rotated by `i * 2pi/N` about the config
/// center. When the stamp's mirror flag is set, each rotated copy is
/// followed immediately by the same rotation applied to the stamp
/// reflected across the vertical line through the center. The enumeration
/// order is fixed so erase-overlap scans are reproducible.
///
/// Rotating a circle moves only its center; radius and color carry over.
pub fn expand(stamp: &Stamp, config: &SymmetryConfig) -> Vec<Stamp> {
    if config.sectors == 0 {
        return Vec::new();
    }

    let per_sector = if stamp.mirrored { 2 } else { 1 };
    let mut copies = Vec::with_capacity(config.sectors as usize * per_sector);

    let step = std::f32::consts::TAU / config.sectors as f32;
    let reflected = Vec2::new(2.0 * config.center.x - stamp.center.x, stamp.center.y);

    for i in 1..=config.sectors {
        let rotation = Vec2::from_angle(i as f32 * step);

        let rotated = config.center + rotation.rotate(stamp.center - config.center);
        copies.push(stamp.with_center(rotated));

        if stamp.mirrored {
            let mirrored = config.center + rotation.rotate(reflected - config.center);
            copies.push(stamp.with_center(mirrored));
        }
    }

    copies
}

/// Endpoint pairs of the radial sector divider lines, for an overlay
/// renderer. Reads the same config the engine draws with, so the overlay
/// can never disagree with the pattern underneath it.
///
/// `extent` is the line length from the center outward. A single sector has
/// no dividers, so N <= 1 yields no lines.
pub fn sector_guides(config: &SymmetryConfig, extent: f32) -> Vec<(Vec2, Vec2)> {
    if config.sectors <= 1 {
        return Vec::new();
    }

    let step = std::f32::consts::TAU / config.sectors as f32;
    let up = Vec2::new(0.0, -extent);

    (1..=config.sectors)
        .map(|i| {
            let rotation = Vec2::from_angle(i as f32 * step);
            (config.center, config.center + rotation.rotate(up))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn assert_near(a: Vec2, b: Vec2) {
        assert!(
            (a - b).length() < EPS,
            "expected {b:?}, got {a:?} (off by {})",
            (a - b).length()
        );
    }

    fn config(sectors: u32) -> SymmetryConfig {
        SymmetryConfig::new(Vec2::new(300.0, 300.0), sectors, false)
    }

    #[test]
    fn test_expand_four_sectors() {
        // Single stamp at (100, 100), radius 5, rotated about (300, 300):
        // copies at the four 90-degree rotations, the last back on the
        // original position.
        let stamp = Stamp::new(Vec2::new(100.0, 100.0), 5.0, [0, 0, 0], false);
        let copies = expand(&stamp, &config(4));

        assert_eq!(copies.len(), 4);
        assert_near(copies[0].center, Vec2::new(500.0, 100.0));
        assert_near(copies[1].center, Vec2::new(500.0, 500.0));
        assert_near(copies[2].center, Vec2::new(100.0, 500.0));
        assert_near(copies[3].center, Vec2::new(100.0, 100.0));

        for copy in &copies {
            assert_eq!(copy.radius, 5.0);
            assert_eq!(copy.color, stamp.color);
        }
    }

    #[test]
    fn test_expand_one_sector_is_identity() {
        let stamp = Stamp::new(Vec2::new(150.0, 220.0), 4.0, [10, 20, 30], false);
        let copies = expand(&stamp, &config(1));

        assert_eq!(copies.len(), 1);
        assert_near(copies[0].center, stamp.center);
    }

    #[test]
    fn test_expand_zero_sectors_is_empty() {
        let stamp = Stamp::new(Vec2::new(150.0, 220.0), 4.0, [0, 0, 0], false);
        assert!(expand(&stamp, &config(0)).is_empty());
    }

    #[test]
    fn test_expand_mirrored_doubles_copies() {
        let stamp = Stamp::new(Vec2::new(200.0, 300.0), 4.0, [0, 0, 0], true);
        let copies = expand(&stamp, &config(1));

        // Rotated copy first, its reflection immediately after.
        assert_eq!(copies.len(), 2);
        assert_near(copies[0].center, Vec2::new(200.0, 300.0));
        assert_near(copies[1].center, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_expand_mirror_reflects_before_rotating() {
        // Stamp at (300, 100), i.e. straight up from the center. Reflection
        // across the vertical axis leaves it in place, so for N = 2 the
        // mirrored copies must coincide with the rotated ones.
        let stamp = Stamp::new(Vec2::new(300.0, 100.0), 4.0, [0, 0, 0], true);
        let copies = expand(&stamp, &config(2));

        assert_eq!(copies.len(), 4);
        assert_near(copies[0].center, copies[1].center);
        assert_near(copies[2].center, copies[3].center);
        assert_near(copies[0].center, Vec2::new(300.0, 500.0));
    }

    #[test]
    fn test_expand_copy_count_over_sector_range() {
        let plain = Stamp::new(Vec2::new(120.0, 80.0), 3.0, [0, 0, 0], false);
        let mirrored = Stamp::new(Vec2::new(120.0, 80.0), 3.0, [0, 0, 0], true);

        for n in 1..=12 {
            assert_eq!(expand(&plain, &config(n)).len(), n as usize);
            assert_eq!(expand(&mirrored, &config(n)).len(), 2 * n as usize);
        }
    }

    #[test]
    fn test_expand_rotation_angles() {
        // Each copy must sit at the same distance from the center, at
        // ascending angle increments of 2pi/N.
        let stamp = Stamp::new(Vec2::new(400.0, 300.0), 2.0, [0, 0, 0], false);
        let cfg = config(6);
        let copies = expand(&stamp, &cfg);

        let base = stamp.center - cfg.center;
        for (i, copy) in copies.iter().enumerate() {
            let rel = copy.center - cfg.center;
            assert!((rel.length() - base.length()).abs() < EPS);

            let angle = (i as f32 + 1.0) * std::f32::consts::TAU / 6.0;
            assert_near(rel, Vec2::from_angle(angle).rotate(base));
        }
    }

    #[test]
    fn test_sector_guides() {
        let cfg = config(4);
        let guides = sector_guides(&cfg, 400.0);

        assert_eq!(guides.len(), 4);
        for (start, end) in &guides {
            assert_eq!(*start, cfg.center);
            assert!(((*end - *start).length() - 400.0).abs() < EPS);
        }

        // No dividers for a single sector or an empty pattern.
        assert!(sector_guides(&config(1), 400.0).is_empty());
        assert!(sector_guides(&config(0), 400.0).is_empty());
    }
}
