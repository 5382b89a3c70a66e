//! Composition surface - CPU raster the symmetric pattern is painted onto

use glam::Vec2;

/// A fixed-size RGBA CPU surface.
///
/// Pixels are stored row-major as `[r, g, b, a]` f32 components. The stroke
/// engine owns the surface exclusively; a renderer only ever sees a
/// [`Snapshot`].
pub struct CanvasSurface {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
}

impl CanvasSurface {
    /// Create a new surface filled with the given background color.
    pub fn new(width: u32, height: u32, background: [f32; 4]) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![background; pixel_count],
        }
    }

    /// Clear the surface to a solid color.
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Get a pixel, or None if the coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel. Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Source-over blend at a pixel, used for the anti-aliased circle rim.
    #[inline]
    fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];

        let alpha = color[3] * coverage;
        let inv = 1.0 - alpha;
        self.pixels[index] = [
            color[0] * alpha + dst[0] * inv,
            color[1] * alpha + dst[1] * inv,
            color[2] * alpha + dst[2] * inv,
            alpha + dst[3] * inv,
        ];
    }

    /// Composite a filled, anti-aliased circle.
    ///
    /// Interior pixels are overwritten (painter's algorithm, later circles
    /// paint over earlier ones); only the one-pixel rim is blended for the
    /// anti-aliased edge. Parts of the circle outside the surface are
    /// silently clipped.
    ///
    /// Returns the affected bounding box `(x, y, width, height)`, or None
    /// if the circle lies entirely off-surface or has no area.
    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    ) -> Option<(u32, u32, u32, u32)> {
        if radius <= 0.0 {
            return None;
        }

        // Bounding box, half a pixel wider for the anti-aliased rim.
        let x_min_f = (center.x - radius - 0.5).floor();
        let y_min_f = (center.y - radius - 0.5).floor();
        let x_max_f = (center.x + radius + 0.5).ceil();
        let y_max_f = (center.y + radius + 0.5).ceil();

        let x_min = (x_min_f.max(0.0) as u32).min(self.width);
        let y_min = (y_min_f.max(0.0) as u32).min(self.height);
        let x_max = (x_max_f.max(0.0) as u32).min(self.width);
        let y_max = (y_max_f.max(0.0) as u32).min(self.height);

        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        for py in y_min..y_max {
            for px in x_min..x_max {
                // Distance from the pixel center.
                let dx = (px as f32 + 0.5) - center.x;
                let dy = (py as f32 + 0.5) - center.y;
                let dist = (dx * dx + dy * dy).sqrt();

                // Coverage ramps from 1 inside the circle to 0 half a pixel
                // past the edge.
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage >= 1.0 {
                    self.set_pixel(px, py, color);
                } else if coverage > 0.0 {
                    self.blend_pixel(px, py, color, coverage);
                }
            }
        }

        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Raw pixel data as bytes, suitable for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Immutable copy of the current pixel contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// An immutable copy of the surface, safe to hand to a renderer or gallery
/// while the engine keeps mutating the live surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
}

impl Snapshot {
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Raw pixel data as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to packed 8-bit RGBA, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            for component in pixel {
                out.push((component.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        out
    }
}
