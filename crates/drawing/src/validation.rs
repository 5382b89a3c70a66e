use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("brush size must be positive, got {0}")]
    NonPositiveBrushSize(f32),
    #[error("surface dimensions must be non-zero, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
}

/// Validate a brush diameter at the setter boundary.
///
/// A non-positive diameter would put a degenerate radius into the symmetry
/// expansion, so it is rejected here rather than clamped.
pub fn check_brush_size(px: f32) -> Result<f32, ConfigError> {
    if px > 0.0 && px.is_finite() {
        Ok(px)
    } else {
        Err(ConfigError::NonPositiveBrushSize(px))
    }
}

/// Validate surface dimensions before allocating the pixel buffer.
pub fn check_surface_dims(width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::EmptySurface { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_bounds() {
        assert!(check_brush_size(9.0).is_ok());
        assert!(check_brush_size(0.5).is_ok());
        assert!(check_brush_size(0.0).is_err());
        assert!(check_brush_size(-3.0).is_err());
        assert!(check_brush_size(f32::NAN).is_err());
    }

    #[test]
    fn test_surface_dims() {
        assert!(check_surface_dims(600, 600).is_ok());
        assert!(check_surface_dims(0, 600).is_err());
        assert!(check_surface_dims(600, 0).is_err());
    }
}
