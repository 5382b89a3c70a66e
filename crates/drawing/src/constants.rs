/// Default drawing surface size in pixels (square).
pub const SURFACE_SIZE: u32 = 600;

/// Background color the surface is cleared to (opaque white).
pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Default brush diameter in pixels.
pub const DEFAULT_BRUSH_SIZE: f32 = 9.0;

/// Default brush color (black).
pub const DEFAULT_BRUSH_COLOR: [u8; 3] = [0, 0, 0];

/// Color the eraser paints with while a gesture is in progress.
pub const ERASER_COLOR: [u8; 3] = [255, 255, 255];

/// Default sector count (one sector, no visible replication).
pub const DEFAULT_SECTOR_COUNT: u32 = 1;
