//! Symmetric freehand drawing core - the "doily" stroke engine
//!
//! This crate provides the data model and algorithms for radially
//! symmetric drawing:
//! - [`types::Stamp`] - One circular paint mark
//! - [`types::StrokeGroup`] - The stamps of one press-drag-release gesture
//! - [`symmetry`] - Rotation/reflection replication of stamps
//! - [`surface`] - CPU RGBA surface the pattern is composited onto
//! - [`ledger`] - Committed strokes, undo/redo, erase-by-proximity
//! - [`engine`] - The orchestrator driving everything from pointer input
//!
//! Window layout, sliders, and gallery display live in the host
//! application; this crate exposes the setters and commands they call.

pub mod constants;
pub mod engine;
pub mod ledger;
pub mod surface;
pub mod symmetry;
pub mod types;
pub mod validation;

pub use constants::*;
pub use engine::*;
pub use ledger::*;
pub use surface::*;
pub use symmetry::*;
pub use types::*;
pub use validation::*;
