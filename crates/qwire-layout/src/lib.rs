//! Scheduling and layout for quantum circuit diagrams.
//!
//! This crate decides where every gate of a [`qwire_ir::Circuit`] is drawn.
//! It does not render anything itself; glyph sizes come from a
//! [`GeometryProvider`], and the result is a [`Diagram`] of positioned glyphs
//! that any renderer can consume.
//!
//! # Architecture
//!
//! ```text
//! Circuit
//!    │
//!    ▼
//! schedule()  ── greedy range locking, measurements block every wire
//!    │
//!    ▼
//! group()     ── one Column per start column
//!    │
//!    ▼
//! layout()  ◄── GeometryProvider (probe at x = 0, then final at column centre)
//!    │
//!    ▼
//! Diagram     ── placed glyphs, column extents, wire segments
//! ```
//!
//! # Example
//!
//! ```rust
//! use qwire_ir::{Circuit, QubitId};
//! use qwire_layout::{LayoutOptions, StandardGlyphs, draw};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 0);
//! circuit.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let diagram = draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()).unwrap();
//! assert_eq!(diagram.num_columns(), 2);
//! assert_eq!(diagram.wire_ys(), &[1.0, -1.0]);
//! ```
//!
//! # Custom geometry
//!
//! Implement [`GeometryProvider`] to lay out against a different renderer:
//!
//! ```rust
//! use qwire_layout::{GeometryProvider, GlyphError, GlyphGeometry, GlyphRequest};
//!
//! struct Monospace;
//!
//! struct Cell {
//!     width: f64,
//!     ys: Vec<f64>,
//! }
//!
//! impl GlyphGeometry for Cell {
//!     fn width(&self) -> f64 { self.width }
//!     fn height(&self) -> f64 { 1.0 }
//!     fn occupied_wire_ys(&self) -> &[f64] { &self.ys }
//! }
//!
//! impl GeometryProvider for Monospace {
//!     type Glyph = Cell;
//!
//!     fn glyph(&self, request: &GlyphRequest<'_>) -> Result<Cell, GlyphError> {
//!         Ok(Cell {
//!             width: request.name.len() as f64,
//!             ys: request.wire_ys.to_vec(),
//!         })
//!     }
//! }
//! ```

pub mod column;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod schedule;

pub use column::{Column, group};
pub use diagram::{ColumnExtent, Diagram, PlacedGate, Viewport, WireKind, WireSegment};
pub use error::{LayoutError, LayoutResult, OperandFault};
pub use geometry::{BoundingBox, GeometryProvider, GlyphError, GlyphGeometry, GlyphRequest};
pub use glyphs::{GlyphShape, StandardGlyph, StandardGlyphs};
pub use layout::{
    ClassicalWire, LayoutOptions, WireLayout, classical_wire_y, draw, layout, wire_y_positions,
};
pub use schedule::{Schedule, ScheduleEntry, schedule};
