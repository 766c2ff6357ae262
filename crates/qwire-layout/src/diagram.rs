//! Positioned output of the layout engine.

use qwire_ir::{Instruction, QubitId};
use serde::{Deserialize, Serialize};

use crate::error::LayoutResult;
use crate::geometry::{BoundingBox, GlyphGeometry};
use crate::layout::WireLayout;

/// Fraction of the viewport a fitted diagram fills.
pub const FIT_MARGIN: f64 = 0.8;

/// How far wires extend beyond the first and last column.
pub const WIRE_OVERHANG: f64 = 0.3;

/// One instruction with its final glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedGate<G> {
    pub instruction: Instruction,
    /// Index of the column the gate sits in.
    pub column: usize,
    /// Horizontal centre shared by every gate of the column.
    pub center_x: f64,
    /// Width of the column, at least the glyph's own width.
    pub column_width: f64,
    /// Y of each qubit operand, in operand order.
    pub wire_ys: Vec<f64>,
    pub glyph: G,
}

impl<G: GlyphGeometry> PlacedGate<G> {
    /// Final box of the glyph in scene coordinates.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(
            self.center_x,
            self.glyph.center_y(),
            self.glyph.width(),
            self.glyph.height(),
        )
    }
}

/// Horizontal band occupied by one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnExtent {
    pub index: usize,
    /// Left edge.
    pub x: f64,
    pub width: f64,
}

impl ColumnExtent {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Size of the area a diagram is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Which wire a [`WireSegment`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireKind {
    Quantum { qubit: QubitId },
    /// The classical register, drawn as a single double line.
    Classical { num_clbits: u32 },
}

/// A horizontal wire with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSegment {
    pub kind: WireKind,
    pub label: String,
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

/// A fully laid out circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram<G> {
    /// Gates in column order, program order within a column.
    pub gates: Vec<PlacedGate<G>>,
    pub columns: Vec<ColumnExtent>,
    pub wires: WireLayout,
    pub total_width: f64,
    pub total_height: f64,
}

impl<G> Diagram<G> {
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Gates placed in the column with schedule index `index`.
    pub fn gates_in_column(&self, index: usize) -> impl Iterator<Item = &PlacedGate<G>> {
        self.gates.iter().filter(move |g| g.column == index)
    }

    pub fn wire_ys(&self) -> &[f64] {
        &self.wires.qubit_ys
    }

    pub fn classical_y(&self) -> Option<f64> {
        self.wires.classical_y()
    }

    /// Uniform scale that fits the diagram into `viewport` with a margin.
    ///
    /// Zero-sized dimensions of the diagram are ignored. Returns `None` when
    /// there is nothing to scale or the viewport is degenerate.
    pub fn fit_scale(&self, viewport: Viewport) -> Option<f64> {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return None;
        }
        [
            (viewport.width, self.total_width),
            (viewport.height, self.total_height),
        ]
        .into_iter()
        .filter(|&(_, extent)| extent > 0.0)
        .map(|(available, extent)| available / extent)
        .reduce(f64::min)
        .map(|scale| scale * FIT_MARGIN)
    }

    /// Horizontal wires spanning the diagram, qubits first.
    pub fn wire_segments(&self) -> Vec<WireSegment> {
        let x_start = -WIRE_OVERHANG;
        let x_end = self.total_width + WIRE_OVERHANG;

        let mut segments: Vec<WireSegment> = self
            .wires
            .qubit_ys
            .iter()
            .zip(0u32..)
            .map(|(&y, q)| {
                let qubit = QubitId(q);
                WireSegment {
                    kind: WireKind::Quantum { qubit },
                    label: qubit.to_string(),
                    y,
                    x_start,
                    x_end,
                }
            })
            .collect();

        if let Some(classical) = &self.wires.classical {
            segments.push(WireSegment {
                kind: WireKind::Classical {
                    num_clbits: classical.num_clbits,
                },
                label: "meas".to_string(),
                y: classical.y,
                x_start,
                x_end,
            });
        }
        segments
    }
}

impl<G: Serialize> Diagram<G> {
    /// Serialize the diagram for an out-of-process renderer.
    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
