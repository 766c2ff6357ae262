//! The seam between layout and whatever renders glyphs.
//!
//! Layout never knows how wide a gate is drawn. It asks a
//! [`GeometryProvider`] twice per instruction: once with `x = 0` to learn the
//! width, and once with the final column centre to obtain the placed glyph.
//! Providers must therefore be pure: the same request always yields the same
//! width.

use qwire_ir::{GateCategory, Instruction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a provider needs to build one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRequest<'a> {
    /// Layout rule family.
    pub category: GateCategory,
    /// Operation name.
    pub name: &'a str,
    /// Numeric parameters.
    pub params: &'a [f64],
    /// Horizontal centre of the glyph.
    pub x: f64,
    /// Y coordinate of each qubit operand, in operand order.
    pub wire_ys: &'a [f64],
    /// Y coordinate of the classical register, when the instruction writes to it.
    pub classical_y: Option<f64>,
}

impl<'a> GlyphRequest<'a> {
    /// Build a request for `instruction` at `x`.
    pub fn for_instruction(
        instruction: &'a Instruction,
        x: f64,
        wire_ys: &'a [f64],
        classical_y: Option<f64>,
    ) -> Self {
        Self {
            category: instruction.category,
            name: &instruction.name,
            params: &instruction.params,
            x,
            wire_ys,
            classical_y,
        }
    }

    /// The same request moved to `x`.
    #[must_use]
    pub fn at(self, x: f64) -> Self {
        Self { x, ..self }
    }
}

/// Measured geometry of a glyph.
pub trait GlyphGeometry {
    /// Horizontal extent.
    fn width(&self) -> f64;

    /// Vertical extent.
    fn height(&self) -> f64;

    /// Wire y coordinates the glyph touches.
    fn occupied_wire_ys(&self) -> &[f64];

    /// Vertical centre. Defaults to the midpoint of the occupied wires.
    fn center_y(&self) -> f64 {
        let ys = self.occupied_wire_ys();
        if ys.is_empty() {
            return 0.0;
        }
        let top = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bottom = ys.iter().copied().fold(f64::INFINITY, f64::min);
        (top + bottom) / 2.0
    }
}

/// Source of gate glyph geometry.
///
/// Implementations must be deterministic in their inputs; layout relies on a
/// probe call and a final call agreeing on width.
pub trait GeometryProvider {
    /// Glyph type produced by this provider.
    type Glyph: GlyphGeometry;

    /// Build the glyph for `request`.
    fn glyph(&self, request: &GlyphRequest<'_>) -> Result<Self::Glyph, GlyphError>;
}

impl<P: GeometryProvider + ?Sized> GeometryProvider for &P {
    type Glyph = P::Glyph;

    fn glyph(&self, request: &GlyphRequest<'_>) -> Result<Self::Glyph, GlyphError> {
        (**self).glyph(request)
    }
}

/// Failures reported by a [`GeometryProvider`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GlyphError {
    /// The provider has no drawing rule for this category and name.
    #[error("No glyph for gate '{name}' in category {category}")]
    UnsupportedGate {
        /// Operation name.
        name: String,
        /// Category it was tagged with.
        category: GateCategory,
    },

    /// The rule needs a different number of qubit operands.
    #[error("Gate '{name}' needs {expected} qubit operands, got {got}")]
    OperandCount {
        /// Operation name.
        name: String,
        /// Human readable requirement, e.g. `"2"` or `"at least 3"`.
        expected: String,
        /// Operands supplied.
        got: usize,
    },

    /// Parameters cannot be rendered.
    #[error("Gate '{name}' has malformed parameters: {reason}")]
    MalformedParams {
        /// Operation name.
        name: String,
        /// What is wrong.
        reason: String,
    },

    /// A glyph needs the classical register but the circuit has none.
    #[error("Gate '{name}' needs a classical wire")]
    MissingClassicalWire {
        /// Operation name.
        name: String,
    },
}

/// Axis-aligned rectangle in scene units, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub min_x: f64,
    /// Bottom edge.
    pub min_y: f64,
    /// Right edge.
    pub max_x: f64,
    /// Top edge.
    pub max_y: f64,
}

impl BoundingBox {
    /// Box of `width` x `height` centred on `(cx, cy)`.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: cx - width / 2.0,
            min_y: cy - height / 2.0,
            max_x: cx + width / 2.0,
            max_y: cy + height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if the interiors of two boxes intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}
