//! Built-in glyph geometry for every gate category.
//!
//! [`StandardGlyphs`] does not draw anything. It computes the extents a
//! renderer would produce and records the shape to draw as a [`GlyphShape`].
//! Text is measured with a fixed advance per character, one per font size.
//!
//! | Category                | Shape                                         |
//! |-------------------------|-----------------------------------------------|
//! | single qubit            | labelled box, parameters under the label      |
//! | paired control/target   | `cx` dot and ⊕, `cy` dot and box, `swap` ×× |
//! | controlled phase        | dots on both wires, caption below             |
//! | general controlled      | control dots and a labelled target box        |
//! | multi-controlled        | `ccx`, `ccz`, `cswap`, else dots and a box    |
//! | multi-qubit             | one box over all wires with operand indices   |
//! | measurement             | meter box joined to the classical wire        |
//! | barrier                 | band across the operand wires                 |

use qwire_ir::{GateCategory, GateTable, StandardGate};
use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryProvider, GlyphError, GlyphGeometry, GlyphRequest};

/// Advance of one gate label character.
const LABEL_ADVANCE: f64 = 0.32;
/// Advance of one parameter character.
const PARAM_ADVANCE: f64 = 0.18;
/// Advance of one caption character.
const CAPTION_ADVANCE: f64 = 0.24;
const CAPTION_HEIGHT: f64 = 0.4;
/// Distance from the lowest wire to a controlled-phase caption.
const CAPTION_DROP: f64 = 0.7;

const BOX_PADDING: f64 = 0.4;
const BOX_HEIGHT: f64 = 1.0;
const CONTROL_RADIUS: f64 = 0.3;
const TARGET_RADIUS: f64 = 0.5;
const CROSS_SIZE: f64 = 0.4;
/// Room left of a spanning box for the operand indices.
const INDEX_COLUMN: f64 = 0.3;
const MEASURE_SIDE: f64 = 1.0;
const BARRIER_WIDTH: f64 = 0.5;
const BARRIER_OVERHANG: f64 = 0.5;

/// Furthest any built-in glyph reaches beyond its outermost operand wires,
/// summed over both sides: a caption below plus a box above.
pub const VERTICAL_REACH: f64 = CAPTION_DROP + CAPTION_HEIGHT / 2.0 + BOX_HEIGHT / 2.0;

/// Text below a group of dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub y: f64,
}

/// Operand position label drawn next to one wire of a spanning box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperandIndex {
    /// Position of the wire in the operand list.
    pub position: usize,
    /// Wire y coordinate.
    pub y: f64,
}

/// What a renderer has to draw for a glyph. All y values are wire coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlyphShape {
    /// Labelled box on one wire.
    Labelled {
        label: String,
        params: Option<String>,
    },
    /// Control dots joined to a ⊕ target.
    ControlledNot { controls: Vec<f64>, target: f64 },
    /// Control dots joined to a labelled target box.
    ControlledBox {
        controls: Vec<f64>,
        target: f64,
        label: String,
        params: Option<String>,
    },
    /// Two crosses, optionally controlled.
    Swap { controls: Vec<f64>, targets: [f64; 2] },
    /// A dot on every wire.
    PhaseDots {
        dots: Vec<f64>,
        caption: Option<Caption>,
    },
    /// One box covering all operand wires.
    SpanBox {
        label: String,
        params: Option<String>,
        indices: Vec<OperandIndex>,
    },
    /// Meter box with a double line down to the classical register.
    Measure { qubit: f64, classical: f64 },
    /// Band across the operand wires.
    Barrier { wires: Vec<f64> },
}

/// A glyph built by [`StandardGlyphs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardGlyph {
    pub shape: GlyphShape,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub occupied_wire_ys: Vec<f64>,
}

impl GlyphGeometry for StandardGlyph {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn occupied_wire_ys(&self) -> &[f64] {
        &self.occupied_wire_ys
    }

    fn center_y(&self) -> f64 {
        self.center_y
    }
}

/// Shape, width and vertical extent before positioning.
struct Built {
    shape: GlyphShape,
    width: f64,
    bottom: f64,
    top: f64,
}

impl Built {
    fn new(shape: GlyphShape, width: f64, parts: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (bottom, top) = parts
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (y, half)| {
                (lo.min(y - half), hi.max(y + half))
            });
        Self {
            shape,
            width,
            bottom,
            top,
        }
    }
}

/// Geometry provider for the built-in gate families.
///
/// Labels come from a [`GateTable`], so custom operations get their display
/// text from the same table that classified them.
#[derive(Debug, Clone)]
pub struct StandardGlyphs {
    table: GateTable,
}

impl Default for StandardGlyphs {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardGlyphs {
    /// Provider labelling gates from [`GateTable::standard`].
    pub fn new() -> Self {
        Self::with_table(GateTable::standard())
    }

    pub fn with_table(table: GateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &GateTable {
        &self.table
    }

    fn single_qubit(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_exactly(request, 1)?;
        let y = request.wire_ys[0];
        let label = self.table.label(request.name).to_string();
        let params = format_params(request.params);
        let width = box_width(&label, params.as_deref());
        Ok(Built::new(
            GlyphShape::Labelled { label, params },
            width,
            [(y, BOX_HEIGHT / 2.0)],
        ))
    }

    fn paired(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_exactly(request, 2)?;
        let (a, b) = (request.wire_ys[0], request.wire_ys[1]);
        match StandardGate::from_name(request.name) {
            Some(StandardGate::CX) => Ok(Built::new(
                GlyphShape::ControlledNot {
                    controls: vec![a],
                    target: b,
                },
                2.0 * TARGET_RADIUS,
                [(a, CONTROL_RADIUS), (b, TARGET_RADIUS)],
            )),
            Some(StandardGate::CY) => Ok(self.controlled_box(request)),
            Some(StandardGate::Swap) => Ok(Built::new(
                GlyphShape::Swap {
                    controls: vec![],
                    targets: [a, b],
                },
                CROSS_SIZE,
                [(a, CROSS_SIZE / 2.0), (b, CROSS_SIZE / 2.0)],
            )),
            _ => Err(unsupported(request)),
        }
    }

    fn controlled_phase(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_at_least(request, 2)?;
        let ys = request.wire_ys;
        let label = self.table.label(request.name);
        let text = match request.params.first() {
            Some(p) => format!("{label} ({p:.2})"),
            None => label.to_string(),
        };
        let caption_y = ys.iter().copied().fold(f64::INFINITY, f64::min) - CAPTION_DROP;
        let width = (2.0 * CONTROL_RADIUS).max(text_width(&text, CAPTION_ADVANCE));
        let parts: Vec<(f64, f64)> = ys
            .iter()
            .map(|&y| (y, CONTROL_RADIUS))
            .chain([(caption_y, CAPTION_HEIGHT / 2.0)])
            .collect();
        Ok(Built::new(
            GlyphShape::PhaseDots {
                dots: ys.to_vec(),
                caption: Some(Caption {
                    text,
                    y: caption_y,
                }),
            },
            width,
            parts,
        ))
    }

    fn general_controlled(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_at_least(request, 2)?;
        Ok(self.controlled_box(request))
    }

    fn multi_controlled(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_at_least(request, 3)?;
        let ys = request.wire_ys;
        let (controls, target) = split_target(ys);
        let dots = || controls.iter().map(|&y| (y, CONTROL_RADIUS));

        match StandardGate::from_name(request.name) {
            Some(StandardGate::CCX | StandardGate::C3X) => Ok(Built::new(
                GlyphShape::ControlledNot {
                    controls: controls.to_vec(),
                    target,
                },
                2.0 * TARGET_RADIUS,
                dots().chain([(target, TARGET_RADIUS)]),
            )),
            Some(StandardGate::CCZ) => Ok(Built::new(
                GlyphShape::PhaseDots {
                    dots: ys.to_vec(),
                    caption: None,
                },
                2.0 * CONTROL_RADIUS,
                ys.iter().map(|&y| (y, CONTROL_RADIUS)),
            )),
            Some(StandardGate::CSwap) => {
                expect_exactly(request, 3)?;
                Ok(Built::new(
                    GlyphShape::Swap {
                        controls: vec![ys[0]],
                        targets: [ys[1], ys[2]],
                    },
                    (2.0 * CONTROL_RADIUS).max(CROSS_SIZE),
                    [
                        (ys[0], CONTROL_RADIUS),
                        (ys[1], CROSS_SIZE / 2.0),
                        (ys[2], CROSS_SIZE / 2.0),
                    ],
                ))
            }
            _ => Ok(self.controlled_box(request)),
        }
    }

    fn multi_qubit(&self, request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_at_least(request, 1)?;
        let ys = request.wire_ys;
        let top = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bottom = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let height = top - bottom + BOX_HEIGHT;

        let label = self.table.label(request.name).to_string();
        let params = format_params(request.params);
        let width = box_width(&label, params.as_deref()) + INDEX_COLUMN;
        let indices = ys
            .iter()
            .enumerate()
            .map(|(position, &y)| OperandIndex { position, y })
            .collect();

        Ok(Built::new(
            GlyphShape::SpanBox {
                label,
                params,
                indices,
            },
            width,
            [((top + bottom) / 2.0, height / 2.0)],
        ))
    }

    fn measurement(request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_exactly(request, 1)?;
        let classical = request
            .classical_y
            .ok_or_else(|| GlyphError::MissingClassicalWire {
                name: request.name.to_string(),
            })?;
        let qubit = request.wire_ys[0];
        // The drop to the classical wire crosses lower qubit wires, so only
        // the meter counts towards the extent.
        Ok(Built::new(
            GlyphShape::Measure { qubit, classical },
            MEASURE_SIDE,
            [(qubit, MEASURE_SIDE / 2.0)],
        ))
    }

    fn barrier(request: &GlyphRequest<'_>) -> Result<Built, GlyphError> {
        expect_at_least(request, 1)?;
        let ys = request.wire_ys;
        Ok(Built::new(
            GlyphShape::Barrier { wires: ys.to_vec() },
            BARRIER_WIDTH,
            ys.iter().map(|&y| (y, BARRIER_OVERHANG)),
        ))
    }

    /// Control dots on all but the last operand, labelled box on the last.
    fn controlled_box(&self, request: &GlyphRequest<'_>) -> Built {
        let (controls, target) = split_target(request.wire_ys);
        let label = self.table.label(request.name).to_string();
        let params = format_params(request.params);
        let width = (2.0 * CONTROL_RADIUS).max(box_width(&label, params.as_deref()));
        let parts: Vec<(f64, f64)> = controls
            .iter()
            .map(|&y| (y, CONTROL_RADIUS))
            .chain([(target, BOX_HEIGHT / 2.0)])
            .collect();
        Built::new(
            GlyphShape::ControlledBox {
                controls: controls.to_vec(),
                target,
                label,
                params,
            },
            width,
            parts,
        )
    }
}

impl GeometryProvider for StandardGlyphs {
    type Glyph = StandardGlyph;

    fn glyph(&self, request: &GlyphRequest<'_>) -> Result<StandardGlyph, GlyphError> {
        check_params(request)?;
        let built = match request.category {
            GateCategory::SingleQubit => self.single_qubit(request)?,
            GateCategory::PairedControlTarget => self.paired(request)?,
            GateCategory::ControlledPhase => self.controlled_phase(request)?,
            GateCategory::GeneralControlled => self.general_controlled(request)?,
            GateCategory::MultiControlled => self.multi_controlled(request)?,
            GateCategory::MultiQubit => self.multi_qubit(request)?,
            GateCategory::Measurement => Self::measurement(request)?,
            GateCategory::Barrier => Self::barrier(request)?,
        };
        Ok(StandardGlyph {
            shape: built.shape,
            center_x: request.x,
            center_y: (built.top + built.bottom) / 2.0,
            width: built.width,
            height: built.top - built.bottom,
            occupied_wire_ys: request.wire_ys.to_vec(),
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn text_width(text: &str, advance: f64) -> f64 {
    text.chars().count() as f64 * advance
}

fn box_width(label: &str, params: Option<&str>) -> f64 {
    let params_width = params.map_or(0.0, |p| text_width(p, PARAM_ADVANCE));
    text_width(label, LABEL_ADVANCE).max(params_width) + BOX_PADDING
}

/// Render parameters as `"0.50, 1.57"`, or `None` when there are none.
fn format_params(params: &[f64]) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    Some(
        params
            .iter()
            .map(|p| format!("{p:.2}"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Split operand ys into controls and the final target.
fn split_target(ys: &[f64]) -> (&[f64], f64) {
    match ys.split_last() {
        Some((&target, controls)) => (controls, target),
        None => (&[], 0.0),
    }
}

fn check_params(request: &GlyphRequest<'_>) -> Result<(), GlyphError> {
    match request.params.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(GlyphError::MalformedParams {
            name: request.name.to_string(),
            reason: format!("parameter {i} is {}", request.params[i]),
        }),
        None => Ok(()),
    }
}

fn expect_exactly(request: &GlyphRequest<'_>, n: usize) -> Result<(), GlyphError> {
    if request.wire_ys.len() == n {
        Ok(())
    } else {
        Err(GlyphError::OperandCount {
            name: request.name.to_string(),
            expected: n.to_string(),
            got: request.wire_ys.len(),
        })
    }
}

fn expect_at_least(request: &GlyphRequest<'_>, n: usize) -> Result<(), GlyphError> {
    if request.wire_ys.len() >= n {
        Ok(())
    } else {
        Err(GlyphError::OperandCount {
            name: request.name.to_string(),
            expected: format!("at least {n}"),
            got: request.wire_ys.len(),
        })
    }
}

fn unsupported(request: &GlyphRequest<'_>) -> GlyphError {
    GlyphError::UnsupportedGate {
        name: request.name.to_string(),
        category: request.category,
    }
}
