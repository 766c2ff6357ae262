//! Turning columns into positioned glyphs.
//!
//! Columns are laid out left to right. Each column is as wide as its widest
//! glyph, and all of its glyphs share the column centre. Consecutive columns
//! are separated by a fixed gap.
//!
//! Widths are only known to the geometry provider, so every instruction is
//! requested twice: a probe at `x = 0` to measure it, then the final glyph at
//! the column centre once the column width is known.

use qwire_ir::{Circuit, Instruction, QubitId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::column::{Column, group};
use crate::diagram::{ColumnExtent, Diagram, PlacedGate};
use crate::error::{LayoutError, LayoutResult, OperandFault};
use crate::geometry::{GeometryProvider, GlyphError, GlyphGeometry, GlyphRequest};
use crate::schedule::schedule;

/// Default horizontal space between columns.
pub const DEFAULT_GAP: f64 = 0.5;
/// Default vertical distance between adjacent qubit wires.
pub const DEFAULT_WIRE_SPACING: f64 = 2.0;
/// Default distance from the lowest qubit wire to the classical wire.
pub const DEFAULT_CLASSICAL_OFFSET: f64 = 3.0;
/// Smallest wire spacing at which built-in glyphs on adjacent wires stay
/// apart. Must exceed the largest vertical reach of any built-in glyph.
pub const MIN_WIRE_SPACING: f64 = 1.5;

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Horizontal space between columns.
    #[serde(default = "default_gap")]
    pub gap: f64,

    /// Vertical distance between adjacent qubit wires.
    #[serde(default = "default_wire_spacing")]
    pub wire_spacing: f64,

    /// Distance from the lowest qubit wire down to the classical wire.
    #[serde(default = "default_classical_offset")]
    pub classical_offset: f64,
}

fn default_gap() -> f64 {
    DEFAULT_GAP
}

fn default_wire_spacing() -> f64 {
    DEFAULT_WIRE_SPACING
}

fn default_classical_offset() -> f64 {
    DEFAULT_CLASSICAL_OFFSET
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            wire_spacing: default_wire_spacing(),
            classical_offset: default_classical_offset(),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_wire_spacing(mut self, wire_spacing: f64) -> Self {
        self.wire_spacing = wire_spacing;
        self
    }

    #[must_use]
    pub fn with_classical_offset(mut self, classical_offset: f64) -> Self {
        self.classical_offset = classical_offset;
        self
    }

    /// Check that every value is finite and in range.
    pub fn validate(&self) -> LayoutResult<()> {
        validate_gap(self.gap)?;
        if !(self.wire_spacing.is_finite() && self.wire_spacing >= MIN_WIRE_SPACING) {
            return Err(LayoutError::InvalidOptions(format!(
                "wire_spacing must be at least {MIN_WIRE_SPACING}, got {}",
                self.wire_spacing
            )));
        }
        if !(self.classical_offset.is_finite() && self.classical_offset >= MIN_WIRE_SPACING) {
            return Err(LayoutError::InvalidOptions(format!(
                "classical_offset must be at least {MIN_WIRE_SPACING}, got {}",
                self.classical_offset
            )));
        }
        Ok(())
    }
}

fn validate_gap(gap: f64) -> LayoutResult<()> {
    if gap.is_finite() && gap >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidOptions(format!(
            "gap must be a non-negative number, got {gap}"
        )))
    }
}

/// Y coordinates of `num_qubits` wires, centred on zero with qubit 0 on top.
pub fn wire_y_positions(num_qubits: u32, spacing: f64) -> Vec<f64> {
    let middle = f64::from(num_qubits.saturating_sub(1)) / 2.0;
    (0..num_qubits)
        .map(|i| (middle - f64::from(i)) * spacing)
        .collect()
}

/// Y coordinate of the classical wire, `offset` below the lowest qubit wire.
pub fn classical_wire_y(qubit_ys: &[f64], offset: f64) -> f64 {
    let lowest = qubit_ys.iter().copied().reduce(f64::min).unwrap_or(0.0);
    lowest - offset
}

/// The classical register, drawn as one wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicalWire {
    pub y: f64,
    pub num_clbits: u32,
}

/// Fixed vertical positions of every wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireLayout {
    /// Y of qubit `i` at index `i`.
    pub qubit_ys: Vec<f64>,
    /// Present when the circuit has classical bits.
    pub classical: Option<ClassicalWire>,
}

impl WireLayout {
    pub fn new(num_qubits: u32, num_clbits: u32, options: &LayoutOptions) -> Self {
        let qubit_ys = wire_y_positions(num_qubits, options.wire_spacing);
        let classical = (num_clbits > 0).then(|| ClassicalWire {
            y: classical_wire_y(&qubit_ys, options.classical_offset),
            num_clbits,
        });
        Self {
            qubit_ys,
            classical,
        }
    }

    /// Wire positions for `circuit`.
    pub fn for_circuit(circuit: &Circuit, options: &LayoutOptions) -> Self {
        Self::new(circuit.num_qubits(), circuit.num_clbits(), options)
    }

    pub fn qubit_y(&self, qubit: QubitId) -> Option<f64> {
        self.qubit_ys.get(qubit.index()).copied()
    }

    pub fn classical_y(&self) -> Option<f64> {
        self.classical.map(|c| c.y)
    }

    pub fn num_qubits(&self) -> u32 {
        u32::try_from(self.qubit_ys.len()).unwrap_or(u32::MAX)
    }

    /// Distance from the top qubit wire to the lowest wire.
    pub fn height(&self) -> f64 {
        let ys = self.qubit_ys.iter().copied().chain(self.classical_y());
        let (bottom, top) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
        if top >= bottom { top - bottom } else { 0.0 }
    }
}

/// Lay out `columns` against fixed wire positions.
///
/// Fails on the first provider error; no partial diagram is returned.
#[instrument(skip_all, fields(columns = columns.len(), gap = gap))]
pub fn layout<P: GeometryProvider>(
    columns: &[Column<'_>],
    provider: &P,
    wires: &WireLayout,
    gap: f64,
) -> LayoutResult<Diagram<P::Glyph>> {
    validate_gap(gap)?;

    let mut gates = Vec::with_capacity(columns.iter().map(Column::len).sum());
    let mut extents = Vec::with_capacity(columns.len());
    let mut cursor = 0.0_f64;

    for column in columns {
        let column_ys = column
            .instructions()
            .map(|instruction| operand_ys(instruction, wires))
            .collect::<LayoutResult<Vec<_>>>()?;

        let mut column_width = 0.0_f64;
        for (instruction, ys) in column.instructions().zip(&column_ys) {
            let probe = request_glyph(provider, instruction, 0.0, ys, wires)?;
            column_width = column_width.max(checked_width(instruction, &probe)?);
        }

        let center_x = cursor + column_width / 2.0;
        for (instruction, ys) in column.instructions().zip(column_ys) {
            let glyph = request_glyph(provider, instruction, center_x, &ys, wires)?;
            checked_width(instruction, &glyph)?;
            gates.push(PlacedGate {
                instruction: instruction.clone(),
                column: column.index,
                center_x,
                column_width,
                wire_ys: ys,
                glyph,
            });
        }

        debug!(
            "Column {}: x={:.3} width={:.3} gates={}",
            column.index,
            cursor,
            column_width,
            column.len()
        );
        extents.push(ColumnExtent {
            index: column.index,
            x: cursor,
            width: column_width,
        });
        cursor += column_width + gap;
    }

    let total_width = if columns.is_empty() { 0.0 } else { cursor - gap };
    let total_height = wires.height();
    info!(
        "Laid out {} gates in {} columns, {:.3} x {:.3}",
        gates.len(),
        extents.len(),
        total_width,
        total_height
    );

    Ok(Diagram {
        gates,
        columns: extents,
        wires: wires.clone(),
        total_width,
        total_height,
    })
}

/// Schedule, group and lay out `circuit` in one call.
#[instrument(skip_all, fields(circuit = %circuit.name()))]
pub fn draw<P: GeometryProvider>(
    circuit: &Circuit,
    provider: &P,
    options: &LayoutOptions,
) -> LayoutResult<Diagram<P::Glyph>> {
    options.validate()?;
    let schedule = schedule(circuit)?;
    let columns = group(&schedule);
    let wires = WireLayout::for_circuit(circuit, options);
    layout(&columns, provider, &wires, options.gap)
}

fn operand_ys(instruction: &Instruction, wires: &WireLayout) -> LayoutResult<Vec<f64>> {
    instruction
        .qubits
        .iter()
        .map(|&qubit| {
            wires
                .qubit_y(qubit)
                .ok_or_else(|| LayoutError::InvalidOperand {
                    gate_name: instruction.name.clone(),
                    program_index: instruction.program_index,
                    fault: OperandFault::QubitOutOfRange {
                        qubit,
                        num_qubits: wires.num_qubits(),
                    },
                })
        })
        .collect()
}

fn request_glyph<P: GeometryProvider>(
    provider: &P,
    instruction: &Instruction,
    x: f64,
    ys: &[f64],
    wires: &WireLayout,
) -> LayoutResult<P::Glyph> {
    let classical_y = if instruction.clbits.is_empty() {
        None
    } else {
        wires.classical_y()
    };
    let request = GlyphRequest::for_instruction(instruction, x, ys, classical_y);
    provider.glyph(&request).map_err(|err| match err {
        GlyphError::UnsupportedGate { name, category } => {
            LayoutError::UnknownCategory { name, category }
        }
        other => LayoutError::Geometry(other),
    })
}

fn checked_width<G: GlyphGeometry>(instruction: &Instruction, glyph: &G) -> LayoutResult<f64> {
    let width = glyph.width();
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(LayoutError::InvalidGlyphWidth {
            name: instruction.name.clone(),
            width,
        })
    }
}
