//! Greedy column assignment.
//!
//! Every instruction locks the contiguous range of qubit wires between its
//! lowest and highest operand, inclusive. Its column is the first one at which
//! the whole range is free. A gate on wires 0 and 2 therefore blocks wire 1
//! as well, because its connecting line is drawn across it.
//!
//! Measurements are a global barrier: after a measurement in column `c`,
//! nothing that follows it in program order is placed at or before `c`,
//! whatever wires it touches.

use qwire_ir::{Circuit, Instruction};
use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use crate::error::{LayoutError, LayoutResult, OperandFault};

/// An instruction paired with the column it was assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry<'c> {
    /// The scheduled instruction.
    pub instruction: &'c Instruction,
    /// Zero-based column index.
    pub start_column: usize,
}

/// Output of [`schedule`]: entries sorted by `(start_column, program_index)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<'c> {
    entries: Vec<ScheduleEntry<'c>>,
    num_columns: usize,
}

impl<'c> Schedule<'c> {
    /// Scheduled entries in column order.
    pub fn entries(&self) -> &[ScheduleEntry<'c>] {
        &self.entries
    }

    /// Number of columns used, `0` for an empty circuit.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column assigned to the instruction at `program_index`.
    pub fn column_of(&self, program_index: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.instruction.program_index == program_index)
            .map(|e| e.start_column)
    }
}

/// Assign a start column to every instruction of `circuit`.
///
/// Fails without a partial result if any instruction references a wire
/// outside the circuit, repeats a qubit, or has no qubit operands.
#[instrument(skip_all, fields(circuit = %circuit.name(), ops = circuit.len()))]
pub fn schedule(circuit: &Circuit) -> LayoutResult<Schedule<'_>> {
    let mut wire_available_at = vec![0usize; circuit.num_qubits() as usize];
    let mut entries = Vec::with_capacity(circuit.len());

    for instruction in circuit.instructions() {
        let (lo, hi) = locked_range(instruction, circuit)?;
        let start_column = wire_available_at[lo..=hi]
            .iter()
            .copied()
            .max()
            .unwrap_or(0);

        let blocked = if instruction.is_measure() {
            debug!(
                "Measurement at column {} blocks all {} wires",
                start_column,
                wire_available_at.len()
            );
            &mut wire_available_at[..]
        } else {
            &mut wire_available_at[lo..=hi]
        };
        // Availability only moves forward.
        for slot in blocked {
            *slot = (*slot).max(start_column + 1);
        }

        entries.push(ScheduleEntry {
            instruction,
            start_column,
        });
    }

    entries.sort_by_key(|e| (e.start_column, e.instruction.program_index));
    let num_columns = entries.last().map_or(0, |e| e.start_column + 1);
    debug!("Scheduled {} instructions into {} columns", entries.len(), num_columns);

    Ok(Schedule {
        entries,
        num_columns,
    })
}

/// Validate operands and return the inclusive qubit range to lock.
fn locked_range(instruction: &Instruction, circuit: &Circuit) -> LayoutResult<(usize, usize)> {
    let invalid = |fault| LayoutError::InvalidOperand {
        gate_name: instruction.name.clone(),
        program_index: instruction.program_index,
        fault,
    };

    let mut seen = FxHashSet::default();
    for &qubit in &instruction.qubits {
        if qubit.0 >= circuit.num_qubits() {
            return Err(invalid(OperandFault::QubitOutOfRange {
                qubit,
                num_qubits: circuit.num_qubits(),
            }));
        }
        if !seen.insert(qubit) {
            return Err(invalid(OperandFault::DuplicateQubit(qubit)));
        }
    }
    for &clbit in &instruction.clbits {
        if clbit.0 >= circuit.num_clbits() {
            return Err(invalid(OperandFault::ClbitOutOfRange {
                clbit,
                num_clbits: circuit.num_clbits(),
            }));
        }
    }

    let (lo, hi) = instruction
        .span()
        .ok_or_else(|| invalid(OperandFault::NoQubits))?;
    Ok((lo.index(), hi.index()))
}
