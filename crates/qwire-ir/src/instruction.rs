//! Circuit instructions combining an operation with its operands.

use serde::{Deserialize, Serialize};

use crate::category::GateCategory;
use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// One operation of a circuit.
///
/// Instructions are immutable once appended to a [`Circuit`](crate::Circuit);
/// later stages only attach derived metadata next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation name as written by the circuit author (e.g. `"cx"`).
    pub name: String,
    /// Layout rule family.
    pub category: GateCategory,
    /// Qubit operands, in operand order (control first for controlled gates).
    pub qubits: Vec<QubitId>,
    /// Classical bit operands (measurement targets).
    pub clbits: Vec<ClbitId>,
    /// Numeric parameters (rotation angles).
    pub params: Vec<f64>,
    /// Position of this instruction in program order.
    pub program_index: usize,
}

impl Instruction {
    /// Create an instruction with no classical operands or parameters.
    ///
    /// `program_index` is assigned when the instruction is appended to a
    /// circuit.
    pub fn new(
        name: impl Into<String>,
        category: GateCategory,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
            params: vec![],
            program_index: 0,
        }
    }

    /// Create an instruction for a standard gate.
    pub fn standard(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::new(gate.name(), gate.category(), qubits)
    }

    /// Create a measurement of `qubit` into `clbit`.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self::standard(StandardGate::Measure, [qubit]).with_clbits([clbit])
    }

    /// Create a barrier across `qubits`.
    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::standard(StandardGate::Barrier, qubits)
    }

    /// Attach numeric parameters.
    #[must_use]
    pub fn with_params(mut self, params: impl IntoIterator<Item = f64>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    /// Attach classical bit operands.
    #[must_use]
    pub fn with_clbits(mut self, clbits: impl IntoIterator<Item = ClbitId>) -> Self {
        self.clbits = clbits.into_iter().collect();
        self
    }

    /// The standard gate this instruction names, if any.
    pub fn standard_gate(&self) -> Option<StandardGate> {
        StandardGate::from_name(&self.name)
    }

    /// Inclusive range of qubit indices this instruction spans.
    ///
    /// `None` when the instruction has no qubit operands.
    pub fn span(&self) -> Option<(QubitId, QubitId)> {
        let lo = self.qubits.iter().min()?;
        let hi = self.qubits.iter().max()?;
        Some((*lo, *hi))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        self.category == GateCategory::Measurement
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        self.category == GateCategory::Barrier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_instruction() {
        let inst = Instruction::standard(StandardGate::H, [QubitId(0)]);
        assert_eq!(inst.name, "h");
        assert_eq!(inst.category, GateCategory::SingleQubit);
        assert_eq!(inst.qubits.len(), 1);
        assert!(inst.clbits.is_empty());
        assert_eq!(inst.standard_gate(), Some(StandardGate::H));
    }

    #[test]
    fn test_measure_instruction() {
        let inst = Instruction::measure(QubitId(1), ClbitId(0));
        assert!(inst.is_measure());
        assert_eq!(inst.qubits, vec![QubitId(1)]);
        assert_eq!(inst.clbits, vec![ClbitId(0)]);
    }

    #[test]
    fn test_barrier_instruction() {
        let inst = Instruction::barrier([QubitId(0), QubitId(1), QubitId(2)]);
        assert!(inst.is_barrier());
        assert_eq!(inst.qubits.len(), 3);
    }

    #[test]
    fn test_span_ignores_operand_order() {
        let inst = Instruction::standard(StandardGate::CX, [QubitId(3), QubitId(1)]);
        assert_eq!(inst.span(), Some((QubitId(1), QubitId(3))));

        let empty = Instruction::new("nop", GateCategory::SingleQubit, []);
        assert_eq!(empty.span(), None);
    }

    #[test]
    fn test_with_params() {
        let inst = Instruction::standard(StandardGate::Rx, [QubitId(0)]).with_params([0.5]);
        assert_eq!(inst.params, vec![0.5]);
    }
}
