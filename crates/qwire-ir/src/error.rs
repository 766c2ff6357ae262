//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not declared in the circuit.
    #[error("Qubit {qubit} not found in circuit of {num_qubits} qubits (gate: {gate_name})")]
    QubitNotFound {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits the circuit declares.
        num_qubits: u32,
        /// Name of the operation being appended.
        gate_name: String,
    },

    /// Classical bit not declared in the circuit.
    #[error("Classical bit {clbit} not found in circuit of {num_clbits} bits (gate: {gate_name})")]
    ClbitNotFound {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits the circuit declares.
        num_clbits: u32,
        /// Name of the operation being appended.
        gate_name: String,
    },

    /// Operation with an empty qubit operand list.
    #[error("Gate '{0}' has no qubit operands")]
    NoQubitOperands(String),

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the operation being appended.
        gate_name: String,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Operation name missing from the gate table.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Gate table could not be parsed.
    #[error("Invalid gate table: {0}")]
    InvalidGateTable(#[from] serde_yaml_ng::Error),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
