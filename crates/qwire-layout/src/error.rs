//! Error types for the layout crate.

use qwire_ir::{ClbitId, GateCategory, QubitId};
use thiserror::Error;

use crate::geometry::GlyphError;

/// What is wrong with an instruction's operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandFault {
    /// The instruction touches no qubit.
    #[error("no qubit operands")]
    NoQubits,

    /// A qubit index outside the declared qubit count.
    #[error("qubit {qubit} outside a circuit of {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Declared qubit count.
        num_qubits: u32,
    },

    /// A classical bit index outside the declared bit count.
    #[error("classical bit {clbit} outside a circuit of {num_clbits} bits")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Declared classical bit count.
        num_clbits: u32,
    },

    /// The same qubit appears twice in one instruction.
    #[error("qubit {0} listed more than once")]
    DuplicateQubit(QubitId),
}

/// Errors that can occur while scheduling or laying out a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// An instruction references a wire the circuit does not declare.
    #[error("Invalid operand in instruction {program_index} ('{gate_name}'): {fault}")]
    InvalidOperand {
        /// Name of the instruction.
        gate_name: String,
        /// Program position of the instruction.
        program_index: usize,
        /// The specific problem.
        fault: OperandFault,
    },

    /// No glyph rule exists for the instruction's category and name.
    #[error("No layout rule for gate '{name}' in category {category}")]
    UnknownCategory {
        /// Name of the instruction.
        name: String,
        /// Category it was tagged with.
        category: GateCategory,
    },

    /// The geometry provider failed.
    #[error(transparent)]
    Geometry(#[from] GlyphError),

    /// The geometry provider returned an unusable width.
    #[error("Glyph for gate '{name}' has invalid width {width}")]
    InvalidGlyphWidth {
        /// Name of the instruction.
        name: String,
        /// The width reported by the provider.
        width: f64,
    },

    /// Layout options out of range.
    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),

    /// Diagram could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
