//! Standard gate names known to the glyph rules.

use serde::{Deserialize, Serialize};

use crate::category::GateCategory;

/// Gates with a known name, category and display label.
///
/// Parameters are carried by the [`Instruction`](crate::Instruction), not
/// by the tag, so the same variant covers every angle of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,
    /// Reset to |0⟩.
    Reset,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Phase gate.
    P,
    /// Universal single-qubit gate U(θ, φ, λ).
    U,

    // Paired control/target gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// SWAP gate.
    Swap,

    // Controlled phase gates
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate.
    CP,

    // General controlled gates
    /// Controlled-Hadamard gate.
    CH,
    /// Controlled rotation around X.
    CRx,
    /// Controlled rotation around Y.
    CRy,
    /// Controlled rotation around Z.
    CRz,
    /// Controlled sqrt(X).
    CSX,
    /// Controlled U gate.
    CU,

    // Multi-qubit gates
    /// XX rotation gate.
    RXX,
    /// YY rotation gate.
    RYY,
    /// ZZ rotation gate.
    RZZ,
    /// ZX rotation gate.
    RZX,
    /// iSWAP gate.
    ISwap,
    /// Echoed cross-resonance gate.
    ECR,
    /// Double CNOT gate.
    DCX,

    // Multi-controlled gates
    /// Toffoli gate (CCX).
    CCX,
    /// Doubly controlled Z.
    CCZ,
    /// Fredkin gate (CSWAP).
    CSwap,
    /// Triply controlled X.
    C3X,

    // Non-unitary
    /// Measurement into a classical bit.
    Measure,
    /// Barrier (visual separation only).
    Barrier,
}

impl StandardGate {
    /// Every standard gate, in declaration order.
    pub const ALL: [StandardGate; 41] = [
        StandardGate::I,
        StandardGate::X,
        StandardGate::Y,
        StandardGate::Z,
        StandardGate::H,
        StandardGate::S,
        StandardGate::Sdg,
        StandardGate::T,
        StandardGate::Tdg,
        StandardGate::SX,
        StandardGate::SXdg,
        StandardGate::Reset,
        StandardGate::Rx,
        StandardGate::Ry,
        StandardGate::Rz,
        StandardGate::P,
        StandardGate::U,
        StandardGate::CX,
        StandardGate::CY,
        StandardGate::Swap,
        StandardGate::CZ,
        StandardGate::CP,
        StandardGate::CH,
        StandardGate::CRx,
        StandardGate::CRy,
        StandardGate::CRz,
        StandardGate::CSX,
        StandardGate::CU,
        StandardGate::RXX,
        StandardGate::RYY,
        StandardGate::RZZ,
        StandardGate::RZX,
        StandardGate::ISwap,
        StandardGate::ECR,
        StandardGate::DCX,
        StandardGate::CCX,
        StandardGate::CCZ,
        StandardGate::CSwap,
        StandardGate::C3X,
        StandardGate::Measure,
        StandardGate::Barrier,
    ];

    /// Get the name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::SXdg => "sxdg",
            StandardGate::Reset => "reset",
            StandardGate::Rx => "rx",
            StandardGate::Ry => "ry",
            StandardGate::Rz => "rz",
            StandardGate::P => "p",
            StandardGate::U => "u",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::Swap => "swap",
            StandardGate::CZ => "cz",
            StandardGate::CP => "cp",
            StandardGate::CH => "ch",
            StandardGate::CRx => "crx",
            StandardGate::CRy => "cry",
            StandardGate::CRz => "crz",
            StandardGate::CSX => "csx",
            StandardGate::CU => "cu",
            StandardGate::RXX => "rxx",
            StandardGate::RYY => "ryy",
            StandardGate::RZZ => "rzz",
            StandardGate::RZX => "rzx",
            StandardGate::ISwap => "iswap",
            StandardGate::ECR => "ecr",
            StandardGate::DCX => "dcx",
            StandardGate::CCX => "ccx",
            StandardGate::CCZ => "ccz",
            StandardGate::CSwap => "cswap",
            StandardGate::C3X => "c3x",
            StandardGate::Measure => "measure",
            StandardGate::Barrier => "barrier",
        }
    }

    /// Look up a gate by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let gate = match lower.as_str() {
            "id" | "i" => StandardGate::I,
            "x" => StandardGate::X,
            "y" => StandardGate::Y,
            "z" => StandardGate::Z,
            "h" => StandardGate::H,
            "s" => StandardGate::S,
            "sdg" => StandardGate::Sdg,
            "t" => StandardGate::T,
            "tdg" => StandardGate::Tdg,
            "sx" => StandardGate::SX,
            "sxdg" => StandardGate::SXdg,
            "reset" => StandardGate::Reset,
            "rx" => StandardGate::Rx,
            "ry" => StandardGate::Ry,
            "rz" => StandardGate::Rz,
            "p" | "u1" => StandardGate::P,
            "u" | "u3" => StandardGate::U,
            "cx" | "cnot" => StandardGate::CX,
            "cy" => StandardGate::CY,
            "swap" => StandardGate::Swap,
            "cz" => StandardGate::CZ,
            "cp" | "cu1" => StandardGate::CP,
            "ch" => StandardGate::CH,
            "crx" => StandardGate::CRx,
            "cry" => StandardGate::CRy,
            "crz" => StandardGate::CRz,
            "csx" => StandardGate::CSX,
            "cu" | "cu3" => StandardGate::CU,
            "rxx" => StandardGate::RXX,
            "ryy" => StandardGate::RYY,
            "rzz" => StandardGate::RZZ,
            "rzx" => StandardGate::RZX,
            "iswap" => StandardGate::ISwap,
            "ecr" => StandardGate::ECR,
            "dcx" => StandardGate::DCX,
            "ccx" | "toffoli" => StandardGate::CCX,
            "ccz" => StandardGate::CCZ,
            "cswap" | "fredkin" => StandardGate::CSwap,
            "c3x" => StandardGate::C3X,
            "measure" => StandardGate::Measure,
            "barrier" => StandardGate::Barrier,
            _ => return None,
        };
        Some(gate)
    }

    /// The layout category this gate is drawn with.
    pub fn category(self) -> GateCategory {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::SX
            | StandardGate::SXdg
            | StandardGate::Reset
            | StandardGate::Rx
            | StandardGate::Ry
            | StandardGate::Rz
            | StandardGate::P
            | StandardGate::U => GateCategory::SingleQubit,

            StandardGate::CX | StandardGate::CY | StandardGate::Swap => {
                GateCategory::PairedControlTarget
            }

            StandardGate::CZ | StandardGate::CP => GateCategory::ControlledPhase,

            StandardGate::CH
            | StandardGate::CRx
            | StandardGate::CRy
            | StandardGate::CRz
            | StandardGate::CSX
            | StandardGate::CU => GateCategory::GeneralControlled,

            StandardGate::RXX
            | StandardGate::RYY
            | StandardGate::RZZ
            | StandardGate::RZX
            | StandardGate::ISwap
            | StandardGate::ECR
            | StandardGate::DCX => GateCategory::MultiQubit,

            StandardGate::CCX | StandardGate::CCZ | StandardGate::CSwap | StandardGate::C3X => {
                GateCategory::MultiControlled
            }

            StandardGate::Measure => GateCategory::Measurement,
            StandardGate::Barrier => GateCategory::Barrier,
        }
    }

    /// Text drawn inside (or beside) the glyph.
    ///
    /// For controlled gates this is the label of the target operation.
    pub fn label(self) -> &'static str {
        match self {
            StandardGate::I => "I",
            StandardGate::X | StandardGate::CX | StandardGate::CCX | StandardGate::C3X => "X",
            StandardGate::Y | StandardGate::CY => "Y",
            StandardGate::Z | StandardGate::CZ | StandardGate::CCZ => "Z",
            StandardGate::H | StandardGate::CH => "H",
            StandardGate::S => "S",
            StandardGate::Sdg => "S†",
            StandardGate::T => "T",
            StandardGate::Tdg => "T†",
            StandardGate::SX | StandardGate::CSX => "√X",
            StandardGate::SXdg => "√X†",
            StandardGate::Reset => "|0⟩",
            StandardGate::Rx | StandardGate::CRx => "Rx",
            StandardGate::Ry | StandardGate::CRy => "Ry",
            StandardGate::Rz | StandardGate::CRz => "Rz",
            StandardGate::P | StandardGate::CP => "P",
            StandardGate::U | StandardGate::CU => "U",
            StandardGate::Swap | StandardGate::CSwap => "Swap",
            StandardGate::RXX => "Rxx",
            StandardGate::RYY => "Ryy",
            StandardGate::RZZ => "Rzz",
            StandardGate::RZX => "Rzx",
            StandardGate::ISwap => "iSwap",
            StandardGate::ECR => "ECR",
            StandardGate::DCX => "DCX",
            StandardGate::Measure => "M",
            StandardGate::Barrier => "",
        }
    }

    /// Get the number of qubits this gate operates on.
    ///
    /// `None` for barriers, which may span any number of wires.
    #[inline]
    pub fn num_qubits(self) -> Option<u32> {
        match self.category() {
            GateCategory::SingleQubit | GateCategory::Measurement => Some(1),
            GateCategory::PairedControlTarget
            | GateCategory::ControlledPhase
            | GateCategory::GeneralControlled
            | GateCategory::MultiQubit => Some(2),
            GateCategory::MultiControlled => match self {
                StandardGate::C3X => Some(4),
                _ => Some(3),
            },
            GateCategory::Barrier => None,
        }
    }
}
