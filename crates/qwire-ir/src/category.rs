//! Layout categories for circuit operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The layout rule family an operation belongs to.
///
/// Every operation is drawn by exactly one family of glyph rules. The
/// category decides which wires the glyph straddles and how its width is
/// measured; the gate name only refines the rule within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateCategory {
    /// A labelled box on one wire.
    SingleQubit,
    /// Control and target pair drawn with a dedicated symbol (CX, CY, SWAP).
    PairedControlTarget,
    /// Symmetric two-dot gate with a phase label (CZ, CP).
    ControlledPhase,
    /// Control dot connected to a labelled target box.
    GeneralControlled,
    /// One box spanning several wires.
    MultiQubit,
    /// Several control dots fanning into one target.
    MultiControlled,
    /// Measurement box with a line down to the classical wire.
    Measurement,
    /// Dashed band forcing a visual separation.
    Barrier,
}

impl GateCategory {
    /// The snake_case name used in gate tables.
    pub fn as_str(self) -> &'static str {
        match self {
            GateCategory::SingleQubit => "single_qubit",
            GateCategory::PairedControlTarget => "paired_control_target",
            GateCategory::ControlledPhase => "controlled_phase",
            GateCategory::GeneralControlled => "general_controlled",
            GateCategory::MultiQubit => "multi_qubit",
            GateCategory::MultiControlled => "multi_controlled",
            GateCategory::Measurement => "measurement",
            GateCategory::Barrier => "barrier",
        }
    }
}

impl fmt::Display for GateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
