//! qwire Circuit Instruction Model
//!
//! This crate provides the input side of the qwire diagram pipeline: the
//! immutable description of a quantum circuit that the scheduling and layout
//! core in `qwire-layout` consumes.
//!
//! # Core Components
//!
//! - **Operands**: [`QubitId`], [`ClbitId`] index the wires of a circuit
//! - **Categories**: [`GateCategory`] selects the glyph rule family an
//!   operation is drawn with
//! - **Gates**: [`StandardGate`] names the gates the standard glyph rules know
//! - **Gate tables**: [`GateTable`] maps operation names to categories and
//!   labels, optionally loaded from YAML
//! - **Instructions**: [`Instruction`] combines a name and category with its
//!   operands, parameters and program position
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qwire_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Barrier plus one measurement per qubit into a new register
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_clbits(), 2);
//! assert_eq!(circuit.len(), 5);
//! ```
//!
//! # Example: Custom Operations
//!
//! ```rust
//! use qwire_ir::{Circuit, GateCategory, GateTable, QubitId};
//!
//! let custom = GateTable::from_yaml_str("oracle:\n  category: multi_qubit\n  label: U_f\n")
//!     .unwrap();
//! let table = GateTable::standard().merge(custom);
//!
//! let mut circuit = Circuit::with_size("oracle_call", 3, 0);
//! circuit
//!     .append(&table, "oracle", [QubitId(0), QubitId(2)], [], [])
//!     .unwrap();
//!
//! assert_eq!(circuit.instructions()[0].category, GateCategory::MultiQubit);
//! ```

pub mod category;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod table;

pub use category::GateCategory;
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::Instruction;
pub use qubit::{ClbitId, QubitId};
pub use table::{GateSpec, GateTable};
