//! Gate tables mapping operation names to layout categories and labels.
//!
//! A table is the side-channel a circuit author uses to tell the layout
//! core how to draw operations it does not know by name. The standard table
//! covers every [`StandardGate`]; custom tables are usually written in YAML:
//!
//! ```yaml
//! oracle:
//!   category: multi_qubit
//!   label: "U_f"
//! cx:
//!   category: paired_control_target
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::GateCategory;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;

/// Standard names without a fixed arity, as `(name, category, label)`.
const VARIADIC: [(&str, GateCategory, &str); 1] = [("mcx", GateCategory::MultiControlled, "X")];

/// How one operation name is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Layout rule family.
    pub category: GateCategory,
    /// Display label; the operation name is used when absent.
    #[serde(default, alias = "latex")]
    pub label: Option<String>,
}

/// Lookup table from lowercase operation names to [`GateSpec`]s.
#[derive(Debug, Clone, Default)]
pub struct GateTable {
    entries: FxHashMap<String, GateSpec>,
}

impl GateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering every [`StandardGate`], plus `mcx` for any number of
    /// controls.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for gate in StandardGate::ALL {
            table.insert(
                gate.name(),
                GateSpec {
                    category: gate.category(),
                    label: Some(gate.label().to_string()),
                },
            );
        }
        for (name, category, label) in VARIADIC {
            table.insert(
                name,
                GateSpec {
                    category,
                    label: Some(label.to_string()),
                },
            );
        }
        table
    }

    /// Parse a table from a YAML mapping of `name -> {category, label}`.
    pub fn from_yaml_str(yaml: &str) -> IrResult<Self> {
        let raw: BTreeMap<String, GateSpec> = serde_yaml_ng::from_str(yaml)?;
        let mut table = Self::new();
        for (name, spec) in raw {
            table.insert(&name, spec);
        }
        Ok(table)
    }

    /// Insert or replace the entry for `name`.
    pub fn insert(&mut self, name: &str, spec: GateSpec) {
        self.entries.insert(name.to_ascii_lowercase(), spec);
    }

    /// Overlay `other` on this table; entries in `other` win.
    #[must_use]
    pub fn merge(mut self, other: GateTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Look up the entry for `name`, ignoring ASCII case.
    ///
    /// Aliases of standard gates (`cnot`, `toffoli`, ...) resolve to the
    /// entry of the canonical name.
    pub fn lookup(&self, name: &str) -> Option<&GateSpec> {
        let key = name.to_ascii_lowercase();
        self.entries.get(&key).or_else(|| {
            StandardGate::from_name(&key).and_then(|gate| self.entries.get(gate.name()))
        })
    }

    /// Like [`lookup`](Self::lookup) but fails on unknown names.
    pub fn classify(&self, name: &str) -> IrResult<&GateSpec> {
        self.lookup(name)
            .ok_or_else(|| IrError::UnknownGate(name.to_string()))
    }

    /// Display label for `name`: the table label, else the name itself.
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.lookup(name)
            .and_then(|spec| spec.label.as_deref())
            .unwrap_or(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
