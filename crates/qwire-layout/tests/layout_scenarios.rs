//! End-to-end scheduling and layout of small, hand-checked circuits.
//!
//! Each test pins the exact columns (and, where relevant, widths) a reader
//! would derive on paper from the range-locking rule.

use qwire_ir::{Circuit, ClbitId, GateCategory, GateTable, Instruction, QubitId, StandardGate};
use qwire_layout::layout::MIN_WIRE_SPACING;
use qwire_layout::{
    Diagram, GeometryProvider, GlyphError, GlyphGeometry, GlyphRequest, GlyphShape, LayoutError,
    LayoutOptions, StandardGlyph, StandardGlyphs, draw, group, schedule,
};

/// Helper: `(name, column)` pairs in schedule order.
fn columns_of(circuit: &Circuit) -> Vec<(String, usize)> {
    schedule(circuit)
        .unwrap()
        .entries()
        .iter()
        .map(|e| (e.instruction.name.clone(), e.start_column))
        .collect()
}

/// Helper: lay out with the built-in glyphs and default options.
fn draw_standard(circuit: &Circuit) -> Diagram<StandardGlyph> {
    draw(circuit, &StandardGlyphs::new(), &LayoutOptions::default()).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Provider with one fixed width per gate name.
struct TableWidths(&'static [(&'static str, f64)]);

struct Sized {
    width: f64,
    ys: Vec<f64>,
}

impl GlyphGeometry for Sized {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        1.0
    }

    fn occupied_wire_ys(&self) -> &[f64] {
        &self.ys
    }
}

impl GeometryProvider for TableWidths {
    type Glyph = Sized;

    fn glyph(&self, request: &GlyphRequest<'_>) -> Result<Sized, GlyphError> {
        self.0
            .iter()
            .find(|(name, _)| *name == request.name)
            .map(|&(_, width)| Sized {
                width,
                ys: request.wire_ys.to_vec(),
            })
            .ok_or_else(|| GlyphError::UnsupportedGate {
                name: request.name.to_string(),
                category: request.category,
            })
    }
}

fn h_h_cx() -> Circuit {
    let mut circuit = Circuit::with_size("h_h_cx", 2, 0);
    circuit
        .h(QubitId(0))
        .unwrap()
        .h(QubitId(1))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap();
    circuit
}

// ============================================================================
// Scheduling
// ============================================================================

#[test]
fn test_parallel_hadamards_then_cx() {
    assert_eq!(
        columns_of(&h_h_cx()),
        vec![("h".into(), 0), ("h".into(), 0), ("cx".into(), 1)]
    );
    assert_eq!(schedule(&h_h_cx()).unwrap().num_columns(), 2);
}

#[test]
fn test_disjoint_ranges_share_column() {
    let mut circuit = Circuit::with_size("disjoint", 3, 0);
    circuit
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .x(QubitId(2))
        .unwrap();

    assert_eq!(columns_of(&circuit), vec![("cx".into(), 0), ("x".into(), 0)]);
    assert_eq!(group(&schedule(&circuit).unwrap()).len(), 1);
}

#[test]
fn test_repeated_cx_moves_right() {
    let mut circuit = Circuit::with_size("cx_cx", 2, 0);
    circuit
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap();

    assert_eq!(columns_of(&circuit), vec![("cx".into(), 0), ("cx".into(), 1)]);
}

#[test]
fn test_measurement_forces_next_column() {
    let mut circuit = Circuit::with_size("measure_then_x", 2, 1);
    circuit
        .measure(QubitId(0), ClbitId(0))
        .unwrap()
        .x(QubitId(1))
        .unwrap();

    assert_eq!(
        columns_of(&circuit),
        vec![("measure".into(), 0), ("x".into(), 1)]
    );
}

#[test]
fn test_straddling_gate_blocks_middle_wire() {
    let mut circuit = Circuit::with_size("straddle", 3, 0);
    circuit
        .cz(QubitId(0), QubitId(2))
        .unwrap()
        .h(QubitId(1))
        .unwrap()
        .x(QubitId(0))
        .unwrap();

    assert_eq!(
        columns_of(&circuit),
        vec![("cz".into(), 0), ("h".into(), 1), ("x".into(), 1)]
    );
}

#[test]
fn test_ghz_columns() {
    // h, cx chain, barrier, then one measurement per column.
    let circuit = Circuit::ghz(3).unwrap();
    let schedule = schedule(&circuit).unwrap();
    let columns: Vec<usize> = schedule.entries().iter().map(|e| e.start_column).collect();
    assert_eq!(columns, vec![0, 1, 2, 3, 4, 5, 6]);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_fixed_widths_total() {
    let provider = TableWidths(&[("h", 1.0), ("cx", 1.2)]);
    let diagram = draw(&h_h_cx(), &provider, &LayoutOptions::default().with_gap(0.5)).unwrap();

    assert_eq!(diagram.columns[0].width, 1.0);
    assert_eq!(diagram.columns[1].width, 1.2);
    assert!(approx(diagram.columns[1].x, 1.5));
    assert!(approx(diagram.total_width, 2.7));
}

#[test]
fn test_bell_with_standard_glyphs() {
    let circuit = Circuit::bell().unwrap();
    let diagram = draw_standard(&circuit);

    assert_eq!(diagram.num_columns(), 4);
    assert_eq!(diagram.wire_ys(), &[1.0, -1.0]);
    assert_eq!(diagram.classical_y(), Some(-4.0));
    assert!(approx(diagram.total_height, 5.0));

    let kinds: Vec<&GlyphShape> = diagram.gates.iter().map(|g| &g.glyph.shape).collect();
    assert!(matches!(kinds[0], GlyphShape::Labelled { .. }));
    assert!(matches!(kinds[1], GlyphShape::ControlledNot { .. }));
    assert!(matches!(
        kinds[2],
        GlyphShape::Measure {
            qubit,
            classical
        } if *qubit == 1.0 && *classical == -4.0
    ));
    assert!(matches!(kinds[3], GlyphShape::Measure { .. }));
}

#[test]
fn test_gates_in_column_share_center() {
    let mut circuit = Circuit::with_size("wide_and_narrow", 2, 0);
    circuit
        .h(QubitId(0))
        .unwrap()
        .u(0.1, 0.2, 0.3, QubitId(1))
        .unwrap();
    let diagram = draw_standard(&circuit);

    assert_eq!(diagram.num_columns(), 1);
    let h = &diagram.gates[0];
    let u = &diagram.gates[1];
    assert_eq!(h.center_x, u.center_x);
    assert!(u.glyph.width > h.glyph.width);
    assert_eq!(diagram.columns[0].width, u.glyph.width);
}

#[test]
fn test_custom_gate_from_yaml_table() {
    let custom = GateTable::from_yaml_str(
        "
oracle:
  category: multi_qubit
  label: U_f
",
    )
    .unwrap();
    let table = GateTable::standard().merge(custom);

    let mut circuit = Circuit::with_size("oracle", 3, 0);
    circuit
        .append(&table, "oracle", [QubitId(0), QubitId(2)], [], [])
        .unwrap();
    circuit.h(QubitId(1)).unwrap();

    let diagram = draw(
        &circuit,
        &StandardGlyphs::with_table(table),
        &LayoutOptions::default(),
    )
    .unwrap();

    // The oracle straddles q1, so the hadamard waits a column.
    assert_eq!(diagram.gates[1].column, 1);
    match &diagram.gates[0].glyph.shape {
        GlyphShape::SpanBox { label, indices, .. } => {
            assert_eq!(label, "U_f");
            assert_eq!(indices.len(), 2);
        }
        other => panic!("Expected SpanBox, got {other:?}"),
    }
}

#[test]
fn test_measurement_box_leaves_lower_wires_free() {
    let mut circuit = Circuit::with_size("measure_above_h", 2, 1);
    circuit
        .h(QubitId(1))
        .unwrap()
        .measure(QubitId(0), ClbitId(0))
        .unwrap();
    let diagram = draw_standard(&circuit);

    let (h, m) = (&diagram.gates[0], &diagram.gates[1]);
    assert_eq!(h.column, m.column);
    assert!(!h.bounding_box().overlaps(&m.bounding_box()));
    assert!(matches!(
        m.glyph.shape,
        GlyphShape::Measure { classical, .. } if classical == -4.0
    ));
}

#[test]
fn test_phase_caption_clears_next_wire_at_min_spacing() {
    let mut circuit = Circuit::with_size("cp_above_h", 3, 0);
    circuit
        .cp(0.5, QubitId(0), QubitId(1))
        .unwrap()
        .h(QubitId(2))
        .unwrap();
    let options = LayoutOptions::default().with_wire_spacing(MIN_WIRE_SPACING);
    let diagram = draw(&circuit, &StandardGlyphs::new(), &options).unwrap();

    let (cp, h) = (&diagram.gates[0], &diagram.gates[1]);
    assert_eq!(cp.column, h.column);
    assert!(!cp.bounding_box().overlaps(&h.bounding_box()));
}

#[test]
fn test_qft_lays_out() {
    let circuit = Circuit::qft(4).unwrap();
    let diagram = draw_standard(&circuit);
    assert_eq!(diagram.gates.len(), circuit.len());
    assert!(diagram.total_width > 0.0);
    assert!(
        diagram
            .columns
            .windows(2)
            .all(|w| w[0].right() < w[1].x)
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_gate_name_in_known_category() {
    let circuit = Circuit::from_parts(
        "mystery",
        2,
        0,
        vec![Instruction::new(
            "mystery",
            GateCategory::PairedControlTarget,
            [QubitId(0), QubitId(1)],
        )],
    );
    match draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()) {
        Err(LayoutError::UnknownCategory { name, category }) => {
            assert_eq!(name, "mystery");
            assert_eq!(category, GateCategory::PairedControlTarget);
        }
        other => panic!("Expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn test_invalid_operand_aborts_before_layout() {
    let circuit = Circuit::from_parts(
        "bad",
        2,
        0,
        vec![
            Instruction::standard(StandardGate::H, [QubitId(0)]),
            Instruction::standard(StandardGate::X, [QubitId(2)]),
        ],
    );
    let err = draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidOperand { program_index: 1, .. }));
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn test_malformed_params_propagate() {
    let circuit = Circuit::from_parts(
        "nan",
        1,
        0,
        vec![Instruction::standard(StandardGate::Rz, [QubitId(0)]).with_params([f64::NAN])],
    );
    assert!(matches!(
        draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()),
        Err(LayoutError::Geometry(GlyphError::MalformedParams { .. }))
    ));
}

#[test]
fn test_measurement_without_classical_bit() {
    let circuit = Circuit::from_parts(
        "unmeasured",
        1,
        0,
        vec![Instruction::standard(StandardGate::Measure, [QubitId(0)])],
    );
    assert!(matches!(
        draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()),
        Err(LayoutError::Geometry(GlyphError::MissingClassicalWire { .. }))
    ));
}
