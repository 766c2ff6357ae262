//! Property-based tests for scheduling and layout.
//!
//! Random circuits mix single-qubit gates, controlled gates with arbitrary
//! operand order, three-qubit gates, barriers and measurements.

use proptest::prelude::*;
use qwire_ir::{Circuit, ClbitId, Instruction, QubitId, StandardGate};
use qwire_layout::layout::MIN_WIRE_SPACING;
use qwire_layout::{
    LayoutOptions, PlacedGate, ScheduleEntry, StandardGlyph, StandardGlyphs, draw, schedule,
};

/// Operations the generator can emit.
#[derive(Debug, Clone)]
enum Op {
    Single(StandardGate, u32),
    Pair(StandardGate, u32, u32),
    Triple(StandardGate, u32, u32, u32),
    Barrier(Vec<u32>),
    Measure(u32),
}

impl Op {
    fn into_instruction(self) -> Instruction {
        match self {
            Op::Single(gate, q) => Instruction::standard(gate, [QubitId(q)]),
            Op::Pair(gate, a, b) => Instruction::standard(gate, [QubitId(a), QubitId(b)]),
            Op::Triple(gate, a, b, c) => {
                Instruction::standard(gate, [QubitId(a), QubitId(b), QubitId(c)])
            }
            Op::Barrier(qubits) => Instruction::barrier(qubits.into_iter().map(QubitId)),
            Op::Measure(q) => Instruction::measure(QubitId(q), ClbitId(q)),
        }
    }
}

fn arb_single() -> impl Strategy<Value = StandardGate> {
    prop::sample::select(vec![
        StandardGate::H,
        StandardGate::X,
        StandardGate::Z,
        StandardGate::T,
        StandardGate::Reset,
    ])
}

fn arb_pair() -> impl Strategy<Value = StandardGate> {
    prop::sample::select(vec![
        StandardGate::CX,
        StandardGate::CY,
        StandardGate::CZ,
        StandardGate::Swap,
        StandardGate::CH,
        StandardGate::ISwap,
    ])
}

fn arb_triple() -> impl Strategy<Value = StandardGate> {
    prop::sample::select(vec![StandardGate::CCX, StandardGate::CCZ, StandardGate::CSwap])
}

/// Distinct qubits in random order.
fn arb_distinct(num_qubits: u32, count: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::sample::subsequence((0..num_qubits).collect::<Vec<_>>(), count).prop_shuffle()
}

fn arb_op(num_qubits: u32) -> BoxedStrategy<Op> {
    let single = (arb_single(), 0..num_qubits).prop_map(|(g, q)| Op::Single(g, q));
    let measure = (0..num_qubits).prop_map(Op::Measure);
    let barrier = prop::sample::subsequence((0..num_qubits).collect::<Vec<_>>(), 1..=num_qubits as usize)
        .prop_map(Op::Barrier);

    match num_qubits {
        1 => prop_oneof![4 => single, 1 => measure, 1 => barrier].boxed(),
        2 => prop_oneof![
            4 => single,
            3 => (arb_pair(), arb_distinct(2, 2)).prop_map(|(g, q)| Op::Pair(g, q[0], q[1])),
            1 => measure,
            1 => barrier,
        ]
        .boxed(),
        _ => prop_oneof![
            4 => single,
            3 => (arb_pair(), arb_distinct(num_qubits, 2)).prop_map(|(g, q)| Op::Pair(g, q[0], q[1])),
            2 => (arb_triple(), arb_distinct(num_qubits, 3))
                .prop_map(|(g, q)| Op::Triple(g, q[0], q[1], q[2])),
            1 => measure,
            1 => barrier,
        ]
        .boxed(),
    }
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=6).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_op(num_qubits), 0..=30).prop_map(move |ops| {
            let instructions = ops.into_iter().map(Op::into_instruction).collect();
            Circuit::from_parts("random", num_qubits, num_qubits, instructions)
        })
    })
}

fn span(entry: &ScheduleEntry<'_>) -> (usize, usize) {
    let (lo, hi) = entry.instruction.span().unwrap();
    (lo.index(), hi.index())
}

fn ranges_overlap(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

fn arb_spacing() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(LayoutOptions::default().wire_spacing),
        Just(MIN_WIRE_SPACING),
        MIN_WIRE_SPACING..4.0,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_same_column_spans_are_disjoint(circuit in arb_circuit()) {
        let schedule = schedule(&circuit).unwrap();
        let entries = schedule.entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if a.start_column == b.start_column {
                    prop_assert!(
                        !ranges_overlap(span(a), span(b)),
                        "{} and {} collide in column {}",
                        a.instruction.name, b.instruction.name, a.start_column
                    );
                }
            }
        }
    }

    #[test]
    fn prop_order_preserved_on_shared_wires(circuit in arb_circuit()) {
        let schedule = schedule(&circuit).unwrap();
        let entries = schedule.entries();
        for a in entries {
            for b in entries {
                let earlier = a.instruction.program_index < b.instruction.program_index;
                if earlier && ranges_overlap(span(a), span(b)) {
                    prop_assert!(a.start_column < b.start_column);
                }
            }
        }
    }

    #[test]
    fn prop_entries_sorted_by_column_then_program(circuit in arb_circuit()) {
        let schedule = schedule(&circuit).unwrap();
        let keys: Vec<(usize, usize)> = schedule
            .entries()
            .iter()
            .map(|e| (e.start_column, e.instruction.program_index))
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys.len(), circuit.len());
    }

    #[test]
    fn prop_measurement_blocks_every_wire(circuit in arb_circuit()) {
        let schedule = schedule(&circuit).unwrap();
        let entries = schedule.entries();
        for m in entries.iter().filter(|e| e.instruction.is_measure()) {
            for later in entries
                .iter()
                .filter(|e| e.instruction.program_index > m.instruction.program_index)
            {
                prop_assert!(later.start_column > m.start_column);
            }
        }
    }

    #[test]
    fn prop_schedule_and_layout_are_deterministic(circuit in arb_circuit()) {
        prop_assert_eq!(schedule(&circuit).unwrap(), schedule(&circuit).unwrap());

        let glyphs = StandardGlyphs::new();
        let options = LayoutOptions::default();
        let first = draw(&circuit, &glyphs, &options).unwrap();
        let second = draw(&circuit, &glyphs, &options).unwrap();
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn prop_boxes_ordered_along_shared_wires(circuit in arb_circuit()) {
        let diagram = draw(&circuit, &StandardGlyphs::new(), &LayoutOptions::default()).unwrap();
        let x_extent = |g: &PlacedGate<StandardGlyph>| {
            let bbox = g.bounding_box();
            (bbox.min_x, bbox.max_x)
        };

        for (i, a) in diagram.gates.iter().enumerate() {
            let (a_left, a_right) = x_extent(a);
            prop_assert!(a_left >= a.center_x - a.column_width / 2.0 - 1e-9);
            prop_assert!(a_right <= a.center_x + a.column_width / 2.0 + 1e-9);

            for b in &diagram.gates[i + 1..] {
                let shares_wire = a.wire_ys.iter().any(|y| b.wire_ys.contains(y));
                if shares_wire && a.column != b.column {
                    let (b_left, _) = x_extent(b);
                    prop_assert!(a.column < b.column);
                    prop_assert!(a_right < b_left);
                }
            }
        }
    }

    #[test]
    fn prop_same_column_boxes_disjoint(circuit in arb_circuit(), spacing in arb_spacing()) {
        let options = LayoutOptions::default().with_wire_spacing(spacing);
        let diagram = draw(&circuit, &StandardGlyphs::new(), &options).unwrap();

        for (i, a) in diagram.gates.iter().enumerate() {
            for b in diagram.gates[i + 1..].iter().filter(|b| b.column == a.column) {
                prop_assert!(
                    !a.bounding_box().overlaps(&b.bounding_box()),
                    "{} and {} overlap in column {} at spacing {}",
                    a.instruction.name, b.instruction.name, a.column, spacing
                );
            }
        }
    }

    #[test]
    fn prop_total_width_matches_columns(circuit in arb_circuit()) {
        let options = LayoutOptions::default();
        let diagram = draw(&circuit, &StandardGlyphs::new(), &options).unwrap();
        let widths: f64 = diagram.columns.iter().map(|c| c.width).sum();
        let gaps = diagram.columns.len().saturating_sub(1) as f64 * options.gap;
        prop_assert!((diagram.total_width - (widths + gaps)).abs() < 1e-9);
    }
}
