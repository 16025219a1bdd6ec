use irscope_core::graph::{Edge, NULL_TYPE, UNKNOWN_TYPE};
use irscope_parser::{DumpFormat, error::ErrorCode, normalize_lines, parse, parse_lines};
use proptest::prelude::*;

fn edge_ids(edges: &[Edge]) -> Vec<&str> {
    edges.iter().map(Edge::id).collect()
}

#[test]
fn test_two_node_dump() {
    let dump = parse_lines(&["1 TypeA === [[]] ", "2 TypeB === 1 [[]] "]).expect("Failed to parse");

    assert_eq!(dump.format(), DumpFormat::NodeDump);

    let nodes = dump.graph().nodes();
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].in_edges().is_empty());
    assert!(nodes[0].out_edges().is_empty());
    assert_eq!(edge_ids(nodes[1].in_edges()), vec!["1"]);
    assert_eq!(nodes[1].in_edges()[0].edge_type(), "TypeA");
}

#[test]
fn test_null_edge_resolves_to_null() {
    let dump = parse("5 Region === _ 5 [[ 7 ]]").expect("Failed to parse");

    let node = &dump.graph().nodes()[0];
    assert_eq!(node.in_edges()[0].edge_type(), NULL_TYPE);
    assert_eq!(node.in_edges()[1].edge_type(), "Region");
    assert_eq!(node.out_edges()[0].edge_type(), UNKNOWN_TYPE);
}

#[test]
fn test_jit_log() {
    let source = r#"
#217 CALLSTATICJAVA @(tuple:, bci: 5 36, line: 36) -> [ 218 (Proj) ]; # Static uncommon_trap
   L[ 216 (IfFalse) 137 (Phi) ]
#218 Proj @(bci: 5) -> [ ];
   L[ 217 (CALLSTATICJAVA) ]
"#;

    let dump = parse(source).expect("Failed to parse");

    assert_eq!(dump.format(), DumpFormat::JitLog);
    assert!(dump.warnings().is_empty());

    let nodes = dump.graph().nodes();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].id(), "217");
    assert_eq!(nodes[0].node_type(), "CALLSTATICJAVA");
    assert_eq!(edge_ids(nodes[0].in_edges()), vec!["216", "137"]);
    assert_eq!(edge_ids(nodes[0].out_edges()), vec!["218"]);
    assert_eq!(nodes[0].out_edges()[0].edge_type(), "Proj");
    assert_eq!(
        nodes[0].details(),
        "@(tuple:, bci: 5 36, line: 36) # Static uncommon_trap"
    );
    assert_eq!(nodes[0].line(), 2);
    assert_eq!(nodes[1].in_edges()[0].edge_type(), "CALLSTATICJAVA");
}

#[test]
fn test_skipped_lines_are_warnings() {
    let source = "1 Start === [[ 2 ]]\n2 Broken 1 [[]]\n3 Return === 1 [[]]";

    let dump = parse(source).expect("Failed to parse");

    assert_eq!(dump.graph().len(), 2);
    assert_eq!(dump.warnings().len(), 1);
    assert_eq!(dump.warnings()[0].code(), Some(ErrorCode::E100));
    let span = dump.warnings()[0].labels()[0].span();
    assert_eq!(&source[span.to_range()], "2 Broken 1 [[]]");
}

#[test]
fn test_empty_input_fails() {
    let err = parse("").unwrap_err();

    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E300));
    assert!(err.diagnostics()[0].severity().is_error());
}

#[test]
fn test_no_valid_records_reports_why() {
    let err = parse("header line\n1 A 2 [[]]").unwrap_err();

    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(codes, vec![Some(ErrorCode::E300), Some(ErrorCode::E100)]);
}

#[test]
fn test_crlf_line_endings() {
    let dump = parse("1 A === [[ 2 ]]\r\n2 B === 1 [[]]\r\n").expect("Failed to parse");

    assert_eq!(dump.graph().len(), 2);
    assert_eq!(dump.graph().nodes()[0].details(), "");
}

fn node_id() -> impl Strategy<Value = String> {
    (1u32..10_000).prop_map(|id| id.to_string())
}

fn node_line() -> impl Strategy<Value = (String, String, Vec<String>, Vec<String>, Vec<String>)> {
    (
        node_id(),
        "[A-Z][A-Za-z]{0,10}",
        prop::collection::vec(node_id(), 0..6),
        prop::collection::vec(node_id(), 0..4),
        prop::collection::vec(node_id(), 0..6),
    )
}

proptest! {
    #[test]
    fn prop_node_dump_round_trip((id, ty, ins, specials, outs) in node_line()) {
        let special = if specials.is_empty() {
            "()".to_string()
        } else {
            format!("( {} )", specials.join(" "))
        };
        let line = format!(
            "{id} {ty} === {} {special} [[ {} ]] P=0.5",
            ins.join(" "),
            outs.join(" ")
        );

        let dump = parse(&line).expect("Failed to parse");
        let node = &dump.graph().nodes()[0];

        prop_assert_eq!(node.id(), id.as_str());
        prop_assert_eq!(node.node_type(), ty.as_str());
        prop_assert_eq!(edge_ids(node.in_edges()), ins.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(
            edge_ids(node.special_in_edges()),
            specials.iter().map(String::as_str).collect::<Vec<_>>()
        );
        prop_assert_eq!(edge_ids(node.out_edges()), outs.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(node.details(), "P=0.5");
    }

    #[test]
    fn prop_normalizing_node_dumps_is_identity(lines in prop::collection::vec("[0-9]{1,4} [A-Z][a-z]{0,5} === [0-9 ]{0,12}\\[\\[\\]\\]", 0..10)) {
        prop_assert_eq!(normalize_lines(&lines), lines.clone());
    }
}
