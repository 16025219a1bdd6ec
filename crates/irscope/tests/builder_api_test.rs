//! Integration tests for the GraphBuilder API
//!
//! These tests verify that the public API works and is usable.

use irscope::{
    DumpFormat, GraphBuilder, IrscopeError,
    color::ColorPair,
    config::AppConfig,
    graph::{NULL_TYPE, UNKNOWN_TYPE},
    layout::LayoutMethod,
};

const NODE_DUMP: &str = r#"
--- Graph after parsing ---
  0  Root  === 0  41  [[ 0  1  3 ]]
  1  Con  === 0  [[ ]]  #top
  3  Start  === 3  0  [[ 3  5  6 ]]  #{0:control, 1:abIO}
  5  Parm  === 3  [[ 40 ]]  Control !jvms: Foo::bar @ bci:-1
  6  Parm  === 3  [[ 41 ]]  I_O !jvms: Foo::bar @ bci:-1
 40  > Return  === 5  6  _  ( 3 ) [[ 0 ]]
 41  Halt  === 6  99  [[ 0 ]]
"#;

const JIT_LOG: &str = r#"
#217 CALLSTATICJAVA @(tuple:, bci: 5 36, line: 36) -> [ 218 (Proj) ]; # Static uncommon_trap
   L[ 216 (IfFalse) 137 (Phi) ]
#218 Proj @(bci: 5) -> [ ];
   L[ 217 (CALLSTATICJAVA) ]
"#;

fn seeded() -> GraphBuilder {
    GraphBuilder::new(AppConfig::default().with_seed(7))
}

#[test]
fn test_parse_node_dump() {
    let dump = seeded().parse(NODE_DUMP).expect("Failed to parse");

    assert_eq!(dump.format(), DumpFormat::NodeDump);
    assert_eq!(dump.graph().len(), 7);
    assert!(dump.warnings().is_empty());

    let ret = dump.graph().node("40").expect("Return node");
    assert!(ret.is_focus());
    assert_eq!(ret.in_edges()[2].edge_type(), NULL_TYPE);
    assert_eq!(ret.special_in_edges()[0].edge_type(), "Start");
    assert_eq!(ret.out_edges()[0].edge_type(), "Root");

    let halt = dump.graph().node("41").expect("Halt node");
    assert_eq!(halt.in_edges()[1].edge_type(), UNKNOWN_TYPE);
}

#[test]
fn test_parse_jit_log() {
    let dump = seeded().parse(JIT_LOG).expect("Failed to parse");

    assert_eq!(dump.format(), DumpFormat::JitLog);
    assert_eq!(dump.graph().len(), 2);
}

#[test]
fn test_parse_invalid_input_returns_error() {
    let result = seeded().parse("this is not an IR dump");

    match result {
        Err(IrscopeError::Parse { err, src }) => {
            assert_eq!(src, "this is not an IR dump");
            assert!(err.to_string().contains("E300"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_colorize() {
    let mut builder = seeded();
    let dump = builder.parse(NODE_DUMP).expect("Failed to parse");

    let coloring = builder.colorize(dump.graph());

    assert_eq!(coloring.node_colors().len(), 7);
    assert_eq!(coloring.type_colors().len(), 6 + 3);
    assert_eq!(coloring.type_color("unknown"), Some(ColorPair::neutral()));
    assert_eq!(coloring.node_color_or_neutral("99"), ColorPair::neutral());
}

#[test]
fn test_every_method_places_every_node() {
    let mut builder = seeded();
    let dump = builder.parse(NODE_DUMP).expect("Failed to parse");

    for method in LayoutMethod::ALL {
        let layout = builder
            .layout_with(dump.graph(), method)
            .expect("Failed to lay out");

        assert_eq!(layout.len(), dump.graph().len(), "{method}");
        for node in dump.graph().nodes() {
            assert!(layout[node.id()].is_normalized(), "{method}: {}", node.id());
        }
    }
}

#[test]
fn test_seeded_builder_is_repeatable() {
    let first = seeded().process(NODE_DUMP).expect("Failed to process");
    let second = seeded().process(NODE_DUMP).expect("Failed to process");

    assert_eq!(first.layout(), second.layout());
    assert_eq!(first.coloring(), second.coloring());
}

#[test]
fn test_process_matches_step_by_step_calls() {
    let processed = seeded().process(NODE_DUMP).expect("Failed to process");

    let mut builder = seeded();
    let dump = builder.parse(NODE_DUMP).expect("Failed to parse");
    let coloring = builder.colorize(dump.graph());
    let layout = builder.layout(dump.graph()).expect("Failed to lay out");

    assert_eq!(processed.coloring(), &coloring);
    assert_eq!(processed.layout(), &layout);
}

#[test]
fn test_builder_generator_advances_between_calls() {
    let mut builder = seeded();
    let dump = builder.parse(NODE_DUMP).expect("Failed to parse");

    let first = builder
        .layout_with(dump.graph(), LayoutMethod::Random)
        .expect("Failed to lay out");
    let second = builder
        .layout_with(dump.graph(), LayoutMethod::Random)
        .expect("Failed to lay out");

    assert_ne!(first, second);
}

#[test]
fn test_process_uses_configured_method() {
    let config = AppConfig::default()
        .with_layout_method(LayoutMethod::Grid)
        .with_seed(1);

    let processed = GraphBuilder::new(config)
        .process(NODE_DUMP)
        .expect("Failed to process");

    assert_eq!(processed.method(), LayoutMethod::Grid);
    assert_eq!(processed.graph().len(), 7);
    assert_eq!(processed.layout().len(), 7);
}

#[test]
fn test_default_builder() {
    let mut builder = GraphBuilder::default();
    assert_eq!(builder.config().layout.method, LayoutMethod::Proto2);

    let processed = builder.process("1 A === [[]]").expect("Failed to process");
    assert_eq!(processed.dump().format(), DumpFormat::NodeDump);
}
