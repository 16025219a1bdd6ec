//! Node dump records to graph.
//!
//! Each record line has the shape
//!
//! ```text
//! <id> [>] <type> === <in-ids...> [( <special-ids...> )] [[ <out-ids...> ]] <details...>
//! ```
//!
//! Lines that do not start with a numeric id are not records and are skipped
//! without comment. Records that break off early are skipped with a warning.
//!
//! An id is numeric when it reads as a number literal of the dump tools:
//! decimal with optional sign, fraction and exponent (`12`, `-3`, `1e3`),
//! unsigned `0x`/`0o`/`0b` integers, or `Infinity` with optional sign.

use std::collections::HashMap;

use indexmap::IndexSet;
use irscope_core::graph::{Edge, Graph, Node};
use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::opt,
    error::{ContextError, ErrMode},
    token::any,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    source::SourceLine,
    span::Span,
    tokens::{
        self, FOCUS_MARKER, IResult, OUTPUTS_CLOSE, OUTPUTS_EMPTY, OUTPUTS_OPEN, SEPARATOR,
        SPECIAL_CLOSE, SPECIAL_EMPTY, SPECIAL_OPEN, Tokens, marker, take_until, token_where,
    },
};

/// `<id> <type> === <list marker>`
const MIN_RECORD_TOKENS: usize = 4;

const RECORD_HELP: &str = "node dump lines look like `12 AddI === 10 11 [[ 13 ]] details`";

/// `<id> [>] <type>` of a record.
#[derive(Debug)]
struct Head<'s> {
    id: &'s str,
    focus: bool,
    node_type: &'s str,
}

/// Edge lists and details of a record.
#[derive(Debug)]
struct Body<'s> {
    in_edges: Vec<&'s str>,
    special_in_edges: Vec<&'s str>,
    out_edges: Vec<&'s str>,
    details: Vec<&'s str>,
}

/// Build a graph from node dump lines.
///
/// Node types are registered as soon as a record's head is read, so a type
/// whose only record breaks off later still appears in the type list.
pub(crate) fn build_graph(lines: &[SourceLine<'_>], collector: &mut DiagnosticCollector) -> Graph {
    let mut nodes = Vec::new();
    let mut node_types = IndexSet::new();
    let mut seen: HashMap<String, Span> = HashMap::new();

    for line in lines {
        let tokens = tokens::tokenize(line.text());
        if !is_record(&tokens) {
            trace!(line = line.number(); "Skipping non-record line");
            continue;
        }

        let mut input: Tokens<'_, '_> = &tokens;

        let Ok(head) = record_head(&mut input) else {
            collector.emit(skipped(
                ErrorCode::E100,
                format!("expected `{SEPARATOR}` after the node type"),
                line,
            ));
            continue;
        };
        node_types.insert(head.node_type.to_string());

        let body = match record_body(&mut input) {
            Ok(body) => body,
            Err(code) => {
                collector.emit(skipped(
                    code,
                    format!("record for node `{}` is incomplete", head.id),
                    line,
                ));
                continue;
            }
        };

        if let Some(first) = seen.get(head.id) {
            collector.emit(
                Diagnostic::warning(format!("node `{}` is defined more than once", head.id))
                    .with_code(ErrorCode::E104)
                    .with_label(line.span(), "duplicate skipped")
                    .with_secondary_label(*first, "first defined here"),
            );
            continue;
        }
        seen.insert(head.id.to_string(), line.span());

        trace!(line = line.number(), id = head.id, node_type = head.node_type; "Parsed node");
        nodes.push(into_node(head, body, line.number()));
    }

    debug!(nodes = nodes.len(), types = node_types.len(); "Built graph");

    Graph::new(nodes, node_types)
}

fn is_record(tokens: &[&str]) -> bool {
    tokens.len() >= MIN_RECORD_TOKENS && is_numeric(tokens[0])
}

fn is_numeric(token: &str) -> bool {
    if matches!(token, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }

    let radix = match token.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &token[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    // `f64` also reads `inf` and `nan`, which are not ids.
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && token.parse::<f64>().is_ok()
}

fn record_head<'t, 's>(input: &mut Tokens<'t, 's>) -> IResult<Head<'s>> {
    let id = any.parse_next(input)?;
    let focus = opt(marker(FOCUS_MARKER)).parse_next(input)?.is_some();
    let node_type = any.parse_next(input)?;
    marker(SEPARATOR).parse_next(input)?;

    Ok(Head {
        id,
        focus,
        node_type,
    })
}

fn record_body<'s>(input: &mut Tokens<'_, 's>) -> Result<Body<'s>, ErrorCode> {
    let in_edges = in_edges(input).map_err(|_| ErrorCode::E101)?;
    let special_in_edges = special_in_edges(input).map_err(|_| ErrorCode::E102)?;
    if input.is_empty() {
        return Err(ErrorCode::E103);
    }
    let out_edges = out_edges(input).map_err(|_| ErrorCode::E103)?;

    Ok(Body {
        in_edges,
        special_in_edges,
        out_edges,
        details: input.to_vec(),
    })
}

/// Ids up to the special or output list, which must follow.
fn in_edges<'t, 's>(input: &mut Tokens<'t, 's>) -> IResult<Vec<&'s str>> {
    let ids = take_until(|token| {
        token.starts_with(OUTPUTS_OPEN) || token.starts_with(SPECIAL_OPEN)
    })
    .parse_next(input)?;
    if input.is_empty() {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    Ok(ids.to_vec())
}

/// `()`, `( <ids...> )` or nothing.
fn special_in_edges<'t, 's>(input: &mut Tokens<'t, 's>) -> IResult<Vec<&'s str>> {
    if opt(marker(SPECIAL_EMPTY)).parse_next(input)?.is_some() {
        return Ok(Vec::new());
    }
    if opt(token_where(|token| token.starts_with(SPECIAL_OPEN)))
        .parse_next(input)?
        .is_none()
    {
        return Ok(Vec::new());
    }

    let ids = take_until(|token| token.starts_with(SPECIAL_CLOSE)).parse_next(input)?;
    token_where(|token| token.starts_with(SPECIAL_CLOSE)).parse_next(input)?;
    Ok(ids.to_vec())
}

/// `[[]]` or `[[ <ids...> ]]`. A missing `]]` takes the rest of the line.
fn out_edges<'t, 's>(input: &mut Tokens<'t, 's>) -> IResult<Vec<&'s str>> {
    if opt(marker(OUTPUTS_EMPTY)).parse_next(input)?.is_some() {
        return Ok(Vec::new());
    }

    // The opener is skipped whatever it looks like.
    any.parse_next(input)?;
    let ids = take_until(|token| token.starts_with(OUTPUTS_CLOSE)).parse_next(input)?;
    opt(token_where(|token| token.starts_with(OUTPUTS_CLOSE))).parse_next(input)?;
    Ok(ids.to_vec())
}

fn into_node(head: Head<'_>, body: Body<'_>, line: usize) -> Node {
    let edges = |ids: Vec<&str>| -> Vec<Edge> { ids.into_iter().map(Edge::new).collect() };

    Node::new(head.id, head.node_type)
        .with_focus(head.focus)
        .with_in_edges(edges(body.in_edges))
        .with_special_in_edges(edges(body.special_in_edges))
        .with_out_edges(edges(body.out_edges))
        .with_details(body.details.join(" "))
        .with_line(line)
}

fn skipped(code: ErrorCode, message: String, line: &SourceLine<'_>) -> Diagnostic {
    Diagnostic::warning(message)
        .with_code(code)
        .with_label(line.span(), code.description())
        .with_help(RECORD_HELP)
}

#[cfg(test)]
mod tests {
    use irscope_core::graph::UNKNOWN_TYPE;

    use super::*;
    use crate::source;

    fn build(source: &str) -> (Graph, Vec<Diagnostic>) {
        let lines = source::split_lines(source);
        let mut collector = DiagnosticCollector::new();
        let graph = build_graph(&lines, &mut collector);
        (graph, collector.finish().unwrap())
    }

    fn ids(edges: &[Edge]) -> Vec<&str> {
        edges.iter().map(Edge::id).collect()
    }

    #[test]
    fn test_full_record() {
        let (graph, warnings) =
            build(" 863  RangeCheck  ===  853  862  [[ 864  867 ]] P=0.999999, C=-1.000000");

        assert!(warnings.is_empty());
        let node = &graph.nodes()[0];
        assert_eq!(node.id(), "863");
        assert_eq!(node.node_type(), "RangeCheck");
        assert_eq!(ids(node.in_edges()), vec!["853", "862"]);
        assert!(node.special_in_edges().is_empty());
        assert_eq!(ids(node.out_edges()), vec!["864", "867"]);
        assert_eq!(node.details(), "P=0.999999, C=-1.000000");
        assert!(!node.is_focus());
        assert_eq!(node.line(), 1);
        assert!(node.edges().all(|edge| edge.edge_type() == UNKNOWN_TYPE));
    }

    #[test]
    fn test_focus_and_special_inputs() {
        let (graph, _) = build("10 > Phi === 5 ( 7 8 ) [[ 11 ]] #int");

        let node = &graph.nodes()[0];
        assert!(node.is_focus());
        assert_eq!(node.node_type(), "Phi");
        assert_eq!(ids(node.in_edges()), vec!["5"]);
        assert_eq!(ids(node.special_in_edges()), vec!["7", "8"]);
        assert_eq!(ids(node.out_edges()), vec!["11"]);
        assert_eq!(node.details(), "#int");
    }

    #[test]
    fn test_empty_lists() {
        let (graph, _) = build("1 Root === _ () [[]]\n2 Con === [[]]");

        assert_eq!(graph.len(), 2);
        assert_eq!(ids(graph.nodes()[0].in_edges()), vec!["_"]);
        assert!(graph.nodes()[0].special_in_edges().is_empty());
        assert!(graph.nodes()[1].in_edges().is_empty());
        assert!(graph.nodes()[1].out_edges().is_empty());
        assert_eq!(graph.nodes()[1].details(), "");
    }

    #[test]
    fn test_non_record_lines_are_silent() {
        let (graph, warnings) = build("--- After Parsing ---\nabc Foo === [[]]\n\n1 A ===");

        assert!(graph.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_numeric_ids() {
        let numeric = [
            "12", "-3", "+4.5", ".5", "1e3", "1e400", "0x1F", "0o17", "0b101", "Infinity",
            "-Infinity",
        ];
        for id in numeric {
            assert!(is_numeric(id), "{id}");
        }
        let not_numeric = [
            "abc", "inf", "NaN", "nan", "0x", "0xG1", "-0x10", "1_000", ".", "e5", "#12",
        ];
        for id in not_numeric {
            assert!(!is_numeric(id), "{id}");
        }

        let (graph, _) = build("0x10 A === [[]]\nInfinity B === [[]]");
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_missing_separator() {
        let (graph, warnings) = build("12 AddI 10 11 [[ 13 ]]");

        assert!(graph.is_empty());
        assert!(graph.node_types().is_empty());
        assert_eq!(warnings[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_unterminated_inputs_keep_type() {
        let (graph, warnings) = build("12 AddI === 10 11 13");

        assert!(graph.is_empty());
        assert!(graph.node_types().contains("AddI"));
        assert_eq!(warnings[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_unterminated_special_inputs() {
        let (_, warnings) = build("12 Phi === 10 ( 11 [[ 13 ]]");
        assert_eq!(warnings[0].code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_missing_outputs() {
        let (_, warnings) = build("12 Phi === 10 ( 11 )");
        assert_eq!(warnings[0].code(), Some(ErrorCode::E103));
    }

    #[test]
    fn test_unclosed_outputs_take_rest_of_line() {
        let (graph, _) = build("12 If === 10 [[ 13 14");

        assert_eq!(ids(graph.nodes()[0].out_edges()), vec!["13", "14"]);
        assert_eq!(graph.nodes()[0].details(), "");
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let source = "1 A === [[]]\n1 B === [[]]\n2 C === 1 [[]]";
        let (graph, warnings) = build(source);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.nodes()[0].node_type(), "A");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), Some(ErrorCode::E104));
        assert_eq!(warnings[0].labels()[1].span().to_range(), 0..12);
    }

    #[test]
    fn test_types_in_first_seen_order() {
        let (graph, _) = build("1 Start === [[]]\n2 Con === [[]]\n3 Start === [[]]");

        let types: Vec<_> = graph.node_types().iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Start", "Con"]);
    }
}
