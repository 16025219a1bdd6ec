//! JIT log normalization.
//!
//! A JIT log describes each node with two lines: a header carrying the
//! outputs, followed by an `L[` line carrying the inputs.
//!
//! ```text
//! #217 CALLSTATICJAVA @(tuple:, bci: 5 36) -> [ 218 (Proj) ]; # Static uncommon_trap
//!    L[ 216 (IfFalse) 137 (Phi) 8 (Parm) ]
//! ```
//!
//! Each record is rewritten into a single node dump line so that one parser
//! handles both dialects:
//!
//! ```text
//! 217 CALLSTATICJAVA === 216 137 8 [[ 218 ]] @(tuple:, bci: 5 36) # Static uncommon_trap
//! ```
//!
//! Type annotations such as `(Proj)` are dropped; edge types are recovered
//! later from the nodes the edges point at.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{opt, repeat, terminated},
    error::{ContextError, ErrMode},
    token::any,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    format::{self, DumpFormat},
    source::{self, SourceLine},
    tokens::{
        self, IResult, JIT_ARROW, JIT_ID_PREFIX, JIT_INPUTS_CLOSE, JIT_INPUTS_OPEN,
        JIT_OUTPUTS_CLOSE, OUTPUTS_CLOSE, OUTPUTS_OPEN, SEPARATOR,
        TYPE_ANNOTATION_PREFIX, Tokens, marker, take_until, token_where,
    },
};

const HEADER_HELP: &str =
    "JIT log headers look like `#12 AddI @(bci: 3) -> [ 13 (Return) ]; trailing text`";
const INPUTS_HELP: &str = "JIT log input lines look like `L[ 10 (Parm) 11 (ConI) ]`";

/// Rewrite JIT log lines into node dump lines.
///
/// Lines are returned unchanged unless [`detect`](crate::detect) recognizes
/// the JIT log dialect. Records that cannot be read are dropped. Applying
/// this to its own output returns the output unchanged.
///
/// # Examples
///
/// ```
/// # use irscope_parser::normalize_lines;
/// let lines = [
///     "#5 AddI @(bci: 3) -> [ 6 (Return) ];",
///     "  L[ 3 (Parm) 4 (Parm) ]",
/// ];
///
/// assert_eq!(normalize_lines(&lines), vec!["5 AddI === 3 4 [[ 6 ]] @(bci: 3)"]);
/// ```
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    if format::detect(lines) != DumpFormat::JitLog {
        return lines.iter().map(|line| line.as_ref().to_string()).collect();
    }

    let source_lines = source::from_lines(lines);
    let mut collector = DiagnosticCollector::new();
    normalize(&source_lines, &mut collector)
        .iter()
        .map(|line| line.text().to_string())
        .collect()
}

/// Merge every header and `L[` line pair into one node dump line.
pub(crate) fn normalize<'src>(
    lines: &[SourceLine<'src>],
    collector: &mut DiagnosticCollector,
) -> Vec<SourceLine<'src>> {
    let mut normalized = Vec::with_capacity(lines.len() / 2);
    let mut pending: Option<(Header<'_>, &SourceLine<'src>)> = None;

    for line in lines {
        let tokens = tokens::tokenize(line.text());

        let Some((header, header_line)) = pending.take() else {
            if !tokens::is_jit_header(&tokens) {
                continue;
            }
            match parse_header(&tokens) {
                Ok(header) => {
                    trace!(line = line.number(), id = header.id; "Read JIT header");
                    pending = Some((header, line));
                }
                Err(code) => collector.emit(malformed(code, line, HEADER_HELP)),
            }
            continue;
        };

        if tokens.first() != Some(&JIT_INPUTS_OPEN) {
            collector.emit(
                Diagnostic::warning(format!(
                    "JIT header for node `{}` is not followed by an `L[` input line",
                    header.id
                ))
                .with_code(ErrorCode::E003)
                .with_label(header_line.span(), "record dropped")
                .with_secondary_label(line.span(), "expected `L[` here")
                .with_help(INPUTS_HELP),
            );
            continue;
        }

        match parse_inputs(&tokens) {
            Ok(inputs) => normalized.push(SourceLine::synthetic(
                header.merge(&inputs),
                header_line.number(),
                header_line.span().union(line.span()),
            )),
            Err(code) => collector.emit(
                malformed(code, line, INPUTS_HELP)
                    .with_secondary_label(header_line.span(), "header of the dropped record"),
            ),
        }
    }

    if let Some((header, header_line)) = pending {
        collector.emit(
            Diagnostic::warning(format!(
                "JIT header for node `{}` is not followed by an `L[` input line",
                header.id
            ))
            .with_code(ErrorCode::E003)
            .with_label(header_line.span(), "record dropped at end of input")
            .with_help(INPUTS_HELP),
        );
    }

    debug!(
        input_lines = lines.len(),
        records = normalized.len();
        "Normalized JIT log"
    );

    normalized
}

/// The first line of a JIT log record.
#[derive(Debug)]
struct Header<'s> {
    id: &'s str,
    node_type: &'s str,
    outputs: Vec<&'s str>,
    metadata: Vec<&'s str>,
}

impl Header<'_> {
    /// Build `<id> <type> === <inputs> [[ <outputs> ]] <metadata>`.
    fn merge(&self, inputs: &[&str]) -> String {
        let mut words =
            Vec::with_capacity(5 + inputs.len() + self.outputs.len() + self.metadata.len());
        words.extend([self.id, self.node_type, SEPARATOR]);
        words.extend_from_slice(inputs);
        words.push(OUTPUTS_OPEN);
        words.extend_from_slice(&self.outputs);
        words.push(OUTPUTS_CLOSE);
        words.extend_from_slice(&self.metadata);
        words.join(" ")
    }
}

/// Read `#<id> <type> @(...) -> [ <out> (<Type>) ... ]; <trailing>`.
///
/// Everything between the type and `->`, plus everything after `];`, is
/// kept as metadata.
fn parse_header<'s>(tokens: &[&'s str]) -> Result<Header<'s>, ErrorCode> {
    let id = tokens[0].strip_prefix(JIT_ID_PREFIX).unwrap_or(tokens[0]);
    let node_type = tokens[1];
    let mut input: Tokens<'_, 's> = &tokens[2..];

    let leading =
        take_until(|token| token == JIT_ARROW)(&mut input).map_err(|_| ErrorCode::E001)?;
    marker(JIT_ARROW)(&mut input).map_err(|_| ErrorCode::E001)?;

    // The token after `->` opens the output list and is skipped unread.
    any::<_, ErrMode<ContextError>>
        .parse_next(&mut input)
        .map_err(|_| ErrorCode::E002)?;
    let outputs = annotated_ids(JIT_OUTPUTS_CLOSE)(&mut input).map_err(|_| ErrorCode::E002)?;
    marker(JIT_OUTPUTS_CLOSE)(&mut input).map_err(|_| ErrorCode::E002)?;

    let mut metadata = leading.to_vec();
    metadata.extend_from_slice(input);

    Ok(Header {
        id,
        node_type,
        outputs,
        metadata,
    })
}

/// Read `L[ <in> (<Type>) ... ]`. Tokens after the closing `]` are ignored.
fn parse_inputs<'s>(tokens: &[&'s str]) -> Result<Vec<&'s str>, ErrorCode> {
    let mut input: Tokens<'_, 's> = tokens;

    marker(JIT_INPUTS_OPEN)(&mut input).map_err(|_| ErrorCode::E004)?;
    let inputs = annotated_ids(JIT_INPUTS_CLOSE)(&mut input).map_err(|_| ErrorCode::E004)?;
    marker(JIT_INPUTS_CLOSE)(&mut input).map_err(|_| ErrorCode::E004)?;

    Ok(inputs)
}

/// Node ids, each optionally followed by a `(Type)` token, up to `close`.
fn annotated_ids<'t, 's>(
    close: &'static str,
) -> impl FnMut(&mut Tokens<'t, 's>) -> IResult<Vec<&'s str>>
where
    's: 't,
{
    move |input: &mut Tokens<'t, 's>| {
        repeat(
            0..,
            terminated(
                token_where(move |token| token != close),
                opt(token_where(|token| token.starts_with(TYPE_ANNOTATION_PREFIX))),
            ),
        )
        .parse_next(input)
    }
}

fn malformed(code: ErrorCode, line: &SourceLine<'_>, help: &str) -> Diagnostic {
    Diagnostic::warning(format!("skipping JIT log record: {}", code.description()))
        .with_code(code)
        .with_label(line.span(), "line skipped")
        .with_help(help)
}
