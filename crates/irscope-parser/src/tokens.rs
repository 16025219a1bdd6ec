//! Token vocabulary shared by both dump dialects.
//!
//! Dump lines are split on runs of whitespace and the resulting words are
//! matched with small [`winnow`] parsers over the token slice.

use winnow::{
    Parser as _,
    error::{ContextError, ErrMode},
    token::{any, take_till},
};

/// Separates the node type from its inputs in node dump lines.
pub(crate) const SEPARATOR: &str = "===";
/// Marks the focus node, placed between the id and the type.
pub(crate) const FOCUS_MARKER: &str = ">";
pub(crate) const OUTPUTS_OPEN: &str = "[[";
pub(crate) const OUTPUTS_CLOSE: &str = "]]";
pub(crate) const OUTPUTS_EMPTY: &str = "[[]]";
pub(crate) const SPECIAL_OPEN: &str = "(";
pub(crate) const SPECIAL_CLOSE: &str = ")";
pub(crate) const SPECIAL_EMPTY: &str = "()";

pub(crate) const JIT_ID_PREFIX: &str = "#";
pub(crate) const JIT_POSITION_PREFIX: &str = "@(";
pub(crate) const JIT_ARROW: &str = "->";
pub(crate) const JIT_OUTPUTS_CLOSE: &str = "];";
pub(crate) const JIT_INPUTS_OPEN: &str = "L[";
pub(crate) const JIT_INPUTS_CLOSE: &str = "]";
pub(crate) const TYPE_ANNOTATION_PREFIX: &str = "(";

/// Remaining tokens of a line.
pub(crate) type Tokens<'t, 's> = &'t [&'s str];

pub(crate) type IResult<O> = Result<O, ErrMode<ContextError>>;

/// Split a line into whitespace separated tokens.
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Returns `true` for the first line of a two-line JIT log record:
/// `#<id> <type> @(...) ...`.
pub(crate) fn is_jit_header(tokens: &[&str]) -> bool {
    tokens.len() > 2
        && tokens[0].starts_with(JIT_ID_PREFIX)
        && tokens[2].starts_with(JIT_POSITION_PREFIX)
}

/// Match exactly one token equal to `expected`.
pub(crate) fn marker<'t, 's>(
    expected: &'static str,
) -> impl FnMut(&mut Tokens<'t, 's>) -> IResult<&'s str>
where
    's: 't,
{
    move |input: &mut Tokens<'t, 's>| {
        any.verify(|token: &str| token == expected)
            .parse_next(input)
    }
}

/// Match one token satisfying `accept`.
pub(crate) fn token_where<'t, 's, F>(accept: F) -> impl FnMut(&mut Tokens<'t, 's>) -> IResult<&'s str>
where
    's: 't,
    F: Fn(&str) -> bool,
{
    move |input: &mut Tokens<'t, 's>| {
        any.verify(|token: &str| accept(token))
            .parse_next(input)
    }
}

/// Take tokens up to, not including, the first one satisfying `stop`.
///
/// Never fails; if no token matches, the whole remainder is taken.
pub(crate) fn take_until<'t, 's, F>(
    stop: F,
) -> impl FnMut(&mut Tokens<'t, 's>) -> IResult<Tokens<'t, 's>>
where
    's: 't,
    F: Fn(&str) -> bool,
{
    move |input: &mut Tokens<'t, 's>| take_till(0.., |token: &'s str| stop(token)).parse_next(input)
}
