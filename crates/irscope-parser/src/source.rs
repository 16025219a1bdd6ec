//! Dump text split into lines with their positions.

use std::borrow::Cow;

use crate::span::Span;

/// One line of dump text.
///
/// Lines produced by JIT log normalization own their text and keep the
/// span of the source lines they were merged from.
#[derive(Debug, Clone)]
pub(crate) struct SourceLine<'src> {
    text: Cow<'src, str>,
    number: usize,
    span: Span,
}

impl<'src> SourceLine<'src> {
    /// A line rebuilt from other lines. `number` is the 1-based line of the
    /// first contributing source line.
    pub(crate) fn synthetic(text: String, number: usize, span: Span) -> Self {
        Self {
            text: Cow::Owned(text),
            number,
            span,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn span(&self) -> Span {
        self.span
    }
}

/// Split source text on `\n`.
///
/// A trailing newline yields a final empty line; carriage returns are left
/// in place and disappear during tokenization.
pub(crate) fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    with_offsets(source.split('\n'))
}

/// Wrap lines that were already split, as if they had been joined by `\n`.
pub(crate) fn from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<SourceLine<'_>> {
    with_offsets(lines.iter().map(|line| line.as_ref()))
}

fn with_offsets<'src>(lines: impl Iterator<Item = &'src str>) -> Vec<SourceLine<'src>> {
    let mut offset = 0;
    lines
        .enumerate()
        .map(|(index, text)| {
            let span = Span::new(offset..offset + text.len());
            offset += text.len() + 1;
            SourceLine {
                text: Cow::Borrowed(text),
                number: index + 1,
                span,
            }
        })
        .collect()
}
