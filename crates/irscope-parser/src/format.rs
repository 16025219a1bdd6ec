//! Dump dialect detection.
//!
//! Two dialects are recognized:
//!
//! ```text
//! node dump:
//! 863  RangeCheck  ===  853  862  [[ 864  867 ]] P=0.999999, C=-1.000000
//!
//! JIT log (two lines per node):
//! #217 CALLSTATICJAVA @(tuple:, bci: 5 36, line: 36) -> [ 218 (Proj) ]; # Static uncommon_trap
//!    L[ 216 (IfFalse) 137 (Phi) 212 (MergeMem) ]
//! ```

use std::fmt;

use serde::Serialize;

use crate::tokens::{self, JIT_INPUTS_OPEN, SEPARATOR};

/// The dialect of a dump.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpFormat {
    /// Two-line `#id Type @(...) -> [ ... ];` / `L[ ... ]` records.
    JitLog,
    /// One `id Type === ...` record per line.
    NodeDump,
    /// Nothing recognizable; read as a node dump.
    #[default]
    Unknown,
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DumpFormat::JitLog => "jit_log",
            DumpFormat::NodeDump => "node_dump",
            DumpFormat::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Classify the dialect of a dump from its lines.
///
/// Lines are scanned in order and the first conclusive line decides:
/// an `L[` line right after a JIT header means [`DumpFormat::JitLog`], a
/// line whose third token is `===` means [`DumpFormat::NodeDump`]. Lines
/// with fewer than three tokens are ignored.
///
/// # Examples
///
/// ```
/// # use irscope_parser::{detect, DumpFormat};
/// let jit = ["#5 AddI @(bci: 3) -> [ 6 (Return) ];", "  L[ 3 (Parm) 4 (Parm) ]"];
/// assert_eq!(detect(jit), DumpFormat::JitLog);
///
/// assert_eq!(detect(["5 AddI === 3 4 [[ 6 ]]"]), DumpFormat::NodeDump);
/// assert_eq!(detect(["hello world"]), DumpFormat::Unknown);
/// ```
pub fn detect<I, S>(lines: I) -> DumpFormat
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut possibly_jit = false;

    for line in lines {
        let tokens = tokens::tokenize(line.as_ref());
        if tokens.len() <= 2 {
            continue;
        }

        if possibly_jit && tokens[0] == JIT_INPUTS_OPEN {
            return DumpFormat::JitLog;
        } else if tokens::is_jit_header(&tokens) {
            possibly_jit = true;
        } else if tokens[2] == SEPARATOR {
            return DumpFormat::NodeDump;
        } else {
            possibly_jit = false;
        }
    }

    DumpFormat::Unknown
}
