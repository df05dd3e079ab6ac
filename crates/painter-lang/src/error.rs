use std::num::ParseFloatError;

use thiserror::Error;

/// A failure to parse one command script.
///
/// Any error aborts the whole call: nothing from it is flushed or pooled.
/// `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: unknown command {keyword:?}")]
    UnknownCommand { keyword: String, line: usize },

    #[error("line {line}: {keyword} expects {expected} argument(s), got {got}")]
    ArgumentCountMismatch {
        keyword: String,
        expected: usize,
        got: usize,
        line: usize,
    },

    #[error("line {line}: invalid numeric argument {value:?} for {keyword}")]
    InvalidNumericArgument {
        keyword: String,
        value: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: {keyword} does not take inline arguments")]
    UnsupportedInlineArguments { keyword: String, line: usize },
}

impl ParseError {
    /// 1-based line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownCommand { line, .. }
            | ParseError::ArgumentCountMismatch { line, .. }
            | ParseError::InvalidNumericArgument { line, .. }
            | ParseError::UnsupportedInlineArguments { line, .. } => *line,
        }
    }
}
