use painter_engine::scene::{table, Operation};

use crate::error::ParseError;
use crate::lexer::{Command, Lexer};

// ── Parser ────────────────────────────────────────────────────────────────

/// Stateful command parser.
///
/// Operations are released in batches: nothing is returned until an
/// `update` (or `reset`) boundary is seen, and operations parsed without a
/// boundary are kept in the pool for the next call. This lets a caller send
/// one shape per request and commit them together.
///
/// The pool is not synchronized. Callers sharing one parser across threads
/// must serialize `parse` (and the hand-off of its result) themselves.
#[derive(Debug, Default)]
pub struct Parser {
    pool: Vec<Operation>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations carried over from earlier calls, not yet flushed.
    pub fn pool(&self) -> &[Operation] {
        &self.pool
    }

    /// Parses `src` and returns the operations flushed by it.
    ///
    /// Batching rules:
    /// - `update`: the pool plus everything parsed so far in this call is
    ///   flushed; operations after the last `update` are pooled.
    /// - `reset`: everything parsed earlier in this call and the pool are
    ///   discarded; `reset` alone is flushed at that point.
    /// - no boundary: everything parsed is pooled and nothing is returned.
    ///
    /// On error the pool is left untouched.
    pub fn parse(&mut self, src: &str) -> Result<Vec<Operation>, ParseError> {
        let mut ops = Vec::new();
        let mut flush_to = None;
        let mut reset = false;

        for cmd in Lexer::new(src).commands() {
            match parse_command(&cmd)? {
                Operation::UpdateMarker => flush_to = Some(ops.len()),
                Operation::Reset => {
                    ops.clear();
                    ops.push(Operation::Reset);
                    flush_to = Some(ops.len());
                    reset = true;
                }
                op => ops.push(op),
            }
        }

        let Some(split) = flush_to else {
            log::trace!("no update boundary; pooling {} operation(s)", ops.len());
            self.pool.extend(ops);
            return Ok(Vec::new());
        };

        let rest = ops.split_off(split);
        let flushed = if reset {
            ops
        } else {
            let mut flushed = std::mem::take(&mut self.pool);
            flushed.extend(ops);
            flushed
        };
        self.pool = rest;

        log::debug!("flushing {} operation(s), {} pooled", flushed.len(), self.pool.len());
        Ok(flushed)
    }
}

fn parse_command(cmd: &Command<'_>) -> Result<Operation, ParseError> {
    let kind = table::lookup(cmd.keyword).ok_or_else(|| ParseError::UnknownCommand {
        keyword: cmd.keyword.to_string(),
        line: cmd.line,
    })?;

    if kind.is_control() && !cmd.args.is_empty() {
        return Err(ParseError::UnsupportedInlineArguments {
            keyword: cmd.keyword.to_string(),
            line: cmd.line,
        });
    }

    let arity_error = || ParseError::ArgumentCountMismatch {
        keyword: cmd.keyword.to_string(),
        expected: kind.arity(),
        got: cmd.args.len(),
        line: cmd.line,
    };

    if cmd.args.len() != kind.arity() {
        return Err(arity_error());
    }

    let args = cmd
        .args
        .iter()
        .map(|raw| {
            raw.parse::<f64>().map_err(|source| ParseError::InvalidNumericArgument {
                keyword: cmd.keyword.to_string(),
                value: raw.to_string(),
                line: cmd.line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    kind.build(&args).ok_or_else(arity_error)
}
