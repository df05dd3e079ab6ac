// ── Command ───────────────────────────────────────────────────────────────

/// One `&`-separated command: a keyword plus raw positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'s> {
    pub keyword: &'s str,
    pub args: Vec<&'s str>,
    /// 1-based source line.
    pub line: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Splits a script into commands.
///
/// Lines are separated by `\n` (a trailing `\r` is dropped), commands within
/// a line by `&`, and words within a command by any whitespace. Blank lines
/// and empty commands are skipped.
pub struct Lexer<'s> {
    src: &'s str,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src }
    }

    pub fn commands(&self) -> impl Iterator<Item = Command<'s>> + use<'s> {
        let src = self.src;
        src.lines().enumerate().flat_map(|(i, line)| {
            line.split('&').filter_map(move |token| {
                let mut words = token.split_whitespace();
                let keyword = words.next()?;
                Some(Command { keyword, args: words.collect(), line: i + 1 })
            })
        })
    }

    pub fn tokenize(self) -> Vec<Command<'s>> {
        self.commands().collect()
    }
}
