//! Tokenizer and batching parser for the painter command language.
//!
//! A script is a sequence of lines; each line holds one or more
//! `&`-separated commands; each command is a keyword followed by
//! whitespace-separated numeric arguments.
//!
//! | Keyword | Args | Operation |
//! |---------|------|-----------|
//! | `white` / `green` | 0 | background fill |
//! | `figure` | `x y` | cross-shaped marker |
//! | `brect` | `x1 y1 x2 y2` | bounding rectangle |
//! | `move` | `x y` | relative move of current figures |
//! | `update` | 0 | batch boundary |
//! | `reset` | 0 | clear the scene, flushed immediately |
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Command` |
//! | [`parser`] | `Parser` (with its carry-over pool) |
//!
//! # Quick start
//!
//! ```rust
//! use painter_lang::Parser;
//!
//! let mut parser = Parser::new();
//! assert!(parser.parse("figure 0.1 0.1").unwrap().is_empty());
//! assert_eq!(parser.parse("figure 0.2 0.2\nupdate").unwrap().len(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ParseError;
pub use parser::Parser;
