//! CardBoard is a small expression-oriented language: integer arithmetic,
//! `put` bindings, first-class `box` functions with lexical closures, and an
//! explicit `unbox` early return.
//!
//! ``` cardboard
//! put newAdder = box(x) {
//!     unbox box(y) { x + y; };
//! };
//! put addTwo = newAdder(2);
//! addTwo(2);
//! ```

//! ## Lexing
//!
//! The lexer turns raw characters into tokens in one forward pass, one token
//! per pull. Keywords (`box`, `put`, `unbox`, the reserved `show`) are
//! recognized by looking a scanned letter run up in a fixed table; anything
//! not in the table is a plain identifier. Unrecognized characters become an
//! `Unknown` token instead of stopping the scan — they only turn into an
//! error once the parser finds no rule for them.

//! ## Parsing
//!
//! The parser is a Pratt (operator-precedence) parser with two tokens of
//! lookahead. Every token kind that can start an expression has a prefix
//! rule, every one that can continue an expression has an infix rule with a
//! binding power: `+`/`-` bind at sum level, a `(` after an expression binds
//! at call level. Malformed statements record an error and resynchronize at
//! the next semicolon, so one parse collects every independent error instead
//! of stopping at the first.

//! ## Evaluation
//!
//! The evaluator walks the tree recursively with an explicit environment
//! parameter. Environments are chained frames: `put` writes the innermost
//! frame, lookup walks outward. A `box` literal captures the frame that was
//! current when it was evaluated, by shared reference; calling it chains a
//! fresh frame to that captured environment, which is what makes closures
//! independent of their call site. `unbox` wraps its value in a carrier that
//! stops the enclosing block and is unwrapped exactly once at the nearest
//! call boundary.

pub mod cli;

mod ast;
mod cardboard;
mod environment;
mod error;
mod evaluator;
mod lexer;
mod object;
mod parser;
mod utils;

pub use cardboard::CardBoard;
pub use error::{CardBoardError, evaluator::EvalError};
