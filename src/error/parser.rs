use crate::lexer::TokenKind;

/// Errors recorded while parsing. The parser aggregates these and keeps
/// going, so one pass can surface several independent mistakes.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub(crate) enum ParseError {
	/// A structural mismatch, e.g. a `put` missing its identifier or `=`.
	#[error("expected token <{expected}>, got <{got}>")]
	ExpectedToken { expected: TokenKind, got: TokenKind },
	/// The expression grammar has no rule starting with this token.
	#[error("no prefix rule for <{0}>")]
	NoPrefixRule(TokenKind),
	/// An integer literal that does not fit a 64-bit signed integer.
	#[error("could not parse integer literal `{0}`")]
	MalformedInteger(String),
	/// A grouped expression missing its closing parenthesis.
	#[error("expected `)` to close the expression, got <{0}>")]
	UnterminatedParenthesis(TokenKind),
}
