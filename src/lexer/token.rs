use std::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
	pub kind:    TokenKind,
	pub literal: String,
}

impl Token {
	pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self { Self { kind, literal: literal.into() } }
}

/// The different kinds of tokens in CardBoard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
	/// A byte the lexer does not recognize. Not fatal by itself; it only
	/// becomes an error once the parser finds no rule for it.
	Unknown,
	/// End of input, yielded repeatedly once the source is exhausted.
	Eof,
	/// Left parenthesis `(`.
	LParen,
	/// Right parenthesis `)`.
	RParen,
	/// Left brace `{`.
	LBrace,
	/// Right brace `}`.
	RBrace,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Assignment `=`.
	Assign,
	/// Integer literal, e.g. `123`. Numeric parsing happens in the parser.
	Int,
	/// Identifier, e.g. a binding or parameter name.
	Identifier,
	/// Function literal keyword `box`.
	Box,
	/// Binding keyword `put`.
	Put,
	/// Early-return keyword `unbox`.
	Unbox,
	/// Reserved keyword `show`, not yet part of the grammar.
	Show,
}

impl TokenKind {
	/// Classify a scanned letter run as a keyword or a plain identifier.
	pub fn keyword_or_identifier(text: &str) -> Self {
		match text {
			"box" => TokenKind::Box,
			"put" => TokenKind::Put,
			"unbox" => TokenKind::Unbox,
			"show" => TokenKind::Show,
			_ => TokenKind::Identifier,
		}
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			TokenKind::Unknown => "UNKNOWN",
			TokenKind::Eof => "EOF",
			TokenKind::LParen => "(",
			TokenKind::RParen => ")",
			TokenKind::LBrace => "{",
			TokenKind::RBrace => "}",
			TokenKind::Comma => ",",
			TokenKind::Semicolon => ";",
			TokenKind::Plus => "+",
			TokenKind::Minus => "-",
			TokenKind::Assign => "=",
			TokenKind::Int => "INT",
			TokenKind::Identifier => "IDENTIFIER",
			TokenKind::Box => "box",
			TokenKind::Put => "put",
			TokenKind::Unbox => "unbox",
			TokenKind::Show => "show",
		};
		write!(f, "{name}")
	}
}
