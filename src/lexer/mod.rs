//! Lexical scanning for CardBoard source text.
//!
//! The lexer is pull-based: the parser asks for one token at a time via
//! [`Lexer::next_token`] and the lexer advances through the source in a
//! single forward pass, skipping whitespace before each token. A run of
//! letters is scanned greedily and classified as a keyword or identifier by
//! table lookup (maximal munch); a run of digits becomes an integer-literal
//! token whose numeric value is parsed later by the parser. Any character
//! with no meaning in CardBoard yields an `Unknown` token rather than
//! stopping the scan.

mod token;

use std::{iter::Peekable, str::CharIndices};

pub(crate) use token::*;

use TokenKind::*;

/// A lexer over raw CardBoard source text.
pub(crate) struct Lexer<'a> {
	/// User input source code.
	source: &'a str,
	/// User input source code iterator.
	iter:   Peekable<CharIndices<'a>>,
	/// Byte offset one past the last consumed character.
	cursor: usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self { source, iter: source.char_indices().peekable(), cursor: 0 }
	}

	/// Scan the next token. Yields `Eof` repeatedly once input is exhausted.
	pub fn next_token(&mut self) -> Token {
		self.skip_whitespace();

		let Some(&(start, c)) = self.iter.peek() else {
			return Token::new(Eof, "");
		};
		self.advance();

		let kind = match c {
			'(' => LParen,
			')' => RParen,
			'{' => LBrace,
			'}' => RBrace,
			',' => Comma,
			';' => Semicolon,
			'+' => Plus,
			'-' => Minus,
			'=' => Assign,
			c if c.is_ascii_digit() => {
				self.eat_while(|c| c.is_ascii_digit());
				Int
			}
			c if c.is_ascii_alphabetic() => {
				self.eat_while(|c| c.is_ascii_alphabetic());
				TokenKind::keyword_or_identifier(&self.source[start..self.cursor])
			}
			_ => Unknown,
		};

		Token::new(kind, &self.source[start..self.cursor])
	}

	/// Advance to the next character.
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character.
	fn peek(&mut self) -> Option<char> { self.iter.peek().map(|&(_, c)| c) }

	/// Consume characters as long as the predicate holds.
	fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
		while self.peek().is_some_and(&predicate) {
			self.advance();
		}
	}

	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|c| matches!(c, ' ' | '\t' | '\r' | '\n')) {
			self.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
		let mut lexer = Lexer::new(input);
		for &(kind, literal) in expected {
			assert_eq!(lexer.next_token(), Token::new(kind, literal));
		}
		assert_eq!(lexer.next_token(), Token::new(Eof, ""));
	}

	#[test]
	fn scan_delimiters_and_operators() {
		assert_tokens("=+{}-()", &[
			(Assign, "="),
			(Plus, "+"),
			(LBrace, "{"),
			(RBrace, "}"),
			(Minus, "-"),
			(LParen, "("),
			(RParen, ")"),
		]);
	}

	#[test]
	fn scan_box_definition() {
		let input = "
		box add(a, b){
			put y = a + b + 5;
			unbox y;
		}
		";
		assert_tokens(input, &[
			(Box, "box"),
			(Identifier, "add"),
			(LParen, "("),
			(Identifier, "a"),
			(Comma, ","),
			(Identifier, "b"),
			(RParen, ")"),
			(LBrace, "{"),
			(Put, "put"),
			(Identifier, "y"),
			(Assign, "="),
			(Identifier, "a"),
			(Plus, "+"),
			(Identifier, "b"),
			(Plus, "+"),
			(Int, "5"),
			(Semicolon, ";"),
			(Unbox, "unbox"),
			(Identifier, "y"),
			(Semicolon, ";"),
			(RBrace, "}"),
		]);
	}

	#[test]
	fn scan_keywords() {
		assert_tokens("box put unbox show boxes", &[
			(Box, "box"),
			(Put, "put"),
			(Unbox, "unbox"),
			(Show, "show"),
			(Identifier, "boxes"),
		]);
	}

	#[test]
	fn scan_unknown_characters() {
		assert_tokens("1 @ 2", &[(Int, "1"), (Unknown, "@"), (Int, "2")]);
	}

	#[test]
	fn eof_repeats() {
		let mut lexer = Lexer::new("5");
		assert_eq!(lexer.next_token().kind, Int);
		assert_eq!(lexer.next_token().kind, Eof);
		assert_eq!(lexer.next_token().kind, Eof);
	}
}
