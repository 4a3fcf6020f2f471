//! Pratt parser for CardBoard.
//!
//! The parser keeps two tokens of lookahead (`cur_token`, `peek_token`),
//! advanced in lockstep over the pull-based lexer. Statements dispatch on
//! the current token kind: `put` and `unbox` have dedicated rules, anything
//! else is an expression statement.
//!
//! Expression parsing is operator-precedence parsing: each token kind that
//! can start an expression has a prefix rule, each token kind that can
//! continue one has an infix rule and a binding power on the
//! [`Precedence`] ladder. `+` and `-` bind at `Sum`, left-associative; a
//! `(` after an expression binds at `Call`, making application a postfix
//! operator. Both rule sets are closed matches over [`TokenKind`], so an
//! unhandled kind is a compile error here and a parse error at runtime
//! ("no prefix rule").
//!
//! A malformed statement never aborts the parse: the offending rule records
//! an error, the parser resynchronizes at the next semicolon and moves on,
//! so one pass surfaces every independent mistake.

use std::rc::Rc;

use TokenKind::*;

use crate::{ast::{BlockStatement, Expression, Operator, Program, Statement}, error::parser::ParseError, lexer::{Lexer, Token, TokenKind}};

/// Binding powers of the expression grammar, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
	Lowest,
	/// `+` and `-`.
	Sum,
	/// Unary `+` and `-`.
	Prefix,
	/// `callee(arguments)`.
	Call,
}

impl Precedence {
	/// The binding power of an infix-capable token kind.
	fn of(kind: TokenKind) -> Self {
		match kind {
			Plus | Minus => Precedence::Sum,
			LParen => Precedence::Call,
			_ => Precedence::Lowest,
		}
	}
}

/// A parser over the token stream of one source unit.
pub(crate) struct Parser<'a> {
	lexer:      Lexer<'a>,
	cur_token:  Token,
	peek_token: Token,
	errors:     Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(lexer: Lexer<'a>) -> Self {
		let mut parser =
			Self { lexer, cur_token: Token::new(Eof, ""), peek_token: Token::new(Eof, ""), errors: Vec::new() };
		// Load both lookahead tokens.
		parser.next_token();
		parser.next_token();
		parser
	}

	/// Parse a whole program. Always returns a `Program`, even when errors
	/// were recorded; callers must check [`Parser::errors`] separately.
	pub fn parse_program(&mut self) -> Program {
		let mut program = Program::default();
		while self.cur_token.kind != Eof {
			if let Some(statement) = self.parse_statement() {
				program.statements.push(statement);
			}
			self.next_token();
		}
		program
	}

	/// The parse errors recorded so far, in source order.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	fn next_token(&mut self) { self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token()); }

	fn parse_statement(&mut self) -> Option<Statement> {
		match self.cur_token.kind {
			Put => self.parse_put_statement(),
			Unbox => self.parse_unbox_statement(),
			_ => self.parse_expression_statement(),
		}
	}

	/// `put IDENTIFIER = expression ;`
	fn parse_put_statement(&mut self) -> Option<Statement> {
		if !self.expect_peek(Identifier) {
			self.skip_statement();
			return None;
		}
		let name = self.cur_token.literal.clone();

		if !self.expect_peek(Assign) {
			self.skip_statement();
			return None;
		}

		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;

		if !self.expect_peek(Semicolon) {
			return None;
		}
		Some(Statement::Put { name, value })
	}

	/// `unbox expression ;`
	fn parse_unbox_statement(&mut self) -> Option<Statement> {
		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;

		if !self.expect_peek(Semicolon) {
			return None;
		}
		Some(Statement::Unbox(value))
	}

	/// An expression followed by an optional trailing semicolon.
	fn parse_expression_statement(&mut self) -> Option<Statement> {
		let expression = self.parse_expression(Precedence::Lowest)?;
		if self.peek_token.kind == Semicolon {
			self.next_token();
		}
		Some(Statement::Expression(expression))
	}

	fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
		let mut left = self.parse_prefix()?;
		while self.peek_token.kind != Semicolon && precedence < Precedence::of(self.peek_token.kind) {
			self.next_token();
			left = self.parse_infix(left)?;
		}
		Some(left)
	}

	/// Dispatch to the prefix rule for the current token kind.
	fn parse_prefix(&mut self) -> Option<Expression> {
		match self.cur_token.kind {
			Identifier => Some(Expression::Identifier(self.cur_token.literal.clone())),
			Int => self.parse_integer_literal(),
			Plus | Minus => self.parse_prefix_expression(),
			LParen => self.parse_grouped_expression(),
			TokenKind::Box => self.parse_box_expression(),
			kind => {
				self.report(ParseError::NoPrefixRule(kind));
				None
			}
		}
	}

	/// Dispatch to the infix rule for the current token kind. Only kinds
	/// with a binding power above `Lowest` ever reach this.
	fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
		match self.cur_token.kind {
			Plus | Minus => self.parse_infix_expression(left),
			LParen => self.parse_call_expression(left),
			_ => Some(left),
		}
	}

	fn parse_integer_literal(&mut self) -> Option<Expression> {
		match self.cur_token.literal.parse() {
			Ok(value) => Some(Expression::IntegerLiteral(value)),
			Err(_) => {
				self.report(ParseError::MalformedInteger(self.cur_token.literal.clone()));
				None
			}
		}
	}

	fn parse_prefix_expression(&mut self) -> Option<Expression> {
		let operator = self.cur_operator();
		self.next_token();
		let right = self.parse_expression(Precedence::Prefix)?;
		Some(Expression::Prefix { operator, right: right.into() })
	}

	fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
		let operator = self.cur_operator();
		let precedence = Precedence::of(self.cur_token.kind);
		self.next_token();
		let right = self.parse_expression(precedence)?;
		Some(Expression::Infix { left: left.into(), operator, right: right.into() })
	}

	/// `( expression )`
	fn parse_grouped_expression(&mut self) -> Option<Expression> {
		self.next_token();
		let expression = self.parse_expression(Precedence::Lowest)?;

		if self.peek_token.kind != RParen {
			self.report(ParseError::UnterminatedParenthesis(self.peek_token.kind));
			return None;
		}
		self.next_token();
		Some(expression)
	}

	/// `box ( parameters ) { block }`
	fn parse_box_expression(&mut self) -> Option<Expression> {
		if !self.expect_peek(LParen) {
			return None;
		}
		let parameters = self.parse_parameters()?;

		if !self.expect_peek(LBrace) {
			return None;
		}
		let body = self.parse_block_statement();

		if self.cur_token.kind != RBrace {
			self.report(ParseError::ExpectedToken { expected: RBrace, got: self.cur_token.kind });
			return None;
		}
		Some(Expression::Box { parameters: Rc::new(parameters), body: Rc::new(body) })
	}

	/// A possibly empty, comma-separated parameter-name list.
	fn parse_parameters(&mut self) -> Option<Vec<String>> {
		let mut parameters = Vec::new();

		if self.peek_token.kind == RParen {
			self.next_token();
			return Some(parameters);
		}

		if !self.expect_peek(Identifier) {
			return None;
		}
		parameters.push(self.cur_token.literal.clone());

		while self.peek_token.kind == Comma {
			self.next_token();
			if !self.expect_peek(Identifier) {
				return None;
			}
			parameters.push(self.cur_token.literal.clone());
		}

		if !self.expect_peek(RParen) {
			return None;
		}
		Some(parameters)
	}

	/// Statements up to the closing brace or the end of input.
	fn parse_block_statement(&mut self) -> BlockStatement {
		let mut statements = Vec::new();
		self.next_token();
		while self.cur_token.kind != RBrace && self.cur_token.kind != Eof {
			if let Some(statement) = self.parse_statement() {
				statements.push(statement);
			}
			self.next_token();
		}
		BlockStatement { statements }
	}

	fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
		let arguments = self.parse_call_arguments()?;
		Some(Expression::Call { function: function.into(), arguments })
	}

	/// A possibly empty, comma-separated argument list.
	fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
		let mut arguments = Vec::new();

		if self.peek_token.kind == RParen {
			self.next_token();
			return Some(arguments);
		}

		self.next_token();
		arguments.push(self.parse_expression(Precedence::Lowest)?);

		while self.peek_token.kind == Comma {
			self.next_token();
			self.next_token();
			arguments.push(self.parse_expression(Precedence::Lowest)?);
		}

		if !self.expect_peek(RParen) {
			return None;
		}
		Some(arguments)
	}

	/// The operator of the current token. Callers only reach this from the
	/// `Plus`/`Minus` rule arms.
	fn cur_operator(&self) -> Operator {
		if self.cur_token.kind == Plus { Operator::Plus } else { Operator::Minus }
	}

	/// Advance if the next token matches, otherwise record a mismatch error.
	fn expect_peek(&mut self, expected: TokenKind) -> bool {
		if self.peek_token.kind == expected {
			self.next_token();
			true
		} else {
			self.report(ParseError::ExpectedToken { expected, got: self.peek_token.kind });
			false
		}
	}

	/// Resynchronize after a malformed statement: skip up to the next
	/// semicolon or the end of input so the rest of the program still parses.
	fn skip_statement(&mut self) {
		while self.cur_token.kind != Semicolon && self.cur_token.kind != Eof {
			self.next_token();
		}
	}

	fn report(&mut self, error: ParseError) { self.errors.push(error); }
}
