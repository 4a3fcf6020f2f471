//! Abstract syntax tree for CardBoard.
//!
//! Statements and expressions are closed enums matched exhaustively by the
//! parser and the evaluator, so adding a node kind is a compile-time-checked
//! exercise. Nodes are immutable once built and may be evaluated repeatedly;
//! a `box` literal's parameter list and body sit behind `Rc` because every
//! closure value created from the literal shares them.
//!
//! Every node renders to deterministic text via `Display`. The rendering is
//! used by diagnostics and by the REPL's echo of parsed programs.

use std::{fmt, rc::Rc};

/// A complete CardBoard program: its statements in document order.
#[derive(Debug, Default)]
pub(crate) struct Program {
	pub statements: Vec<Statement>,
}

/// A statement in CardBoard.
#[derive(Debug)]
pub(crate) enum Statement {
	/// `put name = value;` binding into the innermost frame.
	Put { name: String, value: Expression },
	/// `unbox value;` explicit early return.
	Unbox(Expression),
	/// A bare expression, with or without a trailing semicolon.
	Expression(Expression),
}

/// An expression in CardBoard.
#[derive(Debug)]
pub(crate) enum Expression {
	/// A name reference.
	Identifier(String),
	/// A signed 64-bit integer literal.
	IntegerLiteral(i64),
	/// Unary `+` or `-`.
	Prefix { operator: Operator, right: Box<Expression> },
	/// Binary `+` or `-`.
	Infix { left: Box<Expression>, operator: Operator, right: Box<Expression> },
	/// A function literal. Capture happens at evaluation time, not here.
	Box { parameters: Rc<Vec<String>>, body: Rc<BlockStatement> },
	/// Function application: `function(arguments)`.
	Call { function: Box<Expression>, arguments: Vec<Expression> },
}

/// A `{ }`-delimited sequence of statements.
#[derive(Debug)]
pub(crate) struct BlockStatement {
	pub statements: Vec<Statement>,
}

/// The two CardBoard operators, usable in prefix and infix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
	Plus,
	Minus,
}

impl Operator {
	pub fn symbol(self) -> &'static str {
		match self {
			Operator::Plus => "+",
			Operator::Minus => "-",
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.symbol()) }
}

impl fmt::Display for Program {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for statement in &self.statements {
			write!(f, "{statement}")?;
		}
		Ok(())
	}
}

impl fmt::Display for Statement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Statement::Put { name, value } => write!(f, "put {name} = {value};"),
			Statement::Unbox(value) => write!(f, "unbox {value};"),
			Statement::Expression(expression) => write!(f, "{expression}"),
		}
	}
}

impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Identifier(name) => write!(f, "{name}"),
			Expression::IntegerLiteral(value) => write!(f, "{value}"),
			Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
			Expression::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
			Expression::Box { parameters, body } => write!(f, "box({}) {body}", parameters.join(", ")),
			Expression::Call { function, arguments } => {
				let arguments = arguments.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
				write!(f, "{function}({arguments})")
			}
		}
	}
}

impl fmt::Display for BlockStatement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for statement in &self.statements {
			write!(f, "{statement}")?;
		}
		write!(f, "}}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn put_statement_renders_to_source_form() {
		let program = Program {
			statements: vec![Statement::Put {
				name:  "number".to_string(),
				value: Expression::IntegerLiteral(2002),
			}],
		};
		assert_eq!(program.to_string(), "put number = 2002;");
	}

	#[test]
	fn expressions_render_with_explicit_grouping() {
		let sum = Expression::Infix {
			left:     Box::new(Expression::IntegerLiteral(1)),
			operator: Operator::Plus,
			right:    Box::new(Expression::Prefix {
				operator: Operator::Minus,
				right:    Box::new(Expression::IntegerLiteral(2)),
			}),
		};
		assert_eq!(sum.to_string(), "(1 + (-2))");
	}

	#[test]
	fn call_renders_callee_once() {
		let call = Expression::Call {
			function:  Box::new(Expression::Identifier("add".to_string())),
			arguments: vec![Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)],
		};
		assert_eq!(call.to_string(), "add(1, 2)");
	}

	#[test]
	fn box_literal_renders_parameters_and_body() {
		let body = BlockStatement { statements: vec![Statement::Unbox(Expression::Identifier("x".to_string()))] };
		let literal = Expression::Box {
			parameters: Rc::new(vec!["x".to_string(), "y".to_string()]),
			body:       Rc::new(body),
		};
		assert_eq!(literal.to_string(), "box(x, y) {unbox x;}");
	}
}
