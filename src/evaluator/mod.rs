//! Tree-walking evaluator for CardBoard.
//!
//! One rule per AST node kind, recursing with an explicit environment
//! parameter; the only state machine is the implicit call stack, bounded by
//! the syntactic nesting depth of the program.
//!
//! Two things propagate upward through the recursion. Errors travel as the
//! `Err` arm and `?` aborts everything pending, first error wins. Early
//! returns travel as the [`Object::Unbox`] carrier: blocks hand it up
//! unopened, and it is unwrapped exactly once at the nearest enclosing call
//! boundary (or at the program boundary for a top-level `unbox`).

use crate::{ast::{BlockStatement, Expression, Operator, Program, Statement}, environment::Environment, error::evaluator::EvalError, object::{BoxValue, Object}, utils::RcCell};

/// Evaluate a whole program against the given root environment.
///
/// Statements run strictly in order; a top-level `unbox` stops execution and
/// yields its value directly. Otherwise the value of the last statement is
/// the program's result, `Null` for an empty program.
pub(crate) fn eval_program(program: &Program, env: &RcCell<Environment>) -> Result<Object, EvalError> {
	let mut result = Object::Null;
	for statement in &program.statements {
		result = eval_statement(statement, env)?;
		if let Object::Unbox(value) = result {
			return Ok(*value);
		}
	}
	Ok(result)
}

/// Evaluate a block. Unlike [`eval_program`], an `unbox` carrier is returned
/// unopened; the nearest enclosing call boundary unwraps it.
fn eval_block(block: &BlockStatement, env: &RcCell<Environment>) -> Result<Object, EvalError> {
	let mut result = Object::Null;
	for statement in &block.statements {
		result = eval_statement(statement, env)?;
		if matches!(result, Object::Unbox(_)) {
			return Ok(result);
		}
	}
	Ok(result)
}

fn eval_statement(statement: &Statement, env: &RcCell<Environment>) -> Result<Object, EvalError> {
	match statement {
		Statement::Put { name, value } => {
			let value = eval_expression(value, env)?;
			env.borrow_mut().define(name.clone(), value.clone());
			Ok(value)
		}
		Statement::Unbox(value) => {
			let value = eval_expression(value, env)?;
			Ok(Object::Unbox(value.into()))
		}
		Statement::Expression(expression) => eval_expression(expression, env),
	}
}

fn eval_expression(expression: &Expression, env: &RcCell<Environment>) -> Result<Object, EvalError> {
	match expression {
		Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
		Expression::Identifier(name) => {
			env.borrow().get(name).ok_or_else(|| EvalError::UnknownIdentifier(name.clone()))
		}
		Expression::Prefix { operator, right } => eval_prefix(*operator, right, env),
		Expression::Infix { left, operator, right } => eval_infix(left, *operator, right, env),
		// The box captures the current environment by shared reference, not
		// by copy; later bindings in this frame are visible to the closure.
		Expression::Box { parameters, body } => Ok(Object::Box(BoxValue {
			parameters: parameters.clone(),
			body:       body.clone(),
			env:        env.clone(),
		})),
		Expression::Call { function, arguments } => eval_call(function, arguments, env),
	}
}

/// Unary `+` is identity, unary `-` negates. Integer operands only.
fn eval_prefix(operator: Operator, right: &Expression, env: &RcCell<Environment>) -> Result<Object, EvalError> {
	let operand = eval_expression(right, env)?;
	let Object::Integer(value) = operand else {
		return Err(EvalError::PrefixTypeError { operator: operator.symbol(), kind: operand.kind() });
	};
	Ok(Object::Integer(match operator {
		Operator::Plus => value,
		Operator::Minus => value.wrapping_neg(),
	}))
}

/// Integer addition and subtraction with 64-bit wraparound semantics.
fn eval_infix(
	left: &Expression,
	operator: Operator,
	right: &Expression,
	env: &RcCell<Environment>,
) -> Result<Object, EvalError> {
	let left = eval_expression(left, env)?;
	let right = eval_expression(right, env)?;
	let (Object::Integer(left), Object::Integer(right)) = (&left, &right) else {
		return Err(EvalError::InfixTypeMismatch {
			left:     left.kind(),
			operator: operator.symbol(),
			right:    right.kind(),
		});
	};
	Ok(Object::Integer(match operator {
		Operator::Plus => left.wrapping_add(*right),
		Operator::Minus => left.wrapping_sub(*right),
	}))
}

fn eval_call(
	function: &Expression,
	arguments: &[Expression],
	env: &RcCell<Environment>,
) -> Result<Object, EvalError> {
	let callee = eval_expression(function, env)?;
	let Object::Box(callee) = callee else {
		return Err(EvalError::NotCallable(callee.kind()));
	};

	let mut evaluated = Vec::with_capacity(arguments.len());
	for argument in arguments {
		evaluated.push(eval_expression(argument, env)?);
	}
	apply_box(&callee, evaluated)
}

/// Call a box: a fresh frame is chained to the *captured* environment, not
/// the caller's. Arity is not checked; missing parameters stay unbound and
/// fail on first lookup inside the body, extra arguments are dropped.
fn apply_box(callee: &BoxValue, arguments: Vec<Object>) -> Result<Object, EvalError> {
	let frame = Environment::new_enclosed(callee.env.clone());
	for (parameter, argument) in callee.parameters.iter().zip(arguments) {
		frame.borrow_mut().define(parameter.clone(), argument);
	}

	let result = eval_block(&callee.body, &frame)?;
	if let Object::Unbox(value) = result {
		return Ok(*value);
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::Lexer, parser::Parser};

	fn eval(input: &str) -> Result<Object, EvalError> {
		let mut parser = Parser::new(Lexer::new(input));
		let program = parser.parse_program();
		assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());
		eval_program(&program, &Environment::new())
	}

	fn eval_integer(input: &str, expected: i64) {
		match eval(input) {
			Ok(Object::Integer(value)) => assert_eq!(value, expected, "for input {input:?}"),
			other => panic!("expected Integer({expected}) for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn integer_literals() {
		eval_integer("5", 5);
		eval_integer("10;", 10);
	}

	#[test]
	fn arithmetic() {
		eval_integer("+5;", 5);
		eval_integer("-5;", -5);
		eval_integer("-50 + 100 + -50;", 0);
		eval_integer("20 - 5;", 15);
		eval_integer("-15 - 100;", -115);
		eval_integer("5 + (5 - 10);", 0);
	}

	#[test]
	fn arithmetic_wraps_at_64_bits() {
		eval_integer("9223372036854775807 + 1;", i64::MIN);
		eval_integer("-9223372036854775807 - 2;", i64::MAX);
	}

	#[test]
	fn bindings() {
		eval_integer("put a = 5; a;", 5);
		eval_integer("put a = 5; put b = a; put c = a + b + 5; c;", 15);
		// A `put` statement itself yields the bound value.
		eval_integer("put a = 7;", 7);
	}

	#[test]
	fn top_level_unbox_stops_the_program() {
		eval_integer("unbox 10 + 2; 100;", 12);
	}

	#[test]
	fn function_application() {
		eval_integer("put identity = box(x) { x; }; identity(5);", 5);
		eval_integer("put identity = box(x) { unbox x; }; identity(5);", 5);
		eval_integer("put add = box(a, b) { a + b; }; add(3, add(4, 5));", 12);
	}

	#[test]
	fn unbox_skips_remaining_body_statements() {
		eval_integer("put f = box() { unbox 1; 2; }; f();", 1);
	}

	#[test]
	fn closures_capture_the_defining_environment() {
		eval_integer(
			"put newAdder = box(x) { unbox box(y) { x + y; }; };
			 put addTwo = newAdder(2);
			 addTwo(2);",
			4,
		);
	}

	#[test]
	fn call_frames_shadow_without_leaking() {
		eval_integer("put x = 5; put f = box(x) { x; }; f(1) + x;", 6);
	}

	#[test]
	fn functions_are_first_class_values() {
		eval_integer(
			"put add = box(a, b) { a + b; };
			 put applyFunc = box(a, b, func) { func(a, b); };
			 applyFunc(2, 2, add);",
			4,
		);
	}

	#[test]
	fn arity_is_not_validated() {
		// Extra arguments are dropped.
		eval_integer("put f = box(a) { a; }; f(1, 2, 3);", 1);
		// A missing parameter fails on first lookup inside the body.
		assert_eq!(
			eval("put f = box(a, b) { b; }; f(1);").unwrap_err(),
			EvalError::UnknownIdentifier("b".to_string())
		);
	}

	#[test]
	fn unknown_identifier_is_an_error() {
		assert_eq!(eval("foobar;").unwrap_err(), EvalError::UnknownIdentifier("foobar".to_string()));
	}

	#[test]
	fn prefix_operand_must_be_integer() {
		assert_eq!(
			eval("put f = box() { 1; }; -f;").unwrap_err(),
			EvalError::PrefixTypeError { operator: "-", kind: "Box" }
		);
	}

	#[test]
	fn infix_type_mismatch_names_both_kinds() {
		assert_eq!(
			eval("put f = box(x) { x; }; f + 1;").unwrap_err(),
			EvalError::InfixTypeMismatch { left: "Box", operator: "+", right: "Integer" }
		);
		assert_eq!(
			eval("1 - box() { 2; };").unwrap_err(),
			EvalError::InfixTypeMismatch { left: "Integer", operator: "-", right: "Box" }
		);
	}

	#[test]
	fn calling_a_non_function_is_an_error() {
		assert_eq!(eval("5(1);").unwrap_err(), EvalError::NotCallable("Integer"));
	}

	#[test]
	fn first_argument_error_wins() {
		assert_eq!(
			eval("put f = box(a, b) { a; }; f(missing, alsoMissing);").unwrap_err(),
			EvalError::UnknownIdentifier("missing".to_string())
		);
	}

	#[test]
	fn empty_program_is_null() {
		assert!(matches!(eval(""), Ok(Object::Null)));
	}

	#[test]
	fn reevaluation_against_fresh_environments_is_idempotent() {
		let mut parser = Parser::new(Lexer::new("put a = 5; put f = box(x) { a + x; }; f(2);"));
		let program = parser.parse_program();
		assert!(parser.errors().is_empty());

		let first = eval_program(&program, &Environment::new());
		let second = eval_program(&program, &Environment::new());
		assert!(matches!(first, Ok(Object::Integer(7))));
		assert!(matches!(second, Ok(Object::Integer(7))));
	}
}
