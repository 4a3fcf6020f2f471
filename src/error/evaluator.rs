/// Runtime errors produced by the evaluator.
///
/// The first error aborts all pending evaluation up the call chain; nothing
/// is aggregated or retried. Whether the session keeps running afterwards is
/// the caller's decision.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EvalError {
	/// A name that is bound in no frame of the environment chain
	#[error("unknown identifier: {0}")]
	UnknownIdentifier(String),
	/// A unary operator applied to a non-Integer operand
	#[error("type error: can't use <{operator}> operator with <{kind}> type")]
	PrefixTypeError { operator: &'static str, kind: &'static str },
	/// A binary operator applied to at least one non-Integer operand
	#[error("type mismatch: <{left}> {operator} <{right}>")]
	InfixTypeMismatch { left: &'static str, operator: &'static str, right: &'static str },
	/// A call whose callee is not a box
	#[error("expected function, got <{0}>")]
	NotCallable(&'static str),
}
