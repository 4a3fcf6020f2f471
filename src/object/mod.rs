//! Runtime values.
//!
//! Evaluation produces [`Object`]s. Runtime failures are not objects here:
//! they travel as the `Err` arm of the evaluator's `Result`, which gives the
//! required first-error-wins short-circuiting for free via `?`.

use std::{fmt, rc::Rc};

use crate::{ast::BlockStatement, environment::Environment, utils::RcCell};

/// A runtime value produced by the evaluator.
#[derive(Clone)]
pub(crate) enum Object {
	/// A signed 64-bit integer.
	Integer(i64),
	/// The absence of a value, e.g. the result of an empty program.
	Null,
	/// The transient early-return carrier produced by `unbox`. It is
	/// unwrapped exactly once at the nearest call boundary and is never
	/// stored in an environment.
	Unbox(Box<Object>),
	/// A closure.
	Box(BoxValue),
}

/// A closure: the parameters and body of a `box` literal plus a shared
/// reference to the environment that was current when the literal was
/// evaluated. Calls chain their frame to that captured environment, not to
/// the caller's.
#[derive(Clone)]
pub(crate) struct BoxValue {
	pub parameters: Rc<Vec<String>>,
	pub body:       Rc<BlockStatement>,
	pub env:        RcCell<Environment>,
}

impl Object {
	/// Human-readable kind name used in runtime diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Object::Integer(_) => "Integer",
			Object::Null => "Null",
			Object::Unbox(_) => "Unbox",
			Object::Box(_) => "Box",
		}
	}
}

impl fmt::Display for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Object::Integer(value) => write!(f, "{value}"),
			Object::Null => write!(f, "null"),
			Object::Unbox(inner) => write!(f, "{inner}"),
			Object::Box(value) => write!(f, "box({}) {}", value.parameters.join(", "), value.body),
		}
	}
}

impl fmt::Debug for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Object::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
			Object::Null => write!(f, "Null"),
			Object::Unbox(inner) => f.debug_tuple("Unbox").field(inner).finish(),
			Object::Box(value) => f.debug_tuple("Box").field(value).finish(),
		}
	}
}

// The captured environment is skipped: a box stored in the very frame it
// captured would make a derived Debug recurse forever.
impl fmt::Debug for BoxValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoxValue")
			.field("parameters", &self.parameters)
			.field("body", &self.body.to_string())
			.finish_non_exhaustive()
	}
}
