use std::collections::HashMap;

use crate::{object::Object, utils::RcCell};

/// A lexical scope frame: name-to-value bindings plus an optional link to
/// the enclosing frame.
///
/// Frames are handed around as [`RcCell`]s because they are shared-owned,
/// not stack-scoped: every closure created while a frame was current keeps
/// it alive past the scope that created it.
#[derive(Debug, Default)]
pub(crate) struct Environment {
	store: HashMap<String, Object>,
	outer: Option<RcCell<Environment>>,
}

impl Environment {
	/// A root frame with no enclosing scope.
	pub fn new() -> RcCell<Self> { RcCell::new(Self::default()) }

	/// A frame chained inside `outer`, as created for each function call.
	pub fn new_enclosed(outer: RcCell<Environment>) -> RcCell<Self> {
		RcCell::new(Self { store: HashMap::new(), outer: Some(outer) })
	}

	/// Bind a name in this frame, shadowing any same-named outer binding
	/// without mutating it.
	pub fn define(&mut self, name: impl Into<String>, value: Object) { self.store.insert(name.into(), value); }

	/// Look a name up in this frame first, then outward through the chain.
	pub fn get(&self, name: &str) -> Option<Object> {
		self.store.get(name).cloned().or_else(|| self.outer.as_ref().and_then(|outer| outer.borrow().get(name)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_recurses_outward() {
		let root = Environment::new();
		root.borrow_mut().define("a", Object::Integer(1));
		let inner = Environment::new_enclosed(root);
		assert!(matches!(inner.borrow().get("a"), Some(Object::Integer(1))));
		assert!(inner.borrow().get("b").is_none());
	}

	#[test]
	fn inner_binding_shadows_without_mutating_outer() {
		let root = Environment::new();
		root.borrow_mut().define("a", Object::Integer(1));
		let inner = Environment::new_enclosed(root.clone());
		inner.borrow_mut().define("a", Object::Integer(2));
		assert!(matches!(inner.borrow().get("a"), Some(Object::Integer(2))));
		assert!(matches!(root.borrow().get("a"), Some(Object::Integer(1))));
	}
}
