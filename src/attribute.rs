//! Attribute specs: the values a template can hold.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::factory::Factory;

/// Generator function receiving the current sequence number.
pub type GeneratorFn = Arc<dyn Fn(u64) -> Value + Send + Sync>;

/// A single template entry.
///
/// Whether an attribute is a constant or a computation is decided when the
/// template is declared, not by inspecting values at resolution time.
#[derive(Clone)]
pub enum Attribute {
	/// Constant value, cloned into every resolved object.
	Literal(Value),

	/// Computed from the sequence number of the invocation.
	Generator(GeneratorFn),

	/// Nested factory, invoked with no overrides. It draws its own value from
	/// its own counter, after the enclosing invocation drew one.
	Factory(Factory),
}

impl Attribute {
	/// Creates a literal attribute.
	pub fn literal(value: impl Into<Value>) -> Self {
		Self::Literal(value.into())
	}

	/// Creates a generator attribute.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_factory::Attribute;
	///
	/// let name = Attribute::generator(|n| format!("Bob #{n}").into());
	/// assert_eq!(name.resolve(3), "Bob #3");
	/// ```
	pub fn generator<F>(f: F) -> Self
	where
		F: Fn(u64) -> Value + Send + Sync + 'static,
	{
		Self::Generator(Arc::new(f))
	}

	/// Creates a nested factory attribute.
	pub fn factory(factory: Factory) -> Self {
		Self::Factory(factory)
	}

	/// Resolves this attribute for the given sequence number.
	///
	/// A panicking generator unwinds through this call unchanged.
	pub fn resolve(&self, sequence: u64) -> Value {
		match self {
			Self::Literal(value) => value.clone(),
			Self::Generator(f) => f(sequence),
			Self::Factory(factory) => factory.build(),
		}
	}

	/// Returns true if this attribute depends on the invocation.
	pub fn is_dynamic(&self) -> bool {
		!matches!(self, Self::Literal(_))
	}
}

impl fmt::Debug for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Generator(_) => f.write_str("Generator(<fn>)"),
			Self::Factory(factory) => f.debug_tuple("Factory").field(factory).finish(),
		}
	}
}

impl From<Value> for Attribute {
	fn from(value: Value) -> Self {
		Self::Literal(value)
	}
}

impl From<&str> for Attribute {
	fn from(value: &str) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<String> for Attribute {
	fn from(value: String) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<bool> for Attribute {
	fn from(value: bool) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<i64> for Attribute {
	fn from(value: i64) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<i32> for Attribute {
	fn from(value: i32) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<u64> for Attribute {
	fn from(value: u64) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<f64> for Attribute {
	fn from(value: f64) -> Self {
		Self::Literal(Value::from(value))
	}
}

impl From<Factory> for Attribute {
	fn from(factory: Factory) -> Self {
		Self::Factory(factory)
	}
}

impl From<&Factory> for Attribute {
	fn from(factory: &Factory) -> Self {
		Self::Factory(factory.clone())
	}
}
