//! Call-time overrides.

use serde_json::{Map, Value};

use crate::error::{FactoryError, FactoryResult};
use crate::template::json_kind;

/// Partial object applied after template resolution.
///
/// An entry counts as present whenever its key exists, whatever the value:
/// `null`, `false`, `0` and `""` all replace the resolved attribute.
///
/// # Example
///
/// ```
/// use reinhardt_factory::Overrides;
/// use serde_json::json;
///
/// let overrides = Overrides::new()
/// 	.set("firstName", json!(null))
/// 	.set("age", 0);
/// assert!(overrides.contains_key("firstName"));
/// assert!(!overrides.contains_key("admin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
	values: Map<String, Value>,
}

impl Overrides {
	/// Creates an empty set of overrides.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an override, returning the overrides.
	pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Builds overrides from a JSON object.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::InvalidTemplate`] if `value` is not an object.
	pub fn from_json(value: Value) -> FactoryResult<Self> {
		match value {
			Value::Object(values) => Ok(Self { values }),
			other => Err(FactoryError::InvalidTemplate(format!(
				"overrides must be a JSON object, got {}",
				json_kind(&other)
			))),
		}
	}

	/// Returns true if `name` is overridden.
	pub fn contains_key(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Returns the override for `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	/// Iterates over overridden entries.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.values.iter()
	}

	/// Returns the number of overridden entries.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if nothing is overridden.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<Map<String, Value>> for Overrides {
	fn from(values: Map<String, Value>) -> Self {
		Self { values }
	}
}

impl TryFrom<Value> for Overrides {
	type Error = FactoryError;

	fn try_from(value: Value) -> FactoryResult<Self> {
		Self::from_json(value)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Overrides {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}
