//! Declarative attribute templates.

use indexmap::IndexMap;
use serde_json::Value;

use crate::attribute::Attribute;
use crate::error::{FactoryError, FactoryResult};

/// Ordered mapping from attribute name to [`Attribute`].
///
/// Attributes are resolved in declaration order. Templates are immutable once
/// handed to a factory; [`Template::merged`] produces a new template instead
/// of modifying either side.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{sequence, Template};
///
/// let template = Template::new()
/// 	.attr("id", sequence())
/// 	.attr("firstName", "Bob")
/// 	.attr("age", 42);
/// assert_eq!(template.len(), 3);
/// assert!(template.contains_key("firstName"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Template {
	attributes: IndexMap<String, Attribute>,
}

impl Template {
	/// Creates an empty template.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an attribute, returning the template.
	pub fn attr(mut self, name: impl Into<String>, attribute: impl Into<Attribute>) -> Self {
		self.insert(name, attribute);
		self
	}

	/// Adds or replaces an attribute in place.
	///
	/// A replaced attribute keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, attribute: impl Into<Attribute>) {
		self.attributes.insert(name.into(), attribute.into());
	}

	/// Builds a template of literal attributes from a JSON object.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::InvalidTemplate`] if `value` is not an object.
	pub fn from_json(value: Value) -> FactoryResult<Self> {
		match value {
			Value::Object(map) => Ok(map.into_iter().collect()),
			other => Err(FactoryError::InvalidTemplate(format!(
				"expected a JSON object, got {}",
				json_kind(&other)
			))),
		}
	}

	/// Returns the attribute declared under `name`.
	pub fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	/// Returns true if `name` is declared.
	pub fn contains_key(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	/// Iterates over declared attribute names in declaration order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.attributes.keys().map(String::as_str)
	}

	/// Iterates over declared attributes in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> {
		self.attributes
			.iter()
			.map(|(name, attribute)| (name.as_str(), attribute))
	}

	/// Returns the number of declared attributes.
	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	/// Returns true if no attributes are declared.
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Returns a new template with `other` layered on top of `self`.
	///
	/// For names declared in both, `other`'s attribute wins whatever its kind,
	/// and the name keeps its position from `self`. Names only in `other` are
	/// appended in `other`'s order.
	pub fn merged(&self, other: &Template) -> Template {
		let mut attributes = self.attributes.clone();
		for (name, attribute) in &other.attributes {
			attributes.insert(name.clone(), attribute.clone());
		}
		Template { attributes }
	}
}

impl<K, A> FromIterator<(K, A)> for Template
where
	K: Into<String>,
	A: Into<Attribute>,
{
	fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
		let mut template = Template::new();
		for (name, attribute) in iter {
			template.insert(name, attribute);
		}
		template
	}
}

impl TryFrom<Value> for Template {
	type Error = FactoryError;

	fn try_from(value: Value) -> FactoryResult<Self> {
		Self::from_json(value)
	}
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
