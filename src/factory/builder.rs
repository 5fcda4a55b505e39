//! Fluent factory configuration.

use std::sync::Arc;

use serde_json::Value;

use super::{Factory, define_with_sequence, extend};
use crate::attribute::Attribute;
use crate::sequence::{Sequence, sequence};
use crate::template::Template;

/// Builder for configuring a [`Factory`] step by step.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{FactoryBuilder, Sequence};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let model = FactoryBuilder::new()
/// 	.sequence_attr("id")
/// 	.with_sequence(Arc::new(Sequence::new()))
/// 	.build();
///
/// let user = FactoryBuilder::new()
/// 	.extends(&model)
/// 	.generator("email", |n| json!(format!("user{n}@example.com")))
/// 	.literal("is_active", true)
/// 	.build();
///
/// assert_eq!(
/// 	user.build(),
/// 	json!({"id": 1, "email": "user1@example.com", "is_active": true})
/// );
/// ```
#[derive(Debug, Default)]
pub struct FactoryBuilder {
	template: Template,
	sequence: Option<Arc<Sequence>>,
	base: Option<Factory>,
}

impl FactoryBuilder {
	/// Creates a builder with an empty template.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts from an existing template.
	pub fn from_template(template: Template) -> Self {
		Self {
			template,
			..Self::default()
		}
	}

	/// Declares an attribute of any kind.
	pub fn attr(mut self, name: impl Into<String>, attribute: impl Into<Attribute>) -> Self {
		self.template.insert(name, attribute);
		self
	}

	/// Declares a literal attribute.
	pub fn literal(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attr(name, Attribute::literal(value))
	}

	/// Declares a generator attribute.
	pub fn generator<F>(self, name: impl Into<String>, f: F) -> Self
	where
		F: Fn(u64) -> Value + Send + Sync + 'static,
	{
		self.attr(name, Attribute::generator(f))
	}

	/// Declares an attribute built by a nested factory.
	pub fn nested(self, name: impl Into<String>, factory: &Factory) -> Self {
		self.attr(name, Attribute::factory(factory.clone()))
	}

	/// Declares an attribute equal to the sequence number.
	pub fn sequence_attr(self, name: impl Into<String>) -> Self {
		self.attr(name, sequence())
	}

	/// Draws sequence values from `sequence` instead of the default counter.
	///
	/// Without this, a factory extending a base shares the base's counter and
	/// any other factory uses the process-wide one.
	pub fn with_sequence(mut self, sequence: Arc<Sequence>) -> Self {
		self.sequence = Some(sequence);
		self
	}

	/// Layers the declared attributes on top of `base`'s template.
	pub fn extends(mut self, base: &Factory) -> Self {
		self.base = Some(base.clone());
		self
	}

	/// Builds the factory.
	pub fn build(self) -> Factory {
		match (self.base, self.sequence) {
			(Some(base), None) => extend(&base, self.template),
			(Some(base), Some(sequence)) => {
				define_with_sequence(base.template().merged(&self.template), sequence)
			}
			(None, sequence) => {
				define_with_sequence(self.template, sequence.unwrap_or_else(Sequence::global))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_builder_declares_every_kind() {
		// Arrange
		let counter = Arc::new(Sequence::new());
		let user = FactoryBuilder::new()
			.literal("firstName", "Bob")
			.with_sequence(Arc::clone(&counter))
			.build();

		// Act
		let post = FactoryBuilder::new()
			.sequence_attr("id")
			.generator("title", |n| json!(format!("My Post #{n}")))
			.nested("user", &user)
			.attr("published", false)
			.with_sequence(Arc::clone(&counter))
			.build();

		// Assert
		assert_eq!(
			post.build(),
			json!({
				"id": 1,
				"title": "My Post #1",
				"user": {"firstName": "Bob"},
				"published": false
			})
		);
		assert_eq!(counter.current(), 2);
	}

	#[rstest]
	fn test_extends_shares_base_sequence() {
		let counter = Arc::new(Sequence::new());
		let model = FactoryBuilder::new()
			.sequence_attr("id")
			.with_sequence(Arc::clone(&counter))
			.build();

		let user = FactoryBuilder::new()
			.extends(&model)
			.literal("age", 42)
			.build();

		assert!(Arc::ptr_eq(user.sequence(), &counter));
		assert_eq!(user.build(), json!({"id": 1, "age": 42}));
		assert_eq!(model.build(), json!({"id": 2}));
	}

	#[rstest]
	fn test_extends_with_explicit_sequence_isolates_derived_factory() {
		let model = FactoryBuilder::new()
			.sequence_attr("id")
			.with_sequence(Arc::new(Sequence::new()))
			.build();
		let isolated = Arc::new(Sequence::starting_at(100));

		let user = FactoryBuilder::new()
			.extends(&model)
			.literal("age", 42)
			.with_sequence(Arc::clone(&isolated))
			.build();

		assert_eq!(user.build(), json!({"id": 100, "age": 42}));
		assert_eq!(model.build(), json!({"id": 1}));
	}

	#[rstest]
	fn test_from_template() {
		let template = Template::new().attr("type", "BaseModel");

		let factory = FactoryBuilder::from_template(template)
			.literal("type", "User")
			.with_sequence(Arc::new(Sequence::new()))
			.build();

		assert_eq!(factory.build(), json!({"type": "User"}));
	}

	#[rstest]
	fn test_default_uses_global_sequence() {
		let factory = FactoryBuilder::new().literal("a", 1).build();

		assert!(Arc::ptr_eq(factory.sequence(), &Sequence::global()));
	}
}
