//! Factory definition and extension.
//!
//! A [`Factory`] binds a [`Template`] to a [`Sequence`]. Each call to
//! [`Factory::build`] draws one sequence value, resolves the template with
//! it and applies the caller's overrides.
//!
//! - [`define`] / [`define_with_sequence`] - create a factory
//! - [`extend`] - derive a factory from another one's declared template
//! - [`FactoryBuilder`] - fluent factory configuration
//! - [`TypedFactory`] - deserialize built objects into Rust types

mod builder;
mod typed;

pub use builder::FactoryBuilder;
pub use typed::TypedFactory;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::overrides::Overrides;
use crate::resolver::resolve;
use crate::sequence::Sequence;
use crate::template::Template;

/// Reusable producer of resolved objects.
///
/// Cloning a factory is cheap and yields a handle to the same template and
/// counter.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{define_with_sequence, sequence, Attribute, Sequence, Template};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let model = define_with_sequence(
/// 	Template::new().attr("id", sequence()),
/// 	Arc::new(Sequence::new()),
/// );
/// let user = model.extend(
/// 	Template::new()
/// 		.attr("firstName", Attribute::generator(|n| json!(format!("Bob #{n}"))))
/// 		.attr("age", 42),
/// );
///
/// assert_eq!(user.build(), json!({"id": 1, "firstName": "Bob #1", "age": 42}));
/// assert_eq!(user.build(), json!({"id": 2, "firstName": "Bob #2", "age": 42}));
/// ```
#[derive(Clone)]
pub struct Factory {
	inner: Arc<FactoryInner>,
}

struct FactoryInner {
	template: Template,
	sequence: Arc<Sequence>,
}

impl Factory {
	fn new(template: Template, sequence: Arc<Sequence>) -> Self {
		tracing::debug!(attributes = template.len(), "defining factory");
		Self {
			inner: Arc::new(FactoryInner { template, sequence }),
		}
	}

	/// Builds one object with no overrides.
	pub fn build(&self) -> Value {
		self.build_with(Overrides::new())
	}

	/// Builds one object, applying `overrides` after resolution.
	pub fn build_with(&self, overrides: impl Into<Overrides>) -> Value {
		let overrides = overrides.into();
		let sequence = self.inner.sequence.next();
		Value::Object(resolve(&self.inner.template, sequence, &overrides))
	}

	/// Builds `count` objects, one sequence value each.
	pub fn build_batch(&self, count: usize) -> Vec<Value> {
		self.build_batch_with(count, Overrides::new())
	}

	/// Builds `count` objects, applying the same `overrides` to each.
	pub fn build_batch_with(&self, count: usize, overrides: impl Into<Overrides>) -> Vec<Value> {
		let overrides = overrides.into();
		(0..count)
			.map(|_| self.build_with(overrides.clone()))
			.collect()
	}

	/// Returns the declared template.
	///
	/// Does not resolve anything or consume a sequence value.
	pub fn template(&self) -> &Template {
		&self.inner.template
	}

	/// Returns the counter this factory draws from.
	pub fn sequence(&self) -> &Arc<Sequence> {
		&self.inner.sequence
	}

	/// Derives a factory whose template is this factory's template with
	/// `template` layered on top. See [`extend`].
	pub fn extend(&self, template: Template) -> Factory {
		extend(self, template)
	}

	/// Wraps this factory so built objects are deserialized into `T`.
	pub fn typed<T: DeserializeOwned>(&self) -> TypedFactory<T> {
		TypedFactory::new(self.clone())
	}
}

impl fmt::Debug for Factory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Factory")
			.field("attributes", &self.inner.template.keys().collect::<Vec<_>>())
			.field("sequence", &self.inner.sequence.current())
			.finish()
	}
}

/// Creates a factory over the process-wide counter.
pub fn define(template: Template) -> Factory {
	define_with_sequence(template, Sequence::global())
}

/// Creates a factory over the given counter.
///
/// Factories sharing an `Arc<Sequence>` never hand out the same value.
pub fn define_with_sequence(template: Template, sequence: Arc<Sequence>) -> Factory {
	Factory::new(template, sequence)
}

/// Derives a factory from `base`.
///
/// The new template is `base`'s declared template with `template` layered on
/// top: for names declared in both, `template`'s attribute wins. The derived
/// factory shares `base`'s counter and draws one value per call, however
/// many levels of extension it sits under. `base` is left untouched.
pub fn extend(base: &Factory, template: Template) -> Factory {
	tracing::debug!(
		base_attributes = base.template().len(),
		extra_attributes = template.len(),
		"extending factory"
	);
	Factory::new(base.template().merged(&template), Arc::clone(base.sequence()))
}
