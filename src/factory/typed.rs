//! Factories producing deserialized Rust values.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use super::Factory;
use crate::error::FactoryResult;
use crate::overrides::Overrides;

/// Wrapper that deserializes each built object into `T`.
///
/// Building consumes one sequence value, exactly like the wrapped factory,
/// even when deserialization then fails.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{define_with_sequence, sequence, Sequence, Template};
/// use serde::Deserialize;
/// use std::sync::Arc;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct User {
/// 	id: u64,
/// 	name: String,
/// }
///
/// let users = define_with_sequence(
/// 	Template::new().attr("id", sequence()).attr("name", "Bob"),
/// 	Arc::new(Sequence::new()),
/// )
/// .typed::<User>();
///
/// assert_eq!(users.build().unwrap(), User { id: 1, name: "Bob".into() });
/// ```
pub struct TypedFactory<T> {
	factory: Factory,
	_marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> TypedFactory<T> {
	/// Wraps `factory`.
	pub fn new(factory: Factory) -> Self {
		Self {
			factory,
			_marker: PhantomData,
		}
	}

	/// Builds one value with no overrides.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::Json`](crate::FactoryError::Json) if the
	/// resolved object does not deserialize into `T`.
	pub fn build(&self) -> FactoryResult<T> {
		self.build_with(Overrides::new())
	}

	/// Builds one value, applying `overrides` after resolution.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::Json`](crate::FactoryError::Json) if the
	/// resolved object does not deserialize into `T`.
	pub fn build_with(&self, overrides: impl Into<Overrides>) -> FactoryResult<T> {
		Ok(serde_json::from_value(self.factory.build_with(overrides))?)
	}

	/// Builds `count` values, stopping at the first that fails to deserialize.
	pub fn build_batch(&self, count: usize) -> FactoryResult<Vec<T>> {
		(0..count).map(|_| self.build()).collect()
	}

	/// Returns the wrapped untyped factory.
	pub fn factory(&self) -> &Factory {
		&self.factory
	}
}

impl<T> Clone for TypedFactory<T> {
	fn clone(&self) -> Self {
		Self {
			factory: self.factory.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T> fmt::Debug for TypedFactory<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypedFactory")
			.field("type", &std::any::type_name::<T>())
			.field("factory", &self.factory)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FactoryError;
	use crate::factory::define_with_sequence;
	use crate::sequence::{Sequence, sequence};
	use crate::template::Template;
	use rstest::{fixture, rstest};
	use serde::Deserialize;
	use std::sync::Arc;

	#[derive(Debug, Deserialize, PartialEq)]
	#[serde(rename_all = "camelCase")]
	struct User {
		id: u64,
		first_name: Option<String>,
		age: u32,
		#[serde(default)]
		admin: bool,
	}

	#[fixture]
	fn users() -> TypedFactory<User> {
		define_with_sequence(
			Template::new()
				.attr("id", sequence())
				.attr("firstName", "Bob")
				.attr("age", 42),
			Arc::new(Sequence::new()),
		)
		.typed()
	}

	#[rstest]
	fn test_typed_build(users: TypedFactory<User>) {
		let user = users.build().unwrap();

		assert_eq!(
			user,
			User {
				id: 1,
				first_name: Some("Bob".to_string()),
				age: 42,
				admin: false,
			}
		);
	}

	#[rstest]
	fn test_typed_build_with_null_and_optional_overrides(users: TypedFactory<User>) {
		// Act
		let user = users
			.build_with(Overrides::new().set("firstName", serde_json::Value::Null).set("admin", true))
			.unwrap();

		// Assert
		assert_eq!(user.first_name, None);
		assert!(user.admin);
	}

	#[rstest]
	fn test_typed_build_mismatch_still_consumes_sequence(users: TypedFactory<User>) {
		// Act
		let result = users.build_with(Overrides::new().set("age", "forty-two"));

		// Assert
		assert!(matches!(result, Err(FactoryError::Json(_))));
		assert_eq!(users.factory().sequence().current(), 1);
		assert_eq!(users.build().unwrap().id, 2);
	}

	#[rstest]
	fn test_typed_build_batch(users: TypedFactory<User>) {
		let batch = users.build_batch(3).unwrap();

		let ids: Vec<_> = batch.iter().map(|user| user.id).collect();
		assert_eq!(ids, vec![1, 2, 3]);
	}
}
