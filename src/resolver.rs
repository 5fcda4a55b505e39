//! Attribute resolution.

use serde_json::{Map, Value};

use crate::overrides::Overrides;
use crate::template::Template;

/// Resolves `template` for one invocation numbered `sequence`, then applies
/// `overrides`.
///
/// Every template attribute is evaluated, in declaration order, even when an
/// override replaces it, so generators observe the same invocations whether
/// or not a caller overrides them. Overrides are applied by key presence: an
/// override for a key always wins, and keys the template never declared are
/// added. The resulting key set is the union of both.
///
/// The returned map keeps declaration order: template attributes first, in
/// template order, then override-only keys in override order. An override of
/// a declared attribute keeps that attribute's position.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{resolve, sequence, Overrides, Template};
/// use serde_json::json;
///
/// let template = Template::new().attr("id", sequence()).attr("admin", true);
/// let overrides = Overrides::new().set("admin", false).set("age", 0);
///
/// let resolved = resolve(&template, 7, &overrides);
/// assert_eq!(
/// 	serde_json::Value::Object(resolved),
/// 	json!({"id": 7, "admin": false, "age": 0})
/// );
/// ```
pub fn resolve(template: &Template, sequence: u64, overrides: &Overrides) -> Map<String, Value> {
	tracing::trace!(
		sequence,
		attributes = template.len(),
		overrides = overrides.len(),
		"resolving template"
	);

	let mut resolved: Map<String, Value> = template
		.iter()
		.map(|(name, attribute)| (name.to_string(), attribute.resolve(sequence)))
		.collect();

	for (name, value) in overrides.iter() {
		resolved.insert(name.clone(), value.clone());
	}

	resolved
}
