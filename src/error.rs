//! Error types for the factory module.
//!
//! Resolving a template never fails on its own. These errors cover the
//! edges where untyped JSON meets the factory API.

use thiserror::Error;

/// Errors that can occur while defining or building factories.
#[derive(Debug, Error)]
pub enum FactoryError {
	/// A template or overrides object was built from a non-object JSON value.
	#[error("Invalid template: {0}")]
	InvalidTemplate(String),

	/// The resolved object could not be converted into the requested type.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type alias for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
