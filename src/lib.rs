//! Test-fixture factories for the Reinhardt framework.
//!
//! A factory turns a declarative [`Template`] into fully populated objects on
//! demand. Templates mix literal values, generators of the current sequence
//! number and nested factories; callers override any attribute per call.
//!
//! - **Sequences**: every invocation draws exactly one value from a shared,
//!   monotonically increasing [`Sequence`]
//! - **Overrides**: applied last and decided by key presence, so `null`,
//!   `false`, `0` and `""` overrides win like any other value
//! - **Extension**: [`extend`] derives a factory from another one's declared
//!   template, sharing its counter
//!
//! # Quick Start
//!
//! ```
//! use reinhardt_factory::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let counter = Arc::new(Sequence::new());
//! let model = define_with_sequence(Template::new().attr("id", sequence()), counter);
//!
//! let user = extend(
//! 	&model,
//! 	Template::new()
//! 		.attr("firstName", Attribute::generator(|n| json!(format!("Bob #{n}"))))
//! 		.attr("age", 42),
//! );
//!
//! assert_eq!(user.build(), json!({"id": 1, "firstName": "Bob #1", "age": 42}));
//!
//! let overrides = Overrides::new().set("firstName", json!(null)).set("age", 0);
//! assert_eq!(
//! 	user.build_with(overrides),
//! 	json!({"id": 2, "firstName": null, "age": 0})
//! );
//! ```
//!
//! # Sequence isolation
//!
//! [`define`] and [`FactoryBuilder`] use the process-wide counter returned by
//! [`Sequence::global`]. Tests asserting exact sequence values should either
//! inject their own counter with [`define_with_sequence`] or call
//! [`reset_sequence`] during setup and run serially.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attribute;
pub mod error;
pub mod factory;
pub mod overrides;
pub mod prelude;
pub mod resolver;
pub mod sequence;
pub mod template;

// Re-export commonly used types at crate root
pub use attribute::{Attribute, GeneratorFn};
pub use error::{FactoryError, FactoryResult};
pub use factory::{Factory, FactoryBuilder, TypedFactory, define, define_with_sequence, extend};
pub use overrides::Overrides;
pub use resolver::resolve;
pub use sequence::{Sequence, next_sequence, reset_sequence, sequence};
pub use template::Template;
