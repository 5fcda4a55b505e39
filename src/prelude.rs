//! Convenience re-exports for common usage.
//!
//! ```
//! use reinhardt_factory::prelude::*;
//!
//! let model = define(Template::new().attr("id", sequence()));
//! assert_eq!(model.template().len(), 1);
//! ```

// Error types
pub use crate::error::{FactoryError, FactoryResult};

// Template types
pub use crate::attribute::Attribute;
pub use crate::overrides::Overrides;
pub use crate::template::Template;

// Factory types
pub use crate::factory::{Factory, FactoryBuilder, TypedFactory};

// Factory functions
pub use crate::factory::{define, define_with_sequence, extend};
pub use crate::sequence::{Sequence, reset_sequence, sequence};
