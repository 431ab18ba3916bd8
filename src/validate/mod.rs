//! Runtime structural validation of untyped payloads.
//!
//! Payloads arriving from clients or the calculation service are plain JSON.
//! A [`Validator<T>`] checks such a value against a shape and narrows it to a
//! typed `T`, or reports every mismatch found, each with the [`FieldPath`]
//! where it happened. One invalid leaf rejects the whole payload; nothing is
//! partially accepted.
//!
//! Composite validators are conjunctions of field validators plus any
//! cross-field invariant. Recursive shapes (section trees, divisions) are
//! built with [`Validator::lazy`] so a shape's validator can mention itself.
//!
//! # Example
//!
//! ```
//! use opening_optics::validate::{primitives, Validator};
//! use serde_json::json;
//!
//! let sizes = primitives::distance().array();
//!
//! assert!(sizes.is_valid(&json!([1, 2.5, 0])));
//!
//! let errors = sizes.decode(&json!([1, -2])).unwrap_err();
//! assert_eq!(errors.first().to_string(), "[1]: expected Distance, found -2");
//! ```

mod path;
pub mod primitives;
mod validated;
mod validator;

pub use path::FieldPath;
pub use path::PathSegment;
pub use validated::Validated;
pub use validated::ValidationError;
pub use validated::ValidationErrors;
pub use validator::describe;
pub use validator::one_of;
pub use validator::Object;
pub use validator::Validator;
