//! Optics for immutable data manipulation.
//!
//! Optics are first-class, composable accessors: they focus on a part of an
//! immutable structure, read it, and build a new structure with that part
//! replaced, copying only the path from the root to the focus.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens    . Lens     = Lens
//! Lens    . Prism    = Optional
//! Lens    . Optional = Optional
//! Optional. anything = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: A part that is always present (get/set)
//! - [`Prism`]: One variant of a sum type (preview/review)
//! - [`Optional`]: A part that may be absent (`get_option`/set, where set is
//!   a no-op on an absent focus)
//!
//! [`id_optional`] is the neutral element of optional composition and
//! [`BoxedOptional`] erases the type of an optional, so a runtime list of
//! steps can be folded into one optic.
//!
//! The optics for the opening and division models live next to them, in
//! [`opening::optics`](crate::opening::optics),
//! [`division::optics`](crate::division::optics) and
//! [`boxes::optics`](crate::boxes::optics).
//!
//! # Example
//!
//! ```
//! use opening_optics::{lens, prism};
//! use opening_optics::optics::{Lens, Optional};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Glass { Clear(u32), Frosted }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Pane { glass: Glass }
//!
//! let thickness = lens!(Pane, glass).compose_prism(prism!(Glass, Clear));
//!
//! let clear = Pane { glass: Glass::Clear(6) };
//! assert_eq!(thickness.get_option(&clear), Some(6));
//! assert_eq!(thickness.set(clear, 8), Pane { glass: Glass::Clear(8) });
//!
//! let frosted = Pane { glass: Glass::Frosted };
//! assert_eq!(thickness.get_option(&frosted), None);
//! assert_eq!(thickness.set(frosted.clone(), 8), frosted);
//! ```

mod lens;
mod optional;
mod prism;
mod standard_optics;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsOptional;

// Re-export all prism-related types and traits
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;

// Re-export all optional-related types and traits
pub use optional::BoxedOptional;
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::Optional;

// Re-export standard optics
pub use standard_optics::Identity;
pub use standard_optics::id_optional;
pub use standard_optics::null_no_change;
