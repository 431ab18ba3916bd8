//! # opening-optics
//!
//! Validated, parametric models of glazing openings (walls, ceilings, floors,
//! their curbs and the panels dividing each face), together with composable
//! optics for editing them immutably.
//!
//! ## Overview
//!
//! - **Primitives**: [`numbers`] (`Angle`, `Distance`, `Nat`) and [`boxes`]
//!   (`NonEmpty`, `OneOrUptoThree`)
//! - **Model**: [`opening`] (the section tree and its curbs) and [`division`]
//!   (binary division of a face into panels)
//! - **Validation**: [`validate`], recursive structural decoders from untyped
//!   JSON that report every mismatch with its path
//! - **Optics**: [`optics`], Lens, Prism and Optional with their composition
//!   algebra, plus domain optics next to each model module
//! - **Calculation**: [`calc`], the request/response envelope exchanged with
//!   the remote calculation service
//!
//! ## Feature Flags
//!
//! - `optics`: Optics core and domain optics
//! - `calc`: Calculation round trip (requestor seam, wants, drawings)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use opening_optics::concrete;
//! use serde_json::json;
//!
//! let division = concrete::division()
//!     .decode(&json!({ "type": "Whole", "Info": null }))
//!     .expect("a whole panel is a valid division");
//! assert!(division.is_whole());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use opening_optics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boxes::{Branch, NonEmpty, OneOrUptoThree, UptoThree};
    pub use crate::division::{Curve, Divided, Division, DivisionStep, Side, Strategy};
    pub use crate::numbers::{Angle, Distance, Nat, NumberError};
    pub use crate::opening::{
        Bottom, Curb, Directed, Direction, In, Join, Joint, Left, Measure, Measurement, Opening,
        Out, Right, Section, SectionTree, Stretch, Top, Wall,
    };
    pub use crate::validate::{FieldPath, Validated, ValidationError, ValidationErrors, Validator};

    #[cfg(feature = "optics")]
    pub use crate::optics::{BoxedOptional, Lens, Optional, Prism, id_optional};

    #[cfg(feature = "calc")]
    pub use crate::calc::{CalcConfig, CalcError, Requestor, Want};
}

pub mod boxes;
pub mod concrete;
pub mod division;
pub mod numbers;
pub mod opening;
pub mod validate;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "calc")]
pub mod calc;
