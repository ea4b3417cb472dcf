//! gazou-morph - Structuring elements for morphological operations
//!
//! This crate provides the structuring element (SEL) used by
//! neighborhood-based image operations such as erosion, dilation and
//! template matching. A SEL is a pure geometric object: a set of integer
//! offsets around an origin, computed once from a shape kind and radii.
//!
//! The morphological operators themselves consume [`Sel::offsets`] and
//! live outside this crate.

mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelShape};
