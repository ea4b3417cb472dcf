//! Gazou - Image processing primitives for Rust
//!
//! Gazou provides the small data structures that neighborhood-based
//! image processing is built from:
//!
//! - [`Pixmap`] - channel-typed pixel buffer (1, 3 or 4 samples per pixel)
//! - [`morph::Sel`] - structuring elements for morphological operators
//! - [`Matrix`] - dense floating-point matrix
//! - Image file I/O (PNG, JPEG) in [`io`]
//!
//! # Example
//!
//! ```
//! use gazou::{Channels, Pixmap};
//! use gazou::morph::Sel;
//!
//! let pixmap = Pixmap::new(640, 480, Channels::Gray).unwrap();
//! assert_eq!(pixmap.width(), 640);
//!
//! // A diamond neighborhood for a morphological operator
//! let sel = Sel::new_symmetric("diamond", 2).unwrap();
//! assert_eq!(sel.len(), 13);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gazou_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gazou_io as io;
pub use gazou_morph as morph;
