//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. It is a finite set of integer offsets around an origin;
//! an operator such as erosion or dilation iterates the offsets to know
//! which neighbors of a pixel participate.
//!
//! The five supported shapes differ only in their membership predicate
//! over the bounding box `[-rx, rx] x [-ry, ry]`, so they are a closed
//! enum dispatching into a single enumeration routine rather than a
//! subtype per shape.

use crate::{MorphError, MorphResult};

/// Shape of a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelShape {
    /// Every point of the bounding box, ry forced to rx
    Square,
    /// Every point of the bounding box
    Rectangle,
    /// L1-normalized rhombus: |dx|/rx + |dy|/ry <= 1
    Diamond,
    /// Normalized ellipse with ry forced to rx
    Circle,
    /// Normalized ellipse: dx^2/rx^2 + dy^2/ry^2 <= 1
    Ellipse,
}

impl SelShape {
    /// Parse a shape name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnknownShape`] for unrecognized names.
    pub fn from_name(name: &str) -> MorphResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "square" => Ok(SelShape::Square),
            "rectangle" => Ok(SelShape::Rectangle),
            "diamond" => Ok(SelShape::Diamond),
            "circle" => Ok(SelShape::Circle),
            "ellipse" => Ok(SelShape::Ellipse),
            _ => Err(MorphError::UnknownShape(name.to_string())),
        }
    }

    /// Get the canonical (lowercase) shape name.
    pub fn name(self) -> &'static str {
        match self {
            SelShape::Square => "square",
            SelShape::Rectangle => "rectangle",
            SelShape::Diamond => "diamond",
            SelShape::Circle => "circle",
            SelShape::Ellipse => "ellipse",
        }
    }

    /// Membership test for offset (dx, dy) against radii (rx, ry).
    ///
    /// Symmetric in the sign of both dx and dy, so every generated offset
    /// set is symmetric under negation.
    fn contains(self, dx: i32, dy: i32, rx: i32, ry: i32) -> bool {
        match self {
            SelShape::Square | SelShape::Rectangle => true,
            SelShape::Diamond => {
                let lx = rx as f64;
                let ly = ry as f64;
                (dx.abs() as f64) / lx + (dy.abs() as f64) / ly <= 1.0
            }
            SelShape::Circle | SelShape::Ellipse => {
                let lx = (rx as f64) * (rx as f64);
                let ly = (ry as f64) * (ry as f64);
                ((dx * dx) as f64) / lx + ((dy * dy) as f64) / ly <= 1.0
            }
        }
    }
}

/// Structuring Element (SEL)
///
/// The offset set is computed once at construction and immutable
/// thereafter. It always contains the origin `(0, 0)` and is symmetric
/// under negation for every supported shape.
///
/// # Examples
///
/// ```
/// use gazou_morph::Sel;
///
/// let sel = Sel::new_symmetric("diamond", 1).unwrap();
/// assert_eq!(sel.len(), 5);
/// assert!(sel.contains(0, 0));
/// assert!(!sel.contains(1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Sel {
    shape: SelShape,
    rx: i32,
    ry: i32,
    offsets: Vec<(i32, i32)>,
}

impl Sel {
    /// Create a structuring element by shape name.
    ///
    /// `square` and `circle` ignore `ry` and use `rx` for both radii.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnknownShape`] for unrecognized names, and
    /// [`MorphError::InvalidRadius`] if either effective radius is not
    /// strictly positive.
    pub fn new(name: &str, rx: i32, ry: i32) -> MorphResult<Self> {
        let shape = SelShape::from_name(name)?;
        Self::from_shape(shape, rx, ry)
    }

    /// Create a structuring element with `rx = ry = r`.
    ///
    /// # Errors
    ///
    /// Same as [`Sel::new`].
    pub fn new_symmetric(name: &str, r: i32) -> MorphResult<Self> {
        Self::new(name, r, r)
    }

    /// Create a structuring element from a shape tag.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidRadius`] if either effective radius
    /// (after `square`/`circle` force `ry := rx`) is not strictly positive.
    pub fn from_shape(shape: SelShape, rx: i32, ry: i32) -> MorphResult<Self> {
        let ry = match shape {
            SelShape::Square | SelShape::Circle => rx,
            _ => ry,
        };
        if rx <= 0 || ry <= 0 {
            return Err(MorphError::InvalidRadius { rx, ry });
        }

        let mut offsets = Vec::new();
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                if shape.contains(dx, dy, rx, ry) {
                    offsets.push((dx, dy));
                }
            }
        }

        Ok(Sel {
            shape,
            rx,
            ry,
            offsets,
        })
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> SelShape {
        self.shape
    }

    /// Get the effective x radius
    #[inline]
    pub fn radius_x(&self) -> i32 {
        self.rx
    }

    /// Get the effective y radius
    #[inline]
    pub fn radius_y(&self) -> i32 {
        self.ry
    }

    /// Width of the bounding box (`2 * rx + 1`)
    #[inline]
    pub fn width(&self) -> u32 {
        (2 * self.rx + 1) as u32
    }

    /// Height of the bounding box (`2 * ry + 1`)
    #[inline]
    pub fn height(&self) -> u32 {
        (2 * self.ry + 1) as u32
    }

    /// Get the offsets relative to the origin.
    ///
    /// Each offset appears exactly once; the order is bounding-box
    /// row-major and carries no meaning.
    #[inline]
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Number of offsets in the element
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the element is empty. Never true after construction, since
    /// the origin belongs to every shape with radius >= 1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Test whether (dx, dy) belongs to the element.
    pub fn contains(&self, dx: i32, dy: i32) -> bool {
        dx.abs() <= self.rx && dy.abs() <= self.ry && self.shape.contains(dx, dy, self.rx, self.ry)
    }
}
