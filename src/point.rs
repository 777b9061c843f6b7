//! A single evaluation of the sharing polynomial

use crate::field::FieldElement;

/// An `(x, f(x))` pair in the field
///
/// `x = 0` is reserved for the secret itself and is never handed out by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Point {
    #[must_use]
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:x},\n {:x})",
            self.x.as_biguint(),
            self.y.as_biguint()
        )
    }
}
