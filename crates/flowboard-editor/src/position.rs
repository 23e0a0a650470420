//! Canvas position type.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinate space.
///
/// Canvas coordinates are independent of screen pixels; the view transform
/// in [`crate::view::ViewState`] maps between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Position {
    /// The canvas origin.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise sum.
    pub fn translate(self, delta: Position) -> Position {
        Position::new(self.x + delta.x, self.y + delta.y)
    }

    /// Clamps both axes to be non-negative.
    pub fn clamp_non_negative(self) -> Position {
        Position::new(self.x.max(0.0), self.y.max(0.0))
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_translate_invert() {
        let a = Position::new(30.0, 50.0);
        let b = Position::new(10.0, 5.0);
        assert_eq!(b.translate(a.offset_from(b)), a);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(
            Position::new(-3.0, 12.0).clamp_non_negative(),
            Position::new(0.0, 12.0)
        );
        assert_eq!(
            Position::new(4.0, -0.5).clamp_non_negative(),
            Position::new(4.0, 0.0)
        );
    }
}
