use serde::Serialize;

/// Axis-aligned extremal point tracker.
///
/// A new box is empty (`min = +inf`, `max = -inf`) and only becomes valid once a point has been
/// expanded into it. `width`/`height`/`center_*` are meaningless on an empty box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut b = Self::new();
        for (x, y) in points {
            b.expand(x, y);
        }
        b
    }

    pub fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Extends this box by `other`'s extremes. Merging an empty box is a no-op.
    pub fn merge(&mut self, other: &BoundingBox) {
        if !other.is_valid() {
            return;
        }
        self.expand(other.min_x, other.min_y);
        self.expand(other.max_x, other.max_y);
    }

    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }
}

/// The declared coordinate frame of a document (`viewBox="x y width height"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A frame is usable only with a finite origin and a strictly positive, finite size.
    pub fn is_usable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_box_is_invalid() {
        assert!(!BoundingBox::new().is_valid());
        assert!(!BoundingBox::default().is_valid());
    }

    #[test]
    fn single_expand_collapses_to_point() {
        let mut b = BoundingBox::new();
        b.expand(3.0, -4.0);
        assert!(b.is_valid());
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (3.0, -4.0, 3.0, -4.0));
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn merge_ignores_empty_box() {
        let mut b = BoundingBox::from_points([(0.0, 0.0), (10.0, 5.0)]);
        b.merge(&BoundingBox::new());
        assert_eq!(b, BoundingBox::from_points([(0.0, 0.0), (10.0, 5.0)]));

        let mut empty = BoundingBox::new();
        empty.merge(&b);
        assert_eq!(empty, b);
        assert_eq!(empty.center_x(), 5.0);
        assert_eq!(empty.center_y(), 2.5);
    }

    #[test]
    fn view_box_usability() {
        assert!(ViewBox::new(0.0, 0.0, 24.0, 24.0).is_usable());
        assert!(!ViewBox::new(0.0, 0.0, 0.0, 24.0).is_usable());
        assert!(!ViewBox::new(0.0, 0.0, 24.0, -1.0).is_usable());
        assert!(!ViewBox::new(f64::NAN, 0.0, 24.0, 24.0).is_usable());
        assert!(!ViewBox::new(0.0, f64::INFINITY, 24.0, 24.0).is_usable());
        assert_eq!(ViewBox::new(-10.0, 0.0, 20.0, 40.0).center_x(), 0.0);
    }
}
