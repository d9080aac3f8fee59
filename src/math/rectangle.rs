use super::Point2;

/// An axis-aligned rectangle used for bounding boxes and snap areas.
///
/// `top` is the larger y value (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    /// Creates a rectangle from two opposite corners given as
    /// `(x1, y1, x2, y2)`, in any order.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.max(y2),
            right: x1.max(x2),
            bottom: y1.min(y2),
        }
    }

    /// Smallest rectangle holding every point; `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self::new(first.x, first.y, first.x, first.y);
        for p in rest {
            rect.left = rect.left.min(p.x);
            rect.right = rect.right.max(p.x);
            rect.bottom = rect.bottom.min(p.y);
            rect.top = rect.top.max(p.y);
        }
        Some(rect)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Returns whether `p` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}
