use crate::math::{Point2, Rectangle};

/// Marker shape drawn for a snap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Endpoints, vertices and axis extremes.
    Square,
    /// Centers.
    Circle,
    /// Midpoints.
    Triangle,
}

/// A snap target exposed by a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub kind: ReferenceKind,
    pub point: Point2,
}

impl ReferencePoint {
    #[must_use]
    pub fn new(kind: ReferenceKind, point: Point2) -> Self {
        Self { kind, point }
    }
}

/// Keeps the candidates lying inside `area`; no area means no references.
pub(crate) fn filter_inside(
    area: Option<&Rectangle>,
    candidates: impl IntoIterator<Item = ReferencePoint>,
) -> Vec<ReferencePoint> {
    match area {
        Some(area) => candidates
            .into_iter()
            .filter(|r| area.contains(&r.point))
            .collect(),
        None => Vec::new(),
    }
}
