use crate::document::{CurveId, Drawing};
use crate::error::{GeometryError, Result};
use crate::geometry::{ArcPoint, Curve};
use crate::math::Vector2;

/// Drags selected grip points of an arc.
#[derive(Debug)]
pub struct MovePoints {
    curve: CurveId,
    points: Vec<ArcPoint>,
    displacement: Vector2,
}

impl MovePoints {
    /// Creates a new `MovePoints` operation.
    #[must_use]
    pub fn new(curve: CurveId, points: Vec<ArcPoint>, displacement: Vector2) -> Self {
        Self {
            curve,
            points,
            displacement,
        }
    }

    /// Moves the grips, returning whether the arc changed.
    ///
    /// A move that would leave the three defining points collinear is
    /// refused and the arc stays as it was.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing and
    /// `InvalidArgument` if it is not an arc.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<bool> {
        match &mut drawing.get_mut(self.curve)?.curve {
            Curve::Arc(arc) => Ok(arc.move_points(&self.points, &self.displacement)),
            other => Err(GeometryError::InvalidArgument(format!(
                "grip points can only be moved on arcs, not {:?}",
                other.kind()
            ))
            .into()),
        }
    }
}
