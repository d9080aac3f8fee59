use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::Element;
use crate::math::Vector2;

/// Translates a curve by a displacement vector.
#[derive(Debug)]
pub struct Translate {
    curve: CurveId,
    displacement: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(curve: CurveId, displacement: Vector2) -> Self {
        Self {
            curve,
            displacement,
        }
    }

    /// Executes the translation, modifying the curve in-place.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<()> {
        drawing
            .get_mut(self.curve)?
            .curve
            .translate(&self.displacement);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::geometry::{Curve, Ellipse, Line};
    use crate::test_support::p;
    use approx::assert_abs_diff_eq;

    #[test]
    fn translate_line() {
        let mut drawing = Drawing::new();
        let id = drawing.add(CurveData::new(Line::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap()));
        Translate::new(id, Vector2::new(2.0, -1.0))
            .execute(&mut drawing)
            .unwrap();
        let expected: Curve = Line::new(p(2.0, -1.0), p(3.0, 0.0)).unwrap().into();
        assert_eq!(drawing.curve(id).unwrap(), &expected);
    }

    #[test]
    fn translate_keeps_ellipse_shape() {
        let mut drawing = Drawing::new();
        let ellipse = Ellipse::new(p(0.0, 0.0), p(3.0, 0.0), p(0.0, 2.0)).unwrap();
        let id = drawing.add(CurveData::new(ellipse));
        Translate::new(id, Vector2::new(1.0, 1.0))
            .execute(&mut drawing)
            .unwrap();
        let Curve::Ellipse(moved) = drawing.curve(id).unwrap() else {
            panic!("expected ellipse");
        };
        assert_abs_diff_eq!(moved.first_semi_axis(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.second_semi_axis(), 2.0, epsilon = 1e-12);
        assert!(moved.contains(&p(4.0, 1.0)));
    }
}
