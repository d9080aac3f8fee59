//! Arena owning the curves of a drawing.
use std::fmt;

use slotmap::SlotMap;

use crate::error::DocumentError;
use crate::geometry::Curve;

slotmap::new_key_type! {
    /// Unique identifier for a curve in a [`Drawing`].
    pub struct CurveId;
}

/// Layer tag a curve is drawn on. Derived curves inherit it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer(String);

impl Layer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new("0")
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A curve together with the layer it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub curve: Curve,
    pub layer: Layer,
}

impl CurveData {
    /// Wraps `curve` on the default layer.
    #[must_use]
    pub fn new(curve: impl Into<Curve>) -> Self {
        Self {
            curve: curve.into(),
            layer: Layer::default(),
        }
    }

    #[must_use]
    pub fn on_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }
}

/// Central arena that owns every curve.
///
/// Curves reference each other only through [`CurveId`]s, so edits never
/// alias geometry between curves.
#[derive(Debug, Default)]
pub struct Drawing {
    curves: SlotMap<CurveId, CurveData>,
}

impl Drawing {
    /// Creates an empty drawing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve and returns its ID.
    pub fn add(&mut self, data: CurveData) -> CurveId {
        self.curves.insert(data)
    }

    /// Returns the curve data.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the ID is stale.
    pub fn get(&self, id: CurveId) -> Result<&CurveData, DocumentError> {
        self.curves.get(id).ok_or(DocumentError::CurveNotFound)
    }

    /// Returns the curve data mutably.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the ID is stale.
    pub fn get_mut(&mut self, id: CurveId) -> Result<&mut CurveData, DocumentError> {
        self.curves.get_mut(id).ok_or(DocumentError::CurveNotFound)
    }

    /// Shorthand for the curve behind `id`.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the ID is stale.
    pub fn curve(&self, id: CurveId) -> Result<&Curve, DocumentError> {
        self.get(id).map(|data| &data.curve)
    }

    /// Removes a curve, returning its data.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the ID is stale.
    pub fn remove(&mut self, id: CurveId) -> Result<CurveData, DocumentError> {
        self.curves.remove(id).ok_or(DocumentError::CurveNotFound)
    }

    /// Resolves several IDs at once.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if any ID is stale.
    pub fn curves(&self, ids: &[CurveId]) -> Result<Vec<&Curve>, DocumentError> {
        ids.iter().map(|id| self.curve(*id)).collect()
    }

    #[must_use]
    pub fn contains(&self, id: CurveId) -> bool {
        self.curves.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over every curve and its ID.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &CurveData)> {
        self.curves.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use crate::math::Point2;

    #[test]
    fn add_get_remove() {
        let mut drawing = Drawing::new();
        let circle = Circle::new(Point2::origin(), 1.0).unwrap();
        let id = drawing.add(CurveData::new(circle).on_layer(Layer::new("walls")));
        assert_eq!(drawing.len(), 1);
        assert_eq!(drawing.get(id).unwrap().layer.name(), "walls");

        drawing.remove(id).unwrap();
        assert!(drawing.is_empty());
        assert!(matches!(drawing.get(id), Err(DocumentError::CurveNotFound)));
        assert!(drawing.curves(&[id]).is_err());
    }

    #[test]
    fn default_layer() {
        assert_eq!(Layer::default().to_string(), "0");
    }
}
