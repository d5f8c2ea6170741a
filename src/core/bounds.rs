//! Achsenparallele Clip-Box.

use std::marker::PhantomData;

use super::error::GeometryError;
use super::frame::FramePoint;

/// Achsenparalleles Rechteck `(x, y, width, height)` im Frame `F`.
#[derive(Debug, PartialEq)]
pub struct BoundingBox<F> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    frame: PhantomData<F>,
}

impl<F> Clone for BoundingBox<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BoundingBox<F> {}

impl<F> BoundingBox<F> {
    /// Erstellt eine Box ohne Validierung.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            frame: PhantomData,
        }
    }

    /// Rechte Kante (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Untere Kante (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> FramePoint<F> {
        FramePoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Prüft, dass die Box endlich ist und positive Fläche hat.
    ///
    /// Boxen mit Breite oder Höhe `<= 0` werden abgelehnt, bevor geclippt wird.
    pub fn validated(self) -> Result<Self, GeometryError> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::EmptyBox {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::ViewportSpace;

    #[test]
    fn test_validated_accepts_positive_area() {
        let b = BoundingBox::<ViewportSpace>::new(-5.0, 2.0, 10.0, 0.5);
        assert!(b.validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_zero_and_negative_extent() {
        for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 4.0), (f64::NAN, 1.0)] {
            let b = BoundingBox::<ViewportSpace>::new(0.0, 0.0, w, h);
            assert!(matches!(
                b.validated(),
                Err(GeometryError::EmptyBox { .. })
            ));
        }
    }

    #[test]
    fn test_center_and_edges() {
        let b = BoundingBox::<ViewportSpace>::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), FramePoint::new(25.0, 40.0));
    }
}
