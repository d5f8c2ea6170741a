//! Geradengleichungen in Parameter- und Normalform plus Box-Clipping.

use std::marker::PhantomData;

use glam::{DAffine2, DMat2, DVec2};

use super::bounds::BoundingBox;
use super::error::GeometryError;
use super::frame::{FramePoint, FrameTransform};

/// Gerade in Parameterform, gespeichert als affine Matrix.
///
/// Erste Spalte = Richtungsvektor, Translation = Aufpunkt. Angewendet auf
/// `(t, 0, 1)` liefert sie den Geradenpunkt zum Parameter `t`.
#[derive(Debug, PartialEq)]
pub struct ParametricLine<F> {
    affine: DAffine2,
    frame: PhantomData<F>,
}

impl<F> Clone for ParametricLine<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ParametricLine<F> {}

impl<F> ParametricLine<F> {
    /// Gerade durch `point` mit Steigung `slope`: Richtung `(1, slope)`.
    pub fn through(point: FramePoint<F>, slope: f64) -> Self {
        Self::from_affine(DAffine2::from_mat2_translation(
            DMat2::from_cols(DVec2::new(1.0, slope), DVec2::Y),
            point.pos,
        ))
    }

    fn from_affine(affine: DAffine2) -> Self {
        Self {
            affine,
            frame: PhantomData,
        }
    }

    pub fn direction(&self) -> DVec2 {
        self.affine.matrix2.x_axis
    }

    pub fn base_point(&self) -> FramePoint<F> {
        FramePoint::from_vec(self.affine.translation)
    }

    /// Punkt zum Parameter `t`.
    pub fn point_at(&self, t: f64) -> FramePoint<F> {
        FramePoint::from_vec(self.affine.transform_point2(DVec2::new(t, 0.0)))
    }

    /// Überführt die Gerade in einen anderen Frame.
    pub fn map<G>(&self, transform: &FrameTransform<F, G>) -> ParametricLine<G> {
        ParametricLine::from_affine(transform.affine() * self.affine)
    }

    /// Normalform: mit Richtung `(a, b)` und Aufpunkt `(e, f)` gilt
    /// `B = b`, `D = -a`, `F = a·f - b·e`.
    pub fn to_general(&self) -> Result<GeneralLine<F>, GeometryError> {
        let DVec2 { x: a, y: b } = self.direction();
        let DVec2 { x: e, y: f } = self.affine.translation;
        GeneralLine::new(b, -a, a * f - b * e)
    }
}

/// Gerade in Normalform `B·x + D·y + F = 0`.
#[derive(Debug, PartialEq)]
pub struct GeneralLine<Fr> {
    pub b: f64,
    pub d: f64,
    pub f: f64,
    frame: PhantomData<Fr>,
}

impl<Fr> Clone for GeneralLine<Fr> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Fr> Copy for GeneralLine<Fr> {}

impl<Fr> GeneralLine<Fr> {
    /// Erstellt die Normalform; `B = D = 0` oder nicht-endliche Werte sind entartet.
    pub fn new(b: f64, d: f64, f: f64) -> Result<Self, GeometryError> {
        let finite = b.is_finite() && d.is_finite() && f.is_finite();
        if !finite || (b == 0.0 && d == 0.0) {
            return Err(GeometryError::DegenerateLine { b, d });
        }
        Ok(Self {
            b,
            d,
            f,
            frame: PhantomData,
        })
    }

    /// Wert von `B·x + D·y + F` am Punkt (0 = auf der Geraden).
    pub fn residual(&self, point: FramePoint<Fr>) -> f64 {
        self.b * point.x() + self.d * point.y() + self.f
    }

    /// Schneidet die Gerade mit dem Kantenpaar der Box, dessen Auflösung durch
    /// den betragsmäßig größeren Koeffizienten teilt.
    ///
    /// `height·|D| < width·|B|` → obere/untere Kante, sonst linke/rechte Kante.
    pub fn intersect_box(
        &self,
        bounds: &BoundingBox<Fr>,
    ) -> Result<EndpointPair<Fr>, GeometryError> {
        let bounds = bounds.validated()?;
        let pair = match self.clip_edges(&bounds) {
            ClipEdges::TopBottom => {
                let x_at = |y: f64| -(self.d * y + self.f) / self.b;
                EndpointPair::new(
                    FramePoint::new(x_at(bounds.y), bounds.y),
                    FramePoint::new(x_at(bounds.bottom()), bounds.bottom()),
                )
            }
            ClipEdges::LeftRight => {
                let y_at = |x: f64| -(self.b * x + self.f) / self.d;
                EndpointPair::new(
                    FramePoint::new(bounds.x, y_at(bounds.x)),
                    FramePoint::new(bounds.right(), y_at(bounds.right())),
                )
            }
        };
        Ok(pair)
    }

    /// Welche Kanten hat `intersect_box` für diese Box gewählt?
    pub fn clip_edges(&self, bounds: &BoundingBox<Fr>) -> ClipEdges {
        if bounds.height * self.d.abs() < bounds.width * self.b.abs() {
            ClipEdges::TopBottom
        } else {
            ClipEdges::LeftRight
        }
    }
}

/// Kantenpaar, gegen das geclippt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipEdges {
    /// `y = box.y` und `y = box.y + height`
    TopBottom,
    /// `x = box.x` und `x = box.x + width`
    LeftRight,
}

/// Genau zwei Endpunkte im Frame `F`.
#[derive(Debug, PartialEq)]
pub struct EndpointPair<F> {
    pub first: FramePoint<F>,
    pub second: FramePoint<F>,
}

impl<F> Clone for EndpointPair<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for EndpointPair<F> {}

impl<F> EndpointPair<F> {
    pub fn new(first: FramePoint<F>, second: FramePoint<F>) -> Self {
        Self { first, second }
    }

    /// Bildet beide Punkte gemeinsam in einen anderen Frame ab.
    pub fn map<G>(&self, transform: &FrameTransform<F, G>) -> EndpointPair<G> {
        EndpointPair::new(transform.apply(self.first), transform.apply(self.second))
    }

    /// Rohe Koordinaten `[first, second]`.
    pub fn to_array(&self) -> [DVec2; 2] {
        [self.first.pos, self.second.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::{LineSpace, ViewportSpace};
    use approx::assert_relative_eq;

    #[test]
    fn test_parametric_columns() {
        let line = ParametricLine::<LineSpace>::through(FramePoint::new(2.0, 3.0), 0.5);
        assert_eq!(line.direction(), DVec2::new(1.0, 0.5));
        assert_eq!(line.base_point(), FramePoint::new(2.0, 3.0));
        let p = line.point_at(4.0);
        assert_relative_eq!(p.x(), 6.0);
        assert_relative_eq!(p.y(), 5.0);
    }

    #[test]
    fn test_to_general_coefficients() {
        let line = ParametricLine::<LineSpace>::through(FramePoint::new(2.0, 3.0), 0.5);
        let general = line.to_general().unwrap();
        // a=1, b=0.5, e=2, f=3
        assert_relative_eq!(general.b, 0.5);
        assert_relative_eq!(general.d, -1.0);
        assert_relative_eq!(general.f, 3.0 - 1.0);
        assert_relative_eq!(general.residual(line.point_at(-7.5)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_direction_is_rejected() {
        let zero: FrameTransform<LineSpace, ViewportSpace> =
            FrameTransform::from_coefficients(0.0, 0.0, 0.0, 0.0, 1.0, 1.0);
        let line =
            ParametricLine::<LineSpace>::through(FramePoint::new(0.0, 0.0), 2.0).map(&zero);
        assert!(matches!(
            line.to_general(),
            Err(GeometryError::DegenerateLine { .. })
        ));
    }

    #[test]
    fn test_non_finite_slope_is_degenerate() {
        let line =
            ParametricLine::<LineSpace>::through(FramePoint::new(0.0, 0.0), f64::INFINITY);
        assert!(line.to_general().is_err());
    }

    #[test]
    fn test_horizontal_line_clips_left_right() {
        let general = GeneralLine::<ViewportSpace>::new(0.0, -1.0, 4.0).unwrap();
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(general.clip_edges(&bounds), ClipEdges::LeftRight);
        let pair = general.intersect_box(&bounds).unwrap();
        assert_eq!(pair.first, FramePoint::new(0.0, 4.0));
        assert_eq!(pair.second, FramePoint::new(10.0, 4.0));
    }

    #[test]
    fn test_vertical_line_clips_top_bottom() {
        // x = 3  →  1·x + 0·y - 3 = 0
        let general = GeneralLine::<ViewportSpace>::new(1.0, 0.0, -3.0).unwrap();
        let bounds = BoundingBox::new(0.0, -5.0, 10.0, 10.0);
        assert_eq!(general.clip_edges(&bounds), ClipEdges::TopBottom);
        let pair = general.intersect_box(&bounds).unwrap();
        assert_eq!(pair.first, FramePoint::new(3.0, -5.0));
        assert_eq!(pair.second, FramePoint::new(3.0, 5.0));
    }

    #[test]
    fn test_shallow_line_in_wide_box_uses_left_right_edges() {
        let line = ParametricLine::<ViewportSpace>::through(FramePoint::new(50.0, 5.0), 0.05);
        let general = line.to_general().unwrap();
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 10.0);
        // height·|D| = 10 ≥ width·|B| = 5
        assert_eq!(general.clip_edges(&bounds), ClipEdges::LeftRight);
        let pair = general.intersect_box(&bounds).unwrap();
        assert_relative_eq!(pair.first.x(), 0.0);
        assert_relative_eq!(pair.second.x(), 100.0);
        assert_relative_eq!(pair.first.y(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(pair.second.y(), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_steep_line_in_wide_box_uses_top_bottom_edges() {
        let line = ParametricLine::<ViewportSpace>::through(FramePoint::new(50.0, 5.0), 4.0);
        let general = line.to_general().unwrap();
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 10.0);
        assert_eq!(general.clip_edges(&bounds), ClipEdges::TopBottom);
        let pair = general.intersect_box(&bounds).unwrap();
        assert_relative_eq!(pair.first.y(), 0.0);
        assert_relative_eq!(pair.second.y(), 10.0);
        assert_relative_eq!(pair.first.x(), 48.75, epsilon = 1e-12);
        assert_relative_eq!(pair.second.x(), 51.25, epsilon = 1e-12);
    }

    #[test]
    fn test_intersection_follows_chosen_edges() {
        let bounds = BoundingBox::<ViewportSpace>::new(-3.0, 1.0, 12.0, 6.0);
        for slope in [-40.0, -0.5, 0.0, 0.49, 0.51, 2.0, 1e6] {
            let general = ParametricLine::through(FramePoint::new(2.0, 3.0), slope)
                .to_general()
                .unwrap();
            let pair = general.intersect_box(&bounds).unwrap();
            match general.clip_edges(&bounds) {
                ClipEdges::TopBottom => {
                    assert_eq!((pair.first.y(), pair.second.y()), (1.0, 7.0));
                }
                ClipEdges::LeftRight => {
                    assert_eq!((pair.first.x(), pair.second.x()), (-3.0, 9.0));
                }
            }
        }
    }

    #[test]
    fn test_empty_box_fails_fast() {
        let general = GeneralLine::<ViewportSpace>::new(1.0, -1.0, 0.0).unwrap();
        let flat = BoundingBox::new(0.0, 0.0, 10.0, 0.0);
        assert!(matches!(
            general.intersect_box(&flat),
            Err(GeometryError::EmptyBox { .. })
        ));
    }
}
