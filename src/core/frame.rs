//! Koordinatensysteme als Marker-Typen plus frame-getypte Punkte und Transformationen.
//!
//! Jeder Punkt trägt sein Koordinatensystem im Typ. Eine Transformation
//! `FrameTransform<Src, Dst>` akzeptiert nur Punkte aus `Src` und liefert
//! Punkte in `Dst`; Verkettung ist nur erlaubt, wenn die inneren Frames passen.

use std::marker::PhantomData;
use std::ops::Mul;

use glam::{DAffine2, DVec2};

use super::error::TransformError;

/// Lokales Koordinatensystem der Tangenten-Linie (Frame der Endpunkt-Attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpace {}

/// Koordinatensystem des Viewports, in dem die BoundingBox achsenparallel ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSpace {}

/// Client-/Bildschirm-Koordinaten der Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientSpace {}

/// Lokales Koordinatensystem eines Anker-Elements (Drag-Handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSpace {}

/// Punkt in einem explizit getypten Koordinatensystem.
#[derive(Debug, PartialEq)]
pub struct FramePoint<F> {
    /// Rohe Koordinaten
    pub pos: DVec2,
    frame: PhantomData<F>,
}

impl<F> Clone for FramePoint<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FramePoint<F> {}

impl<F> FramePoint<F> {
    /// Erstellt einen Punkt aus x/y.
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_vec(DVec2::new(x, y))
    }

    /// Erstellt einen Punkt aus einem glam-Vektor.
    pub fn from_vec(pos: DVec2) -> Self {
        Self {
            pos,
            frame: PhantomData,
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Ersetzt die y-Koordinate (Kurven-Snapping).
    pub fn with_y(self, y: f64) -> Self {
        Self::new(self.pos.x, y)
    }
}

/// Affine Transformation von `Src` nach `Dst`.
///
/// Die sechs Skalare `(a, b, c, d, e, f)` bilden ab als
/// `(x', y') = (a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, PartialEq)]
pub struct FrameTransform<Src, Dst> {
    affine: DAffine2,
    frames: PhantomData<(Src, Dst)>,
}

impl<Src, Dst> Clone for FrameTransform<Src, Dst> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Src, Dst> Copy for FrameTransform<Src, Dst> {}

impl<Src, Dst> FrameTransform<Src, Dst> {
    /// Umhüllt eine rohe glam-Transformation.
    pub fn from_affine(affine: DAffine2) -> Self {
        Self {
            affine,
            frames: PhantomData,
        }
    }

    /// Umhüllt eine Host-Transformation, sofern alle Skalare endlich sind.
    pub fn checked(affine: DAffine2) -> Result<Self, TransformError> {
        checked_finite(affine).map(Self::from_affine)
    }

    /// Erstellt die Transformation aus den sechs Matrix-Skalaren.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self::from_affine(DAffine2::from_cols_array(&[a, b, c, d, e, f]))
    }

    /// Liefert die sechs Skalare `[a, b, c, d, e, f]`.
    pub fn coefficients(&self) -> [f64; 6] {
        self.affine.to_cols_array()
    }

    pub fn affine(&self) -> DAffine2 {
        self.affine
    }

    /// Bildet einen Punkt aus `Src` nach `Dst` ab.
    pub fn apply(&self, point: FramePoint<Src>) -> FramePoint<Dst> {
        FramePoint::from_vec(self.affine.transform_point2(point.pos))
    }

    /// Invertiert die Transformation.
    ///
    /// Schlägt fehl, wenn ein Skalar nicht endlich ist oder die lineare
    /// 2×2-Matrix singulär ist.
    pub fn inverse(&self) -> Result<FrameTransform<Dst, Src>, TransformError> {
        checked_inverse(self.affine).map(FrameTransform::from_affine)
    }
}

impl<F> FrameTransform<F, F> {
    /// Identität innerhalb eines Frames.
    pub fn identity() -> Self {
        Self::from_affine(DAffine2::IDENTITY)
    }
}

/// Lässt nur Transformationen mit endlichen Skalaren durch.
pub fn checked_finite(affine: DAffine2) -> Result<DAffine2, TransformError> {
    if !affine.is_finite() {
        return Err(TransformError::NonFinite {
            coefficients: affine.to_cols_array(),
        });
    }
    Ok(affine)
}

/// Invertiert eine rohe affine Transformation mit Prüfung auf Singularität.
pub fn checked_inverse(affine: DAffine2) -> Result<DAffine2, TransformError> {
    let affine = checked_finite(affine)?;
    let determinant = affine.matrix2.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(TransformError::Singular { determinant });
    }
    let inverse = affine.inverse();
    if !inverse.is_finite() {
        return Err(TransformError::Singular { determinant });
    }
    Ok(inverse)
}

/// `(B → C) * (A → B) = (A → C)`: rechter Operand wird zuerst angewendet.
impl<A, B, C> Mul<FrameTransform<A, B>> for FrameTransform<B, C> {
    type Output = FrameTransform<A, C>;

    fn mul(self, rhs: FrameTransform<A, B>) -> Self::Output {
        FrameTransform::from_affine(self.affine * rhs.affine)
    }
}
