//! Fehler der Geometrie-Engine.

use thiserror::Error;

/// Die übergebene affine Transformation ist nicht invertierbar oder nicht endlich.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Transformation ist singulär (Determinante {determinant})")]
    Singular { determinant: f64 },
    #[error("Transformation enthält nicht-endliche Werte: {coefficients:?}")]
    NonFinite { coefficients: [f64; 6] },
}

/// Die Geradengleichung oder die Clip-Box ist entartet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Richtungsvektor ist null (B = D = 0) oder nicht endlich.
    #[error("Gerade ist entartet (B = {b}, D = {d})")]
    DegenerateLine { b: f64, d: f64 },
    /// Box ohne positive Fläche
    #[error("BoundingBox ohne Fläche ({width} x {height})")]
    EmptyBox { width: f64, height: f64 },
}

/// Fehler von `endpoints_in_frame`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
