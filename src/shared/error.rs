//! Fehler des Interaktions-Layers und Sammelfehler pro Update.

use thiserror::Error;

use super::ids::ElementId;
use crate::core::{EngineError, GeometryError, TransformError};

/// Linie ist unvollständig konfiguriert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Linie {line} hat weder Ableitungsfunktion noch Attribut '{attribute}'")]
    MissingSlope { line: ElementId, attribute: String },
    #[error("Attribut '{attribute}' von Linie {line} ist keine endliche Zahl: '{value}'")]
    InvalidSlope {
        line: ElementId,
        attribute: String,
        value: String,
    },
    #[error("Referenz '{reference}' ist ungültig oder zeigt auf kein Element")]
    UnresolvedReference { reference: String },
}

/// Host-Abfrage ist fehlgeschlagen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("Element {0} existiert nicht")]
    UnknownElement(ElementId),
    #[error("Element {0} liegt in keinem Viewport")]
    NoViewport(ElementId),
    #[error("Element {0} ist keine Linie")]
    NotALine(ElementId),
    #[error("Element {0} ist kein Anker")]
    NotAnAnchor(ElementId),
}

/// Sammelfehler für einen Update-Durchlauf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TangentError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Host(#[from] HostError),
}

impl From<EngineError> for TangentError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Transform(e) => Self::Transform(e),
            EngineError::Geometry(e) => Self::Geometry(e),
        }
    }
}
