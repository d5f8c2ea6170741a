//! Steigungs- und Kurvenquellen einer Linie.

use std::fmt;

use crate::shared::{ConfigurationError, ElementId};

/// Reine Funktion `f(x)`, vom Aufrufer geliefert (Kurve oder Ableitung).
pub type CurveFn = Box<dyn Fn(f64) -> f64>;

/// Quelle der Steigung, einmal beim Konfigurieren aufgelöst.
pub enum SlopeSource {
    /// Feste Steigung aus dem deklarierten Attribut
    Fixed(f64),
    /// Ableitung, ausgewertet an `point.x`
    Derivative(CurveFn),
}

impl SlopeSource {
    /// Löst die Steigungsquelle auf: Ableitungsfunktion hat Vorrang, sonst
    /// wird das deklarierte Attribut als Zahl gelesen.
    pub fn resolve(
        line: ElementId,
        derivative: Option<CurveFn>,
        declared: Option<String>,
        attribute: &str,
    ) -> Result<Self, ConfigurationError> {
        if let Some(derivative) = derivative {
            return Ok(Self::Derivative(derivative));
        }
        let Some(value) = declared else {
            return Err(ConfigurationError::MissingSlope {
                line,
                attribute: attribute.to_string(),
            });
        };
        match value.trim().parse::<f64>() {
            Ok(slope) if slope.is_finite() => Ok(Self::Fixed(slope)),
            _ => Err(ConfigurationError::InvalidSlope {
                line,
                attribute: attribute.to_string(),
                value,
            }),
        }
    }

    /// Steigung an der Stelle `x`.
    pub fn slope_at(&self, x: f64) -> f64 {
        match self {
            Self::Fixed(slope) => *slope,
            Self::Derivative(derivative) => derivative(x),
        }
    }
}

impl fmt::Debug for SlopeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(slope) => f.debug_tuple("Fixed").field(slope).finish(),
            Self::Derivative(_) => f.write_str("Derivative(..)"),
        }
    }
}
