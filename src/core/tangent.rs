//! Tangenten-Endpunkte: Gerade durch Punkt + Steigung, geclippt im Viewport-Frame.
//!
//! Ablauf pro Event:
//! 1. Parameterform im Frame der Linie (`L`)
//! 2. Abbildung in den Viewport-Frame (`V`), in dem die Box achsenparallel ist
//! 3. Normalform und Clipping gegen die Box
//! 4. Rückabbildung beider Schnittpunkte über die Inverse nach `L`

use super::bounds::BoundingBox;
use super::error::{EngineError, GeometryError};
use super::frame::{FramePoint, FrameTransform};
use super::line::{EndpointPair, GeneralLine, ParametricLine};

/// Gerade durch `point` mit Steigung `slope` in Parameterform.
pub fn parametric_equation<F>(point: FramePoint<F>, slope: f64) -> ParametricLine<F> {
    ParametricLine::through(point, slope)
}

/// Parameterform → Normalform `B·x + D·y + F = 0`.
pub fn to_general<F>(parametric: &ParametricLine<F>) -> Result<GeneralLine<F>, GeometryError> {
    parametric.to_general()
}

/// Schnittpunkte der Geraden mit dem Rand der Box.
pub fn intersect_box<F>(
    general: &GeneralLine<F>,
    bounds: &BoundingBox<F>,
) -> Result<EndpointPair<F>, GeometryError> {
    general.intersect_box(bounds)
}

/// Berechnet die beiden Endpunkte der maximalen Strecke durch `point` mit
/// Steigung `slope`, geclippt auf `bounds`.
///
/// `point` und Ergebnis liegen im Frame `L`, `bounds` im Frame `V`;
/// `ambient` bildet `L` nach `V` ab und muss invertierbar sein.
pub fn endpoints_in_frame<L, V>(
    point: FramePoint<L>,
    slope: f64,
    ambient: &FrameTransform<L, V>,
    bounds: &BoundingBox<V>,
) -> Result<EndpointPair<L>, EngineError> {
    // Singuläre Transformation → TransformError, noch vor der Normalform.
    let back = ambient.inverse()?;
    let in_viewport = parametric_equation(point, slope).map(ambient);
    let general = to_general(&in_viewport)?;
    let clipped = intersect_box(&general, bounds)?;
    Ok(clipped.map(&back))
}
