//! Use-Case-Funktionen: Pointer-Event → Tangenten-Endpunkte.
//!
//! Alles hier liest nur vom Host; geschrieben wird ausschließlich im
//! Command-Handler.

use crate::app::events::PointerEvent;
use crate::app::host::CoordinateProvider;
use crate::app::registry::LineEntry;
use crate::app::slope::CurveFn;
use crate::core::{
    endpoints_in_frame, AnchorSpace, BoundingBox, ClientSpace, EndpointPair, FramePoint,
    FrameTransform, LineSpace, ViewportSpace,
};
use crate::shared::{ElementId, TangentError, TangentOptions};

/// Ermittelt den Punkt im Frame der Linie, der zu einem Pointer-Event gehört.
///
/// Event auf einem Anker → Mittelpunkt des Ankers, abgebildet Anker → Linie.
/// Sonst: Client-Koordinaten über die Inverse der Screen-Transformation der Linie.
pub fn resolve_event_point<H: CoordinateProvider + ?Sized>(
    host: &H,
    line: ElementId,
    event: &PointerEvent,
    anchor_class: &str,
) -> Result<FramePoint<LineSpace>, TangentError> {
    if host.has_class(event.target, anchor_class) {
        let anchor_to_line: FrameTransform<AnchorSpace, LineSpace> =
            FrameTransform::checked(host.transform_between(event.target, line)?)?;
        let center = host.anchor_bounds(event.target)?.center();
        return Ok(anchor_to_line.apply(center));
    }

    let line_to_client: FrameTransform<LineSpace, ClientSpace> =
        FrameTransform::from_affine(host.screen_transform(line)?);
    Ok(line_to_client.inverse()?.apply(event.client))
}

/// Rastet den Punkt auf die Kurve ein: `y = curve(x)`. Ohne Kurve unverändert.
pub fn snap_to_curve(
    point: FramePoint<LineSpace>,
    curve: Option<&CurveFn>,
) -> FramePoint<LineSpace> {
    match curve {
        Some(curve) => point.with_y(curve(point.x())),
        None => point,
    }
}

/// Transformation Linie → umgebender Viewport plus dessen Clip-Box.
pub fn ambient_frame<H: CoordinateProvider + ?Sized>(
    host: &H,
    line: ElementId,
) -> Result<(FrameTransform<LineSpace, ViewportSpace>, BoundingBox<ViewportSpace>), TangentError>
{
    let (viewport, bounds) = host.viewport_of(line)?;
    let ambient = FrameTransform::checked(host.transform_between(line, viewport)?)?;
    Ok((ambient, bounds))
}

/// Kompletter Rechenschritt für eine Linie, ohne Seiteneffekte.
pub fn compute_endpoints<H: CoordinateProvider + ?Sized>(
    host: &H,
    entry: &LineEntry,
    options: &TangentOptions,
    event: &PointerEvent,
) -> Result<EndpointPair<LineSpace>, TangentError> {
    let raw = resolve_event_point(host, entry.element, event, &options.anchor_class)?;
    let point = snap_to_curve(raw, entry.curve.as_ref());
    let slope = entry.slope.slope_at(point.x());
    let (ambient, bounds) = ambient_frame(host, entry.element)?;
    Ok(endpoints_in_frame(point, slope, &ambient, &bounds)?)
}
