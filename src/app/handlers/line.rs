//! Handler für Linien-Commands.

use crate::app::host::Host;
use crate::app::registry::LineRegistry;
use crate::core::{EndpointPair, LineSpace};
use crate::shared::{ElementId, LineId, TangentError};

/// Schreibt beide Endpunkte in einem Host-Aufruf.
pub fn apply_endpoints<H: Host + ?Sized>(
    host: &mut H,
    element: ElementId,
    endpoints: EndpointPair<LineSpace>,
) -> Result<(), TangentError> {
    host.write_endpoints(element, endpoints)?;
    log::debug!(
        "Linie {}: ({:.3}, {:.3}) → ({:.3}, {:.3})",
        element,
        endpoints.first.x(),
        endpoints.first.y(),
        endpoints.second.x(),
        endpoints.second.y()
    );
    Ok(())
}

/// Entfernt Listener und Registry-Eintrag einer Linie.
pub fn detach<H: Host + ?Sized>(registry: &mut LineRegistry, host: &mut H, line: LineId) {
    registry.unwire(host, line);
    if registry.remove(line).is_some() {
        log::info!("Linie {} abgemeldet", line);
    }
}
