//! Verträge zum Host-Dokument.
//!
//! Der Host liefert Transformationen zwischen Elementen, den umgebenden
//! Viewport, Attribute und die persistierten Endpunkte einer Linie. Die
//! Engine berechnet selbst keine Transformationen, sie verkettet und
//! invertiert nur, was der Host liefert.

use glam::DAffine2;

use crate::core::{AnchorSpace, BoundingBox, EndpointPair, LineSpace, ViewportSpace};
use crate::shared::{ElementId, HostError, LineId, TangentError};

/// Fragment-Marker, mit dem lokale Referenzen beginnen (`#plot`).
pub const FRAGMENT_MARKER: char = '#';

/// Koordinaten- und Transformations-Orakel des Hosts.
pub trait CoordinateProvider {
    /// Lokaler Frame des Elements → Client-Koordinaten.
    fn screen_transform(&self, element: ElementId) -> Result<DAffine2, TangentError>;

    /// Lokaler Frame von `from` → lokaler Frame von `to`.
    fn transform_between(&self, from: ElementId, to: ElementId)
        -> Result<DAffine2, TangentError>;

    /// Nächstes umgebendes Viewport-Element samt achsenparalleler Box in dessen Frame.
    fn viewport_of(
        &self,
        element: ElementId,
    ) -> Result<(ElementId, BoundingBox<ViewportSpace>), HostError>;

    /// Bounding-Box eines Anker-Elements in dessen lokalem Frame.
    fn anchor_bounds(&self, anchor: ElementId) -> Result<BoundingBox<AnchorSpace>, HostError>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;
}

/// Persistierte Darstellung einer Linie: zwei Endpunkte plus Attribute.
pub trait LineStore {
    fn read_endpoints(&self, line: ElementId) -> Result<EndpointPair<LineSpace>, HostError>;

    /// Schreibt beide Endpunkte in einem Schritt.
    fn write_endpoints(
        &mut self,
        line: ElementId,
        endpoints: EndpointPair<LineSpace>,
    ) -> Result<(), HostError>;

    fn read_attribute(&self, element: ElementId, name: &str) -> Option<String>;
}

/// Löst lokale Dokument-IDs (ohne Fragment-Marker) auf.
pub trait ReferenceResolver {
    fn element_by_id(&self, id: &str) -> Option<ElementId>;
}

/// Event-Verdrahtung und dekorative Styles.
pub trait EventWiring {
    fn add_listener(&mut self, observer: ElementId, kind: &str, line: LineId);

    fn remove_listener(&mut self, observer: ElementId, kind: &str, line: LineId);

    fn inject_style(&mut self, rule: &str);
}

/// Alles, was der Controller vom Host braucht.
pub trait Host: CoordinateProvider + LineStore + ReferenceResolver + EventWiring {}

impl<T> Host for T where T: CoordinateProvider + LineStore + ReferenceResolver + EventWiring {}

/// Löst eine Referenz der Form `#id` auf. Ohne Fragment-Marker → `None`.
pub fn resolve_reference<R: ReferenceResolver + ?Sized>(
    resolver: &R,
    reference: &str,
) -> Option<ElementId> {
    let id = reference.trim().strip_prefix(FRAGMENT_MARKER)?;
    if id.is_empty() {
        return None;
    }
    resolver.element_by_id(id)
}
