//! Elemente des In-Memory-Szenengraphen.

use glam::DAffine2;
use indexmap::IndexMap;

use crate::core::{AnchorSpace, BoundingBox, EndpointPair, FramePoint, LineSpace, ViewportSpace};
use crate::shared::ElementId;

/// Art eines Elements und seine typ-spezifischen Daten.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Reine Gruppierung mit eigener Transformation
    Group,
    /// Begrenzter Viewport; die Box ist in seinem lokalen Frame achsenparallel
    Viewport { view_box: BoundingBox<ViewportSpace> },
    /// Linie mit zwei persistierten Endpunkten im lokalen Frame
    Line { endpoints: EndpointPair<LineSpace> },
    /// Drag-Anker mit Bounding-Box im lokalen Frame
    Anchor { bounds: BoundingBox<AnchorSpace> },
}

/// Knoten im Szenengraphen.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    /// Dokument-ID für `#id`-Referenzen
    pub name: Option<String>,
    pub parent: Option<ElementId>,
    /// Lokaler Frame → Frame des Parents (bzw. Client für Wurzeln)
    pub local: DAffine2,
    pub kind: ElementKind,
    pub classes: Vec<String>,
    pub attributes: IndexMap<String, String>,
}

impl SceneElement {
    pub fn new(
        id: ElementId,
        parent: Option<ElementId>,
        local: DAffine2,
        kind: ElementKind,
    ) -> Self {
        Self {
            id,
            name: None,
            parent,
            local,
            kind,
            classes: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    /// Neue Linie mit beiden Endpunkten im Ursprung.
    pub fn line_kind() -> ElementKind {
        let origin = FramePoint::new(0.0, 0.0);
        ElementKind::Line {
            endpoints: EndpointPair::new(origin, origin),
        }
    }
}
