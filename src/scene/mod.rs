//! In-Memory-Host: Szenengraph mit lokalen Transformationen.
//!
//! Implementiert alle Host-Verträge ohne echtes Dokument. Jedes Element
//! trägt eine Transformation in den Frame seines Parents; Wurzeln bilden
//! direkt auf Client-Koordinaten ab.

mod element;

pub use element::{ElementKind, SceneElement};

use glam::DAffine2;
use indexmap::IndexMap;

use crate::app::events::PointerEvent;
use crate::app::host::{CoordinateProvider, EventWiring, LineStore, ReferenceResolver};
use crate::core::{
    checked_finite, checked_inverse, AnchorSpace, BoundingBox, ClientSpace, EndpointPair,
    FramePoint, LineSpace, ViewportSpace,
};
use crate::shared::{ElementId, HostError, LineId, TangentError};

/// Registrierter Listener: (Observer, Event-Typ, Linie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub observer: ElementId,
    pub kind: String,
    pub line: LineId,
}

/// Headless-Szenengraph.
#[derive(Debug, Default)]
pub struct Scene {
    elements: IndexMap<ElementId, SceneElement>,
    listeners: Vec<Listener>,
    styles: Vec<String>,
    next_id: u64,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(
        &mut self,
        parent: Option<ElementId>,
        local: DAffine2,
        kind: ElementKind,
    ) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements
            .insert(id, SceneElement::new(id, parent, local, kind));
        id
    }

    pub fn add_group(&mut self, parent: Option<ElementId>, local: DAffine2) -> ElementId {
        self.insert(parent, local, ElementKind::Group)
    }

    pub fn add_viewport(
        &mut self,
        parent: Option<ElementId>,
        local: DAffine2,
        view_box: BoundingBox<ViewportSpace>,
    ) -> ElementId {
        self.insert(parent, local, ElementKind::Viewport { view_box })
    }

    pub fn add_line(&mut self, parent: Option<ElementId>, local: DAffine2) -> ElementId {
        self.insert(parent, local, SceneElement::line_kind())
    }

    pub fn add_anchor(
        &mut self,
        parent: Option<ElementId>,
        local: DAffine2,
        bounds: BoundingBox<AnchorSpace>,
    ) -> ElementId {
        self.insert(parent, local, ElementKind::Anchor { bounds })
    }

    /// Vergibt eine Dokument-ID für `#id`-Referenzen.
    pub fn set_name(&mut self, element: ElementId, name: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.name = Some(name.to_string());
        }
    }

    pub fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Ersetzt die lokale Transformation (z.B. Zoom einer Gruppe).
    pub fn set_local(&mut self, element: ElementId, local: DAffine2) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.local = local;
        }
    }

    pub fn element(&self, element: ElementId) -> Option<&SceneElement> {
        self.elements.get(&element)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Linien, die auf `observer` für `kind` lauschen.
    pub fn listeners_on(&self, observer: ElementId, kind: &str) -> Vec<LineId> {
        self.listeners
            .iter()
            .filter(|l| l.observer == observer && l.kind == kind)
            .map(|l| l.line)
            .collect()
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    fn get(&self, element: ElementId) -> Result<&SceneElement, HostError> {
        self.elements
            .get(&element)
            .ok_or(HostError::UnknownElement(element))
    }

    /// Kumulierte Transformation lokaler Frame → Client.
    pub fn ctm(&self, element: ElementId) -> Result<DAffine2, HostError> {
        let mut affine = DAffine2::IDENTITY;
        let mut current = Some(element);
        while let Some(id) = current {
            let el = self.get(id)?;
            affine = el.local * affine;
            current = el.parent;
        }
        Ok(affine)
    }

    /// Bildet einen lokalen Punkt eines Elements auf Client-Koordinaten ab.
    pub fn to_client(
        &self,
        element: ElementId,
        x: f64,
        y: f64,
    ) -> Result<FramePoint<ClientSpace>, HostError> {
        let p = self.ctm(element)?.transform_point2(glam::DVec2::new(x, y));
        Ok(FramePoint::from_vec(p))
    }

    /// Baut ein Pointer-Event an einem lokalen Punkt von `at`.
    pub fn pointer_event(
        &self,
        observer: ElementId,
        target: ElementId,
        at: ElementId,
        x: f64,
        y: f64,
    ) -> Result<PointerEvent, HostError> {
        Ok(PointerEvent::new(observer, target, self.to_client(at, x, y)?))
    }
}

impl CoordinateProvider for Scene {
    fn screen_transform(&self, element: ElementId) -> Result<DAffine2, TangentError> {
        Ok(self.ctm(element)?)
    }

    fn transform_between(&self, from: ElementId, to: ElementId) -> Result<DAffine2, TangentError> {
        let from_client = checked_finite(self.ctm(from)?)?;
        Ok(checked_inverse(self.ctm(to)?)? * from_client)
    }

    fn viewport_of(
        &self,
        element: ElementId,
    ) -> Result<(ElementId, BoundingBox<ViewportSpace>), HostError> {
        let mut current = self.get(element)?.parent;
        while let Some(id) = current {
            let el = self.get(id)?;
            if let ElementKind::Viewport { view_box } = el.kind {
                return Ok((id, view_box));
            }
            current = el.parent;
        }
        Err(HostError::NoViewport(element))
    }

    fn anchor_bounds(&self, anchor: ElementId) -> Result<BoundingBox<AnchorSpace>, HostError> {
        match self.get(anchor)?.kind {
            ElementKind::Anchor { bounds } => Ok(bounds),
            _ => Err(HostError::NotAnAnchor(anchor)),
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }
}

impl LineStore for Scene {
    fn read_endpoints(&self, line: ElementId) -> Result<EndpointPair<LineSpace>, HostError> {
        match self.get(line)?.kind {
            ElementKind::Line { endpoints } => Ok(endpoints),
            _ => Err(HostError::NotALine(line)),
        }
    }

    fn write_endpoints(
        &mut self,
        line: ElementId,
        endpoints: EndpointPair<LineSpace>,
    ) -> Result<(), HostError> {
        let el = self
            .elements
            .get_mut(&line)
            .ok_or(HostError::UnknownElement(line))?;
        match &mut el.kind {
            ElementKind::Line { endpoints: stored } => {
                *stored = endpoints;
                Ok(())
            }
            _ => Err(HostError::NotALine(line)),
        }
    }

    fn read_attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(&element)
            .and_then(|el| el.attributes.get(name).cloned())
    }
}

impl ReferenceResolver for Scene {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .values()
            .find(|el| el.name.as_deref() == Some(id))
            .map(|el| el.id)
    }
}

impl EventWiring for Scene {
    fn add_listener(&mut self, observer: ElementId, kind: &str, line: LineId) {
        self.listeners.push(Listener {
            observer,
            kind: kind.to_string(),
            line,
        });
    }

    fn remove_listener(&mut self, observer: ElementId, kind: &str, line: LineId) {
        self.listeners
            .retain(|l| !(l.observer == observer && l.kind == kind && l.line == line));
    }

    fn inject_style(&mut self, rule: &str) {
        if !self.styles.iter().any(|s| s == rule) {
            self.styles.push(rule.to_string());
        }
    }
}
