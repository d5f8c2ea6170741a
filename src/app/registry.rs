//! Registry aller verdrahteten Tangenten-Linien.
//!
//! Wird beim Installieren erzeugt und beim Zerstören der Host-Ansicht per
//! [`LineRegistry::teardown`] abgebaut. Jede Linie besitzt ihren Zustand
//! exklusiv; Linien teilen sich nichts.

use indexmap::IndexMap;

use super::host::EventWiring;
use super::slope::{CurveFn, SlopeSource};
use crate::shared::{ElementId, LineId, TangentOptions};

/// Deklaration einer Linie vor dem Auflösen.
///
/// Referenzen sind lokale Dokument-Referenzen mit Fragment-Marker (`#tangent`).
pub struct LineSpec {
    /// Referenz auf das Linien-Element
    pub line: String,
    /// Referenz auf das Trigger-Element; `None` = umgebender Viewport der Linie
    pub trigger: Option<String>,
    /// Ableitungsfunktion; ohne sie wird das Steigungs-Attribut gelesen
    pub derivative: Option<CurveFn>,
    /// Kurve, auf deren y-Wert der aufgelöste Punkt eingerastet wird
    pub curve: Option<CurveFn>,
}

impl LineSpec {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            trigger: None,
            derivative: None,
            curve: None,
        }
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn with_derivative(mut self, derivative: impl Fn(f64) -> f64 + 'static) -> Self {
        self.derivative = Some(Box::new(derivative));
        self
    }

    pub fn with_curve(mut self, curve: impl Fn(f64) -> f64 + 'static) -> Self {
        self.curve = Some(Box::new(curve));
        self
    }
}

/// Zustand einer Linie während der Event-Verarbeitung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePhase {
    /// Keine Berechnung aktiv
    #[default]
    Idle,
    /// Ein Event wird gerade verarbeitet
    Updating,
}

/// Aufgelöste, verdrahtete Linie.
pub struct LineEntry {
    /// Linien-Element im Host
    pub element: ElementId,
    /// Element, auf dem die Listener registriert sind
    pub observer: ElementId,
    pub slope: SlopeSource,
    pub curve: Option<CurveFn>,
    phase: LinePhase,
}

impl LineEntry {
    pub fn new(
        element: ElementId,
        observer: ElementId,
        slope: SlopeSource,
        curve: Option<CurveFn>,
    ) -> Self {
        Self {
            element,
            observer,
            slope,
            curve,
            phase: LinePhase::Idle,
        }
    }

    pub fn phase(&self) -> LinePhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: LinePhase) {
        self.phase = phase;
    }
}

impl std::fmt::Debug for LineEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEntry")
            .field("element", &self.element)
            .field("observer", &self.observer)
            .field("slope", &self.slope)
            .field("curve", &self.curve.as_ref().map(|_| ".."))
            .field("phase", &self.phase)
            .finish()
    }
}

/// Explizite Registry statt globalem Dokument-Scan.
#[derive(Debug, Default)]
pub struct LineRegistry {
    options: TangentOptions,
    lines: IndexMap<LineId, LineEntry>,
    next_id: u64,
}

impl LineRegistry {
    /// Erstellt eine leere Registry.
    pub fn new(options: TangentOptions) -> Self {
        Self {
            options,
            lines: IndexMap::new(),
            next_id: 1,
        }
    }

    pub fn options(&self) -> &TangentOptions {
        &self.options
    }

    /// Fügt eine Linie hinzu und vergibt eine neue `LineId`.
    pub fn insert(&mut self, entry: LineEntry) -> LineId {
        let id = LineId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.lines.insert(id, entry);
        id
    }

    pub fn get(&self, id: LineId) -> Option<&LineEntry> {
        self.lines.get(&id)
    }

    pub fn get_mut(&mut self, id: LineId) -> Option<&mut LineEntry> {
        self.lines.get_mut(&id)
    }

    /// Entfernt eine Linie aus der Registry (Listener bleiben unberührt).
    pub fn remove(&mut self, id: LineId) -> Option<LineEntry> {
        self.lines.shift_remove(&id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.keys().copied()
    }

    /// Linien, die auf `observer` für den Event-Typ `kind` lauschen,
    /// in Registrierungsreihenfolge.
    pub fn lines_for(&self, observer: ElementId, kind: &str) -> Vec<LineId> {
        if !self.options.listens_to(kind) {
            return Vec::new();
        }
        self.lines
            .iter()
            .filter(|(_, entry)| entry.observer == observer)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Entfernt die Listener einer Linie beim Host.
    pub fn unwire<W: EventWiring + ?Sized>(&self, host: &mut W, id: LineId) {
        if let Some(entry) = self.lines.get(&id) {
            for kind in &self.options.event_types {
                host.remove_listener(entry.observer, kind, id);
            }
        }
    }

    /// Baut alle Listener ab und verwirft die Registry.
    pub fn teardown<W: EventWiring + ?Sized>(self, host: &mut W) {
        for id in self.ids() {
            self.unwire(host, id);
        }
        log::info!("Tangenten-Registry abgebaut ({} Linien)", self.lines.len());
    }
}
