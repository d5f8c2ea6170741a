//! Intent- und Command-Enums für den Pointer→Endpunkt-Datenfluss.

use crate::core::{ClientSpace, EndpointPair, FramePoint, LineSpace};
use crate::shared::{ElementId, LineId, TangentError};

/// Rohes Pointer-Event vom Host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Element, auf dem der Listener registriert ist
    pub observer: ElementId,
    /// Element, von dem das Event ausging (z.B. ein Anker)
    pub target: ElementId,
    /// Pointer-Position in Client-Koordinaten
    pub client: FramePoint<ClientSpace>,
}

impl PointerEvent {
    pub fn new(observer: ElementId, target: ElementId, client: FramePoint<ClientSpace>) -> Self {
        Self {
            observer,
            target,
            client,
        }
    }
}

/// Intents sind Eingaben aus dem Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum LineIntent {
    /// Pointer hat sich über einem Trigger-Element bewegt
    PointerMoved { kind: String, event: PointerEvent },
    /// Linie soll nicht mehr auf Events reagieren
    DetachRequested { line: LineId },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, Copy)]
pub enum LineCommand {
    /// Beide Endpunkte einer Linie in einem Schritt schreiben
    ApplyEndpoints {
        element: ElementId,
        endpoints: EndpointPair<LineSpace>,
    },
    /// Listener einer Linie entfernen und Eintrag verwerfen
    Detach { line: LineId },
}

/// Ergebnis der Verarbeitung für eine Linie.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Endpunkte wurden geschrieben
    Applied {
        line: LineId,
        endpoints: EndpointPair<LineSpace>,
    },
    /// Update verworfen, Linie unverändert
    Rejected { line: LineId, error: TangentError },
    /// Linie war noch im Zustand `Updating`; Event ignoriert
    Busy { line: LineId },
    /// Linie wurde abgemeldet
    Detached { line: LineId },
}

impl UpdateOutcome {
    pub fn line(&self) -> LineId {
        match self {
            Self::Applied { line, .. }
            | Self::Rejected { line, .. }
            | Self::Busy { line }
            | Self::Detached { line } => *line,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
