//! Controller für zentrale Event-Verarbeitung.

use super::events::{LineCommand, LineIntent, PointerEvent, UpdateOutcome};
use super::handlers;
use super::host::Host;
use super::registry::{LinePhase, LineRegistry};
use super::use_cases;
use crate::shared::{LineId, TangentError};

/// Orchestriert Host-Events und Use-Cases auf der Registry.
///
/// Events werden synchron und vollständig verarbeitet; Fehler verlassen den
/// Controller nie, sondern erscheinen als [`UpdateOutcome::Rejected`].
#[derive(Debug, Default)]
pub struct LineController;

impl LineController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent und liefert ein Ergebnis pro betroffener Linie.
    pub fn handle_intent<H: Host + ?Sized>(
        &mut self,
        registry: &mut LineRegistry,
        host: &mut H,
        intent: LineIntent,
    ) -> Vec<UpdateOutcome> {
        match intent {
            LineIntent::PointerMoved { kind, event } => registry
                .lines_for(event.observer, &kind)
                .into_iter()
                .map(|line| self.update_line(registry, host, line, &event))
                .collect(),
            LineIntent::DetachRequested { line } => {
                match self.handle_command(registry, host, LineCommand::Detach { line }) {
                    Ok(()) => vec![UpdateOutcome::Detached { line }],
                    Err(error) => vec![UpdateOutcome::Rejected { line, error }],
                }
            }
        }
    }

    /// Kurzform für `PointerMoved`.
    pub fn dispatch<H: Host + ?Sized>(
        &mut self,
        registry: &mut LineRegistry,
        host: &mut H,
        kind: &str,
        event: PointerEvent,
    ) -> Vec<UpdateOutcome> {
        self.handle_intent(
            registry,
            host,
            LineIntent::PointerMoved {
                kind: kind.to_string(),
                event,
            },
        )
    }

    /// Führt mutierende Commands auf dem Host aus.
    pub fn handle_command<H: Host + ?Sized>(
        &mut self,
        registry: &mut LineRegistry,
        host: &mut H,
        command: LineCommand,
    ) -> Result<(), TangentError> {
        match command {
            LineCommand::ApplyEndpoints { element, endpoints } => {
                handlers::line::apply_endpoints(host, element, endpoints)?
            }
            LineCommand::Detach { line } => handlers::line::detach(registry, host, line),
        }
        Ok(())
    }

    /// Idle → Updating → (Endpunkte schreiben | verwerfen) → Idle.
    fn update_line<H: Host + ?Sized>(
        &mut self,
        registry: &mut LineRegistry,
        host: &mut H,
        line: LineId,
        event: &PointerEvent,
    ) -> UpdateOutcome {
        let Some(entry) = registry.get_mut(line) else {
            return UpdateOutcome::Detached { line };
        };
        if entry.phase() == LinePhase::Updating {
            log::warn!("Linie {} ist noch im Update, Event ignoriert", line);
            return UpdateOutcome::Busy { line };
        }
        entry.set_phase(LinePhase::Updating);
        let element = entry.element;

        // Kurve und Ableitung laufen erst hinter dem Guard: auch ein Panic
        // darin setzt die Phase zurück.
        let mut guard = PhaseGuard { registry, line };
        let computed = match guard.registry.get(line) {
            Some(entry) => use_cases::tracking::compute_endpoints(
                &*host,
                entry,
                guard.registry.options(),
                event,
            ),
            None => return UpdateOutcome::Detached { line },
        };
        let outcome = match computed.and_then(|endpoints| {
            self.handle_command(
                &mut *guard.registry,
                host,
                LineCommand::ApplyEndpoints { element, endpoints },
            )
            .map(|()| endpoints)
        }) {
            Ok(endpoints) => UpdateOutcome::Applied { line, endpoints },
            Err(error) => {
                log::warn!("Update von Linie {} verworfen: {}", line, error);
                UpdateOutcome::Rejected { line, error }
            }
        };
        drop(guard);
        outcome
    }
}

/// Setzt eine Linie beim Verlassen von `update_line` zurück auf `Idle`.
struct PhaseGuard<'a> {
    registry: &'a mut LineRegistry,
    line: LineId,
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        if let Some(entry) = self.registry.get_mut(self.line) {
            entry.set_phase(LinePhase::Idle);
        }
    }
}
