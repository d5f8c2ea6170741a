//! Initialisierung: Linien-Deklarationen auflösen und Listener verdrahten.
//!
//! Ersetzt den globalen Dokument-Scan beim Start durch eine explizite Liste
//! von [`LineSpec`]s. Alle Deklarationen werden zuerst aufgelöst; erst wenn
//! keine fehlschlägt, werden Listener registriert.

use crate::app::host::{resolve_reference, Host};
use crate::app::registry::{LineEntry, LineRegistry, LineSpec};
use crate::app::slope::SlopeSource;
use crate::shared::{ConfigurationError, TangentError, TangentOptions};

/// Löst eine einzelne Deklaration gegen den Host auf.
pub fn resolve_spec<H: Host + ?Sized>(
    host: &H,
    options: &TangentOptions,
    spec: LineSpec,
) -> Result<LineEntry, TangentError> {
    let element = resolve_reference(host, &spec.line).ok_or_else(|| {
        ConfigurationError::UnresolvedReference {
            reference: spec.line.clone(),
        }
    })?;

    let observer = match &spec.trigger {
        Some(trigger) => resolve_reference(host, trigger).ok_or_else(|| {
            ConfigurationError::UnresolvedReference {
                reference: trigger.clone(),
            }
        })?,
        None => host.viewport_of(element)?.0,
    };

    let declared = host.read_attribute(element, &options.slope_attribute);
    let slope =
        SlopeSource::resolve(element, spec.derivative, declared, &options.slope_attribute)?;

    Ok(LineEntry::new(element, observer, slope, spec.curve))
}

/// Installiert alle Linien und liefert die Registry.
///
/// Bei einem Fehler bleibt der Host unverändert (keine Listener, kein Style).
pub fn install<H: Host + ?Sized>(
    host: &mut H,
    options: TangentOptions,
    specs: Vec<LineSpec>,
) -> Result<LineRegistry, TangentError> {
    let entries = specs
        .into_iter()
        .map(|spec| resolve_spec(&*host, &options, spec))
        .collect::<Result<Vec<_>, _>>()?;

    if options.inject_style && !entries.is_empty() {
        host.inject_style(&options.style_rule);
    }

    let mut registry = LineRegistry::new(options);
    for entry in entries {
        let observer = entry.observer;
        let id = registry.insert(entry);
        for kind in &registry.options().event_types {
            host.add_listener(observer, kind, id);
        }
        log::debug!("Linie {} verdrahtet auf Observer {}", id, observer);
    }

    log::info!("{} Tangenten-Linien installiert", registry.len());
    Ok(registry)
}
