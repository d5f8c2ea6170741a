//! Zentrale Konfiguration für Tangenten-Linien.
//!
//! `TangentOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Event-Verdrahtung ───────────────────────────────────────────────

/// CSS-Klasse, die ein Element als Drag-Anker markiert.
pub const ANCHOR_CLASS: &str = "tangent-anchor";
/// Attribut mit der deklarierten Steigung einer Linie.
pub const SLOPE_ATTRIBUTE: &str = "data-slope";
/// Event-Typen, auf die ein Trigger-Element lauscht.
pub const EVENT_TYPES: [&str; 2] = ["mousemove", "touchmove"];

// ── Darstellung ─────────────────────────────────────────────────────

/// Dekorative Style-Regel für Anker-Elemente.
pub const STYLE_RULE: &str = ".tangent-anchor { cursor: grab; }";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Der Host entscheidet, wo die TOML-Datei liegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TangentOptions {
    /// Klasse der Anker-Elemente (Event auf Anker → Anker-Mittelpunkt statt Pointer)
    pub anchor_class: String,
    /// Attributname der deklarierten Steigung
    pub slope_attribute: String,
    /// Event-Typen, auf die pro Linie gelauscht wird
    pub event_types: Vec<String>,
    /// Style-Regel beim Installieren einfügen
    pub inject_style: bool,
    /// Einzufügende Style-Regel
    pub style_rule: String,
}

impl Default for TangentOptions {
    fn default() -> Self {
        Self {
            anchor_class: ANCHOR_CLASS.to_string(),
            slope_attribute: SLOPE_ATTRIBUTE.to_string(),
            event_types: EVENT_TYPES.iter().map(|t| t.to_string()).collect(),
            inject_style: true,
            style_rule: STYLE_RULE.to_string(),
        }
    }
}

impl TangentOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Lauscht die Konfiguration auf diesen Event-Typ?
    pub fn listens_to(&self, kind: &str) -> bool {
        self.event_types.iter().any(|t| t == kind)
    }
}
