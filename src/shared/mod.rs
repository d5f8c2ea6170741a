//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `scene` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod error;
pub mod ids;
pub mod options;

pub use error::{ConfigurationError, HostError, TangentError};
pub use ids::{ElementId, LineId};
pub use options::TangentOptions;
