//! Application-Layer: Controller, Registry, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
pub mod registry;
pub mod slope;
pub mod use_cases;

pub use controller::LineController;
pub use events::{LineCommand, LineIntent, PointerEvent, UpdateOutcome};
pub use host::{
    resolve_reference, CoordinateProvider, EventWiring, Host, LineStore, ReferenceResolver,
};
pub use registry::{LineEntry, LinePhase, LineRegistry, LineSpec};
pub use slope::{CurveFn, SlopeSource};
pub use use_cases::tracking::{compute_endpoints, resolve_event_point, snap_to_curve};
pub use use_cases::wiring::install;
