//! Tangent Drag Library.
//! Tangenten-Geometrie und Interaktions-Controller als Library exportiert.

pub mod app;
pub mod core;
pub mod scene;
pub mod shared;

pub use app::{install, LineController, LineIntent, LineRegistry, LineSpec, UpdateOutcome};
pub use crate::core::{
    endpoints_in_frame, BoundingBox, EndpointPair, FramePoint, FrameTransform, GeneralLine,
    ParametricLine,
};
pub use scene::Scene;
pub use shared::{ConfigurationError, ElementId, LineId, TangentError, TangentOptions};
