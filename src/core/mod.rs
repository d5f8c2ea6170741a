//! Geometrie-Engine: frame-getypte Punkte, affine Transformationen,
//! Geradengleichungen und Box-Clipping.
//!
//! Reine Funktionen ohne I/O und ohne veränderlichen Zustand.

pub mod bounds;
pub mod error;
pub mod frame;
pub mod line;
pub mod tangent;

pub use bounds::BoundingBox;
pub use error::{EngineError, GeometryError, TransformError};
pub use frame::{
    checked_finite, checked_inverse, AnchorSpace, ClientSpace, FramePoint, FrameTransform,
    LineSpace, ViewportSpace,
};
pub use line::{ClipEdges, EndpointPair, GeneralLine, ParametricLine};
pub use tangent::{endpoints_in_frame, intersect_box, parametric_equation, to_general};
