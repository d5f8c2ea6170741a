//! Use-Cases der Application-Layer-Orchestrierung.

pub mod tracking;
pub mod wiring;
