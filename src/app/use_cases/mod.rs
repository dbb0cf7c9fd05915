//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod markers;
pub mod placement;
pub mod viewer;
