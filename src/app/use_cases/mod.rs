//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod lifecycle;
pub mod pointer;
pub mod properties;
pub mod selection;
pub mod viewport;
