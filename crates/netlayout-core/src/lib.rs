//! Netlayout Core Types and Definitions
//!
//! This crate provides the foundational types shared by the netlayout
//! crates:
//!
//! - **Geometry**: points, sizes and bounds ([`geometry`] module)
//! - **Topology**: typed devices, networks and connections ([`topology`] module)
//! - **Layers**: the static device category → band table ([`layer`] module)

pub mod geometry;
pub mod layer;
pub mod topology;
