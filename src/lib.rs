//! Minimum-move planner for a 1×2 sofa on a rectangular grid.
//!
//! The search core is [`search::shortest`]: breadth-first search over
//! [`sofa::Pose`]s, with successors generated by [`sofa::moves`] against any
//! [`grid::Terrain`]. The [`scenario`] layer parses the textual puzzle format
//! and locates the start and destination markers.

pub mod config;
pub mod core;
pub mod grid;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod sofa;
