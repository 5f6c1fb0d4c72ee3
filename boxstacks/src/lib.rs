//! Core library to model the 3D Box-Stacking Bin Packing Problem and to exploit its axis-swap symmetry.
//!
//! An instance with its x- and y-axes exchanged is structurally equivalent to the original:
//! same boxes, same bins, same constraints, relabeled. Axis-order-sensitive search heuristics
//! can solve both versions and keep the better result. This crate owns the problem model and
//! the flip/unflip transform; the search engine itself lives outside of it.

/// Entities to model the 3D Box-Stacking Bin Packing Problem
pub mod entities;

/// The axis-swap transform on instances and solutions
pub mod flip;

/// Geometric primitives and orientations
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
