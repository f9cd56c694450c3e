//! Deterministic grid packer.
//!
//! `choose_layout` runs seed -> shuffle -> text insertion -> decorate -> pack -> grow.
//! All state (occupancy grid, RNG) is local to one call.

pub(crate) mod chooser;
pub(crate) mod decorate;
pub(crate) mod grid;
pub(crate) mod tile;
