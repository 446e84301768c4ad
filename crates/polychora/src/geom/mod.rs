//! Tolerant floating-point predicates and 4D hyperplane helpers.
//!
//! Purpose
//! - Decide when two distances (or coordinates) coincide despite rounding, so
//!   that edge lengths computed from golden-ratio coordinates still match.
//! - Fit the supporting hyperplane of a set of 4D points for the flatness test
//!   used by cell discovery.
//!
//! Assumptions and conventions
//! - `float_eq` is relative away from zero and absolute near zero. It is not an
//!   equivalence relation (no transitivity) and callers must not chain it.
//! - Hyperplanes are `n · x = c` with unit `n`; membership is an absolute
//!   distance test. Coordinates of the catalog polytopes are O(1), so absolute
//!   tolerances are meaningful there.

pub mod cfg;
mod hyperplane;
mod util;

pub use cfg::{DEFAULT_EPS, HYPERPLANE_EPS, QUANTIZE_TOL};
pub use hyperplane::Hyperplane4;
pub use util::{dedup_points_in_place, float_eq, quantize4};
