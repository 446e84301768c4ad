//! Tolerance defaults for mesh generation.
//!
//! Policy
//! - Defaults are fixed constants so that call sites stay free of tolerance
//!   juggling. Contexts that need a different tolerance pass their own epsilon
//!   (`float_eq` takes it explicitly; `CellSearchCfg` carries the hyperplane one).

/// Relative tolerance for edge-length matching in `float_eq`.
pub const DEFAULT_EPS: f64 = 1e-6;
/// Absolute distance tolerance for "point lies on hyperplane".
pub const HYPERPLANE_EPS: f64 = 1e-7;
/// Grid size used to quantize coordinates when deduplicating generated vertices.
pub const QUANTIZE_TOL: f64 = 1e-9;
/// Below this norm a direction is treated as degenerate when fitting a hyperplane.
pub(crate) const DEGENERATE_EPS: f64 = 1e-9;
