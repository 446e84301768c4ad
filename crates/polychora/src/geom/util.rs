//! Small utilities: tolerant float comparison and geometric dedup/quantization.

use std::collections::HashSet;

use nalgebra::Vector4;

/// Tolerant equality for two floats.
///
/// - Exactly equal values (including equal infinities) compare equal.
/// - If either value is zero, or their magnitudes sum to a subnormal, the
///   absolute difference is compared against `eps * f64::MIN_POSITIVE`.
/// - Otherwise the relative error `|a-b| / min(|a|+|b|, f64::MAX)` is compared
///   against `eps`.
///
/// Not transitive: `float_eq(a,b)` and `float_eq(b,c)` do not imply `float_eq(a,c)`.
pub fn float_eq(a: f64, b: f64, eps: f64) -> bool {
    if a == b {
        return true;
    }
    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();
    let sum = abs_a + abs_b;
    if a == 0.0 || b == 0.0 || sum < f64::MIN_POSITIVE {
        return diff < eps * f64::MIN_POSITIVE;
    }
    diff / sum.min(f64::MAX) < eps
}

/// Round each coordinate onto a grid of size `tol`, giving a hashable key.
pub fn quantize4(v: Vector4<f64>, tol: f64) -> (i64, i64, i64, i64) {
    let s = 1.0 / tol;
    (
        (v[0] * s).round() as i64,
        (v[1] * s).round() as i64,
        (v[2] * s).round() as i64,
        (v[3] * s).round() as i64,
    )
}

/// Remove points that quantize to the same grid cell, keeping first occurrences.
///
/// Order of the surviving points is preserved so vertex indices stay stable
/// for a given input.
pub fn dedup_points_in_place(points: &mut Vec<Vector4<f64>>, tol: f64) {
    if points.len() < 2 {
        return;
    }
    let mut seen = HashSet::with_capacity(points.len());
    points.retain(|p| seen.insert(quantize4(*p, tol)));
}
