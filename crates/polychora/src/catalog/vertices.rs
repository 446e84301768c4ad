//! Vertex coordinates of the six regular 4-polytopes.
//!
//! Families are written as a base tuple expanded by coordinate permutations
//! (all 24, or the 12 even ones) and sign flips of the non-zero entries.
//!
//! References
//! - 5-cell: regular simplex with edge 2√2 (four vertices at w = -1/√5 and an apex).
//! - 600-cell: circumradius 1, edge 1/φ.
//! - 120-cell: circumradius 2√2, edge 2/φ² = 3 - √5.

use nalgebra::Vector4;

use crate::geom::{dedup_points_in_place, QUANTIZE_TOL};

/// Golden ratio φ = (1 + √5) / 2.
pub(crate) fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Perms {
    All,
    Even,
}

pub(crate) fn cell5() -> Vec<Vector4<f64>> {
    let s5 = 5f64.sqrt();
    let low = -1.0 / s5;
    vec![
        Vector4::new(1.0, 1.0, 1.0, low),
        Vector4::new(1.0, -1.0, -1.0, low),
        Vector4::new(-1.0, 1.0, -1.0, low),
        Vector4::new(-1.0, -1.0, 1.0, low),
        Vector4::new(0.0, 0.0, 0.0, s5 + low),
    ]
}

pub(crate) fn cell8() -> Vec<Vector4<f64>> {
    expand(&[([1.0, 1.0, 1.0, 1.0], Perms::All)])
}

pub(crate) fn cell16() -> Vec<Vector4<f64>> {
    expand(&[([1.0, 0.0, 0.0, 0.0], Perms::All)])
}

pub(crate) fn cell24() -> Vec<Vector4<f64>> {
    expand(&[([1.0, 1.0, 0.0, 0.0], Perms::All)])
}

pub(crate) fn cell120() -> Vec<Vector4<f64>> {
    let p = phi();
    let s5 = 5f64.sqrt();
    let pi = 1.0 / p;
    let pi2 = pi * pi;
    let p2 = p * p;
    expand(&[
        ([0.0, 0.0, 2.0, 2.0], Perms::All),
        ([1.0, 1.0, 1.0, s5], Perms::All),
        ([pi2, p, p, p], Perms::All),
        ([pi, pi, pi, p2], Perms::All),
        ([0.0, pi2, 1.0, p2], Perms::Even),
        ([0.0, pi, p, s5], Perms::Even),
        ([pi, 1.0, p, 2.0], Perms::Even),
    ])
}

pub(crate) fn cell600() -> Vec<Vector4<f64>> {
    let p = phi();
    expand(&[
        ([0.5, 0.5, 0.5, 0.5], Perms::All),
        ([1.0, 0.0, 0.0, 0.0], Perms::All),
        ([p / 2.0, 0.5, 1.0 / (2.0 * p), 0.0], Perms::Even),
    ])
}

/// Expand each `(base, perms)` family and drop duplicate points.
pub(crate) fn expand(families: &[([f64; 4], Perms)]) -> Vec<Vector4<f64>> {
    let mut out = Vec::new();
    for &(base, perms) in families {
        for p in permutations(perms) {
            let permuted = [base[p[0]], base[p[1]], base[p[2]], base[p[3]]];
            for signs in 0u8..16 {
                // Flipping the sign of a zero only produces duplicates.
                if (0..4).any(|i| signs & (1 << i) != 0 && permuted[i] == 0.0) {
                    continue;
                }
                let flip = |i: usize| if signs & (1 << i) != 0 { -1.0 } else { 1.0 };
                out.push(Vector4::new(
                    flip(0) * permuted[0],
                    flip(1) * permuted[1],
                    flip(2) * permuted[2],
                    flip(3) * permuted[3],
                ));
            }
        }
    }
    dedup_points_in_place(&mut out, QUANTIZE_TOL);
    out
}

/// Permutations of `[0, 1, 2, 3]` in lexicographic order, optionally only even ones.
pub(crate) fn permutations(perms: Perms) -> Vec<[usize; 4]> {
    let mut out = Vec::with_capacity(24);
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let p = [a, b, c, d];
                    if a == b || a == c || a == d || b == c || b == d || c == d {
                        continue;
                    }
                    if perms == Perms::Even && inversions(&p) % 2 != 0 {
                        continue;
                    }
                    out.push(p);
                }
            }
        }
    }
    out
}

fn inversions(p: &[usize; 4]) -> usize {
    let mut n = 0;
    for i in 0..4 {
        for j in i + 1..4 {
            if p[i] > p[j] {
                n += 1;
            }
        }
    }
    n
}
