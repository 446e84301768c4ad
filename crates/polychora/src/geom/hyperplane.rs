//! Supporting hyperplane of a point set in R^4.

use nalgebra::Vector4;

use super::cfg::DEGENERATE_EPS;

/// Hyperplane `n · x = c` in R^4 with unit normal `n`.
#[derive(Clone, Copy, Debug)]
pub struct Hyperplane4 {
    pub n: Vector4<f64>,
    pub c: f64,
}

impl Hyperplane4 {
    /// Hyperplane through four points, if they are affinely independent.
    ///
    /// Uses cofactor expansion (Hodge dual of the 3-form spanned by the
    /// difference vectors) to avoid an SVD.
    pub fn through4(pts: [Vector4<f64>; 4]) -> Option<Self> {
        let a = pts[1] - pts[0];
        let b = pts[2] - pts[0];
        let c = pts[3] - pts[0];
        let n = Vector4::new(
            det3([[a.y, a.z, a.w], [b.y, b.z, b.w], [c.y, c.z, c.w]]),
            -det3([[a.x, a.z, a.w], [b.x, b.z, b.w], [c.x, c.z, c.w]]),
            det3([[a.x, a.y, a.w], [b.x, b.y, b.w], [c.x, c.y, c.w]]),
            -det3([[a.x, a.y, a.z], [b.x, b.y, b.z], [c.x, c.y, c.z]]),
        );
        let norm = n.norm();
        if norm < DEGENERATE_EPS {
            return None;
        }
        let n = n / norm;
        Some(Self {
            n,
            c: n.dot(&pts[0]),
        })
    }

    /// Fit the hyperplane spanned by `points`.
    ///
    /// Picks the first point as origin and greedily adds points whose offset is
    /// not (numerically) in the span of the offsets chosen so far. Returns `None`
    /// when the points span less than a 3-dimensional affine hull. Points beyond
    /// the four chosen ones are not checked; callers test them with `contains`.
    pub fn fit(points: &[Vector4<f64>]) -> Option<Self> {
        let (&p0, rest) = points.split_first()?;
        let mut basis: Vec<Vector4<f64>> = Vec::with_capacity(3);
        let mut chosen = [p0; 4];
        for &p in rest {
            let d = p - p0;
            let mut r = d;
            for q in &basis {
                r -= *q * q.dot(&d);
            }
            let norm = r.norm();
            if norm < DEGENERATE_EPS * (1.0 + d.norm()) {
                continue;
            }
            basis.push(r / norm);
            chosen[basis.len()] = p;
            if basis.len() == 3 {
                return Self::through4(chosen);
            }
        }
        None
    }

    /// Signed distance of `p` to the hyperplane.
    #[inline]
    pub fn signed_distance(&self, p: Vector4<f64>) -> f64 {
        self.n.dot(&p) - self.c
    }

    #[inline]
    pub fn contains(&self, p: Vector4<f64>, eps: f64) -> bool {
        self.signed_distance(p).abs() <= eps
    }
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
