//! Homogeneous 2D transforms.
//!
//! Entries follow the `m11..m33` naming of the persisted document format,
//! with the translation in `m31`/`m32` and the projective terms in
//! `m13`/`m23`. A point maps as
//!
//! ```text
//! x' = m11*x + m21*y + m31
//! y' = m12*x + m22*y + m32
//! w  = m13*x + m23*y + m33
//! ```
//!
//! followed by division by `w`. Internally the matrix is held as a
//! column-vector `nalgebra::Matrix3` (the transpose of the entry layout).

use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

use crate::error::TransformError;
use crate::geometry::Point;

/// Tolerance used for singularity and collinearity checks.
pub const EPSILON: f64 = 1e-9;

/// Smallest homogeneous `w` a mapped point is divided by.
pub const NEAR_CLIP: f64 = 1e-6;

/// A general 3x3 homogeneous transform of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Builds a transform from its nine entries in `m11, m12, m13, m21, .., m33` order.
    ///
    /// Any real matrix is accepted, including singular ones.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self {
            matrix: Matrix3::new(m11, m21, m31, m12, m22, m32, m13, m23, m33),
        }
    }

    pub fn from_entries(e: [f64; 9]) -> Self {
        Self::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7], e[8])
    }

    /// The nine entries in `m11, m12, m13, m21, .., m33` order.
    pub fn entries(&self) -> [f64; 9] {
        let m = &self.matrix;
        [
            m[(0, 0)],
            m[(1, 0)],
            m[(2, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(2, 1)],
            m[(0, 2)],
            m[(1, 2)],
            m[(2, 2)],
        ]
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, dx, dy, 1.0)
    }

    /// Rotation by `degrees` about `pivot`. Positive angles turn clockwise on a y-down screen.
    pub fn rotation_about(pivot: Point, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let rotate = Self::new(cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0);
        Self::translation(-pivot.x, -pivot.y)
            .then(&rotate)
            .then(&Self::translation(pivot.x, pivot.y))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn m11(&self) -> f64 {
        self.matrix[(0, 0)]
    }
    pub fn m12(&self) -> f64 {
        self.matrix[(1, 0)]
    }
    pub fn m13(&self) -> f64 {
        self.matrix[(2, 0)]
    }
    pub fn m21(&self) -> f64 {
        self.matrix[(0, 1)]
    }
    pub fn m22(&self) -> f64 {
        self.matrix[(1, 1)]
    }
    pub fn m23(&self) -> f64 {
        self.matrix[(2, 1)]
    }
    pub fn m31(&self) -> f64 {
        self.matrix[(0, 2)]
    }
    pub fn m32(&self) -> f64 {
        self.matrix[(1, 2)]
    }
    pub fn m33(&self) -> f64 {
        self.matrix[(2, 2)]
    }

    /// Composition: the result applies `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Maps a point through the transform, including perspective division.
    ///
    /// A homogeneous `w` closer to zero than [`NEAR_CLIP`] is clamped to
    /// `NEAR_CLIP` with its sign kept, so points on the line at infinity
    /// come back far away but finite.
    pub fn map_point(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        if v.z == 1.0 {
            return Point::new(v.x, v.y);
        }
        let w = if v.z.abs() < NEAR_CLIP {
            NEAR_CLIP.copysign(v.z)
        } else {
            v.z
        };
        Point::new(v.x / w, v.y / w)
    }

    pub fn map_quad(&self, quad: &[Point; 4]) -> [Point; 4] {
        quad.map(|p| self.map_point(p))
    }

    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    pub fn inverse(&self) -> Result<Transform, TransformError> {
        let determinant = self.determinant();
        if determinant.abs() < EPSILON {
            return Err(TransformError::NotInvertible { determinant });
        }
        self.matrix
            .try_inverse()
            .map(|matrix| Transform { matrix })
            .ok_or(TransformError::NotInvertible { determinant })
    }

    /// True when the projective row is `(0, 0, m33)` with `m33 != 0`.
    pub fn is_affine(&self) -> bool {
        self.m13().abs() < EPSILON && self.m23().abs() < EPSILON && self.m33().abs() > EPSILON
    }

    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        self.entries()
            .iter()
            .zip(other.entries().iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    pub fn is_identity(&self, eps: f64) -> bool {
        self.approx_eq(&Transform::identity(), eps)
    }

    /// Solves for the projective transform mapping `src[i]` onto `dst[i]`
    /// for all four corners.
    ///
    /// Fails when either quad has three collinear (or two coincident)
    /// points, or when the linear system is singular.
    pub fn quad_to_quad(src: &[Point; 4], dst: &[Point; 4]) -> Result<Transform, TransformError> {
        check_quad("source", src)?;
        check_quad("destination", dst)?;

        // Unknowns (a, b, c, d, e, f, g, h) with
        // u = (a x + b y + c) / (g x + h y + 1), v = (d x + e y + f) / (g x + h y + 1).
        let mut system = SMatrix::<f64, 8, 8>::zeros();
        let mut rhs = SVector::<f64, 8>::zeros();
        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            let r = 2 * i;
            system[(r, 0)] = s.x;
            system[(r, 1)] = s.y;
            system[(r, 2)] = 1.0;
            system[(r, 6)] = -d.x * s.x;
            system[(r, 7)] = -d.x * s.y;
            rhs[r] = d.x;

            system[(r + 1, 3)] = s.x;
            system[(r + 1, 4)] = s.y;
            system[(r + 1, 5)] = 1.0;
            system[(r + 1, 6)] = -d.y * s.x;
            system[(r + 1, 7)] = -d.y * s.y;
            rhs[r + 1] = d.y;
        }

        let h = system
            .lu()
            .solve(&rhs)
            .ok_or_else(|| TransformError::DegenerateQuad {
                reason: "correspondence system is singular".to_string(),
            })?;

        if h.iter().any(|v| !v.is_finite()) {
            return Err(TransformError::DegenerateQuad {
                reason: "correspondence system has no finite solution".to_string(),
            });
        }

        let transform = Transform {
            matrix: Matrix3::new(h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0),
        };
        if transform.determinant().abs() < EPSILON {
            return Err(TransformError::DegenerateQuad {
                reason: "solved transform is singular".to_string(),
            });
        }
        Ok(transform)
    }
}

fn check_quad(label: &str, quad: &[Point; 4]) -> Result<(), TransformError> {
    const TRIPLES: [(usize, usize, usize); 4] = [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)];
    for (i, j, k) in TRIPLES {
        let (a, b, c) = (quad[i], quad[j], quad[k]);
        let (abx, aby) = (b.x - a.x, b.y - a.y);
        let (acx, acy) = (c.x - a.x, c.y - a.y);
        let cross = abx * acy - aby * acx;
        let scale = (abx.hypot(aby) * acx.hypot(acy)).max(f64::MIN_POSITIVE);
        if cross.abs() <= EPSILON * scale || scale <= EPSILON {
            return Err(TransformError::DegenerateQuad {
                reason: format!("{label} points {i}, {j}, {k} are collinear"),
            });
        }
    }
    Ok(())
}
