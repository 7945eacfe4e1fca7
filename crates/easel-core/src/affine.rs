// File: crates/easel-core/src/affine.rs
// Summary: 2D affine matrix with local-space (post-multiplied) translate/rotate/scale.
// Notes:
// - Layout follows the usual 2x3 convention: x' = a*x + c*y + e, y' = b*x + d*y + f.
// - `translate`, `rotate` and `scale` mutate in the matrix's own local frame, i.e.
//   `m.translate(..)` equals `m = m * T`. Building `identity.translate(c).rotate(t)`
//   therefore spins an object about its own centre `c`.

use std::ops::Mul;

use crate::error::{ChartError, Result};
use crate::geometry::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub fn rotation(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.concat(&Self::translation(dx, dy))
    }

    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        self.concat(&Self::rotation(radians))
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.concat(&Self::scaling(sx, sy))
    }

    /// `self = self * other`; `other` is applied first when mapping points.
    pub fn concat(&mut self, other: &Affine) -> &mut Self {
        *self = *self * *other;
        self
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det.is_finite() && det.abs() > f64::EPSILON * 1e-3
    }

    pub fn inverse(&self) -> Result<Affine> {
        if !self.is_invertible() {
            return Err(ChartError::SingularTransform);
        }
        let inv = 1.0 / self.determinant();
        let a = self.d * inv;
        let b = -self.b * inv;
        let c = -self.c * inv;
        let d = self.a * inv;
        let e = -(a * self.e + c * self.f);
        let f = -(b * self.e + d * self.f);
        Ok(Affine { a, b, c, d, e, f })
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Apply only the linear part; translation does not move a displacement.
    pub fn transform_distance(&self, v: Vector) -> Vector {
        Vector::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    pub fn translation_part(&self) -> Point {
        Point::new(self.e, self.f)
    }

    /// Rotation angle of the linear part, assuming no skew.
    pub fn rotation_angle(&self) -> f64 {
        self.b.atan2(self.a)
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, o: Affine) -> Affine {
        Affine {
            a: self.a * o.a + self.c * o.b,
            b: self.b * o.a + self.d * o.b,
            c: self.a * o.c + self.c * o.d,
            d: self.b * o.c + self.d * o.d,
            e: self.a * o.e + self.c * o.f + self.e,
            f: self.b * o.e + self.d * o.f + self.f,
        }
    }
}
