//! Affine transforms
//!
//! A [`Matrix`] is a row-major 2x3 affine transform with an implicit
//! third row of `[0 0 1]`:
//!
//! ```text
//! [ sx kx tx ]
//! [ ky sy ty ]
//! ```

use crate::geom::Point;

use std::ops::Mul;

/// 2x3 affine transformation matrix
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    pub sx: f32,
    pub kx: f32,
    pub tx: f32,
    pub ky: f32,
    pub sy: f32,
    pub ty: f32,
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl Matrix {
    /// The identity transform
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }
    /// Create a matrix from its six elements, row major
    pub fn new(sx: f32, kx: f32, tx: f32, ky: f32, sy: f32, ty: f32) -> Self {
        Self { sx, kx, tx, ky, sy, ty }
    }
    /// A pure translation
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, tx, 0.0, 1.0, ty)
    }
    /// A pure scale about the origin
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }
    /// A rotation about the origin
    ///
    /// `radians` is measured towards positive y (clockwise in the usual
    /// y-down device space)
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// Matrix product `a * b`: the transform that applies `b` first
    pub fn concat(a: &Matrix, b: &Matrix) -> Matrix {
        Matrix::new(
            a.sx * b.sx + a.kx * b.ky,
            a.sx * b.kx + a.kx * b.sy,
            a.sx * b.tx + a.kx * b.ty + a.tx,
            a.ky * b.sx + a.sy * b.ky,
            a.ky * b.kx + a.sy * b.sy,
            a.ky * b.tx + a.sy * b.ty + a.ty,
        )
    }
    /// Pre-concatenate: `self <- self * m`
    pub fn pre_concat(&mut self, m: &Matrix) {
        *self = Matrix::concat(self, m);
    }

    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.kx * self.ky
    }

    /// Invert the matrix, or `None` when the determinant is zero
    pub fn invert(&self) -> Option<Matrix> {
        let det = f64::from(self.sx) * f64::from(self.sy) - f64::from(self.kx) * f64::from(self.ky);
        if det == 0.0 {
            return None;
        }
        let idet = 1.0 / det;
        let sx = f64::from(self.sy) * idet;
        let kx = -f64::from(self.kx) * idet;
        let tx = (f64::from(self.kx) * f64::from(self.ty) - f64::from(self.sy) * f64::from(self.tx)) * idet;
        let ky = -f64::from(self.ky) * idet;
        let sy = f64::from(self.sx) * idet;
        let ty = (f64::from(self.ky) * f64::from(self.tx) - f64::from(self.sx) * f64::from(self.ty)) * idet;
        Some(Matrix::new(
            sx as f32, kx as f32, tx as f32, ky as f32, sy as f32, ty as f32,
        ))
    }

    /// Apply the transform to a single point
    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Apply the transform to every point in place
    ///
    /// In-place mapping makes source and destination trivially alias
    pub fn map_points(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix::concat(&self, &rhs)
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        self.map_point(p)
    }
}
