//! Triangle shaders
//!
//! The three shaders `draw_mesh` composes: a Gouraud color ramp over a
//! triangle, a proxy that re-maps texture coordinates onto another
//! shader, and a modulating combination of two shaders.

use crate::color::{modulate, Color, Pixel};
use crate::geom::Point;
use crate::matrix::Matrix;
use crate::Shader;

use std::cell::Cell;

/// The affine map carrying the unit triangle (0,0), (1,0), (0,1) onto
/// `pts`: columns are `p1 - p0`, `p2 - p0`, `p0`
fn triangle_matrix(pts: &[Point; 3]) -> Matrix {
    let u = pts[1] - pts[0];
    let v = pts[2] - pts[0];
    Matrix::new(u.x, v.x, pts[0].x, u.y, v.y, pts[0].y)
}

/// Interpolates three corner colors across a triangle
///
/// After inverse-mapping a device point, its x and y are barycentric
/// weights for corners 1 and 2 (corner 0 takes the remainder). The
/// per-pixel step in x is a constant color delta, so a row is one
/// evaluation plus additions.
pub struct TriColorShader {
    colors: [Color; 3],
    local: Matrix,
    inverse: Cell<Matrix>,
    delta: Cell<Color>,
}

impl TriColorShader {
    pub fn new(pts: &[Point; 3], colors: &[Color; 3]) -> Self {
        Self {
            colors: *colors,
            local: triangle_matrix(pts),
            inverse: Cell::new(Matrix::identity()),
            delta: Cell::new(Color::transparent()),
        }
    }
}

impl Shader for TriColorShader {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a >= 1.0)
    }

    fn set_context(&self, ctm: &Matrix) -> bool {
        let inverse = match Matrix::concat(ctm, &self.local).invert() {
            Some(m) => m,
            None => return false,
        };
        let [c0, c1, c2] = self.colors;
        // color change per +1 device x: (-a - d)*c0 + a*c1 + d*c2,
        // where (a, d) is the inverse's first column
        let a = inverse.sx;
        let d = inverse.ky;
        self.delta.set(c0 * (-a - d) + c1 * a + c2 * d);
        self.inverse.set(inverse);
        true
    }

    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let inverse = self.inverse.get();
        let delta = self.delta.get();
        let [c0, c1, c2] = self.colors;
        let p = inverse.map_point(Point::new(x as f32 + 0.5, y as f32 + 0.5));
        let mut color = c0 * (1.0 - p.x - p.y) + c1 * p.x + c2 * p.y;
        for out in row.iter_mut() {
            *out = color.pinned().to_pixel();
            color = color + delta;
        }
    }
}

/// Presents a real shader through a triangle's texture coordinates
///
/// Device space is pulled through `P` (built from the triangle) and
/// `S⁻¹` (built from the coordinates) before the real shader sees it,
/// so a bitmap or gradient can fill a triangle by arbitrary texture
/// coordinates.
pub struct ProxyShader<'a> {
    real: &'a dyn Shader,
    pts: [Point; 3],
    coords: [Point; 3],
}

impl<'a> ProxyShader<'a> {
    pub fn new(real: &'a dyn Shader, pts: &[Point; 3], coords: &[Point; 3]) -> Self {
        Self {
            real,
            pts: *pts,
            coords: *coords,
        }
    }
}

impl<'a> Shader for ProxyShader<'a> {
    fn is_opaque(&self) -> bool {
        self.real.is_opaque()
    }

    fn set_context(&self, ctm: &Matrix) -> bool {
        let p = triangle_matrix(&self.pts);
        let s_inverse = match triangle_matrix(&self.coords).invert() {
            Some(m) => m,
            None => return false,
        };
        self.real.set_context(&(*ctm * p * s_inverse))
    }

    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        self.real.shade_row(x, y, row);
    }
}

/// Modulates the rows of two shaders componentwise
pub struct ComposeShader<'a> {
    first: &'a dyn Shader,
    second: &'a dyn Shader,
}

impl<'a> ComposeShader<'a> {
    pub fn new(first: &'a dyn Shader, second: &'a dyn Shader) -> Self {
        Self { first, second }
    }
}

impl<'a> Shader for ComposeShader<'a> {
    fn is_opaque(&self) -> bool {
        self.first.is_opaque() && self.second.is_opaque()
    }

    fn set_context(&self, ctm: &Matrix) -> bool {
        self.first.set_context(ctm) && self.second.set_context(ctm)
    }

    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let mut tmp = vec![Pixel::transparent(); row.len()];
        self.first.shade_row(x, y, &mut tmp);
        self.second.shade_row(x, y, row);
        for (out, p) in row.iter_mut().zip(tmp.iter()) {
            *out = modulate(*p, *out);
        }
    }
}
