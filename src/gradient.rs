//! Linear gradient shader

use crate::color::{Color, Pixel};
use crate::geom::Point;
use crate::matrix::Matrix;
use crate::shader::TileMode;
use crate::Shader;

use std::cell::Cell;

/// Evenly spaced color stops along the segment p0 -> p1
///
/// The local matrix maps the unit x axis onto `p1 - p0`, so the
/// gradient parameter `t` is simply the x of the inverse-mapped device
/// point. Interpolation happens on unpremultiplied colors; pixels are
/// premultiplied only when packed.
///
/// The 1-D gradient ignores the mapped y entirely; Repeat and Mirror
/// therefore rewrite only `t`.
pub struct LinearGradient {
    colors: Vec<Color>,
    local: Matrix,
    tile_mode: TileMode,
    inverse: Cell<Matrix>,
}

impl LinearGradient {
    /// `None` when no colors are supplied
    pub fn new(p0: Point, p1: Point, colors: &[Color]) -> Option<Self> {
        Self::with_tile_mode(p0, p1, colors, TileMode::Clamp)
    }

    pub fn with_tile_mode(p0: Point, p1: Point, colors: &[Color], tile_mode: TileMode) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let d = p1 - p0;
        // basis (dx, -dy; dy, dx) carries (1, 0) onto p1 - p0
        let local = Matrix::new(d.x, -d.y, p0.x, d.y, d.x, p0.y);
        Some(Self {
            colors: colors.to_vec(),
            local,
            tile_mode,
            inverse: Cell::new(Matrix::identity()),
        })
    }

    fn color_at(&self, t: f32) -> Color {
        let t = match self.tile_mode {
            TileMode::Clamp => t,
            TileMode::Repeat => fract(t),
            TileMode::Mirror => mirror(t),
        };
        // pin the parameter just below 1 so the stop index stays in range
        let t = if t >= 1.0 {
            0.999_999_9
        } else if t < 0.0 {
            0.0
        } else {
            t
        };
        let scaled = t * (self.colors.len() - 1) as f32;
        let index = scaled as usize;
        let u = scaled - index as f32;
        mix(self.colors[index], self.colors[index + 1], u)
    }
}

fn fract(x: f32) -> f32 {
    let x = x - x.floor();
    x - x.floor()
}

fn mirror(x: f32) -> f32 {
    if (x.trunc() as i64) % 2 != 0 {
        1.0 - fract(x)
    } else {
        fract(x)
    }
}

/// Weighted mix of two stops on unpremultiplied channels
fn mix(c0: Color, c1: Color, u: f32) -> Color {
    c0 * (1.0 - u) + c1 * u
}

impl Shader for LinearGradient {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a >= 1.0)
    }

    fn set_context(&self, ctm: &Matrix) -> bool {
        match Matrix::concat(ctm, &self.local).invert() {
            Some(inverse) => {
                self.inverse.set(inverse);
                true
            }
            None => false,
        }
    }

    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            let pixel = self.colors[0].to_pixel();
            for out in row.iter_mut() {
                *out = pixel;
            }
            return;
        }
        let inverse = self.inverse.get();
        let mut fx = x as f32 + 0.5;
        let fy = y as f32 + 0.5;
        for out in row.iter_mut() {
            let p = inverse.map_point(Point::new(fx, fy));
            *out = self.color_at(p.x).to_pixel();
            fx += 1.0;
        }
    }
}
