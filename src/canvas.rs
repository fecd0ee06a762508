//! Canvas
//!
//! The drawing facade: a borrowed render target plus a stack of
//! transforms. Every draw call maps its geometry by the top of the
//! stack, converts it to clipped edges and hands spans to a
//! [`Blitter`].

use crate::bezier;
use crate::bitmap::Bitmap;
use crate::blend;
use crate::blitter::Blitter;
use crate::color::Color;
use crate::edge;
use crate::geom::{Point, Rect};
use crate::math::round_to_int;
use crate::matrix::Matrix;
use crate::mesh_shader::{ComposeShader, ProxyShader, TriColorShader};
use crate::paint::Paint;
use crate::path::{Path, Segment};

use log::trace;

/// Rasterizes into a mutably borrowed [`Bitmap`]
pub struct Canvas<'a> {
    bitmap: &'a mut Bitmap,
    ctm: Vec<Matrix>,
}

impl<'a> Canvas<'a> {
    /// Borrow `bitmap` as the render target
    ///
    /// `None` when the bitmap has no pixels
    pub fn new(bitmap: &'a mut Bitmap) -> Option<Canvas<'a>> {
        if bitmap.is_empty() {
            return None;
        }
        Some(Canvas {
            bitmap,
            ctm: vec![Matrix::identity()],
        })
    }

    /// Push a copy of the CTM, to be recovered by `restore`
    pub fn save(&mut self) {
        let top = self.top();
        self.ctm.push(top);
    }

    /// Pop back to the most recent `save`
    ///
    /// A restore without a matching save is a no-op
    pub fn restore(&mut self) {
        if self.ctm.len() > 1 {
            self.ctm.pop();
        }
    }

    /// Pre-concatenate: `CTM <- CTM * m`, so `m` applies first
    pub fn concat(&mut self, m: &Matrix) {
        let depth = self.ctm.len();
        self.ctm[depth - 1].pre_concat(m);
    }

    fn top(&self) -> Matrix {
        self.ctm[self.ctm.len() - 1]
    }

    /// Whether the paint cannot change any destination pixel
    fn is_no_op(paint: &Paint) -> bool {
        paint.shader.is_none() && blend::will_return_dst(paint.blend_mode, paint.color.a)
    }

    /// Fill the entire bitmap
    pub fn draw_paint(&mut self, paint: &Paint) {
        if Self::is_no_op(paint) {
            return;
        }
        let ctm = self.top();
        let (w, h) = (self.bitmap.width() as i32, self.bitmap.height() as i32);
        let mut blitter = Blitter::new(paint, self.bitmap, &ctm);
        for y in 0..h {
            blitter.blit(y, 0, w);
        }
    }

    /// Fill the rect, transformed by the CTM
    pub fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let pts = [
            Point::new(rect.left, rect.top),
            Point::new(rect.right, rect.top),
            Point::new(rect.right, rect.bottom),
            Point::new(rect.left, rect.bottom),
        ];
        self.draw_convex_polygon(&pts, paint);
    }

    /// Fill a convex polygon
    ///
    /// Convexity lets the scan walk track just a left and a right edge
    /// per row instead of full winding bookkeeping
    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &Paint) {
        if Self::is_no_op(paint) {
            return;
        }
        let ctm = self.top();
        let mut mapped = pts.to_vec();
        ctm.map_points(&mut mapped);

        let mut edges = Vec::new();
        edge::build_edges(
            &mut edges,
            &mapped,
            true,
            self.bitmap.width(),
            self.bitmap.height(),
        );
        edges.sort_by(edge::edge_order);
        trace!("draw_convex_polygon: {} pts -> {} edges", pts.len(), edges.len());
        if edges.len() < 2 {
            return;
        }

        let global_top = edges[0].min_y;
        let global_bottom = edges.iter().map(|e| e.max_y).fold(i32::MIN, i32::max);

        let mut e0 = edges[0];
        let mut e1 = edges[1];
        let mut i = 1;
        let mut blitter = Blitter::new(paint, self.bitmap, &ctm);

        for y in global_top..global_bottom {
            debug_assert!(e0.covers(y) && e1.covers(y));
            let x0 = round_to_int(e0.x);
            let x1 = round_to_int(e1.x);
            debug_assert!(x0 <= x1);
            blitter.blit(y, x0, x1);

            if e0.covers(y + 1) {
                e0.x += e0.m;
            } else {
                i += 1;
                if i < edges.len() {
                    e0 = edges[i];
                }
            }
            if e1.covers(y + 1) {
                e1.x += e1.m;
            } else {
                i += 1;
                if i < edges.len() {
                    e1 = edges[i];
                }
            }
        }
    }

    /// Fill the path under the non-zero winding rule
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        if Self::is_no_op(paint) {
            return;
        }
        let ctm = self.top();
        let mut mapped = path.clone();
        mapped.transform(&ctm);

        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        let mut edges = Vec::new();
        for seg in mapped.edger() {
            match seg {
                Segment::Line(pts) => edge::build_edges(&mut edges, &pts, false, w, h),
                Segment::Quad(pts) => {
                    edge::build_edges(&mut edges, &bezier::flatten_quad(&pts), false, w, h)
                }
                Segment::Cubic(pts) => {
                    edge::build_edges(&mut edges, &bezier::flatten_cubic(&pts), false, w, h)
                }
            }
        }
        edges.sort_by(edge::edge_order);
        trace!("draw_path: {} edges", edges.len());
        if edges.is_empty() {
            return;
        }

        let mut blitter = Blitter::new(paint, self.bitmap, &ctm);
        let mut y = edges[0].min_y;
        while !edges.is_empty() {
            let mut i = 0;
            let mut winding = 0;
            let mut start_x = 0;

            // walk the active prefix, accumulating winding left to right
            while i < edges.len() && edges[i].min_y <= y {
                if winding == 0 {
                    start_x = round_to_int(edges[i].x);
                }
                winding += edges[i].w;
                if winding == 0 {
                    let end_x = round_to_int(edges[i].x);
                    debug_assert!(start_x <= end_x);
                    blitter.blit(y, start_x, end_x);
                }
                if y + 1 == edges[i].max_y {
                    edges.remove(i);
                } else {
                    edges[i].x += edges[i].m;
                    i += 1;
                }
            }

            // pull in edges that become active on the next row, then
            // restore x order across the whole active prefix
            while i < edges.len() && edges[i].min_y <= y + 1 {
                i += 1;
            }
            edges[..i].sort_by(edge::edge_order_by_x);
            y += 1;
        }
    }

    /// Draw a quad tessellated into `(level + 1)^2` bilinear sub-quads
    ///
    /// Corners are ordered top-left, top-right, bottom-right,
    /// bottom-left; each sub-quad splits into two triangles along its
    /// top-right -> bottom-left diagonal. Colors and texture
    /// coordinates, when present, are interpolated bilinearly to every
    /// tessellated vertex and the triangles handed to `draw_mesh`.
    pub fn draw_quad(
        &mut self,
        verts: &[Point; 4],
        colors: Option<&[Color; 4]>,
        texs: Option<&[Point; 4]>,
        level: usize,
        paint: &Paint,
    ) {
        if colors.is_none() && texs.is_none() {
            return;
        }
        let count = level + 1;
        let width = level + 2;
        let num_verts = width * width;

        let mut new_verts = Vec::with_capacity(num_verts);
        let mut vert_colors = Vec::new();
        let mut vert_texs = Vec::new();
        let mut indices = Vec::with_capacity(count * count * 6);

        let inv = 1.0 / count as f32;
        let mut i = 0usize;
        for vi in 0..=count {
            let v = vi as f32 * inv;
            for ui in 0..=count {
                let u = ui as f32 * inv;
                // two triangles per cell, anchored at this vertex's
                // column; skipped on the left edge and bottom row
                if ui != 0 && vi != count {
                    indices.extend_from_slice(&[i, i + width - 1, i - 1]);
                    indices.extend_from_slice(&[i, i + width, i + width - 1]);
                }
                if let Some(c) = colors {
                    vert_colors.push(color_at(c, u, v));
                }
                if let Some(t) = texs {
                    vert_texs.push(point_at(t, u, v));
                }
                new_verts.push(point_at(verts, u, v));
                i += 1;
            }
        }

        self.draw_mesh(
            &new_verts,
            colors.map(|_| vert_colors.as_slice()),
            texs.map(|_| vert_texs.as_slice()),
            &indices,
            paint,
        );
    }

    /// Draw triangles with per-vertex colors and/or texture coordinates
    ///
    /// Every triple in `indices` selects a triangle. With colors only,
    /// a Gouraud shader fills it; with texture coordinates only, the
    /// paint's shader is proxied through them; with both, the two are
    /// modulated. Texture coordinates are ignored when the paint has no
    /// shader.
    pub fn draw_mesh(
        &mut self,
        verts: &[Point],
        colors: Option<&[Color]>,
        texs: Option<&[Point]>,
        indices: &[usize],
        paint: &Paint,
    ) {
        let texs = if paint.shader.is_some() { texs } else { None };
        if colors.is_none() && texs.is_none() {
            return;
        }
        trace!("draw_mesh: {} triangles", indices.len() / 3);

        for tri in indices.chunks_exact(3) {
            let pts = [verts[tri[0]], verts[tri[1]], verts[tri[2]]];
            match (colors, texs) {
                (Some(cols), Some(tx)) => {
                    let real = match paint.shader {
                        Some(s) => s,
                        None => return,
                    };
                    let tri_colors = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let coords = [tx[tri[0]], tx[tri[1]], tx[tri[2]]];
                    let tri_shader = TriColorShader::new(&pts, &tri_colors);
                    let proxy = ProxyShader::new(real, &pts, &coords);
                    let compose = ComposeShader::new(&proxy, &tri_shader);
                    let tri_paint = paint.with_shader(&compose);
                    self.draw_convex_polygon(&pts, &tri_paint);
                }
                (Some(cols), None) => {
                    let tri_colors = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let tri_shader = TriColorShader::new(&pts, &tri_colors);
                    let tri_paint = paint.with_shader(&tri_shader);
                    self.draw_convex_polygon(&pts, &tri_paint);
                }
                (None, Some(tx)) => {
                    let real = match paint.shader {
                        Some(s) => s,
                        None => return,
                    };
                    let coords = [tx[tri[0]], tx[tri[1]], tx[tri[2]]];
                    let proxy = ProxyShader::new(real, &pts, &coords);
                    let tri_paint = paint.with_shader(&proxy);
                    self.draw_convex_polygon(&pts, &tri_paint);
                }
                (None, None) => return,
            }
        }
    }
}

/// Bilinear interpolation over quad corners
///
/// `P = (1-u)(1-v) A + u(1-v) B + uv C + v(1-u) D`
fn point_at(c: &[Point; 4], u: f32, v: f32) -> Point {
    c[0] * ((1.0 - u) * (1.0 - v))
        + c[1] * (u * (1.0 - v))
        + c[2] * (u * v)
        + c[3] * (v * (1.0 - u))
}

fn color_at(c: &[Color; 4], u: f32, v: f32) -> Color {
    c[0] * ((1.0 - u) * (1.0 - v))
        + c[1] * (u * (1.0 - v))
        + c[2] * (u * v)
        + c[3] * (v * (1.0 - u))
}
