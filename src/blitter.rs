//! Span compositing
//!
//! A [`Blitter`] is built once per draw call. It either asks the
//! paint's shader for rows of source pixels or blends a single
//! constant pixel, picking the specialized blend function as the
//! destination alpha changes under it.

use crate::bitmap::Bitmap;
use crate::blend::{self, BlendFn, BlendMode};
use crate::color::Pixel;
use crate::matrix::Matrix;
use crate::paint::Paint;
use crate::Shader;

pub struct Blitter<'a, 'b> {
    bitmap: &'a mut Bitmap,
    /// Present only when the paint has a shader whose context accepted
    /// the CTM; otherwise the constant path runs
    shader: Option<&'b dyn Shader>,
    src_pixel: Pixel,
    blend_mode: BlendMode,
    blend: BlendFn,
    cached_dst_a: Option<u32>,
    scratch: Vec<Pixel>,
}

impl<'a, 'b> Blitter<'a, 'b> {
    /// Establish shader context for the primitive and cache the result
    pub fn new(paint: &Paint<'b>, bitmap: &'a mut Bitmap, ctm: &Matrix) -> Self {
        let shader = match paint.shader {
            Some(s) if s.set_context(ctm) => Some(s),
            _ => None,
        };
        Self {
            bitmap,
            shader,
            src_pixel: paint.color.pinned().to_pixel(),
            blend_mode: paint.blend_mode,
            blend: blend::blend_fn(BlendMode::Dst),
            cached_dst_a: None,
            scratch: Vec::new(),
        }
    }

    /// Composite pixels for x in `[x0, x1)` on row `y`
    pub fn blit(&mut self, y: i32, x0: i32, x1: i32) {
        debug_assert!(x0 <= x1);
        if x1 <= x0 {
            return;
        }
        let y_u = y as usize;
        if let Some(shader) = self.shader {
            let count = (x1 - x0) as usize;
            self.scratch.clear();
            self.scratch.resize(count, Pixel::transparent());
            shader.shade_row(x0, y, &mut self.scratch);
            for (i, x) in (x0..x1).enumerate() {
                let x_u = x as usize;
                let dst = self.bitmap.get(x_u, y_u);
                self.bitmap.set(x_u, y_u, blend::blend(self.blend_mode, self.scratch[i], dst));
            }
        } else {
            for x in x0..x1 {
                let x_u = x as usize;
                let dst = self.bitmap.get(x_u, y_u);
                // re-pick the specialized blend only when dst alpha moved
                if self.cached_dst_a != Some(dst.a()) {
                    self.cached_dst_a = Some(dst.a());
                    self.blend =
                        blend::blend_fn(blend::simplify(self.blend_mode, self.src_pixel.a(), dst.a()));
                }
                self.bitmap.set(x_u, y_u, (self.blend)(self.src_pixel, dst));
            }
        }
    }
}
