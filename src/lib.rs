//! easel - a software 2D rasterizer
//!
//! Renders vector primitives into a caller-supplied pixel buffer:
//! rectangles, convex polygons, arbitrary filled paths with quadratic
//! and cubic curves, and tessellated quads and meshes. Pixels are
//! premultiplied ARGB and composition runs through the Porter-Duff
//! operators; per-pixel sources ("shaders") cover bitmap sampling,
//! linear gradients, Gouraud triangles and compositions thereof.
//!
//! # Drawing
//!
//! A [`Canvas`] borrows a [`Bitmap`] and maintains a stack of affine
//! transforms. Draw calls take a [`Paint`] carrying a color, a blend
//! mode and an optional [`Shader`]:
//!
//!     use easel::{Bitmap, Canvas, Color, Paint, Rect};
//!
//!     let mut bitmap = Bitmap::new(64, 64);
//!     let mut canvas = Canvas::new(&mut bitmap).unwrap();
//!     let red = Paint::new(Color::rgb(1.0, 0.0, 0.0));
//!     canvas.draw_rect(Rect::ltrb(8.0, 8.0, 56.0, 56.0), &red);
//!
//! # Paths
//!
//! [`Path`] collects contours of lines and Bezier curves; `draw_path`
//! fills them under the non-zero winding rule:
//!
//!     use easel::{Bitmap, Canvas, Color, Direction, Paint, Path, Point};
//!
//!     let mut bitmap = Bitmap::new(64, 64);
//!     let mut canvas = Canvas::new(&mut bitmap).unwrap();
//!     let mut path = Path::new();
//!     path.add_circle(Point::new(32.0, 32.0), 20.0, Direction::Clockwise);
//!     canvas.draw_path(&path, &Paint::new(Color::black()));
//!
//! # Shaders
//!
//! Shader rows are produced in device space at pixel centers; gradients
//! interpolate unpremultiplied stops and premultiply on packing:
//!
//!     use easel::{Bitmap, Canvas, Color, LinearGradient, Paint, Point, Rect};
//!
//!     let mut bitmap = Bitmap::new(64, 64);
//!     let mut canvas = Canvas::new(&mut bitmap).unwrap();
//!     let stops = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];
//!     let grad = LinearGradient::new(Point::new(0.0, 0.0), Point::new(64.0, 0.0), &stops).unwrap();
//!     let paint = Paint::new(Color::white()).with_shader(&grad);
//!     canvas.draw_rect(Rect::ltrb(0.0, 0.0, 64.0, 64.0), &paint);

pub mod bezier;
pub mod bitmap;
pub mod blend;
pub mod blitter;
pub mod canvas;
pub mod color;
pub mod edge;
pub mod geom;
pub mod gradient;
pub mod math;
pub mod matrix;
pub mod mesh_shader;
pub mod paint;
pub mod path;
pub mod ppm;
pub mod shader;

pub use crate::bitmap::Bitmap;
pub use crate::blend::BlendMode;
pub use crate::canvas::Canvas;
pub use crate::color::{Color, Pixel};
pub use crate::geom::{Point, Rect, Vector};
pub use crate::gradient::LinearGradient;
pub use crate::matrix::Matrix;
pub use crate::mesh_shader::{ComposeShader, ProxyShader, TriColorShader};
pub use crate::paint::Paint;
pub use crate::path::{Direction, Path, Segment, Verb};
pub use crate::shader::{BitmapShader, TileMode};

/// Programmable per-pixel source of premultiplied pixels
///
/// The canvas establishes context with the CTM once per primitive;
/// `shade_row` then produces pixels for device-space spans, sampling
/// at centers `(x + 0.5, y + 0.5)` and stepping +1 in x. Context lives
/// in interior-mutable cells: one canvas, one thread.
pub trait Shader {
    /// Conservatively true when every produced pixel will be opaque
    fn is_opaque(&self) -> bool;
    /// Install the CTM for the coming rows
    ///
    /// False when the effective transform (CTM composed with any local
    /// matrix) is not invertible; no rows may be requested after a
    /// failed context
    fn set_context(&self, ctm: &Matrix) -> bool;
    /// Fill `row` with premultiplied pixels for the span starting at
    /// device pixel `(x, y)`
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]);
}
