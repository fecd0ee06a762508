use easel::{Bitmap, BlendMode, Canvas, Color, Matrix, Paint, Pixel, Point, Rect};

fn red() -> Paint<'static> {
    Paint::new(Color::rgb(1.0, 0.0, 0.0))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn draw_paint_covers_every_pixel() {
    init_logging();
    let mut bitmap = Bitmap::new(10, 10);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_paint(&red());
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(bitmap.get(x, y), Pixel::pack_argb(255, 255, 0, 0), "({}, {})", x, y);
        }
    }
}

#[test]
fn draw_rect_fills_interior_pixel_centers() {
    let mut bitmap = Bitmap::new(8, 8);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_rect(Rect::ltrb(1.0, 1.0, 4.0, 4.0), &red());
    let red_pix = Color::rgb(1.0, 0.0, 0.0).to_pixel();
    for y in 0..8 {
        for x in 0..8 {
            let inside = (1..4).contains(&x) && (1..4).contains(&y);
            let expect = if inside { red_pix } else { Pixel(0) };
            assert_eq!(bitmap.get(x, y), expect, "({}, {})", x, y);
        }
    }
}

#[test]
fn triangle_covers_centers_inside_the_hypotenuse() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let green = Paint::new(Color::rgb(0.0, 1.0, 0.0));
    let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
    canvas.draw_convex_polygon(&tri, &green);
    let green_pix = Color::rgb(0.0, 1.0, 0.0).to_pixel();
    assert_eq!(bitmap.get(0, 0), green_pix);
    assert_eq!(bitmap.get(1, 1), green_pix);
    assert_eq!(bitmap.get(2, 2), Pixel(0));
    assert_eq!(bitmap.get(3, 3), Pixel(0));
}

#[test]
fn concat_applies_only_between_save_and_restore() {
    let mut bitmap = Bitmap::new(8, 8);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.save();
    canvas.concat(&Matrix::translate(2.0, 0.0));
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 1.0, 1.0), &red());
    canvas.restore();
    let blue = Paint::new(Color::rgb(0.0, 0.0, 1.0));
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 1.0, 1.0), &blue);
    assert_eq!(bitmap.get(2, 0), Color::rgb(1.0, 0.0, 0.0).to_pixel());
    assert_eq!(bitmap.get(0, 0), Color::rgb(0.0, 0.0, 1.0).to_pixel());
    assert_eq!(bitmap.get(1, 0), Pixel(0));
}

#[test]
fn opaque_src_over_draw_is_idempotent() {
    let mut bitmap = Bitmap::new(6, 6);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let tri = [Point::new(0.5, 0.5), Point::new(5.5, 1.0), Point::new(3.0, 5.5)];
    canvas.draw_convex_polygon(&tri, &red());
    let first = bitmap.pixels().to_vec();
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_convex_polygon(&tri, &red());
    assert_eq!(bitmap.pixels(), first.as_slice());
}

#[test]
fn dst_blend_never_touches_pixels() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_paint(&red());
    let before = bitmap.pixels().to_vec();
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let nop = Paint::new(Color::rgb(0.0, 1.0, 0.0)).with_blend_mode(BlendMode::Dst);
    canvas.draw_paint(&nop);
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 4.0, 4.0), &nop);
    assert_eq!(bitmap.pixels(), before.as_slice());
}

#[test]
fn clear_blend_erases() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_paint(&red());
    let clear = Paint::new(Color::white()).with_blend_mode(BlendMode::Clear);
    canvas.draw_rect(Rect::ltrb(1.0, 1.0, 3.0, 3.0), &clear);
    assert_eq!(bitmap.get(0, 0), Color::rgb(1.0, 0.0, 0.0).to_pixel());
    assert_eq!(bitmap.get(1, 1), Pixel(0));
    assert_eq!(bitmap.get(2, 2), Pixel(0));
    assert_eq!(bitmap.get(3, 3), Color::rgb(1.0, 0.0, 0.0).to_pixel());
}

#[test]
fn translucent_src_over_accumulates() {
    let mut bitmap = Bitmap::new(1, 1);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let half = Paint::new(Color::argb(0.5, 1.0, 1.0, 1.0));
    canvas.draw_paint(&half);
    let once = bitmap.get(0, 0);
    assert_eq!(once.a(), 128);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_paint(&half);
    let twice = bitmap.get(0, 0);
    // 128 + 127*128/255 = 192
    assert_eq!(twice.a(), 192);
}

#[test]
fn geometry_outside_the_bitmap_is_clipped() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    // rect wildly larger than the bitmap paints everything
    canvas.draw_rect(Rect::ltrb(-100.0, -100.0, 100.0, 100.0), &red());
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(bitmap.get(x, y), Color::rgb(1.0, 0.0, 0.0).to_pixel());
        }
    }
    // rect fully off to the left draws nothing
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_rect(Rect::ltrb(-10.0, 0.0, -5.0, 4.0), &red());
    assert!(bitmap.pixels().iter().all(|p| *p == Pixel(0)));
}

#[test]
fn degenerate_rects_draw_nothing() {
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_rect(Rect::ltrb(1.0, 1.0, 1.0, 3.0), &red());
    canvas.draw_rect(Rect::ltrb(1.0, 2.0, 3.0, 2.0), &red());
    // collinear polygon
    let line = [Point::new(0.0, 0.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
    canvas.draw_convex_polygon(&line, &red());
    assert!(bitmap.pixels().iter().all(|p| *p == Pixel(0)));
}

#[test]
fn rotated_rect_covers_the_expected_center() {
    let mut bitmap = Bitmap::new(8, 8);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    // rotate the square about its own center: the center pixel stays
    canvas.concat(&Matrix::translate(4.0, 4.0));
    canvas.concat(&Matrix::rotate(std::f32::consts::FRAC_PI_4));
    canvas.concat(&Matrix::translate(-4.0, -4.0));
    canvas.draw_rect(Rect::ltrb(2.0, 2.0, 6.0, 6.0), &red());
    assert_eq!(bitmap.get(4, 4), Color::rgb(1.0, 0.0, 0.0).to_pixel());
    // the square's corners rotate away from the bitmap corners
    assert_eq!(bitmap.get(0, 0), Pixel(0));
    assert_eq!(bitmap.get(7, 7), Pixel(0));
}
