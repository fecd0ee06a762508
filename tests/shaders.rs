use easel::{
    Bitmap, BitmapShader, Canvas, Color, LinearGradient, Matrix, Paint, Pixel, Point, Rect,
    Shader, TileMode,
};

#[test]
fn gradient_row_samples_pixel_centers() {
    let stops = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];
    let grad = LinearGradient::new(Point::new(0.0, 0.0), Point::new(3.0, 0.0), &stops).unwrap();

    let mut bitmap = Bitmap::new(4, 1);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let paint = Paint::new(Color::white()).with_shader(&grad);
    canvas.draw_paint(&paint);

    // the canvas must write exactly what the shader produces
    assert!(grad.set_context(&Matrix::identity()));
    let mut row = [Pixel(0); 4];
    grad.shade_row(0, 0, &mut row);
    for x in 0..4 {
        assert_eq!(bitmap.get(x, 0), row[x]);
    }
    // red fades out left to right, blue fades in, all opaque
    for x in 1..4 {
        assert!(bitmap.get(x, 0).r() < bitmap.get(x - 1, 0).r());
        assert!(bitmap.get(x, 0).b() > bitmap.get(x - 1, 0).b());
        assert_eq!(bitmap.get(x, 0).a(), 255);
    }
    // t = 1/6 at the first center: red ~ 5/6 of full, t ~ 1 at the last
    let first_r = bitmap.get(0, 0).r();
    assert!(first_r == 212 || first_r == 213, "r = {}", first_r);
    assert_eq!(bitmap.get(3, 0).b(), 255);
    assert_eq!(bitmap.get(3, 0).r(), 0);
}

#[test]
fn gradient_under_ctm_translation() {
    let stops = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];
    let grad = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), &stops).unwrap();

    let mut plain = Bitmap::new(4, 1);
    let mut canvas = Canvas::new(&mut plain).unwrap();
    canvas.draw_paint(&Paint::new(Color::white()).with_shader(&grad));

    // translating the CTM slides the gradient with the geometry
    let mut shifted = Bitmap::new(8, 1);
    let mut canvas = Canvas::new(&mut shifted).unwrap();
    canvas.concat(&Matrix::translate(4.0, 0.0));
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 4.0, 1.0), &Paint::new(Color::white()).with_shader(&grad));

    for x in 0..4 {
        assert_eq!(shifted.get(x + 4, 0), plain.get(x, 0), "column {}", x);
        assert_eq!(shifted.get(x, 0), Pixel(0));
    }
}

#[test]
fn bitmap_shader_paints_texels_through_rect() {
    let mut texture = Bitmap::new(2, 2);
    texture.set(0, 0, Color::rgb(1.0, 0.0, 0.0).to_pixel());
    texture.set(1, 0, Color::rgb(0.0, 1.0, 0.0).to_pixel());
    texture.set(0, 1, Color::rgb(0.0, 0.0, 1.0).to_pixel());
    texture.set(1, 1, Color::white().to_pixel());

    let shader = BitmapShader::new(&texture, Matrix::identity());
    let mut bitmap = Bitmap::new(2, 2);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 2.0, 2.0), &Paint::new(Color::white()).with_shader(&shader));

    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(bitmap.get(x, y), texture.get(x, y));
        }
    }
}

#[test]
fn repeat_tiling_covers_a_larger_rect() {
    let mut texture = Bitmap::new(2, 1);
    texture.set(0, 0, Color::rgb(1.0, 0.0, 0.0).to_pixel());
    texture.set(1, 0, Color::rgb(0.0, 1.0, 0.0).to_pixel());

    let shader = BitmapShader::with_tile_mode(&texture, Matrix::identity(), TileMode::Repeat);
    let mut bitmap = Bitmap::new(6, 1);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.draw_paint(&Paint::new(Color::white()).with_shader(&shader));

    for x in 0..6 {
        let expect = texture.get(x % 2, 0);
        assert_eq!(bitmap.get(x, 0), expect, "column {}", x);
    }
}

#[test]
fn failed_context_falls_back_to_paint_color() {
    // a zero-length gradient can never invert its local matrix
    let grad = LinearGradient::new(
        Point::new(2.0, 2.0),
        Point::new(2.0, 2.0),
        &[Color::black(), Color::white()],
    )
    .unwrap();
    let mut bitmap = Bitmap::new(2, 2);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let paint = Paint::new(Color::rgb(0.0, 1.0, 0.0)).with_shader(&grad);
    canvas.draw_paint(&paint);
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(bitmap.get(x, y), Color::rgb(0.0, 1.0, 0.0).to_pixel());
        }
    }
}

#[test]
fn shader_beats_paint_color() {
    // with a working shader the paint color must be ignored
    let stops = [Color::rgb(0.0, 0.0, 1.0)];
    let grad = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), &stops).unwrap();
    let mut bitmap = Bitmap::new(2, 1);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    let paint = Paint::new(Color::rgb(1.0, 0.0, 0.0)).with_shader(&grad);
    canvas.draw_paint(&paint);
    assert_eq!(bitmap.get(0, 0), Color::rgb(0.0, 0.0, 1.0).to_pixel());
    assert_eq!(bitmap.get(1, 0), Color::rgb(0.0, 0.0, 1.0).to_pixel());
}

#[test]
fn singular_ctm_skips_shaded_geometry_color() {
    // collapse the CTM: shader context fails, constant path still runs
    let stops = [Color::rgb(0.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0)];
    let grad = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), &stops).unwrap();
    let mut bitmap = Bitmap::new(4, 4);
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.concat(&Matrix::scale(1.0, 0.0));
    let paint = Paint::new(Color::rgb(1.0, 0.0, 0.0)).with_shader(&grad);
    // geometry collapses to a horizontal line: nothing to fill
    canvas.draw_rect(Rect::ltrb(0.0, 0.0, 4.0, 4.0), &paint);
    drop(canvas);
    assert!(bitmap.pixels().iter().all(|p| *p == Pixel(0)));
    // draw_paint spans the bitmap regardless of the CTM
    let mut canvas = Canvas::new(&mut bitmap).unwrap();
    canvas.concat(&Matrix::scale(1.0, 0.0));
    canvas.draw_paint(&paint);
    assert!(bitmap.pixels().iter().all(|p| *p == Color::rgb(1.0, 0.0, 0.0).to_pixel()));
}

#[test]
fn gradient_tiles_repeat_and_mirror() {
    let stops = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];
    let repeat = LinearGradient::with_tile_mode(
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        &stops,
        TileMode::Repeat,
    )
    .unwrap();
    assert!(repeat.set_context(&Matrix::identity()));
    let mut row = [Pixel(0); 4];
    repeat.shade_row(0, 0, &mut row);
    // period 2: columns 0 and 2 sample the same t
    assert_eq!(row[0], row[2]);
    assert_eq!(row[1], row[3]);

    let mirror = LinearGradient::with_tile_mode(
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        &stops,
        TileMode::Mirror,
    )
    .unwrap();
    assert!(mirror.set_context(&Matrix::identity()));
    let mut row = [Pixel(0); 8];
    mirror.shade_row(0, 0, &mut row);
    // t and 2 - t reflect onto each other
    assert_eq!(row[0], row[3]);
    assert_eq!(row[1], row[2]);
}
