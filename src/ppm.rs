//! Writing of PPM (Portable Pixmap Format) files
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
//! Helpers for tests and demos; the rasterizer core never does I/O.
//! Channels are written premultiplied, exactly as stored.

use crate::bitmap::Bitmap;

use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// Compare two PPM files, panic'ing on a difference
pub fn compare_ppm<P: AsRef<Path>>(f1: P, f2: P) {
    let d1 = fs::read(f1).expect("Unable to read file");
    let d2 = fs::read(f2).expect("Unable to read file");
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            eprintln!("{}: {} {}", i, v1, v2);
            assert_eq!(v1, v2);
        }
    }
}

/// Write a PPM file
///
/// P6 - Binary Portable Pixmap (0-255 RGB data), row-major, alpha
/// dropped
pub fn write_ppm<P: AsRef<Path>>(bitmap: &Bitmap, filename: P) -> Result<(), std::io::Error> {
    let mut fd = File::create(filename)?;
    write!(fd, "P6 {} {} 255 ", bitmap.width(), bitmap.height())?;
    let mut buf = Vec::with_capacity(bitmap.width() * bitmap.height() * 3);
    for y in 0..bitmap.height() {
        for p in bitmap.row(y) {
            buf.push(p.r() as u8);
            buf.push(p.g() as u8);
            buf.push(p.b() as u8);
        }
    }
    fd.write_all(&buf)
}

/// Read any image format `image` understands into raw bytes
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    use image::GenericImageView;
    let img = image::open(filename)?;
    let (w, h) = img.dimensions();
    Ok((img.into_bytes(), w as usize, h as usize))
}

/// Write the bitmap through the `image` crate, format from extension
pub fn write_file<P: AsRef<Path>>(bitmap: &Bitmap, filename: P) -> Result<(), image::ImageError> {
    let mut buf = Vec::with_capacity(bitmap.width() * bitmap.height() * 4);
    for y in 0..bitmap.height() {
        for p in bitmap.row(y) {
            buf.push(p.r() as u8);
            buf.push(p.g() as u8);
            buf.push(p.b() as u8);
            buf.push(p.a() as u8);
        }
    }
    image::save_buffer(
        filename,
        &buf,
        bitmap.width() as u32,
        bitmap.height() as u32,
        image::ColorType::Rgba8,
    )
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let (d1, w1, h1) = read_file(f1)?;
    let (d2, w2, h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            eprintln!("{}: {} {}", i, v1, v2);
            return Ok(false);
        }
    }
    Ok(true)
}
