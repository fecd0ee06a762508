//! Porter-Duff composition
//!
//! All operators act on premultiplied pixels; every channel product is
//! renormalized with the exact rounded divide-by-255. The
//! [`simplify`] table collapses an operator to a cheaper one when the
//! source or destination alpha sits at an extreme.

use crate::color::Pixel;
use crate::math::div255;

/// The Porter-Duff operators
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlendMode {
    /// 0
    Clear,
    /// S
    Src,
    /// D
    Dst,
    /// S + (1 - Sa)*D
    SrcOver,
    /// D + (1 - Da)*S
    DstOver,
    /// Da*S
    SrcIn,
    /// Sa*D
    DstIn,
    /// (1 - Da)*S
    SrcOut,
    /// (1 - Sa)*D
    DstOut,
    /// Da*S + (1 - Sa)*D
    SrcATop,
    /// Sa*D + (1 - Da)*S
    DstATop,
    /// (1 - Sa)*D + (1 - Da)*S
    Xor,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SrcOver
    }
}

/// A resolved per-pixel blend function
pub type BlendFn = fn(Pixel, Pixel) -> Pixel;

fn clear(_src: Pixel, _dst: Pixel) -> Pixel {
    Pixel(0)
}
fn src(src: Pixel, _dst: Pixel) -> Pixel {
    src
}
fn dst(_src: Pixel, dst: Pixel) -> Pixel {
    dst
}
fn src_over(src: Pixel, dst: Pixel) -> Pixel {
    let isa = 255 - src.a();
    Pixel::pack_argb(
        src.a() + div255(isa * dst.a()),
        src.r() + div255(isa * dst.r()),
        src.g() + div255(isa * dst.g()),
        src.b() + div255(isa * dst.b()),
    )
}
fn dst_over(src: Pixel, dst: Pixel) -> Pixel {
    let ida = 255 - dst.a();
    Pixel::pack_argb(
        dst.a() + div255(ida * src.a()),
        dst.r() + div255(ida * src.r()),
        dst.g() + div255(ida * src.g()),
        dst.b() + div255(ida * src.b()),
    )
}
fn src_in(src: Pixel, dst: Pixel) -> Pixel {
    let da = dst.a();
    Pixel::pack_argb(
        div255(da * src.a()),
        div255(da * src.r()),
        div255(da * src.g()),
        div255(da * src.b()),
    )
}
fn dst_in(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.a();
    Pixel::pack_argb(
        div255(sa * dst.a()),
        div255(sa * dst.r()),
        div255(sa * dst.g()),
        div255(sa * dst.b()),
    )
}
fn src_out(src: Pixel, dst: Pixel) -> Pixel {
    let ida = 255 - dst.a();
    Pixel::pack_argb(
        div255(ida * src.a()),
        div255(ida * src.r()),
        div255(ida * src.g()),
        div255(ida * src.b()),
    )
}
fn dst_out(src: Pixel, dst: Pixel) -> Pixel {
    let isa = 255 - src.a();
    Pixel::pack_argb(
        div255(isa * dst.a()),
        div255(isa * dst.r()),
        div255(isa * dst.g()),
        div255(isa * dst.b()),
    )
}
fn src_atop(src: Pixel, dst: Pixel) -> Pixel {
    let da = dst.a();
    let isa = 255 - src.a();
    Pixel::pack_argb(
        div255(da * src.a() + isa * da),
        div255(da * src.r() + isa * dst.r()),
        div255(da * src.g() + isa * dst.g()),
        div255(da * src.b() + isa * dst.b()),
    )
}
fn dst_atop(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.a();
    let ida = 255 - dst.a();
    Pixel::pack_argb(
        div255(sa * dst.a() + ida * src.a()),
        div255(sa * dst.r() + ida * src.r()),
        div255(sa * dst.g() + ida * src.g()),
        div255(sa * dst.b() + ida * src.b()),
    )
}
fn xor(src: Pixel, dst: Pixel) -> Pixel {
    let isa = 255 - src.a();
    let ida = 255 - dst.a();
    Pixel::pack_argb(
        div255(isa * dst.a() + ida * src.a()),
        div255(isa * dst.r() + ida * src.r()),
        div255(isa * dst.g() + ida * src.g()),
        div255(isa * dst.b() + ida * src.b()),
    )
}

/// The per-pixel function implementing `mode`
pub fn blend_fn(mode: BlendMode) -> BlendFn {
    match mode {
        BlendMode::Clear => clear,
        BlendMode::Src => src,
        BlendMode::Dst => dst,
        BlendMode::SrcOver => src_over,
        BlendMode::DstOver => dst_over,
        BlendMode::SrcIn => src_in,
        BlendMode::DstIn => dst_in,
        BlendMode::SrcOut => src_out,
        BlendMode::DstOut => dst_out,
        BlendMode::SrcATop => src_atop,
        BlendMode::DstATop => dst_atop,
        BlendMode::Xor => xor,
    }
}

/// Collapse `mode` given the source and destination alphas
///
/// When either alpha sits at 0 or 255 most operators reduce to a
/// cheaper one; the returned mode computes the identical pixel
pub fn simplify(mode: BlendMode, src_a: u32, dst_a: u32) -> BlendMode {
    let s0 = src_a == 0;
    let s1 = src_a == 255;
    let d0 = dst_a == 0;
    let d1 = dst_a == 255;
    match mode {
        BlendMode::Xor => {
            if s1 && d1 {
                BlendMode::Clear
            } else if s1 && d0 {
                BlendMode::Src
            } else if s1 {
                BlendMode::SrcOut
            } else if d1 {
                BlendMode::DstOut
            } else {
                BlendMode::Xor
            }
        }
        BlendMode::DstATop => {
            if s1 && d1 {
                BlendMode::Dst
            } else if s0 && d0 {
                BlendMode::Src
            } else if d1 {
                BlendMode::DstIn
            } else {
                BlendMode::DstATop
            }
        }
        BlendMode::SrcATop => {
            if s1 && d1 {
                BlendMode::Src
            } else if s1 {
                BlendMode::SrcIn
            } else if d0 {
                BlendMode::Dst
            } else {
                BlendMode::SrcATop
            }
        }
        BlendMode::DstOver => {
            if d0 {
                BlendMode::Src
            } else if d1 {
                BlendMode::Dst
            } else {
                BlendMode::DstOver
            }
        }
        BlendMode::SrcOver => {
            if s1 {
                BlendMode::Src
            } else {
                BlendMode::SrcOver
            }
        }
        BlendMode::SrcOut => {
            if d1 || s0 {
                BlendMode::Clear
            } else if d0 {
                BlendMode::Src
            } else {
                BlendMode::SrcOut
            }
        }
        BlendMode::DstOut => {
            if s1 {
                BlendMode::Clear
            } else {
                BlendMode::DstOut
            }
        }
        BlendMode::SrcIn => {
            if d0 || s0 {
                BlendMode::Clear
            } else if d1 {
                BlendMode::Src
            } else {
                BlendMode::SrcIn
            }
        }
        BlendMode::DstIn => {
            if s0 {
                BlendMode::Clear
            } else {
                BlendMode::DstIn
            }
        }
        BlendMode::Clear | BlendMode::Src | BlendMode::Dst => mode,
    }
}

/// Blend one pixel through the specialization table
pub fn blend(mode: BlendMode, s: Pixel, d: Pixel) -> Pixel {
    blend_fn(simplify(mode, s.a(), d.a()))(s, d)
}

/// True when the composition is a whole-primitive no-op for a constant
/// source of the given alpha
pub fn will_return_dst(mode: BlendMode, alpha: f32) -> bool {
    match mode {
        BlendMode::Dst => true,
        BlendMode::SrcOver | BlendMode::DstOver | BlendMode::DstOut => alpha == 0.0,
        BlendMode::DstIn => alpha == 1.0,
        _ => false,
    }
}
