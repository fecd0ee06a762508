//! Paint state

use crate::blend::BlendMode;
use crate::color::Color;
use crate::Shader;

use std::fmt;

/// What to draw with: a color, a blend mode, and an optional shader
///
/// When a shader is present its pixels replace the constant color as
/// the blend source. Paints are cheap to copy; the shader is borrowed
#[derive(Copy, Clone)]
pub struct Paint<'a> {
    pub color: Color,
    pub blend_mode: BlendMode,
    pub shader: Option<&'a dyn Shader>,
}

impl<'a> Paint<'a> {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            blend_mode: BlendMode::SrcOver,
            shader: None,
        }
    }
    /// Builder-style blend mode
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }
    /// Builder-style shader
    pub fn with_shader(mut self, shader: &'a dyn Shader) -> Self {
        self.shader = Some(shader);
        self
    }
}

impl<'a> Default for Paint<'a> {
    fn default() -> Self {
        Paint::new(Color::black())
    }
}

impl<'a> fmt::Debug for Paint<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("blend_mode", &self.blend_mode)
            .field("shader", &self.shader.map(|_| "..."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Paint::new(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(p.blend_mode, BlendMode::SrcOver);
        assert!(p.shader.is_none());
        let q = p.with_blend_mode(BlendMode::Xor);
        assert_eq!(q.blend_mode, BlendMode::Xor);
    }
}
