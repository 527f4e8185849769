//! RGBA texel of the off-screen capture buffer.

/// One pixel of a capture. The red channel carries the normalized height
/// written by the encoder; alpha is the validity signal (0 where no
/// geometry covered the texel). Green and blue are unused but kept so the
/// buffer layout matches a conventional RGBA render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texel {
    /// Normalized height.
    pub r: f32,
    /// Unused.
    pub g: f32,
    /// Unused.
    pub b: f32,
    /// Coverage/validity.
    pub a: f32,
}

impl Texel {
    /// The clear color: no coverage, zero height.
    pub const CLEAR: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// True if no geometry was rasterized into this texel.
    pub fn is_clear(&self) -> bool {
        self.a == 0.0
    }
}
