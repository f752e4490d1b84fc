//! Resource format types.
//!
//! Two transient textures may only share memory when their formats are
//! identical, so everything here compares by value.

use serde::{Deserialize, Serialize};

/// Texture format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TextureFormat {
    // 8-bit formats
    /// 8-bit red channel, unsigned normalized.
    R8Unorm,
    /// 8-bit red channel, unsigned integer.
    R8Uint,

    // 16-bit formats
    /// 16-bit red channel, float.
    R16Float,
    /// 8-bit RG channels, unsigned normalized.
    Rg8Unorm,

    // 32-bit formats
    /// 32-bit red channel, float.
    R32Float,
    /// 32-bit red channel, unsigned integer.
    R32Uint,
    /// 16-bit RG channels, float.
    Rg16Float,
    /// 8-bit RGBA channels, unsigned normalized.
    #[default]
    Rgba8Unorm,
    /// 8-bit RGBA channels, sRGB.
    Rgba8UnormSrgb,
    /// 8-bit BGRA channels, unsigned normalized.
    Bgra8Unorm,
    /// 8-bit BGRA channels, sRGB.
    Bgra8UnormSrgb,

    // 64-bit formats
    /// 16-bit RGBA channels, float.
    Rgba16Float,
    /// 32-bit RG channels, float.
    Rg32Float,

    // 128-bit formats
    /// 32-bit RGBA channels, float.
    Rgba32Float,

    // Depth/stencil formats
    /// 24-bit depth with 8-bit stencil.
    Depth24PlusStencil8,
    /// 32-bit depth, float.
    Depth32Float,
}

/// How big a transient texture is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TextureSize {
    /// Scaled from the output surface size.
    ScreenRelative { width: f32, height: f32 },
    /// Fixed size in pixels.
    Absolute { width: u32, height: u32 },
}

impl Default for TextureSize {
    fn default() -> Self {
        Self::ScreenRelative {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Format of a texture written by a pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceFormat {
    /// Pixel format.
    pub pixel_format: TextureFormat,
    /// Size description.
    #[serde(default)]
    pub size: TextureSize,
}

impl ResourceFormat {
    /// Create a screen-sized format with the given pixel format.
    pub fn new(pixel_format: TextureFormat) -> Self {
        Self {
            pixel_format,
            size: TextureSize::default(),
        }
    }

    /// Set an absolute size in pixels.
    pub fn with_absolute_size(mut self, width: u32, height: u32) -> Self {
        self.size = TextureSize::Absolute { width, height };
        self
    }

    /// Set a size relative to the output surface.
    pub fn with_relative_size(mut self, width: f32, height: f32) -> Self {
        self.size = TextureSize::ScreenRelative { width, height };
        self
    }

    /// Check whether two resources with these formats may share memory.
    pub fn is_alias_compatible(&self, other: &ResourceFormat) -> bool {
        self == other
    }
}

impl From<TextureFormat> for ResourceFormat {
    fn from(pixel_format: TextureFormat) -> Self {
        Self::new(pixel_format)
    }
}
