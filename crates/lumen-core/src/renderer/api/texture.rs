// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the abstract image consumed by texture uploads and the targets it is uploaded to.

use crate::renderer::api::util::{ColorSpace, ImageFormat};

/// A face of a cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

/// The native binding point an image is uploaded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    /// A two-dimensional texture.
    Texture2D,
    /// An array of two-dimensional layers.
    Texture2DArray,
    /// A three-dimensional (volumetric) texture.
    Texture3D,
    /// One face of a cube map. Uploaded like a 2D texture.
    CubeMapFace(CubeFace),
}

/// The size of a texture or of one of its mip levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent3D {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Depth in texels, or the layer count of an array.
    pub depth: u32,
}

impl Extent3D {
    /// Returns the size of mip level `level`: every dimension halved `level`
    /// times, never below one.
    pub fn mip_level(&self, level: u32) -> Extent3D {
        Extent3D {
            width: mip_dimension(self.width, level),
            height: mip_dimension(self.height, level),
            depth: mip_dimension(self.depth, level),
        }
    }
}

/// The texel offset of a sub-region update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin2D {
    /// Offset along the width.
    pub x: u32,
    /// Offset along the height.
    pub y: u32,
}

/// `max(1, dimension >> level)`.
#[inline]
pub fn mip_dimension(dimension: u32, level: u32) -> u32 {
    dimension.checked_shr(level).unwrap_or(0).max(1)
}

/// The source a texture channel reads from when sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SwizzleSource {
    Red,
    Green,
    Blue,
    Alpha,
    Zero,
    One,
}

/// A per-channel read remapping (`r`, `g`, `b`, `a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct TextureSwizzle {
    pub r: SwizzleSource,
    pub g: SwizzleSource,
    pub b: SwizzleSource,
    pub a: SwizzleSource,
}

impl TextureSwizzle {
    /// Every channel reads itself.
    pub const IDENTITY: Self = Self::new(
        SwizzleSource::Red,
        SwizzleSource::Green,
        SwizzleSource::Blue,
        SwizzleSource::Alpha,
    );

    /// Creates a swizzle from the four channel sources.
    pub const fn new(r: SwizzleSource, g: SwizzleSource, b: SwizzleSource, a: SwizzleSource) -> Self {
        Self { r, g, b, a }
    }
}

impl ImageFormat {
    /// Returns the swizzle that emulates a legacy format on hardware where
    /// it is stored as `R` or `RG`.
    ///
    /// Alpha-only formats read red into alpha, luminance formats replicate red
    /// into color, and luminance/alpha formats additionally read green into
    /// alpha. Every other format returns `None`.
    pub fn swizzle(self) -> Option<TextureSwizzle> {
        use SwizzleSource::*;
        match self {
            ImageFormat::Alpha8 => Some(TextureSwizzle::new(Zero, Zero, Zero, Red)),
            ImageFormat::Luminance8 | ImageFormat::Luminance16F | ImageFormat::Luminance32F => {
                Some(TextureSwizzle::new(Red, Red, Red, One))
            }
            ImageFormat::Luminance8Alpha8 | ImageFormat::Luminance16FAlpha16F => {
                Some(TextureSwizzle::new(Red, Red, Red, Green))
            }
            _ => None,
        }
    }
}

/// An image in CPU memory, as produced by an asset loader.
///
/// `data` holds one payload per layer: the slices of an array texture, or a
/// single buffer for everything else (including 3D textures, whose depth
/// slices are contiguous). When `mip_sizes` is present, every payload holds
/// the whole mip chain back to back and the table gives the byte size of each
/// level. An image with no payload describes storage to allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    /// Width of level 0.
    pub width: u32,
    /// Height of level 0.
    pub height: u32,
    /// Depth of level 0 (`1` for 2D images).
    pub depth: u32,
    /// The pixel layout.
    pub format: ImageFormat,
    /// How pixel values are encoded.
    pub color_space: ColorSpace,
    /// Per-layer byte payloads.
    pub data: Vec<Vec<u8>>,
    /// Byte size of each mip level, if the image carries a mip chain.
    pub mip_sizes: Option<Vec<usize>>,
    /// Samples per texel (`1` when not multisampled).
    pub samples: u32,
}

impl ImageDescriptor {
    /// Creates a linear, single-sample 2D image without payload.
    pub fn new(format: ImageFormat, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: 1,
            format,
            color_space: ColorSpace::Linear,
            data: Vec::new(),
            mip_sizes: None,
            samples: 1,
        }
    }

    /// Sets the depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Appends one layer payload.
    pub fn with_layer(mut self, bytes: Vec<u8>) -> Self {
        self.data.push(bytes);
        self
    }

    /// Sets the mip-size table.
    pub fn with_mip_sizes(mut self, mip_sizes: Vec<usize>) -> Self {
        self.mip_sizes = Some(mip_sizes);
        self
    }

    /// Sets the sample count.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the color space.
    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    /// Returns the size of level 0.
    pub fn extent(&self) -> Extent3D {
        Extent3D {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    /// Returns the number of array layers: the payload count when above one, else one.
    pub fn slice_count(&self) -> usize {
        self.data.len().max(1)
    }

    /// Returns `true` if the image carries a mip-size table.
    pub fn has_mipmaps(&self) -> bool {
        self.mip_sizes.is_some()
    }

    /// Returns `true` if more than one sample is stored per texel.
    pub fn is_multisampled(&self) -> bool {
        self.samples > 1
    }

    /// Returns the byte size of level 0 computed from the format's bits per pixel.
    ///
    /// Every depth slice is counted. The result saturates at `usize::MAX`.
    pub fn level0_size(&self) -> usize {
        let texels = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(self.depth.max(1) as usize);
        texels.saturating_mul(self.format.bits_per_pixel() as usize) / 8
    }
}
