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

//! Generic rendering enums.

/// The abstract pixel layout of an image, independent of any graphics API.
///
/// The declaration order is the row index used by [`FormatTable`](crate::renderer::FormatTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    // Legacy single/dual channel formats
    /// 8-bit alpha only.
    Alpha8,
    /// 8-bit luminance.
    Luminance8,
    /// 16-bit float luminance.
    Luminance16F,
    /// 32-bit float luminance.
    Luminance32F,
    /// 8-bit luminance with 8-bit alpha.
    Luminance8Alpha8,
    /// 16-bit float luminance with 16-bit float alpha.
    Luminance16FAlpha16F,
    // 8-bit integer formats
    /// One 8-bit normalized channel.
    R8,
    /// Two 8-bit normalized channels.
    Rg8,
    /// Three 8-bit normalized channels.
    Rgb8,
    /// Three 8-bit normalized channels in BGR order.
    Bgr8,
    /// Four 8-bit normalized channels.
    Rgba8,
    /// Four 8-bit normalized channels in BGRA order.
    Bgra8,
    // Packed formats
    /// 5-6-5 packed RGB.
    Rgb565,
    /// 5-5-5-1 packed RGBA.
    Rgb5A1,
    /// 11-11-10 packed float RGB.
    Rgb111110F,
    /// RGB with a shared 5-bit exponent.
    Rgb9E5,
    // Float formats
    /// One 16-bit float channel.
    R16F,
    /// Two 16-bit float channels.
    Rg16F,
    /// Three 16-bit float channels.
    Rgb16F,
    /// Four 16-bit float channels.
    Rgba16F,
    /// One 32-bit float channel.
    R32F,
    /// Two 32-bit float channels.
    Rg32F,
    /// Three 32-bit float channels.
    Rgb32F,
    /// Four 32-bit float channels.
    Rgba32F,
    // Block-compressed formats
    /// S3TC DXT1, opaque.
    Dxt1,
    /// S3TC DXT1 with 1-bit alpha.
    Dxt1A,
    /// S3TC DXT3.
    Dxt3,
    /// S3TC DXT5.
    Dxt5,
    /// RGTC1, one channel.
    Rgtc1,
    /// RGTC2, two channels.
    Rgtc2,
    /// ETC1 RGB.
    Etc1,
    // Depth/stencil formats
    /// Depth with a driver-chosen precision.
    Depth,
    /// 16-bit depth.
    Depth16,
    /// 24-bit depth.
    Depth24,
    /// 24-bit depth with 8-bit stencil.
    Depth24Stencil8,
    /// 32-bit integer depth.
    Depth32,
    /// 32-bit float depth.
    Depth32F,
}

impl ImageFormat {
    /// The number of known formats.
    pub const COUNT: usize = 37;

    /// Every known format, in declaration order.
    pub const ALL: [ImageFormat; Self::COUNT] = [
        ImageFormat::Alpha8,
        ImageFormat::Luminance8,
        ImageFormat::Luminance16F,
        ImageFormat::Luminance32F,
        ImageFormat::Luminance8Alpha8,
        ImageFormat::Luminance16FAlpha16F,
        ImageFormat::R8,
        ImageFormat::Rg8,
        ImageFormat::Rgb8,
        ImageFormat::Bgr8,
        ImageFormat::Rgba8,
        ImageFormat::Bgra8,
        ImageFormat::Rgb565,
        ImageFormat::Rgb5A1,
        ImageFormat::Rgb111110F,
        ImageFormat::Rgb9E5,
        ImageFormat::R16F,
        ImageFormat::Rg16F,
        ImageFormat::Rgb16F,
        ImageFormat::Rgba16F,
        ImageFormat::R32F,
        ImageFormat::Rg32F,
        ImageFormat::Rgb32F,
        ImageFormat::Rgba32F,
        ImageFormat::Dxt1,
        ImageFormat::Dxt1A,
        ImageFormat::Dxt3,
        ImageFormat::Dxt5,
        ImageFormat::Rgtc1,
        ImageFormat::Rgtc2,
        ImageFormat::Etc1,
        ImageFormat::Depth,
        ImageFormat::Depth16,
        ImageFormat::Depth24,
        ImageFormat::Depth24Stencil8,
        ImageFormat::Depth32,
        ImageFormat::Depth32F,
    ];

    /// Returns the row index of this format in a format table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the number of bits a single pixel occupies.
    ///
    /// For block-compressed formats this is the average over a 4x4 block.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            ImageFormat::Alpha8 | ImageFormat::Luminance8 | ImageFormat::R8 => 8,
            ImageFormat::Luminance16F
            | ImageFormat::Luminance8Alpha8
            | ImageFormat::Rg8
            | ImageFormat::Rgb565
            | ImageFormat::Rgb5A1
            | ImageFormat::R16F
            | ImageFormat::Depth16 => 16,
            ImageFormat::Rgb8 | ImageFormat::Bgr8 | ImageFormat::Depth | ImageFormat::Depth24 => {
                24
            }
            ImageFormat::Luminance32F
            | ImageFormat::Luminance16FAlpha16F
            | ImageFormat::Rgba8
            | ImageFormat::Bgra8
            | ImageFormat::Rgb111110F
            | ImageFormat::Rgb9E5
            | ImageFormat::Rg16F
            | ImageFormat::R32F
            | ImageFormat::Depth24Stencil8
            | ImageFormat::Depth32
            | ImageFormat::Depth32F => 32,
            ImageFormat::Rgb16F => 48,
            ImageFormat::Rgba16F | ImageFormat::Rg32F => 64,
            ImageFormat::Rgb32F => 96,
            ImageFormat::Rgba32F => 128,
            ImageFormat::Dxt1 | ImageFormat::Dxt1A | ImageFormat::Rgtc1 | ImageFormat::Etc1 => 4,
            ImageFormat::Dxt3 | ImageFormat::Dxt5 | ImageFormat::Rgtc2 => 8,
        }
    }

    /// Returns `true` for block-compressed formats.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            ImageFormat::Dxt1
                | ImageFormat::Dxt1A
                | ImageFormat::Dxt3
                | ImageFormat::Dxt5
                | ImageFormat::Rgtc1
                | ImageFormat::Rgtc2
                | ImageFormat::Etc1
        )
    }

    /// Returns `true` for depth and depth/stencil formats.
    ///
    /// These have no color space, so an sRGB request is meaningless for them.
    pub const fn is_depth_format(self) -> bool {
        matches!(
            self,
            ImageFormat::Depth
                | ImageFormat::Depth16
                | ImageFormat::Depth24
                | ImageFormat::Depth24Stencil8
                | ImageFormat::Depth32
                | ImageFormat::Depth32F
        )
    }
}

/// The color space the pixel values of an image are encoded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Values are linear.
    #[default]
    Linear,
    /// Values are sRGB-encoded.
    Srgb,
}
