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

//! OpenGL format tables.
//!
//! Fills a [`FormatTable`] with the internal format, transfer format and data
//! type OpenGL expects for every [`ImageFormat`] the capability set supports.

use super::tokens::*;
use lumen_core::renderer::{Caps, ColorSpace, FormatDescriptor, FormatTable, ImageFormat};

struct Builder {
    table: FormatTable,
}

impl Builder {
    fn linear(&mut self, format: ImageFormat, descriptor: FormatDescriptor) {
        self.table.insert(format, ColorSpace::Linear, descriptor);
    }

    fn srgb(&mut self, format: ImageFormat, descriptor: FormatDescriptor) {
        self.table.insert(format, ColorSpace::Srgb, descriptor);
    }
}

const fn plain(internal: u32, format: u32, data_type: u32) -> FormatDescriptor {
    FormatDescriptor::new(internal, format, data_type)
}

const fn swizzled(internal: u32, format: u32, data_type: u32) -> FormatDescriptor {
    FormatDescriptor::new(internal, format, data_type).with_swizzle()
}

const fn compressed(internal: u32, format: u32) -> FormatDescriptor {
    FormatDescriptor::compressed(internal, format, GL_UNSIGNED_BYTE)
}

/// Builds the OpenGL format table for a capability set.
///
/// Core-profile contexts have no luminance or alpha formats; those are
/// stored as `R`/`RG` textures and flagged as needing a swizzle.
pub fn formats_for_caps(caps: Caps) -> FormatTable {
    let mut b = Builder {
        table: FormatTable::new(),
    };
    let core = caps.contains(Caps::CORE_PROFILE);
    let srgb = caps.contains(Caps::SRGB);
    let rg = core || caps.contains(Caps::TEXTURE_RG);
    let half = caps.contains(Caps::HALF_FLOAT_TEXTURE);
    let float = caps.contains(Caps::FLOAT_TEXTURE);

    // Legacy luminance/alpha formats
    if core {
        b.linear(ImageFormat::Alpha8, swizzled(GL_R8, GL_RED, GL_UNSIGNED_BYTE));
        b.linear(ImageFormat::Luminance8, swizzled(GL_R8, GL_RED, GL_UNSIGNED_BYTE));
        b.linear(ImageFormat::Luminance8Alpha8, swizzled(GL_RG8, GL_RG, GL_UNSIGNED_BYTE));
        if half {
            b.linear(ImageFormat::Luminance16F, swizzled(GL_R16F, GL_RED, GL_HALF_FLOAT));
            b.linear(
                ImageFormat::Luminance16FAlpha16F,
                swizzled(GL_RG16F, GL_RG, GL_HALF_FLOAT),
            );
        }
        if float {
            b.linear(ImageFormat::Luminance32F, swizzled(GL_R32F, GL_RED, GL_FLOAT));
        }
    } else {
        b.linear(ImageFormat::Alpha8, plain(GL_ALPHA8, GL_ALPHA, GL_UNSIGNED_BYTE));
        b.linear(
            ImageFormat::Luminance8,
            plain(GL_LUMINANCE8, GL_LUMINANCE, GL_UNSIGNED_BYTE),
        );
        b.linear(
            ImageFormat::Luminance8Alpha8,
            plain(GL_LUMINANCE8_ALPHA8, GL_LUMINANCE_ALPHA, GL_UNSIGNED_BYTE),
        );
        if srgb {
            b.srgb(
                ImageFormat::Luminance8,
                plain(GL_SLUMINANCE8, GL_LUMINANCE, GL_UNSIGNED_BYTE),
            );
            b.srgb(
                ImageFormat::Luminance8Alpha8,
                plain(GL_SLUMINANCE8_ALPHA8, GL_LUMINANCE_ALPHA, GL_UNSIGNED_BYTE),
            );
        }
        if half {
            b.linear(
                ImageFormat::Luminance16F,
                plain(GL_LUMINANCE16F_ARB, GL_LUMINANCE, GL_HALF_FLOAT),
            );
            b.linear(
                ImageFormat::Luminance16FAlpha16F,
                plain(GL_LUMINANCE_ALPHA16F_ARB, GL_LUMINANCE_ALPHA, GL_HALF_FLOAT),
            );
        }
        if float {
            b.linear(
                ImageFormat::Luminance32F,
                plain(GL_LUMINANCE32F_ARB, GL_LUMINANCE, GL_FLOAT),
            );
        }
    }

    // 8-bit integer formats
    if rg {
        b.linear(ImageFormat::R8, plain(GL_R8, GL_RED, GL_UNSIGNED_BYTE));
        b.linear(ImageFormat::Rg8, plain(GL_RG8, GL_RG, GL_UNSIGNED_BYTE));
    }
    b.linear(ImageFormat::Rgb8, plain(GL_RGB8, GL_RGB, GL_UNSIGNED_BYTE));
    b.linear(ImageFormat::Rgba8, plain(GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE));
    if srgb {
        b.srgb(ImageFormat::Rgb8, plain(GL_SRGB8, GL_RGB, GL_UNSIGNED_BYTE));
        b.srgb(ImageFormat::Rgba8, plain(GL_SRGB8_ALPHA8, GL_RGBA, GL_UNSIGNED_BYTE));
    }
    if caps.contains(Caps::TEXTURE_BGRA) {
        b.linear(ImageFormat::Bgr8, plain(GL_RGB8, GL_BGR, GL_UNSIGNED_BYTE));
        b.linear(ImageFormat::Bgra8, plain(GL_RGBA8, GL_BGRA, GL_UNSIGNED_BYTE));
        if srgb {
            b.srgb(ImageFormat::Bgr8, plain(GL_SRGB8, GL_BGR, GL_UNSIGNED_BYTE));
            b.srgb(ImageFormat::Bgra8, plain(GL_SRGB8_ALPHA8, GL_BGRA, GL_UNSIGNED_BYTE));
        }
    }

    // Packed formats
    b.linear(ImageFormat::Rgb565, plain(GL_RGB565, GL_RGB, GL_UNSIGNED_SHORT_5_6_5));
    b.linear(
        ImageFormat::Rgb5A1,
        plain(GL_RGB5_A1, GL_RGBA, GL_UNSIGNED_SHORT_5_5_5_1),
    );
    if caps.contains(Caps::PACKED_FLOAT_TEXTURE) {
        b.linear(
            ImageFormat::Rgb111110F,
            plain(GL_R11F_G11F_B10F, GL_RGB, GL_UNSIGNED_INT_10F_11F_11F_REV),
        );
    }
    if caps.contains(Caps::SHARED_EXPONENT_TEXTURE) {
        b.linear(
            ImageFormat::Rgb9E5,
            plain(GL_RGB9_E5, GL_RGB, GL_UNSIGNED_INT_5_9_9_9_REV),
        );
    }

    // Float formats
    if half {
        if rg {
            b.linear(ImageFormat::R16F, plain(GL_R16F, GL_RED, GL_HALF_FLOAT));
            b.linear(ImageFormat::Rg16F, plain(GL_RG16F, GL_RG, GL_HALF_FLOAT));
        }
        b.linear(ImageFormat::Rgb16F, plain(GL_RGB16F, GL_RGB, GL_HALF_FLOAT));
        b.linear(ImageFormat::Rgba16F, plain(GL_RGBA16F, GL_RGBA, GL_HALF_FLOAT));
    }
    if float {
        if rg {
            b.linear(ImageFormat::R32F, plain(GL_R32F, GL_RED, GL_FLOAT));
            b.linear(ImageFormat::Rg32F, plain(GL_RG32F, GL_RG, GL_FLOAT));
        }
        b.linear(ImageFormat::Rgb32F, plain(GL_RGB32F, GL_RGB, GL_FLOAT));
        b.linear(ImageFormat::Rgba32F, plain(GL_RGBA32F, GL_RGBA, GL_FLOAT));
    }

    // Compressed formats
    if caps.contains(Caps::TEXTURE_COMPRESSION_S3TC) {
        b.linear(ImageFormat::Dxt1, compressed(GL_COMPRESSED_RGB_S3TC_DXT1_EXT, GL_RGB));
        b.linear(ImageFormat::Dxt1A, compressed(GL_COMPRESSED_RGBA_S3TC_DXT1_EXT, GL_RGBA));
        b.linear(ImageFormat::Dxt3, compressed(GL_COMPRESSED_RGBA_S3TC_DXT3_EXT, GL_RGBA));
        b.linear(ImageFormat::Dxt5, compressed(GL_COMPRESSED_RGBA_S3TC_DXT5_EXT, GL_RGBA));
        if srgb {
            b.srgb(ImageFormat::Dxt1, compressed(GL_COMPRESSED_SRGB_S3TC_DXT1_EXT, GL_RGB));
            b.srgb(
                ImageFormat::Dxt1A,
                compressed(GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT, GL_RGBA),
            );
            b.srgb(
                ImageFormat::Dxt3,
                compressed(GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT, GL_RGBA),
            );
            b.srgb(
                ImageFormat::Dxt5,
                compressed(GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT, GL_RGBA),
            );
        }
    }
    if caps.contains(Caps::TEXTURE_COMPRESSION_RGTC) {
        b.linear(ImageFormat::Rgtc1, compressed(GL_COMPRESSED_RED_RGTC1, GL_RED));
        b.linear(ImageFormat::Rgtc2, compressed(GL_COMPRESSED_RG_RGTC2, GL_RG));
    }
    if caps.contains(Caps::TEXTURE_COMPRESSION_ETC1) {
        b.linear(ImageFormat::Etc1, compressed(GL_ETC1_RGB8_OES, GL_RGB));
    }

    // Depth formats
    b.linear(
        ImageFormat::Depth,
        plain(GL_DEPTH_COMPONENT, GL_DEPTH_COMPONENT, GL_UNSIGNED_BYTE),
    );
    b.linear(
        ImageFormat::Depth16,
        plain(GL_DEPTH_COMPONENT16, GL_DEPTH_COMPONENT, GL_UNSIGNED_SHORT),
    );
    if caps.contains(Caps::DEPTH24) {
        b.linear(
            ImageFormat::Depth24,
            plain(GL_DEPTH_COMPONENT24, GL_DEPTH_COMPONENT, GL_UNSIGNED_INT),
        );
    }
    if core {
        b.linear(
            ImageFormat::Depth32,
            plain(GL_DEPTH_COMPONENT32, GL_DEPTH_COMPONENT, GL_UNSIGNED_INT),
        );
    }
    if caps.contains(Caps::FLOAT_DEPTH) {
        b.linear(
            ImageFormat::Depth32F,
            plain(GL_DEPTH_COMPONENT32F, GL_DEPTH_COMPONENT, GL_FLOAT),
        );
    }
    if caps.contains(Caps::DEPTH_STENCIL) {
        b.linear(
            ImageFormat::Depth24Stencil8,
            plain(GL_DEPTH24_STENCIL8, GL_DEPTH_STENCIL, GL_UNSIGNED_INT_24_8),
        );
    }

    b.table
}
