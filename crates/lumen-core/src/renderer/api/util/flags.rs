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

//! Hardware capability flags.

use crate::lumen_bitflags;

lumen_bitflags! {
    /// The set of hardware capabilities a format table is built for.
    ///
    /// The format table consumes this set as an opaque input. Which flags a
    /// device reports is decided by the backend when the context is created.
    pub struct Caps: u32 {
        /// Core-profile context: legacy luminance/alpha formats must be emulated with swizzles.
        const CORE_PROFILE = 1 << 0;
        /// One and two channel (`R`/`RG`) textures.
        const TEXTURE_RG = 1 << 1;
        /// BGR/BGRA transfer layouts.
        const TEXTURE_BGRA = 1 << 2;
        /// 32-bit float textures.
        const FLOAT_TEXTURE = 1 << 3;
        /// 16-bit float textures.
        const HALF_FLOAT_TEXTURE = 1 << 4;
        /// 11-11-10 packed float textures.
        const PACKED_FLOAT_TEXTURE = 1 << 5;
        /// Shared-exponent textures.
        const SHARED_EXPONENT_TEXTURE = 1 << 6;
        /// sRGB internal formats.
        const SRGB = 1 << 7;
        /// S3TC/DXT compression.
        const TEXTURE_COMPRESSION_S3TC = 1 << 8;
        /// RGTC compression.
        const TEXTURE_COMPRESSION_RGTC = 1 << 9;
        /// ETC1 compression.
        const TEXTURE_COMPRESSION_ETC1 = 1 << 10;
        /// 24-bit depth buffers.
        const DEPTH24 = 1 << 11;
        /// Packed depth/stencil buffers.
        const DEPTH_STENCIL = 1 << 12;
        /// Float depth buffers.
        const FLOAT_DEPTH = 1 << 13;
    }
}

impl Caps {
    /// A typical desktop OpenGL 3.3 core context.
    pub const OPENGL33: Self = Self::ALL.without(Self::TEXTURE_COMPRESSION_ETC1);

    /// A typical OpenGL ES 2.0 context.
    pub const OPENGL_ES2: Self = Self::EMPTY
        .with(Self::TEXTURE_COMPRESSION_ETC1)
        .with(Self::DEPTH24);
}

#[cfg(test)]
mod tests {
    use super::Caps;

    #[test]
    fn test_presets() {
        assert!(Caps::OPENGL33.contains(Caps::CORE_PROFILE | Caps::SRGB));
        assert!(!Caps::OPENGL33.contains(Caps::TEXTURE_COMPRESSION_ETC1));
        assert!(!Caps::OPENGL_ES2.contains(Caps::CORE_PROFILE));
        assert_eq!(
            format!("{:?}", Caps::OPENGL_ES2),
            "Caps { TEXTURE_COMPRESSION_ETC1 | DEPTH24 }"
        );
    }
}
