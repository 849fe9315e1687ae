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

use super::tokens::*;
use lumen_core::renderer::{CubeFace, SwizzleSource, TextureSwizzle, TextureTarget};

/// A local extension trait to convert engine types into OpenGL enum values.
/// This avoids Rust's orphan rules while keeping an idiomatic `.into_gl()` syntax.
pub trait IntoGl<T> {
    /// Consumes self and converts it into its OpenGL representation.
    fn into_gl(self) -> T;
}

// --- Targets ---

impl IntoGl<u32> for CubeFace {
    fn into_gl(self) -> u32 {
        match self {
            CubeFace::PositiveX => GL_TEXTURE_CUBE_MAP_POSITIVE_X,
            CubeFace::NegativeX => GL_TEXTURE_CUBE_MAP_NEGATIVE_X,
            CubeFace::PositiveY => GL_TEXTURE_CUBE_MAP_POSITIVE_Y,
            CubeFace::NegativeY => GL_TEXTURE_CUBE_MAP_NEGATIVE_Y,
            CubeFace::PositiveZ => GL_TEXTURE_CUBE_MAP_POSITIVE_Z,
            CubeFace::NegativeZ => GL_TEXTURE_CUBE_MAP_NEGATIVE_Z,
        }
    }
}

impl IntoGl<u32> for TextureTarget {
    fn into_gl(self) -> u32 {
        match self {
            TextureTarget::Texture2D => GL_TEXTURE_2D,
            TextureTarget::Texture2DArray => GL_TEXTURE_2D_ARRAY,
            TextureTarget::Texture3D => GL_TEXTURE_3D,
            TextureTarget::CubeMapFace(face) => face.into_gl(),
        }
    }
}

// --- Swizzle ---

impl IntoGl<u32> for SwizzleSource {
    fn into_gl(self) -> u32 {
        match self {
            SwizzleSource::Red => GL_RED,
            SwizzleSource::Green => GL_GREEN,
            SwizzleSource::Blue => GL_BLUE,
            SwizzleSource::Alpha => GL_ALPHA,
            SwizzleSource::Zero => GL_ZERO,
            SwizzleSource::One => GL_ONE,
        }
    }
}

/// Produces the four values of a `GL_TEXTURE_SWIZZLE_RGBA` parameter.
impl IntoGl<[u32; 4]> for TextureSwizzle {
    fn into_gl(self) -> [u32; 4] {
        [
            self.r.into_gl(),
            self.g.into_gl(),
            self.b.into_gl(),
            self.a.into_gl(),
        ]
    }
}
