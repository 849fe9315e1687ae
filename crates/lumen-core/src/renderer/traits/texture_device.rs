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

use crate::renderer::api::format::FormatDescriptor;
use crate::renderer::api::texture::{Extent3D, Origin2D, TextureSwizzle, TextureTarget};
use crate::renderer::error::TextureError;

/// The native texture upload entry points of a graphics backend.
///
/// Each method maps to exactly one native call. The upload lane picks the
/// method from the shape of the image; an implementation never has to infer
/// it. Calls are issued on the thread that owns the graphics context.
pub trait TextureUploadDevice {
    /// Configures the per-channel read swizzle of the texture bound to `target`.
    fn set_texture_swizzle(
        &mut self,
        target: TextureTarget,
        swizzle: TextureSwizzle,
    ) -> Result<(), TextureError>;

    /// Specifies one level of a 3D texture, or the whole storage of a 2D array.
    /// ## Arguments
    /// * `size` - The level size. For an array, `depth` is the layer count.
    /// * `data` - The level payload, or `None` to only allocate storage.
    fn tex_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        size: Extent3D,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError>;

    /// Specifies one level of a 3D texture from a compressed payload.
    fn compressed_tex_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        size: Extent3D,
        data: &[u8],
    ) -> Result<(), TextureError>;

    /// Replaces `size.depth` layers of a 2D array starting at layer `z_offset`.
    fn tex_sub_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        z_offset: u32,
        size: Extent3D,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError>;

    /// Replaces layers of a 2D array from a compressed payload.
    fn compressed_tex_sub_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        z_offset: u32,
        size: Extent3D,
        data: &[u8],
    ) -> Result<(), TextureError>;

    /// Specifies one level of a 2D texture or cube face from a compressed payload.
    fn compressed_tex_image_2d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), TextureError>;

    /// Specifies one level of a 2D texture or cube face.
    /// ## Arguments
    /// * `data` - The level payload, or `None` to only allocate storage.
    fn tex_image_2d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError>;

    /// Replaces a region of one level of a 2D texture.
    #[allow(clippy::too_many_arguments)]
    fn tex_sub_image_2d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        origin: Origin2D,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), TextureError>;

    /// Allocates a multisampled 2D texture. There is no payload and no mip chain.
    fn tex_image_2d_multisample(
        &mut self,
        target: TextureTarget,
        samples: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        fixed_sample_locations: bool,
    ) -> Result<(), TextureError>;
}
