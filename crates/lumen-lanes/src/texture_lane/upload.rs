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

//! Texture upload dispatch.

use lumen_core::renderer::{
    ColorSpace, Extent3D, FormatDescriptor, FormatTable, ImageDescriptor, Origin2D,
    SubUpdateViolation, TextureError, TextureTarget, TextureUploadDevice,
};
use std::ops::Range;
use std::sync::Arc;

/// The native upload path an image takes, derived once per upload.
///
/// The paths are mutually exclusive: every level of an upload goes through
/// the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    /// A 3D texture, one call per level with the whole volume.
    Volume {
        /// The payload is block-compressed.
        compressed: bool,
    },
    /// Storage allocation for every layer of a 2D array, without data.
    ArrayStorage,
    /// One layer of a 2D array.
    ArraySlice {
        /// The layer written.
        slice: u32,
        /// The payload is block-compressed.
        compressed: bool,
    },
    /// A compressed 2D texture or cube face.
    Compressed2D,
    /// Multisampled 2D storage. Only level 0 exists and no data is sent.
    Multisample2D {
        /// Samples per texel.
        samples: u32,
    },
    /// An uncompressed 2D texture or cube face.
    Plain2D,
}

impl UploadKind {
    /// Selects the upload path.
    ///
    /// ## Arguments
    /// * `compressed_data` - The format is compressed *and* a payload is sent.
    ///   A compressed format without payload allocates storage through the
    ///   uncompressed path.
    /// * `index` - The payload index, or `None` to allocate an array's storage.
    ///
    /// ## Errors
    /// * [`TextureError::InvalidUploadCombination`] - Multisampling was
    ///   requested for anything but an uncompressed plain 2D texture.
    pub fn select(
        target: TextureTarget,
        compressed_data: bool,
        index: Option<u32>,
        samples: u32,
    ) -> Result<Self, TextureError> {
        let multisampled = samples > 1;
        let kind = match target {
            TextureTarget::Texture3D if !multisampled => UploadKind::Volume {
                compressed: compressed_data,
            },
            TextureTarget::Texture2DArray if !multisampled => match index {
                None => UploadKind::ArrayStorage,
                Some(slice) => UploadKind::ArraySlice {
                    slice,
                    compressed: compressed_data,
                },
            },
            TextureTarget::Texture2D | TextureTarget::CubeMapFace(_) if !multisampled => {
                if compressed_data {
                    UploadKind::Compressed2D
                } else {
                    UploadKind::Plain2D
                }
            }
            TextureTarget::Texture2D if !compressed_data => UploadKind::Multisample2D { samples },
            _ => return Err(TextureError::InvalidUploadCombination { target, samples }),
        };
        Ok(kind)
    }
}

/// One mip level to send.
#[derive(Debug)]
struct LevelPlan {
    level: u32,
    extent: Extent3D,
    bytes: Option<Range<usize>>,
}

/// Returns the payload selected by `index`.
///
/// An image without payloads describes storage only, so every index maps to
/// no data.
fn select_payload(
    image: &ImageDescriptor,
    index: Option<u32>,
) -> Result<Option<&[u8]>, TextureError> {
    let Some(index) = index else {
        return Ok(None);
    };
    if image.data.is_empty() {
        return Ok(None);
    }
    image
        .data
        .get(index as usize)
        .map(|payload| Some(payload.as_slice()))
        .ok_or(TextureError::SliceOutOfBounds {
            index,
            slice_count: image.data.len(),
        })
}

/// Splits the payload into per-level byte ranges.
///
/// A mip-map table must list at least one level.
fn plan_levels(
    image: &ImageDescriptor,
    payload: Option<&[u8]>,
) -> Result<Vec<LevelPlan>, TextureError> {
    let synthesized;
    let mip_sizes: &[usize] = match &image.mip_sizes {
        Some(sizes) if sizes.is_empty() => return Err(TextureError::EmptyMipTable),
        Some(sizes) => sizes,
        None => {
            synthesized = [payload.map_or_else(|| image.level0_size(), <[u8]>::len)];
            &synthesized
        }
    };

    let extent = image.extent();
    let mut offset = 0usize;
    let mut plans = Vec::with_capacity(mip_sizes.len());
    for (level, &size) in (0u32..).zip(mip_sizes) {
        let bytes = match payload {
            Some(payload) => {
                let end = offset.saturating_add(size);
                if end > payload.len() {
                    return Err(TextureError::PayloadTooShort {
                        level,
                        required: end,
                        available: payload.len(),
                    });
                }
                Some(offset..end)
            }
            None => None,
        };
        plans.push(LevelPlan {
            level,
            extent: extent.mip_level(level),
            bytes,
        });
        offset = offset.saturating_add(size);
    }
    Ok(plans)
}

/// Uploads CPU images to a [`TextureUploadDevice`].
///
/// The lane holds a snapshot of the format table; a new snapshot is obtained
/// from [`FormatTableCache`](crate::texture_lane::FormatTableCache) when the
/// capabilities change.
#[derive(Debug, Clone)]
pub struct TextureUploadLane {
    formats: Arc<FormatTable>,
}

impl TextureUploadLane {
    /// Creates a lane resolving formats with `formats`.
    pub fn new(formats: Arc<FormatTable>) -> Self {
        Self { formats }
    }

    /// Returns the format table in use.
    pub fn formats(&self) -> &Arc<FormatTable> {
        &self.formats
    }

    fn resolve(
        &self,
        image: &ImageDescriptor,
        linearize_srgb: bool,
    ) -> Result<FormatDescriptor, TextureError> {
        let want_srgb = image.color_space == ColorSpace::Srgb && linearize_srgb;
        self.formats.resolve(image.format, want_srgb)
    }

    /// Uploads every mip level of one payload of `image` to `target`.
    ///
    /// ## Arguments
    /// * `index` - The payload to send: the layer of an array, the face of a
    ///   cube map, `Some(0)` for plain images. `None` sends no data; for a 2D
    ///   array it allocates storage for every layer.
    /// * `linearize_srgb` - Use the sRGB backend format for sRGB images.
    ///
    /// ## Returns
    /// The path the upload took.
    ///
    /// ## Errors
    /// Fails before any device call if the format is unsupported, the payload
    /// index is out of range, the mip table overruns the payload or the
    /// target and sample count match no path. A device error aborts the
    /// upload midway and leaves the texture in an undefined state.
    pub fn upload<D: TextureUploadDevice + ?Sized>(
        &self,
        device: &mut D,
        image: &ImageDescriptor,
        target: TextureTarget,
        index: Option<u32>,
        linearize_srgb: bool,
    ) -> Result<UploadKind, TextureError> {
        let format = self.resolve(image, linearize_srgb)?;
        let payload = select_payload(image, index)?;
        let kind = UploadKind::select(
            target,
            format.compressed && payload.is_some(),
            index,
            image.samples,
        )?;
        let levels = plan_levels(image, payload)?;

        log::debug!(
            "Uploading {:?} {}x{}x{} to {:?} via {:?} ({} level(s))",
            image.format,
            image.width,
            image.height,
            image.depth,
            target,
            kind,
            levels.len()
        );

        if format.swizzle_required {
            if let Some(swizzle) = image.format.swizzle() {
                device.set_texture_swizzle(target, swizzle)?;
            }
        }

        let slice_count = image.slice_count() as u32;
        for plan in &levels {
            let data = match (&plan.bytes, payload) {
                (Some(range), Some(payload)) => Some(&payload[range.clone()]),
                _ => None,
            };
            let Extent3D { width, height, .. } = plan.extent;
            let layer = Extent3D {
                width,
                height,
                depth: 1,
            };

            match (kind, data) {
                (UploadKind::Volume { compressed: true }, Some(bytes)) => {
                    device.compressed_tex_image_3d(target, plan.level, &format, plan.extent, bytes)?
                }
                (UploadKind::Volume { .. }, data) => {
                    device.tex_image_3d(target, plan.level, &format, plan.extent, data)?
                }
                (UploadKind::ArrayStorage, _) => {
                    let storage = Extent3D {
                        depth: slice_count,
                        ..layer
                    };
                    device.tex_image_3d(target, plan.level, &format, storage, None)?
                }
                (UploadKind::ArraySlice { slice, compressed: true }, Some(bytes)) => device
                    .compressed_tex_sub_image_3d(target, plan.level, &format, slice, layer, bytes)?,
                (UploadKind::ArraySlice { slice, .. }, data) => {
                    device.tex_sub_image_3d(target, plan.level, &format, slice, layer, data)?
                }
                (UploadKind::Compressed2D, Some(bytes)) => device
                    .compressed_tex_image_2d(target, plan.level, &format, width, height, bytes)?,
                (UploadKind::Multisample2D { samples }, _) => {
                    if plan.level == 0 {
                        device.tex_image_2d_multisample(
                            target, samples, &format, width, height, true,
                        )?
                    }
                }
                (UploadKind::Compressed2D | UploadKind::Plain2D, data) => {
                    device.tex_image_2d(target, plan.level, &format, width, height, data)?
                }
            }
        }
        Ok(kind)
    }

    /// Replaces a region of level 0 of a plain 2D texture with payload `index`.
    ///
    /// The region starts at `origin` and has the size of `image`.
    ///
    /// ## Errors
    /// Fails before any device call with
    /// [`TextureError::UnsupportedOperation`] for a non-2D target or a layered,
    /// mip-mapped, multisampled, compressed or depth image (checked in that
    /// order), with [`TextureError::UnsupportedFormat`] if the format cannot
    /// be resolved and with [`TextureError::SliceOutOfBounds`] if the payload
    /// does not exist.
    pub fn upload_sub_texture<D: TextureUploadDevice + ?Sized>(
        &self,
        device: &mut D,
        image: &ImageDescriptor,
        target: TextureTarget,
        index: u32,
        origin: Origin2D,
        linearize_srgb: bool,
    ) -> Result<(), TextureError> {
        let violation = if target != TextureTarget::Texture2D || image.depth > 1 {
            Some(SubUpdateViolation::NonTwoDimensional)
        } else if image.has_mipmaps() {
            Some(SubUpdateViolation::MipMapped)
        } else if image.is_multisampled() {
            Some(SubUpdateViolation::Multisampled)
        } else if image.format.is_compressed() {
            Some(SubUpdateViolation::Compressed)
        } else if image.format.is_depth_format() {
            Some(SubUpdateViolation::Depth)
        } else {
            None
        };
        if let Some(violation) = violation {
            return Err(TextureError::UnsupportedOperation(violation));
        }

        let format = self.resolve(image, linearize_srgb)?;
        let data = image
            .data
            .get(index as usize)
            .ok_or(TextureError::SliceOutOfBounds {
                index,
                slice_count: image.data.len(),
            })?;

        device.tex_sub_image_2d(target, 0, &format, origin, image.width, image.height, data)
    }
}
