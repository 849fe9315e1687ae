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

//! Defines the hierarchy of error types for the rendering subsystem.

use crate::renderer::api::texture::TextureTarget;
use crate::renderer::api::util::ImageFormat;
use std::fmt;

/// An error raised by a [`RenderState`](crate::renderer::RenderState) mutator.
///
/// Mutators validate before touching any field, so a state is never left half-updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderStateError {
    /// The requested line width is below `1.0` (or not a number).
    InvalidLineWidth {
        /// The rejected width.
        width: f32,
    },
}

impl fmt::Display for RenderStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStateError::InvalidLineWidth { width } => {
                write!(
                    f,
                    "Invalid line width {width}: lineWidth must be greater than or equal to 1.0"
                )
            }
        }
    }
}

impl std::error::Error for RenderStateError {}

/// The precondition of a sub-region texture update that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubUpdateViolation {
    /// The target is not a plain 2D texture, or the image has more than one layer.
    NonTwoDimensional,
    /// The image carries a mip-map table.
    MipMapped,
    /// The image is multisampled.
    Multisampled,
    /// The image format is block-compressed.
    Compressed,
    /// The image format is a depth or depth/stencil format.
    Depth,
}

impl fmt::Display for SubUpdateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            SubUpdateViolation::NonTwoDimensional => "non-2D",
            SubUpdateViolation::MipMapped => "mip-mapped",
            SubUpdateViolation::Multisampled => "multisampled",
            SubUpdateViolation::Compressed => "compressed",
            SubUpdateViolation::Depth => "depth",
        };
        write!(f, "Updating {what} images is not supported")
    }
}

/// An error related to resolving a texture format or uploading image data.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureError {
    /// Neither an sRGB nor a linear backend format exists for the requested format.
    UnsupportedFormat {
        /// The format that could not be resolved.
        format: ImageFormat,
    },
    /// A sub-region update was requested on an incompatible image or target.
    UnsupportedOperation(SubUpdateViolation),
    /// The requested array slice has no corresponding payload.
    SliceOutOfBounds {
        /// The requested slice index.
        index: u32,
        /// The number of payloads the image holds.
        slice_count: usize,
    },
    /// The combination of target and sample count maps to no upload path.
    InvalidUploadCombination {
        /// The requested upload target.
        target: TextureTarget,
        /// The image's sample count.
        samples: u32,
    },
    /// The mip-map table describes more bytes than the payload holds.
    PayloadTooShort {
        /// The mip level whose byte range overflowed.
        level: u32,
        /// The end offset required by that level.
        required: usize,
        /// The payload length.
        available: usize,
    },
    /// The image carries a mip-map table with no levels.
    EmptyMipTable,
    /// An error reported by the backend device implementation.
    Backend(String),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::UnsupportedFormat { format } => {
                write!(
                    f,
                    "Image format '{format:?}' is unsupported by the video hardware."
                )
            }
            TextureError::UnsupportedOperation(violation) => write!(f, "{violation}"),
            TextureError::SliceOutOfBounds { index, slice_count } => {
                write!(
                    f,
                    "The image index {index} is not valid for the given image ({slice_count} slices)"
                )
            }
            TextureError::InvalidUploadCombination { target, samples } => {
                write!(
                    f,
                    "No upload path for target {target:?} with {samples} samples"
                )
            }
            TextureError::PayloadTooShort {
                level,
                required,
                available,
            } => {
                write!(
                    f,
                    "Mip level {level} needs {required} bytes but the payload only holds {available}"
                )
            }
            TextureError::EmptyMipTable => write!(f, "The image's mip-map table has no levels"),
            TextureError::Backend(msg) => write!(f, "Backend-specific texture error: {msg}"),
        }
    }
}

impl std::error::Error for TextureError {}

/// A high-level error that can occur within the rendering subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// An error raised while configuring a render state.
    RenderState(RenderStateError),
    /// An error raised while resolving formats or uploading textures.
    Texture(TextureError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RenderState(err) => write!(f, "Render state error: {err}"),
            RenderError::Texture(err) => write!(f, "Texture operation failed: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::RenderState(err) => Some(err),
            RenderError::Texture(err) => Some(err),
        }
    }
}

impl From<RenderStateError> for RenderError {
    fn from(err: RenderStateError) -> Self {
        RenderError::RenderState(err)
    }
}

impl From<TextureError> for RenderError {
    fn from(err: TextureError) -> Self {
        RenderError::Texture(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn unsupported_format_display_names_the_format() {
        let err = TextureError::UnsupportedFormat {
            format: ImageFormat::Dxt5,
        };
        assert_eq!(
            format!("{err}"),
            "Image format 'Dxt5' is unsupported by the video hardware."
        );
    }

    #[test]
    fn unsupported_operation_names_the_violation() {
        let err = TextureError::UnsupportedOperation(SubUpdateViolation::MipMapped);
        assert_eq!(
            format!("{err}"),
            "Updating mip-mapped images is not supported"
        );
    }

    #[test]
    fn render_error_wraps_texture_error() {
        let tex_err = TextureError::SliceOutOfBounds {
            index: 4,
            slice_count: 2,
        };
        let render_err: RenderError = tex_err.into();
        assert_eq!(
            format!("{render_err}"),
            "Texture operation failed: The image index 4 is not valid for the given image (2 slices)"
        );
        assert!(render_err.source().is_some());
    }

    #[test]
    fn render_error_wraps_render_state_error() {
        let render_err: RenderError = RenderStateError::InvalidLineWidth { width: 0.5 }.into();
        assert!(format!("{render_err}").contains("lineWidth must be greater than or equal to 1.0"));
    }
}
