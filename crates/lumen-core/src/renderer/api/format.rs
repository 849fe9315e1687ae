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

//! Resolution of abstract pixel formats to backend format descriptors.

use crate::renderer::api::util::{ColorSpace, ImageFormat};
use crate::renderer::error::TextureError;
use std::fmt::Write;

/// A backend-specific upload format.
///
/// The three tokens are opaque to this crate; a backend fills them with its
/// native enum values (for OpenGL: internal format, transfer format, data type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// The storage format of the texture.
    pub internal_format: u32,
    /// The layout of the uploaded pixels.
    pub format: u32,
    /// The component type of the uploaded pixels.
    pub data_type: u32,
    /// The payload is block-compressed.
    pub compressed: bool,
    /// The format is emulated and needs the channel swizzle of its [`ImageFormat`].
    pub swizzle_required: bool,
}

impl FormatDescriptor {
    /// Creates an uncompressed descriptor.
    pub const fn new(internal_format: u32, format: u32, data_type: u32) -> Self {
        Self {
            internal_format,
            format,
            data_type,
            compressed: false,
            swizzle_required: false,
        }
    }

    /// Creates a compressed descriptor.
    pub const fn compressed(internal_format: u32, format: u32, data_type: u32) -> Self {
        Self {
            compressed: true,
            ..Self::new(internal_format, format, data_type)
        }
    }

    /// Marks the descriptor as needing a channel swizzle.
    pub const fn with_swizzle(mut self) -> Self {
        self.swizzle_required = true;
        self
    }
}

/// Format descriptors for every [`ImageFormat`], one row per color space.
///
/// A table is filled once for a capability set and is read-only afterwards.
/// An empty entry means the combination is unsupported.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatTable {
    linear: Vec<Option<FormatDescriptor>>,
    srgb: Vec<Option<FormatDescriptor>>,
}

impl Default for FormatTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatTable {
    /// Creates a table in which no format is supported.
    pub fn new() -> Self {
        Self {
            linear: vec![None; ImageFormat::COUNT],
            srgb: vec![None; ImageFormat::COUNT],
        }
    }

    fn row(&self, color_space: ColorSpace) -> &[Option<FormatDescriptor>] {
        match color_space {
            ColorSpace::Linear => &self.linear,
            ColorSpace::Srgb => &self.srgb,
        }
    }

    /// Registers the descriptor of `format` in `color_space`, replacing any previous entry.
    pub fn insert(
        &mut self,
        format: ImageFormat,
        color_space: ColorSpace,
        descriptor: FormatDescriptor,
    ) {
        let row = match color_space {
            ColorSpace::Linear => &mut self.linear,
            ColorSpace::Srgb => &mut self.srgb,
        };
        row[format.index()] = Some(descriptor);
    }

    /// Returns the raw entry, without any fallback.
    pub fn get(&self, format: ImageFormat, color_space: ColorSpace) -> Option<&FormatDescriptor> {
        self.row(color_space)[format.index()].as_ref()
    }

    /// Resolves the descriptor used to upload `format`.
    ///
    /// A depth format is always resolved as linear. When the sRGB entry is
    /// missing the linear one is used and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::UnsupportedFormat`] if neither entry exists.
    pub fn resolve(
        &self,
        format: ImageFormat,
        want_srgb: bool,
    ) -> Result<FormatDescriptor, TextureError> {
        let want_srgb = want_srgb && !format.is_depth_format();
        if want_srgb {
            if let Some(descriptor) = self.get(format, ColorSpace::Srgb) {
                return Ok(*descriptor);
            }
        }
        match self.get(format, ColorSpace::Linear) {
            Some(descriptor) => {
                if want_srgb {
                    log::warn!("No sRGB format available for '{format:?}'. Falling back to linear.");
                }
                Ok(*descriptor)
            }
            None => Err(TextureError::UnsupportedFormat { format }),
        }
    }

    /// Iterates over the supported formats with whether an sRGB entry exists.
    pub fn supported(&self) -> impl Iterator<Item = (ImageFormat, bool)> + '_ {
        ImageFormat::ALL.into_iter().filter_map(move |format| {
            self.get(format, ColorSpace::Linear)
                .map(|_| (format, self.get(format, ColorSpace::Srgb).is_some()))
        })
    }

    /// Logs the supported formats at debug level.
    pub fn log_supported(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let mut report = String::from("Supported texture formats:");
        for (format, srgb) in self.supported() {
            let suffix = if srgb { "Linear/sRGB" } else { "Linear" };
            let _ = write!(report, "\n * {format:?} {suffix}");
        }
        log::debug!("{report}");
    }
}
