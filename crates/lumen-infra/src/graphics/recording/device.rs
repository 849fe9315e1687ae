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

use crate::graphics::gl::tokens::{GL_TEXTURE_2D, GL_TEXTURE_2D_MULTISAMPLE};
use crate::graphics::gl::IntoGl;
use lumen_core::renderer::{
    Extent3D, FormatDescriptor, Origin2D, TextureError, TextureSwizzle, TextureTarget,
    TextureUploadDevice,
};

/// One native call, with every argument in its OpenGL representation.
///
/// Payloads are recorded by length only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum DeviceCall {
    TexParameterSwizzle {
        target: u32,
        swizzle: [u32; 4],
    },
    TexImage3D {
        target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        data_type: u32,
        data_len: Option<usize>,
    },
    CompressedTexImage3D {
        target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        depth: u32,
        data_len: usize,
    },
    TexSubImage3D {
        target: u32,
        level: u32,
        z_offset: u32,
        width: u32,
        height: u32,
        depth: u32,
        format: u32,
        data_type: u32,
        data_len: Option<usize>,
    },
    CompressedTexSubImage3D {
        target: u32,
        level: u32,
        z_offset: u32,
        width: u32,
        height: u32,
        depth: u32,
        internal_format: u32,
        data_len: usize,
    },
    CompressedTexImage2D {
        target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        data_len: usize,
    },
    TexImage2D {
        target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        format: u32,
        data_type: u32,
        data_len: Option<usize>,
    },
    TexSubImage2D {
        target: u32,
        level: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        format: u32,
        data_type: u32,
        data_len: usize,
    },
    TexImage2DMultisample {
        target: u32,
        samples: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        fixed_sample_locations: bool,
    },
}

impl DeviceCall {
    /// The name of the OpenGL entry point this call stands for.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceCall::TexParameterSwizzle { .. } => "glTexParameteriv",
            DeviceCall::TexImage3D { .. } => "glTexImage3D",
            DeviceCall::CompressedTexImage3D { .. } => "glCompressedTexImage3D",
            DeviceCall::TexSubImage3D { .. } => "glTexSubImage3D",
            DeviceCall::CompressedTexSubImage3D { .. } => "glCompressedTexSubImage3D",
            DeviceCall::CompressedTexImage2D { .. } => "glCompressedTexImage2D",
            DeviceCall::TexImage2D { .. } => "glTexImage2D",
            DeviceCall::TexSubImage2D { .. } => "glTexSubImage2D",
            DeviceCall::TexImage2DMultisample { .. } => "glTexImage2DMultisample",
        }
    }
}

/// A [`TextureUploadDevice`] that issues no GPU work and records every call.
///
/// Used headless (tests, tools) to observe exactly which native sequence an
/// upload produces. Every call is traced through the `log` facade.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    calls: Vec<DeviceCall>,
    fail_at: Option<usize>,
}

impl RecordingDevice {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `index`-th call (0-based) fail with a backend error.
    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(index),
        }
    }

    /// Returns the calls recorded so far.
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: DeviceCall) -> Result<(), TextureError> {
        if self.fail_at == Some(self.calls.len()) {
            log::error!("RecordingDevice: injected failure on {}", call.name());
            return Err(TextureError::Backend(format!(
                "{} rejected by the recording device",
                call.name()
            )));
        }
        log::trace!("RecordingDevice: {call:?}");
        self.calls.push(call);
        Ok(())
    }
}

impl TextureUploadDevice for RecordingDevice {
    fn set_texture_swizzle(
        &mut self,
        target: TextureTarget,
        swizzle: TextureSwizzle,
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::TexParameterSwizzle {
            target: target.into_gl(),
            swizzle: swizzle.into_gl(),
        })
    }

    fn tex_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        size: Extent3D,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::TexImage3D {
            target: target.into_gl(),
            level,
            internal_format: format.internal_format,
            width: size.width,
            height: size.height,
            depth: size.depth,
            format: format.format,
            data_type: format.data_type,
            data_len: data.map(<[u8]>::len),
        })
    }

    fn compressed_tex_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        size: Extent3D,
        data: &[u8],
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::CompressedTexImage3D {
            target: target.into_gl(),
            level,
            internal_format: format.internal_format,
            width: size.width,
            height: size.height,
            depth: size.depth,
            data_len: data.len(),
        })
    }

    fn tex_sub_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        z_offset: u32,
        size: Extent3D,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::TexSubImage3D {
            target: target.into_gl(),
            level,
            z_offset,
            width: size.width,
            height: size.height,
            depth: size.depth,
            format: format.format,
            data_type: format.data_type,
            data_len: data.map(<[u8]>::len),
        })
    }

    fn compressed_tex_sub_image_3d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        z_offset: u32,
        size: Extent3D,
        data: &[u8],
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::CompressedTexSubImage3D {
            target: target.into_gl(),
            level,
            z_offset,
            width: size.width,
            height: size.height,
            depth: size.depth,
            internal_format: format.internal_format,
            data_len: data.len(),
        })
    }

    fn compressed_tex_image_2d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::CompressedTexImage2D {
            target: target.into_gl(),
            level,
            internal_format: format.internal_format,
            width,
            height,
            data_len: data.len(),
        })
    }

    fn tex_image_2d(
        &mut self,
        target: TextureTarget,
        level: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        data: Option<&[u8]>,
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::TexImage2D {
            target: target.into_gl(),
            level,
            internal_format: format.internal_format,
            width,
            height,
            format: format.format,
            data_type: format.data_type,
            data_len: data.map(<[u8]>::len),
        })
    }

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
    ) -> Result<(), TextureError> {
        self.record(DeviceCall::TexSubImage2D {
            target: target.into_gl(),
            level,
            x: origin.x,
            y: origin.y,
            width,
            height,
            format: format.format,
            data_type: format.data_type,
            data_len: data.len(),
        })
    }

    fn tex_image_2d_multisample(
        &mut self,
        target: TextureTarget,
        samples: u32,
        format: &FormatDescriptor,
        width: u32,
        height: u32,
        fixed_sample_locations: bool,
    ) -> Result<(), TextureError> {
        // Multisampled storage lives on its own binding point.
        let target = match target.into_gl() {
            GL_TEXTURE_2D => GL_TEXTURE_2D_MULTISAMPLE,
            other => other,
        };
        self.record(DeviceCall::TexImage2DMultisample {
            target,
            samples,
            internal_format: format.internal_format,
            width,
            height,
            fixed_sample_locations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::tokens::*;

    const RGBA8: FormatDescriptor = FormatDescriptor::new(GL_RGBA8, GL_RGBA, GL_UNSIGNED_BYTE);

    #[test]
    fn test_records_in_order() {
        let mut device = RecordingDevice::new();
        device
            .tex_image_2d(TextureTarget::Texture2D, 0, &RGBA8, 4, 4, Some(&[0u8; 64][..]))
            .unwrap();
        device
            .tex_image_2d(TextureTarget::Texture2D, 1, &RGBA8, 2, 2, None)
            .unwrap();

        let calls = device.take_calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            calls[1],
            DeviceCall::TexImage2D {
                level: 1,
                data_len: None,
                ..
            }
        ));
        assert!(device.calls().is_empty());
    }

    #[test]
    fn test_multisample_uses_multisample_binding() {
        let mut device = RecordingDevice::new();
        device
            .tex_image_2d_multisample(TextureTarget::Texture2D, 4, &RGBA8, 8, 8, true)
            .unwrap();
        assert!(matches!(
            device.calls()[0],
            DeviceCall::TexImage2DMultisample {
                target: GL_TEXTURE_2D_MULTISAMPLE,
                samples: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_injected_failure() {
        let mut device = RecordingDevice::failing_at(1);
        device
            .tex_image_2d(TextureTarget::Texture2D, 0, &RGBA8, 1, 1, None)
            .unwrap();
        let err = device
            .tex_image_2d(TextureTarget::Texture2D, 1, &RGBA8, 1, 1, None)
            .unwrap_err();
        assert!(matches!(err, TextureError::Backend(_)));
        assert_eq!(device.calls().len(), 1);
        assert_eq!(device.calls()[0].name(), "glTexImage2D");
    }
}
