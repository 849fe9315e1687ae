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

use lumen_core::renderer::{
    Caps, ColorSpace, CubeFace, ImageDescriptor, ImageFormat, Origin2D, SubUpdateViolation,
    TextureError, TextureTarget,
};
use lumen_infra::graphics::gl::tokens::*;
use lumen_infra::{formats_for_caps, DeviceCall, RecordingDevice};
use lumen_lanes::{FormatTableCache, TextureUploadLane, UploadKind};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn lane(caps: Caps) -> TextureUploadLane {
    init_logging();
    TextureUploadLane::new(Arc::new(formats_for_caps(caps)))
}

#[test]
fn test_volume_upload_issues_single_tex_image_3d() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 8, 8)
        .with_depth(4)
        .with_layer(vec![0; 8 * 8 * 4 * 4]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(&mut device, &image, TextureTarget::Texture3D, Some(0), false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(kind, UploadKind::Volume { compressed: false });
    assert_eq!(
        device.calls(),
        &[DeviceCall::TexImage3D {
            target: GL_TEXTURE_3D,
            level: 0,
            internal_format: GL_RGBA8,
            width: 8,
            height: 8,
            depth: 4,
            format: GL_RGBA,
            data_type: GL_UNSIGNED_BYTE,
            data_len: Some(1024),
        }]
    );
}

#[test]
fn test_compressed_volume_uploads_each_mip_level() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Dxt5, 8, 8)
        .with_depth(2)
        .with_layer(vec![0; 160])
        .with_mip_sizes(vec![128, 32]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(&mut device, &image, TextureTarget::Texture3D, Some(0), false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(kind, UploadKind::Volume { compressed: true });
    assert_eq!(
        device.calls(),
        &[
            DeviceCall::CompressedTexImage3D {
                target: GL_TEXTURE_3D,
                level: 0,
                internal_format: GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
                width: 8,
                height: 8,
                depth: 2,
                data_len: 128,
            },
            DeviceCall::CompressedTexImage3D {
                target: GL_TEXTURE_3D,
                level: 1,
                internal_format: GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
                width: 4,
                height: 4,
                depth: 1,
                data_len: 32,
            },
        ]
    );
}

#[test]
fn test_array_allocation_sizes_depth_by_slice_count() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4)
        .with_layer(vec![1; 64])
        .with_layer(vec![2; 64])
        .with_layer(vec![3; 64]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(&mut device, &image, TextureTarget::Texture2DArray, None, false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(kind, UploadKind::ArrayStorage);
    match device.calls() {
        [DeviceCall::TexImage3D {
            depth, data_len, ..
        }] => {
            assert_eq!(*depth, 3);
            assert_eq!(*data_len, None);
        }
        calls => panic!("unexpected calls: {calls:?}"),
    }
}

#[test]
fn test_array_slice_upload_targets_one_layer() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4)
        .with_layer(vec![1; 64])
        .with_layer(vec![2; 64])
        .with_layer(vec![3; 64]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    lane.upload(&mut device, &image, TextureTarget::Texture2DArray, Some(2), false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(
        device.calls(),
        &[DeviceCall::TexSubImage3D {
            target: GL_TEXTURE_2D_ARRAY,
            level: 0,
            z_offset: 2,
            width: 4,
            height: 4,
            depth: 1,
            format: GL_RGBA,
            data_type: GL_UNSIGNED_BYTE,
            data_len: Some(64),
        }]
    );
}

#[test]
fn test_compressed_array_slice_uses_compressed_sub_image() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Dxt5, 4, 4)
        .with_layer(vec![0; 16])
        .with_layer(vec![0; 16]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(&mut device, &image, TextureTarget::Texture2DArray, Some(1), false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(
        kind,
        UploadKind::ArraySlice {
            slice: 1,
            compressed: true
        }
    );
    assert_eq!(
        device.calls(),
        &[DeviceCall::CompressedTexSubImage3D {
            target: GL_TEXTURE_2D_ARRAY,
            level: 0,
            z_offset: 1,
            width: 4,
            height: 4,
            depth: 1,
            internal_format: GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
            data_len: 16,
        }]
    );
}

#[test]
fn test_mip_chain_walks_levels_with_floor_dimensions() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let sizes = vec![257 * 16 * 4, 128 * 8 * 4, 64 * 4 * 4];
    let total = sizes.iter().sum();
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 257, 16)
        .with_layer(vec![0; total])
        .with_mip_sizes(sizes.clone());
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    lane.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false)
        .unwrap();

    // --- 3. ASSERT ---
    let levels: Vec<_> = device
        .calls()
        .iter()
        .map(|call| match call {
            DeviceCall::TexImage2D {
                level,
                width,
                height,
                data_len,
                ..
            } => (*level, *width, *height, *data_len),
            other => panic!("unexpected call: {other:?}"),
        })
        .collect();
    assert_eq!(
        levels,
        vec![
            (0, 257, 16, Some(sizes[0])),
            (1, 128, 8, Some(sizes[1])),
            (2, 64, 4, Some(sizes[2])),
        ]
    );
}

#[test]
fn test_swizzle_precedes_levels_on_core_profile() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Alpha8, 2, 2).with_layer(vec![0; 4]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    lane.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false)
        .unwrap();

    // --- 3. ASSERT ---
    let calls = device.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        DeviceCall::TexParameterSwizzle {
            target: GL_TEXTURE_2D,
            swizzle: [GL_ZERO, GL_ZERO, GL_ZERO, GL_RED],
        }
    );
    assert!(matches!(
        calls[1],
        DeviceCall::TexImage2D {
            internal_format: GL_R8,
            ..
        }
    ));
}

#[test]
fn test_srgb_image_uses_srgb_format_only_when_linearizing() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 1, 1)
        .with_layer(vec![0; 4])
        .with_color_space(ColorSpace::Srgb);
    let mut linearized = RecordingDevice::new();
    let mut raw = RecordingDevice::new();

    // --- 2. ACT ---
    lane.upload(&mut linearized, &image, TextureTarget::Texture2D, Some(0), true)
        .unwrap();
    lane.upload(&mut raw, &image, TextureTarget::Texture2D, Some(0), false)
        .unwrap();

    // --- 3. ASSERT ---
    assert!(matches!(
        linearized.calls()[0],
        DeviceCall::TexImage2D {
            internal_format: GL_SRGB8_ALPHA8,
            ..
        }
    ));
    assert!(matches!(
        raw.calls()[0],
        DeviceCall::TexImage2D {
            internal_format: GL_RGBA8,
            ..
        }
    ));
}

#[test]
fn test_cube_face_selects_payload_by_index() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let mut image = ImageDescriptor::new(ImageFormat::Dxt5, 4, 4);
    for face in 0..6 {
        image = image.with_layer(vec![face; 16 + face as usize]);
    }
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(
            &mut device,
            &image,
            TextureTarget::CubeMapFace(CubeFace::NegativeZ),
            Some(5),
            false,
        )
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(kind, UploadKind::Compressed2D);
    assert_eq!(
        device.calls(),
        &[DeviceCall::CompressedTexImage2D {
            target: GL_TEXTURE_CUBE_MAP_NEGATIVE_Z,
            level: 0,
            internal_format: GL_COMPRESSED_RGBA_S3TC_DXT5_EXT,
            width: 4,
            height: 4,
            data_len: 21,
        }]
    );
}

#[test]
fn test_multisample_storage_has_fixed_locations_and_no_data() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 64, 32).with_samples(4);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let kind = lane
        .upload(&mut device, &image, TextureTarget::Texture2D, None, false)
        .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(kind, UploadKind::Multisample2D { samples: 4 });
    assert_eq!(
        device.calls(),
        &[DeviceCall::TexImage2DMultisample {
            target: GL_TEXTURE_2D_MULTISAMPLE,
            samples: 4,
            internal_format: GL_RGBA8,
            width: 64,
            height: 32,
            fixed_sample_locations: true,
        }]
    );
}

#[test]
fn test_failed_preconditions_issue_no_calls() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let one_layer = ImageDescriptor::new(ImageFormat::Rgba8, 2, 2).with_layer(vec![0; 16]);
    let short_mips = ImageDescriptor::new(ImageFormat::Rgba8, 2, 2)
        .with_layer(vec![0; 16])
        .with_mip_sizes(vec![16, 4]);
    let multisampled_volume = ImageDescriptor::new(ImageFormat::Rgba8, 2, 2)
        .with_depth(2)
        .with_samples(4);
    let no_levels = ImageDescriptor::new(ImageFormat::Rgba8, 2, 2)
        .with_layer(vec![0; 16])
        .with_mip_sizes(Vec::new());
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let out_of_range = lane.upload(
        &mut device,
        &one_layer,
        TextureTarget::Texture2DArray,
        Some(3),
        false,
    );
    let too_short = lane.upload(&mut device, &short_mips, TextureTarget::Texture2D, Some(0), false);
    let invalid = lane.upload(
        &mut device,
        &multisampled_volume,
        TextureTarget::Texture3D,
        None,
        false,
    );
    let empty_table = lane.upload(
        &mut device,
        &no_levels,
        TextureTarget::Texture2D,
        Some(0),
        false,
    );

    // --- 3. ASSERT ---
    assert_eq!(
        out_of_range,
        Err(TextureError::SliceOutOfBounds {
            index: 3,
            slice_count: 1
        })
    );
    assert_eq!(
        too_short,
        Err(TextureError::PayloadTooShort {
            level: 1,
            required: 20,
            available: 16
        })
    );
    assert_eq!(
        invalid,
        Err(TextureError::InvalidUploadCombination {
            target: TextureTarget::Texture3D,
            samples: 4
        })
    );
    assert_eq!(empty_table, Err(TextureError::EmptyMipTable));
    assert!(device.calls().is_empty());
}

#[test]
fn test_unsupported_format_is_reported() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::EMPTY);
    let image = ImageDescriptor::new(ImageFormat::Dxt1, 4, 4).with_layer(vec![0; 8]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let result = lane.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false);

    // --- 3. ASSERT ---
    assert_eq!(
        result,
        Err(TextureError::UnsupportedFormat {
            format: ImageFormat::Dxt1
        })
    );
    assert!(device.calls().is_empty());
}

#[test]
fn test_device_error_propagates() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Alpha8, 2, 2).with_layer(vec![0; 4]);
    let mut device = RecordingDevice::failing_at(1);

    // --- 2. ACT ---
    let result = lane.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false);

    // --- 3. ASSERT ---
    assert!(matches!(result, Err(TextureError::Backend(_))));
    assert_eq!(device.calls().len(), 1);
}

#[test]
fn test_sub_texture_updates_level_zero_region() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let image = ImageDescriptor::new(ImageFormat::Rgba8, 3, 2)
        .with_layer(vec![0; 24])
        .with_layer(vec![0; 24]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    lane.upload_sub_texture(
        &mut device,
        &image,
        TextureTarget::Texture2D,
        1,
        Origin2D { x: 5, y: 7 },
        false,
    )
    .unwrap();

    // --- 3. ASSERT ---
    assert_eq!(
        device.calls(),
        &[DeviceCall::TexSubImage2D {
            target: GL_TEXTURE_2D,
            level: 0,
            x: 5,
            y: 7,
            width: 3,
            height: 2,
            format: GL_RGBA,
            data_type: GL_UNSIGNED_BYTE,
            data_len: 24,
        }]
    );
}

#[test]
fn test_sub_texture_rejections_follow_check_order() {
    // --- 1. ARRANGE ---
    let lane = lane(Caps::OPENGL33);
    let origin = Origin2D { x: 0, y: 0 };
    let volume = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4)
        .with_depth(3)
        .with_layer(vec![0; 192]);
    // Mip-mapped and compressed: the mip check wins.
    let mipped = ImageDescriptor::new(ImageFormat::Dxt5, 4, 4)
        .with_layer(vec![0; 16])
        .with_mip_sizes(vec![16]);
    let multisampled = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4).with_samples(2);
    let compressed = ImageDescriptor::new(ImageFormat::Dxt5, 4, 4).with_layer(vec![0; 16]);
    let depth = ImageDescriptor::new(ImageFormat::Depth16, 4, 4).with_layer(vec![0; 32]);
    let empty = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let mut sub = |image: &ImageDescriptor, target| {
        lane.upload_sub_texture(&mut device, image, target, 0, origin, false)
    };
    let results = [
        sub(&volume, TextureTarget::Texture2D),
        sub(&compressed, TextureTarget::CubeMapFace(CubeFace::PositiveX)),
        sub(&mipped, TextureTarget::Texture2D),
        sub(&multisampled, TextureTarget::Texture2D),
        sub(&compressed, TextureTarget::Texture2D),
        sub(&depth, TextureTarget::Texture2D),
        sub(&empty, TextureTarget::Texture2D),
    ];

    // --- 3. ASSERT ---
    use SubUpdateViolation::*;
    assert_eq!(
        results,
        [
            Err(TextureError::UnsupportedOperation(NonTwoDimensional)),
            Err(TextureError::UnsupportedOperation(NonTwoDimensional)),
            Err(TextureError::UnsupportedOperation(MipMapped)),
            Err(TextureError::UnsupportedOperation(Multisampled)),
            Err(TextureError::UnsupportedOperation(Compressed)),
            Err(TextureError::UnsupportedOperation(Depth)),
            Err(TextureError::SliceOutOfBounds {
                index: 0,
                slice_count: 0
            }),
        ]
    );
    assert!(device.calls().is_empty());
}

#[test]
fn test_cache_feeds_lane_after_caps_change() {
    // --- 1. ARRANGE ---
    init_logging();
    let cache = FormatTableCache::new(formats_for_caps);
    let image = ImageDescriptor::new(ImageFormat::Etc1, 4, 4).with_layer(vec![0; 8]);
    let mut device = RecordingDevice::new();

    // --- 2. ACT ---
    let desktop = TextureUploadLane::new(cache.get_or_build(Caps::OPENGL33));
    let desktop_result =
        desktop.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false);
    let mobile = TextureUploadLane::new(cache.get_or_build(Caps::OPENGL_ES2));
    let mobile_result =
        mobile.upload(&mut device, &image, TextureTarget::Texture2D, Some(0), false);

    // --- 3. ASSERT ---
    assert!(desktop_result.is_err());
    assert_eq!(mobile_result, Ok(UploadKind::Compressed2D));
    assert_eq!(device.calls().len(), 1);
}
