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

use lumen_core::renderer::{Caps, ColorSpace, ImageFormat};
use lumen_infra::graphics::gl::tokens::*;
use lumen_infra::formats_for_caps;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_every_linear_entry_resolves_for_full_caps() {
    // --- 1. ARRANGE ---
    init_logging();
    let table = formats_for_caps(Caps::ALL);

    // --- 2. ACT ---
    table.log_supported();
    let supported: Vec<_> = table.supported().map(|(format, _)| format).collect();

    // --- 3. ASSERT ---
    assert_eq!(supported.len(), ImageFormat::COUNT);
    for format in ImageFormat::ALL {
        let descriptor = table.resolve(format, false).unwrap();
        assert_eq!(descriptor.compressed, format.is_compressed(), "{format:?}");
        assert_eq!(
            descriptor.swizzle_required,
            format.swizzle().is_some(),
            "{format:?}"
        );
    }
}

#[test]
fn test_srgb_request_without_srgb_row_falls_back() {
    init_logging();
    let table = formats_for_caps(Caps::OPENGL33);

    assert!(table.get(ImageFormat::Rgb565, ColorSpace::Srgb).is_none());
    let descriptor = table.resolve(ImageFormat::Rgb565, true).unwrap();
    assert_eq!(descriptor.internal_format, GL_RGB565);
}

#[test]
fn test_depth_resolves_identically_for_srgb_requests() {
    let table = formats_for_caps(Caps::OPENGL33);
    for format in [
        ImageFormat::Depth16,
        ImageFormat::Depth24,
        ImageFormat::Depth24Stencil8,
        ImageFormat::Depth32F,
    ] {
        assert_eq!(
            table.resolve(format, true).unwrap(),
            table.resolve(format, false).unwrap()
        );
    }
}

#[test]
fn test_minimal_caps_reject_float_formats() {
    let table = formats_for_caps(Caps::EMPTY);
    assert!(table.resolve(ImageFormat::Rgba32F, false).is_err());
    assert!(table.resolve(ImageFormat::R8, false).is_err());
    assert_eq!(
        table.resolve(ImageFormat::Rgba8, true).unwrap().internal_format,
        GL_RGBA8
    );
}
