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

// Lumen Sandbox
// Headless walkthrough of state merging, texture uploads and native buffers

use anyhow::{Context, Result};
use lumen_core::renderer::{
    merge_into, BlendMode, Caps, ColorSpace, CubeFace, ImageDescriptor, ImageFormat, Origin2D,
    RenderSettings, TextureTarget,
};
use lumen_core::RenderState;
use lumen_data::{BufferTracker, FloatBuffer, NativeBuffer, ShortBuffer};
use lumen_infra::{formats_for_caps, RecordingDevice};
use lumen_lanes::{FormatTableCache, TextureUploadLane};
use std::collections::BTreeMap;

const SETTINGS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/render_settings.ron");

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 3],
}

const VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

fn load_settings() -> Result<RenderSettings> {
    let text = std::fs::read_to_string(SETTINGS_PATH)
        .with_context(|| format!("reading {SETTINGS_PATH}"))?;
    RenderSettings::from_ron_str(&text).with_context(|| format!("parsing {SETTINGS_PATH}"))
}

fn resolve_material_state(settings: &RenderSettings) -> Result<RenderState> {
    let mut material = RenderState::new();
    material.set_blend_mode(BlendMode::Alpha);
    material.set_depth_write(false);

    let forced = settings.forced_state()?;
    let mut merged = RenderState::new();
    let effective = merge_into(&material, forced.as_ref(), &mut merged).clone();

    log::info!(
        "Effective state: cull={:?} blend={:?} depth_write={} line_width={} hash={:#018x}",
        effective.face_cull_mode(),
        effective.blend_mode(),
        effective.is_depth_write(),
        effective.line_width(),
        effective.content_hash()
    );
    Ok(effective)
}

fn upload_textures(lane: &TextureUploadLane, linearize_srgb: bool) -> Result<RecordingDevice> {
    let mut device = RecordingDevice::new();

    let albedo = ImageDescriptor::new(ImageFormat::Rgba8, 4, 4)
        .with_layer(vec![255; 64 + 16 + 4])
        .with_mip_sizes(vec![64, 16, 4])
        .with_color_space(ColorSpace::Srgb);
    lane.upload(&mut device, &albedo, TextureTarget::Texture2D, Some(0), linearize_srgb)?;

    let mut layers = ImageDescriptor::new(ImageFormat::Alpha8, 8, 8);
    for layer in 0..4u8 {
        layers = layers.with_layer(vec![layer; 64]);
    }
    let array = TextureTarget::Texture2DArray;
    lane.upload(&mut device, &layers, array, None, linearize_srgb)?;
    for slice in 0..layers.data.len() as u32 {
        lane.upload(&mut device, &layers, array, Some(slice), linearize_srgb)?;
    }

    let sky = ImageDescriptor::new(ImageFormat::Dxt1, 4, 4).with_layer(vec![0; 8]);
    lane.upload(
        &mut device,
        &sky,
        TextureTarget::CubeMapFace(CubeFace::PositiveY),
        Some(0),
        linearize_srgb,
    )?;

    let patch = ImageDescriptor::new(ImageFormat::Rgba8, 2, 2).with_layer(vec![0; 16]);
    lane.upload_sub_texture(
        &mut device,
        &patch,
        TextureTarget::Texture2D,
        0,
        Origin2D { x: 1, y: 1 },
        linearize_srgb,
    )?;

    Ok(device)
}

fn fill_buffers() -> Result<(FloatBuffer, ShortBuffer)> {
    let floats: &[f32] = bytemuck::cast_slice(VERTICES);
    let mut vertices = FloatBuffer::create_vector3_buffer(VERTICES.len() * 2);
    vertices.put(floats)?;

    let mut indices = ShortBuffer::with_capacity(3);
    indices.put(&[0, 1, 2])?;
    let mut indices = NativeBuffer::ensure_large_enough(Some(indices), 3);
    indices.put(&[2, 1, 0])?;

    Ok((vertices, indices))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings()?;
    BufferTracker::global().set_enabled(settings.track_native_buffers);

    resolve_material_state(&settings)?;

    let cache = FormatTableCache::new(formats_for_caps);
    let lane = TextureUploadLane::new(cache.get_or_build(Caps::OPENGL33));
    let device = upload_textures(&lane, settings.linearize_srgb)?;

    let mut per_call: BTreeMap<&str, usize> = BTreeMap::new();
    for call in device.calls() {
        *per_call.entry(call.name()).or_default() += 1;
    }
    for (name, count) in &per_call {
        log::info!("{name}: {count} call(s)");
    }

    let (vertices, indices) = fill_buffers()?;
    log::info!(
        "Vertex data: {} bytes, index data: {} bytes",
        vertices.as_bytes().len(),
        indices.as_bytes().len()
    );

    println!("{}", BufferTracker::global().report());
    Ok(())
}
