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

//! Global settings for the rendering system.

use crate::renderer::api::pipeline::{FaceCullMode, RenderState};
use crate::renderer::error::RenderStateError;
use serde::{Deserialize, Serialize};

/// A collection of global settings that can affect the rendering process.
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Upload sRGB images with sRGB backend formats so sampling linearizes them.
    pub linearize_srgb: bool,
    /// If `true`, every material is forced to render in wireframe mode.
    pub show_wireframe: bool,
    /// A face cull mode forced onto every material.
    pub force_cull_mode: Option<FaceCullMode>,
    /// A line width forced onto every material.
    pub force_line_width: Option<f32>,
    /// Track native buffer allocations in the background reclaimer.
    pub track_native_buffers: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            linearize_srgb: true,
            show_wireframe: false,
            force_cull_mode: None,
            force_line_width: None,
            track_native_buffers: false,
        }
    }
}

impl RenderSettings {
    /// Parses settings from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Builds the override state that applies the forced settings on top of
    /// every material.
    ///
    /// ## Returns
    ///
    /// `None` when nothing is forced, otherwise an additional state in which
    /// only the forced groups are applied.
    ///
    /// ## Errors
    ///
    /// Returns [`RenderStateError::InvalidLineWidth`] if the forced line width is below `1.0`.
    pub fn forced_state(&self) -> Result<Option<RenderState>, RenderStateError> {
        let mut state = RenderState::additional();
        if self.show_wireframe {
            state.set_wireframe(true);
        }
        if let Some(cull_mode) = self.force_cull_mode {
            state.set_face_cull_mode(cull_mode);
        }
        if let Some(width) = self.force_line_width {
            state.set_line_width(width)?;
        }
        Ok((!state.applied().is_empty()).then_some(state))
    }
}
