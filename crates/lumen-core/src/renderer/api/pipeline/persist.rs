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

//! The persisted form of a [`RenderState`].
//!
//! Field names and defaults are a compatibility surface shared with existing
//! material files. A key missing from the input takes its default; unknown
//! keys (such as the retired `pointSprite`) are ignored.

use super::enums::{
    BlendEquationAlpha, BlendFactor, BlendMode, BlendOperation, CompareFunction,
    CustomBlendFactors, FaceCullMode, StencilFaceState, StencilOperation,
};
use super::render_state::{RenderState, RenderStateFields, RenderStateValues};
use crate::renderer::error::RenderStateError;
use serde::{Deserialize, Serialize};

/// A flat, field-keyed record of a [`RenderState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct RenderStateRecord {
    pub wireframe: bool,
    pub cull_mode: FaceCullMode,
    pub depth_write: bool,
    pub depth_test: bool,
    pub color_write: bool,
    pub blend_mode: BlendMode,
    pub offset_enabled: bool,
    pub offset_factor: f32,
    pub offset_units: f32,
    pub stencil_test: bool,
    pub front_stencil_stencil_fail_operation: StencilOperation,
    pub front_stencil_depth_fail_operation: StencilOperation,
    pub front_stencil_depth_pass_operation: StencilOperation,
    pub back_stencil_stencil_fail_operation: StencilOperation,
    pub back_stencil_depth_fail_operation: StencilOperation,
    pub back_stencil_depth_pass_operation: StencilOperation,
    pub front_stencil_function: CompareFunction,
    pub back_stencil_function: CompareFunction,
    pub blend_equation: BlendOperation,
    pub blend_equation_alpha: BlendEquationAlpha,
    pub depth_func: CompareFunction,
    pub line_width: f32,
    #[serde(rename = "sfactorRGB")]
    pub sfactor_rgb: BlendFactor,
    #[serde(rename = "dfactorRGB")]
    pub dfactor_rgb: BlendFactor,
    pub sfactor_alpha: BlendFactor,
    pub dfactor_alpha: BlendFactor,
    pub apply_wire_frame: bool,
    pub apply_cull_mode: bool,
    pub apply_depth_write: bool,
    pub apply_depth_test: bool,
    pub apply_color_write: bool,
    pub apply_blend_equation: bool,
    pub apply_blend_equation_alpha: bool,
    pub apply_blend_mode: bool,
    pub apply_poly_offset: bool,
    pub apply_depth_func: bool,
    pub apply_line_width: bool,
    pub apply_stencil_test: bool,
}

impl Default for RenderStateRecord {
    fn default() -> Self {
        let values = RenderStateValues::DEFAULT;
        let mut record = Self::from_parts(&values, RenderStateFields::ALL);
        record.apply_stencil_test = false;
        record
    }
}

impl RenderStateRecord {
    fn from_parts(values: &RenderStateValues, applied: RenderStateFields) -> Self {
        let flag = |group| applied.contains(group);
        Self {
            wireframe: values.wireframe,
            cull_mode: values.cull_mode,
            depth_write: values.depth_write,
            depth_test: values.depth_test,
            color_write: values.color_write,
            blend_mode: values.blend_mode,
            offset_enabled: values.offset_enabled,
            offset_factor: values.offset_factor,
            offset_units: values.offset_units,
            stencil_test: values.stencil_test,
            front_stencil_stencil_fail_operation: values.front_stencil.fail_op,
            front_stencil_depth_fail_operation: values.front_stencil.depth_fail_op,
            front_stencil_depth_pass_operation: values.front_stencil.depth_pass_op,
            back_stencil_stencil_fail_operation: values.back_stencil.fail_op,
            back_stencil_depth_fail_operation: values.back_stencil.depth_fail_op,
            back_stencil_depth_pass_operation: values.back_stencil.depth_pass_op,
            front_stencil_function: values.front_stencil.compare,
            back_stencil_function: values.back_stencil.compare,
            blend_equation: values.blend_equation,
            blend_equation_alpha: values.blend_equation_alpha,
            depth_func: values.depth_func,
            line_width: values.line_width,
            sfactor_rgb: values.blend_factors.src_rgb,
            dfactor_rgb: values.blend_factors.dst_rgb,
            sfactor_alpha: values.blend_factors.src_alpha,
            dfactor_alpha: values.blend_factors.dst_alpha,
            apply_wire_frame: flag(RenderStateFields::WIREFRAME),
            apply_cull_mode: flag(RenderStateFields::CULL_MODE),
            apply_depth_write: flag(RenderStateFields::DEPTH_WRITE),
            apply_depth_test: flag(RenderStateFields::DEPTH_TEST),
            apply_color_write: flag(RenderStateFields::COLOR_WRITE),
            apply_blend_equation: flag(RenderStateFields::BLEND_EQUATION),
            apply_blend_equation_alpha: flag(RenderStateFields::BLEND_EQUATION_ALPHA),
            apply_blend_mode: flag(RenderStateFields::BLEND_MODE),
            apply_poly_offset: flag(RenderStateFields::POLY_OFFSET),
            apply_depth_func: flag(RenderStateFields::DEPTH_FUNC),
            apply_line_width: flag(RenderStateFields::LINE_WIDTH),
            apply_stencil_test: flag(RenderStateFields::STENCIL),
        }
    }

    fn applied(&self) -> RenderStateFields {
        let mut applied = RenderStateFields::EMPTY;
        applied.set(RenderStateFields::WIREFRAME, self.apply_wire_frame);
        applied.set(RenderStateFields::CULL_MODE, self.apply_cull_mode);
        applied.set(RenderStateFields::DEPTH_WRITE, self.apply_depth_write);
        applied.set(RenderStateFields::DEPTH_TEST, self.apply_depth_test);
        applied.set(RenderStateFields::COLOR_WRITE, self.apply_color_write);
        applied.set(RenderStateFields::BLEND_EQUATION, self.apply_blend_equation);
        applied.set(
            RenderStateFields::BLEND_EQUATION_ALPHA,
            self.apply_blend_equation_alpha,
        );
        applied.set(RenderStateFields::BLEND_MODE, self.apply_blend_mode);
        applied.set(RenderStateFields::POLY_OFFSET, self.apply_poly_offset);
        applied.set(RenderStateFields::DEPTH_FUNC, self.apply_depth_func);
        applied.set(RenderStateFields::LINE_WIDTH, self.apply_line_width);
        applied.set(RenderStateFields::STENCIL, self.apply_stencil_test);
        applied
    }
}

impl From<RenderState> for RenderStateRecord {
    fn from(state: RenderState) -> Self {
        Self::from_parts(&state.values, state.applied)
    }
}

impl TryFrom<RenderStateRecord> for RenderState {
    type Error = RenderStateError;

    /// Rebuilds a state, rejecting a persisted line width below `1.0`.
    fn try_from(record: RenderStateRecord) -> Result<Self, Self::Error> {
        if !(record.line_width >= 1.0) {
            return Err(RenderStateError::InvalidLineWidth {
                width: record.line_width,
            });
        }
        let values = RenderStateValues {
            wireframe: record.wireframe,
            cull_mode: record.cull_mode,
            depth_write: record.depth_write,
            depth_test: record.depth_test,
            depth_func: record.depth_func,
            color_write: record.color_write,
            blend_mode: record.blend_mode,
            blend_factors: CustomBlendFactors {
                src_rgb: record.sfactor_rgb,
                dst_rgb: record.dfactor_rgb,
                src_alpha: record.sfactor_alpha,
                dst_alpha: record.dfactor_alpha,
            },
            blend_equation: record.blend_equation,
            blend_equation_alpha: record.blend_equation_alpha,
            offset_enabled: record.offset_enabled,
            offset_factor: record.offset_factor,
            offset_units: record.offset_units,
            stencil_test: record.stencil_test,
            front_stencil: StencilFaceState {
                compare: record.front_stencil_function,
                fail_op: record.front_stencil_stencil_fail_operation,
                depth_fail_op: record.front_stencil_depth_fail_operation,
                depth_pass_op: record.front_stencil_depth_pass_operation,
            },
            back_stencil: StencilFaceState {
                compare: record.back_stencil_function,
                fail_op: record.back_stencil_stencil_fail_operation,
                depth_fail_op: record.back_stencil_depth_fail_operation,
                depth_pass_op: record.back_stencil_depth_pass_operation,
            },
            line_width: record.line_width,
        };
        Ok(RenderState::from_parts(values, record.applied()))
    }
}

impl Serialize for RenderState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RenderStateRecord::from_parts(&self.values, self.applied).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RenderState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = RenderStateRecord::deserialize(deserializer)?;
        RenderState::try_from(record).map_err(serde::de::Error::custom)
    }
}
