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

//! Resolution of a base state and an override state into an effective state.

use super::render_state::{RenderState, RenderStateFields, RenderStateValues};

impl RenderStateValues {
    /// Copies the fields of one property group from `source`.
    ///
    /// `group` must be a single flag; unions are copied with [`copy_groups`](Self::copy_groups).
    pub fn copy_group(&mut self, source: &RenderStateValues, group: RenderStateFields) {
        match group {
            RenderStateFields::WIREFRAME => self.wireframe = source.wireframe,
            RenderStateFields::CULL_MODE => self.cull_mode = source.cull_mode,
            RenderStateFields::DEPTH_WRITE => self.depth_write = source.depth_write,
            RenderStateFields::DEPTH_TEST => self.depth_test = source.depth_test,
            RenderStateFields::DEPTH_FUNC => self.depth_func = source.depth_func,
            RenderStateFields::COLOR_WRITE => self.color_write = source.color_write,
            RenderStateFields::BLEND_MODE => {
                self.blend_mode = source.blend_mode;
                self.blend_factors = source.blend_factors;
            }
            RenderStateFields::BLEND_EQUATION => self.blend_equation = source.blend_equation,
            RenderStateFields::BLEND_EQUATION_ALPHA => {
                self.blend_equation_alpha = source.blend_equation_alpha;
            }
            RenderStateFields::POLY_OFFSET => {
                self.offset_enabled = source.offset_enabled;
                self.offset_factor = source.offset_factor;
                self.offset_units = source.offset_units;
            }
            RenderStateFields::STENCIL => {
                self.stencil_test = source.stencil_test;
                self.front_stencil = source.front_stencil;
                self.back_stencil = source.back_stencil;
            }
            RenderStateFields::LINE_WIDTH => self.line_width = source.line_width,
            _ => self.copy_groups(source, group),
        }
    }

    /// Copies every group contained in `groups` from `source`.
    pub fn copy_groups(&mut self, source: &RenderStateValues, groups: RenderStateFields) {
        for &(_, group) in RenderStateFields::NAMED {
            if groups.contains(group) {
                self.copy_group(source, group);
            }
        }
    }
}

/// Merges `base` with an optional override into `target`.
///
/// Without an override the result is `base` itself and `target` is not
/// touched. Otherwise every property group of `target` receives the
/// override's values if the override applied that group, and `base`'s values
/// if not. `target`'s applied mask is left as it was and its memoized hash is
/// always invalidated.
///
/// ## Returns
///
/// `base` when `additional` is `None`, `target` otherwise.
pub fn merge_into<'a>(
    base: &'a RenderState,
    additional: Option<&RenderState>,
    target: &'a mut RenderState,
) -> &'a RenderState {
    let Some(additional) = additional else {
        return base;
    };

    for &(_, group) in RenderStateFields::NAMED {
        let source = if additional.applied.contains(group) {
            &additional.values
        } else {
            &base.values
        };
        target.values.copy_group(source, group);
    }
    target.invalidate_hash();
    target
}

impl RenderState {
    /// Merges `self` with `additional` into `target`. See [`merge_into`].
    pub fn copy_merged_to<'a>(
        &'a self,
        additional: Option<&RenderState>,
        target: &'a mut RenderState,
    ) -> &'a RenderState {
        merge_into(self, additional, target)
    }
}
