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

//! The material render-state value object.
//!
//! A [`RenderState`] is a plain set of fixed-function values
//! ([`RenderStateValues`]) plus a [`RenderStateFields`] mask recording which
//! property groups were explicitly set. The mask is what makes partial
//! overrides possible, see [`merge_into`](super::merge_into).

use super::enums::{
    BlendEquationAlpha, BlendMode, BlendOperation, CompareFunction, CustomBlendFactors,
    FaceCullMode, StencilFaceState,
};
use crate::lumen_bitflags;
use crate::renderer::error::RenderStateError;
use ahash::AHasher;
use std::cell::Cell;
use std::hash::{Hash, Hasher};

lumen_bitflags! {
    /// The property groups of a [`RenderState`].
    ///
    /// Each group is applied (and merged) as one unit.
    pub struct RenderStateFields: u16 {
        /// `wireframe`
        const WIREFRAME = 1 << 0;
        /// `cull_mode`
        const CULL_MODE = 1 << 1;
        /// `depth_write`
        const DEPTH_WRITE = 1 << 2;
        /// `depth_test`
        const DEPTH_TEST = 1 << 3;
        /// `depth_func`
        const DEPTH_FUNC = 1 << 4;
        /// `color_write`
        const COLOR_WRITE = 1 << 5;
        /// `blend_mode` together with the custom blend factors.
        const BLEND_MODE = 1 << 6;
        /// `blend_equation`
        const BLEND_EQUATION = 1 << 7;
        /// `blend_equation_alpha`
        const BLEND_EQUATION_ALPHA = 1 << 8;
        /// The polygon offset switch, factor and units.
        const POLY_OFFSET = 1 << 9;
        /// The stencil switch and both face states.
        const STENCIL = 1 << 10;
        /// `line_width`
        const LINE_WIDTH = 1 << 11;
    }
}

impl RenderStateFields {
    /// The groups applied on a freshly created state.
    pub const FRESH: Self = Self::ALL
        .without(Self::STENCIL)
        .without(Self::DEPTH_FUNC)
        .without(Self::LINE_WIDTH);
}

/// The raw values of every fixed-function toggle a material can set.
///
/// Equality and hashing only consider the *effective* fields: the depth
/// function counts only while depth testing is on, the stencil faces only
/// while stencil testing is on and the custom blend factors only in
/// [`BlendMode::Custom`].
#[derive(Debug, Clone, Copy)]
pub struct RenderStateValues {
    /// Rasterize polygons as lines.
    pub wireframe: bool,
    /// Which faces are culled.
    pub cull_mode: FaceCullMode,
    /// Write to the depth buffer.
    pub depth_write: bool,
    /// Test against the depth buffer.
    pub depth_test: bool,
    /// The depth comparison.
    pub depth_func: CompareFunction,
    /// Write to the color buffer.
    pub color_write: bool,
    /// The blending preset.
    pub blend_mode: BlendMode,
    /// Factors used by [`BlendMode::Custom`].
    pub blend_factors: CustomBlendFactors,
    /// The color blend operation.
    pub blend_equation: BlendOperation,
    /// The alpha blend operation.
    pub blend_equation_alpha: BlendEquationAlpha,
    /// Polygon offset switch. `false` whenever factor and units were both set to zero.
    pub offset_enabled: bool,
    /// Polygon offset slope factor.
    pub offset_factor: f32,
    /// Polygon offset constant units.
    pub offset_units: f32,
    /// Stencil test switch.
    pub stencil_test: bool,
    /// Stencil configuration for front faces.
    pub front_stencil: StencilFaceState,
    /// Stencil configuration for back faces.
    pub back_stencil: StencilFaceState,
    /// Rasterized line width, never below `1.0`.
    pub line_width: f32,
}

impl RenderStateValues {
    /// Back-face culling, depth test and write on, everything else at its default.
    pub const DEFAULT: Self = Self {
        wireframe: false,
        cull_mode: FaceCullMode::Back,
        depth_write: true,
        depth_test: true,
        depth_func: CompareFunction::LessEqual,
        color_write: true,
        blend_mode: BlendMode::Off,
        blend_factors: CustomBlendFactors::REPLACE,
        blend_equation: BlendOperation::Add,
        blend_equation_alpha: BlendEquationAlpha::InheritColor,
        offset_enabled: false,
        offset_factor: 0.0,
        offset_units: 0.0,
        stencil_test: false,
        front_stencil: StencilFaceState::IGNORE,
        back_stencil: StencilFaceState::IGNORE,
        line_width: 1.0,
    };

    pub(crate) fn hash_effective<H: Hasher>(&self, state: &mut H) {
        self.wireframe.hash(state);
        self.cull_mode.hash(state);
        self.depth_write.hash(state);
        self.depth_test.hash(state);
        if self.depth_test {
            self.depth_func.hash(state);
        }
        self.color_write.hash(state);
        self.blend_mode.hash(state);
        if self.blend_mode == BlendMode::Custom {
            self.blend_factors.hash(state);
        }
        self.blend_equation.hash(state);
        self.blend_equation_alpha.hash(state);
        self.offset_enabled.hash(state);
        self.offset_factor.to_bits().hash(state);
        self.offset_units.to_bits().hash(state);
        self.stencil_test.hash(state);
        if self.stencil_test {
            self.front_stencil.hash(state);
            self.back_stencil.hash(state);
        }
        self.line_width.to_bits().hash(state);
    }
}

impl Default for RenderStateValues {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for RenderStateValues {
    fn eq(&self, other: &Self) -> bool {
        if self.depth_test != other.depth_test
            || (self.depth_test && self.depth_func != other.depth_func)
        {
            return false;
        }
        if self.stencil_test != other.stencil_test
            || (self.stencil_test
                && (self.front_stencil != other.front_stencil
                    || self.back_stencil != other.back_stencil))
        {
            return false;
        }
        if self.blend_mode != other.blend_mode
            || (self.blend_mode == BlendMode::Custom && self.blend_factors != other.blend_factors)
        {
            return false;
        }
        self.wireframe == other.wireframe
            && self.cull_mode == other.cull_mode
            && self.depth_write == other.depth_write
            && self.color_write == other.color_write
            && self.blend_equation == other.blend_equation
            && self.blend_equation_alpha == other.blend_equation_alpha
            && self.offset_enabled == other.offset_enabled
            && self.offset_factor.to_bits() == other.offset_factor.to_bits()
            && self.offset_units.to_bits() == other.offset_units.to_bits()
            && self.line_width.to_bits() == other.line_width.to_bits()
    }
}

impl Eq for RenderStateValues {}

/// One configuration of the fixed-function pipeline, owned by a material.
///
/// Every setter stores its value, marks its property group as applied and
/// forgets the memoized [`content_hash`](Self::content_hash).
///
/// The canonical instances are built by [`RenderState::new`] (the default),
/// [`RenderState::null`] and [`RenderState::additional`]. Each call returns a
/// fresh value, so nobody can mutate a shared canonical state.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub(super) values: RenderStateValues,
    pub(super) applied: RenderStateFields,
    pub(super) cached_hash: Cell<Option<u64>>,
}

impl RenderState {
    /// Creates the default state: back-face culling, depth test and write on.
    ///
    /// Every group except stencil, depth function and line width starts applied.
    pub fn new() -> Self {
        Self::from_parts(RenderStateValues::DEFAULT, RenderStateFields::FRESH)
    }

    /// The default state with culling and depth testing turned off.
    pub fn null() -> Self {
        let mut values = RenderStateValues::DEFAULT;
        values.cull_mode = FaceCullMode::Off;
        values.depth_test = false;
        Self::from_parts(values, RenderStateFields::FRESH)
    }

    /// The default state with nothing applied.
    ///
    /// Merging with this state as the override is a no-op, which makes it the
    /// starting point for building a partial override.
    pub fn additional() -> Self {
        Self::from_parts(RenderStateValues::DEFAULT, RenderStateFields::EMPTY)
    }

    /// Builds a state from raw values and an applied mask.
    pub fn from_parts(values: RenderStateValues, applied: RenderStateFields) -> Self {
        Self {
            values,
            applied,
            cached_hash: Cell::new(None),
        }
    }

    /// Returns the raw values.
    pub fn values(&self) -> &RenderStateValues {
        &self.values
    }

    /// Returns the groups that were explicitly set.
    pub fn applied(&self) -> RenderStateFields {
        self.applied
    }

    /// Returns `true` if every group in `fields` was explicitly set.
    pub fn is_applied(&self, fields: RenderStateFields) -> bool {
        self.applied.contains(fields)
    }

    #[inline]
    fn touch(&mut self, group: RenderStateFields) {
        self.applied.insert(group);
        self.cached_hash.set(None);
    }

    pub(super) fn invalidate_hash(&self) {
        self.cached_hash.set(None);
    }

    /// Enables or disables wireframe rasterization.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.values.wireframe = wireframe;
        self.touch(RenderStateFields::WIREFRAME);
    }

    /// Sets which faces are culled.
    pub fn set_face_cull_mode(&mut self, cull_mode: FaceCullMode) {
        self.values.cull_mode = cull_mode;
        self.touch(RenderStateFields::CULL_MODE);
    }

    /// Enables or disables depth writes.
    pub fn set_depth_write(&mut self, depth_write: bool) {
        self.values.depth_write = depth_write;
        self.touch(RenderStateFields::DEPTH_WRITE);
    }

    /// Enables or disables the depth test.
    pub fn set_depth_test(&mut self, depth_test: bool) {
        self.values.depth_test = depth_test;
        self.touch(RenderStateFields::DEPTH_TEST);
    }

    /// Sets the depth comparison. Only effective while the depth test is on.
    pub fn set_depth_func(&mut self, depth_func: CompareFunction) {
        self.values.depth_func = depth_func;
        self.touch(RenderStateFields::DEPTH_FUNC);
    }

    /// Enables or disables color writes.
    pub fn set_color_write(&mut self, color_write: bool) {
        self.values.color_write = color_write;
        self.touch(RenderStateFields::COLOR_WRITE);
    }

    /// Sets the blending preset.
    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.values.blend_mode = blend_mode;
        self.touch(RenderStateFields::BLEND_MODE);
    }

    /// Sets the factors used by [`BlendMode::Custom`].
    ///
    /// The factors belong to the blend-mode group, so this marks it applied.
    pub fn set_custom_blend_factors(&mut self, factors: CustomBlendFactors) {
        self.values.blend_factors = factors;
        self.touch(RenderStateFields::BLEND_MODE);
    }

    /// Sets the color blend operation.
    pub fn set_blend_equation(&mut self, equation: BlendOperation) {
        self.values.blend_equation = equation;
        self.touch(RenderStateFields::BLEND_EQUATION);
    }

    /// Sets the alpha blend operation.
    pub fn set_blend_equation_alpha(&mut self, equation: BlendEquationAlpha) {
        self.values.blend_equation_alpha = equation;
        self.touch(RenderStateFields::BLEND_EQUATION_ALPHA);
    }

    /// Sets the polygon offset.
    ///
    /// A `(0.0, 0.0)` pair disables the offset and keeps the previous factor
    /// and units; any other pair enables it.
    pub fn set_poly_offset(&mut self, factor: f32, units: f32) {
        if factor == 0.0 && units == 0.0 {
            self.values.offset_enabled = false;
        } else {
            self.values.offset_enabled = true;
            self.values.offset_factor = factor;
            self.values.offset_units = units;
        }
        self.touch(RenderStateFields::POLY_OFFSET);
    }

    /// Configures the stencil test for both faces at once.
    pub fn set_stencil(
        &mut self,
        enabled: bool,
        front: StencilFaceState,
        back: StencilFaceState,
    ) {
        self.values.stencil_test = enabled;
        self.values.front_stencil = front;
        self.values.back_stencil = back;
        self.touch(RenderStateFields::STENCIL);
    }

    /// Sets the rasterized line width.
    ///
    /// # Errors
    ///
    /// Returns [`RenderStateError::InvalidLineWidth`] if `line_width` is below
    /// `1.0` or NaN. The state is left untouched in that case.
    pub fn set_line_width(&mut self, line_width: f32) -> Result<(), RenderStateError> {
        if !(line_width >= 1.0) {
            return Err(RenderStateError::InvalidLineWidth { width: line_width });
        }
        self.values.line_width = line_width;
        self.touch(RenderStateFields::LINE_WIDTH);
        Ok(())
    }

    /// Copies every value of `other` and marks every group applied except stencil.
    pub fn set_from(&mut self, other: &RenderState) {
        self.values = other.values;
        self.applied = self
            .applied
            .with(RenderStateFields::ALL.without(RenderStateFields::STENCIL));
        self.cached_hash.set(None);
    }

    /// Returns `true` if wireframe rasterization is on.
    pub fn is_wireframe(&self) -> bool {
        self.values.wireframe
    }

    /// Returns the face cull mode.
    pub fn face_cull_mode(&self) -> FaceCullMode {
        self.values.cull_mode
    }

    /// Returns `true` if depth writes are on.
    pub fn is_depth_write(&self) -> bool {
        self.values.depth_write
    }

    /// Returns `true` if the depth test is on.
    pub fn is_depth_test(&self) -> bool {
        self.values.depth_test
    }

    /// Returns the depth comparison.
    pub fn depth_func(&self) -> CompareFunction {
        self.values.depth_func
    }

    /// Returns `true` if color writes are on.
    pub fn is_color_write(&self) -> bool {
        self.values.color_write
    }

    /// Returns the blending preset.
    pub fn blend_mode(&self) -> BlendMode {
        self.values.blend_mode
    }

    /// Returns the factors used by [`BlendMode::Custom`].
    pub fn custom_blend_factors(&self) -> CustomBlendFactors {
        self.values.blend_factors
    }

    /// Returns the color blend operation.
    pub fn blend_equation(&self) -> BlendOperation {
        self.values.blend_equation
    }

    /// Returns the alpha blend operation.
    pub fn blend_equation_alpha(&self) -> BlendEquationAlpha {
        self.values.blend_equation_alpha
    }

    /// Returns `true` if polygon offset is on.
    pub fn is_poly_offset(&self) -> bool {
        self.values.offset_enabled
    }

    /// Returns the polygon offset factor.
    pub fn poly_offset_factor(&self) -> f32 {
        self.values.offset_factor
    }

    /// Returns the polygon offset units.
    pub fn poly_offset_units(&self) -> f32 {
        self.values.offset_units
    }

    /// Returns `true` if the stencil test is on.
    pub fn is_stencil_test(&self) -> bool {
        self.values.stencil_test
    }

    /// Returns the front-face stencil configuration.
    pub fn front_stencil(&self) -> StencilFaceState {
        self.values.front_stencil
    }

    /// Returns the back-face stencil configuration.
    pub fn back_stencil(&self) -> StencilFaceState {
        self.values.back_stencil
    }

    /// Returns the line width.
    pub fn line_width(&self) -> f32 {
        self.values.line_width
    }

    /// Returns a hash of the effective fields, computed once and memoized
    /// until the next mutation.
    ///
    /// States that compare equal have the same content hash.
    pub fn content_hash(&self) -> u64 {
        if let Some(hash) = self.cached_hash.get() {
            return hash;
        }
        let mut hasher = AHasher::default();
        self.values.hash_effective(&mut hasher);
        let hash = hasher.finish();
        self.cached_hash.set(Some(hash));
        hash
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares the effective values only; applied flags are ignored.
impl PartialEq for RenderState {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for RenderState {}

impl Hash for RenderState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash_effective(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::pipeline::enums::{BlendFactor, StencilOperation};

    #[test]
    fn test_fresh_apply_flags() {
        let state = RenderState::new();
        assert!(state.is_applied(RenderStateFields::WIREFRAME | RenderStateFields::POLY_OFFSET));
        assert!(!state.is_applied(RenderStateFields::STENCIL));
        assert!(!state.is_applied(RenderStateFields::DEPTH_FUNC));
        assert!(!state.is_applied(RenderStateFields::LINE_WIDTH));
        assert!(RenderState::additional().applied().is_empty());
    }

    #[test]
    fn test_canonical_values() {
        let default = RenderState::new();
        assert_eq!(default.face_cull_mode(), FaceCullMode::Back);
        assert!(default.is_depth_test() && default.is_depth_write());

        let null = RenderState::null();
        assert_eq!(null.face_cull_mode(), FaceCullMode::Off);
        assert!(!null.is_depth_test());
        assert_eq!(null.applied(), default.applied());
    }

    #[test]
    fn test_canonical_instances_are_independent() {
        let mut a = RenderState::new();
        a.set_wireframe(true);
        assert!(!RenderState::new().is_wireframe());
    }

    #[test]
    fn test_line_width_validation() {
        let mut state = RenderState::new();
        let hash = state.content_hash();

        let err = state.set_line_width(0.5).unwrap_err();
        assert_eq!(err, RenderStateError::InvalidLineWidth { width: 0.5 });
        assert!(state.set_line_width(f32::NAN).is_err());
        assert!(!state.is_applied(RenderStateFields::LINE_WIDTH));
        assert_eq!(state.content_hash(), hash);

        state.set_line_width(1.0).unwrap();
        assert!(state.is_applied(RenderStateFields::LINE_WIDTH));
        approx::assert_relative_eq!(state.line_width(), 1.0);
    }

    #[test]
    fn test_zero_poly_offset_disables() {
        let mut state = RenderState::additional();
        state.set_poly_offset(2.0, 3.0);
        assert!(state.is_poly_offset());
        state.set_poly_offset(0.0, 0.0);
        assert!(!state.is_poly_offset());
        approx::assert_relative_eq!(state.poly_offset_factor(), 2.0);
        assert!(state.is_applied(RenderStateFields::POLY_OFFSET));
    }

    #[test]
    fn test_equality_ignores_depth_func_without_depth_test() {
        let mut a = RenderState::null();
        let mut b = RenderState::null();
        a.set_depth_func(CompareFunction::Greater);
        b.set_depth_func(CompareFunction::Never);
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());

        a.set_depth_test(true);
        b.set_depth_test(true);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_stencil_faces_when_disabled() {
        let mut a = RenderState::new();
        let b = RenderState::new();
        let face = StencilFaceState {
            compare: CompareFunction::Equal,
            fail_op: StencilOperation::Replace,
            depth_fail_op: StencilOperation::Invert,
            depth_pass_op: StencilOperation::IncrementWrap,
        };
        a.set_stencil(false, face, face);
        assert_eq!(a, b);
        a.set_stencil(true, face, face);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_factors_unless_custom() {
        let mut a = RenderState::new();
        let mut b = RenderState::new();
        a.set_blend_mode(BlendMode::Alpha);
        b.set_blend_mode(BlendMode::Alpha);
        b.set_custom_blend_factors(CustomBlendFactors {
            src_rgb: BlendFactor::SrcAlpha,
            dst_rgb: BlendFactor::OneMinusSrcAlpha,
            src_alpha: BlendFactor::One,
            dst_alpha: BlendFactor::One,
        });
        assert_eq!(a, b);

        a.set_blend_mode(BlendMode::Custom);
        b.set_blend_mode(BlendMode::Custom);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_apply_flags() {
        let mut a = RenderState::additional();
        a.set_wireframe(false);
        assert_eq!(a, RenderState::new());
    }

    #[test]
    fn test_content_hash_is_memoized_and_invalidated() {
        let mut state = RenderState::new();
        let first = state.content_hash();
        assert_eq!(state.cached_hash.get(), Some(first));
        assert_eq!(state.content_hash(), first);

        state.set_wireframe(true);
        assert_eq!(state.cached_hash.get(), None);
        assert_ne!(state.content_hash(), first);
    }

    #[test]
    fn test_set_from_marks_all_but_stencil() {
        let mut source = RenderState::null();
        source.set_blend_mode(BlendMode::Additive);
        let mut target = RenderState::additional();
        target.set_from(&source);

        assert_eq!(target, source);
        assert!(target.is_applied(RenderStateFields::DEPTH_FUNC | RenderStateFields::LINE_WIDTH));
        assert!(!target.is_applied(RenderStateFields::STENCIL));

        let mut stenciled = RenderState::additional();
        stenciled.set_stencil(true, StencilFaceState::IGNORE, StencilFaceState::IGNORE);
        stenciled.set_from(&RenderState::new());
        assert!(stenciled.is_applied(RenderStateFields::STENCIL));
        assert!(stenciled.is_applied(RenderStateFields::BLEND_MODE));
    }
}
