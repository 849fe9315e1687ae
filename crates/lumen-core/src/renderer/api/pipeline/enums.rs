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

//! Enums and small value types describing fixed-function pipeline state.
//!
//! The serialized names of these enums are part of the persisted material
//! format and must not change.

use serde::{Deserialize, Serialize};

/// The comparison function used for depth and stencil testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// The test passes if the new value is equal to the existing value.
    Equal,
    /// The test passes if the new value is less than the existing value.
    Less,
    /// The test passes if the new value is less than or equal to the existing value.
    #[serde(rename = "LessOrEqual")]
    LessEqual,
    /// The test passes if the new value is greater than the existing value.
    Greater,
    /// The test passes if the new value is greater than or equal to the existing value.
    #[serde(rename = "GreaterOrEqual")]
    GreaterEqual,
    /// The test passes if the new value is not equal to the existing value.
    NotEqual,
    /// The test always passes.
    #[default]
    Always,
}

/// An operation to perform on a stencil buffer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StencilOperation {
    /// Keep the existing stencil value.
    #[default]
    Keep,
    /// Set the stencil value to zero.
    Zero,
    /// Replace the stencil value with the reference value.
    Replace,
    /// Increment, clamping to the maximum value.
    #[serde(rename = "Increment")]
    IncrementClamp,
    /// Increment, wrapping to zero on overflow.
    IncrementWrap,
    /// Decrement, clamping to zero.
    #[serde(rename = "Decrement")]
    DecrementClamp,
    /// Decrement, wrapping to the maximum value on underflow.
    DecrementWrap,
    /// Bitwise invert of the stencil value.
    Invert,
}

/// A factor in the blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendFactor {
    /// `0.0`
    Zero,
    /// `1.0`
    One,
    /// The source color.
    #[serde(rename = "Src_Color")]
    SrcColor,
    /// `1.0 - source color`.
    #[serde(rename = "One_Minus_Src_Color")]
    OneMinusSrcColor,
    /// The destination color.
    #[serde(rename = "Dst_Color")]
    DstColor,
    /// `1.0 - destination color`.
    #[serde(rename = "One_Minus_Dst_Color")]
    OneMinusDstColor,
    /// The source alpha.
    #[serde(rename = "Src_Alpha")]
    SrcAlpha,
    /// `1.0 - source alpha`.
    #[serde(rename = "One_Minus_Src_Alpha")]
    OneMinusSrcAlpha,
    /// The destination alpha.
    #[serde(rename = "Dst_Alpha")]
    DstAlpha,
    /// `1.0 - destination alpha`.
    #[serde(rename = "One_Minus_Dst_Alpha")]
    OneMinusDstAlpha,
    /// `min(source alpha, 1.0 - destination alpha)`.
    #[serde(rename = "Src_Alpha_Saturate")]
    SrcAlphaSaturated,
}

/// The operation combining source and destination color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendOperation {
    /// `src + dst`
    #[default]
    Add,
    /// `src - dst`
    Subtract,
    /// `dst - src`
    ReverseSubtract,
    /// `min(src, dst)`
    Min,
    /// `max(src, dst)`
    Max,
}

/// The operation combining source and destination alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendEquationAlpha {
    /// Use the color blend operation for alpha as well.
    #[default]
    InheritColor,
    /// `src + dst`
    Add,
    /// `src - dst`
    Subtract,
    /// `dst - src`
    ReverseSubtract,
    /// `min(src, dst)`
    Min,
    /// `max(src, dst)`
    Max,
}

impl BlendEquationAlpha {
    /// Returns the operation actually used for alpha given the color operation.
    pub fn resolve(self, color: BlendOperation) -> BlendOperation {
        match self {
            BlendEquationAlpha::InheritColor => color,
            BlendEquationAlpha::Add => BlendOperation::Add,
            BlendEquationAlpha::Subtract => BlendOperation::Subtract,
            BlendEquationAlpha::ReverseSubtract => BlendOperation::ReverseSubtract,
            BlendEquationAlpha::Min => BlendOperation::Min,
            BlendEquationAlpha::Max => BlendOperation::Max,
        }
    }
}

/// A named blending preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// No blending.
    #[default]
    Off,
    /// `src + dst`
    Additive,
    /// Premultiplied alpha: `src + (1 - src.a) * dst`.
    PremultAlpha,
    /// `src.a * src + dst`
    AlphaAdditive,
    /// Color blending: `src + (1 - src) * dst`.
    Color,
    /// Alpha blending: `src.a * src + (1 - src.a) * dst`.
    Alpha,
    /// `src * dst`
    Modulate,
    /// `2 * src * dst`
    ModulateX2,
    /// `1 - (1 - src) * (1 - dst)`
    Screen,
    /// `(1 - dst) * src + (1 - src) * dst`
    Exclusion,
    /// The factors in [`CustomBlendFactors`] are used.
    Custom,
}

impl BlendMode {
    /// Returns the fixed `(src_rgb, dst_rgb)` factors for a preset.
    ///
    /// Returns `None` for [`BlendMode::Off`] and [`BlendMode::Custom`].
    pub fn preset_factors(self) -> Option<(BlendFactor, BlendFactor)> {
        use BlendFactor as F;
        match self {
            BlendMode::Off | BlendMode::Custom => None,
            BlendMode::Additive => Some((F::One, F::One)),
            BlendMode::PremultAlpha => Some((F::One, F::OneMinusSrcAlpha)),
            BlendMode::AlphaAdditive => Some((F::SrcAlpha, F::One)),
            BlendMode::Color => Some((F::One, F::OneMinusSrcColor)),
            BlendMode::Alpha => Some((F::SrcAlpha, F::OneMinusSrcAlpha)),
            BlendMode::Modulate => Some((F::DstColor, F::Zero)),
            BlendMode::ModulateX2 => Some((F::DstColor, F::SrcColor)),
            BlendMode::Screen => Some((F::One, F::OneMinusSrcColor)),
            BlendMode::Exclusion => Some((F::OneMinusDstColor, F::OneMinusSrcColor)),
        }
    }
}

/// Which faces are discarded before rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FaceCullMode {
    /// Nothing is culled.
    Off,
    /// Front faces are culled.
    Front,
    /// Back faces are culled.
    #[default]
    Back,
    /// Both faces are culled. Only lines and points are drawn.
    FrontAndBack,
}

/// Stencil test configuration for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StencilFaceState {
    /// The comparison against the stencil buffer.
    pub compare: CompareFunction,
    /// The operation when the stencil test fails.
    pub fail_op: StencilOperation,
    /// The operation when the stencil test passes but the depth test fails.
    pub depth_fail_op: StencilOperation,
    /// The operation when both tests pass.
    pub depth_pass_op: StencilOperation,
}

impl StencilFaceState {
    /// `Always` with every operation set to `Keep`.
    pub const IGNORE: Self = Self {
        compare: CompareFunction::Always,
        fail_op: StencilOperation::Keep,
        depth_fail_op: StencilOperation::Keep,
        depth_pass_op: StencilOperation::Keep,
    };
}

/// The four blend factors used when the blend mode is [`BlendMode::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomBlendFactors {
    /// Source RGB factor.
    pub src_rgb: BlendFactor,
    /// Destination RGB factor.
    pub dst_rgb: BlendFactor,
    /// Source alpha factor.
    pub src_alpha: BlendFactor,
    /// Destination alpha factor.
    pub dst_alpha: BlendFactor,
}

impl CustomBlendFactors {
    /// `One`/`Zero` for both color and alpha, i.e. a plain overwrite.
    pub const REPLACE: Self = Self {
        src_rgb: BlendFactor::One,
        dst_rgb: BlendFactor::Zero,
        src_alpha: BlendFactor::One,
        dst_alpha: BlendFactor::Zero,
    };
}

impl Default for CustomBlendFactors {
    fn default() -> Self {
        Self::REPLACE
    }
}
