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

//! Provides the public, backend-agnostic rendering contracts for the Lumen engine.
//!
//! This module defines the "common language" shared by materials, the upload lane and
//! concrete backends: the [`RenderState`] model with its merge and persistence rules,
//! the pixel formats and image descriptors consumed by texture uploads, the
//! [`FormatTable`] that maps those formats onto backend tokens, and the
//! [`TextureUploadDevice`] trait a backend implements to receive native upload calls.
//!
//! This module defines the 'what'. The 'how' is provided by `lumen-infra` (token
//! tables, recording device) and `lumen-lanes` (upload dispatch).

pub mod api;
pub mod error;
pub mod traits;

pub use self::api::*;
pub use self::error::{RenderError, RenderStateError, SubUpdateViolation, TextureError};
pub use self::traits::TextureUploadDevice;
