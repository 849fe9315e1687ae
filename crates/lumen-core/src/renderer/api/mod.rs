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

//! Backend-agnostic rendering API.
//!
//! Organized into several logical sub-modules:
//!
//! - **[`core`]**: Global settings for the rendering system.
//! - **[`pipeline`]**: Fixed-function render state, its merge resolver and persisted form.
//! - **[`texture`]**: Image descriptors, upload targets and channel swizzles.
//! - **[`format`]**: Resolved backend formats and the per-capability format table.
//! - **[`util`]**: Pixel formats, capability flags and other shared enums.

pub mod core;
pub mod format;
pub mod pipeline;
pub mod texture;
pub mod util;

pub use self::core::*;
pub use self::format::*;
pub use self::pipeline::*;
pub use self::texture::*;
pub use self::util::*;
