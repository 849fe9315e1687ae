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

//! # Lumen Core
//!
//! Foundational crate containing the material render-state model, the texture
//! format contracts and the backend interfaces that the rest of the engine
//! builds on.
//!
//! Nothing in here talks to a graphics driver. Concrete token tables live in
//! `lumen-infra`, the upload hot path lives in `lumen-lanes`.

#![warn(missing_docs)]

pub mod memory;
pub mod renderer;
pub mod utils;

pub use renderer::api::pipeline::RenderState;
