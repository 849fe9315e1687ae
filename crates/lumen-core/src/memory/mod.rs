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

//! Provides the public contract for native (off-heap) buffer statistics.
//!
//! The buffer tracker in `lumen-data` is responsible for maintaining these
//! numbers. Two process-wide counters record lifetime totals and can be read
//! from any thread; per-kind live usage is reported through
//! [`NativeMemoryStats`] snapshots.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// --- Global Counters ---

/// The cumulative number of bytes ever handed out as tracked native buffers.
pub static NATIVE_BYTES_ALLOCATED_LIFETIME: AtomicU64 = AtomicU64::new(0);

/// The cumulative number of bytes of tracked native buffers ever released.
pub static NATIVE_BYTES_RELEASED_LIFETIME: AtomicU64 = AtomicU64::new(0);

/// The element type of a native buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// `u8` elements.
    Byte,
    /// `i16` elements.
    Short,
    /// `i32` elements.
    Int,
    /// `f32` elements.
    Float,
    /// `f64` elements.
    Double,
}

impl BufferKind {
    /// Every kind, in report order.
    pub const ALL: [BufferKind; 5] = [
        BufferKind::Byte,
        BufferKind::Float,
        BufferKind::Int,
        BufferKind::Short,
        BufferKind::Double,
    ];

    /// Returns the slot of this kind in [`NativeMemoryStats::per_kind`].
    pub const fn index(self) -> usize {
        match self {
            BufferKind::Byte => 0,
            BufferKind::Float => 1,
            BufferKind::Int => 2,
            BufferKind::Short => 3,
            BufferKind::Double => 4,
        }
    }

    /// Returns the size of one element in bytes.
    pub const fn element_size(self) -> usize {
        match self {
            BufferKind::Byte => 1,
            BufferKind::Short => 2,
            BufferKind::Int | BufferKind::Float => 4,
            BufferKind::Double => 8,
        }
    }

    /// The one-letter tag used in reports.
    pub const fn tag(self) -> char {
        match self {
            BufferKind::Byte => 'b',
            BufferKind::Short => 's',
            BufferKind::Int => 'i',
            BufferKind::Float => 'f',
            BufferKind::Double => 'd',
        }
    }
}

/// The live usage of one buffer kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindUsage {
    /// Number of live buffers.
    pub buffers: u64,
    /// Bytes held by the live buffers.
    pub bytes: u64,
}

/// A snapshot of the live native buffers, grouped by element kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeMemoryStats {
    /// Usage indexed by [`BufferKind::index`].
    pub per_kind: [KindUsage; 5],
}

impl NativeMemoryStats {
    /// Returns the usage of one kind.
    pub fn kind(&self, kind: BufferKind) -> KindUsage {
        self.per_kind[kind.index()]
    }

    /// Returns the number of live buffers of every kind.
    pub fn total_buffers(&self) -> u64 {
        self.per_kind.iter().map(|usage| usage.buffers).sum()
    }

    /// Returns the bytes held by live buffers of every kind.
    pub fn total_bytes(&self) -> u64 {
        self.per_kind.iter().map(|usage| usage.bytes).sum()
    }
}

impl fmt::Display for NativeMemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Existing buffers: {}", self.total_buffers())?;
        let counts: Vec<String> = BufferKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}", kind.tag(), self.kind(kind).buffers))
            .collect();
        writeln!(f, "({})", counts.join("  "))?;
        writeln!(f, "Total native memory held: {}kb", self.total_bytes() / 1024)?;
        let sizes: Vec<String> = BufferKind::ALL
            .iter()
            .map(|&kind| format!("{}: {}kb", kind.tag(), self.kind(kind).bytes / 1024))
            .collect();
        write!(f, "({})", sizes.join("  "))
    }
}

/// Returns `(allocated, released)` lifetime byte totals of tracked native buffers.
pub fn get_native_lifetime_totals() -> (u64, u64) {
    (
        NATIVE_BYTES_ALLOCATED_LIFETIME.load(Ordering::Relaxed),
        NATIVE_BYTES_RELEASED_LIFETIME.load(Ordering::Relaxed),
    )
}
