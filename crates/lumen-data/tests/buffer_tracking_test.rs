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

use lumen_core::memory::{BufferKind, KindUsage};
use lumen_data::{BufferTracker, ByteBuffer, FloatBuffer, IntBuffer, NativeBuffer};
use std::sync::Arc;

fn enabled_tracker() -> Arc<BufferTracker> {
    let tracker = Arc::new(BufferTracker::new());
    tracker.set_enabled(true);
    tracker
}

#[test]
fn test_tracked_buffers_are_counted_until_dropped() {
    // --- 1. ARRANGE ---
    let tracker = enabled_tracker();

    // --- 2. ACT ---
    let floats = FloatBuffer::with_capacity_in(1024, &tracker);
    let bytes = ByteBuffer::from_slice_in(&[0; 2048], &tracker);
    let during = tracker.stats();
    drop(floats);
    bytes.destroy();
    let after = tracker.stats();

    // --- 3. ASSERT ---
    assert_eq!(
        during.kind(BufferKind::Float),
        KindUsage {
            buffers: 1,
            bytes: 4096
        }
    );
    assert_eq!(during.kind(BufferKind::Byte).bytes, 2048);
    assert_eq!(during.total_buffers(), 2);
    assert_eq!(after.total_buffers(), 0);
    assert_eq!(after.total_bytes(), 0);
}

#[test]
fn test_clone_and_growth_keep_tracking() {
    // --- 1. ARRANGE ---
    let tracker = enabled_tracker();
    let mut indices = IntBuffer::with_capacity_in(4, &tracker);
    indices.put(&[0, 1, 2, 3]).unwrap();

    // --- 2. ACT ---
    let copy = indices.clone();
    let grown = NativeBuffer::ensure_large_enough(Some(indices), 4);
    let stats = tracker.stats();

    // --- 3. ASSERT ---
    assert!(copy.is_tracked());
    assert!(grown.is_tracked());
    // The outgrown buffer was released when it was replaced.
    assert_eq!(
        stats.kind(BufferKind::Int),
        KindUsage {
            buffers: 2,
            bytes: (4 + 8) * 4
        }
    );
}

#[test]
fn test_buffers_created_while_disabled_stay_untracked() {
    // --- 1. ARRANGE ---
    let tracker = Arc::new(BufferTracker::new());
    let early = FloatBuffer::with_capacity_in(16, &tracker);

    // --- 2. ACT ---
    tracker.set_enabled(true);
    let early_clone = early.clone();
    let late = FloatBuffer::with_capacity_in(16, &tracker);
    let early_was_tracked = early.is_tracked();
    drop(early);
    let stats = tracker.stats();

    // --- 3. ASSERT ---
    assert!(!early_was_tracked);
    assert!(early_clone.is_tracked());
    assert!(late.is_tracked());
    assert_eq!(stats.kind(BufferKind::Float).buffers, 2);
}

#[test]
fn test_report_lists_kinds() {
    // --- 1. ARRANGE ---
    let tracker = enabled_tracker();
    let _floats = FloatBuffer::with_capacity_in(512, &tracker);

    // --- 2. ACT ---
    let report = tracker.report();

    // --- 3. ASSERT ---
    assert!(report.starts_with("Existing buffers: 1\n(b: 0  f: 1  i: 0  s: 0  d: 0)"));
    assert!(report.contains("Total native memory held: 2kb"));
}
