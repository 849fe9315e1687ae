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

//! Opt-in lifetime tracking of native buffers.
//!
//! Buffers report their allocation and release as messages. A background
//! reclaimer thread, started on the first tracked allocation and never joined,
//! drains those messages and keeps the per-kind counters. It shares no lock
//! with the code creating or dropping buffers.

use crossbeam_channel::Sender;
use lumen_core::memory::{
    BufferKind, KindUsage, NativeMemoryStats, NATIVE_BYTES_ALLOCATED_LIFETIME,
    NATIVE_BYTES_RELEASED_LIFETIME,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;

const RECLAIMER_THREAD_NAME: &str = "lumen-buffer-reclaimer";

/// A message consumed by the reclaimer thread.
#[derive(Debug)]
pub(crate) enum ReclaimerMessage {
    Allocated { id: u64, kind: BufferKind, bytes: u64 },
    Released { id: u64 },
    /// Acknowledged once every earlier message has been processed.
    Flush(Sender<()>),
}

#[derive(Debug, Default)]
struct KindCounters {
    buffers: AtomicU64,
    bytes: AtomicU64,
}

#[derive(Debug, Default)]
struct Usage {
    per_kind: [KindCounters; 5],
}

impl Usage {
    fn add(&self, kind: BufferKind, bytes: u64) {
        let counters = &self.per_kind[kind.index()];
        counters.buffers.fetch_add(1, Ordering::Relaxed);
        counters.bytes.fetch_add(bytes, Ordering::Relaxed);
        NATIVE_BYTES_ALLOCATED_LIFETIME.fetch_add(bytes, Ordering::Relaxed);
    }

    fn remove(&self, kind: BufferKind, bytes: u64) {
        let counters = &self.per_kind[kind.index()];
        counters.buffers.fetch_sub(1, Ordering::Relaxed);
        counters.bytes.fetch_sub(bytes, Ordering::Relaxed);
        NATIVE_BYTES_RELEASED_LIFETIME.fetch_add(bytes, Ordering::Relaxed);
    }

    fn snapshot(&self) -> NativeMemoryStats {
        let mut stats = NativeMemoryStats::default();
        for (usage, counters) in stats.per_kind.iter_mut().zip(&self.per_kind) {
            *usage = KindUsage {
                buffers: counters.buffers.load(Ordering::Relaxed),
                bytes: counters.bytes.load(Ordering::Relaxed),
            };
        }
        stats
    }
}

/// Bookkeeping of live native buffers, grouped by element kind.
///
/// Tracking is disabled until [`set_enabled`](Self::set_enabled) is called.
/// Buffers created while it is disabled are never counted, even if tracking
/// is enabled later.
#[derive(Debug, Default)]
pub struct BufferTracker {
    enabled: AtomicBool,
    next_id: AtomicU64,
    usage: Arc<Usage>,
    reclaimer: OnceLock<Option<Sender<ReclaimerMessage>>>,
}

impl BufferTracker {
    /// Creates a disabled tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide tracker used by buffers created without an
    /// explicit one.
    pub fn global() -> &'static Arc<BufferTracker> {
        static GLOBAL: OnceLock<Arc<BufferTracker>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(BufferTracker::new()))
    }

    /// Enables or disables tracking of buffers created from now on.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns `true` if new buffers are tracked.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn reclaimer(&self) -> Option<&Sender<ReclaimerMessage>> {
        self.reclaimer
            .get_or_init(|| {
                let (sender, receiver) = crossbeam_channel::unbounded::<ReclaimerMessage>();
                let usage = Arc::clone(&self.usage);
                let spawned = thread::Builder::new()
                    .name(RECLAIMER_THREAD_NAME.to_owned())
                    .spawn(move || {
                        log::debug!("Buffer reclaimer started.");
                        let mut live: HashMap<u64, (BufferKind, u64)> = HashMap::new();
                        for message in receiver.iter() {
                            log::trace!("Buffer reclaimer: {message:?}");
                            match message {
                                ReclaimerMessage::Allocated { id, kind, bytes } => {
                                    live.insert(id, (kind, bytes));
                                    usage.add(kind, bytes);
                                }
                                ReclaimerMessage::Released { id } => match live.remove(&id) {
                                    Some((kind, bytes)) => usage.remove(kind, bytes),
                                    None => log::error!("Release of unknown native buffer #{id}"),
                                },
                                ReclaimerMessage::Flush(ack) => {
                                    let _ = ack.send(());
                                }
                            }
                        }
                        log::debug!("Buffer reclaimer stopped, {} buffer(s) still live.", live.len());
                    });
                match spawned {
                    Ok(_) => Some(sender),
                    Err(e) => {
                        log::error!("Failed to start the buffer reclaimer, tracking is off: {e}");
                        None
                    }
                }
            })
            .as_ref()
    }

    /// Registers a new buffer and returns its tracking id, or `None` when
    /// tracking is disabled.
    pub(crate) fn register(&self, kind: BufferKind, bytes: u64) -> Option<u64> {
        if !self.is_enabled() {
            return None;
        }
        let reclaimer = self.reclaimer()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        reclaimer
            .send(ReclaimerMessage::Allocated { id, kind, bytes })
            .ok()
            .map(|_| id)
    }

    /// Queues the release of a tracked buffer.
    pub(crate) fn release(&self, id: u64) {
        self.send(ReclaimerMessage::Released { id });
    }

    fn send(&self, message: ReclaimerMessage) {
        let Some(Some(reclaimer)) = self.reclaimer.get() else {
            return;
        };
        if reclaimer.send(message).is_err() {
            log::warn!("Buffer reclaimer is gone, dropping bookkeeping message.");
        }
    }

    /// Returns the live usage once every pending message has been processed.
    ///
    /// Waits on the reclaimer; meant for diagnostics, not the frame loop.
    pub fn stats(&self) -> NativeMemoryStats {
        if let Some(Some(reclaimer)) = self.reclaimer.get() {
            let (ack, done) = crossbeam_channel::bounded(1);
            if reclaimer.send(ReclaimerMessage::Flush(ack)).is_ok() {
                let _ = done.recv();
            }
        }
        self.usage.snapshot()
    }

    /// Returns a textual report of the native memory held.
    pub fn report(&self) -> String {
        if self.is_enabled() || self.reclaimer.get().is_some() {
            self.stats().to_string()
        } else {
            "Native memory tracking is disabled. Enable `track_native_buffers` during initialization."
                .to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_tracker_registers_nothing() {
        let tracker = BufferTracker::new();
        assert_eq!(tracker.register(BufferKind::Float, 64), None);
        assert_eq!(tracker.stats(), NativeMemoryStats::default());
        assert!(tracker.report().contains("disabled"));
    }

    #[test]
    fn test_register_and_release_update_usage() {
        let tracker = BufferTracker::new();
        tracker.set_enabled(true);

        let a = tracker.register(BufferKind::Float, 4096).unwrap();
        let _b = tracker.register(BufferKind::Byte, 1024).unwrap();
        let stats = tracker.stats();
        assert_eq!(stats.kind(BufferKind::Float), KindUsage { buffers: 1, bytes: 4096 });
        assert_eq!(stats.total_buffers(), 2);

        tracker.release(a);
        let stats = tracker.stats();
        assert_eq!(stats.kind(BufferKind::Float), KindUsage::default());
        assert_eq!(stats.total_bytes(), 1024);
    }

    #[test]
    fn test_unknown_release_leaves_usage_untouched() {
        let tracker = BufferTracker::new();
        tracker.set_enabled(true);
        tracker.register(BufferKind::Int, 16).unwrap();

        tracker.release(u64::MAX);

        assert_eq!(tracker.stats().kind(BufferKind::Int).buffers, 1);
    }

    #[test]
    fn test_lifetime_totals_grow() {
        let (allocated_before, _) = lumen_core::memory::get_native_lifetime_totals();
        let tracker = BufferTracker::new();
        tracker.set_enabled(true);
        let id = tracker.register(BufferKind::Double, 800).unwrap();
        tracker.release(id);
        tracker.stats();

        let (allocated, released) = lumen_core::memory::get_native_lifetime_totals();
        assert!(allocated >= allocated_before + 800);
        assert!(released >= 800);
    }
}
