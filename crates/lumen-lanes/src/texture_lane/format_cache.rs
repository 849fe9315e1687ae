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

//! Capability-keyed publication of the format table.

use lumen_core::renderer::{Caps, FormatTable};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type Builder = Box<dyn Fn(Caps) -> FormatTable + Send + Sync>;

/// Holds the format table built for the current device capabilities.
///
/// The table is rebuilt only when the capabilities change. Readers get an
/// [`Arc`] snapshot, so a rebuild never mutates a table someone is using.
pub struct FormatTableCache {
    builder: Builder,
    current: RwLock<Option<(Caps, Arc<FormatTable>)>>,
}

impl FormatTableCache {
    /// Creates an empty cache building tables with `builder`.
    pub fn new(builder: impl Fn(Caps) -> FormatTable + Send + Sync + 'static) -> Self {
        Self {
            builder: Box::new(builder),
            current: RwLock::new(None),
        }
    }

    /// Returns the table for `caps`, building and publishing it first if the
    /// cached one was built for different capabilities.
    pub fn get_or_build(&self, caps: Caps) -> Arc<FormatTable> {
        {
            let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
            if let Some((cached_caps, table)) = current.as_ref() {
                if *cached_caps == caps {
                    return Arc::clone(table);
                }
            }
        }

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        match current.as_ref() {
            Some((cached_caps, table)) if *cached_caps == caps => return Arc::clone(table),
            Some((cached_caps, _)) => log::info!(
                "Capabilities changed from {cached_caps:?} to {caps:?}, rebuilding format table"
            ),
            None => log::debug!("Building format table for {caps:?}"),
        }

        let table = Arc::new((self.builder)(caps));
        table.log_supported();
        *current = Some((caps, Arc::clone(&table)));
        table
    }

    /// Returns the published table, if any.
    pub fn current(&self) -> Option<Arc<FormatTable>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, table)| Arc::clone(table))
    }
}

impl fmt::Debug for FormatTableCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let caps = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(caps, _)| *caps);
        f.debug_struct("FormatTableCache").field("caps", &caps).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::renderer::{ColorSpace, FormatDescriptor, ImageFormat};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_cache() -> (FormatTableCache, Arc<AtomicUsize>) {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let cache = FormatTableCache::new(move |caps| {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut table = FormatTable::new();
            if caps.contains(Caps::SRGB) {
                table.insert(ImageFormat::Rgba8, ColorSpace::Srgb, FormatDescriptor::new(1, 2, 3));
            }
            table.insert(ImageFormat::Rgba8, ColorSpace::Linear, FormatDescriptor::new(4, 5, 6));
            table
        });
        (cache, builds)
    }

    #[test]
    fn test_same_caps_reuses_table() {
        let (cache, builds) = counting_cache();
        assert!(cache.current().is_none());

        let first = cache.get_or_build(Caps::OPENGL33);
        let second = cache.get_or_build(Caps::OPENGL33);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_changed_caps_publishes_new_table() {
        let (cache, builds) = counting_cache();
        let old = cache.get_or_build(Caps::OPENGL33);
        let new = cache.get_or_build(Caps::OPENGL_ES2);

        assert_eq!(builds.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&old, &new));
        // The old snapshot is untouched.
        assert!(old.get(ImageFormat::Rgba8, ColorSpace::Srgb).is_some());
        assert!(new.get(ImageFormat::Rgba8, ColorSpace::Srgb).is_none());
        assert!(Arc::ptr_eq(&cache.current().unwrap(), &new));
    }
}
