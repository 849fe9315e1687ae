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

//! Native typed buffers backing vertex and index data.
//!
//! A [`NativeBuffer`] is a fixed-capacity, zero-initialised block of plain
//! elements with a write cursor (`position`). Buffers created while their
//! [`BufferTracker`] is enabled are counted until they are dropped.

mod tracker;

pub use tracker::BufferTracker;

use bytemuck::Pod;
use lumen_core::memory::BufferKind;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use thiserror::Error;

/// An element type a [`NativeBuffer`] can hold.
pub trait BufferElement: Pod {
    /// The kind reported to the tracker.
    const KIND: BufferKind;
}

impl BufferElement for u8 {
    const KIND: BufferKind = BufferKind::Byte;
}

impl BufferElement for i16 {
    const KIND: BufferKind = BufferKind::Short;
}

impl BufferElement for i32 {
    const KIND: BufferKind = BufferKind::Int;
}

impl BufferElement for f32 {
    const KIND: BufferKind = BufferKind::Float;
}

impl BufferElement for f64 {
    const KIND: BufferKind = BufferKind::Double;
}

/// Errors raised by buffer accesses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The range `offset..offset + len` does not fit in the buffer.
    #[error("Range of {len} element(s) at {offset} exceeds buffer capacity {capacity}")]
    OutOfBounds {
        /// First element of the range.
        offset: usize,
        /// Number of elements in the range.
        len: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
}

/// A `u8` buffer.
pub type ByteBuffer = NativeBuffer<u8>;
/// An `i16` buffer.
pub type ShortBuffer = NativeBuffer<i16>;
/// An `i32` buffer.
pub type IntBuffer = NativeBuffer<i32>;
/// An `f32` buffer.
pub type FloatBuffer = NativeBuffer<f32>;
/// An `f64` buffer.
pub type DoubleBuffer = NativeBuffer<f64>;

/// A fixed-capacity block of `T` with a write position.
pub struct NativeBuffer<T: BufferElement> {
    data: Box<[T]>,
    position: usize,
    tracker: Arc<BufferTracker>,
    tracking_id: Option<u64>,
}

impl<T: BufferElement> NativeBuffer<T> {
    fn from_boxed(data: Box<[T]>, tracker: &Arc<BufferTracker>) -> Self {
        let bytes = std::mem::size_of_val(&*data) as u64;
        Self {
            tracking_id: tracker.register(T::KIND, bytes),
            data,
            position: 0,
            tracker: Arc::clone(tracker),
        }
    }

    /// Allocates a zeroed buffer of `capacity` elements, tracked by the
    /// global tracker.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, BufferTracker::global())
    }

    /// Allocates a zeroed buffer of `capacity` elements, tracked by `tracker`.
    pub fn with_capacity_in(capacity: usize, tracker: &Arc<BufferTracker>) -> Self {
        Self::from_boxed(vec![T::zeroed(); capacity].into_boxed_slice(), tracker)
    }

    /// Allocates a buffer holding a copy of `values`, tracked by the global
    /// tracker. The position is left at 0.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_slice_in(values, BufferTracker::global())
    }

    /// Allocates a buffer holding a copy of `values`, tracked by `tracker`.
    pub fn from_slice_in(values: &[T], tracker: &Arc<BufferTracker>) -> Self {
        Self::from_boxed(values.into(), tracker)
    }

    /// Returns a buffer with room for at least `required` elements after the
    /// current position.
    ///
    /// `buffer` is returned as is when it is large enough. Otherwise a buffer
    /// of `position + required` elements is allocated from the same tracker,
    /// the contents before the position are copied and the position is kept.
    /// `None` allocates a fresh buffer of `required` elements.
    pub fn ensure_large_enough(buffer: Option<Self>, required: usize) -> Self {
        match buffer {
            None => Self::with_capacity(required),
            Some(buffer) if buffer.remaining() >= required => buffer,
            Some(buffer) => {
                let position = buffer.position;
                let mut grown = Self::with_capacity_in(position + required, &buffer.tracker);
                grown.data[..position].copy_from_slice(&buffer.data[..position]);
                grown.position = position;
                log::trace!(
                    "Grew {:?} buffer from {} to {} element(s)",
                    T::KIND,
                    buffer.capacity(),
                    grown.capacity()
                );
                grown
            }
        }
    }

    /// Returns the number of elements the buffer holds.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of elements between the position and the end.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.position
    }

    /// Moves the write position.
    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.capacity() {
            return Err(BufferError::OutOfBounds {
                offset: position,
                len: 0,
                capacity: self.capacity(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Moves the write position back to 0.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Writes `values` at the position and advances it past them.
    pub fn put(&mut self, values: &[T]) -> Result<(), BufferError> {
        let range = self.checked_range(self.position, values.len())?;
        self.position = range.end;
        self.data[range].copy_from_slice(values);
        Ok(())
    }

    /// Copies `len` elements from `from` to `to` inside the buffer. The ranges
    /// may overlap. The position is left after the written range.
    pub fn copy_internal(&mut self, from: usize, to: usize, len: usize) -> Result<(), BufferError> {
        let source = self.checked_range(from, len)?;
        let destination = self.checked_range(to, len)?;
        self.data.copy_within(source, to);
        self.position = destination.end;
        Ok(())
    }

    fn checked_range(&self, offset: usize, len: usize) -> Result<Range<usize>, BufferError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.capacity() => Ok(offset..end),
            _ => Err(BufferError::OutOfBounds {
                offset,
                len,
                capacity: self.capacity(),
            }),
        }
    }

    /// Returns every element of the buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns every element of the buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the raw bytes of the buffer, as sent to the device.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Returns `true` if the buffer is counted by its tracker.
    pub fn is_tracked(&self) -> bool {
        self.tracking_id.is_some()
    }

    /// Releases the buffer now.
    pub fn destroy(self) {
        log::trace!("Destroying {:?} buffer of {} element(s)", T::KIND, self.capacity());
    }
}

impl FloatBuffer {
    /// Allocates a buffer for `vertices` two-component vectors.
    pub fn create_vector2_buffer(vertices: usize) -> Self {
        Self::with_capacity(2 * vertices)
    }

    /// Allocates a buffer for `vertices` three-component vectors.
    pub fn create_vector3_buffer(vertices: usize) -> Self {
        Self::with_capacity(3 * vertices)
    }
}

/// The clone holds exactly the source's elements, starts at position 0 and
/// is tracked by the same tracker.
impl<T: BufferElement> Clone for NativeBuffer<T> {
    fn clone(&self) -> Self {
        Self::from_boxed(self.data.clone(), &self.tracker)
    }
}

impl<T: BufferElement> Drop for NativeBuffer<T> {
    fn drop(&mut self) {
        if let Some(id) = self.tracking_id.take() {
            self.tracker.release(id);
        }
    }
}

impl<T: BufferElement> fmt::Debug for NativeBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBuffer")
            .field("kind", &T::KIND)
            .field("capacity", &self.capacity())
            .field("position", &self.position)
            .field("tracking_id", &self.tracking_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untracked() -> Arc<BufferTracker> {
        Arc::new(BufferTracker::new())
    }

    #[test]
    fn test_element_sizes_match_kinds() {
        assert_eq!(std::mem::size_of::<u8>(), u8::KIND.element_size());
        assert_eq!(std::mem::size_of::<i16>(), i16::KIND.element_size());
        assert_eq!(std::mem::size_of::<i32>(), i32::KIND.element_size());
        assert_eq!(std::mem::size_of::<f32>(), f32::KIND.element_size());
        assert_eq!(std::mem::size_of::<f64>(), f64::KIND.element_size());
    }

    #[test]
    fn test_vector_buffers_have_component_capacity() {
        assert_eq!(FloatBuffer::create_vector2_buffer(5).capacity(), 10);
        assert_eq!(FloatBuffer::create_vector3_buffer(5).capacity(), 15);
    }

    #[test]
    fn test_put_advances_and_bounds() {
        let mut buffer = IntBuffer::with_capacity_in(4, &untracked());
        buffer.put(&[1, 2, 3]).unwrap();
        assert_eq!(buffer.position(), 3);
        assert_eq!(
            buffer.put(&[4, 5]),
            Err(BufferError::OutOfBounds {
                offset: 3,
                len: 2,
                capacity: 4
            })
        );
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 0]);
        assert!(buffer.set_position(5).is_err());
    }

    #[test]
    fn test_copy_internal_overlapping() {
        let mut buffer = ShortBuffer::from_slice_in(&[1, 2, 3, 4, 5], &untracked());
        buffer.copy_internal(0, 2, 3).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 1, 2, 3]);
        assert_eq!(buffer.position(), 5);
        assert!(buffer.copy_internal(3, 0, 3).is_err());
        assert!(buffer.copy_internal(usize::MAX, 0, 1).is_err());
    }

    #[test]
    fn test_ensure_large_enough_keeps_prefix_and_position() {
        let tracker = untracked();
        let mut buffer = FloatBuffer::with_capacity_in(4, &tracker);
        buffer.put(&[1.0, 2.0, 3.0]).unwrap();

        let same = FloatBuffer::ensure_large_enough(Some(buffer), 1);
        assert_eq!(same.capacity(), 4);

        let grown = FloatBuffer::ensure_large_enough(Some(same), 5);
        assert_eq!(grown.capacity(), 8);
        assert_eq!(grown.position(), 3);
        assert_eq!(&grown.as_slice()[..4], &[1.0, 2.0, 3.0, 0.0]);

        let fresh = FloatBuffer::ensure_large_enough(None, 6);
        assert_eq!((fresh.capacity(), fresh.position()), (6, 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut source = DoubleBuffer::from_slice_in(&[1.5, 2.5], &untracked());
        source.set_position(2).unwrap();
        let copy = source.clone();
        source.as_mut_slice()[0] = 9.0;

        assert_eq!(copy.as_slice(), &[1.5, 2.5]);
        assert_eq!(copy.position(), 0);
    }

    #[test]
    fn test_as_bytes_is_native_layout() {
        let buffer = IntBuffer::from_slice_in(&[1, 2], &untracked());
        assert_eq!(buffer.as_bytes().len(), 8);
        assert_eq!(buffer.as_bytes(), bytemuck::cast_slice::<i32, u8>(&[1, 2]));
    }
}
