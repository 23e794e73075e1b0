// src/ring_buffer.rs

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Bounded lock-free ring buffer.
///
/// Single producer (sampling/interrupt context)
/// Single consumer (main control loop)
///
/// Invariants:
/// - `N` is a power of two, checked at compile time
/// - holds at most `N - 1` elements; one slot stays permanently empty so
///   full/empty resolve from the two cursors alone
/// - never blocks, never allocates, never overwrites
///
/// Each cursor has exactly one writer. The producer owns `write_pos`, the
/// consumer owns `read_pos`, and each side only reads the other's cursor.
/// Elements are handed off with release/acquire ordering on the cursors.
pub struct RingBuffer<T, const N: usize> {
    buffer: UnsafeCell<[T; N]>,

    /// Next slot to read. Written only by the consumer.
    read_pos: AtomicUsize,

    /// Next slot to write. Written only by the producer.
    write_pos: AtomicUsize,
}

// Sound under the single-producer/single-consumer contract documented on
// the type: a slot is only written while the consumer cannot reach it,
// and only read after the producer's release store made it visible.
unsafe impl<T: Send + Copy, const N: usize> Sync for RingBuffer<T, N> {}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const MASK: usize = N - 1;

    /// Forces the capacity check at monomorphization time, so the wrap
    /// stays a single bitmask instruction.
    const CAPACITY_IS_POWER_OF_TWO: () =
        assert!(N.is_power_of_two(), "ring buffer capacity must be a power of two");

    pub fn new() -> Self {
        let () = Self::CAPACITY_IS_POWER_OF_TWO;
        Self {
            buffer: UnsafeCell::new([T::default(); N]),
            read_pos: AtomicUsize::new(0),
            write_pos: AtomicUsize::new(0),
        }
    }

    /// Usable capacity: one slot fewer than the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        let write = self.write_pos.load(Ordering::Acquire);
        let read = self.read_pos.load(Ordering::Acquire);
        write.wrapping_sub(read) & Self::MASK
    }

    #[inline]
    pub fn empty(&self) -> bool {
        self.read_pos.load(Ordering::Acquire) == self.write_pos.load(Ordering::Acquire)
    }

    #[inline]
    pub fn full(&self) -> bool {
        let write = self.write_pos.load(Ordering::Acquire);
        let read = self.read_pos.load(Ordering::Acquire);
        (write + 1) & Self::MASK == read
    }

    /// Append an element.
    ///
    /// Producer-only.
    ///
    /// Returns `false` and leaves the buffer untouched when full; the
    /// element is dropped rather than blocking or displacing older ones.
    pub fn push(&self, item: T) -> bool {
        let write = self.write_pos.load(Ordering::Relaxed);
        let read = self.read_pos.load(Ordering::Acquire);

        if (write + 1) & Self::MASK == read {
            return false;
        }

        // The consumer cannot reach this slot until the store below.
        unsafe {
            (*self.buffer.get())[write] = item;
        }

        self.write_pos.store((write + 1) & Self::MASK, Ordering::Release);
        true
    }

    /// Remove and return the oldest element.
    ///
    /// Consumer-only.
    ///
    /// Callers must check `empty()` first. Popping while empty is a
    /// contract violation: debug builds assert, release builds return
    /// whatever the slot holds (a stale element, or `T::default()` for a
    /// slot that was never written).
    pub fn pop(&self) -> T {
        let read = self.read_pos.load(Ordering::Relaxed);

        // Pairs with the producer's release store; makes the element at
        // `read` visible before it is copied out.
        let write = self.write_pos.load(Ordering::Acquire);
        debug_assert!(read != write, "pop on empty ring buffer");

        let item = unsafe { (*self.buffer.get())[read] };
        self.read_pos.store((read + 1) & Self::MASK, Ordering::Release);
        item
    }

    /// Discard everything currently queued.
    ///
    /// Consumer-only: only the read cursor moves, so the producer keeps
    /// sole ownership of its cursor.
    pub fn clear(&self) {
        let write = self.write_pos.load(Ordering::Acquire);
        self.read_pos.store(write, Ordering::Release);
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
