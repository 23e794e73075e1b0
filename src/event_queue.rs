// src/event_queue.rs
//
// Queue decoupling input sampling from the main control loop.
//
// The periodic sampling context produces events faster than the main
// loop consumes them, so they are buffered here and simply discarded
// when the buffer is full.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::event::{EventKind, UiEvent};
use crate::ring_buffer::RingBuffer;

/// Backing storage size; one slot stays empty, so 15 events are usable.
const QUEUE_SIZE: usize = 16;

/// Bounded queue of UI events with tick bookkeeping.
///
/// Producer side (sampling/interrupt context): `tick`, `add_event`.
/// Consumer side (main loop): `pending`, `next_event`, `clear`.
///
/// Under sustained overload the newest events are dropped while queued
/// ones stay intact, so the consumer always sees an unbroken FIFO prefix
/// of what the producer accepted.
pub struct EventQueue {
    events: RingBuffer<UiEvent, QUEUE_SIZE>,

    /// Ticks elapsed since startup. Producer-written.
    current_tick: AtomicU32,

    /// Tick at which the last event was accepted. Producer-written.
    last_event_tick: AtomicU32,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: RingBuffer::new(),
            current_tick: AtomicU32::new(0),
            last_event_tick: AtomicU32::new(0),
        }
    }

    /// Advance the tick counter.
    ///
    /// Producer-only. Called once per scheduling period, before the
    /// samplers run.
    #[inline]
    pub fn tick(&self) {
        self.current_tick.fetch_add(1, Ordering::Relaxed);
    }

    /// Queue one event.
    ///
    /// Producer-only.
    ///
    /// Returns whether the event was accepted. `last_event_tick` moves
    /// only for accepted events, so it keeps answering "when did the
    /// user last do something we acted on" even while overflowing.
    pub fn add_event(&self, kind: EventKind, sender: i16, value: i32) -> bool {
        let accepted = self.events.push(UiEvent::new(kind, sender, value));
        if accepted {
            self.last_event_tick
                .store(self.current_tick.load(Ordering::Relaxed), Ordering::Relaxed);
        }
        accepted
    }

    /// True when at least one event awaits consumption.
    #[inline]
    pub fn pending(&self) -> bool {
        !self.events.empty()
    }

    /// Pop the oldest unconsumed event.
    ///
    /// Consumer-only. Precondition: `pending()` returned true. See
    /// [`RingBuffer::pop`] for the empty-pop policy.
    #[inline]
    pub fn next_event(&self) -> UiEvent {
        self.events.pop()
    }

    /// Drop everything still queued.
    ///
    /// Consumer-only.
    pub fn clear(&self) {
        self.events.clear();
    }

    /// Ticks elapsed since startup.
    #[inline]
    pub fn current_tick(&self) -> u32 {
        self.current_tick.load(Ordering::Relaxed)
    }

    /// Tick of the most recently accepted event.
    #[inline]
    pub fn last_event_tick(&self) -> u32 {
        self.last_event_tick.load(Ordering::Relaxed)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
