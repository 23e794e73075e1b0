// src/control.rs
//
// Producer-side half of the control surface.
//
// Owns the input samplers and turns their per-tick results into queued
// UI events. The periodic interrupt calls `poll()` once per tick; the
// main loop drains the queue it was given and applies the events to
// pattern state.

use log::warn;

use crate::encoder::Encoder;
use crate::event::{EventKind, sender};
use crate::event_queue::EventQueue;
use crate::gpio::InputPin;
use crate::trigger::DebouncedTrigger;

/// Consecutive active samples before the trigger counts as pressed.
pub const DEBOUNCE_TICKS: u32 = 6;

/// Samplers for one encoder and one trigger button.
///
/// This struct:
/// - runs only in the sampling/interrupt context
/// - holds no pattern state and no queue; the control loop owns both
/// - never blocks; one `poll()` is a bounded handful of pin reads
pub struct ControlSurface<A, B, T> {
    encoder: Encoder<A, B>,
    trigger: DebouncedTrigger<T, DEBOUNCE_TICKS>,
}

impl<A: InputPin, B: InputPin, T: InputPin> ControlSurface<A, B, T> {
    pub fn new(encoder_a: A, encoder_b: B, trigger_pin: T) -> Self {
        Self {
            encoder: Encoder::new(encoder_a, encoder_b),
            trigger: DebouncedTrigger::new(trigger_pin),
        }
    }

    /// Run one sampling tick and queue whatever the controls produced.
    ///
    /// Called once per scheduling period from the sampling context,
    /// never from the main loop. Overflow drops the new event; the
    /// missed input is a degraded mode, not a fault.
    pub fn poll(&mut self, queue: &EventQueue) {
        queue.tick();

        self.encoder.tick();
        let delta = self.encoder.delta();
        if delta != 0 && !queue.add_event(EventKind::EncoderDelta, sender::ENCODER, delta) {
            warn!("event queue full, dropped encoder delta {}", delta);
        }

        if self.trigger.triggered()
            && !queue.add_event(EventKind::ButtonPress, sender::TRIGGER, 1)
        {
            warn!("event queue full, dropped button press");
        }
    }
}
