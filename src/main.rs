// src/main.rs

mod control;
mod encoder;
mod event;
mod event_queue;
mod gpio;
mod pattern;
mod ring_buffer;
mod track;
mod trigger;

use std::cell::Cell;
use std::rc::Rc;

use crate::control::{ControlSurface, DEBOUNCE_TICKS};
use crate::event::EventKind;
use crate::event_queue::EventQueue;
use crate::gpio::InputPin;
use crate::pattern::Pattern;

/// ===============================
/// Simulated pins
/// ===============================

#[derive(Clone, Default)]
struct SimPin {
    low: Rc<Cell<bool>>,
}

impl SimPin {
    fn press(&self) {
        self.low.set(true);
    }

    fn release(&self) {
        self.low.set(false);
    }
}

impl InputPin for SimPin {
    fn is_low(&self) -> bool {
        self.low.get()
    }
}

/// ===============================
/// Main
/// ===============================

fn main() {
    let encoder_a = SimPin::default();
    let encoder_b = SimPin::default();
    let trigger = SimPin::default();

    let queue = EventQueue::new();
    let mut surface =
        ControlSurface::new(encoder_a.clone(), encoder_b.clone(), trigger.clone());
    let mut pattern: Pattern<8> = Pattern::new(0, 1, 1, 0, 0);

    println!("Starting control loop sanity test…");

    // --------------------------------
    // Dial in a rising note line, one encoder click per step
    // --------------------------------

    for pos in 0..8 {
        // A falling edge on A with B released reads as one clockwise click.
        encoder_a.press();
        surface.poll(&queue);
        encoder_a.release();
        surface.poll(&queue);

        while queue.pending() {
            let event = queue.next_event();
            if event.kind == EventKind::EncoderDelta {
                pattern.notes_mut().edit(pos, event.value * pos as i32);
            }
        }
    }

    // --------------------------------
    // Hold the trigger through the debounce window
    // --------------------------------

    trigger.press();
    for _ in 0..DEBOUNCE_TICKS {
        surface.poll(&queue);
    }
    trigger.release();

    let mut started = false;
    while queue.pending() {
        let event = queue.next_event();
        if event.kind == EventKind::ButtonPress {
            started = true;
        }
    }
    println!(
        "Trigger pressed: {} (tick {}, last event at tick {})",
        started,
        queue.current_tick(),
        queue.last_event_tick()
    );

    // --------------------------------
    // Walk the pattern once
    // --------------------------------

    for step in 0..8 {
        let values = pattern.values();
        println!(
            "step {}: note {} octave {} gate {} accent {} slide {}",
            step, values.note, values.octave, values.gate, values.accent, values.slide
        );
        pattern.step();
    }

    println!("Sanity test completed.");
}
